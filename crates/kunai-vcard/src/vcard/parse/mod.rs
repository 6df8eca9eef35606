//! Escaped-value decoding (wire form to parts).

mod values;

pub use values::{split_escaped_list, unescape_char};
