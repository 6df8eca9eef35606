//! Normalization passes over decoded field data.
//!
//! Everything here is total: malformed input resolves to a defined value
//! (a custom label, an empty slot, the default category), never an error.

mod address;
mod name;
mod phone;

pub use address::{address_elements, write_address_record};
pub use name::{compose_display_name, compose_name, order_name_parts};
pub use phone::resolve_phone_kind;
