//! vCard field normalization.
//!
//! This module turns decoded vCard field data into store-ready values and
//! back. The outer parser hands it raw property values and `TYPE=`
//! parameter tags; it hands the outer serializer escaped values and store
//! field sets.
//!
//! ## Overview
//!
//! - [`text`] - encoding-safety classification and width normalization
//! - [`parse`] - escaped-value decoding (wire form to parts)
//! - [`build`] - escaped-value encoding (parts to wire form)
//! - [`normalize`] - phone-type inference, name ordering, address mapping
//! - [`core`] - value types, categories, and format configuration
//!
//! ## Usage
//!
//! ### Phone-type inference
//!
//! ```rust
//! use kunai_vcard::vcard::{PhoneCategory, PhoneKind, resolve_phone_kind};
//!
//! let kind = resolve_phone_kind(["HOME", "FAX"], "+1-555-0100");
//! assert_eq!(kind, PhoneKind::Known(PhoneCategory::FaxHome));
//!
//! let kind = resolve_phone_kind(["X-Ferry"], "+1-555-0100");
//! assert_eq!(kind, PhoneKind::Custom("FERRY".to_string()));
//! ```
//!
//! ### Escaped multi-part values
//!
//! ```rust
//! use kunai_vcard::vcard::{VCardVersion, join_escaped_list, split_escaped_list};
//!
//! let parts = split_escaped_list(r"Shimada\;Clan;;Hanamura", VCardVersion::V30);
//! assert_eq!(parts, vec!["Shimada;Clan", "", "Hanamura"]);
//! assert_eq!(join_escaped_list(&parts, VCardVersion::V30), r"Shimada\;Clan;;Hanamura");
//! ```
//!
//! ## Totality
//!
//! Nothing in this module fails on malformed input: unknown tags become
//! custom labels, unknown escapes keep their backslash, and absent store
//! fields read as empty strings.

pub mod build;
pub mod core;
pub mod normalize;
pub mod parse;
pub mod text;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{escape_text, join_escaped_list};
pub use core::{
    AddressCategory, AddressRecord, ImProtocol, NameOrder, NameParts, PhoneCategory, PhoneKind,
    PhoneNumberFormat, VCardConfig, VCardVersion,
};
pub use normalize::{
    address_elements, compose_display_name, compose_name, order_name_parts, resolve_phone_kind,
    write_address_record,
};
pub use parse::{split_escaped_list, unescape_char};
pub use text::{
    WidthTable, is_identifier_safe, is_printable_ascii, is_printable_ascii_no_crlf, to_half_width,
};
