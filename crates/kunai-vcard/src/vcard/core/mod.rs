//! Core value types for the normalization engine.

pub mod category;
pub mod config;
pub mod structured;

pub use category::{
    AddressCategory, ImProtocol, PhoneCategory, PhoneKind, is_format_only_type_tag,
    is_mobile_label, tags,
};
pub use config::{NameOrder, PhoneNumberFormat, VCardConfig, VCardVersion};
pub use structured::{AddressRecord, NameParts};
