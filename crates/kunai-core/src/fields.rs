//! Abstract contact-store field set.
//!
//! ## Summary
//! The local address-book store exposes typed fields per contact data row.
//! This module models that surface as an ordered field map so mapping code
//! can read and write rows without a live store behind it. Field keys are
//! shared constants, kept next to the accessors that use them.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Key prefix for structured postal data fields.
pub const POSTAL_PREFIX: &str = "postal";

/// Post office box slot.
pub const FIELD_POSTAL_POBOX: &str = const_str::concat!(POSTAL_PREFIX, "_pobox");
/// Neighborhood slot (closest store analog of the extended-address slot).
pub const FIELD_POSTAL_NEIGHBORHOOD: &str = const_str::concat!(POSTAL_PREFIX, "_neighborhood");
/// Street slot.
pub const FIELD_POSTAL_STREET: &str = const_str::concat!(POSTAL_PREFIX, "_street");
/// City slot.
pub const FIELD_POSTAL_CITY: &str = const_str::concat!(POSTAL_PREFIX, "_city");
/// Region (state or province) slot.
pub const FIELD_POSTAL_REGION: &str = const_str::concat!(POSTAL_PREFIX, "_region");
/// Postal code slot.
pub const FIELD_POSTAL_POSTCODE: &str = const_str::concat!(POSTAL_PREFIX, "_postcode");
/// Country slot.
pub const FIELD_POSTAL_COUNTRY: &str = const_str::concat!(POSTAL_PREFIX, "_country");
/// Postal entry category.
pub const FIELD_POSTAL_TYPE: &str = const_str::concat!(POSTAL_PREFIX, "_type");
/// Free-text label for custom postal categories.
pub const FIELD_POSTAL_LABEL: &str = const_str::concat!(POSTAL_PREFIX, "_label");
/// Single-line formatted address.
pub const FIELD_POSTAL_FORMATTED: &str = const_str::concat!(POSTAL_PREFIX, "_formatted");
/// Marks the primary entry of its kind. Present only when set.
pub const FIELD_IS_PRIMARY: &str = "is_primary";

/// A typed value in the contact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text field.
    Text(String),
    /// Integer field.
    Integer(i64),
    /// Boolean field.
    Bool(bool),
}

impl FieldValue {
    /// Returns the text content if this is a text field.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this is an integer field.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content if this is a boolean field.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// An ordered field set for a single contact data row.
///
/// Reads of absent fields return `None`; writes overwrite silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    entries: BTreeMap<&'static str, FieldValue>,
}

impl FieldValues {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text field.
    pub fn put_text(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.insert(key, FieldValue::Text(value.into()));
    }

    /// Sets an integer field.
    pub fn put_integer(&mut self, key: &'static str, value: i64) {
        self.entries.insert(key, FieldValue::Integer(value));
    }

    /// Sets a boolean field.
    pub fn put_bool(&mut self, key: &'static str, value: bool) {
        self.entries.insert(key, FieldValue::Bool(value));
    }

    /// Returns the text content of a field, or `None` when the field is
    /// absent or not text.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(FieldValue::as_str)
    }

    /// Returns the integer content of a field.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(FieldValue::as_int)
    }

    /// Returns the boolean content of a field.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(FieldValue::as_bool)
    }

    /// Returns whether the field is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the set holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the field set for store hand-off.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
