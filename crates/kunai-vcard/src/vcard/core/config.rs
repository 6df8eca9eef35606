//! Format configuration supplied by the host application.
//!
//! The engine never derives these values itself; the outer parse and
//! serialize pipeline decides them (from the VERSION property, the device
//! profile, and user locale) and passes them in per call.

use serde::Deserialize;

use crate::error::{VCardError, VCardResult};

/// Interchange format revision, governing escape-sequence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VCardVersion {
    /// vCard 2.1.
    V21,
    /// vCard 3.0.
    #[default]
    V30,
}

impl VCardVersion {
    /// Parses a VERSION property value.
    ///
    /// ## Errors
    /// Returns an error when the value names an unsupported revision.
    pub fn parse(value: &str) -> VCardResult<Self> {
        match value.trim() {
            "2.1" => Ok(Self::V21),
            "3.0" => Ok(Self::V30),
            other => Err(VCardError::ParseError(format!(
                "unsupported vCard version: {other}"
            ))),
        }
    }

    /// Returns the VERSION property value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name component ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// Given, middle, family.
    #[default]
    Western,
    /// Family, middle, given (with a Latin-script exception, see
    /// [`crate::vcard::normalize::order_name_parts`]).
    Japanese,
    /// Middle, given, family.
    European,
}

/// Dialing-plan hint for downstream number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneNumberFormat {
    /// North American numbering plan.
    Nanp,
    /// Japanese numbering plan.
    Japan,
}

/// Format configuration for a single encode or decode run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VCardConfig {
    /// Format revision in effect.
    pub version: VCardVersion,
    /// Name ordering policy.
    pub name_order: NameOrder,
    /// Whether the producing or consuming device uses Japanese
    /// conventions (address ordering, dialing plan).
    pub japanese_device: bool,
}

impl VCardConfig {
    /// Returns the dialing-plan hint for this profile.
    #[must_use]
    pub const fn phone_number_format(&self) -> PhoneNumberFormat {
        if self.japanese_device {
            PhoneNumberFormat::Japan
        } else {
            PhoneNumberFormat::Nanp
        }
    }
}
