//! Structured contact record types.
//!
//! These mirror the multi-part vCard properties (N, ADR) on the store
//! side: fixed-arity string slots rather than the wire's escaped tuples.

use super::category::AddressCategory;
use super::config::VCardConfig;

/// Structured name components.
///
/// Every component is independently empty-able; ordering is computed per
/// format configuration, never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    /// Family name (surname).
    pub family: String,
    /// Middle name.
    pub middle: String,
    /// Given name (first name).
    pub given: String,
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: String,
    /// Honorific suffix (e.g., "Jr.").
    pub suffix: String,
}

impl NameParts {
    /// Creates an empty name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a name with family and given components.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.middle.is_empty()
            && self.given.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
    }
}

/// Structured postal address record.
///
/// The seven slots mirror the serialized adr tuple in order. Decoding
/// never leaves a slot missing, so all slots are plain strings with empty
/// standing for absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    /// Post office box.
    pub po_box: String,
    /// Extended address (apartment, suite, neighborhood).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
    /// Store category for this entry.
    pub category: AddressCategory,
    /// Whether this is the primary postal entry.
    pub is_primary: bool,
}

impl AddressRecord {
    /// Creates an empty record with the default (home) category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slots in serialized tuple order.
    #[must_use]
    pub fn slots(&self) -> [&str; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Returns whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|s| s.is_empty())
    }

    /// Formats the populated slots as a single display line.
    ///
    /// Japanese device profiles list components country-first.
    #[must_use]
    pub fn formatted_address(&self, config: &VCardConfig) -> String {
        let mut parts: Vec<&str> = self
            .slots()
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if config.japanese_device {
            parts.reverse();
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parts_simple() {
        let name = NameParts::simple("Doe", "John");
        assert_eq!(name.family, "Doe");
        assert_eq!(name.given, "John");
        assert!(!name.is_empty());
    }

    #[test]
    fn name_parts_empty() {
        assert!(NameParts::new().is_empty());
    }

    #[test]
    fn address_slot_order() {
        let record = AddressRecord {
            po_box: "PO 12".into(),
            street: "123 Main St".into(),
            country: "USA".into(),
            ..AddressRecord::default()
        };
        assert_eq!(
            record.slots(),
            ["PO 12", "", "123 Main St", "", "", "", "USA"]
        );
    }

    #[test]
    fn formatted_address_western() {
        let record = AddressRecord {
            street: "123 Main St".into(),
            locality: "Anytown".into(),
            region: "CA".into(),
            postal_code: "12345".into(),
            country: "USA".into(),
            ..AddressRecord::default()
        };
        assert_eq!(
            record.formatted_address(&VCardConfig::default()),
            "123 Main St Anytown CA 12345 USA"
        );
    }

    #[test]
    fn formatted_address_japanese_device_reverses() {
        let config = VCardConfig {
            japanese_device: true,
            ..VCardConfig::default()
        };
        let record = AddressRecord {
            street: "1-2-3".into(),
            locality: "Shibuya".into(),
            country: "Japan".into(),
            ..AddressRecord::default()
        };
        assert_eq!(record.formatted_address(&config), "Japan Shibuya 1-2-3");
    }

    #[test]
    fn empty_record_formats_empty() {
        let record = AddressRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.formatted_address(&VCardConfig::default()), "");
    }
}
