//! Postal address mapping between the store field set and the adr tuple.
//!
//! The store keeps one field per slot; the wire format carries the seven
//! slots as one escaped tuple. Decoding reads store fields into the fixed
//! slot order; encoding writes a full record back, category and markers
//! included.

use kunai_core::fields::{
    FIELD_IS_PRIMARY, FIELD_POSTAL_CITY, FIELD_POSTAL_COUNTRY, FIELD_POSTAL_FORMATTED,
    FIELD_POSTAL_LABEL, FIELD_POSTAL_NEIGHBORHOOD, FIELD_POSTAL_POBOX, FIELD_POSTAL_POSTCODE,
    FIELD_POSTAL_REGION, FIELD_POSTAL_STREET, FIELD_POSTAL_TYPE, FieldValues,
};

use crate::vcard::core::category::AddressCategory;
use crate::vcard::core::config::VCardConfig;
use crate::vcard::core::structured::AddressRecord;

/// Reads the seven adr slots from a store row, in serialized tuple order
/// (PO box, extended address, street, locality, region, postal code,
/// country).
///
/// Every slot is non-null: absent fields read as empty strings. The store
/// keeps the extended address in the neighborhood field and the locality
/// in the city field.
#[must_use]
pub fn address_elements(fields: &FieldValues) -> [String; 7] {
    let slot = |key: &str| fields.get_str(key).unwrap_or_default().to_string();

    // A present-but-empty region reads the same as an absent one.
    let region = fields
        .get_str(FIELD_POSTAL_REGION)
        .filter(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string();

    [
        slot(FIELD_POSTAL_POBOX),
        slot(FIELD_POSTAL_NEIGHBORHOOD),
        slot(FIELD_POSTAL_STREET),
        slot(FIELD_POSTAL_CITY),
        region,
        slot(FIELD_POSTAL_POSTCODE),
        slot(FIELD_POSTAL_COUNTRY),
    ]
}

/// Writes an address record into a store row.
///
/// All seven slots are written; the label only for custom categories; the
/// formatted address from the populated slots; the primary marker only
/// when set (absent means not primary, never false).
#[tracing::instrument(skip(record, config, fields), fields(category = record.category.as_str()))]
pub fn write_address_record(
    record: &AddressRecord,
    config: &VCardConfig,
    fields: &mut FieldValues,
) {
    fields.put_text(FIELD_POSTAL_TYPE, record.category.as_str());
    if let AddressCategory::Custom(label) = &record.category {
        fields.put_text(FIELD_POSTAL_LABEL, label.clone());
    }

    fields.put_text(FIELD_POSTAL_POBOX, record.po_box.clone());
    fields.put_text(FIELD_POSTAL_NEIGHBORHOOD, record.extended.clone());
    fields.put_text(FIELD_POSTAL_STREET, record.street.clone());
    fields.put_text(FIELD_POSTAL_CITY, record.locality.clone());
    fields.put_text(FIELD_POSTAL_REGION, record.region.clone());
    fields.put_text(FIELD_POSTAL_POSTCODE, record.postal_code.clone());
    fields.put_text(FIELD_POSTAL_COUNTRY, record.country.clone());

    fields.put_text(FIELD_POSTAL_FORMATTED, record.formatted_address(config));
    if record.is_primary {
        fields.put_bool(FIELD_IS_PRIMARY, true);
    }
}
