//! Round-trip fidelity across the split/join and store mapping layers.

use kunai_core::fields::{FIELD_POSTAL_LABEL, FIELD_POSTAL_TYPE, FieldValues};

use crate::vcard::{
    AddressCategory, AddressRecord, VCardConfig, VCardVersion, address_elements,
    join_escaped_list, split_escaped_list, write_address_record,
};

fn assert_split_join_identity(parts: &[&str], version: VCardVersion) {
    let joined = join_escaped_list(parts, version);
    let back = split_escaped_list(&joined, version);
    assert_eq!(back, parts, "round trip failed for {parts:?} under {version:?}");
}

#[test_log::test]
fn split_join_identity_v30() {
    assert_split_join_identity(&["a", "b", "c"], VCardVersion::V30);
    assert_split_join_identity(&["", "", ""], VCardVersion::V30);
    assert_split_join_identity(&["semi;colon", "comma,part", "back\\slash"], VCardVersion::V30);
    assert_split_join_identity(&["multi\nline", "plain"], VCardVersion::V30);
}

#[test_log::test]
fn split_join_identity_v21() {
    assert_split_join_identity(&["a", "b", "c"], VCardVersion::V21);
    assert_split_join_identity(&["semi;colon", "back\\slash"], VCardVersion::V21);
    // 2.1 passes commas and newlines through untouched.
    assert_split_join_identity(&["comma,part", "multi\nline"], VCardVersion::V21);
}

#[test_log::test]
fn adr_tuple_through_wire_form() {
    let record = AddressRecord {
        po_box: "PO 12".into(),
        extended: "Unit; 4".into(),
        street: "123 Main St".into(),
        locality: "Anytown".into(),
        region: "CA".into(),
        postal_code: "12345".into(),
        country: "USA".into(),
        ..AddressRecord::default()
    };

    let slots = record.slots();
    let wire = join_escaped_list(slots, VCardVersion::V30);
    let decoded = split_escaped_list(&wire, VCardVersion::V30);
    assert_eq!(decoded, slots);
}

#[test_log::test]
fn address_record_through_store_fields() {
    let record = AddressRecord {
        po_box: "PO 12".into(),
        extended: "Unit 4".into(),
        street: "123 Main St".into(),
        locality: "Anytown".into(),
        region: "CA".into(),
        postal_code: "12345".into(),
        country: "USA".into(),
        category: AddressCategory::Custom("Cabin".into()),
        is_primary: true,
    };

    let mut fields = FieldValues::new();
    write_address_record(&record, &VCardConfig::default(), &mut fields);

    // The seven slots come back verbatim.
    let elements = address_elements(&fields);
    assert_eq!(
        elements,
        ["PO 12", "Unit 4", "123 Main St", "Anytown", "CA", "12345", "USA"]
    );

    // Category and label are store-level fields, checked separately.
    assert_eq!(fields.get_str(FIELD_POSTAL_TYPE), Some("custom"));
    assert_eq!(fields.get_str(FIELD_POSTAL_LABEL), Some("Cabin"));
}
