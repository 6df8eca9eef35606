//! Absence handling: every operation has a defined result for empty input.

use kunai_core::fields::FieldValues;

use crate::vcard::{
    NameOrder, PhoneCategory, PhoneKind, VCardVersion, address_elements, compose_display_name,
    is_identifier_safe, is_printable_ascii, is_printable_ascii_no_crlf, join_escaped_list,
    resolve_phone_kind, split_escaped_list, to_half_width,
};

#[test_log::test]
fn classifiers_accept_empty() {
    assert!(is_printable_ascii(""));
    assert!(is_printable_ascii_no_crlf(""));
    assert!(is_identifier_safe(""));
}

#[test_log::test]
fn splitter_handles_empty_value() {
    assert_eq!(split_escaped_list("", VCardVersion::V21), vec![""]);
    assert_eq!(split_escaped_list("", VCardVersion::V30), vec![""]);
}

#[test_log::test]
fn joiner_handles_no_parts() {
    let none: [&str; 0] = [];
    assert_eq!(join_escaped_list(none, VCardVersion::V30), "");
}

#[test_log::test]
fn resolver_handles_empty_tags_and_number() {
    assert_eq!(
        resolve_phone_kind([], ""),
        PhoneKind::Known(PhoneCategory::Home)
    );
    assert_eq!(
        resolve_phone_kind(["", ""], ""),
        PhoneKind::Known(PhoneCategory::Home)
    );
}

#[test_log::test]
fn composer_handles_all_empty() {
    for order in [NameOrder::Western, NameOrder::Japanese, NameOrder::European] {
        assert_eq!(compose_display_name(order, "", "", "", "", ""), "");
    }
}

#[test_log::test]
fn address_elements_from_empty_store_row() {
    let fields = FieldValues::new();
    let elements = address_elements(&fields);
    assert!(elements.iter().all(String::is_empty));
}

#[test_log::test]
fn width_normalizer_empty_is_none() {
    let table = |_: char| -> Option<&'static str> { None };
    assert_eq!(to_half_width("", &table), None);
    assert_eq!(to_half_width("abc", &table).as_deref(), Some("abc"));
}
