use crate::{FieldCheck, FieldName, ViolationReason, spec_for};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_absent_value_when_checked_then_absent() {
    // Given
    let spec = spec_for(FieldName::Name).unwrap();

    // When
    let check = spec.check(None);

    // Then
    assert_that!(check, eq(&FieldCheck::Absent));
}

#[test]
fn given_null_on_nullable_field_when_checked_then_accepted_without_value() {
    let spec = spec_for(FieldName::Description).unwrap();

    let check = spec.check(Some(&json!(null)));

    assert_that!(check, eq(&FieldCheck::Accepted(None)));
}

#[test]
fn given_null_on_required_field_when_checked_then_wrong_type() {
    let spec = spec_for(FieldName::Url).unwrap();

    let check = spec.check(Some(&json!(null)));

    assert_that!(check, eq(&FieldCheck::Rejected(ViolationReason::WrongType)));
}

#[test]
fn given_number_for_enum_field_when_checked_then_wrong_type_not_enum_mismatch() {
    let spec = spec_for(FieldName::Type).unwrap();

    let check = spec.check(Some(&json!(7)));

    assert_that!(check, eq(&FieldCheck::Rejected(ViolationReason::WrongType)));
}

#[test]
fn given_value_outside_enum_when_checked_then_enum_mismatch() {
    let spec = spec_for(FieldName::Type).unwrap();

    let check = spec.check(Some(&json!("widget")));

    assert_that!(
        check,
        eq(&FieldCheck::Rejected(ViolationReason::EnumMismatch))
    );
}

#[test]
fn given_multibyte_name_when_checked_then_length_counts_characters() {
    let spec = spec_for(FieldName::Name).unwrap();

    // Three characters, six bytes
    let check = spec.check(Some(&json!("äöü")));

    assert_that!(check, eq(&FieldCheck::Accepted(Some("äöü".to_string()))));
}

#[test]
fn given_empty_project_type_when_checked_then_too_short() {
    let spec = spec_for(FieldName::ProjectType).unwrap();

    let check = spec.check(Some(&json!("")));

    assert_that!(check, eq(&FieldCheck::Rejected(ViolationReason::TooShort)));
}

#[test]
fn given_nullable_spec_when_rendered_then_one_of_string_or_null() {
    let spec = spec_for(FieldName::Description).unwrap();

    let property = spec.json_property();

    assert_that!(
        property,
        eq(&json!({ "oneOf": [{ "type": "string" }, { "type": "null" }] }))
    );
}
