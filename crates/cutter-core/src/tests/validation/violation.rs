use crate::{Violation, ViolationReason};

use std::str::FromStr;

#[test]
fn test_violation_display_is_reason_then_field() {
    let violation = Violation::new("name", ViolationReason::TooShort);
    assert_eq!(violation.to_string(), "too_short:name");
}

#[test]
fn test_violation_messages_use_schema_constraints() {
    assert_eq!(
        Violation::new("name", ViolationReason::TooShort).message(),
        "name must be at least 3 characters"
    );
    assert_eq!(
        Violation::new("type", ViolationReason::EnumMismatch).message(),
        "type must be one of: dashboard, project"
    );
    assert_eq!(
        Violation::new("url", ViolationReason::MissingRequired).message(),
        "url is required"
    );
    assert_eq!(
        Violation::new("extra", ViolationReason::UnknownField).message(),
        "extra is not a recognized field"
    );
}

#[test]
fn test_violation_serializes_reason_snake_case() {
    let violation = Violation::new("project_type", ViolationReason::MissingRequired);
    let json = serde_json::to_string(&violation).unwrap();

    assert_eq!(
        json,
        r#"{"field":"project_type","reason":"missing_required"}"#
    );
}

#[test]
fn test_violation_reason_from_str() {
    for reason in [
        ViolationReason::MissingRequired,
        ViolationReason::WrongType,
        ViolationReason::EnumMismatch,
        ViolationReason::TooShort,
        ViolationReason::UnknownField,
    ] {
        assert_eq!(ViolationReason::from_str(reason.as_str()).unwrap(), reason);
    }
    assert!(ViolationReason::from_str("bogus").is_err());
}
