use crate::FieldName;

use std::str::FromStr;

#[test]
fn test_field_name_from_str_round_trips_all() {
    for field in FieldName::ALL {
        assert_eq!(FieldName::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_field_name_rejects_unknown_key() {
    assert!(FieldName::from_str("extra").is_err());
    assert!(FieldName::from_str("projectType").is_err());
}

#[test]
fn test_field_name_is_known() {
    assert!(FieldName::is_known("project_type"));
    assert!(FieldName::is_known("description"));
    assert!(!FieldName::is_known("extra"));
    assert!(!FieldName::is_known(""));
}

#[test]
fn test_field_name_display_uses_wire_name() {
    assert_eq!(FieldName::ProjectType.to_string(), "project_type");
    assert_eq!(FieldName::Type.to_string(), "type");
}
