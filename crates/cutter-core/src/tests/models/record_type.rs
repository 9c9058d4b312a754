use crate::RecordType;

use std::str::FromStr;

#[test]
fn test_record_type_as_str() {
    assert_eq!(RecordType::Dashboard.as_str(), "dashboard");
    assert_eq!(RecordType::Project.as_str(), "project");
}

#[test]
fn test_record_type_from_str() {
    assert_eq!(
        RecordType::from_str("dashboard").unwrap(),
        RecordType::Dashboard
    );
    assert_eq!(
        RecordType::from_str("project").unwrap(),
        RecordType::Project
    );
    assert!(RecordType::from_str("widget").is_err());
    assert!(RecordType::from_str("Dashboard").is_err());
}

#[test]
fn test_record_type_values_match_variants() {
    for value in RecordType::VALUES {
        let parsed = RecordType::from_str(value).unwrap();
        assert_eq!(parsed.as_str(), value);
    }
}

#[test]
fn test_record_type_serializes_snake_case() {
    let json = serde_json::to_string(&RecordType::Dashboard).unwrap();
    assert_eq!(json, "\"dashboard\"");
}
