use crate::{Record, RecordType};

use serde_json::json;

fn sample() -> Record {
    Record {
        name: "Sales".to_string(),
        project_type: "analytics".to_string(),
        record_type: RecordType::Dashboard,
        description: None,
        url: "http://x".to_string(),
    }
}

#[test]
fn test_record_serializes_type_under_wire_name() {
    let value = serde_json::to_value(sample()).unwrap();

    assert_eq!(value["type"], json!("dashboard"));
    assert_eq!(value["description"], json!(null));
    assert!(value.get("record_type").is_none());
}

#[test]
fn test_record_has_description() {
    let mut record = sample();
    assert!(!record.has_description());

    record.description = Some("Quarterly numbers".to_string());
    assert!(record.has_description());
}

#[test]
fn test_record_is_dashboard() {
    let mut record = sample();
    assert!(record.is_dashboard());

    record.record_type = RecordType::Project;
    assert!(!record.is_dashboard());
}
