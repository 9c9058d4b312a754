use crate::{FieldName, JSON_SCHEMA_DRAFT, RECORD_SCHEMA, json_schema, spec_for};

use serde_json::json;

#[test]
fn test_schema_declares_every_field_once() {
    for field in FieldName::ALL {
        let count = RECORD_SCHEMA
            .iter()
            .filter(|spec| spec.field == field)
            .count();
        assert_eq!(count, 1, "{field} declared {count} times");
    }
}

#[test]
fn test_only_description_is_optional() {
    for spec in RECORD_SCHEMA.iter() {
        assert_eq!(spec.required, spec.field != FieldName::Description);
        assert_eq!(spec.nullable, !spec.required);
    }
}

#[test]
fn test_spec_for_finds_declaration() {
    let spec = spec_for(FieldName::Name).unwrap();
    assert_eq!(spec.min_length, Some(3));
}

#[test]
fn test_json_schema_is_closed_draft_07_object() {
    let schema = json_schema();

    assert_eq!(schema["$schema"], json!(JSON_SCHEMA_DRAFT));
    assert_eq!(schema["type"], json!("object"));
    assert_eq!(schema["additionalProperties"], json!(false));
}

#[test]
fn test_json_schema_required_list() {
    let schema = json_schema();

    assert_eq!(
        schema["required"],
        json!(["name", "type", "project_type", "url"])
    );
}

#[test]
fn test_json_schema_properties() {
    let schema = json_schema();
    let properties = &schema["properties"];

    assert_eq!(
        properties["name"],
        json!({ "type": "string", "minLength": 3 })
    );
    assert_eq!(
        properties["type"],
        json!({ "type": "string", "enum": ["dashboard", "project"] })
    );
    assert_eq!(properties["url"], json!({ "type": "string" }));
    assert_eq!(
        properties["description"]["oneOf"][1],
        json!({ "type": "null" })
    );
    assert_eq!(properties.as_object().unwrap().len(), 5);
}
