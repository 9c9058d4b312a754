use crate::{FieldName, FieldSpec, JSON_SCHEMA_DRAFT, RecordType};

use serde_json::{Map, Value, json};

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_PROJECT_TYPE_LENGTH: usize = 1;

/// Field declarations in reporting order.
///
/// Required fields come first, in the order their `missing_required`
/// violations are reported.
pub static RECORD_SCHEMA: [FieldSpec; 5] = [
    FieldSpec {
        field: FieldName::Name,
        required: true,
        nullable: false,
        min_length: Some(MIN_NAME_LENGTH),
        allowed: None,
    },
    FieldSpec {
        field: FieldName::Type,
        required: true,
        nullable: false,
        min_length: None,
        allowed: Some(&RecordType::VALUES),
    },
    FieldSpec {
        field: FieldName::ProjectType,
        required: true,
        nullable: false,
        min_length: Some(MIN_PROJECT_TYPE_LENGTH),
        allowed: None,
    },
    FieldSpec {
        field: FieldName::Url,
        required: true,
        nullable: false,
        min_length: None,
        allowed: None,
    },
    FieldSpec {
        field: FieldName::Description,
        required: false,
        nullable: true,
        min_length: None,
        allowed: None,
    },
];

/// Look up the declaration for a field
pub fn spec_for(field: FieldName) -> Option<&'static FieldSpec> {
    RECORD_SCHEMA.iter().find(|spec| spec.field == field)
}

/// Render the schema table as a draft-07 JSON Schema document
pub fn json_schema() -> Value {
    let properties: Map<String, Value> = RECORD_SCHEMA
        .iter()
        .map(|spec| (spec.field.as_str().to_string(), spec.json_property()))
        .collect();

    let required: Vec<&str> = RECORD_SCHEMA
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.field.as_str())
        .collect();

    json!({
        "$schema": JSON_SCHEMA_DRAFT,
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
        "required": required,
    })
}
