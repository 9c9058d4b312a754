use crate::{FieldName, UiFieldKind, ui_hints};

use serde_json::json;

#[test]
fn test_ui_hints_cover_schema_in_order() {
    let fields: Vec<FieldName> = ui_hints().iter().map(|hint| hint.field).collect();

    assert_eq!(
        fields,
        vec![
            FieldName::Name,
            FieldName::Type,
            FieldName::ProjectType,
            FieldName::Url,
            FieldName::Description,
        ]
    );
}

#[test]
fn test_ui_hints_mark_required_fields() {
    for hint in ui_hints() {
        assert_eq!(hint.required, hint.field != FieldName::Description);
    }
}

#[test]
fn test_type_hint_is_one_of_with_options() {
    let hints = ui_hints();
    let hint = hints
        .iter()
        .find(|hint| hint.field == FieldName::Type)
        .unwrap();

    assert_eq!(hint.kind, UiFieldKind::OneOf);
    assert_eq!(hint.options, Some(vec!["dashboard", "project"]));
}

#[test]
fn test_string_hint_serializes_without_options() {
    let hints = ui_hints();
    let value = serde_json::to_value(&hints[0]).unwrap();

    assert_eq!(
        value,
        json!({ "field": "name", "kind": "string", "required": true, "nullable": false })
    );
}
