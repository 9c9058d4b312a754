//! UI-facing view of the schema table, for form renderers.

use crate::{FieldName, FieldSpec, RECORD_SCHEMA};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiFieldKind {
    /// Free text input
    String,
    /// Pick one of `options`
    OneOf,
}

/// Type hint for one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiFieldHint {
    pub field: FieldName,
    pub kind: UiFieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<&'static str>>,
    pub required: bool,
    pub nullable: bool,
}

impl From<&FieldSpec> for UiFieldHint {
    fn from(spec: &FieldSpec) -> Self {
        let (kind, options) = match spec.allowed {
            Some(allowed) => (UiFieldKind::OneOf, Some(allowed.to_vec())),
            None => (UiFieldKind::String, None),
        };

        Self {
            field: spec.field,
            kind,
            options,
            required: spec.required,
            nullable: spec.nullable,
        }
    }
}

/// Derive one hint per declared field, in schema order
pub fn ui_hints() -> Vec<UiFieldHint> {
    RECORD_SCHEMA.iter().map(UiFieldHint::from).collect()
}
