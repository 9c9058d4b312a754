use crate::{FieldName, FieldSpec, ViolationReason, spec_for};

use serde::{Deserialize, Serialize};

/// A single field-level constraint failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Offending key. Not restricted to `FieldName` because unknown keys are reported too.
    pub field: String,
    pub reason: ViolationReason,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: ViolationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Human-readable sentence for display next to the form field
    pub fn message(&self) -> String {
        let spec = self.spec();
        let field = &self.field;

        match self.reason {
            ViolationReason::MissingRequired => format!("{field} is required"),
            ViolationReason::WrongType => format!("{field} must be a string"),
            ViolationReason::EnumMismatch => match spec.and_then(|spec| spec.allowed) {
                Some(allowed) => format!("{field} must be one of: {}", allowed.join(", ")),
                None => format!("{field} is not an accepted value"),
            },
            ViolationReason::TooShort => match spec.and_then(|spec| spec.min_length) {
                Some(min_length) => format!("{field} must be at least {min_length} characters"),
                None => format!("{field} is too short"),
            },
            ViolationReason::UnknownField => format!("{field} is not a recognized field"),
        }
    }

    fn spec(&self) -> Option<&'static FieldSpec> {
        self.field.parse::<FieldName>().ok().and_then(spec_for)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.reason, self.field)
    }
}
