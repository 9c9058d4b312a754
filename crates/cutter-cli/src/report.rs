//! JSON report printed by `cutter validate`.

use cutter_core::{Record, Violation, ViolationReason, Violations};

use serde::Serialize;

/// One violation as shown to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationEntry {
    pub field: String,
    pub reason: ViolationReason,
    pub message: String,
}

impl From<&Violation> for ViolationEntry {
    fn from(violation: &Violation) -> Self {
        Self {
            field: violation.field.clone(),
            reason: violation.reason,
            message: violation.message(),
        }
    }
}

/// Result of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationEntry>,
}

impl ValidationReport {
    pub fn accepted(record: Record) -> Self {
        Self {
            valid: true,
            record: Some(record),
            violations: Vec::new(),
        }
    }

    pub fn rejected(violations: &Violations) -> Self {
        Self {
            valid: false,
            record: None,
            violations: violations.iter().map(ViolationEntry::from).collect(),
        }
    }
}

impl From<Result<Record, Violations>> for ValidationReport {
    fn from(result: Result<Record, Violations>) -> Self {
        match result {
            Ok(record) => Self::accepted(record),
            Err(violations) => Self::rejected(&violations),
        }
    }
}
