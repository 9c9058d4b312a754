//! Record entity - a validated cookie cutter descriptor.

use crate::RecordType;

use serde::{Deserialize, Serialize};

/// A cookie cutter that passed validation.
/// Only `RecordValidator` produces these from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub project_type: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// `None` when the input omitted the field or sent null
    pub description: Option<String>,
    pub url: String,
}

impl Record {
    /// Check if the record carries a description
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// Check if the record scaffolds a dashboard
    pub fn is_dashboard(&self) -> bool {
        self.record_type == RecordType::Dashboard
    }
}
