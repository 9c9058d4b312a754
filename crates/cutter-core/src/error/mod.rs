use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid record type: {value} {location}")]
    InvalidRecordType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid field name: {value} {location}")]
    InvalidFieldName {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid violation reason: {value} {location}")]
    InvalidViolationReason {
        value: String,
        location: ErrorLocation,
    },

    #[error("Expected a JSON object, got {found} {location}")]
    NotAnObject {
        found: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a not-an-object error for the given JSON kind
    #[track_caller]
    pub fn not_an_object(found: &'static str) -> Self {
        CoreError::NotAnObject {
            found,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
