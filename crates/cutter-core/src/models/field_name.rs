use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The closed set of keys a record may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    ProjectType,
    Type,
    Description,
    Url,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        Self::Name,
        Self::ProjectType,
        Self::Type,
        Self::Description,
        Self::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ProjectType => "project_type",
            Self::Type => "type",
            Self::Description => "description",
            Self::Url => "url",
        }
    }

    /// Check whether `key` is one of the recognized field names
    pub fn is_known(key: &str) -> bool {
        Self::ALL.iter().any(|field| field.as_str() == key)
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "project_type" => Ok(Self::ProjectType),
            "type" => Ok(Self::Type),
            "description" => Ok(Self::Description),
            "url" => Ok(Self::Url),
            _ => Err(CoreError::InvalidFieldName {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
