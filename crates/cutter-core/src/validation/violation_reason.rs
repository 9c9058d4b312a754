use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    MissingRequired,
    WrongType,
    EnumMismatch,
    TooShort,
    UnknownField,
}

impl ViolationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::WrongType => "wrong_type",
            Self::EnumMismatch => "enum_mismatch",
            Self::TooShort => "too_short",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl FromStr for ViolationReason {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "missing_required" => Ok(Self::MissingRequired),
            "wrong_type" => Ok(Self::WrongType),
            "enum_mismatch" => Ok(Self::EnumMismatch),
            "too_short" => Ok(Self::TooShort),
            "unknown_field" => Ok(Self::UnknownField),
            _ => Err(CoreError::InvalidViolationReason {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
