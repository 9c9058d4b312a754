use crate::{FieldCheck, FieldName, ViolationReason};

use serde_json::{Map, Value, json};

/// Declared constraints for a single record field.
///
/// Every field is text. Constraints narrow the accepted text further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FieldName,
    /// Absence is a `missing_required` violation
    pub required: bool,
    /// JSON null is accepted and treated like absence
    pub nullable: bool,
    /// Minimum length in characters
    pub min_length: Option<usize>,
    /// Closed set of accepted values
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    /// Classify one input value against this spec.
    ///
    /// Type is checked first, then enumeration membership, then length.
    /// Only the first failing constraint is reported for a field.
    pub fn check(&self, value: Option<&Value>) -> FieldCheck {
        let value = match value {
            None => return FieldCheck::Absent,
            Some(Value::Null) if self.nullable => return FieldCheck::Accepted(None),
            Some(value) => value,
        };

        let Some(text) = value.as_str() else {
            return FieldCheck::Rejected(ViolationReason::WrongType);
        };

        if let Some(allowed) = self.allowed
            && !allowed.contains(&text)
        {
            return FieldCheck::Rejected(ViolationReason::EnumMismatch);
        }

        if let Some(min_length) = self.min_length
            && text.chars().count() < min_length
        {
            return FieldCheck::Rejected(ViolationReason::TooShort);
        }

        FieldCheck::Accepted(Some(text.to_string()))
    }

    /// Render this field as a draft-07 JSON Schema property
    pub fn json_property(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".to_string(), json!("string"));

        if let Some(min_length) = self.min_length {
            property.insert("minLength".to_string(), json!(min_length));
        }

        if let Some(allowed) = self.allowed {
            property.insert("enum".to_string(), json!(allowed));
        }

        if self.nullable {
            json!({ "oneOf": [Value::Object(property), { "type": "null" }] })
        } else {
            Value::Object(property)
        }
    }
}
