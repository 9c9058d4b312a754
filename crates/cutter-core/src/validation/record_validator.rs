use crate::{
    CoreError, CoreResult, FieldCheck, FieldName, RECORD_SCHEMA, Record, RecordType, Violation,
    ViolationReason, Violations,
};

use log::{debug, trace};
use serde_json::{Map, Value};

/// Validates untyped form input against `RECORD_SCHEMA`.
///
/// Validation is exhaustive: every violation is collected so a form can
/// show all problems at once. Reporting order is fixed:
/// 1. unknown keys, sorted
/// 2. missing required fields, in schema order
/// 3. type, enumeration and length failures, in schema order
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(input: &Map<String, Value>) -> Result<Record, Violations> {
        debug!("Validating record with {} field(s)", input.len());

        let mut violations = Vec::new();

        let mut unknown: Vec<&String> = input
            .keys()
            .filter(|key| !FieldName::is_known(key))
            .collect();
        unknown.sort();
        violations.extend(
            unknown
                .into_iter()
                .map(|key| Violation::new(key.as_str(), ViolationReason::UnknownField)),
        );

        let checks: Vec<(FieldName, bool, FieldCheck)> = RECORD_SCHEMA
            .iter()
            .map(|spec| {
                let check = spec.check(input.get(spec.field.as_str()));
                (spec.field, spec.required, check)
            })
            .collect();

        for (field, required, check) in &checks {
            if *required && check.is_absent() {
                violations.push(Violation::new(
                    field.as_str(),
                    ViolationReason::MissingRequired,
                ));
            }
        }

        let mut draft = RecordDraft::default();
        for (field, _, check) in checks {
            match check {
                FieldCheck::Accepted(value) => draft.set(field, value),
                FieldCheck::Rejected(reason) => {
                    violations.push(Violation::new(field.as_str(), reason));
                }
                FieldCheck::Absent => {}
            }
        }

        let result = draft.finish(violations);

        match &result {
            Ok(record) => debug!("Record accepted: type={}", record.record_type),
            Err(violations) => {
                debug!("Record rejected with {} violation(s)", violations.len());
                for violation in violations {
                    trace!("  {}", violation);
                }
            }
        }

        result
    }

    /// Validate any JSON value. Only objects can be records.
    #[track_caller]
    pub fn validate_value(value: &Value) -> CoreResult<Result<Record, Violations>> {
        match value {
            Value::Object(map) => Ok(Self::validate(map)),
            other => Err(CoreError::not_an_object(json_kind(other))),
        }
    }
}

/// Accepted values gathered during the pass
#[derive(Default)]
struct RecordDraft {
    name: Option<String>,
    record_type: Option<RecordType>,
    project_type: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl RecordDraft {
    fn set(&mut self, field: FieldName, value: Option<String>) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Type => {
                self.record_type = value.and_then(|value| value.parse().ok());
            }
            FieldName::ProjectType => self.project_type = value,
            FieldName::Description => self.description = value,
            FieldName::Url => self.url = value,
        }
    }

    // Every required field is either accepted or has a violation recorded,
    // so an empty violation list implies all required values are present.
    fn finish(self, violations: Vec<Violation>) -> Result<Record, Violations> {
        match (self.name, self.record_type, self.project_type, self.url) {
            (Some(name), Some(record_type), Some(project_type), Some(url))
                if violations.is_empty() =>
            {
                Ok(Record {
                    name,
                    project_type,
                    record_type,
                    description: self.description,
                    url,
                })
            }
            _ => Err(Violations::new(violations)),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
