pub mod error;
pub mod models;
pub mod schema;
pub mod validation;


pub use error::{CoreError, CoreResult};
pub use models::field_name::FieldName;
pub use models::record::Record;
pub use models::record_type::RecordType;
pub use schema::field_check::FieldCheck;
pub use schema::field_spec::FieldSpec;
pub use schema::record_schema::{RECORD_SCHEMA, json_schema, spec_for};
pub use schema::ui_hint::{UiFieldHint, UiFieldKind, ui_hints};
pub use validation::record_validator::RecordValidator;
pub use validation::violation::Violation;
pub use validation::violation_reason::ViolationReason;
pub use validation::violations::Violations;

/// Draft of JSON Schema the exported schema document declares.
pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";
