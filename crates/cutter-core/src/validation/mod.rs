pub mod record_validator;
pub mod violation;
pub mod violation_reason;
pub mod violations;
