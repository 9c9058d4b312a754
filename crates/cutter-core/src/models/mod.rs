pub mod field_name;
pub mod record;
pub mod record_type;
