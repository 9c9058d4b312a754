//! Schema table for cookie cutter records.
//!
//! `RECORD_SCHEMA` is the only place the record shape is declared.
//! Validation, the exported JSON Schema document and the UI field hints
//! are all derived from it.

pub mod field_check;
pub mod field_spec;
pub mod record_schema;
pub mod ui_hint;
