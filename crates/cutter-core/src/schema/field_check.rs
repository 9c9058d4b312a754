use crate::ViolationReason;

/// Outcome of checking one input value against its `FieldSpec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// Key not present in the input
    Absent,
    /// Value satisfies the spec. `None` only for null on a nullable field.
    Accepted(Option<String>),
    Rejected(ViolationReason),
}

impl FieldCheck {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
