use thiserror::Error;

/// Why an add was refused. Nothing is mutated, awarded or written when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a date like 2024-01-31, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("'{value}' is not a valid {field} (expected one of: {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidDate { field, .. } => field,
            ValidationError::InvalidChoice { field, .. } => field,
        }
    }
}
