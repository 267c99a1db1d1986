//! Numeric error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("{function} is not defined for negative numbers (got {n})")]
    InvalidArgument { function: &'static str, n: i64 },

    #[error("{function} overflowed: {detail}")]
    Overflow { function: &'static str, detail: String },
}

impl MathError {
    pub fn negative(function: &'static str, n: i64) -> Self {
        MathError::InvalidArgument { function, n }
    }

    pub fn overflow(function: &'static str, detail: impl Into<String>) -> Self {
        MathError::Overflow {
            function,
            detail: detail.into(),
        }
    }

    /// Stable, machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            MathError::InvalidArgument { .. } => "invalid_argument",
            MathError::Overflow { .. } => "overflow",
        }
    }
}
