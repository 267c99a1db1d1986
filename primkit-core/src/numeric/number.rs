//! Dynamically typed number
//!
//! Carries the integer/float distinction of a JSON number so that a sequence
//! received over the wire can be summed without losing integer precision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer or floating-point value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "i64",
            Number::Float(_) => "f64",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Widen to f64 (lossy above 2^53 for integers)
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(v) => *v as f64,
            Number::Float(v) => *v,
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
