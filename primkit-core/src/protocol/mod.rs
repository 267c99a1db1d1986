//! JSON-RPC Protocol definitions
//!
//! Defines the line protocol spoken by primkit-server: one request object per
//! input line, one response object per output line.

use crate::numeric::{MathError, Number};
use serde::{Deserialize, Serialize};

/// Request to primkit-server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    #[serde(rename = "sum")]
    Sum { values: Vec<Number> },

    #[serde(rename = "mean")]
    Mean { values: Vec<Number> },

    #[serde(rename = "factorial")]
    Factorial { n: i64 },

    #[serde(rename = "is_prime")]
    IsPrime { n: i64 },

    #[serde(rename = "to_upper")]
    ToUpper { text: String },

    #[serde(rename = "to_lower")]
    ToLower { text: String },

    #[serde(rename = "trim")]
    Trim { text: String },

    /// Split `text` on a single-character delimiter
    #[serde(rename = "split")]
    Split { text: String, delimiter: char },

    #[serde(rename = "is_palindrome")]
    IsPalindrome { text: String },

    /// Stop the server after answering
    #[serde(rename = "shutdown")]
    Shutdown,
}

impl Request {
    /// Wire name of the method
    pub fn method(&self) -> &'static str {
        match self {
            Request::Sum { .. } => "sum",
            Request::Mean { .. } => "mean",
            Request::Factorial { .. } => "factorial",
            Request::IsPrime { .. } => "is_prime",
            Request::ToUpper { .. } => "to_upper",
            Request::ToLower { .. } => "to_lower",
            Request::Trim { .. } => "trim",
            Request::Split { .. } => "split",
            Request::IsPalindrome { .. } => "is_palindrome",
            Request::Shutdown => "shutdown",
        }
    }
}

/// Response from primkit-server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Number { value: Number },
    Factorial { factorial: u64 },
    Bool { result: bool },
    Text { text: String },
    Parts { parts: Vec<String> },
    Success { ok: bool },
    Error { error: String, kind: String },
}

impl Response {
    pub fn success() -> Self {
        Response::Success { ok: true }
    }

    /// Protocol-level failure (malformed input, unknown method)
    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error {
            error: msg.into(),
            kind: "protocol".to_string(),
        }
    }

    pub fn from_math_error(err: &MathError) -> Self {
        Response::Error {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Response::Text { text: text.into() }
    }
}

/// JSON-RPC request id, echoed back unchanged in the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(u64),
    Str(String),
}

/// Id used when the request's own id is missing or unreadable
impl Default for Id {
    fn default() -> Self {
        Id::Num(0)
    }
}

/// JSON-RPC message wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMessage<T> {
    pub jsonrpc: String,
    pub id: Option<Id>,
    #[serde(flatten)]
    pub content: T,
}

impl<T> RpcMessage<T> {
    pub fn new(id: Id, content: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            content,
        }
    }
}
