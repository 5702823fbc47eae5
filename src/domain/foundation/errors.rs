//! Error types for the domain layer.
//!
//! The structuring and validation cores are total and never return these;
//! they surface only at construction boundaries where caller data is shaped
//! into domain types.

use thiserror::Error;

/// Errors raised while building a context snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("Context snapshot root must be an object, got {found}")]
    NotAnObject { found: &'static str },
}

impl ContextError {
    /// Creates a not-an-object error naming the JSON kind that was found.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        ContextError::NotAnObject { found }
    }
}
