//! Request mutation error types

use std::fmt;

/// Errors raised by the validating request mutators
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// A mutator was handed a value outside its accepted set
    InvalidArgument { parameter: String, value: String },
}

impl RequestError {
    pub fn invalid_priority(value: i32) -> Self {
        RequestError::InvalidArgument {
            parameter: "priority".to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidArgument { parameter, value } => {
                write!(f, "Invalid {}: {}", parameter, value)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Result type for request mutations
pub type RequestResult<T> = Result<T, RequestError>;
