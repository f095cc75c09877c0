//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields absent or empty, in declaration order
    MissingFields { fields: Vec<&'static str> },

    /// Input could not be parsed (path segment, query string, JSON body)
    Malformed { input: &'static str, detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::Malformed { input, detail } => write!(f, "invalid {}: {}", input, detail),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingFields {
            fields: vec!["type", "title"],
        };
        assert_eq!(err.to_string(), "Missing required fields: type, title");

        let err = ValidationError::Malformed {
            input: "path",
            detail: "expected an integer".into(),
        };
        assert_eq!(err.to_string(), "invalid path: expected an integer");
    }
}
