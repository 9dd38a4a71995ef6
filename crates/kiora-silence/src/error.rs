//! Error types for the kiora-silence crate.

use thiserror::Error;

/// Errors that can occur while building silence or acknowledgement requests.
#[derive(Debug, Error)]
pub enum SilenceError {
    /// A matcher string failed to parse.
    #[error("invalid matcher: {input}")]
    InvalidMatcher {
        /// The matcher string that was rejected.
        input: String,
    },

    /// A duration string failed to parse.
    #[error("invalid duration: {input}")]
    InvalidDuration {
        /// The duration string that was rejected.
        input: String,
    },

    /// A required field was empty.
    #[error("{field} cannot be empty")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Result type for silence operations.
pub type Result<T> = std::result::Result<T, SilenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_matcher() {
        let err = SilenceError::InvalidMatcher {
            input: "bad matcher".to_string(),
        };
        assert_eq!(err.to_string(), "invalid matcher: bad matcher");
    }

    #[test]
    fn error_display_invalid_duration() {
        let err = SilenceError::InvalidDuration {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid duration: abc");
    }

    #[test]
    fn error_display_missing_field() {
        let err = SilenceError::MissingField { field: "creator" };
        assert_eq!(err.to_string(), "creator cannot be empty");
    }
}
