//! Error types for Soundex encoding.

use thiserror::Error;

/// Errors raised by a morphological oracle.
///
/// The encoder never surfaces these from [`transform`](crate::soundex::Soundex::transform):
/// the morphology hook logs them and carries on without the ending rewrite.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The backing analyzer could not be reached or failed internally.
    #[error("morphological analyzer unavailable: {0}")]
    Unavailable(String),

    /// The analyzer did not answer in time.
    #[error("morphological analyzer timed out after {0} ms")]
    Timeout(u64),

    /// A line of a tab-separated morphology dictionary could not be parsed.
    #[error("malformed morphology entry at line {line}: {content:?}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },
}

/// Errors that can occur while building or running a Soundex encoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoundexError {
    /// The word or the encoder configuration was rejected.
    ///
    /// Raised for an empty word, and at construction time for a
    /// configuration that asks for morphological analysis without
    /// supplying an oracle.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// The morphological oracle failed.
    #[error(transparent)]
    OracleUnavailable(#[from] OracleError),
}

impl SoundexError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        SoundexError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for Soundex operations.
pub type Result<T> = std::result::Result<T, SoundexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SoundexError::invalid_input("word must not be empty");
        assert_eq!(err.to_string(), "invalid input: word must not be empty");
    }

    #[test]
    fn test_oracle_error_converts() {
        let err: SoundexError = OracleError::Timeout(250).into();
        assert_eq!(
            err,
            SoundexError::OracleUnavailable(OracleError::Timeout(250))
        );
        assert_eq!(
            err.to_string(),
            "morphological analyzer timed out after 250 ms"
        );
    }

    #[test]
    fn test_malformed_entry_message() {
        let err = OracleError::Malformed {
            line: 3,
            content: "красного".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed morphology entry at line 3: \"красного\""
        );
    }
}
