//! Error types for dictionary construction

use thiserror::Error;

/// Configuration errors detected while a table is being built
///
/// These are programming errors in a compiled-in table, not runtime conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// A command key can never be produced by the command tokenizer
    #[error("Key is unreachable: {0}")]
    UnreachableCommand(String),

    /// An empty literal key, which no input can ever match
    #[error("Key is empty")]
    EmptyKey,

    /// A key was registered twice
    #[error("Key already exists: {0}")]
    DuplicateKey(String),
}

/// Result type for dictionary registration
pub type DictionaryResult<T> = Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::UnreachableCommand("\\alpha2".to_string());
        assert_eq!(err.to_string(), "Key is unreachable: \\alpha2");

        let err = DictionaryError::DuplicateKey("leq".to_string());
        assert_eq!(err.to_string(), "Key already exists: leq");

        assert_eq!(DictionaryError::EmptyKey.to_string(), "Key is empty");
    }
}
