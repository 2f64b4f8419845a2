//! Error types for the atom model

use thiserror::Error;

/// Errors raised when mutating atoms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    /// Scripts were attached to an atom kind that cannot carry them
    #[error("{0} atoms do not allow scripts")]
    ScriptsNotAllowed(&'static str),
}

/// Result type for atom operations
pub type AtomResult<T> = Result<T, AtomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtomError::ScriptsNotAllowed("Space");
        assert_eq!(err.to_string(), "Space atoms do not allow scripts");
    }
}
