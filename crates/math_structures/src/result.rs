//! Fallible values with a message-carrying error
//!
//! Lookups and parse steps return [`MathResult`]: either a success payload or an
//! [`ErrorMessage`], never both. Continuations chain with [`ResultExt::bind`] so
//! errors propagate without branching at every call site.

use std::borrow::Cow;
use thiserror::Error;

/// A non-empty, human readable error message
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{0}")]
pub struct ErrorMessage(Cow<'static, str>);

impl ErrorMessage {
    /// Create a new error message
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. An error without a message is a contract
    /// violation by the caller.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "an error message must not be empty");
        Self(message)
    }

    /// The message text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ErrorMessage {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Result of a lookup or parse step
pub type MathResult<T> = Result<T, ErrorMessage>;

/// Zero-copy result borrowing a span of the input buffer
pub type SpanResult<'a, T> = MathResult<&'a [T]>;

/// Shorthand for an error result
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> MathResult<T> {
    Err(ErrorMessage::new(message))
}

/// Combinators mirroring match/bind on a [`MathResult`]
pub trait ResultExt<T> {
    /// Consume exactly one branch
    fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(ErrorMessage) -> R)
        -> R;

    /// Chain a success-only continuation, short-circuiting on an existing error
    fn bind<U>(self, f: impl FnOnce(T) -> MathResult<U>) -> MathResult<U>;
}

impl<T> ResultExt<T> for MathResult<T> {
    fn match_with<R>(
        self,
        on_ok: impl FnOnce(T) -> R,
        on_err: impl FnOnce(ErrorMessage) -> R,
    ) -> R {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    fn bind<U>(self, f: impl FnOnce(T) -> MathResult<U>) -> MathResult<U> {
        self.and_then(f)
    }
}
