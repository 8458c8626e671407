//! Error types for precondition checks

use alloc::string::String;
use core::fmt;

/// Failure raised when a precondition does not hold
///
/// Each variant is one failure kind and carries the fully interpolated
/// message. Callers branch on the variant (or on [`ErrorKind`] via
/// [`kind`](PreconditionError::kind)); message text is never the
/// discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreconditionError {
    /// A caller-supplied argument or expression is invalid
    InvalidArgument(String),
    /// The calling context is in a state that does not permit this call
    IllegalState(String),
    /// A computed or derived value failed validation
    UnexpectedValue(String),
    /// A required reference is absent
    NullReference(String),
    /// An index or position falls outside the valid range
    IndexOutOfBounds(String),
}

/// Fieldless discriminator for [`PreconditionError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// See [`PreconditionError::InvalidArgument`]
    InvalidArgument,
    /// See [`PreconditionError::IllegalState`]
    IllegalState,
    /// See [`PreconditionError::UnexpectedValue`]
    UnexpectedValue,
    /// See [`PreconditionError::NullReference`]
    NullReference,
    /// See [`PreconditionError::IndexOutOfBounds`]
    IndexOutOfBounds,
}

impl PreconditionError {
    /// Get the failure kind without destructuring the variant
    pub fn kind(&self) -> ErrorKind {
        match self {
            PreconditionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PreconditionError::IllegalState(_) => ErrorKind::IllegalState,
            PreconditionError::UnexpectedValue(_) => ErrorKind::UnexpectedValue,
            PreconditionError::NullReference(_) => ErrorKind::NullReference,
            PreconditionError::IndexOutOfBounds(_) => ErrorKind::IndexOutOfBounds,
        }
    }

    /// Get the interpolated message
    pub fn message(&self) -> &str {
        match self {
            PreconditionError::InvalidArgument(msg)
            | PreconditionError::IllegalState(msg)
            | PreconditionError::UnexpectedValue(msg)
            | PreconditionError::NullReference(msg)
            | PreconditionError::IndexOutOfBounds(msg) => msg,
        }
    }
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The kind lives in the variant; the text is the message alone.
        write!(f, "{}", self.message())
    }
}

impl core::error::Error for PreconditionError {}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::IllegalState => "illegal state",
            ErrorKind::UnexpectedValue => "unexpected value",
            ErrorKind::NullReference => "null reference",
            ErrorKind::IndexOutOfBounds => "index out of bounds",
        };
        write!(f, "{name}")
    }
}

/// Result type for precondition checks
pub type Result<T> = core::result::Result<T, PreconditionError>;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_error_roundtrip() {
        let err = PreconditionError::InvalidArgument("negative size: -1".into());
        let json = serde_json::to_string(&err).unwrap();
        let back: PreconditionError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_kind_roundtrip() {
        let json = serde_json::to_string(&ErrorKind::IndexOutOfBounds).unwrap();
        let back: ErrorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorKind::IndexOutOfBounds);
    }
}
