//! Nullness checks
//!
//! Both checks unwrap the `Option` on success so a validated reference can
//! be bound in one expression.

use alloc::format;
use core::fmt::Display;

use crate::error::{PreconditionError, Result};
use crate::message::expand_template;

/// Ensure a required reference is present, unwrapping it
///
/// Returns the contained value on `Some`. On `None`, returns
/// [`PreconditionError::NullReference`] with the interpolated template as
/// message.
pub fn check_not_null<T>(reference: Option<T>, template: &str, args: &[&dyn Display]) -> Result<T> {
    match reference {
        Some(value) => Ok(value),
        None => Err(PreconditionError::NullReference(expand_template(template, args))),
    }
}

/// Ensure a named parameter is present, unwrapping it
///
/// Like [`check_not_null`], but the message format is fixed:
/// `Argument '<parameter_name>' must not be null`.
pub fn check_arg_not_null<T>(reference: Option<T>, parameter_name: &str) -> Result<T> {
    match reference {
        Some(value) => Ok(value),
        None => Err(PreconditionError::NullReference(format!(
            "Argument '{parameter_name}' must not be null"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_present_reference_passes_through() {
        assert_eq!(check_not_null(Some(42), "", &[]), Ok(42));
        assert_eq!(check_arg_not_null(Some("id"), "name"), Ok("id"));
    }

    #[test]
    fn test_passthrough_preserves_ownership() {
        let owned = String::from("payload");
        let value = check_not_null(Some(owned), "", &[]).unwrap();
        assert_eq!(value, "payload");
    }

    #[test]
    fn test_absent_reference_default_message() {
        let err = check_not_null::<u8>(None, "", &[]).unwrap_err();
        assert_eq!(err, PreconditionError::NullReference("".into()));
    }

    #[test]
    fn test_absent_reference_template_message() {
        let err = check_not_null::<u8>(None, "missing entry for key %s", &[&"seed"]).unwrap_err();
        assert_eq!(err.message(), "missing entry for key seed");
    }

    #[test]
    fn test_arg_not_null_fixed_message() {
        let err = check_arg_not_null::<u8>(None, "x").unwrap_err();
        assert_eq!(err, PreconditionError::NullReference("Argument 'x' must not be null".into()));
    }

    #[test]
    fn test_arg_not_null_longer_name() {
        let err = check_arg_not_null::<u8>(None, "test").unwrap_err();
        assert_eq!(err.message(), "Argument 'test' must not be null");
    }
}
