//! Boolean expression checks
//!
//! Three checks share one contract and differ only in the failure kind, so
//! callers can branch on *why* a precondition failed (bad caller input vs.
//! bad context state vs. bad derived value) without parsing message text.

use core::fmt::Display;

use crate::error::{PreconditionError, Result};
use crate::message::expand_template;

/// Ensure the truth of an expression involving caller-supplied arguments
///
/// Returns [`PreconditionError::InvalidArgument`] with the interpolated
/// template as message when `expression` is false. An empty template yields
/// an empty message.
pub fn check_argument(expression: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if !expression {
        return Err(PreconditionError::InvalidArgument(expand_template(template, args)));
    }
    Ok(())
}

/// Ensure the truth of an expression about the state of the calling context
///
/// Same contract as [`check_argument`], but a false expression returns
/// [`PreconditionError::IllegalState`]: the call itself was well-formed and
/// the surrounding state did not permit it.
pub fn check_state(expression: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if !expression {
        return Err(PreconditionError::IllegalState(expand_template(template, args)));
    }
    Ok(())
}

/// Ensure the truth of an expression about a computed value
///
/// Same contract as [`check_argument`], but a false expression returns
/// [`PreconditionError::UnexpectedValue`]: the value under test was derived
/// by computation rather than supplied by the caller.
pub fn check_value(expression: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if !expression {
        return Err(PreconditionError::UnexpectedValue(expand_template(template, args)));
    }
    Ok(())
}
