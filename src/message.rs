//! Message template interpolation for precondition failures
//!
//! Failure messages are built from a template containing positional `%s`
//! placeholders and an ordered argument list. This module is pure string
//! work with no I/O dependencies.

use alloc::string::String;
use core::fmt::{Display, Write};

/// Interpolate a message template with positional arguments
///
/// Each `%s` consumes the next argument in order and is replaced by its
/// `Display` rendering; `%%` renders a literal `%`. Any other `%` sequence
/// passes through unchanged.
///
/// Mismatch policy is deterministic and lenient: placeholders left over
/// after the arguments run out are emitted literally, and arguments left
/// over after the placeholders run out are ignored. A failing check must
/// never panic while reporting someone else's violated precondition, so the
/// mismatch is surfaced in the message text instead.
pub fn expand_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_arg = 0;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('s') {
            if next_arg < args.len() {
                // String's fmt::Write never fails
                let _ = write!(out, "{}", args[next_arg]);
                next_arg += 1;
            } else {
                out.push_str("%s");
            }
            rest = after;
        } else if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else {
            // Unknown conversion or trailing '%': keep it literal
            out.push('%');
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_positional() {
        assert_eq!(expand_template("Argument %s::%s", &[&"foo", &"bar"]), "Argument foo::bar");
        assert_eq!(
            expand_template("Value is not one of %s, %s or %s", &[&"foo", &"bar", &"baz"]),
            "Value is not one of foo, bar or baz"
        );
    }

    #[test]
    fn test_expand_mixed_display_types() {
        assert_eq!(expand_template("%s of %s", &[&3, &10usize]), "3 of 10");
        assert_eq!(expand_template("ratio %s", &[&0.5]), "ratio 0.5");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(expand_template("", &[]), "");
        // Surplus arguments are ignored
        assert_eq!(expand_template("", &[&"unused"]), "");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(expand_template("Argument did not matched.", &[]), "Argument did not matched.");
    }

    #[test]
    fn test_surplus_placeholders_stay_literal() {
        assert_eq!(expand_template("%s and %s", &[&"one"]), "one and %s");
        assert_eq!(expand_template("%s", &[]), "%s");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(expand_template("100%% of %s", &[&"disk"]), "100% of disk");
    }

    #[test]
    fn test_unknown_conversion_passes_through() {
        assert_eq!(expand_template("%d items", &[&42]), "%d items");
        assert_eq!(expand_template("trailing %", &[]), "trailing %");
    }
}
