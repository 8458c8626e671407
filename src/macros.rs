//! Variadic wrappers around the check functions
//!
//! The function surface takes the message template and its arguments as
//! explicit parameters. These macros recover the bare call style of the
//! original API: the template is optional, template arguments are variadic,
//! and `check_element_index!` defaults its description to `"index"`.

/// Variadic form of [`check_argument`](crate::check_argument)
#[macro_export]
macro_rules! check_argument {
    ($expression:expr $(,)?) => {
        $crate::check_argument($expression, "", &[])
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::check_argument($expression, $template, &[$(&$arg),*])
    };
}

/// Variadic form of [`check_state`](crate::check_state)
#[macro_export]
macro_rules! check_state {
    ($expression:expr $(,)?) => {
        $crate::check_state($expression, "", &[])
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::check_state($expression, $template, &[$(&$arg),*])
    };
}

/// Variadic form of [`check_value`](crate::check_value)
#[macro_export]
macro_rules! check_value {
    ($expression:expr $(,)?) => {
        $crate::check_value($expression, "", &[])
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::check_value($expression, $template, &[$(&$arg),*])
    };
}

/// Variadic form of [`check_not_null`](crate::check_not_null)
#[macro_export]
macro_rules! check_not_null {
    ($reference:expr $(,)?) => {
        $crate::check_not_null($reference, "", &[])
    };
    ($reference:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::check_not_null($reference, $template, &[$(&$arg),*])
    };
}

/// Form of [`check_element_index`](crate::check_element_index) with the
/// description defaulting to `"index"`
#[macro_export]
macro_rules! check_element_index {
    ($index:expr, $size:expr $(,)?) => {
        $crate::check_element_index($index, $size, "index")
    };
    ($index:expr, $size:expr, $desc:expr $(,)?) => {
        $crate::check_element_index($index, $size, $desc)
    };
}
