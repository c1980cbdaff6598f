//! Utilities.
#![allow(dead_code)]

use core::fmt;

use uri_generic::Uri;

/// Parses the string, panicking with the error message on failure.
#[must_use]
pub fn uri(s: &str) -> Uri {
    match Uri::parse(s) {
        Ok(v) => v,
        Err(e) => panic!("{s:?} should be a valid URI reference: {e}"),
    }
}

/// Returns the string the value is displayed as.
#[must_use]
pub fn display<T: fmt::Display>(v: T) -> String {
    v.to_string()
}

/// Asserts that the two values are displayed as the same string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let left = $crate::utils::display(&$left);
        let right = $crate::utils::display(&$right);
        assert_eq!(left, right);
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        let left = $crate::utils::display(&$left);
        let right = $crate::utils::display(&$right);
        assert_eq!(left, right, $($args)*);
    }};
}
