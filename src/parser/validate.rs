//! Validating parsers for non-trusted (possibly invalid) input.

use crate::charset::{AllowedSet, ALWAYS_ILLEGAL};
use crate::error::{Component, Error};
use crate::parser::str::take_xdigits2;

/// Rejected byte found by [`check_chars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejected {
    /// Offending byte.
    pub(crate) byte: u8,
    /// Why the byte was rejected.
    pub(crate) reason: &'static str,
}

impl Rejected {
    /// Converts into a component-level error for the given input.
    pub(crate) fn into_component_error(self, component: Component, input: &str) -> Error {
        Error::invalid_component(component, input, self.reason, Some(self.byte))
    }
}

/// Checks that every byte is in the allowed set.
///
/// If `%` is allowed, it must start a `pct-encoded` triplet.
pub(crate) fn check_chars(s: &str, allowed: &AllowedSet) -> Result<(), Rejected> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !allowed.contains(b) {
            return Err(Rejected {
                byte: b,
                reason: "disallowed character",
            });
        }
        if b == b'%' {
            if take_xdigits2(&bytes[(i + 1)..]).is_none() {
                return Err(Rejected {
                    byte: b,
                    reason: "malformed percent-encoded octet",
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Returns `Ok(_)` if the string has no character that is illegal anywhere
/// in a URI reference.
///
/// Rejects non-ASCII characters, spaces, control characters, and
/// `<>{}|\^`"`. The empty string passes.
pub(crate) fn validate_uri_chars(s: &str) -> Result<(), Error> {
    for &b in s.as_bytes() {
        let reason = if !b.is_ascii() {
            "non-ASCII character"
        } else if b == b' ' {
            "raw space"
        } else if b.is_ascii_control() {
            "control character"
        } else if ALWAYS_ILLEGAL.contains(b) {
            "illegal character"
        } else {
            continue;
        };
        debug!(input = s, byte = b, reason, "rejected URI characters");
        return Err(Error::invalid_uri(s, reason, Some(b)));
    }
    Ok(())
}
