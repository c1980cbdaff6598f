//! Scheme.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::charset::SCHEME;
use crate::error::{Component, Error};

/// A URI scheme, case-normalized to lowercase.
///
/// This corresponds to `scheme` rule in RFC 3986:
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// # Examples
///
/// ```
/// use uri_generic::components::Scheme;
///
/// let scheme = Scheme::parse("HTTPS")?;
/// assert_eq!(scheme.as_str(), "https");
/// assert!(scheme.is_secure());
/// assert_eq!(scheme.default_port(), Some(443));
///
/// assert!(Scheme::parse("").is_err());
/// assert!(Scheme::parse("1abc").is_err());
/// # Ok::<_, uri_generic::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Parses and lowercases a scheme.
    pub fn parse(s: &str) -> Result<Self, Error> {
        validate(s).map_err(|e| {
            debug!(input = s, reason = e.reason(), "rejected scheme");
            e
        })?;
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Returns the scheme as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the registered default port of the scheme, if known.
    #[inline]
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        default_port(&self.0)
    }

    /// Returns `true` for `https`, `wss` and `ftps`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(self.as_str(), "https" | "wss" | "ftps")
    }

    /// Returns `true` for `http` and `https`.
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(self.as_str(), "http" | "https")
    }
}

/// Validates a scheme without allocating.
fn validate(s: &str) -> Result<(), Error> {
    let bytes = s.as_bytes();
    let first = match bytes.first() {
        Some(&b) => b,
        None => {
            return Err(Error::invalid_component(
                Component::Scheme,
                s,
                "empty scheme",
                None,
            ))
        }
    };
    if !first.is_ascii_alphabetic() {
        return Err(Error::invalid_component(
            Component::Scheme,
            s,
            "scheme must start with a letter",
            Some(first),
        ));
    }
    match bytes[1..].iter().find(|&&b| !SCHEME.contains(b)) {
        Some(&b) => Err(Error::invalid_component(
            Component::Scheme,
            s,
            "disallowed character",
            Some(b),
        )),
        None => Ok(()),
    }
}

/// Returns the default port of the given lowercase scheme.
///
/// Only `http` (80), `https` (443) and `ftp` (21) are known.
///
/// # Examples
///
/// ```
/// use uri_generic::components::default_port;
///
/// assert_eq!(default_port("http"), Some(80));
/// assert_eq!(default_port("gopher"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Scheme {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Scheme {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Scheme {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate(&s)?;
        let mut s = s;
        s.make_ascii_lowercase();
        Ok(Self(s))
    }
}

impl_serde_str!(Scheme, "a URI scheme");
