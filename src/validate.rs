//! Validators.
//!
//! Each validator checks a string against a grammar rule of RFC 3986 and
//! returns the same error the corresponding parser would, without keeping
//! the parsed value.

use crate::components::{
    parse_port, Authority, Components, Fragment, Host, Path, Query, Scheme, Userinfo,
};
use crate::Error;

/// Returns `true` if the string is a valid [URI reference][uri-reference].
///
/// The empty string is valid (same-document reference). A string with a
/// raw space, a control character, or a non-ASCII character is never valid.
///
/// # Examples
///
/// ```
/// use uri_generic::is_valid_uri;
///
/// assert!(is_valid_uri(""));
/// assert!(is_valid_uri("https://example.com/a?b#c"));
/// assert!(is_valid_uri("../relative"));
/// assert!(!is_valid_uri("https://example.com/a b"));
/// assert!(!is_valid_uri("https://example.com/\u{3042}"));
/// assert!(!is_valid_uri("https://example.com/\t"));
/// ```
///
/// [uri-reference]: https://tools.ietf.org/html/rfc3986#section-4.1
#[must_use]
pub fn is_valid_uri(s: &str) -> bool {
    uri_reference(s).is_ok()
}

/// Validates [URI reference][uri-reference].
///
/// This validator corresponds to [`Uri::parse`][`crate::Uri::parse`].
///
/// [uri-reference]: https://tools.ietf.org/html/rfc3986#section-4.1
pub fn uri_reference(s: &str) -> Result<(), Error> {
    Components::parse(s).map(drop)
}

/// Validates [URI][uri], i.e. a URI reference with a scheme.
///
/// # Examples
///
/// ```
/// use uri_generic::validate;
///
/// assert!(validate::uri("mailto:user@example.com").is_ok());
/// assert!(validate::uri("//example.com").is_err());
/// ```
///
/// [uri]: https://tools.ietf.org/html/rfc3986#section-3
pub fn uri(s: &str) -> Result<(), Error> {
    let components = Components::parse(s)?;
    if components.scheme.is_none() {
        return Err(Error::invalid_uri(s, "missing scheme", None));
    }
    Ok(())
}

/// Validates [relative reference][relative-ref], i.e. a URI reference
/// without a scheme.
///
/// # Examples
///
/// ```
/// use uri_generic::validate;
///
/// assert!(validate::relative_ref("//example.com/path").is_ok());
/// assert!(validate::relative_ref("").is_ok());
/// assert!(validate::relative_ref("http://example.com").is_err());
/// ```
///
/// [relative-ref]: https://tools.ietf.org/html/rfc3986#section-4.2
pub fn relative_ref(s: &str) -> Result<(), Error> {
    let components = Components::parse(s)?;
    if components.scheme.is_some() {
        return Err(Error::invalid_uri(s, "unexpected scheme", None));
    }
    Ok(())
}

/// Validates [scheme][scheme].
///
/// [scheme]: https://tools.ietf.org/html/rfc3986#section-3.1
pub fn scheme(s: &str) -> Result<(), Error> {
    Scheme::parse(s).map(drop)
}

/// Validates [authority][authority].
///
/// [authority]: https://tools.ietf.org/html/rfc3986#section-3.2
pub fn authority(s: &str) -> Result<(), Error> {
    Authority::parse(s).map(drop)
}

/// Validates [userinfo][userinfo].
///
/// [userinfo]: https://tools.ietf.org/html/rfc3986#section-3.2.1
pub fn userinfo(s: &str) -> Result<(), Error> {
    Userinfo::parse(s).map(drop)
}

/// Validates [host][host].
///
/// [host]: https://tools.ietf.org/html/rfc3986#section-3.2.2
pub fn host(s: &str) -> Result<(), Error> {
    Host::parse(s).map(drop)
}

/// Validates [port][port].
///
/// [port]: https://tools.ietf.org/html/rfc3986#section-3.2.3
pub fn port(s: &str) -> Result<(), Error> {
    parse_port(s).map(drop)
}

/// Validates [path][path].
///
/// [path]: https://tools.ietf.org/html/rfc3986#section-3.3
pub fn path(s: &str) -> Result<(), Error> {
    Path::parse(s).map(drop)
}

/// Validates [query][query].
///
/// Note that the first `?` character in a URI is not a part of a query.
///
/// [query]: https://tools.ietf.org/html/rfc3986#section-3.4
pub fn query(s: &str) -> Result<(), Error> {
    Query::parse(s).map(drop)
}

/// Validates [fragment][fragment].
///
/// Note that the first `#` character in a URI is not a part of a fragment.
/// For example, `https://example.com/#foo` has a fragment `foo`, **not** `#foo`.
///
/// [fragment]: https://tools.ietf.org/html/rfc3986#section-3.5
pub fn fragment(s: &str) -> Result<(), Error> {
    Fragment::parse(s).map(drop)
}
