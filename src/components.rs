//! Components of URIs.
//!
//! Each component type is validated on construction, so a value of one of
//! these types is always a well-formed piece of a URI.

mod authority;
mod host;
mod scheme;
mod text;

use alloc::string::String;

use crate::error::Error;
use crate::parser::decompose::decompose_uri_reference;
use crate::parser::validate::validate_uri_chars;

pub use self::authority::{parse_port, Authority};
pub use self::host::{is_valid_ipv4, Host};
pub use self::scheme::{default_port, Scheme};
pub use self::text::{Fragment, Path, Query, Userinfo};

/// Raw components of a URI reference, before validation.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

/// Validated components of a URI reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Components {
    /// Scheme.
    pub(crate) scheme: Option<Scheme>,
    /// Authority.
    pub(crate) authority: Option<Authority>,
    /// Path. Always present, possibly empty.
    pub(crate) path: Path,
    /// Query.
    pub(crate) query: Option<Query>,
    /// Fragment.
    pub(crate) fragment: Option<Fragment>,
}

impl Components {
    /// Parses and validates every component of the given URI reference.
    ///
    /// The first failure is returned; nothing is recovered.
    pub(crate) fn parse(s: &str) -> Result<Self, Error> {
        validate_uri_chars(s)?;
        let raw = decompose_uri_reference(s);
        let scheme = raw.scheme.map(Scheme::parse).transpose()?;
        let authority = raw.authority.map(Authority::parse).transpose()?;
        let path = Path::parse(raw.path)?;
        let query = raw.query.map(Query::parse).transpose()?;
        let fragment = raw.fragment.map(Fragment::parse).transpose()?;
        Ok(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }
}

#[cfg(test)]
impl Components {
    /// Serializes the components into a URI reference string.
    #[must_use]
    pub(crate) fn compose(&self) -> String {
        compose(
            self.scheme.as_ref(),
            self.authority.as_ref(),
            self.path.as_str(),
            self.query.as_ref().map(Query::as_str),
            self.fragment.as_ref().map(Fragment::as_str),
        )
    }
}

/// Serializes components into a URI reference string.
///
/// The path is adjusted when it would otherwise change the structure of the
/// result:
///
/// * with an authority, a non-empty path gets a leading `/`;
/// * without an authority, a path starting with `//` gets a `/.` prefix
///   (as WHATWG URL Standard serializes it);
/// * without a scheme and an authority, a path whose first segment contains
///   a colon gets a `./` prefix.
#[must_use]
pub(crate) fn compose(
    scheme: Option<&Scheme>,
    authority: Option<&Authority>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    use core::fmt::Write as _;

    let mut buf = String::new();
    if let Some(scheme) = scheme {
        buf.push_str(scheme.as_str());
        buf.push(':');
    }
    match authority {
        Some(authority) => {
            buf.push_str("//");
            // Writing into a `String` never fails.
            let _ = write!(buf, "{}", authority);
            if !path.is_empty() && !path.starts_with('/') {
                buf.push('/');
            }
        }
        None => {
            if path.starts_with("//") {
                warn!(path, "prefixing `/.` to keep the path apart from an authority");
                buf.push_str("/.");
            } else if scheme.is_none() && first_segment_has_colon(path) {
                warn!(path, "prefixing `./` to keep the path apart from a scheme");
                buf.push_str("./");
            }
        }
    }
    buf.push_str(path);
    if let Some(query) = query {
        buf.push('?');
        buf.push_str(query);
    }
    if let Some(fragment) = fragment {
        buf.push('#');
        buf.push_str(fragment);
    }
    buf
}

/// Returns `true` if the first segment of the path contains a colon.
#[must_use]
fn first_segment_has_colon(path: &str) -> bool {
    path.split('/').next().map_or(false, |seg| seg.contains(':'))
}
