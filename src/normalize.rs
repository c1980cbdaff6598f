//! Normalization.
//!
//! # Syntax-based normalization
//!
//! [`Uri::normalized`][`crate::Uri::normalized`] applies the case and path
//! segment normalizations of
//! [RFC 3986 section 6.2.2](https://tools.ietf.org/html/rfc3986#section-6.2.2)
//! to a whole URI, and also drops the default port of the scheme
//! (scheme-based normalization, section 6.2.3).
//!
//! Percent-encoding normalization is a separate string operation,
//! [`normalize_percent_encoding`], since decoding a triplet can change how
//! a component is split when applied to a whole URI string.
//!
//! # Normalization never fails
//!
//! Removing dot segments from the path of a URI without authority can
//! produce a path starting with `//`, for example `foo:.///bar` and
//! `foo:/..//bar`. Written as is, `foo://bar` would have the authority
//! `bar`, so such a path is serialized with a `/.` prefix as WHATWG URL
//! Standard does, and the result is `foo:/.//bar`.
//!
//! ```
//! use uri_generic::Uri;
//!
//! let uri = Uri::parse("foo:.///bar")?;
//! assert_eq!(uri.normalized().as_str(), "foo:/.//bar");
//! assert_eq!(uri.normalized().normalized().as_str(), "foo:/.//bar");
//! # Ok::<_, uri_generic::Error>(())
//! ```

mod pct_case;
mod remove_dot_segments;

pub use self::pct_case::normalize_percent_encoding;
pub use self::remove_dot_segments::{merge_paths, remove_dot_segments};
pub(crate) use self::remove_dot_segments::remove_dot_segments_relative;
