//! Reference resolution.
//!
//! See [RFC 3986 section 5.2](https://tools.ietf.org/html/rfc3986#section-5.2).
//!
//! # Ambiguous paths
//!
//! Resolution can produce a path starting with `//` for a URI without
//! authority, for example resolving `.///bar` against `scheme:`. Such a path
//! would be read as an authority when serialized as is, so the resolved URI
//! is serialized with a `/.` prefix on the path, as WHATWG URL Standard
//! does. The prefix is removed again by [`Uri::normalized`] and added back
//! on serialization, so the output is stable.
//!
//! ```
//! use uri_generic::Uri;
//!
//! let base = Uri::parse("scheme:")?;
//! let resolved = base.resolve_str(".///not-a-host")?;
//! assert_eq!(resolved.as_str(), "scheme:/.//not-a-host");
//! assert_eq!(resolved.authority(), None);
//!
//! let resolved = base.resolve_str("/..//not-a-host")?;
//! assert_eq!(resolved.as_str(), "scheme:/.//not-a-host");
//! # Ok::<_, uri_generic::Error>(())
//! ```


use alloc::borrow::Cow;

use crate::components::{compose, Components, Fragment, Query};
use crate::normalize::{merge_paths, remove_dot_segments};
use crate::types::Uri;
use crate::Error;

/// A resolver against the fixed base.
///
/// The base is decomposed once, and then many references can be resolved
/// against it.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a> {
    /// Base URI.
    base: &'a Uri,
    /// Components of the base URI.
    base_components: &'a Components,
}

impl<'a> FixedBaseResolver<'a> {
    /// Creates a new resolver with the given base.
    ///
    /// # Failures
    ///
    /// Fails with [`ConversionFailed`][`crate::ErrorKind::ConversionFailed`]
    /// if the base has no scheme, since only an absolute URI can be a base.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::resolve::FixedBaseResolver;
    /// use uri_generic::Uri;
    ///
    /// let base = Uri::parse("http://example.com/base/")?;
    /// let resolver = FixedBaseResolver::new(&base)?;
    ///
    /// let reference = Uri::parse("../there")?;
    /// assert_eq!(resolver.resolve(&reference)?.as_str(), "http://example.com/there");
    ///
    /// assert!(FixedBaseResolver::new(&Uri::parse("/relative/base")?).is_err());
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn new(base: &'a Uri) -> Result<Self, Error> {
        let base_components = base.components().ok_or_else(|| {
            Error::conversion_failed(base.as_str(), "base URI has no component structure")
        })?;
        if base_components.scheme.is_none() {
            debug!(base = base.as_str(), "rejected relative base");
            return Err(Error::conversion_failed(base.as_str(), "base URI is relative"));
        }
        Ok(Self {
            base,
            base_components,
        })
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &'a Uri {
        self.base
    }

    /// Resolves the given reference against the fixed base.
    ///
    /// * A reference with a scheme is returned unchanged.
    /// * A reference with an authority takes everything except the scheme
    ///   from itself.
    /// * A reference with an empty path keeps the base path, and the base
    ///   query unless it has its own.
    /// * A reference with an absolute path replaces the base path.
    /// * Otherwise the reference path is merged with the base path.
    ///
    /// Dot segments are removed from every path taken from the reference.
    /// The fragment always comes from the reference. The authority is taken
    /// as a whole from one side, never merged field by field.
    ///
    /// The result is not normalized otherwise: percent-encoded triplets are
    /// kept as they are, and `%2e%2e` is not treated as `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::resolve::FixedBaseResolver;
    /// use uri_generic::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q#f")?;
    /// let resolver = FixedBaseResolver::new(&base)?;
    /// let resolve = |s: &str| -> Result<String, uri_generic::Error> {
    ///     Ok(resolver.resolve(&Uri::parse(s)?)?.into())
    /// };
    ///
    /// assert_eq!(resolve("g:h")?, "g:h");
    /// assert_eq!(resolve("//g/./x")?, "http://g/x");
    /// assert_eq!(resolve("")?, "http://a/b/c/d;p?q");
    /// assert_eq!(resolve("#s")?, "http://a/b/c/d;p?q#s");
    /// assert_eq!(resolve("/./g")?, "http://a/g");
    /// assert_eq!(resolve("../../../g")?, "http://a/g");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn resolve(&self, reference: &Uri) -> Result<Uri, Error> {
        let r = reference.components().ok_or_else(|| {
            Error::conversion_failed(reference.as_str(), "reference has no component structure")
        })?;
        if r.scheme.is_some() {
            trace!(reference = reference.as_str(), "reference has a scheme");
            return Ok(reference.clone());
        }

        let base = self.base_components;
        let (authority, path, query) = if let Some(authority) = &r.authority {
            trace!(reference = reference.as_str(), "reference has an authority");
            (
                Some(authority),
                Cow::Owned(remove_dot_segments(r.path.as_str())),
                r.query.as_ref(),
            )
        } else if r.path.is_empty() {
            trace!(reference = reference.as_str(), "reference has an empty path");
            (
                base.authority.as_ref(),
                Cow::Borrowed(base.path.as_str()),
                r.query.as_ref().or(base.query.as_ref()),
            )
        } else if r.path.is_absolute() {
            trace!(reference = reference.as_str(), "reference has an absolute path");
            (
                base.authority.as_ref(),
                Cow::Owned(remove_dot_segments(r.path.as_str())),
                r.query.as_ref(),
            )
        } else {
            trace!(reference = reference.as_str(), "merging reference path");
            let merged = merge_paths(
                base.path.as_str(),
                base.authority.is_some(),
                r.path.as_str(),
            );
            (
                base.authority.as_ref(),
                Cow::Owned(remove_dot_segments(&merged)),
                r.query.as_ref(),
            )
        };

        let value = compose(
            base.scheme.as_ref(),
            authority,
            &path,
            query.map(Query::as_str),
            r.fragment.as_ref().map(Fragment::as_str),
        );
        trace!(
            base = self.base.as_str(),
            reference = reference.as_str(),
            output = value.as_str(),
            "resolved"
        );
        Ok(Uri::new_unchecked(value))
    }
}
