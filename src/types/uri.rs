//! URI reference string type.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloc::string::String;

use crate::charset::{FRAGMENT, PATH_SEGMENT, QUERY_ITEM};
use crate::components::{
    compose, Authority, Components, Fragment, Host, Path, Query, Scheme, Userinfo,
};
use crate::normalize::{remove_dot_segments, remove_dot_segments_relative};
use crate::percent_encode::PercentEncoded;
use crate::resolve::FixedBaseResolver;
use crate::Error;

/// A URI reference.
///
/// The string given on construction is kept verbatim as the canonical
/// value, and the components are parsed once when the value is created.
/// Equality, ordering and hashing use the canonical string only, so two
/// URIs differing in case compare unequal until both are
/// [normalized][`Self::normalized`].
///
/// # Examples
///
/// ```
/// use uri_generic::Uri;
///
/// let uri = Uri::parse("HTTP://User@Example.COM:80/a/./b/../c?q#f")?;
/// assert_eq!(uri.as_str(), "HTTP://User@Example.COM:80/a/./b/../c?q#f");
/// assert_eq!(uri.scheme().map(|s| s.as_str()), Some("http"));
/// assert_eq!(uri.userinfo().map(|u| u.as_str()), Some("User"));
/// assert_eq!(uri.host().map(|h| h.as_str()), Some("example.com"));
/// assert_eq!(uri.port(), Some(80));
/// assert_eq!(uri.path().map(|p| p.as_str()), Some("/a/./b/../c"));
/// assert_eq!(uri.query().map(|q| q.as_str()), Some("q"));
/// assert_eq!(uri.fragment().map(|f| f.as_str()), Some("f"));
///
/// assert_eq!(uri.normalized().as_str(), "http://User@example.com/a/c?q#f");
/// # Ok::<_, uri_generic::Error>(())
/// ```
#[derive(Clone)]
pub struct Uri {
    /// Canonical string.
    value: String,
    /// Components, or `None` if the string has no component structure.
    parts: Option<Components>,
}

impl Uri {
    /// Parses a URI reference.
    ///
    /// The string must be ASCII without spaces or control characters, must
    /// not contain characters never allowed in URIs (such as `<`, `"` and
    /// `{`), and every component must match its grammar. The empty string is
    /// a valid same-document reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::{ErrorKind, Uri};
    ///
    /// assert!(Uri::parse("").is_ok());
    /// assert!(Uri::parse("../a/b?c").is_ok());
    /// assert_eq!(
    ///     Uri::parse("http://example.com/a b").map_err(|e| e.kind()),
    ///     Err(ErrorKind::InvalidUri)
    /// );
    /// assert_eq!(
    ///     Uri::parse("http://[::1/").map_err(|e| e.kind()),
    ///     Err(ErrorKind::InvalidHost)
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self, Error> {
        let parts = Components::parse(s)?;
        Ok(Self {
            value: s.into(),
            parts: Some(parts),
        })
    }

    /// Creates a URI from a string already known to be valid.
    ///
    /// Components are still derived, but a failure only leaves them absent.
    #[must_use]
    pub(crate) fn new_unchecked(value: String) -> Self {
        let parts = Components::parse(&value).ok();
        debug_assert!(parts.is_some(), "synthesized invalid URI: {:?}", value);
        Self { value, parts }
    }

    /// Creates a URI from typed components.
    ///
    /// This never fails since every component is already validated. A
    /// non-empty path without a leading slash gets one, as a path following
    /// an authority must be empty or absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::components::{Authority, Fragment, Path, Query, Scheme};
    /// use uri_generic::Uri;
    ///
    /// let uri = Uri::from_components(
    ///     Scheme::parse("https")?,
    ///     Authority::parse("user@example.com:8443")?,
    ///     Path::parse("a/b")?,
    ///     Some(Query::encode("q=a b")),
    ///     Some(Fragment::parse("top")?),
    /// );
    /// assert_eq!(uri.as_str(), "https://user@example.com:8443/a/b?q=a%20b#top");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    #[must_use]
    pub fn from_components(
        scheme: Scheme,
        authority: Authority,
        path: Path,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Self {
        let value = compose(
            Some(&scheme),
            Some(&authority),
            path.as_str(),
            query.as_ref().map(Query::as_str),
            fragment.as_ref().map(Fragment::as_str),
        );
        Self::new_unchecked(value)
    }

    /// Returns the canonical string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the canonical string.
    ///
    /// This is the same as [`as_str`][`Self::as_str`].
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the components, if the string has a component structure.
    #[inline]
    #[must_use]
    pub(crate) fn components(&self) -> Option<&Components> {
        self.parts.as_ref()
    }

    /// Returns the scheme, lowercased.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.parts.as_ref()?.scheme.as_ref()
    }

    /// Returns the authority.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.parts.as_ref()?.authority.as_ref()
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&Userinfo> {
        self.authority()?.userinfo()
    }

    /// Returns the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::components::Host;
    /// use uri_generic::Uri;
    ///
    /// let uri = Uri::parse("http://[::1]:8080/")?;
    /// assert_eq!(uri.host(), Some(&Host::Ipv6("::1".into())));
    /// assert!(uri.host().map_or(false, Host::is_loopback));
    ///
    /// assert_eq!(Uri::parse("#frag")?.host(), None);
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&Host> {
        self.authority().map(Authority::host)
    }

    /// Returns the port.
    ///
    /// An absent port and an empty port (as in `http://example.com:/`) are
    /// both `None`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.authority()?.port()
    }

    /// Returns the path.
    ///
    /// The path of a parsed URI is always present, possibly empty.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.parts.as_ref().map(|parts| &parts.path)
    }

    /// Returns the query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        self.parts.as_ref()?.query.as_ref()
    }

    /// Returns the fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&Fragment> {
        self.parts.as_ref()?.fragment.as_ref()
    }

    /// Returns `true` if the URI has no scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// assert!(Uri::parse("//example.com/")?.is_relative());
    /// assert!(Uri::parse("")?.is_relative());
    /// assert!(!Uri::parse("urn:isbn:0451450523")?.is_relative());
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.scheme().is_none()
    }

    /// Returns `true` if the scheme is `https`, `wss` or `ftps`.
    #[inline]
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.scheme().map_or(false, Scheme::is_secure)
    }

    /// Returns `true` if the scheme is `http` or `https`.
    #[inline]
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.scheme().map_or(false, Scheme::is_http)
    }

    /// Returns the normalized URI.
    ///
    /// * The scheme and the host are lowercase.
    /// * The port is dropped if it is the default port of the scheme.
    /// * Dot segments are removed from the path. A rootless path of a
    ///   relative reference stays relative: its leading `..` segments are
    ///   kept.
    ///
    /// Percent-encoded triplets are left as they are; apply
    /// [`normalize_percent_encoding`][`crate::normalize_percent_encoding`]
    /// to the components for that. The result is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let a = Uri::parse("HTTP://A")?;
    /// let b = Uri::parse("http://a")?;
    /// assert_ne!(a, b);
    /// assert_eq!(a.normalized(), b.normalized());
    ///
    /// let uri = Uri::parse("https://Example.com:443/a/../b/./c")?;
    /// assert_eq!(uri.normalized().as_str(), "https://example.com/b/c");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        let parts = match &self.parts {
            Some(parts) => parts,
            None => return self.clone(),
        };
        let scheme = parts.scheme.as_ref();
        let authority = parts
            .authority
            .as_ref()
            .map(|authority| authority.without_default_port(scheme));
        let path = if scheme.is_some() || parts.path.is_absolute() {
            remove_dot_segments(parts.path.as_str())
        } else {
            remove_dot_segments_relative(parts.path.as_str())
        };
        let value = compose(
            scheme,
            authority.as_ref(),
            &path,
            parts.query.as_ref().map(Query::as_str),
            parts.fragment.as_ref().map(Fragment::as_str),
        );
        trace!(input = self.as_str(), output = value.as_str(), "normalized");
        Self::new_unchecked(value)
    }

    /// Resolves the reference against this URI as the base.
    ///
    /// The base must be absolute. See [`FixedBaseResolver`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// let reference = Uri::parse("../g")?;
    /// assert_eq!(base.resolve(&reference)?.as_str(), "http://a/b/g");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn resolve(&self, reference: &Self) -> Result<Self, Error> {
        FixedBaseResolver::new(self)?.resolve(reference)
    }

    /// Parses the reference and resolves it against this URI as the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// assert_eq!(base.resolve_str("?y")?.as_str(), "http://a/b/c/d;p?y");
    /// assert!(base.resolve_str("g h").is_err());
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn resolve_str(&self, reference: &str) -> Result<Self, Error> {
        self.resolve(&Self::parse(reference)?)
    }

    /// Returns a URI with the given segment appended to the path.
    ///
    /// The segment is percent-encoded as a single path segment, so `/` in
    /// it is encoded too. A segment of exactly `.` or `..` is written as
    /// `%2E` or `%2E%2E`, so it never becomes a dot segment. A `/` separator
    /// is inserted unless the path is empty (without an authority) or
    /// already ends with `/`. The query and the fragment are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let uri = Uri::parse("https://example.com/docs?lang=en")?;
    /// let appended = uri.append_path_component("a b/c")?;
    /// assert_eq!(appended.as_str(), "https://example.com/docs/a%20b%2Fc?lang=en");
    ///
    /// let root = Uri::parse("https://example.com")?;
    /// assert_eq!(root.append_path_component("x")?.as_str(), "https://example.com/x");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn append_path_component(&self, segment: &str) -> Result<Self, Error> {
        let parts = self.parts_for_transform()?;
        let mut path = String::from(parts.path.as_str());
        let needs_separator = if path.is_empty() {
            parts.authority.is_some()
        } else {
            !path.ends_with('/')
        };
        if needs_separator {
            path.push('/');
        }
        match segment {
            "." => path.push_str("%2E"),
            ".." => path.push_str("%2E%2E"),
            _ => push_fmt(&mut path, PercentEncoded::new(segment, &PATH_SEGMENT)),
        }
        self.rebuild(parts, &path, parts.query.as_ref().map(Query::as_str), self.fragment_str())
    }

    /// Returns a URI with the given item appended to the query.
    ///
    /// The name and the value are percent-encoded so that `&`, `=` and `+`
    /// in them do not split the item. Items are joined with `&`. Without a
    /// value, only the name is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let uri = Uri::parse("https://example.com/search#results")?;
    /// let uri = uri.append_query_item("q", Some("rust & c++"))?;
    /// let uri = uri.append_query_item("safe", None)?;
    /// assert_eq!(
    ///     uri.as_str(),
    ///     "https://example.com/search?q=rust%20%26%20c%2B%2B&safe#results"
    /// );
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn append_query_item(&self, name: &str, value: Option<&str>) -> Result<Self, Error> {
        let parts = self.parts_for_transform()?;
        let mut query = match &parts.query {
            Some(query) if !query.is_empty() => {
                let mut query = String::from(query.as_str());
                query.push('&');
                query
            }
            _ => String::new(),
        };
        push_fmt(&mut query, PercentEncoded::new(name, &QUERY_ITEM));
        if let Some(value) = value {
            query.push('=');
            push_fmt(&mut query, PercentEncoded::new(value, &QUERY_ITEM));
        }
        self.rebuild(parts, parts.path.as_str(), Some(&query), self.fragment_str())
    }

    /// Returns a URI with the fragment replaced, or removed for `None`.
    ///
    /// The fragment is percent-encoded as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::Uri;
    ///
    /// let uri = Uri::parse("https://example.com/page#old")?;
    /// assert_eq!(
    ///     uri.setting_fragment(Some("new section"))?.as_str(),
    ///     "https://example.com/page#new%20section"
    /// );
    /// assert_eq!(uri.setting_fragment(None)?.as_str(), "https://example.com/page");
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    pub fn setting_fragment(&self, fragment: Option<&str>) -> Result<Self, Error> {
        let parts = self.parts_for_transform()?;
        let fragment = fragment.map(|raw| {
            let mut buf = String::with_capacity(raw.len());
            push_fmt(&mut buf, PercentEncoded::new(raw, &FRAGMENT));
            buf
        });
        self.rebuild(
            parts,
            parts.path.as_str(),
            parts.query.as_ref().map(Query::as_str),
            fragment.as_deref(),
        )
    }

    /// Returns the components, or an error if there are none to transform.
    fn parts_for_transform(&self) -> Result<&Components, Error> {
        self.parts.as_ref().ok_or_else(|| {
            debug!(input = self.as_str(), "no component structure to transform");
            Error::conversion_failed(&self.value, "URI has no component structure")
        })
    }

    /// Returns the fragment as a string slice.
    fn fragment_str(&self) -> Option<&str> {
        self.fragment().map(Fragment::as_str)
    }

    /// Serializes the modified components and parses the result again.
    fn rebuild(
        &self,
        parts: &Components,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self, Error> {
        let value = compose(
            parts.scheme.as_ref(),
            parts.authority.as_ref(),
            path,
            query,
            fragment,
        );
        Self::parse(&value).map_err(|e| {
            debug!(input = value.as_str(), reason = e.reason(), "rebuilt URI is invalid");
            Error::conversion_failed(&value, e.reason())
        })
    }
}

/// Appends the formatted value to the string.
fn push_fmt(buf: &mut String, value: impl fmt::Display) {
    use core::fmt::Write as _;

    // Writing into a `String` never fails.
    let _ = write!(buf, "{}", value);
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uri").field(&self.value).finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq for Uri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Uri {}

impl PartialEq<str> for Uri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Uri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<Uri> for str {
    #[inline]
    fn eq(&self, other: &Uri) -> bool {
        self == other.value
    }
}

impl PartialEq<Uri> for &str {
    #[inline]
    fn eq(&self, other: &Uri) -> bool {
        *self == other.value
    }
}

impl PartialOrd for Uri {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Uri {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl AsRef<str> for Uri {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Uri {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let parts = Components::parse(&s)?;
        Ok(Self {
            value: s,
            parts: Some(parts),
        })
    }
}

impl From<Uri> for String {
    #[inline]
    fn from(uri: Uri) -> Self {
        uri.value
    }
}

impl_serde_str!(Uri, "a URI reference");
