//! String-backed components: userinfo, path, query, and fragment.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::charset::{AllowedSet, FRAGMENT, PATH, QUERY, USERINFO};
use crate::error::{Component, Error};
use crate::parser::validate::check_chars;
use crate::percent_encode::percent_encode;

/// Validates the string as the given component.
fn validate(component: Component, s: &str, allowed: &AllowedSet) -> Result<(), Error> {
    check_chars(s, allowed).map_err(|rejected| {
        debug!(
            component = component.name(),
            input = s,
            byte = rejected.byte,
            reason = rejected.reason,
            "rejected component"
        );
        rejected.into_component_error(component, s)
    })
}

/// Defines a validated string component type.
macro_rules! define_text_component {
    (
        $(#[$meta:meta])*
        $name:ident, $component:expr, $allowed:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Parses the component, rejecting the first disallowed byte.
            ///
            /// Percent-encoded triplets must be well-formed. Case is kept.
            pub fn parse(s: &str) -> Result<Self, Error> {
                validate($component, s, &$allowed)?;
                Ok(Self(s.into()))
            }

            /// Creates the component from a raw string, percent-encoding
            /// every byte that is not allowed literally.
            ///
            /// `%` is always encoded.
            #[must_use]
            pub fn encode(raw: &str) -> Self {
                Self(percent_encode(raw, &$allowed))
            }

            /// Returns the component as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the component is an empty string.
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                validate($component, &s, &$allowed)?;
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl_serde_str!($name, concat!("a URI ", stringify!($name)));
    };
}

define_text_component! {
    /// Userinfo of an authority, without the trailing `@`.
    ///
    /// This corresponds to `userinfo` rule in RFC 3986:
    /// `*( unreserved / pct-encoded / sub-delims / ":" )`.
    Userinfo, Component::Userinfo, USERINFO
}

define_text_component! {
    /// Path of a URI reference.
    ///
    /// Segments are separated by `/`; each consists of `pchar`s.
    /// The path may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::components::Path;
    ///
    /// let path = Path::parse("/over/there")?;
    /// assert!(path.is_absolute());
    /// assert_eq!(path.segments().collect::<Vec<_>>(), ["over", "there"]);
    ///
    /// assert_eq!(Path::encode("/a b/c%").as_str(), "/a%20b/c%25");
    /// assert!(Path::parse("/a b").is_err());
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    Path, Component::Path, PATH
}

define_text_component! {
    /// Query, without the leading `?`.
    Query, Component::Query, QUERY
}

define_text_component! {
    /// Fragment, without the leading `#`.
    ///
    /// Note that the first `#` character in a URI is not a part of a fragment.
    /// For example, `https://example.com/#foo` has a fragment `foo`, **not** `#foo`.
    Fragment, Component::Fragment, FRAGMENT
}

impl Path {
    /// Returns `true` if the path starts with a slash.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Returns an iterator of the path segments.
    ///
    /// The leading slash of an absolute path does not produce an empty
    /// segment. The empty path has no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let path = self.0.strip_prefix('/').unwrap_or(&self.0);
        path.split('/').filter(move |_| !self.0.is_empty())
    }
}
