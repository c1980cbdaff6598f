//! Generic syntax of [RFC 3986 URI][RFC 3986]: parsing into typed
//! components, normalization, and reference resolution.
//!
//! Comparisons between URIs by `PartialEq` and `Eq` is implemented as [simple
//! string comparison](https://tools.ietf.org/html/rfc3986#section-6.2.1).
//! Use [`Uri::normalized`] on both sides first to compare them modulo case
//! of scheme and host, default ports, and dot segments.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//!
//! # Examples
//!
//! ```
//! use uri_generic::Uri;
//!
//! let base = Uri::parse("https://Example.com:443/docs/guide/")?;
//! assert_eq!(base.host().map(|h| h.as_str()), Some("example.com"));
//! assert!(base.is_secure());
//!
//! let resolved = base.resolve_str("../api/index.html?v=2#top")?;
//! assert_eq!(resolved.as_str(), "https://example.com:443/docs/api/index.html?v=2#top");
//! assert_eq!(
//!     resolved.normalized().as_str(),
//!     "https://example.com/docs/api/index.html?v=2#top"
//! );
//! # Ok::<_, uri_generic::Error>(())
//! ```
//!
//! # Feature flags
//!
//! This crate supports `no_std` usage, but always requires `alloc`.
//!
//! * `std` (**enabled by default**):
//!     + Std library is required.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * `memchr`:
//!     + Uses [`memchr`](https://docs.rs/memchr) to search delimiters.
//! * `serde`:
//!     + Implements `Serialize` and `Deserialize` for [`Uri`] and the string components.
//!       A URI is serialized as a single string and validated on deserialization.
//! * `tracing`:
//!     + Emits [`tracing`](https://docs.rs/tracing) events: rejected input at `DEBUG`,
//!       resolution steps and normalization results at `TRACE`, and path rewrites that
//!       keep a synthesized URI unambiguous at `WARN`.
//!
//! # Rationale
//!
//! ## `foo:`, `foo:/`, `foo://`, `foo:///`, `foo:////`, ... are valid URIs
//!
//! All of these are valid URIs.
//!
//! * `foo:`
//!     + Decomposed to `<scheme="foo">:<path-empty="">`.
//! * `foo:/`
//!     + Decomposed to `<scheme="foo">:<path-absolute="/">`.
//! * `foo://`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="">`.
//! * `foo:///`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="/">`.
//! * `foo:////`
//!     + Decomposed to `<scheme="foo">://<authority=""><path-absolute="//">`.
//!
//! RFC 3986 says that "if authority is absent, path cannot start with `//`".
//!
//! > If a URI contains an authority component, then the path component must either be empty or
//! > begin with a slash ("/") character. If a URI does not contain an authority component, then the
//! > path cannot begin with two slash characters ("//").
//! >
//! > --- [RFC 3986, section 3.3. Path](https://tools.ietf.org/html/rfc3986#section-3.3)
//!
//! We interpret this as "if `authority` rule is completely unused (i.e. does not match any
//! strings **including empty string**), path cannot start with `//`". An authority with empty
//! string satisfies the condition "authority is **present**".
//!
//! When this crate synthesizes a URI (by normalization, resolution, or from components) whose
//! path would break the rule, the path is written with a `/.` prefix, as WHATWG URL Standard
//! does, so that the string parses back to the same components.
//!
//! ## A host looking like an IPv4 address must be one
//!
//! `192.168.001.1` matches `reg-name` by the ABNF, but it is rejected rather than taken as a
//! host name: a host made of digits and dots is always parsed as a strict IPv4 address.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod log;
#[macro_use]
mod macros;

pub mod charset;
pub mod components;
mod error;
pub mod normalize;
pub(crate) mod parser;
pub mod percent_encode;
pub mod resolve;
pub mod types;
pub mod validate;

pub use self::error::{Component, Error, ErrorKind};
pub use self::normalize::{normalize_percent_encoding, remove_dot_segments};
pub use self::percent_encode::{percent_decode, percent_encode};
pub use self::types::Uri;
pub use self::validate::is_valid_uri;
