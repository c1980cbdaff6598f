//! URI types.
//!
//! ```text
//! URI-reference = URI / relative-ref
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! ```
//!
//! [`Uri`] holds any URI reference, so both absolute URIs and relative
//! references (including the empty string) are accepted. Use
//! [`Uri::is_relative`] to tell them apart.

mod uri;

pub use self::uri::Uri;
