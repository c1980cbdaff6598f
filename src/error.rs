//! URI parsing and manipulation error.

use core::fmt;

use alloc::string::String;

/// URI component, used to report which part of an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// `scheme`.
    Scheme,
    /// `userinfo`.
    Userinfo,
    /// `host`.
    Host,
    /// `port`.
    Port,
    /// `path`.
    Path,
    /// `query`.
    Query,
    /// `fragment`.
    Fragment,
}

impl Component {
    /// Returns the RFC 3986 rule name of the component.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Userinfo => "userinfo",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The whole string failed structural or character validation.
    InvalidUri,
    /// A component violates its grammar.
    InvalidComponent,
    /// The host is malformed.
    ///
    /// Missing closing bracket of an IP literal, bytes after the closing
    /// bracket, IP literal without a colon, malformed dotted-decimal address,
    /// or disallowed character in a registered name.
    InvalidHost,
    /// A transform could not synthesize a valid URI.
    ConversionFailed,
}

/// URI error.
///
/// Every error carries the input that failed and a short static reason.
/// Component-level errors also name the component, and the offending byte
/// when there is one.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Rejected component, if known.
    component: Option<Component>,
    /// Raw input that failed.
    input: String,
    /// Offending byte, if any.
    byte: Option<u8>,
    /// Description of the failure.
    reason: &'static str,
}

impl Error {
    /// Creates an `InvalidUri` error.
    pub(crate) fn invalid_uri(input: &str, reason: &'static str, byte: Option<u8>) -> Self {
        Self {
            kind: ErrorKind::InvalidUri,
            component: None,
            input: input.into(),
            byte,
            reason,
        }
    }

    /// Creates an `InvalidComponent` error.
    pub(crate) fn invalid_component(
        component: Component,
        input: &str,
        reason: &'static str,
        byte: Option<u8>,
    ) -> Self {
        Self {
            kind: ErrorKind::InvalidComponent,
            component: Some(component),
            input: input.into(),
            byte,
            reason,
        }
    }

    /// Creates an `InvalidHost` error.
    pub(crate) fn invalid_host(input: &str, reason: &'static str, byte: Option<u8>) -> Self {
        Self {
            kind: ErrorKind::InvalidHost,
            component: Some(Component::Host),
            input: input.into(),
            byte,
            reason,
        }
    }

    /// Creates a `ConversionFailed` error.
    pub(crate) fn conversion_failed(input: &str, reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::ConversionFailed,
            component: None,
            input: input.into(),
            byte: None,
            reason,
        }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the rejected component, if the error is component-level.
    #[inline]
    #[must_use]
    pub fn component(&self) -> Option<Component> {
        self.component
    }

    /// Returns the raw input that failed.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the offending byte, if any.
    #[inline]
    #[must_use]
    pub fn byte(&self) -> Option<u8> {
        self.byte
    }

    /// Returns a short description of the failure.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("component", &self.component)
            .field("input", &self.input)
            .field("byte", &self.byte.map(char::from))
            .field("reason", &self.reason)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidUri => write!(f, "invalid URI {:?}: {}", self.input, self.reason)?,
            ErrorKind::InvalidComponent | ErrorKind::InvalidHost => match self.component {
                Some(component) => write!(
                    f,
                    "invalid {} {:?}: {}",
                    component, self.input, self.reason
                )?,
                None => write!(f, "invalid component {:?}: {}", self.input, self.reason)?,
            },
            ErrorKind::ConversionFailed => write!(
                f,
                "URI conversion failed for {:?}: {}",
                self.input, self.reason
            )?,
        }
        if let Some(byte) = self.byte {
            write!(f, " (byte 0x{:02X})", byte)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
