//! Authority.

use core::fmt;
use core::str::FromStr;

use crate::components::{Host, Scheme, Userinfo};
use crate::error::{Component, Error};
use crate::parser::decompose::decompose_authority;

/// Authority component: `[ userinfo "@" ] host [ ":" port ]`.
///
/// The `@` and `:` delimiters are structural and not part of any field.
///
/// # Examples
///
/// ```
/// use uri_generic::components::{Authority, Host};
///
/// let authority = Authority::parse("user:pw@Example.com:8080")?;
/// assert_eq!(authority.userinfo().map(|u| u.as_str()), Some("user:pw"));
/// assert_eq!(authority.host(), &Host::RegisteredName("example.com".into()));
/// assert_eq!(authority.port(), Some(8080));
/// assert_eq!(authority.to_string(), "user:pw@example.com:8080");
/// # Ok::<_, uri_generic::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    /// Userinfo.
    userinfo: Option<Userinfo>,
    /// Host.
    host: Host,
    /// Port.
    port: Option<u16>,
}

impl Authority {
    /// Creates an authority from already validated parts.
    #[inline]
    #[must_use]
    pub fn new(userinfo: Option<Userinfo>, host: Host, port: Option<u16>) -> Self {
        Self {
            userinfo,
            host,
            port,
        }
    }

    /// Parses an authority.
    ///
    /// An empty port (as in `example.com:`) is treated as absent.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let raw = decompose_authority(s);
        let userinfo = raw.userinfo.map(Userinfo::parse).transpose()?;
        let host = Host::parse(raw.host)?;
        let port = match raw.port {
            Some(port) => parse_port(port)?,
            None => None,
        };
        Ok(Self {
            userinfo,
            host,
            port,
        })
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&Userinfo> {
        self.userinfo.as_ref()
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the authority with the port dropped if it is the default
    /// port of the scheme.
    #[must_use]
    pub(crate) fn without_default_port(&self, scheme: Option<&Scheme>) -> Self {
        let port = match (self.port, scheme.and_then(Scheme::default_port)) {
            (Some(port), Some(default)) if port == default => None,
            (port, _) => port,
        };
        Self {
            userinfo: self.userinfo.clone(),
            host: self.host.clone(),
            port,
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

impl FromStr for Authority {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a port.
///
/// Returns `Ok(None)` for the empty string, since `port = *DIGIT` allows it
/// and it means the same as an absent port.
///
/// # Examples
///
/// ```
/// use uri_generic::components::parse_port;
///
/// assert_eq!(parse_port("8080")?, Some(8080));
/// assert_eq!(parse_port("0")?, Some(0));
/// assert_eq!(parse_port("")?, None);
/// assert!(parse_port("65536").is_err());
/// assert!(parse_port("80a").is_err());
/// # Ok::<_, uri_generic::Error>(())
/// ```
pub fn parse_port(s: &str) -> Result<Option<u16>, Error> {
    if s.is_empty() {
        return Ok(None);
    }
    let mut port = 0_u16;
    for &b in s.as_bytes() {
        if !b.is_ascii_digit() {
            debug!(input = s, byte = b, "rejected port");
            return Err(Error::invalid_component(
                Component::Port,
                s,
                "non-digit in port",
                Some(b),
            ));
        }
        port = port
            .checked_mul(10)
            .and_then(|p| p.checked_add(u16::from(b - b'0')))
            .ok_or_else(|| Error::invalid_component(Component::Port, s, "port out of range", None))?;
    }
    Ok(Some(port))
}
