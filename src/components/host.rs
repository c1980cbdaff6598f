//! Host.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::charset::{HEXDIG, HOST};
use crate::parser::str::find_split_hole;
use crate::parser::validate::check_chars;
use crate::Error;

/// Host of an authority.
///
/// The variant is chosen by the first byte of the input: `[` starts an IP
/// literal, a dotted-decimal string is an IPv4 address, and anything else is
/// a registered name.
///
/// # Examples
///
/// ```
/// use uri_generic::components::Host;
///
/// assert_eq!(Host::parse("192.0.2.16")?, Host::Ipv4("192.0.2.16".into()));
/// assert_eq!(Host::parse("[2001:DB8::7]")?, Host::Ipv6("2001:db8::7".into()));
/// assert_eq!(Host::parse("Example.COM")?, Host::RegisteredName("example.com".into()));
///
/// assert!(Host::parse("192.168.001.1").is_err());
/// assert!(Host::parse("[::1").is_err());
/// # Ok::<_, uri_generic::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Host {
    /// IPv4 address in dotted-decimal form.
    Ipv4(String),
    /// IPv6 address literal, without brackets, lowercased.
    Ipv6(String),
    /// Registered name, lowercased.
    ///
    /// Hex digits of percent-encoded triplets are kept uppercase.
    RegisteredName(String),
}

impl Host {
    /// Parses a host.
    pub fn parse(s: &str) -> Result<Self, Error> {
        parse_host(s).map_err(|e| {
            debug!(input = s, reason = e.reason(), "rejected host");
            e
        })
    }

    /// Returns the host string, without brackets for IPv6.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ipv4(s) | Self::Ipv6(s) | Self::RegisteredName(s) => s,
        }
    }

    /// Returns `true` if the host is an IPv4 address.
    #[inline]
    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        matches!(self, Self::Ipv4(_))
    }

    /// Returns `true` if the host is an IPv6 literal.
    #[inline]
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        matches!(self, Self::Ipv6(_))
    }

    /// Returns `true` if the host refers to the local machine.
    ///
    /// This is `127.0.0.0/8`, `::1` in any zero-padded spelling, and
    /// `localhost`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_generic::components::Host;
    ///
    /// assert!(Host::parse("127.0.0.1")?.is_loopback());
    /// assert!(Host::parse("127.10.20.30")?.is_loopback());
    /// assert!(Host::parse("[::1]")?.is_loopback());
    /// assert!(Host::parse("[0:0:0:0:0:0:0:1]")?.is_loopback());
    /// assert!(Host::parse("LocalHost")?.is_loopback());
    /// assert!(!Host::parse("192.0.2.1")?.is_loopback());
    /// # Ok::<_, uri_generic::Error>(())
    /// ```
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        match self {
            Self::Ipv4(s) => s.split('.').next() == Some("127"),
            Self::Ipv6(s) => is_ipv6_loopback(s),
            Self::RegisteredName(s) => s == "localhost",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv6(s) => write!(f, "[{}]", s),
            Self::Ipv4(s) | Self::RegisteredName(s) => f.write_str(s),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a host, dispatching on the first byte.
fn parse_host(s: &str) -> Result<Host, Error> {
    if s.starts_with('[') {
        return parse_ip_literal(s);
    }
    match parse_ipv4(s.as_bytes()) {
        Ok(()) => return Ok(Host::Ipv4(s.into())),
        Err(reason) if looks_like_dotted_decimal(s) => {
            return Err(Error::invalid_host(s, reason, None));
        }
        Err(_) => {}
    }
    check_chars(s, &HOST)
        .map_err(|rejected| Error::invalid_host(s, rejected.reason, Some(rejected.byte)))?;
    Ok(Host::RegisteredName(lowercase_reg_name(s)))
}

/// Parses `"[" IPv6address "]"`.
///
/// The body is only checked to consist of hex digits, colons and dots (for
/// an embedded IPv4 part) with at least one colon. Grouping and `::`
/// compression are not checked.
fn parse_ip_literal(s: &str) -> Result<Host, Error> {
    let (body, after_bracket) = s
        .strip_prefix('[')
        .and_then(|rest| find_split_hole(rest, b']'))
        .ok_or_else(|| Error::invalid_host(s, "missing closing bracket", None))?;
    if let Some(&b) = after_bracket.as_bytes().first() {
        return Err(Error::invalid_host(
            s,
            "unexpected character after IP literal",
            Some(b),
        ));
    }
    if let Some(&b) = body
        .as_bytes()
        .iter()
        .find(|&&b| !(HEXDIG.contains(b) || b == b':' || b == b'.'))
    {
        return Err(Error::invalid_host(
            s,
            "disallowed character in IP literal",
            Some(b),
        ));
    }
    if !body.contains(':') {
        return Err(Error::invalid_host(s, "IP literal without a colon", None));
    }
    Ok(Host::Ipv6(body.to_ascii_lowercase()))
}

/// Checks `IPv4address` rule strictly.
///
/// Exactly four dot-separated decimal octets, each at most 255, with no
/// redundant leading zero.
fn parse_ipv4(bytes: &[u8]) -> Result<(), &'static str> {
    let mut octet_count = 0_u8;
    let mut current_octet = 0_u16;
    let mut digit_count = 0_u8;
    let mut leading_zero = false;

    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                if leading_zero {
                    return Err("IPv4 octet with a leading zero");
                }
                if digit_count == 3 {
                    return Err("IPv4 octet with too many digits");
                }
                current_octet = current_octet * 10 + u16::from(b - b'0');
                if current_octet > 255 {
                    return Err("IPv4 octet out of range");
                }
                leading_zero = digit_count == 0 && b == b'0';
                digit_count += 1;
            }
            b'.' => {
                if digit_count == 0 {
                    return Err("empty IPv4 octet");
                }
                octet_count += 1;
                if octet_count == 4 {
                    return Err("too many IPv4 octets");
                }
                current_octet = 0;
                digit_count = 0;
                leading_zero = false;
            }
            _ => return Err("not a dotted-decimal address"),
        }
    }
    if digit_count == 0 {
        return Err("empty IPv4 octet");
    }
    if octet_count != 3 {
        return Err("too few IPv4 octets");
    }
    Ok(())
}

/// Returns `true` if the string looks like an attempt at an IPv4 address.
///
/// Such strings are valid `reg-name`s by grammar, but are rejected instead
/// of being silently treated as host names.
fn looks_like_dotted_decimal(s: &str) -> bool {
    s.contains('.') && s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Returns `true` if the string is a valid IPv4 address.
///
/// # Examples
///
/// ```
/// use uri_generic::components::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("0.0.0.0"));
/// assert!(is_valid_ipv4("255.255.255.255"));
/// assert!(!is_valid_ipv4("256.0.0.1"));
/// assert!(!is_valid_ipv4("01.2.3.4"));
/// assert!(!is_valid_ipv4("1.2.3"));
/// ```
#[must_use]
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_ipv4(s.as_bytes()).is_ok()
}

/// Lowercases a registered name, keeping hex digits of percent-encoded
/// triplets uppercase.
fn lowercase_reg_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut triplet_rest = 0_u8;
    for b in s.bytes() {
        let c = if triplet_rest > 0 {
            triplet_rest -= 1;
            b.to_ascii_uppercase()
        } else {
            if b == b'%' {
                triplet_rest = 2;
            }
            b.to_ascii_lowercase()
        };
        out.push(char::from(c));
    }
    out
}

/// Returns `true` if the IPv6 literal body denotes `::1`.
fn is_ipv6_loopback(s: &str) -> bool {
    if s.contains('.') {
        return false;
    }
    let mut num_groups = 0;
    let mut groups = s.split(':').peekable();
    while let Some(group) = groups.next() {
        num_groups += 1;
        if num_groups > 8 || group.len() > 4 {
            return false;
        }
        let expected_ok = if groups.peek().is_none() {
            u16::from_str_radix(group, 16) == Ok(1)
        } else {
            group.bytes().all(|b| b == b'0')
        };
        if !expected_ok {
            return false;
        }
    }
    num_groups == 8 || s.contains("::")
}
