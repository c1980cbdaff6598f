//! Percent encoding and decoding.
//!
//! See [RFC 3986 section 2.1](https://tools.ietf.org/html/rfc3986#section-2.1).

use core::fmt::{self, Write as _};

use alloc::string::String;
use alloc::vec::Vec;

use crate::charset::AllowedSet;
use crate::parser::str::take_xdigits2;

/// A proxy to percent-encode a byte sequence.
///
/// Each byte in the allowed set is written as is; every other byte,
/// including all non-ASCII bytes and `%` itself, is written as `%` followed
/// by two uppercase hex digits.
///
/// # Examples
///
/// ```
/// use uri_generic::charset;
/// use uri_generic::percent_encode::PercentEncoded;
///
/// let raw = "alpha/\u{03B1}?#";
/// assert_eq!(
///     PercentEncoded::new(raw, &charset::PATH_SEGMENT).to_string(),
///     "alpha%2F%CE%B1%3F%23"
/// );
/// assert_eq!(
///     PercentEncoded::new(raw, &charset::QUERY).to_string(),
///     "alpha/%CE%B1?%23"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<'a> {
    /// Raw bytes before being encoded.
    raw: &'a [u8],
    /// Bytes written without encoding.
    allowed: &'a AllowedSet,
}

impl<'a> PercentEncoded<'a> {
    /// Creates a proxy for the given raw bytes.
    #[inline]
    #[must_use]
    pub fn new<T: AsRef<[u8]> + ?Sized>(raw: &'a T, allowed: &'a AllowedSet) -> Self {
        Self {
            raw: raw.as_ref(),
            allowed,
        }
    }
}

impl fmt::Display for PercentEncoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.raw;
        while !rest.is_empty() {
            // Write the longest run of literal bytes at once.
            let literal_len = rest
                .iter()
                .position(|&b| b == b'%' || !self.allowed.contains(b))
                .unwrap_or(rest.len());
            let (literal, after) = rest.split_at(literal_len);
            // Allowed bytes are all ASCII.
            f.write_str(core::str::from_utf8(literal).map_err(|_| fmt::Error)?)?;
            if let Some((&b, after)) = after.split_first() {
                write!(f, "%{:02X}", b)?;
                rest = after;
            } else {
                rest = after;
            }
        }
        Ok(())
    }
}

/// Percent-encodes the bytes, keeping the bytes in the allowed set.
///
/// This never fails. `%` is always encoded, so that decoding the result
/// gives back the input.
///
/// # Examples
///
/// ```
/// use uri_generic::{charset, percent_encode};
///
/// assert_eq!(percent_encode("a b&c", &charset::QUERY), "a%20b&c");
/// assert_eq!(percent_encode("a b&c", &charset::QUERY_ITEM), "a%20b%26c");
/// assert_eq!(percent_encode("100%", &charset::PATH), "100%25");
/// assert_eq!(percent_encode([0xFF_u8, b'a'], &charset::PATH), "%FFa");
/// ```
#[must_use]
pub fn percent_encode<T: AsRef<[u8]>>(bytes: T, allowed: &AllowedSet) -> String {
    let bytes = bytes.as_ref();
    let mut buf = String::with_capacity(bytes.len());
    // Writing into a `String` never fails.
    let _ = write!(buf, "{}", PercentEncoded::new(bytes, allowed));
    buf
}

/// Decodes percent-encoded triplets on a best-effort basis.
///
/// Runs of consecutive triplets are decoded together and must form valid
/// UTF-8. Anything that cannot be decoded, such as `%` not followed by two
/// hex digits or triplets that decode to invalid UTF-8, is kept as is.
/// This function never fails.
///
/// # Examples
///
/// ```
/// use uri_generic::percent_decode;
///
/// assert_eq!(percent_decode("a%20b"), "a b");
/// assert_eq!(percent_decode("%E3%81%82"), "\u{3042}");
/// assert_eq!(percent_decode("100%"), "100%");
/// assert_eq!(percent_decode("%zz"), "%zz");
/// assert_eq!(percent_decode("%ff%41"), "%ffA");
/// ```
#[must_use]
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut decoded = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            let next_pct = bytes[i..]
                .iter()
                .position(|&b| b == b'%')
                .map_or(bytes.len(), |pos| i + pos);
            out.push_str(&s[i..next_pct]);
            i = next_pct;
            continue;
        }
        // Collect a run of well-formed triplets.
        let run_start = i;
        decoded.clear();
        while i < bytes.len() && bytes[i] == b'%' {
            match take_xdigits2(&bytes[(i + 1)..]) {
                Some(b) => {
                    decoded.push(b);
                    i += 3;
                }
                None => break,
            }
        }
        if decoded.is_empty() {
            // Malformed `%`.
            out.push('%');
            i += 1;
            continue;
        }
        push_decoded_run(&mut out, &decoded, &s[run_start..i]);
    }
    out
}

/// Appends a run of decoded bytes, keeping the source triplets of the bytes
/// which are not valid UTF-8.
///
/// `source` is the triplets the bytes were decoded from, three characters
/// per byte.
fn push_decoded_run(out: &mut String, decoded: &[u8], source: &str) {
    debug_assert_eq!(decoded.len() * 3, source.len());
    let mut pos = 0;
    while pos < decoded.len() {
        match core::str::from_utf8(&decoded[pos..]) {
            Ok(valid) => {
                out.push_str(valid);
                return;
            }
            Err(e) => {
                let valid_end = pos + e.valid_up_to();
                if let Ok(valid) = core::str::from_utf8(&decoded[pos..valid_end]) {
                    out.push_str(valid);
                }
                let invalid_end = match e.error_len() {
                    Some(len) => valid_end + len,
                    None => decoded.len(),
                };
                out.push_str(&source[(valid_end * 3)..(invalid_end * 3)]);
                pos = invalid_end;
            }
        }
    }
}
