//! Percent-encoding normalization and case normalization of triplets.
//!
//! See [RFC 3986 section 6.2.2.2](https://tools.ietf.org/html/rfc3986#section-6.2.2.2).

use core::fmt::{self, Write as _};

use alloc::string::{String, ToString};

use crate::charset::is_unreserved;
use crate::parser::str::{find_split_hole, take_xdigits2};

/// Writable as a percent-encoding normalized string.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode unnecessarily percent-encoded characters (`unreserved`).
/// * Convert alphabetic characters uppercase in percent-encoded triplets.
///
/// Triplets decoding to reserved or non-ASCII bytes stay encoded. A `%` not
/// followed by two hex digits is written as is, and a triplet of a hex digit
/// following it stays encoded. Raw characters are never newly encoded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a> {
    /// String to normalize.
    source: &'a str,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;
        let mut tail = Tail::default();

        while !rest.is_empty() {
            // Scan the next percent-encoded triplet.
            let (prefix, after_percent) = match find_split_hole(rest, b'%') {
                Some(v) => v,
                None => return f.write_str(rest),
            };
            // Write the string before the percent-encoded triplet.
            f.write_str(prefix)?;
            tail.push_str(prefix);
            // Decode the percent-encoded triplet.
            match take_xdigits2(after_percent.as_bytes()) {
                Some(decoded)
                    if is_unreserved(decoded)
                        && !(decoded.is_ascii_hexdigit() && tail.in_malformed_triplet()) =>
                {
                    f.write_char(char::from(decoded))?;
                    tail.push(decoded);
                    rest = &after_percent[2..];
                }
                Some(decoded) => {
                    write!(f, "%{:02X}", decoded)?;
                    tail.push_str("%00");
                    rest = &after_percent[2..];
                }
                None => {
                    f.write_char('%')?;
                    tail.push(b'%');
                    rest = after_percent;
                }
            }
        }

        Ok(())
    }
}

/// Last two bytes written.
///
/// A decoded hex digit right after a lone `%` (or a lone `%` and one hex
/// digit) would form a new triplet, and normalizing the output again would
/// decode it. Such triplets are kept encoded, so `%%41` stays `%%41`
/// rather than becoming `%A`.
#[derive(Debug, Default, Clone, Copy)]
struct Tail {
    /// Second last byte.
    prev: u8,
    /// Last byte.
    last: u8,
}

impl Tail {
    /// Records a written byte.
    fn push(&mut self, b: u8) {
        self.prev = self.last;
        self.last = b;
    }

    /// Records a written string.
    fn push_str(&mut self, s: &str) {
        for &b in s.as_bytes().iter().rev().take(2).rev() {
            self.push(b);
        }
    }

    /// Returns `true` if the output ends inside a malformed triplet.
    ///
    /// Well-formed triplets are always written whole, so a `%` within the
    /// last two bytes is a lone one.
    fn in_malformed_triplet(&self) -> bool {
        self.last == b'%' || (self.prev == b'%' && self.last.is_ascii_hexdigit())
    }
}

/// Normalizes percent-encoded triplets.
///
/// Triplets of unreserved characters are decoded, and hex digits of the
/// other triplets are uppercased. The function is idempotent.
///
/// # Examples
///
/// ```
/// use uri_generic::normalize_percent_encoding;
///
/// assert_eq!(normalize_percent_encoding("hello%2Dworld"), "hello-world");
/// assert_eq!(normalize_percent_encoding("hello%2fworld"), "hello%2Fworld");
/// assert_eq!(normalize_percent_encoding("%7euser"), "~user");
/// assert_eq!(normalize_percent_encoding("r%c3%a9sum%c3%a9"), "r%C3%A9sum%C3%A9");
/// ```
#[must_use]
pub fn normalize_percent_encoding(s: &str) -> String {
    PctCaseNormalized::new(s).to_string()
}
