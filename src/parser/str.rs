//! Functions for common string operations.
//!
//! All delimiters searched here are ASCII, so splitting a `&str` at the
//! returned positions always lands on a character boundary.

/// Returns the position of the first occurrence of the needle.
#[inline]
#[must_use]
fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the position of the last occurrence of the needle.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the position of the first occurrence of either needle.
#[inline]
#[must_use]
fn find2(haystack: &[u8], n1: u8, n2: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr2(n1, n2, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == n1 || b == n2)
    }
}

/// Returns the position of the first occurrence of any of the needles.
#[inline]
#[must_use]
fn find3(haystack: &[u8], n1: u8, n2: u8, n3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(n1, n2, n3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == n1 || b == n2 || b == n3)
    }
}

/// Splits the string at the first occurrence of the byte.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of the byte.
///
/// The delimiter is dropped.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either byte.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, n1: u8, n2: u8) -> Option<(&str, &str)> {
    find2(s.as_bytes(), n1, n2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes.
///
/// The delimiter is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, n1: u8, n2: u8, n3: u8) -> Option<(&str, &str)> {
    find3(s.as_bytes(), n1, n2, n3).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes, and
/// returns the delimiter.
///
/// The delimiter is dropped from both strings.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    n1: u8,
    n2: u8,
    n3: u8,
    n4: u8,
) -> Option<(&str, u8, &str)> {
    let pos = match find3(s.as_bytes(), n2, n3, n4) {
        // `n1` can only come before the first of the others.
        Some(pos) => find(&s.as_bytes()[..pos], n1).unwrap_or(pos),
        None => find(s.as_bytes(), n1)?,
    };
    Some((&s[..pos], s.as_bytes()[pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte.
///
/// The delimiter is dropped.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    rfind(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Decodes two hexadecimal digits at the head of the bytes.
///
/// Returns `None` if the bytes do not start with two hex digits.
#[inline]
#[must_use]
pub(crate) fn take_xdigits2(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

/// Returns the value of a single hexadecimal digit.
#[inline]
#[must_use]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
