//! Splitting of URI references into raw component strings.
//!
//! The functions here never fail: any string splits into components by the
//! positions of the delimiters. Whether each piece matches its grammar is
//! checked by the component parsers afterwards.

use crate::components::RawComponents;
use crate::parser::str::{
    find_split2, find_split3, find_split4_hole, find_split_hole, rfind_split_hole,
};

/// Eats a `scheme` and a following colon if available, and returns the rest
/// and the scheme candidate.
///
/// A colon that comes after `/`, `?` or `#` does not delimit a scheme.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns
/// the rest and the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character won't appear in `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns the rest and the path.
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((path, rest)) => (rest, path),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?` or `#`, or be empty.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Decomposes the given URI reference into raw components.
#[must_use]
pub(crate) fn decompose_uri_reference(i: &str) -> RawComponents<'_> {
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (i, path) = until_query(i);
    let (query, fragment) = decompose_query_and_fragment(i);
    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Raw components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    /// Userinfo, without the trailing `@`.
    pub(crate) userinfo: Option<&'a str>,
    /// Host, including brackets of an IP literal.
    pub(crate) host: &'a str,
    /// Port, without the leading `:`.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) port: Option<&'a str>,
}

/// Decomposes the authority into `(userinfo, host, port)`.
///
/// A colon inside an IP literal is part of the host. Anything other than a
/// colon after the closing bracket is left in the host for the host parser
/// to reject.
#[must_use]
pub(crate) fn decompose_authority(authority: &str) -> RawAuthority<'_> {
    let (userinfo, i) = match find_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };
    let (host, port) = if i.starts_with('[') {
        match find_split_hole(i, b']') {
            Some((_, after_bracket)) => {
                let host_end = i.len() - after_bracket.len();
                match after_bracket.strip_prefix(':') {
                    Some(port) => (&i[..host_end], Some(port)),
                    None => (i, None),
                }
            }
            None => (i, None),
        }
    } else {
        match rfind_split_hole(i, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (i, None),
        }
    };
    RawAuthority {
        userinfo,
        host,
        port,
    }
}
