//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4], and path
//! `merge` described in [RFC 3986 5.2.3].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4
//! [RFC 3986 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3

use alloc::string::String;
use alloc::vec::Vec;

use crate::parser::str::{find_split, rfind};

/// Removes `.` and `..` segments from the path.
///
/// The input buffer is consumed from the head while the output buffer grows
/// at the tail. Overlapping prefixes are checked in the order the RFC lists
/// them.
///
/// # Examples
///
/// ```
/// use uri_generic::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("/./a/b/"), "/a/b/");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input
            .strip_prefix("../")
            .or_else(|| input.strip_prefix("./"))
        {
            // 2.A.
            input = rest;
        } else if input.starts_with("/./") {
            // 2.B ("/./").
            input = &input[2..];
        } else if input == "/." {
            // 2.B ("/.").
            input = "/";
        } else if input.starts_with("/../") {
            // 2.C ("/../").
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            // 2.C ("/..").
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // 2.D.
            input = "";
        } else {
            // 2.E.
            let (segment, rest) = split_first_segment(input);
            output.push_str(segment);
            input = rest;
        }
    }

    output
}

/// Splits the first segment (with its leading slash, if any) off the path.
#[must_use]
fn split_first_segment(path: &str) -> (&str, &str) {
    let skip = usize::from(path.starts_with('/'));
    match find_split(&path[skip..], b'/') {
        Some((segment, rest)) => (&path[..(skip + segment.len())], rest),
        None => (path, ""),
    }
}

/// Removes the last segment and its preceding slash (if any) from the
/// output buffer.
fn pop_last_segment(output: &mut String) {
    match rfind(output.as_bytes(), b'/') {
        Some(slash_pos) => output.truncate(slash_pos),
        None => output.clear(),
    }
}

/// Removes `.` and `..` segments from a rootless relative path.
///
/// [`remove_dot_segments`] assumes a path resolved against a base, and for
/// a rootless path it can drop a leading `..` or produce a path starting
/// with `/`. This variant keeps the path relative:
///
/// * A `..` pops the previous segment, unless there is none or it is a
///   `..` itself; then the `..` is kept.
/// * A path ending with a removed dot segment keeps a trailing `/`, and a
///   path with every segment removed becomes `./` (or `` if it was empty).
/// * A path whose first kept segment is empty gets a `./` prefix.
pub(crate) fn remove_dot_segments_relative(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut segments: Vec<&str> = Vec::new();
    let mut trailing_slash = false;
    let mut iter = path.split('/').peekable();
    while let Some(segment) = iter.next() {
        let is_last = iter.peek().is_none();
        trailing_slash = match segment {
            "." => is_last,
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                    is_last
                }
                _ => {
                    segments.push(segment);
                    false
                }
            },
            "" if is_last => true,
            _ => {
                segments.push(segment);
                false
            }
        };
    }

    let mut output = String::with_capacity(path.len() + 2);
    match segments.first() {
        None => {
            if trailing_slash {
                output.push_str("./");
            }
            return output;
        }
        Some(&"") => output.push_str("./"),
        Some(_) => {}
    }
    for (i, segment) in segments.iter().enumerate() {
        if i != 0 {
            output.push('/');
        }
        output.push_str(segment);
    }
    if trailing_slash {
        output.push('/');
    }
    output
}

/// Merges a relative-path reference with the path of the base URI.
///
/// If the base has an authority and an empty path, the result is `/`
/// followed by the reference path. Otherwise the last segment of the base
/// path is replaced by the reference path.
///
/// # Examples
///
/// ```
/// use uri_generic::normalize::merge_paths;
///
/// assert_eq!(merge_paths("/b/c/d;p", true, "g"), "/b/c/g");
/// assert_eq!(merge_paths("", true, "g"), "/g");
/// assert_eq!(merge_paths("mid/", false, "6"), "mid/6");
/// assert_eq!(merge_paths("", false, "g"), "g");
/// ```
#[must_use]
pub fn merge_paths(base_path: &str, base_has_authority: bool, reference: &str) -> String {
    let mut merged = String::with_capacity(base_path.len() + reference.len() + 1);
    if base_has_authority && base_path.is_empty() {
        merged.push('/');
    } else if let Some(last_slash_pos) = rfind(base_path.as_bytes(), b'/') {
        merged.push_str(&base_path[..=last_slash_pos]);
    }
    merged.push_str(reference);
    merged
}
