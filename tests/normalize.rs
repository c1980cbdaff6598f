//! Tests for normalization.

mod components;
#[macro_use]
mod utils;

use uri_generic::normalize::merge_paths;
use uri_generic::{normalize_percent_encoding, remove_dot_segments, Uri};

use self::components::TEST_CASES;

/// Semantically different URIs should not be normalized into the same URI.
#[test]
fn different_uris() {
    for case in TEST_CASES
        .iter()
        .filter(|case| !case.different_uris.is_empty())
    {
        let normalized = utils::uri(case.composed).normalized();
        for other in case.different_uris.iter().copied() {
            let other = utils::uri(other).normalized();
            assert_ne!(
                normalized, other,
                "<{}> should not be normalized to <{other}>, case={case:#?}",
                case.composed
            );
        }
    }
}

#[test]
fn normalize_uri() {
    for case in TEST_CASES.iter() {
        let normalized = utils::uri(case.composed).normalized();
        assert_eq_display!(normalized, case.normalized, "case={case:#?}");
        assert_eq!(normalized, case.normalized, "case={case:#?}");
    }
}

/// Normalization should be idempotent.
#[test]
fn normalize_idempotence() {
    for case in TEST_CASES.iter() {
        let normalized = utils::uri(case.normalized);
        assert_eq!(normalized.normalized(), normalized, "case={case:#?}");
    }
}

/// Components of the normalized URI should be the same as the ones of the
/// normalized string parsed again.
#[test]
fn normalized_components_are_consistent() {
    for case in TEST_CASES.iter() {
        let normalized = utils::uri(case.composed).normalized();
        let reparsed = utils::uri(normalized.as_str());
        assert_eq!(normalized.scheme(), reparsed.scheme(), "case={case:#?}");
        assert_eq!(normalized.authority(), reparsed.authority(), "case={case:#?}");
        assert_eq!(normalized.path(), reparsed.path(), "case={case:#?}");
        assert_eq!(normalized.query(), reparsed.query(), "case={case:#?}");
        assert_eq!(normalized.fragment(), reparsed.fragment(), "case={case:#?}");
    }
}

#[test]
fn equality_after_normalization() {
    let upper = utils::uri("HTTP://A");
    let lower = utils::uri("http://a");
    assert_ne!(upper, lower);
    assert_eq!(upper.normalized(), lower.normalized());
}

#[test]
fn normalized_value_differs_only_in_normalized_parts() {
    let uri = utils::uri("HTTP://EXAMPLE.com:80/a/./b/../%7Ec?Q=%7e#F");
    assert_eq!(uri.as_str(), "HTTP://EXAMPLE.com:80/a/./b/../%7Ec?Q=%7e#F");
    assert_eq!(uri.normalized().as_str(), "http://example.com/a/%7Ec?Q=%7e#F");
}

#[test]
fn relative_paths_are_normalized() {
    let n = |s: &str| utils::uri(s).normalized();
    assert_eq!(n("a/./b/../c"), "a/c");
    assert_eq!(n("a/./b/../c?q#f"), "a/c?q#f");
    assert_eq!(n("../../x/./y/../z"), "../../x/z");
    assert_eq!(n("a/../../b"), "../b");
    assert_eq!(n("a/..//b"), ".//b");
    assert_eq!(n("a/../b:c"), "./b:c");
    for s in ["a/./b/../c", "a/../../b", "a/..//b", "a/../b:c", "."] {
        let once = n(s);
        assert_eq!(once.normalized(), once, "s={s:?}");
        assert!(once.is_relative(), "s={s:?}");
        assert_eq!(once.authority(), None, "s={s:?}");
    }
}

/// Resolving a normalized relative reference gives the same result as
/// resolving the reference as is.
#[test]
fn relative_normalization_keeps_resolution() {
    let base = utils::uri("http://a/b/c/d;p?q");
    for s in ["a/./b/../c", "../../g/./h", "g/..", "x/../../y", ".", "a/..//b"] {
        let reference = utils::uri(s);
        assert_eq!(
            base.resolve(&reference.normalized()).expect("base is absolute"),
            base.resolve(&reference).expect("base is absolute"),
            "s={s:?}"
        );
    }
}

#[test]
fn remove_dot_segments_golden() {
    assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
    assert_eq!(remove_dot_segments("/./a/b/"), "/a/b/");
    assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
}

#[test]
fn merge_paths_golden() {
    assert_eq!(merge_paths("/b/c/d;p", true, "g"), "/b/c/g");
    assert_eq!(merge_paths("", true, "g"), "/g");
    assert_eq!(merge_paths("a/b", false, "c"), "a/c");
}

#[test]
fn percent_encoding_golden() {
    assert_eq!(normalize_percent_encoding("hello%2Dworld"), "hello-world");
    assert_eq!(normalize_percent_encoding("hello%2fworld"), "hello%2Fworld");
    assert_eq!(
        normalize_percent_encoding("/%7E%41%73%63%69%69%21"),
        "/~Ascii%21"
    );
}

/// Calls `f` with every string of the given length over the alphabet.
fn for_each_string(alphabet: &[char], len: u32, mut f: impl FnMut(&str)) {
    let n = alphabet.len();
    let mut s = String::with_capacity(len as usize);
    for mut i in 0..n.pow(len) {
        s.clear();
        for _ in 0..len {
            s.push(alphabet[i % n]);
            i /= n;
        }
        f(&s);
    }
}

/// `normalize_percent_encoding` should be idempotent for any string,
/// including ones with malformed triplets.
#[test]
fn percent_encoding_idempotence() {
    let check = |s: &str| {
        let once = normalize_percent_encoding(s);
        let twice = normalize_percent_encoding(&once);
        assert_eq!(once, twice, "s={s:?}");
    };
    for_each_string(&['%', '2', 'e', 'E', 'f', 'F', 'g', '7', 'a', '/'], 4, check);
    for_each_string(&['%', '4', '1', '3', 'e', '-'], 6, check);
}

#[test]
fn percent_encoding_normalization_keeps_uri_valid() {
    for case in TEST_CASES.iter() {
        let normalized = normalize_percent_encoding(case.composed);
        assert!(Uri::parse(&normalized).is_ok(), "case={case:#?}");
    }
}
