//! Serialization of URIs and components in JSON documents.

use serde::{Deserialize, Serialize};
use serde_json::json;

use uri_generic::components::{Fragment, Path, Query, Scheme, Userinfo};
use uri_generic::Uri;

/// A document referring to other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Link {
    /// Target of the link.
    href: Uri,
    /// Scheme the target is expected to use.
    scheme: Option<Scheme>,
    /// Alternative targets.
    #[serde(default)]
    alternates: Vec<Uri>,
}

#[test]
fn uri_is_a_json_string() {
    let uri = Uri::parse("https://example.com/a?b#c").expect("valid URI");
    let value = serde_json::to_value(&uri).expect("serializable");
    assert_eq!(value, json!("https://example.com/a?b#c"));
    let back: Uri = serde_json::from_value(value).expect("deserializable");
    assert_eq!(back, uri);
}

#[test]
fn components_keep_their_string_form() {
    let uri = Uri::parse("HTTPS://Example.com/a").expect("valid URI");
    let value = serde_json::to_value(&uri).expect("serializable");
    // The URI is serialized as written, not normalized.
    assert_eq!(value, json!("HTTPS://Example.com/a"));
    let back: Uri = serde_json::from_value(value).expect("deserializable");
    assert_eq!(back.host().map(|h| h.as_str()), Some("example.com"));
}

#[test]
fn struct_round_trip() {
    let json = r#"{
        "href": "http://example.com/index.html",
        "scheme": "HTTP",
        "alternates": ["../mirror/index.html", "ftp://example.net/"]
    }"#;
    let link: Link = serde_json::from_str(json).expect("valid document");
    assert_eq!(link.href, "http://example.com/index.html");
    assert_eq!(link.scheme.as_ref().map(Scheme::as_str), Some("http"));
    assert_eq!(link.alternates.len(), 2);

    let resolved = link
        .href
        .resolve(&link.alternates[0])
        .expect("absolute base");
    assert_eq!(resolved, "http://example.com/mirror/index.html");

    let serialized = serde_json::to_string(&link).expect("serializable");
    let again: Link = serde_json::from_str(&serialized).expect("valid document");
    assert_eq!(again, link);
}

#[test]
fn text_components() {
    let value = json!({
        "userinfo": "user:pw",
        "path": "/a/b",
        "query": "q=1",
        "fragment": "top",
    });
    #[derive(Deserialize)]
    struct Parts {
        userinfo: Userinfo,
        path: Path,
        query: Query,
        fragment: Fragment,
    }
    let parts: Parts = serde_json::from_value(value).expect("valid components");
    assert_eq!(parts.userinfo.as_str(), "user:pw");
    assert_eq!(parts.path.as_str(), "/a/b");
    assert_eq!(parts.query.as_str(), "q=1");
    assert_eq!(parts.fragment.as_str(), "top");
}

#[test]
fn invalid_strings_are_rejected() {
    let e = serde_json::from_str::<Uri>(r#""http://a b/""#).expect_err("raw space");
    assert!(e.to_string().contains("raw space"), "{e}");

    let e = serde_json::from_str::<Scheme>(r#""1http""#).expect_err("leading digit");
    assert!(e.to_string().contains("scheme"), "{e}");

    assert!(serde_json::from_str::<Path>(r#""/a?b""#).is_err());
    assert!(serde_json::from_str::<Query>(r#""a#b""#).is_err());
    assert!(serde_json::from_str::<Uri>("42").is_err());
}
