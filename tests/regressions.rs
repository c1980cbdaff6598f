//! Edge cases that once behaved surprisingly.

mod utils;

use std::collections::HashSet;

use uri_generic::components::Host;
use uri_generic::{ErrorKind, Uri};

mod port {
    use super::*;

    #[test]
    fn empty_port_is_absent() {
        let uri = utils::uri("http://example.com:/");
        assert_eq!(uri.port(), None);
        assert_eq!(uri.as_str(), "http://example.com:/");
        assert_eq!(uri.normalized(), "http://example.com/");
    }

    #[test]
    fn port_bounds() {
        assert_eq!(utils::uri("http://a:0/").port(), Some(0));
        assert_eq!(utils::uri("http://a:65535/").port(), Some(65535));
        assert_eq!(utils::uri("http://a:0080/").port(), Some(80));
        let e = Uri::parse("http://a:65536/").expect_err("out of range");
        assert_eq!(e.kind(), ErrorKind::InvalidComponent);
    }

    #[test]
    fn leading_zeros_in_default_port() {
        // The number is compared, not the digits.
        assert_eq!(utils::uri("http://a:0080/").normalized(), "http://a/");
    }

    #[test]
    fn default_port_of_other_scheme_is_kept() {
        assert_eq!(utils::uri("http://a:443/").normalized(), "http://a:443/");
        assert_eq!(utils::uri("foo://a:80/").normalized(), "foo://a:80/");
    }
}

mod host {
    use super::*;

    #[test]
    fn empty_host() {
        let uri = utils::uri("file:///etc/hosts");
        assert_eq!(uri.host(), Some(&Host::RegisteredName(String::new())));
        assert_eq!(uri.path().map(|p| p.as_str()), Some("/etc/hosts"));
        assert_eq!(uri.normalized(), "file:///etc/hosts");
    }

    #[test]
    fn ipv6_with_embedded_ipv4() {
        let uri = utils::uri("http://[::FFFF:192.0.2.1]:8080/");
        assert_eq!(uri.host(), Some(&Host::Ipv6("::ffff:192.0.2.1".into())));
        assert_eq!(uri.port(), Some(8080));
        assert_eq!(uri.normalized(), "http://[::ffff:192.0.2.1]:8080/");
    }

    #[test]
    fn unterminated_ip_literal() {
        for s in ["http://[::1", "http://[::1/", "//[::1?x"] {
            let e = Uri::parse(s).expect_err("unterminated IP literal");
            assert_eq!(e.kind(), ErrorKind::InvalidHost, "{s:?}");
        }
    }

    #[test]
    fn zero_padded_ipv4_is_not_a_reg_name() {
        let e = Uri::parse("http://192.168.001.1/").expect_err("leading zero");
        assert_eq!(e.kind(), ErrorKind::InvalidHost);
        assert!(Uri::parse("http://192.168.1.1/").is_ok());
    }

    #[test]
    fn loopback() {
        for s in [
            "http://localhost/",
            "http://LOCALHOST:8080/",
            "http://127.0.0.1/",
            "http://127.255.255.254/",
            "http://[::1]/",
            "http://[0000::0001]/",
        ] {
            let uri = utils::uri(s);
            assert!(uri.host().map_or(false, Host::is_loopback), "{s:?}");
        }
        for s in [
            "http://example.com/",
            "http://128.0.0.1/",
            "http://[::2]/",
            "http://localhost.example/",
        ] {
            let uri = utils::uri(s);
            assert!(!uri.host().map_or(false, Host::is_loopback), "{s:?}");
        }
    }
}

mod predicates {
    use super::*;

    #[test]
    fn secure_and_http() {
        let check = |s: &str, secure: bool, http: bool| {
            let uri = utils::uri(s);
            assert_eq!(uri.is_secure(), secure, "{s:?}");
            assert_eq!(uri.is_http(), http, "{s:?}");
        };
        check("https://a/", true, true);
        check("HTTPS://a/", true, true);
        check("http://a/", false, true);
        check("wss://a/", true, false);
        check("ws://a/", false, false);
        check("ftps://a/", true, false);
        check("//a/", false, false);
        check("", false, false);
    }

    #[test]
    fn relative() {
        assert!(utils::uri("").is_relative());
        assert!(utils::uri("//a").is_relative());
        assert!(!utils::uri("a:b").is_relative());
        assert!(utils::uri("./a:b").is_relative());
    }
}

mod equality {
    use super::*;

    #[test]
    fn string_equality() {
        let a = utils::uri("http://a/%7e");
        let b = utils::uri("http://a/%7E");
        assert_ne!(a, b);
        assert_eq!(a, "http://a/%7e");
        assert_eq!("http://a/%7e", a);
        assert_eq!(a.normalized(), a);
    }

    #[test]
    fn hash_agrees_with_eq() {
        let set: HashSet<Uri> = ["http://a/", "HTTP://A/", "http://a/"]
            .into_iter()
            .map(utils::uri)
            .collect();
        assert_eq!(set.len(), 2);
        let normalized: HashSet<Uri> = set.iter().map(Uri::normalized).collect();
        assert_eq!(normalized.len(), 1);
    }

    #[test]
    fn ordering_is_by_string() {
        let mut uris: Vec<Uri> = ["b:", "a:z", "a:b"].into_iter().map(utils::uri).collect();
        uris.sort();
        let sorted: Vec<&str> = uris.iter().map(Uri::as_str).collect();
        assert_eq!(sorted, ["a:b", "a:z", "b:"]);
    }
}

mod delimiters {
    use super::*;

    #[test]
    fn question_mark_and_slash_in_query_and_fragment() {
        let uri = utils::uri("http://a/b?c/d?e#f/g?h");
        assert_eq!(uri.query().map(|q| q.as_str()), Some("c/d?e"));
        assert_eq!(uri.fragment().map(|f| f.as_str()), Some("f/g?h"));
        // Dot segments in the query are not removed.
        assert_eq!(utils::uri("http://a/?./../x").normalized(), "http://a/?./../x");
    }

    #[test]
    fn colons_in_userinfo() {
        let uri = utils::uri("ftp://a:b:c@host/");
        assert_eq!(uri.userinfo().map(|u| u.as_str()), Some("a:b:c"));
        assert_eq!(uri.host().map(Host::as_str), Some("host"));
    }

    #[test]
    fn at_sign_in_path_is_not_userinfo() {
        let uri = utils::uri("http://host/a@b");
        assert_eq!(uri.userinfo(), None);
        assert_eq!(uri.path().map(|p| p.as_str()), Some("/a@b"));
    }

    #[test]
    fn double_slash_path_without_authority() {
        // Removing `./` leaves `//x`, which would be read as an authority.
        let uri = utils::uri("scheme:.///x");
        assert_eq!(uri.authority(), None);
        let normalized = uri.normalized();
        assert_eq!(normalized, "scheme:/.//x");
        assert_eq!(normalized.authority(), None);
        assert_eq!(normalized.normalized(), normalized);
    }
}
