// Domain decomposition tests.

use super::*;

const LIST: &str = include_str!("../../tests/fixtures/public_suffix_list.dat");

fn database() -> SuffixDatabase {
    SuffixDatabase::parse(LIST).expect("fixture list should parse")
}

// input, suffix, registrable label, subdomain, private
const VALID_DOMAINS: &[(&str, &str, &str, Option<&str>, bool)] = &[
    // gtld
    ("goat.com", "com", "goat", None, false),
    // gtld with subdomain
    ("www.goat.com", "com", "goat", Some("www"), false),
    // gtld with unicode subdomain
    ("рф.goat.com", "com", "goat", Some("xn--p1ai"), false),
    // gtld with punycode subdomain
    ("xn--p1ai.goat.com", "com", "goat", Some("xn--p1ai"), false),
    // cctld
    ("goat.ca", "ca", "goat", None, false),
    // 2-piece cctld
    ("goat.co.uk", "co.uk", "goat", None, false),
    // 2-piece cctld with subdomain
    ("www.goat.co.uk", "co.uk", "goat", Some("www"), false),
    // private suffix, private rules not allowed
    ("uk.com", "com", "uk", None, false),
    ("goat.uk.com", "com", "uk", Some("goat"), false),
    ("www.goat.uk.com", "com", "uk", Some("www.goat"), false),
    // unicode tld
    ("goat.рф", "xn--p1ai", "goat", None, false),
    // punycode tld
    ("goat.xn--p1ai", "xn--p1ai", "goat", None, false),
    // unicode tld and label
    ("рф.рф", "xn--p1ai", "xn--p1ai", None, false),
    ("www.рф.рф", "xn--p1ai", "xn--p1ai", Some("www"), false),
    ("рф.рф.рф", "xn--p1ai", "xn--p1ai", Some("xn--p1ai"), false),
    // unicode label with gtld
    ("рф.com", "com", "xn--p1ai", None, false),
    // new gtld
    ("goat.wtf", "wtf", "goat", None, false),
    // wildcard
    ("goat.com.bn", "com.bn", "goat", None, false),
    // exception
    ("www.ck", "ck", "www", None, false),
    ("a.b.www.ck", "ck", "www", Some("a.b"), false),
    // port and trailing dot
    ("www.goat.com:8080", "com", "goat", Some("www"), false),
    ("www.goat.com.", "com", "goat", Some("www"), false),
];

const VALID_PRIVATE_DOMAINS: &[(&str, &str, &str, Option<&str>, bool)] = &[
    ("goat.uk.com", "uk.com", "goat", None, true),
    ("www.goat.uk.com", "uk.com", "goat", Some("www"), true),
    // public match when no private rule applies
    ("www.goat.co.uk", "co.uk", "goat", Some("www"), false),
    ("goat.blogspot.co.uk", "blogspot.co.uk", "goat", None, true),
];

const INVALID_DOMAINS: &[&str] = &[
    // unknown tld with no label
    "goat",
    // unknown tld with label
    "sub.goat",
    // unknown unicode tld
    "gфat",
    "sub.gфat",
    // unknown punycode tld
    "xn--gat-hfd",
    "sub.xn--gat-hfd",
    // suffix with no label
    "com",
    "co.uk",
    // wildcard swallows the only label
    "goat.bn",
    // tld missing from the list
    "test.テスト",
    // empty labels
    ".goat.com",
    "www..goat.com",
    // hyphen edges
    "-goat.com",
    "goat-.com",
    "www.-goat.com",
    // bad characters
    "go_at.com",
    "goat!.com",
    // empty input
    "",
];

const INVALID_PRIVATE_DOMAINS: &[&str] = &["co.uk", "uk.com"];

#[test]
fn test_valid_domain_parsing() {
    let db = database();
    for &(input, suffix, label, subdomain, private) in VALID_DOMAINS {
        let domain = db.decompose(input);
        assert!(domain.valid(), "expected valid: {input}");
        assert_eq!(domain.suffix(), Some(suffix), "suffix of {input}");
        assert_eq!(domain.registrable_label(), Some(label), "label of {input}");
        assert_eq!(domain.subdomain(), subdomain, "subdomain of {input}");
        assert_eq!(domain.private(), private, "private of {input}");
    }
}

#[test]
fn test_private_domain_parsing() {
    let db = database();
    for &(input, suffix, label, subdomain, private) in VALID_PRIVATE_DOMAINS {
        let domain = db.decompose_with(input, true);
        assert!(domain.valid(), "expected valid: {input}");
        assert_eq!(domain.suffix(), Some(suffix), "suffix of {input}");
        assert_eq!(domain.registrable_label(), Some(label), "label of {input}");
        assert_eq!(domain.subdomain(), subdomain, "subdomain of {input}");
        assert_eq!(domain.private(), private, "private of {input}");
    }
}

#[test]
fn test_invalid_domain_parsing() {
    let db = database();
    for &input in INVALID_DOMAINS {
        let domain = db.decompose(input);
        assert!(!domain.valid(), "expected invalid: {input}");
        assert!(!domain.valid_host(), "expected invalid host: {input}");
    }
}

#[test]
fn test_invalid_private_domain_parsing() {
    let db = database();
    for &input in INVALID_PRIVATE_DOMAINS {
        let domain = db.decompose_with(input, true);
        assert!(!domain.valid(), "expected invalid: {input}");
    }
}

#[test]
fn test_suffix_present_iff_label_present() {
    let db = database();
    let inputs = VALID_DOMAINS
        .iter()
        .map(|entry| entry.0)
        .chain(INVALID_DOMAINS.iter().copied());
    for input in inputs {
        for allow_private in [false, true] {
            let domain = db.decompose_with(input, allow_private);
            assert_eq!(
                domain.suffix().is_some(),
                domain.registrable_label().is_some(),
                "input: {input}"
            );
            if domain.subdomain().is_some() {
                assert!(domain.suffix().is_some(), "input: {input}");
            }
            if domain.valid() {
                assert!(domain.valid_host(), "input: {input}");
            }
        }
    }
}

#[test]
fn test_redecomposing_ascii_form_is_idempotent() {
    let db = database();
    for &(input, ..) in VALID_DOMAINS {
        let first = db.decompose(input);
        let second = db.decompose(first.ascii_form());
        assert_eq!(first, second, "input: {input}");
        assert!(second.valid(), "input: {input}");
        assert_eq!(first.ascii_form(), second.ascii_form());
    }
}

#[test]
fn test_longest_match_precedence() {
    let db = database();
    let domain = db.decompose("www.example.co.uk");
    assert_eq!(domain.suffix(), Some("co.uk"));
    assert_eq!(domain.registrable_label(), Some("example"));
    assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
}

#[test]
fn test_exception_overrides_wildcard() {
    let db = database();
    let domain = db.decompose("www.ck");
    assert_eq!(domain.suffix(), Some("ck"));
    assert_eq!(domain.registrable_label(), Some("www"));
    assert_eq!(domain.subdomain(), None);

    let other = db.decompose("goat.other.ck");
    assert_eq!(other.suffix(), Some("other.ck"));
    assert_eq!(other.registrable_label(), Some("goat"));
}

#[test]
fn test_wildcard_leftmost_label() {
    let db = database();
    let domain = db.decompose("*.example.com");
    assert!(domain.valid_host());
    assert!(!domain.valid());
    assert_eq!(domain.subdomain(), Some("*"));
    assert_eq!(domain.registrable_label(), Some("example"));
    assert_eq!(domain.registrable_domain(), None);
}

#[test]
fn test_wildcard_not_leftmost_is_invalid() {
    let db = database();
    let domain = db.decompose("www.*.example.com");
    assert!(!domain.valid_host());
    assert!(!domain.valid());
}

#[test]
fn test_private_gating() {
    let db = database();
    let public = db.decompose_with("goat.uk.com", false);
    assert_eq!(public.suffix(), Some("com"));
    assert!(!public.private());

    let private = db.decompose_with("goat.uk.com", true);
    assert_eq!(private.suffix(), Some("uk.com"));
    assert!(private.private());
    assert!(private.valid());
}

#[test]
fn test_nested_wildcard_and_exception() {
    let db = database();
    let domain = db.decompose("www.goat.foo.kawasaki.jp");
    assert_eq!(domain.suffix(), Some("foo.kawasaki.jp"));
    assert_eq!(domain.registrable_label(), Some("goat"));
    assert_eq!(domain.subdomain(), Some("www"));

    let city = db.decompose("www.city.kawasaki.jp");
    assert_eq!(city.suffix(), Some("kawasaki.jp"));
    assert_eq!(city.registrable_label(), Some("city"));
    assert_eq!(city.subdomain(), Some("www"));
}

#[test]
fn test_unicode_round_trip_equality() {
    let db = database();
    let unicode = db.decompose("www.рф.рф");
    let ascii = db.decompose("www.xn--p1ai.xn--p1ai");
    assert_eq!(unicode, ascii);
    assert_eq!(unicode.text(), "www.рф.рф");
    assert_eq!(ascii.text(), "www.рф.рф");
    assert_eq!(unicode.ascii_form(), "www.xn--p1ai.xn--p1ai");
}

#[test]
fn test_equality_ignores_flags() {
    let db = database();
    // Same parts, one valid and one only a valid host
    let wildcard = db.decompose("*.example.com");
    assert!(!wildcard.valid());
    assert_eq!(wildcard, db.decompose("*.example.com"));
    assert_ne!(wildcard, db.decompose("www.example.com"));

    // Same parts, different case and port
    assert_eq!(db.decompose("WWW.Example.com:80"), db.decompose("www.example.com"));
    assert_ne!(db.decompose("www.goat.com"), db.decompose("www2.goat.com"));
}

#[test]
fn test_hash_consistent_with_equality() {
    use std::collections::HashSet;
    let db = database();
    let set: HashSet<Domain> = ["www.рф.рф", "www.xn--p1ai.xn--p1ai", "WWW.рф.рф."]
        .iter()
        .map(|input| db.decompose(input))
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_label_too_long() {
    let db = database();
    let label = "a".repeat(64);
    let domain = db.decompose(&format!("{label}.com"));
    assert!(!domain.valid());
    assert!(!domain.valid_host());

    let label = "a".repeat(63);
    assert!(db.decompose(&format!("{label}.com")).valid());
}

#[test]
fn test_domain_too_long() {
    let db = database();
    let label = "a".repeat(63);
    // 4 * 63 + 3 dots + ".com" = 259 characters
    let input = format!("{label}.{label}.{label}.{label}.com");
    let domain = db.decompose(&input);
    assert!(domain.suffix().is_some());
    assert!(!domain.valid());
    assert!(!domain.valid_host());

    // 3 * 63 + ".com" plus separators stays under the limit
    let input = format!("{label}.{label}.{label}.com");
    assert!(db.decompose(&input).valid());
}

#[test]
fn test_encoding_error_sets_error_flag() {
    let db = database();
    let domain = db.decompose("xn--_.goat.com");
    assert!(matches!(domain.error(), Some(EncodingError::Punycode { .. })));
    assert!(!domain.valid());
    assert!(!domain.valid_host());
    assert_eq!(domain.suffix(), None);
    assert_eq!(domain.ascii_form(), "");
}

#[test]
fn test_decompose_bytes() {
    let db = database();
    let domain = Decomposer::new(&db).decompose_bytes("www.рф.рф".as_bytes());
    assert!(domain.valid());
    assert_eq!(domain.suffix(), Some("xn--p1ai"));

    let broken = Decomposer::new(&db).decompose_bytes(b"www.\xffgoat.com");
    assert!(matches!(broken.error(), Some(EncodingError::InvalidUtf8(_))));
    assert!(!broken.valid());
}

#[test]
fn test_display_uses_ascii_form() {
    let db = database();
    assert_eq!(db.decompose("WWW.рф.com").to_string(), "www.xn--p1ai.com");
}

#[test]
fn test_resolver_for_unknown_root() {
    let db = database();
    let resolver = |label: &str| label == "internal";

    let without = db.decompose("www.goat.internal");
    assert!(!without.valid());

    let decomposer = Decomposer::new(&db).with_resolver(&resolver);
    let with = decomposer.decompose("www.goat.internal");
    assert!(with.valid());
    assert_eq!(with.suffix(), Some("internal"));
    assert_eq!(with.registrable_label(), Some("goat"));
    assert!(!with.private());

    // Listed roots never reach the resolver, and rejected roots stay invalid
    assert_eq!(decomposer.decompose("goat.com").suffix(), Some("com"));
    assert!(!decomposer.decompose("goat.unknown").valid());
    // A single label is never a registrable host
    assert!(!decomposer.decompose("internal").valid());
}

#[test]
fn test_extract_keeps_order_and_drops_invalid() {
    let db = database();
    let found = Decomposer::new(&db).extract("www.foo.com notadomain baz.bar.net");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], db.decompose("www.foo.com"));
    assert_eq!(found[1], db.decompose("baz.bar.net"));
}

#[test]
fn test_extract_multiline_text_with_urls() {
    let db = database();
    let text = "www.foo.com notadomain baz.bar.net\n\
                quux.something.co.za\tone.two\t\tthree.cc\n\
                see https://www.goat.co.uk/path?x=1 or ftp://files.goat.org:21/";
    let found: Vec<String> = Decomposer::new(&db)
        .extract(text)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        found,
        [
            "www.foo.com",
            "baz.bar.net",
            "quux.something.co.za",
            "three.cc",
            "www.goat.co.uk",
            "files.goat.org",
        ]
    );
}

#[test]
fn test_extract_lines() {
    let db = database();
    let lines = vec!["goat.com junk", "", "   www.goat.ca"];
    let found = Decomposer::new(&db).extract_lines(lines);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].registrable_domain().as_deref(), Some("goat.com"));
    assert_eq!(found[1].registrable_domain().as_deref(), Some("goat.ca"));
}

#[test]
fn test_extract_respects_allow_private() {
    let db = database();
    let found = Decomposer::new(&db)
        .allow_private(true)
        .extract("uk.com goat.uk.com");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].suffix(), Some("uk.com"));
}

#[test]
fn test_serialize_fields() {
    let db = database();
    let value = serde_json::to_value(db.decompose("www.goat.рф")).expect("serializable");
    assert_eq!(value["text"], "www.goat.рф");
    assert_eq!(value["ascii_form"], "www.goat.xn--p1ai");
    assert_eq!(value["suffix"], "xn--p1ai");
    assert_eq!(value["registrable_label"], "goat");
    assert_eq!(value["subdomain"], "www");
    assert_eq!(value["valid"], true);
    assert_eq!(value["error"], serde_json::Value::Null);

    let broken = serde_json::to_value(db.decompose("xn--_.com")).expect("serializable");
    assert_eq!(broken["valid"], false);
    assert!(broken["error"].as_str().is_some_and(|e| e.contains("xn--_")));
}
