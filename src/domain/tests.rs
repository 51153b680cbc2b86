// Domain module tests.

use super::*;

#[test]
fn test_extract_domain_basic() {
    assert_eq!(
        extract_domain("https://www.example.com/path"),
        "www.example.com"
    );
}

#[test]
fn test_extract_domain_without_scheme() {
    // Bare hosts must still resolve to a host, not a path
    assert_eq!(extract_domain("example.com"), "example.com");
    assert_eq!(extract_domain("shop.example.com/cart"), "shop.example.com");
}

#[test]
fn test_extract_domain_bare_host_with_embedded_url() {
    assert_eq!(
        extract_domain("example.com/out?to=https://other.org"),
        "example.com"
    );
    assert_eq!(
        extract_domain("blog.example.net/redirect/http://x.io"),
        "blog.example.net"
    );
    assert_eq!(
        extract_domain("https://example.com/out?to=https://other.org"),
        "example.com"
    );
}

#[test]
fn test_leading_scheme_only_matches_prefix() {
    assert!(LEADING_SCHEME.is_match("https://example.com"));
    assert!(LEADING_SCHEME.is_match("svn+ssh://host/repo"));
    assert!(!LEADING_SCHEME.is_match("example.com/out?to=https://other.org"));
    assert!(!LEADING_SCHEME.is_match("://example.com"));
}

#[test]
fn test_extract_tld_bare_host_with_embedded_url() {
    let domain = extract_domain("example.com/out?to=https://other.org");
    assert_eq!(extract_tld(&domain), ".com");
    assert_eq!(extract_tld("blog.example.net/redirect/http://x.io"), ".net");
}

#[test]
fn test_extract_domain_with_port_query_and_fragment() {
    assert_eq!(
        extract_domain("https://example.com:8080/path?query=1#fragment"),
        "example.com"
    );
}

#[test]
fn test_extract_domain_lowercases_host() {
    assert_eq!(extract_domain("HTTPS://Example.COM/Page"), "example.com");
}

#[test]
fn test_extract_domain_trims_whitespace() {
    assert_eq!(extract_domain("  mylawblog.net \n"), "mylawblog.net");
}

#[test]
fn test_extract_domain_empty_input() {
    assert_eq!(extract_domain(""), "");
    assert_eq!(extract_domain("   "), "");
}

#[test]
fn test_extract_domain_unparseable_degrades_to_empty() {
    assert_eq!(extract_domain("http://exa mple.com"), "");
    assert_eq!(extract_domain("http://"), "");
}

#[test]
fn test_extract_domain_hostless_url_returns_path() {
    assert_eq!(extract_domain("file:///tmp/report.csv"), "/tmp/report.csv");
}

#[test]
fn test_extract_tld_uses_last_segment_only() {
    assert_eq!(extract_tld("https://example.co.uk/page"), ".uk");
    assert_eq!(extract_tld("example.co.uk"), ".uk");
}

#[test]
fn test_extract_tld_without_scheme() {
    assert_eq!(extract_tld("example.com"), ".com");
}

#[test]
fn test_extract_tld_lowercases() {
    assert_eq!(extract_tld("Example.ORG"), ".org");
}

#[test]
fn test_extract_tld_no_dot() {
    assert_eq!(extract_tld("localhost"), "");
    assert_eq!(extract_tld(""), "");
}

#[test]
fn test_extract_tld_trailing_dot() {
    assert_eq!(extract_tld("example.com."), "");
}

#[test]
fn test_extract_tld_with_port() {
    assert_eq!(extract_tld("example.io:8443"), ".io");
}

#[test]
fn test_extract_tld_of_extracted_domain() {
    let domain = extract_domain("shop.example.com");
    assert_eq!(extract_tld(&domain), ".com");
}

#[test]
fn test_normalize_tld() {
    assert_eq!(normalize_tld("COM"), ".com");
    assert_eq!(normalize_tld(".net"), ".net");
    assert_eq!(normalize_tld(" .Org "), ".org");
    assert_eq!(normalize_tld(""), "");
    assert_eq!(normalize_tld("."), "");
}
