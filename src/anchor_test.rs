use super::*;

#[test]
fn fragment_href_names_target() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#contact-form"), Some("contact-form"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_target("#"), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_target("/blog#top"), None);
    assert_eq!(fragment_target("https://example.com"), None);
    assert_eq!(fragment_target(""), None);
}
