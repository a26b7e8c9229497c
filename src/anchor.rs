//! In-page fragment links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id targeted by an in-page `href`, if it names one.
///
/// `"#about"` yields `"about"`; a bare `"#"` or an off-page link yields `None`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
