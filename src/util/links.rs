//! Outbound link attributes.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// `href` used for links that have no destination yet.
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolve an optional destination to an `href` value.
pub fn href_or_placeholder(href: Option<&'static str>) -> &'static str {
    href.unwrap_or(PLACEHOLDER_HREF)
}

/// Web links and placeholders open in a new tab; `mailto:` opens in place.
pub fn opens_new_tab(href: Option<&str>) -> bool {
    href.is_some_and(|h| h.starts_with("https://") || h.starts_with("http://"))
}

/// `target` attribute for a link, omitted when it opens in place.
pub fn link_target(href: Option<&str>) -> Option<&'static str> {
    opens_new_tab(href).then_some("_blank")
}

/// `rel` attribute paired with [`link_target`].
pub fn link_rel(href: Option<&str>) -> Option<&'static str> {
    opens_new_tab(href).then_some("noopener noreferrer")
}
