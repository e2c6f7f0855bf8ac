use super::*;

#[test]
fn href_or_placeholder_passes_destinations_through() {
    assert_eq!(href_or_placeholder(Some("https://github.com/x")), "https://github.com/x");
    assert_eq!(href_or_placeholder(None), "#");
}

#[test]
fn web_links_open_in_new_tab_with_rel() {
    let href = Some("https://linkedin.com/in/someone");
    assert_eq!(link_target(href), Some("_blank"));
    assert_eq!(link_rel(href), Some("noopener noreferrer"));
}

#[test]
fn mailto_links_open_in_place() {
    let href = Some("mailto:someone@example.com");
    assert!(!opens_new_tab(href));
    assert_eq!(link_target(href), None);
    assert_eq!(link_rel(href), None);
}

#[test]
fn placeholders_do_not_open_tabs() {
    assert!(!opens_new_tab(None));
    assert_eq!(link_target(None), None);
}
