use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn portfolio_state_default_is_home_closed_unscrolled() {
    let state = PortfolioState::default();
    assert_eq!(state.active_section, Section::Home);
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert_eq!(state.scroll_request_seq, 0);
    assert_eq!(state.scroll_target, None);
}

#[test]
fn section_default_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_anchors_match_page_ids() {
    let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(anchors, ["home", "about", "skills", "projects", "contact"]);
}

#[test]
fn section_labels_are_capitalized_anchors() {
    for section in Section::ALL {
        let anchor = section.anchor();
        let expected = format!("{}{}", anchor[..1].to_ascii_uppercase(), &anchor[1..]);
        assert_eq!(section.label(), expected);
    }
}

#[test]
fn section_display_prints_anchor() {
    assert_eq!(Section::Projects.to_string(), "projects");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_sets_active_section_and_closes_menu_for_every_section() {
    for section in Section::ALL {
        let mut state = PortfolioState {
            menu_open: true,
            ..PortfolioState::default()
        };
        state.navigate(section);
        assert_eq!(state.active_section, section);
        assert!(!state.menu_open);
    }
}

#[test]
fn navigate_to_projects_requests_scroll_to_projects() {
    let mut state = PortfolioState::default();
    state.navigate(Section::Projects);
    assert_eq!(state.active_section, Section::Projects);
    assert!(!state.menu_open);
    assert_eq!(state.scroll_target.map(Section::anchor), Some("projects"));
    assert_eq!(state.scroll_request_seq, 1);
}

#[test]
fn navigate_twice_to_same_section_issues_two_requests() {
    let mut state = PortfolioState::default();
    state.navigate(Section::About);
    state.navigate(Section::About);
    assert_eq!(state.scroll_request_seq, 2);
    assert_eq!(state.scroll_target, Some(Section::About));
}

#[test]
fn navigate_leaves_scrolled_flag_alone() {
    let mut state = PortfolioState::default();
    state.record_scroll(400.0);
    state.navigate(Section::Home);
    assert!(state.scrolled);
}

#[test]
fn navigate_wraps_request_sequence() {
    let mut state = PortfolioState {
        scroll_request_seq: u64::MAX,
        ..PortfolioState::default()
    };
    state.navigate(Section::Contact);
    assert_eq!(state.scroll_request_seq, 0);
}

// =============================================================
// Menu toggle
// =============================================================

#[test]
fn toggle_menu_parity() {
    for count in 0..6 {
        let mut state = PortfolioState::default();
        for _ in 0..count {
            state.toggle_menu();
        }
        assert_eq!(state.menu_open, count % 2 == 1, "after {count} toggles");
    }
}

#[test]
fn toggle_then_navigate_closes_menu() {
    let mut state = PortfolioState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.navigate(Section::Skills);
    assert!(!state.menu_open);
}

// =============================================================
// Scroll flag
// =============================================================

#[test]
fn record_scroll_past_threshold_then_back() {
    let mut state = PortfolioState::default();
    assert!(state.record_scroll(100.0));
    assert!(state.scrolled);
    assert!(state.record_scroll(10.0));
    assert!(!state.scrolled);
}

#[test]
fn record_scroll_at_threshold_is_not_scrolled() {
    let mut state = PortfolioState::default();
    assert!(!state.record_scroll(SCROLL_THRESHOLD));
    assert!(!state.scrolled);
    assert!(state.record_scroll(50.5));
    assert!(state.scrolled);
}

#[test]
fn record_scroll_repeated_value_reports_no_change() {
    let mut state = PortfolioState::default();
    assert!(state.record_scroll(200.0));
    assert!(!state.record_scroll(300.0));
    assert!(state.scrolled);
}
