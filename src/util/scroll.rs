//! Window scroll position and smooth section scrolling.
//!
//! Requires a browser environment. Without the `csr` feature the offset is
//! always zero and scroll requests do nothing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Current vertical scroll offset of the window in CSS pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smooth-scroll the element with id `anchor` into view.
///
/// A missing element is ignored.
pub fn scroll_into_view(anchor: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = anchor;
    }
}
