//! Single-page portfolio layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the navigation bar, the five page regions, and the footer. It is
//! the only place that talks to the window: a scroll listener feeds
//! `PortfolioState::record_scroll`, and an effect turns navigation requests
//! into smooth scrolls.
//!
//! LIFECYCLE
//! =========
//! The scroll listener is registered when the page mounts and removed in
//! `on_cleanup`, so unmounting never leaves a dangling window handler.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav_bar::NavBar, projects::Projects,
    skills::Skills,
};
use crate::state::portfolio::{PortfolioState, Section};
use crate::util::scroll;

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

/// Section to scroll to when the request sequence moved since `last_seq`.
///
/// The first observation (`last_seq == None`) never scrolls.
pub fn pending_scroll(
    last_seq: Option<u64>,
    seq: u64,
    target: Option<Section>,
) -> Option<Section> {
    match last_seq {
        Some(last) if last != seq => target,
        _ => None,
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<PortfolioState>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = scroll::scroll_offset();
            ui.maybe_update(|s| s.record_scroll(offset));
        });
        log::debug!("scroll listener attached");
        on_cleanup(move || {
            handle.remove();
            log::debug!("scroll listener removed");
        });
    }

    Effect::new(move |last_seq: Option<u64>| {
        let (seq, target) = ui.with(|s| (s.scroll_request_seq, s.scroll_target));
        if let Some(section) = pending_scroll(last_seq, seq, target) {
            log::debug!("navigate to #{section}");
            scroll::scroll_into_view(section.anchor());
        }
        seq
    });

    view! {
        <div class="portfolio">
            <NavBar/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
