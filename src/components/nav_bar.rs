//! Fixed navigation bar with section buttons and a mobile menu.
//!
//! DESIGN
//! ======
//! Desktop buttons and the collapsible mobile list share one render helper.
//! Both route clicks through `PortfolioState::navigate`, which also closes
//! the mobile menu.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::PROFILE;
use crate::state::portfolio::{PortfolioState, Section};

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

/// Class list for the `<nav>` element; solid once the page is scrolled.
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-nav site-nav--scrolled"
    } else {
        "site-nav"
    }
}

/// Class list for a desktop section button.
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "site-nav__link site-nav__link--active"
    } else {
        "site-nav__link"
    }
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<PortfolioState>>();

    let scrolled = move || ui.with(|s| s.scrolled);
    let menu_open = move || ui.with(|s| s.menu_open);
    let on_toggle = move |_| ui.update(PortfolioState::toggle_menu);

    view! {
        <nav class=move || nav_class(scrolled())>
            <div class="site-nav__inner">
                <span class="site-nav__brand">{PROFILE.initials}</span>
                <div class="site-nav__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || ui.with(|s| s.active_section == section);
                            view! {
                                <button
                                    class=move || nav_link_class(is_active())
                                    aria-current=move || is_active().then_some("true")
                                    on:click=move |_| ui.update(|s| s.navigate(section))
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="site-nav__toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=on_toggle
                >
                    {move || {
                        let kind = if menu_open() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind=kind modifiers="icon--md"/> }
                    }}
                </button>
            </div>
            <Show when=menu_open>
                <div class="site-nav__mobile">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="site-nav__mobile-link"
                                    on:click=move |_| ui.update(|s| s.navigate(section))
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
