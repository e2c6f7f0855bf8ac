//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::content::{self, PROFILE};
use crate::pages::portfolio::PortfolioPage;
use crate::state::portfolio::PortfolioState;

/// Root application component.
///
/// Provides the shared `PortfolioState` signal and the document title, then
/// renders the page. The stylesheet is linked from `index.html`. Content problems are logged and never block rendering.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if let Err(err) = content::validate() {
        log::warn!("portfolio content failed validation: {err}");
    }

    let ui = RwSignal::new(PortfolioState::default());
    provide_context(ui);

    view! {
        <Title text=format!("{} | {}", PROFILE.name, PROFILE.role)/>
        <Meta name="description" content=PROFILE.tagline/>

        <PortfolioPage/>
    }
}
