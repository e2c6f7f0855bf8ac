//! Landing region (`#home`): greeting, role, social buttons, call to action.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{HERO_LINKS, PROFILE, SocialLink};
use crate::state::portfolio::{PortfolioState, Section};
use crate::util::links::{href_or_placeholder, link_rel, link_target};

/// Hero section shown at the top of the page.
#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<PortfolioState>>();
    let on_view_work = move |_| ui.update(|s| s.navigate(Section::Projects));

    view! {
        <section id=Section::Home.anchor() class="page-section hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    "Hi, I'm " <span class="gradient-text">{PROFILE.name}</span>
                </h1>
                <p class="hero__role">{PROFILE.role}</p>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <div class="hero__socials">
                    {HERO_LINKS.iter().copied().map(|link| view! { <SocialButton link=link/> }).collect_view()}
                </div>
                <button class="cta-button" on:click=on_view_work>
                    "View My Work"
                </button>
            </div>
        </section>
    }
}

/// Round icon link; placeholders swallow the click.
#[component]
fn SocialButton(link: SocialLink) -> impl IntoView {
    let placeholder = link.href.is_none();
    view! {
        <a
            class="hero__social"
            class:hero__social--placeholder=placeholder
            href=href_or_placeholder(link.href)
            target=link_target(link.href)
            rel=link_rel(link.href)
            aria-label=link.label
            aria-disabled=placeholder.then_some("true")
            on:click=move |ev: leptos::ev::MouseEvent| {
                if placeholder {
                    ev.prevent_default();
                }
            }
        >
            <Icon kind=link.icon modifiers="icon--md"/>
        </a>
    }
}
