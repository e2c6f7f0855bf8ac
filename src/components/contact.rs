//! Contact region (`#contact`): profile cards and a mailto call to action.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{CONTACT_LINKS, PROFILE, SocialLink};
use crate::state::portfolio::Section;
use crate::util::links::{href_or_placeholder, link_rel, link_target};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", PROFILE.email);
    view! {
        <section id=Section::Contact.anchor() class="page-section">
            <div class="page-section__inner page-section__inner--narrow contact">
                <h2 class="page-section__title">"Get In Touch"</h2>
                <p class="contact__blurb">{PROFILE.contact_blurb}</p>
                <div class="contact__cards">
                    {CONTACT_LINKS.iter().copied().map(|link| view! { <ContactCard link=link/> }).collect_view()}
                </div>
                <a class="cta-button" href=mailto>
                    "Send Me a Message"
                </a>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(link: SocialLink) -> impl IntoView {
    view! {
        <a
            class="panel contact-card"
            href=href_or_placeholder(link.href)
            target=link_target(link.href)
            rel=link_rel(link.href)
        >
            <Icon kind=link.icon modifiers="icon--lg"/>
            <h3 class="contact-card__label">{link.label}</h3>
            <p class="contact-card__handle">{link.handle}</p>
        </a>
    }
}
