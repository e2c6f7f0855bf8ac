//! Page footer.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copyright">
                {format!(
                    "\u{a9} {} {}. Built with Rust & Leptos",
                    PROFILE.copyright_year,
                    PROFILE.name,
                )}
            </p>
            <p class="site-footer__tagline">{PROFILE.footer_tagline}</p>
        </footer>
    }
}
