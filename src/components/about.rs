//! About region (`#about`): biography and experience highlights.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{EXPERIENCE, PROFILE};
use crate::state::portfolio::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="page-section">
            <div class="page-section__inner page-section__inner--narrow">
                <h2 class="page-section__title">"About Me"</h2>
                <div class="panel about">
                    <div class="about__column">
                        <h3 class="about__heading">"Who I Am"</h3>
                        {PROFILE
                            .about
                            .iter()
                            .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                            .collect_view()}
                    </div>
                    <div class="about__column">
                        <h3 class="about__heading">"Experience"</h3>
                        <ul class="about__experience">
                            {EXPERIENCE
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <li class="about__experience-row">
                                            <Icon kind=entry.icon modifiers="icon--sm accent--purple"/>
                                            <div>
                                                <p class="about__experience-title">{entry.title}</p>
                                                <p class="about__experience-detail">{entry.detail}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
