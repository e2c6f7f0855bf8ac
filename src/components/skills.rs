//! Skills region (`#skills`): proficiency bars and expertise summary cards.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{EXPERTISE, Expertise, SKILLS, Skill};
use crate::state::portfolio::Section;

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Percentage shown beside a skill bar and used as its fill width.
///
/// Levels above 100 are clamped so the label always matches the bar.
pub fn skill_bar_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="page-section">
            <div class="page-section__inner page-section__inner--narrow">
                <h2 class="page-section__title">"Technical Skills"</h2>
                <div class="skills__grid">
                    {SKILLS.iter().copied().map(|skill| view! { <SkillCard skill=skill/> }).collect_view()}
                </div>
                <div class="skills__expertise">
                    {EXPERTISE
                        .iter()
                        .copied()
                        .map(|expertise| view! { <ExpertiseCard expertise=expertise/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One skill with its percentage label and bar.
#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    let percent = skill_bar_width(skill.level);
    view! {
        <div class="panel skill-card">
            <div class="skill-card__header">
                <span class="skill-card__name">{skill.name}</span>
                <span class="skill-card__level">{percent.clone()}</span>
            </div>
            <div class="skill-card__track">
                <div class="skill-card__fill" style:width=percent></div>
            </div>
        </div>
    }
}

#[component]
fn ExpertiseCard(expertise: Expertise) -> impl IntoView {
    view! {
        <div class="panel expertise-card">
            <span class=expertise.accent.class()>
                <Icon kind=expertise.icon modifiers="icon--lg"/>
            </span>
            <h3 class="expertise-card__title">{expertise.title}</h3>
            <p class="expertise-card__detail">{expertise.detail}</p>
        </div>
    }
}
