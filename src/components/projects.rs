//! Projects region (`#projects`): one card per showcased project.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{PROJECTS, Project};
use crate::state::portfolio::Section;
use crate::util::links::{link_rel, link_target};

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="page-section">
            <div class="page-section__inner">
                <h2 class="page-section__title">"Featured Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS.iter().copied().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card with title, external link, description, feature rows, and tag badges.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = Some(project.link);
    view! {
        <article class="panel project-card">
            <div class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <a
                    class="project-card__link"
                    href=project.link
                    target=link_target(href)
                    rel=link_rel(href)
                    aria-label=format!("Open {}", project.title)
                >
                    <Icon kind=IconKind::ExternalLink modifiers="icon--sm"/>
                </a>
            </div>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__features">
                <h4 class="project-card__features-title">"Key Features:"</h4>
                <div class="project-card__feature-grid">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="project-card__feature">
                                    <span class="project-card__feature-dot"></span>
                                    {*feature}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
