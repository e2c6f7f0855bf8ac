//! Inline SVG icon set for links, cards, and the menu toggle.
//!
//! Glyphs are stroked 24x24 outlines drawn in `currentColor`; sizing and
//! tint come from the wrapping span's classes (`icon--sm/md/lg`).

use leptos::prelude::*;

/// Glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Github,
    Linkedin,
    Fiverr,
    Mail,
    Code,
    Database,
    Layers,
    ExternalLink,
    Menu,
    Close,
    Award,
}

/// An icon wrapped in a span carrying `icon` plus any modifier classes.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] modifiers: &'static str) -> impl IntoView {
    let classes = if modifiers.is_empty() {
        "icon".to_owned()
    } else {
        format!("icon {modifiers}")
    };
    view! { <span class=classes>{render_icon(kind)}</span> }
}

fn render_icon(kind: IconKind) -> AnyView {
    match kind {
        IconKind::Github => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </svg>
        }
        .into_any(),
        IconKind::Linkedin => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect x="2" y="9" width="4" height="12" />
                <circle cx="4" cy="4" r="2" />
            </svg>
        }
        .into_any(),
        IconKind::Fiverr => view! {
            <svg class="icon__solid" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M14.5 6.5h2V3h-2c-2.8 0-4.5 1.8-4.5 4.6V9H8v3.5h2v8.5h4v-8.5h2.9L17 9h-3V7.9c0-.9.4-1.4 1.5-1.4z" />
            </svg>
        }
        .into_any(),
        IconKind::Mail => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </svg>
        }
        .into_any(),
        IconKind::Code => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </svg>
        }
        .into_any(),
        IconKind::Database => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <ellipse cx="12" cy="5" rx="9" ry="3" />
                <path d="M3 5v14a9 3 0 0 0 18 0V5" />
                <path d="M3 12a9 3 0 0 0 18 0" />
            </svg>
        }
        .into_any(),
        IconKind::Layers => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z" />
                <path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" />
                <path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
            </svg>
        }
        .into_any(),
        IconKind::ExternalLink => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M15 3h6v6" />
                <path d="M10 14 21 3" />
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            </svg>
        }
        .into_any(),
        IconKind::Menu => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </svg>
        }
        .into_any(),
        IconKind::Close => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </svg>
        }
        .into_any(),
        IconKind::Award => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="8" r="6" />
                <path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11" />
            </svg>
        }
        .into_any(),
    }
}
