//! # portfolio
//!
//! Leptos + WASM single-page personal portfolio: navigation bar, hero,
//! about, skills, projects, contact, and footer.
//!
//! This crate contains the page, its region components, the UI state that
//! drives navigation and the scroll-dependent nav style, and the static
//! content tables. Browser-only glue is compiled with the `csr` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Mount the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
