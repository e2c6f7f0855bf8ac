//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the rest of the crate can be exercised in native tests.

pub mod links;
pub mod scroll;
