//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns browser side effects (scroll listener, smooth scrolling)
//! and delegates rendering details to `components`.

pub mod portfolio;
