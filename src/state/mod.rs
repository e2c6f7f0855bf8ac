//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single piece of reactive state, provided once as an
//! `RwSignal<PortfolioState>` and read by the components that need it.

pub mod portfolio;
