//! Page region components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module renders one region of the single-page layout. Regions read
//! static tables from `content` and, where interactive, the shared
//! `PortfolioState` signal from context.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod nav_bar;
pub mod projects;
pub mod skills;
