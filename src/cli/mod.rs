//! Terminal presentation layer: command handlers and rendering helpers.

pub mod chart;
pub mod export;
pub mod project;
pub mod setup;
pub mod summary;
pub mod ui;
