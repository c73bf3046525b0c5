//! Core business logic abstractions

pub mod config;
pub mod log;
pub mod projection;

// Re-export main types for cleaner imports
pub use projection::{
    CalculationMode, InvalidInput, Projection, ProjectionInput, ProjectionPoint, ProjectionSummary,
    compute_projection,
};
