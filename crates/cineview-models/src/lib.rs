//! Shared data models for the CineView decision backend.
//!
//! This crate provides Serde-serializable types for:
//! - Analysis snapshots (measured/derived visual metrics for one piece of media)
//! - Decision contexts (caller-supplied intent: project type, platform, objective)
//! - Decision outputs (the risk-flagged recommendation the engine produces)

pub mod context;
pub mod decision;
pub mod snapshot;

// Re-export common types
pub use context::{DecisionContext, Platform, ProjectType};
pub use decision::{DecisionOutput, ResolvedInputs};
pub use snapshot::{
    AnalysisSnapshot, CinematicDescriptors, ColorInfo, CompositionInfo, DominantColor,
    TechnicalMetrics,
};
