//! Deterministic creative decision engine.
//!
//! Turns an [`AnalysisSnapshot`](cineview_models::AnalysisSnapshot) plus an
//! optional [`DecisionContext`](cineview_models::DecisionContext) into a
//! risk-flagged [`DecisionOutput`](cineview_models::DecisionOutput) with
//! confidence scoring.
//!
//! The engine is a single synchronous pass over resolved inputs: no I/O, no
//! shared state, no clock, no randomness. Identical inputs always produce
//! byte-identical serialized output, which is what lets report export and the
//! display surface treat stored outputs as reproducible.
//!
//! The engine never memoizes. Callers that want caching wrap it externally,
//! keyed by a canonical serialization of the inputs.

pub mod alignment;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod risk;
pub mod score;

pub use engine::{build_creative_decision, build_creative_decision_from_value, ENGINE_VERSION};
pub use error::{DecisionError, DecisionResult};
