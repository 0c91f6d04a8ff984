//! Business logic services.

pub mod decision;

pub use decision::{DecisionCache, DecisionService};
