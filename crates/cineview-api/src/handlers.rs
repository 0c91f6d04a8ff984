//! Request handlers.

pub mod decisions;
pub mod health;

pub use decisions::*;
pub use health::*;
