//! Decision engine errors.

use thiserror::Error;

pub type DecisionResult<T> = Result<T, DecisionError>;

/// Errors from the JSON-boundary entry point.
///
/// Missing or non-finite nested fields are never errors; they resolve through
/// the defaulting policy. Only the top-level analysis value can fail, since
/// there is nothing to default it against.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The analysis value is null or not a JSON object.
    #[error("invalid analysis: {0}")]
    InvalidAnalysis(String),

    /// A nested field carries a type the snapshot contract cannot accept.
    #[error("malformed analysis: {0}")]
    MalformedAnalysis(String),
}
