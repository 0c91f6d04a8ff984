//! Creative decision API handlers.
//!
//! The evaluation endpoint is what report export and the analysis display
//! surface call: it takes a raw analysis snapshot plus an optional decision
//! context and returns the engine output unchanged.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use validator::Validate;

use cineview_decision::ENGINE_VERSION;
use cineview_models::{DecisionContext, DecisionOutput};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Request to evaluate a creative decision.
#[derive(Debug, Deserialize)]
pub struct EvaluateDecisionRequest {
    /// Raw analysis snapshot. Must be a JSON object; the engine resolves
    /// absent fields through its defaulting policy.
    #[serde(default)]
    pub analysis: Value,

    /// Optional caller intent
    #[serde(default)]
    pub context: Option<DecisionContext>,
}

/// Evaluate a creative decision for an analysis snapshot.
pub async fn evaluate_decision(
    State(state): State<AppState>,
    Json(request): Json<EvaluateDecisionRequest>,
) -> ApiResult<Json<DecisionOutput>> {
    if let Some(ref context) = request.context {
        context
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
    }

    let start = Instant::now();
    let (output, cache_hit) = state
        .decisions
        .evaluate(&request.analysis, request.context.as_ref())
        .await?;

    metrics::record_decision(
        output.inputs.project_type.as_str(),
        output.inputs.platform.as_str(),
        start.elapsed().as_secs_f64(),
    );
    for flag in &output.risk_flags {
        metrics::record_risk_flag(flag);
    }

    // Audit trail: every evaluation is attributable to a scoring revision.
    info!(
        target: "audit",
        engine_version = ENGINE_VERSION,
        project_type = output.inputs.project_type.as_str(),
        platform = output.inputs.platform.as_str(),
        risk_flags = output.risk_flags.len(),
        cache_hit,
        "Creative decision evaluated"
    );

    Ok(Json((*output).clone()))
}

/// Engine metadata response.
#[derive(Serialize)]
pub struct EngineInfoResponse {
    pub engine_version: String,
}

/// Report the scoring-engine revision, for audit/traceability of exports.
pub async fn get_engine_info() -> Json<EngineInfoResponse> {
    Json(EngineInfoResponse {
        engine_version: ENGINE_VERSION.to_string(),
    })
}
