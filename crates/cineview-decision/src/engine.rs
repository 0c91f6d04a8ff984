//! Creative decision assembly.

use cineview_models::{AnalysisSnapshot, DecisionContext, DecisionOutput, ResolvedInputs};
use serde_json::Value;

use crate::alignment::build_intent_alignment;
use crate::error::{DecisionError, DecisionResult};
use crate::resolve::resolve_inputs;
use crate::risk::{evaluate_risk_flags, recommended_actions};
use crate::score::{color_score, confidence, round2, technical_score};

/// Compatibility tag for the scoring-algorithm revision.
///
/// Report export and audit trails persist this value next to stored outputs;
/// any change to scoring behavior must bump it.
pub const ENGINE_VERSION: &str = "decision-v1";

/// Build a creative decision for a typed snapshot.
///
/// Pure and infallible: absent or out-of-range fields resolve through the
/// defaulting policy, and the type system guarantees the snapshot itself
/// exists. Identical arguments always yield an identical output.
pub fn build_creative_decision(
    analysis: &AnalysisSnapshot,
    context: Option<&DecisionContext>,
) -> DecisionOutput {
    let inputs = resolve_inputs(analysis, context);

    let technical = technical_score(&inputs);
    let alignment = build_intent_alignment(&inputs);
    let color = color_score(&inputs);
    let overall = confidence(technical, inputs.composition, alignment);

    let risk_flags = evaluate_risk_flags(&inputs);
    let actions = recommended_actions(&risk_flags);
    let decision_summary = summarize(&inputs);

    DecisionOutput {
        decision_summary,
        risk_flags,
        recommended_actions: actions,
        confidence: round2(overall),
        intent_alignment: round2(alignment),
        composition_score: round2(inputs.composition / 100.0),
        color_score: round2(color),
        engine_version: ENGINE_VERSION.to_string(),
        inputs,
    }
}

/// Build a creative decision from a raw JSON analysis value.
///
/// This is the entry point for HTTP callers: the top-level value must be a
/// JSON object (null and scalars fail fast, since there is nothing to default
/// them against), while everything nested stays tolerant of absence.
pub fn build_creative_decision_from_value(
    analysis: &Value,
    context: Option<&DecisionContext>,
) -> DecisionResult<DecisionOutput> {
    if analysis.is_null() {
        return Err(DecisionError::InvalidAnalysis(
            "analysis is null; expected an object".to_string(),
        ));
    }
    if !analysis.is_object() {
        return Err(DecisionError::InvalidAnalysis(format!(
            "analysis must be an object, got {}",
            json_type_name(analysis)
        )));
    }

    let snapshot: AnalysisSnapshot = serde_json::from_value(analysis.clone())
        .map_err(|e| DecisionError::MalformedAnalysis(e.to_string()))?;

    Ok(build_creative_decision(&snapshot, context))
}

/// Render the fixed summary template.
///
/// Exact punctuation and casing are part of the output contract; callers
/// display and parse this string verbatim.
fn summarize(inputs: &ResolvedInputs) -> String {
    format!(
        "For {} on {}, prioritize a {} framing with {} tone. Energy is {} with a {} lean.",
        inputs.project_type.as_str(),
        inputs.platform.as_str(),
        inputs.shot_type.to_lowercase(),
        inputs.mood.to_lowercase(),
        inputs.energy.to_lowercase(),
        inputs.genre.to_lowercase(),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
