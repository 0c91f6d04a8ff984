//! Decision output contract.
//!
//! These field names are consumed verbatim by report export and by the
//! analysis display surface; renaming any of them is a breaking change that
//! needs a coordinated migration on both consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::{Platform, ProjectType};
use crate::snapshot::DominantColor;

/// Result of one creative decision evaluation.
///
/// Constructed fresh on every call; carries no identity beyond the call. The
/// `engine_version` tag lets report exports and audit trails attribute a
/// stored output to the scoring revision that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionOutput {
    /// Templated natural-language summary of the recommendation
    pub decision_summary: String,

    /// Risk flags in evaluation order
    pub risk_flags: Vec<String>,

    /// One remediation per distinct flag, in first-occurrence order
    pub recommended_actions: Vec<String>,

    /// Overall confidence in [0, 1], rounded to 2 decimal places
    pub confidence: f64,

    /// Intent alignment in [0, 1], rounded to 2 decimal places
    pub intent_alignment: f64,

    /// Composition score in [0, 1], rounded to 2 decimal places
    pub composition_score: f64,

    /// Color score in [0, 1], rounded to 2 decimal places
    pub color_score: f64,

    /// Scoring-algorithm revision tag (e.g. "decision-v1")
    pub engine_version: String,

    /// Normalized echo of every resolved input the scoring consumed
    pub inputs: ResolvedInputs,
}

/// The post-default, clamped inputs a decision was scored from.
///
/// Echoed on every output so report exports can show exactly what the engine
/// saw after fallback substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedInputs {
    pub contrast: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub sharpness: f64,
    pub noise: f64,
    pub composition: f64,
    pub temperature: String,
    pub dominant_colors: Vec<DominantColor>,
    pub mood: String,
    pub energy: String,
    pub shot_type: String,
    pub genre: String,
    pub project_type: ProjectType,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}
