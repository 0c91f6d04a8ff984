//! Decision context models.
//!
//! The context captures caller intent: what kind of project the media belongs
//! to and which platform it targets. Both categories are closed sets with a
//! `general` catch-all, so unrecognized values from older clients degrade
//! gracefully instead of failing deserialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project type for a creative decision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Advertising,
    RealEstate,
    Fashion,
    Cinema,
    Product,
    Portrait,
    #[default]
    #[serde(other)]
    General,
}

impl ProjectType {
    /// Returns the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advertising => "advertising",
            Self::RealEstate => "real-estate",
            Self::Fashion => "fashion",
            Self::Cinema => "cinema",
            Self::Product => "product",
            Self::Portrait => "portrait",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform for a creative decision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Social,
    Print,
    #[default]
    #[serde(other)]
    General,
}

impl Platform {
    /// Returns the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Print => "print",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied intent used to bias scoring.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, Validate,
)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionContext {
    /// Project type; unrecognized values map to `general`
    pub project_type: ProjectType,

    /// Target platform; unrecognized values map to `general`
    pub platform: Platform,

    /// Free-form objective, passed through to the output unchanged
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

impl DecisionContext {
    /// Create a context for a project type and platform.
    pub fn new(project_type: ProjectType, platform: Platform) -> Self {
        Self {
            project_type,
            platform,
            objective: None,
        }
    }

    /// Set the objective.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = Some(objective.into());
        self
    }
}
