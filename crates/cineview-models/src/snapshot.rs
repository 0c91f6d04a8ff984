//! Analysis snapshot models.
//!
//! An [`AnalysisSnapshot`] carries the measured and derived visual metrics for
//! one piece of media, as produced by the upstream analysis pipeline. Every
//! section and every field is optional on the wire: the decision engine
//! resolves absent values against documented fallbacks instead of failing, so
//! partial snapshots from older pipeline versions stay usable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Technical metrics for a single piece of media.
///
/// All values are percentage-like scalars. The expected range is [0, 100] but
/// upstream does not guarantee it; consumers clamp before use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TechnicalMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<f64>,
}

/// Composition assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompositionInfo {
    /// Composition score (percentage-like scalar)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Color analysis for a single piece of media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorInfo {
    /// Categorical color temperature (e.g. "Neutral", "Mixed")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    /// Dominant colors in descending order of coverage
    pub dominant_colors: Vec<DominantColor>,
}

/// A dominant color entry.
///
/// Only the entry count and the percentage weights feed scoring; the hex value
/// is echoed back for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DominantColor {
    /// Hex color string (e.g. "#1a1a2e")
    pub hex: String,

    /// Share of the frame covered by this color (0-100)
    pub percentage: f64,
}

/// Optional cinematic descriptors from the creative analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CinematicDescriptors {
    /// Overall mood (e.g. "Bright", "Moody")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,

    /// Energy band ("High", "Medium", "Low"); derived from technical metrics
    /// when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<String>,

    /// Shot type (e.g. "Close", "Wide")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,

    /// Genre lean (e.g. "Editorial", "Documentary")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// The full analysis snapshot for one piece of media.
///
/// Unknown fields are ignored on deserialization so snapshots written by newer
/// pipeline versions still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalMetrics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinematic: Option<CinematicDescriptors>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = AnalysisSnapshot {
            technical: Some(TechnicalMetrics {
                contrast: Some(60.0),
                saturation: Some(50.0),
                brightness: Some(55.0),
                sharpness: Some(65.0),
                noise: Some(10.0),
            }),
            composition: Some(CompositionInfo { score: Some(70.0) }),
            color: Some(ColorInfo {
                temperature: Some("Neutral".to_string()),
                dominant_colors: vec![DominantColor {
                    hex: "#ffffff".to_string(),
                    percentage: 100.0,
                }],
            }),
            cinematic: Some(CinematicDescriptors {
                mood: Some("Bright".to_string()),
                energy: Some("High".to_string()),
                shot_type: Some("Close".to_string()),
                genre: Some("Editorial".to_string()),
            }),
        };

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let decoded: AnalysisSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_snapshot_wire_names_are_camel_case() {
        let json = serde_json::json!({
            "color": {
                "temperature": "Mixed",
                "dominantColors": [{"hex": "#000000", "percentage": 40.0}]
            },
            "cinematic": {"shotType": "Wide"}
        });

        let snapshot: AnalysisSnapshot = serde_json::from_value(json).expect("deserialize");
        let color = snapshot.color.expect("color");
        assert_eq!(color.temperature.as_deref(), Some("Mixed"));
        assert_eq!(color.dominant_colors.len(), 1);
        assert_eq!(
            snapshot.cinematic.expect("cinematic").shot_type.as_deref(),
            Some("Wide")
        );
    }

    #[test]
    fn test_snapshot_tolerates_unknown_fields() {
        let json = serde_json::json!({"lighting": "soft"});
        let snapshot: AnalysisSnapshot = serde_json::from_value(json).expect("deserialize");
        assert_eq!(snapshot, AnalysisSnapshot::default());
    }

    #[test]
    fn test_dominant_color_defaults() {
        let color: DominantColor = serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert_eq!(color.hex, "");
        assert_eq!(color.percentage, 0.0);
    }
}
