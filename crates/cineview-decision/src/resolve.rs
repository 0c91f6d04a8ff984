//! Input resolution and defaulting.
//!
//! Every absent or non-finite numeric resolves to a documented fallback
//! constant, and every resolved percentage-like value is clamped into
//! [0, 100] before any scoring math sees it. Missing categorical descriptors
//! resolve to fixed strings, except `energy`, which is classified from the
//! resolved technical metrics when the caller does not supply it.

use cineview_models::{AnalysisSnapshot, DecisionContext, DominantColor, ResolvedInputs};

use crate::score::classify_energy;

/// Fallback for an absent contrast value.
pub const DEFAULT_CONTRAST: f64 = 55.0;
/// Fallback for an absent saturation value.
pub const DEFAULT_SATURATION: f64 = 50.0;
/// Fallback for an absent brightness value.
pub const DEFAULT_BRIGHTNESS: f64 = 55.0;
/// Fallback for an absent sharpness value.
pub const DEFAULT_SHARPNESS: f64 = 60.0;
/// Fallback for an absent noise value.
pub const DEFAULT_NOISE: f64 = 15.0;
/// Fallback for an absent composition score.
pub const DEFAULT_COMPOSITION: f64 = 60.0;
/// Fallback for an absent color temperature.
pub const DEFAULT_TEMPERATURE: &str = "Neutral";
/// Fallback for an absent mood descriptor.
pub const DEFAULT_MOOD: &str = "Cinematic";
/// Fallback for an absent shot type descriptor.
pub const DEFAULT_SHOT_TYPE: &str = "Medium";
/// Fallback for an absent genre descriptor.
pub const DEFAULT_GENRE: &str = "Editorial";

fn resolve_metric(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
        .clamp(0.0, 100.0)
}

fn resolve_label(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => fallback.to_string(),
    }
}

/// Resolve a snapshot and context into the normalized inputs the scoring
/// pipeline consumes. The result doubles as the `inputs` echo on the output.
pub fn resolve_inputs(
    analysis: &AnalysisSnapshot,
    context: Option<&DecisionContext>,
) -> ResolvedInputs {
    let technical = analysis.technical.as_ref();
    let contrast = resolve_metric(technical.and_then(|t| t.contrast), DEFAULT_CONTRAST);
    let saturation = resolve_metric(technical.and_then(|t| t.saturation), DEFAULT_SATURATION);
    let brightness = resolve_metric(technical.and_then(|t| t.brightness), DEFAULT_BRIGHTNESS);
    let sharpness = resolve_metric(technical.and_then(|t| t.sharpness), DEFAULT_SHARPNESS);
    let noise = resolve_metric(technical.and_then(|t| t.noise), DEFAULT_NOISE);

    let composition = resolve_metric(
        analysis.composition.as_ref().and_then(|c| c.score),
        DEFAULT_COMPOSITION,
    );

    let color = analysis.color.as_ref();
    let temperature = resolve_label(
        color.and_then(|c| c.temperature.as_ref()),
        DEFAULT_TEMPERATURE,
    );
    let dominant_colors: Vec<DominantColor> = color
        .map(|c| {
            c.dominant_colors
                .iter()
                .map(|d| DominantColor {
                    hex: d.hex.clone(),
                    percentage: if d.percentage.is_finite() {
                        d.percentage
                    } else {
                        0.0
                    },
                })
                .collect()
        })
        .unwrap_or_default();

    let cinematic = analysis.cinematic.as_ref();
    let mood = resolve_label(cinematic.and_then(|c| c.mood.as_ref()), DEFAULT_MOOD);
    let shot_type = resolve_label(
        cinematic.and_then(|c| c.shot_type.as_ref()),
        DEFAULT_SHOT_TYPE,
    );
    let genre = resolve_label(cinematic.and_then(|c| c.genre.as_ref()), DEFAULT_GENRE);
    let energy = match cinematic.and_then(|c| c.energy.as_ref()) {
        Some(e) if !e.trim().is_empty() => e.clone(),
        _ => classify_energy(contrast, saturation, sharpness, composition, noise).to_string(),
    };

    let context = context.cloned().unwrap_or_default();

    ResolvedInputs {
        contrast,
        saturation,
        brightness,
        sharpness,
        noise,
        composition,
        temperature,
        dominant_colors,
        mood,
        energy,
        shot_type,
        genre,
        project_type: context.project_type,
        platform: context.platform,
        objective: context.objective,
    }
}
