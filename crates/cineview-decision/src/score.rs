//! Score arithmetic.
//!
//! All helpers are pure. Reported scores are fractional [0, 1] values; the
//! balance sub-terms and the energy weighted sum are intentionally left
//! unclamped before combination.

use cineview_models::ResolvedInputs;

/// Weighted-sum threshold for the "High" energy band.
const ENERGY_HIGH_THRESHOLD: f64 = 70.0;
/// Weighted-sum threshold for the "Medium" energy band.
const ENERGY_MEDIUM_THRESHOLD: f64 = 45.0;

/// Fixed diversity used when no dominant colors were extracted.
const FALLBACK_COLOR_DIVERSITY: f64 = 0.4;

/// Clamp a fractional score into [0, 1].
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Round a fractional score to two decimal places for reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Linear ramp from 0 at `low` to 1 at `high`, clamped outside the band.
pub fn score_band(value: f64, low: f64, high: f64) -> f64 {
    clamp01((value - low) / (high - low))
}

/// Classify energy from resolved metrics.
///
/// The weighted sum is compared against the band thresholds without being
/// clamped to [0, 100] first; sums outside that range fall into the High/Low
/// bands directly.
pub fn classify_energy(
    contrast: f64,
    saturation: f64,
    sharpness: f64,
    composition: f64,
    noise: f64,
) -> &'static str {
    let weighted = 0.30 * contrast + 0.25 * saturation + 0.25 * sharpness + 0.20 * composition
        - 0.15 * noise;
    if weighted >= ENERGY_HIGH_THRESHOLD {
        "High"
    } else if weighted >= ENERGY_MEDIUM_THRESHOLD {
        "Medium"
    } else {
        "Low"
    }
}

/// Exposure balance: 1 at brightness 55, falling off symmetrically toward the
/// extremes. Not clamped before combination.
pub fn exposure_balance(brightness: f64) -> f64 {
    1.0 - (brightness - 55.0).abs() / 55.0
}

/// Contrast balance: 1 at contrast 60, falling off symmetrically toward the
/// extremes. Not clamped before combination.
pub fn contrast_balance(contrast: f64) -> f64 {
    1.0 - (contrast - 60.0).abs() / 60.0
}

/// Technical quality score from exposure, contrast, sharpness and noise.
pub fn technical_score(inputs: &ResolvedInputs) -> f64 {
    clamp01(
        0.25 * exposure_balance(inputs.brightness)
            + 0.25 * contrast_balance(inputs.contrast)
            + 0.25 * score_band(inputs.sharpness, 45.0, 80.0)
            + 0.25 * (1.0 - inputs.noise / 100.0),
    )
}

/// Color quality score from saturation and dominant-color diversity.
pub fn color_score(inputs: &ResolvedInputs) -> f64 {
    let diversity = if inputs.dominant_colors.is_empty() {
        FALLBACK_COLOR_DIVERSITY
    } else {
        inputs.dominant_colors.len() as f64 / 5.0
    };

    let weight_sum: f64 = inputs.dominant_colors.iter().map(|c| c.percentage).sum();
    // Known quirk: a zero total percentage weight scales the score by 0.8
    // instead of gating on it. Callers depend on the exact values, so it
    // stays.
    let weight_scale = if weight_sum == 0.0 { 0.8 } else { 1.0 };

    clamp01(0.6 * score_band(inputs.saturation, 35.0, 75.0) + 0.4 * diversity) * weight_scale
}

/// Overall confidence from the technical score, composition and alignment.
pub fn confidence(technical: f64, composition: f64, alignment: f64) -> f64 {
    clamp01(0.4 * technical + 0.3 * (composition / 100.0) + 0.3 * alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineview_models::{DominantColor, Platform, ProjectType, ResolvedInputs};

    fn inputs() -> ResolvedInputs {
        ResolvedInputs {
            contrast: 55.0,
            saturation: 50.0,
            brightness: 55.0,
            sharpness: 60.0,
            noise: 15.0,
            composition: 60.0,
            temperature: "Neutral".to_string(),
            dominant_colors: vec![],
            mood: "Cinematic".to_string(),
            energy: "Medium".to_string(),
            shot_type: "Medium".to_string(),
            genre: "Editorial".to_string(),
            project_type: ProjectType::General,
            platform: Platform::General,
            objective: None,
        }
    }

    #[test]
    fn test_score_band_interpolates_and_clamps() {
        assert_eq!(score_band(45.0, 45.0, 80.0), 0.0);
        assert_eq!(score_band(80.0, 45.0, 80.0), 1.0);
        assert!((score_band(62.5, 45.0, 80.0) - 0.5).abs() < 1e-12);
        assert_eq!(score_band(0.0, 45.0, 80.0), 0.0);
        assert_eq!(score_band(100.0, 45.0, 80.0), 1.0);
    }

    #[test]
    fn test_energy_bands() {
        // 0.30*80 + 0.25*80 + 0.25*80 + 0.20*80 - 0.15*0 = 80
        assert_eq!(classify_energy(80.0, 80.0, 80.0, 80.0, 0.0), "High");
        // All-default metrics land at 53.75
        assert_eq!(classify_energy(55.0, 50.0, 60.0, 60.0, 15.0), "Medium");
        assert_eq!(classify_energy(10.0, 10.0, 10.0, 10.0, 50.0), "Low");
    }

    #[test]
    fn test_energy_sum_is_not_clamped_before_comparison() {
        // 0.30*100 + 0.25*100 + 0.25*100 + 0.20*100 = 100 > 100-band ceiling
        // would not matter, but the raw sum is what gets compared.
        assert_eq!(classify_energy(100.0, 100.0, 100.0, 100.0, 0.0), "High");
        // Exactly on the Medium threshold: 0.30*100 + 0.25*60 = 45
        assert_eq!(classify_energy(100.0, 60.0, 0.0, 0.0, 0.0), "Medium");
    }

    #[test]
    fn test_balances_peak_at_midpoints() {
        assert_eq!(exposure_balance(55.0), 1.0);
        assert_eq!(contrast_balance(60.0), 1.0);
        assert_eq!(exposure_balance(0.0), 0.0);
        assert!((contrast_balance(0.0)).abs() < 1e-12);
        assert!((exposure_balance(100.0) - (1.0 - 45.0 / 55.0)).abs() < 1e-12);
    }

    #[test]
    fn test_technical_score_within_bounds() {
        let mut i = inputs();
        for (brightness, contrast, sharpness, noise) in [
            (0.0, 0.0, 0.0, 100.0),
            (100.0, 100.0, 100.0, 0.0),
            (55.0, 60.0, 80.0, 0.0),
        ] {
            i.brightness = brightness;
            i.contrast = contrast;
            i.sharpness = sharpness;
            i.noise = noise;
            let score = technical_score(&i);
            assert!((0.0..=1.0).contains(&score), "out of bounds: {score}");
        }

        i.brightness = 55.0;
        i.contrast = 60.0;
        i.sharpness = 80.0;
        i.noise = 0.0;
        assert_eq!(technical_score(&i), 1.0);
    }

    #[test]
    fn test_color_score_zero_weight_quirk() {
        let mut i = inputs();
        i.saturation = 55.0;
        i.dominant_colors = vec![DominantColor {
            hex: "#101010".to_string(),
            percentage: 0.0,
        }];
        let zero_weight = color_score(&i);

        i.dominant_colors[0].percentage = 60.0;
        let with_weight = color_score(&i);

        assert!((zero_weight - with_weight * 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_color_score_empty_palette_uses_fixed_diversity() {
        let mut i = inputs();
        i.saturation = 75.0;
        i.dominant_colors.clear();
        // band(75) = 1.0, diversity 0.4, zero weight sum scales by 0.8
        let expected = (0.6 + 0.4 * 0.4) * 0.8;
        assert!((color_score(&i) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_color_diversity_counts_entries_over_five() {
        let mut i = inputs();
        i.saturation = 35.0;
        i.dominant_colors = (0..7)
            .map(|n| DominantColor {
                hex: format!("#0000{n:02x}"),
                percentage: 10.0,
            })
            .collect();
        // band(35) = 0, diversity 7/5 = 1.4, so 0.4 * 1.4 = 0.56
        assert!((color_score(&i) - 0.56).abs() < 1e-12);

        // With full saturation the pre-clamp sum is 0.6 + 0.56 = 1.16
        i.saturation = 75.0;
        assert_eq!(color_score(&i), 1.0);
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(confidence(1.0, 100.0, 1.0), 1.0);
        assert_eq!(confidence(0.0, 0.0, 0.0), 0.0);
        assert!((confidence(0.5, 50.0, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.305), 0.31);
        assert_eq!(round2(0.304999), 0.3);
        assert_eq!(round2(1.0), 1.0);
    }
}
