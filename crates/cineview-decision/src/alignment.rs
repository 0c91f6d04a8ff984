//! Intent alignment scoring.
//!
//! Each project type contributes a fixed set of (actual, target) pairs and
//! the platform contributes up to two more. The alignment score is the mean
//! attainment ratio across all collected pairs, each ratio clamped to [0, 1].

use cineview_models::{Platform, ProjectType, ResolvedInputs};

use crate::score::clamp01;

/// Fallback alignment when no pairs were collected.
const FALLBACK_ALIGNMENT: f64 = 0.6;

/// Build the intent-alignment score for the resolved inputs.
pub fn build_intent_alignment(inputs: &ResolvedInputs) -> f64 {
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(5);

    match inputs.project_type {
        ProjectType::Advertising => pairs.extend([
            (inputs.contrast, 60.0),
            (inputs.saturation, 55.0),
            (inputs.brightness, 55.0),
        ]),
        ProjectType::RealEstate => pairs.extend([
            (inputs.brightness, 60.0),
            (inputs.sharpness, 65.0),
            (inputs.contrast, 50.0),
        ]),
        ProjectType::Fashion => pairs.extend([
            (inputs.contrast, 55.0),
            (inputs.sharpness, 65.0),
            (inputs.saturation, 45.0),
        ]),
        ProjectType::Cinema => pairs.extend([
            (inputs.contrast, 50.0),
            (100.0 - inputs.noise, 70.0),
            (inputs.composition, 60.0),
        ]),
        ProjectType::Product => pairs.extend([
            (inputs.sharpness, 70.0),
            (inputs.brightness, 60.0),
            (inputs.contrast, 55.0),
        ]),
        ProjectType::Portrait => pairs.extend([
            (inputs.sharpness, 60.0),
            (inputs.contrast, 50.0),
            (inputs.saturation, 40.0),
        ]),
        ProjectType::General => pairs.extend([
            (inputs.composition, 55.0),
            (inputs.contrast, 50.0),
        ]),
    }

    match inputs.platform {
        Platform::Social => pairs.extend([(inputs.contrast, 55.0), (inputs.sharpness, 60.0)]),
        Platform::Print => pairs.extend([
            (inputs.brightness, 55.0),
            (100.0 - inputs.noise, 70.0),
        ]),
        Platform::General => {}
    }

    if pairs.is_empty() {
        return FALLBACK_ALIGNMENT;
    }

    let total: f64 = pairs
        .iter()
        .map(|(actual, target)| clamp01(actual / target))
        .sum();
    total / pairs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineview_models::{Platform, ProjectType};

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
    fn test_targets_met_give_full_alignment() {
        let mut i = inputs();
        i.project_type = ProjectType::Product;
        i.sharpness = 70.0;
        i.brightness = 60.0;
        i.contrast = 55.0;
        assert_eq!(build_intent_alignment(&i), 1.0);
    }

    #[test]
    fn test_general_project_uses_two_generic_pairs() {
        let mut i = inputs();
        i.composition = 27.5; // half of target 55
        i.contrast = 50.0; // meets target 50
        assert!((build_intent_alignment(&i) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_cinema_uses_inverted_noise() {
        let mut i = inputs();
        i.project_type = ProjectType::Cinema;
        i.contrast = 50.0;
        i.noise = 30.0; // 100 - 30 = 70 meets target 70
        i.composition = 60.0;
        assert_eq!(build_intent_alignment(&i), 1.0);
    }

    #[test]
    fn test_platform_contributes_extra_pairs() {
        let mut i = inputs();
        i.composition = 55.0;
        i.contrast = 50.0;
        // General project alone: (55/55, 50/50) -> 1.0
        assert_eq!(build_intent_alignment(&i), 1.0);

        // Social adds (contrast/55, sharpness/60); contrast 50/55 drags the
        // mean below 1.
        i.platform = Platform::Social;
        i.sharpness = 60.0;
        let expected = (1.0 + 1.0 + 50.0 / 55.0 + 1.0) / 4.0;
        assert!((build_intent_alignment(&i) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_print_platform_pairs() {
        let mut i = inputs();
        i.platform = Platform::Print;
        i.composition = 55.0;
        i.contrast = 50.0;
        i.brightness = 55.0;
        i.noise = 30.0;
        assert_eq!(build_intent_alignment(&i), 1.0);
    }

    #[test]
    fn test_ratios_are_clamped_per_pair() {
        let mut i = inputs();
        i.project_type = ProjectType::Advertising;
        i.contrast = 100.0;
        i.saturation = 100.0;
        i.brightness = 100.0;
        // Each ratio exceeds 1 but clamps to 1; the mean stays exactly 1.
        assert_eq!(build_intent_alignment(&i), 1.0);
    }
}
