//! Risk flag evaluation.
//!
//! Flags are evaluated in a fixed order and each maps to exactly one
//! remediation. Order matters: callers render flags and actions positionally,
//! and report export persists them as-is.

use cineview_models::{Platform, ResolvedInputs};

pub const OVEREXPOSURE: &str = "Overexposure risk";
pub const UNDEREXPOSURE: &str = "Underexposure risk";
pub const HIGH_NOISE: &str = "High noise risk";
pub const SOFT_FOCUS: &str = "Soft focus risk";
pub const HIGH_CONTRAST: &str = "High contrast risk";
pub const OVER_SATURATION: &str = "Over-saturation risk";
pub const WEAK_FRAMING: &str = "Weak framing risk";
pub const INCONSISTENT_TEMPERATURE: &str = "Inconsistent temperature";
pub const THUMB_STOP: &str = "Platform thumb-stop risk";

/// Remediation lookup, in flag evaluation order.
const REMEDIATIONS: [(&str, &str); 9] = [
    (OVEREXPOSURE, "Reduce exposure or recover highlights before delivery."),
    (UNDEREXPOSURE, "Lift shadows or increase exposure to restore detail."),
    (HIGH_NOISE, "Apply denoising or reshoot at lower ISO."),
    (SOFT_FOCUS, "Increase sharpening or verify focus on the subject."),
    (HIGH_CONTRAST, "Flatten the tone curve to protect highlight and shadow detail."),
    (OVER_SATURATION, "Pull saturation back toward natural color."),
    (WEAK_FRAMING, "Recompose or crop to strengthen the framing."),
    (INCONSISTENT_TEMPERATURE, "Unify white balance across the frame."),
    (THUMB_STOP, "Lift sharpness and contrast so the frame reads at feed size."),
];

/// Evaluate all risk flags for the resolved inputs, in documented order.
pub fn evaluate_risk_flags(inputs: &ResolvedInputs) -> Vec<String> {
    let mut flags = Vec::new();

    if inputs.brightness >= 82.0 {
        flags.push(OVEREXPOSURE.to_string());
    }
    if inputs.brightness <= 22.0 {
        flags.push(UNDEREXPOSURE.to_string());
    }
    if inputs.noise >= 38.0 {
        flags.push(HIGH_NOISE.to_string());
    }
    if inputs.sharpness <= 40.0 {
        flags.push(SOFT_FOCUS.to_string());
    }
    if inputs.contrast >= 82.0 {
        flags.push(HIGH_CONTRAST.to_string());
    }
    if inputs.saturation >= 82.0 {
        flags.push(OVER_SATURATION.to_string());
    }
    if inputs.composition <= 45.0 {
        flags.push(WEAK_FRAMING.to_string());
    }
    if inputs.temperature == "Mixed" {
        flags.push(INCONSISTENT_TEMPERATURE.to_string());
    }
    if inputs.platform == Platform::Social && (inputs.sharpness < 55.0 || inputs.contrast < 50.0) {
        flags.push(THUMB_STOP.to_string());
    }

    flags
}

/// Look up the remediation for a flag.
pub fn remediation_for(flag: &str) -> Option<&'static str> {
    REMEDIATIONS
        .iter()
        .find(|(name, _)| *name == flag)
        .map(|(_, action)| *action)
}

/// Collect the remediation for each distinct flag, preserving
/// first-occurrence order.
pub fn recommended_actions(flags: &[String]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::with_capacity(flags.len());
    for flag in flags {
        let Some(action) = remediation_for(flag) else {
            continue;
        };
        if !actions.iter().any(|a| a.as_str() == action) {
            actions.push(action.to_string());
        }
    }
    actions
}
