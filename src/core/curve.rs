//! EQ curve composer: the session's emotional arc
//!
//! The persona never speaks with the same energy for a whole session. Five
//! sequential layers modulate a base style directive: stage sets the arc,
//! anxiety overrides it for safety, archetype nudges it, confidence
//! fine-tunes it. The field enums make the final clamp structural.

use tracing::debug;

use crate::types::{Level, Pace, SessionStage, StudentArchetype, StyleDirective};

/// Inputs for one curve computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub stage: SessionStage,
    pub archetype: StudentArchetype,
    pub anxiety: Level,
    /// Cumulative confidence signal
    pub confidence: i32,
}

/// Apply the full curve to a base directive
pub fn compose_curve(base: StyleDirective, params: &CurveParams) -> StyleDirective {
    let mut adjusted = base;

    adjusted = stage_modulation(adjusted, params.stage);
    adjusted = anxiety_modulation(adjusted, params.anxiety);
    adjusted = archetype_nudge(adjusted, params.archetype);
    adjusted = confidence_modulation(adjusted, params.confidence);

    debug!(
        stage = %params.stage,
        archetype = %params.archetype,
        warmth = %adjusted.warmth,
        firmness = %adjusted.firmness,
        empathy = %adjusted.empathy,
        "curve composed"
    );

    adjusted
}

/// Layer 1: the dominant layer, establishes the session's emotional flow
fn stage_modulation(mut d: StyleDirective, stage: SessionStage) -> StyleDirective {
    match stage {
        SessionStage::Opening => {
            d.warmth = Level::High;
            d.empathy = Level::High;
            d.pace = Pace::Slow;
            d.firmness = Level::Low;
        }
        SessionStage::RapportBuilding => {
            d.warmth = Level::High;
            d.empathy = Level::High;
            d.cheer = Level::Medium;
            d.pace = Pace::Normal;
        }
        SessionStage::DiagnosticProbing => {
            d.firmness = Level::Medium;
            d.empathy = Level::Medium;
            d.pace = Pace::Normal;
            d.intensity = Level::Medium;
        }
        SessionStage::Analysis => {
            d.firmness = Level::High;
            d.warmth = Level::Medium;
            d.intensity = Level::High;
            d.pace = Pace::Fast;
        }
        SessionStage::StrategyReveal => {
            d.warmth = Level::Medium;
            d.cheer = Level::High;
            d.empathy = Level::Medium;
            d.firmness = Level::Medium;
        }
        SessionStage::Motivation => {
            d.warmth = Level::High;
            d.cheer = Level::High;
            d.empathy = Level::High;
            d.firmness = Level::Medium;
        }
        SessionStage::Closing => {
            d.warmth = Level::High;
            d.cheer = Level::Medium;
            d.pace = Pace::Slow;
            d.empathy = Level::Medium;
        }
    }
    d
}

/// Layer 2: high anxiety overrides the stage for safety
fn anxiety_modulation(mut d: StyleDirective, anxiety: Level) -> StyleDirective {
    match anxiety {
        Level::High => {
            d.warmth = Level::High;
            d.empathy = Level::High;
            d.firmness = Level::Low;
            d.pace = Pace::Slow;
            d.intensity = Level::Low;
        }
        Level::Medium => {
            d.empathy = d.empathy.elevate();
        }
        Level::Low => {}
    }
    d
}

/// Layer 3: archetype-specific nudges that elevate or reduce one step,
/// never overwriting a value already at the archetype's target
fn archetype_nudge(mut d: StyleDirective, archetype: StudentArchetype) -> StyleDirective {
    match archetype {
        StudentArchetype::LowConfidenceBuilder => {
            if d.empathy != Level::High {
                d.empathy = d.empathy.elevate();
            }
            if d.cheer != Level::High {
                d.cheer = d.cheer.elevate();
            }
            if d.firmness != Level::Low {
                d.firmness = d.firmness.reduce();
            }
        }
        StudentArchetype::HighAchieverAnxious => {
            if d.empathy != Level::High {
                d.empathy = d.empathy.elevate();
            }
        }
        StudentArchetype::OverconfidentSpiky => {
            if d.firmness != Level::High {
                d.firmness = d.firmness.elevate();
            }
            if d.empathy != Level::Low {
                d.empathy = d.empathy.reduce();
            }
        }
        StudentArchetype::LateStarter => {
            if d.warmth != Level::High {
                d.warmth = d.warmth.elevate();
            }
            if d.cheer == Level::Low {
                d.cheer = Level::Medium;
            }
        }
        StudentArchetype::UnderdogHighCeiling => {
            if d.warmth != Level::High {
                d.warmth = d.warmth.elevate();
            }
            if d.firmness != Level::High {
                d.firmness = d.firmness.elevate();
            }
        }
        StudentArchetype::Unknown => {}
    }
    d
}

/// Layer 4: confidence fine-tuning at the +/-5 extremes
fn confidence_modulation(mut d: StyleDirective, confidence: i32) -> StyleDirective {
    if confidence < -5 {
        d.empathy = Level::High;
        d.firmness = Level::Low;
        d.cheer = d.cheer.elevate();
    } else if confidence > 5 {
        d.firmness = Level::High;
        d.intensity = Level::High;
    }
    d
}

/// Human-readable description of what the curve changed
pub fn summarize_changes(
    base: &StyleDirective,
    adjusted: &StyleDirective,
    params: &CurveParams,
) -> String {
    let mut changes = Vec::new();

    if base.warmth != adjusted.warmth {
        changes.push(format!("warmth: {} -> {}", base.warmth, adjusted.warmth));
    }
    if base.empathy != adjusted.empathy {
        changes.push(format!("empathy: {} -> {}", base.empathy, adjusted.empathy));
    }
    if base.firmness != adjusted.firmness {
        changes.push(format!(
            "firmness: {} -> {}",
            base.firmness, adjusted.firmness
        ));
    }
    if base.cheer != adjusted.cheer {
        changes.push(format!("cheer: {} -> {}", base.cheer, adjusted.cheer));
    }
    if base.pace != adjusted.pace {
        changes.push(format!("pace: {} -> {}", base.pace, adjusted.pace));
    }
    if base.intensity != adjusted.intensity {
        changes.push(format!(
            "intensity: {} -> {}",
            base.intensity, adjusted.intensity
        ));
    }

    if changes.is_empty() {
        return "No curve adjustments applied (base directives unchanged)".to_string();
    }

    format!(
        "EQ curve (stage={}, archetype={}): {}",
        params.stage,
        params.archetype,
        changes.join(", ")
    )
}

// =============================================================================
// TESTS
// =============================================================================
