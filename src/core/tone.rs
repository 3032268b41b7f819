//! Tone composer: "micro-moves decide what, tone modulation decides how"
//!
//! Three layers over a continuous 0-10 directive: archetype baseline, EQ
//! adjustment, coaching-move adjustment. Deltas are additive; numeric fields
//! are clamped once, at the very end. Later layers win on pacing.

use tracing::debug;

use crate::types::{
    ArchetypeProfile, CoachingMove, EqRuntimeState, EqStateForTone, Level, Pacing, SessionStage,
    ToneArchetype, ToneDirective,
};

/// Computes tone directives from archetype, EQ state, and coaching move
#[derive(Debug, Default)]
pub struct ToneEngine;

impl ToneEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compose the final tone directive for this turn
    pub fn modulate(
        &self,
        archetype: &ArchetypeProfile,
        eq: &EqStateForTone,
        mv: CoachingMove,
    ) -> ToneDirective {
        let base = baseline(archetype.kind);
        let adjusted = adjust_for_eq(base, eq);
        let mut out = adjust_for_move(adjusted, mv);
        out.clamp_ranges();

        debug!(
            warmth = out.warmth,
            directness = out.directness,
            assertiveness = out.assertiveness,
            pacing = %out.pacing,
            "tone modulated"
        );

        out
    }
}

/// Layer 1: the stance each archetype starts from
fn baseline(kind: ToneArchetype) -> ToneDirective {
    match kind {
        ToneArchetype::HighAchiever => ToneDirective {
            warmth: 4.0,
            directness: 9.0,
            assertiveness: 7.0,
            specificity: 9.0,
            pacing: Pacing::Fast,
            style_markers: to_strings(&["crisp", "solution-forward", "performance-oriented"]),
            rationale: "High achiever baseline: efficient, precise".to_string(),
        },
        ToneArchetype::AnxiousPerfectionist => ToneDirective {
            warmth: 9.0,
            directness: 5.0,
            assertiveness: 4.0,
            specificity: 6.0,
            pacing: Pacing::Slow,
            style_markers: to_strings(&["soft edges", "grounding phrases", "validation-first"]),
            rationale: "Anxious perfectionist: high warmth, low threat".to_string(),
        },
        ToneArchetype::UnfocusedExplorer => ToneDirective {
            warmth: 7.0,
            directness: 6.0,
            assertiveness: 5.0,
            specificity: 5.0,
            pacing: Pacing::Medium,
            style_markers: to_strings(&["curiosity-led", "gentle structure"]),
            rationale: "Explorer: lighten the cognitive load".to_string(),
        },
        ToneArchetype::ReluctantPragmatist => ToneDirective {
            warmth: 5.0,
            directness: 8.0,
            assertiveness: 6.0,
            specificity: 8.0,
            pacing: Pacing::Medium,
            style_markers: to_strings(&["respect autonomy", "practicality"]),
            rationale: "Pragmatist: respect boundaries, aim for utility".to_string(),
        },
        ToneArchetype::OverscheduledOverachiever => ToneDirective {
            warmth: 8.0,
            directness: 7.0,
            assertiveness: 4.0,
            specificity: 7.0,
            pacing: Pacing::Slow,
            style_markers: to_strings(&["acknowledge load", "relieve pressure"]),
            rationale: "Overscheduled: reduce friction + stress".to_string(),
        },
        ToneArchetype::QuietDeepThinker => ToneDirective {
            warmth: 7.0,
            directness: 4.0,
            assertiveness: 3.0,
            specificity: 9.0,
            pacing: Pacing::Slow,
            style_markers: to_strings(&["reflective", "thought-partner"]),
            rationale: "Deep thinker: slower pacing + conceptual space".to_string(),
        },
        ToneArchetype::Unknown => ToneDirective {
            warmth: 6.0,
            directness: 6.0,
            assertiveness: 5.0,
            specificity: 6.0,
            pacing: Pacing::Medium,
            style_markers: to_strings(&["balanced"]),
            rationale: "Default tone".to_string(),
        },
    }
}

/// Layer 2: moment-to-moment emotional adjustments
fn adjust_for_eq(mut out: ToneDirective, eq: &EqStateForTone) -> ToneDirective {
    if eq.valence < 0.0 {
        out.warmth += 2.0;
        out.assertiveness -= 1.0;
        out.pacing = Pacing::Slow;
        out.mark("emotional-safety");
        out.explain("EQ-adjust: student distressed");
    }

    if eq.cognitive_load == Level::High {
        out.specificity += 2.0;
        out.directness -= 1.0;
        out.pacing = Pacing::Slow;
        out.mark("reduce-information-density");
        out.explain("EQ-adjust: cognitive load high");
    }

    if eq.activation == Level::High {
        out.pacing = Pacing::Fast;
        out.directness += 1.0;
        out.mark("momentum-matching");
        out.explain("EQ-adjust: match student energy");
    }

    if eq.vulnerability {
        out.warmth += 3.0;
        out.assertiveness -= 2.0;
        out.pacing = Pacing::Slow;
        out.mark("warm-grounding");
        out.explain("EQ-adjust: vulnerability detected");
    }

    out
}

/// Layer 3: per-move deltas
fn adjust_for_move(mut out: ToneDirective, mv: CoachingMove) -> ToneDirective {
    match mv {
        CoachingMove::Affirm => {
            out.warmth += 2.0;
            out.mark("validation");
            out.explain("Move: affirm");
        }
        CoachingMove::Reframe => {
            out.directness += 2.0;
            out.specificity += 2.0;
            out.mark("clarity-blade");
            out.explain("Move: reframe");
        }
        CoachingMove::Challenge => {
            out.assertiveness += 3.0;
            out.directness += 1.0;
            out.mark("gentle-push");
            out.explain("Move: challenge");
        }
        CoachingMove::Motivate => {
            out.warmth += 1.0;
            out.assertiveness += 1.0;
            out.mark("spark");
            out.explain("Move: motivate");
        }
        CoachingMove::Accountability => {
            out.directness += 3.0;
            out.assertiveness += 2.0;
            out.mark("firm-kind");
            out.explain("Move: accountability");
        }
        CoachingMove::Anchor => {
            out.specificity += 3.0;
            out.mark("vision-link");
            out.explain("Move: anchor");
        }
        CoachingMove::Mirror => {
            out.pacing = Pacing::Slow;
            out.mark("reflective-tone");
            out.explain("Move: mirror");
        }
        CoachingMove::Breaker => {
            out.pacing = Pacing::Fast;
            out.directness += 2.0;
            out.mark("pattern-interrupt");
            out.explain("Move: breaker");
        }
        CoachingMove::None => {}
    }
    out
}

/// Derive the simplified tone-layer EQ signals from the full runtime state
pub fn eq_state_for_tone(eq: &EqRuntimeState) -> EqStateForTone {
    let valence = match eq.anxiety {
        Level::High => -0.5,
        Level::Medium => 0.0,
        Level::Low => 0.3,
    };

    let activation = if eq.confidence_signal > 3 {
        Level::High
    } else if eq.confidence_signal < -3 {
        Level::Low
    } else {
        Level::Medium
    };

    let cognitive_load = match eq.stage {
        SessionStage::DiagnosticProbing | SessionStage::Analysis => Level::High,
        SessionStage::Opening | SessionStage::Closing => Level::Low,
        _ => Level::Medium,
    };

    EqStateForTone {
        valence,
        activation,
        cognitive_load,
        vulnerability: eq.confidence_signal < -5 || eq.anxiety == Level::High,
        safety_signals: eq.confidence_signal > 0,
    }
}

fn to_strings(markers: &[&str]) -> Vec<String> {
    markers.iter().map(|m| m.to_string()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_eq() -> EqStateForTone {
        EqStateForTone {
            valence: 0.3,
            activation: Level::Medium,
            cognitive_load: Level::Medium,
            vulnerability: false,
            safety_signals: true,
        }
    }

    fn profile(kind: ToneArchetype) -> ArchetypeProfile {
        ArchetypeProfile {
            kind,
            confidence: 0.5,
        }
    }

    #[test]
    fn test_baseline_passes_through_for_calm_none() {
        let engine = ToneEngine::new();
        let out = engine.modulate(
            &profile(ToneArchetype::HighAchiever),
            &calm_eq(),
            CoachingMove::None,
        );
        assert_eq!(out.warmth, 4.0);
        assert_eq!(out.directness, 9.0);
        assert_eq!(out.pacing, Pacing::Fast);
    }

    #[test]
    fn test_vulnerability_plus_affirm_clamps_at_ten() {
        let engine = ToneEngine::new();
        let mut eq = calm_eq();
        eq.vulnerability = true;
        // AnxiousPerfectionist warmth 9 + vulnerability 3 + affirm 2 = 14 -> 10
        let out = engine.modulate(
            &profile(ToneArchetype::AnxiousPerfectionist),
            &eq,
            CoachingMove::Affirm,
        );
        assert_eq!(out.warmth, 10.0);
    }

    #[test]
    fn test_assertiveness_floor_at_zero() {
        let engine = ToneEngine::new();
        let mut eq = calm_eq();
        eq.valence = -0.5;
        eq.vulnerability = true;
        // QuietDeepThinker assertiveness 3 - 1 - 2 = 0, mirror adds nothing
        let out = engine.modulate(
            &profile(ToneArchetype::QuietDeepThinker),
            &eq,
            CoachingMove::Mirror,
        );
        assert_eq!(out.assertiveness, 0.0);
        assert!(out.assertiveness >= 0.0);
    }

    #[test]
    fn test_later_layer_wins_on_pacing() {
        let engine = ToneEngine::new();
        let mut eq = calm_eq();
        eq.vulnerability = true; // EQ layer sets slow
        let out = engine.modulate(
            &profile(ToneArchetype::AnxiousPerfectionist),
            &eq,
            CoachingMove::Breaker, // move layer sets fast
        );
        assert_eq!(out.pacing, Pacing::Fast);
    }

    #[test]
    fn test_rationale_accumulates_across_layers() {
        let engine = ToneEngine::new();
        let mut eq = calm_eq();
        eq.cognitive_load = Level::High;
        let out = engine.modulate(
            &profile(ToneArchetype::UnfocusedExplorer),
            &eq,
            CoachingMove::Reframe,
        );
        assert!(out.rationale.contains("Explorer"));
        assert!(out.rationale.contains("cognitive load high"));
        assert!(out.rationale.contains("Move: reframe"));
        assert!(out.style_markers.contains(&"clarity-blade".to_string()));
    }

    #[test]
    fn test_all_dimensions_within_range_after_stacking() {
        let engine = ToneEngine::new();
        let eq = EqStateForTone {
            valence: -1.0,
            activation: Level::High,
            cognitive_load: Level::High,
            vulnerability: true,
            safety_signals: false,
        };
        for kind in [
            ToneArchetype::HighAchiever,
            ToneArchetype::AnxiousPerfectionist,
            ToneArchetype::UnfocusedExplorer,
            ToneArchetype::ReluctantPragmatist,
            ToneArchetype::OverscheduledOverachiever,
            ToneArchetype::QuietDeepThinker,
            ToneArchetype::Unknown,
        ] {
            for mv in [
                CoachingMove::Affirm,
                CoachingMove::Reframe,
                CoachingMove::Challenge,
                CoachingMove::Motivate,
                CoachingMove::Accountability,
                CoachingMove::Anchor,
                CoachingMove::Mirror,
                CoachingMove::Breaker,
                CoachingMove::None,
            ] {
                let out = engine.modulate(&profile(kind), &eq, mv);
                for value in [out.warmth, out.directness, out.assertiveness, out.specificity] {
                    assert!((0.0..=10.0).contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_eq_state_for_tone_derivation() {
        let mut state = EqRuntimeState::default();
        state.anxiety = Level::High;
        state.confidence_signal = -6;
        state.stage = SessionStage::Analysis;

        let eq = eq_state_for_tone(&state);
        assert_eq!(eq.valence, -0.5);
        assert_eq!(eq.activation, Level::Low);
        assert_eq!(eq.cognitive_load, Level::High);
        assert!(eq.vulnerability);
        assert!(!eq.safety_signals);
    }
}
