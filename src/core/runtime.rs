//! EQ runtime: always-on emotional calibration for one session
//!
//! The glue between the inference models and the curve composer: updates
//! archetype, anxiety, confidence, and session stage from each student
//! message, then computes style directives for the reply.

use chrono::Utc;
use tracing::debug;

use crate::core::curve::{compose_curve, CurveParams};
use crate::core::{archetype, confidence, stage};
use crate::types::{ConfidenceLevel, EqRuntimeState, Level, StudentArchetype, StyleDirective};
use crate::CONFIDENCE_HISTORY_LIMIT;

/// Phrases that read as high anxiety
const HIGH_ANXIETY_PATTERNS: &[&str] = &[
    "idk",
    "i don't know",
    "overwhelmed",
    "panic",
    "freaking out",
    "so stressed",
    "can't handle",
];

/// Phrases that read as low anxiety
const LOW_ANXIETY_PATTERNS: &[&str] = &[
    "easy",
    "done already",
    "no problem",
    "confident",
    "got this",
    "ready",
];

/// Per-session EQ state machine
#[derive(Debug, Default)]
pub struct EqRuntime {
    state: EqRuntimeState,
}

impl EqRuntime {
    pub fn new() -> Self {
        Self {
            state: EqRuntimeState::default(),
        }
    }

    /// Process a student message, updating archetype, anxiety, confidence,
    /// and session stage. Call before computing directives for the reply.
    pub fn update(&mut self, message: &str) {
        if let Some(detected) = archetype::infer(message) {
            debug!(archetype = %detected, "archetype detected");
            self.state.archetype = detected;
        }

        self.update_anxiety(message);

        let delta = confidence::delta(message);
        if delta != 0 {
            self.state.confidence_signal += delta;
            self.state.confidence_history.push(delta);
            if self.state.confidence_history.len() > CONFIDENCE_HISTORY_LIMIT {
                self.state.confidence_history.remove(0);
            }
            debug!(
                delta,
                total = self.state.confidence_signal,
                "confidence updated"
            );
        }

        let previous = self.state.stage;
        let detected = stage::detect(message, previous);
        if detected != previous {
            debug!(from = %previous, to = %detected, "stage transition");
            self.state.stage = detected;
            self.state.messages_in_stage = 0;
        } else {
            self.state.messages_in_stage += 1;
            if stage::should_force_advancement(self.state.stage, self.state.messages_in_stage) {
                if let Some(next) = self.state.stage.next() {
                    debug!(
                        from = %self.state.stage,
                        to = %next,
                        count = self.state.messages_in_stage,
                        "forced stage advancement"
                    );
                    self.state.stage = next;
                    self.state.messages_in_stage = 0;
                }
            }
        }

        self.state.total_messages += 1;
    }

    /// Apply the EQ curve to a base directive for the current state.
    ///
    /// An undetected archetype defaults to underdog-high-ceiling.
    pub fn compute_directives(&mut self, base: StyleDirective) -> StyleDirective {
        let params = CurveParams {
            stage: self.state.stage,
            archetype: if self.state.archetype == StudentArchetype::Unknown {
                StudentArchetype::UnderdogHighCeiling
            } else {
                self.state.archetype
            },
            anxiety: self.state.anxiety,
            confidence: self.state.confidence_signal,
        };

        let adjusted = compose_curve(base, &params);
        self.state.last_directives = Some(adjusted);
        adjusted
    }

    pub fn state(&self) -> &EqRuntimeState {
        &self.state
    }

    /// Minutes elapsed since session start
    pub fn session_minutes(&self) -> i64 {
        (Utc::now() - self.state.session_start).num_minutes()
    }

    /// Current categorical confidence level
    pub fn confidence_level(&self) -> ConfidenceLevel {
        confidence::classify(self.state.confidence_signal)
    }

    pub fn reset(&mut self) {
        self.state = EqRuntimeState::default();
    }

    /// Anxiety heuristic: high and low signals are sticky until the next
    /// clear signal; anything else falls back to medium
    fn update_anxiety(&mut self, message: &str) {
        let m = message.to_lowercase();

        if HIGH_ANXIETY_PATTERNS.iter().any(|p| m.contains(p)) {
            self.state.anxiety = Level::High;
            return;
        }
        if LOW_ANXIETY_PATTERNS.iter().any(|p| m.contains(p)) {
            self.state.anxiety = Level::Low;
            return;
        }
        self.state.anxiety = Level::Medium;
    }
}

/// Render a style directive as the prompt overlay injected before generation
pub fn build_style_overlay(style: &StyleDirective) -> String {
    format!(
        "### STYLE OVERRIDE (GENERATED BY EQ CURVE)\n\
         Warmth: {}\n\
         Empathy: {}\n\
         Cheer: {}\n\
         Firmness: {}\n\
         Pace: {}\n\
         Intensity: {}\n\
         \n\
         Please adapt your tone dynamically to match these emotional settings precisely.\n\
         - Warmth {}: {}\n\
         - Empathy {}: {}\n\
         - Firmness {}: {}\n\
         - Pace {}: {}\n",
        style.warmth,
        style.empathy,
        style.cheer,
        style.firmness,
        style.pace,
        style.intensity,
        style.warmth,
        warmth_guidance(style.warmth),
        style.empathy,
        empathy_guidance(style.empathy),
        style.firmness,
        firmness_guidance(style.firmness),
        style.pace,
        pace_guidance(style.pace),
    )
}

fn warmth_guidance(level: Level) -> &'static str {
    match level {
        Level::High => "Be very warm, welcoming, and friendly",
        Level::Medium => "Be moderately warm and professional",
        Level::Low => "Be neutral and task-focused",
    }
}

fn empathy_guidance(level: Level) -> &'static str {
    match level {
        Level::High => "Show deep understanding and validation of emotions",
        Level::Medium => "Acknowledge emotions when relevant",
        Level::Low => "Focus on facts and actions, minimal emotional reflection",
    }
}

fn firmness_guidance(level: Level) -> &'static str {
    match level {
        Level::High => "Be direct, assertive, and reality-grounded",
        Level::Medium => "Balance directness with gentleness",
        Level::Low => "Be soft, gentle, and tentative with feedback",
    }
}

fn pace_guidance(pace: crate::types::Pace) -> &'static str {
    match pace {
        crate::types::Pace::Slow => "Take your time, use shorter sentences, pause for reflection",
        crate::types::Pace::Normal => "Use natural conversational pacing",
        crate::types::Pace::Fast => "Be concise and energetic, move quickly through points",
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionStage;

    #[test]
    fn test_initial_state() {
        let runtime = EqRuntime::new();
        assert_eq!(runtime.state().archetype, StudentArchetype::Unknown);
        assert_eq!(runtime.state().stage, SessionStage::Opening);
        assert_eq!(runtime.state().anxiety, Level::Medium);
        assert_eq!(runtime.state().confidence_signal, 0);
    }

    #[test]
    fn test_archetype_sticks_once_detected() {
        let mut runtime = EqRuntime::new();
        runtime.update("i'm not good at any of this");
        assert_eq!(
            runtime.state().archetype,
            StudentArchetype::LowConfidenceBuilder
        );
        // a signal-free message must not clear it
        runtime.update("the weather was nice today");
        assert_eq!(
            runtime.state().archetype,
            StudentArchetype::LowConfidenceBuilder
        );
    }

    #[test]
    fn test_anxiety_tracks_latest_signal() {
        let mut runtime = EqRuntime::new();
        runtime.update("i'm freaking out about finals");
        assert_eq!(runtime.state().anxiety, Level::High);
        runtime.update("actually that was easy, no problem");
        assert_eq!(runtime.state().anxiety, Level::Low);
        runtime.update("the counselor rescheduled");
        assert_eq!(runtime.state().anxiety, Level::Medium);
    }

    #[test]
    fn test_confidence_accumulates_and_bounds_history() {
        let mut runtime = EqRuntime::new();
        for _ in 0..15 {
            runtime.update("i'm worried");
        }
        assert_eq!(runtime.state().confidence_signal, -30);
        assert_eq!(
            runtime.state().confidence_history.len(),
            CONFIDENCE_HISTORY_LIMIT
        );
        assert_eq!(runtime.confidence_level(), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn test_stage_advances_and_never_regresses() {
        let mut runtime = EqRuntime::new();
        runtime.update("hi jenny!");
        assert_eq!(runtime.state().stage, SessionStage::RapportBuilding);

        runtime.update("my gpa is 3.7 and i'm taking three aps");
        assert_eq!(runtime.state().stage, SessionStage::DiagnosticProbing);

        let before = runtime.state().stage.index();
        runtime.update("hello again");
        assert!(runtime.state().stage.index() >= before);
    }

    #[test]
    fn test_forced_stage_advancement() {
        let mut runtime = EqRuntime::new();
        runtime.update("hi");
        assert_eq!(runtime.state().stage, SessionStage::RapportBuilding);

        // rapport-building caps at 5 messages
        for _ in 0..5 {
            runtime.update("school is school, you know");
        }
        assert_eq!(runtime.state().stage, SessionStage::DiagnosticProbing);
    }

    #[test]
    fn test_unknown_archetype_defaults_in_curve() {
        let mut runtime = EqRuntime::new();
        runtime.update("hello");
        let out = runtime.compute_directives(StyleDirective::default());
        // underdog default on rapport-building: warmth high from stage,
        // firmness elevated by the underdog nudge
        assert_eq!(out.warmth, Level::High);
        assert_eq!(out.firmness, Level::High);
        assert!(runtime.state().last_directives.is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut runtime = EqRuntime::new();
        runtime.update("i'm panicking, i need to get into stanford");
        runtime.reset();
        assert_eq!(runtime.state().archetype, StudentArchetype::Unknown);
        assert_eq!(runtime.state().total_messages, 0);
        assert!(runtime.state().confidence_history.is_empty());
    }

    #[test]
    fn test_session_minutes_starts_at_zero() {
        let runtime = EqRuntime::new();
        assert_eq!(runtime.session_minutes(), 0);
    }

    #[test]
    fn test_overlay_mentions_every_dimension() {
        let overlay = build_style_overlay(&StyleDirective::default());
        for token in ["Warmth", "Empathy", "Cheer", "Firmness", "Pace", "Intensity"] {
            assert!(overlay.contains(token));
        }
    }
}
