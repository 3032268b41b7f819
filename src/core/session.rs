//! Coach session: one full tracker set per conversation
//!
//! Runs the fixed per-turn order: momentum -> structuring -> EQ runtime ->
//! coaching arbitration, then computes the two independent directive views
//! (categorical style curve and continuous tone + phrases) from the same
//! inputs. Neither view consumes the other's result.

use tracing::debug;

use crate::core::coaching::CoachingEngine;
use crate::core::momentum::MomentumEngine;
use crate::core::phrasebank::PhrasebankEngine;
use crate::core::rhythm::Rewriter;
use crate::core::runtime::EqRuntime;
use crate::core::structuring::StructuringEngine;
use crate::core::tone::{eq_state_for_tone, ToneEngine};
use crate::types::{
    ArchetypeProfile, CoachingDirective, EmotionalState, EqRuntimeState, Level, MomentumState,
    RewriteOptions, SelectedPhrases, StructuringDirectives, StyleDirective, ToneDirective,
};

/// Everything the pipeline produces for one turn
#[derive(Debug, Clone)]
pub struct TurnOutput {
    pub momentum: MomentumState,
    pub structuring: StructuringDirectives,
    pub coaching: CoachingDirective,
    /// Categorical view: feeds the prompt style overlay
    pub style: StyleDirective,
    /// Continuous view: feeds the phrasebank/rhythm renderer
    pub tone: ToneDirective,
    pub phrases: SelectedPhrases,
}

/// One conversation session holding every tracker.
///
/// Sessions are independent; never interleave two turns of the same session.
#[derive(Debug)]
pub struct CoachSession {
    momentum: MomentumEngine,
    structuring: StructuringEngine,
    eq: EqRuntime,
    coaching: CoachingEngine,
    tone: ToneEngine,
    phrasebank: PhrasebankEngine,
    rewriter: Rewriter,
}

impl Default for CoachSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachSession {
    pub fn new() -> Self {
        Self {
            momentum: MomentumEngine::new(),
            structuring: StructuringEngine::new(),
            eq: EqRuntime::new(),
            coaching: CoachingEngine::new(),
            tone: ToneEngine::new(),
            phrasebank: PhrasebankEngine::new(),
            rewriter: Rewriter::new(),
        }
    }

    /// Deterministic phrase and clause selection for tests and replay
    pub fn with_seed(seed: u64) -> Self {
        Self {
            momentum: MomentumEngine::new(),
            structuring: StructuringEngine::new(),
            eq: EqRuntime::new(),
            coaching: CoachingEngine::new(),
            tone: ToneEngine::new(),
            phrasebank: PhrasebankEngine::with_seed(seed),
            rewriter: Rewriter::with_seed(seed.wrapping_add(1)),
        }
    }

    /// Process one inbound student message and produce both directive views
    pub fn advance(&mut self, message: &str) -> TurnOutput {
        let momentum = self.momentum.update(message);
        let structuring = self.structuring.evaluate(message, &momentum);
        self.eq.update(message);
        let coaching = self.coaching.evaluate(message, &momentum, self.eq.state());

        let style = self.eq.compute_directives(StyleDirective::default());

        let profile = ArchetypeProfile::from(self.eq.state().archetype);
        let eq_for_tone = eq_state_for_tone(self.eq.state());
        let tone = self.tone.modulate(&profile, &eq_for_tone, coaching.mv);
        let phrases = self.phrasebank.select(&tone, coaching.mv);

        debug!(mv = %coaching.mv, step = %structuring.agenda_step, "turn advanced");

        TurnOutput {
            momentum,
            structuring,
            coaching,
            style,
            tone,
            phrases,
        }
    }

    /// Rewrite reply text into the persona's rhythm for the current state
    pub fn rewrite_reply(&mut self, content: &str, tone: &ToneDirective) -> String {
        let opts = RewriteOptions {
            emotional_state: emotional_state_of(self.eq.state()),
            pacing: tone.pacing,
            archetype: self.eq.state().archetype.into(),
            max_sentences: None,
        };
        self.rewriter.rewrite(content, tone, &opts)
    }

    pub fn momentum(&self) -> &MomentumEngine {
        &self.momentum
    }

    pub fn structuring(&self) -> &StructuringEngine {
        &self.structuring
    }

    pub fn eq_state(&self) -> &EqRuntimeState {
        self.eq.state()
    }

    pub fn phrasebank(&self) -> &PhrasebankEngine {
        &self.phrasebank
    }

    /// Reset every tracker to its construction defaults
    pub fn reset(&mut self) {
        self.momentum.reset();
        self.structuring.reset();
        self.eq.reset();
        self.coaching.reset();
        self.phrasebank.reset();
        self.rewriter.reset();
    }
}

/// Collapse the runtime state into the rhythm layer's emotional state
fn emotional_state_of(eq: &EqRuntimeState) -> EmotionalState {
    match eq.anxiety {
        Level::High if eq.confidence_signal <= -5 => EmotionalState::Overwhelmed,
        Level::High => EmotionalState::Stressed,
        Level::Medium if eq.confidence_signal <= -3 => EmotionalState::Stressed,
        _ => EmotionalState::Stable,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoachingMove, Pacing};

    #[test]
    fn test_turn_produces_both_directive_views() {
        let mut session = CoachSession::with_seed(1);
        let out = session.advance("hi, can you help me figure out my college plan?");

        assert!(!out.phrases.body.is_empty());
        assert!((0.0..=10.0).contains(&out.tone.warmth));
        assert!(!out.coaching.rationale.is_empty());
    }

    #[test]
    fn test_emotional_state_mapping() {
        let mut eq = EqRuntimeState::default();
        eq.anxiety = Level::High;
        eq.confidence_signal = -6;
        assert_eq!(emotional_state_of(&eq), EmotionalState::Overwhelmed);

        eq.confidence_signal = 0;
        assert_eq!(emotional_state_of(&eq), EmotionalState::Stressed);

        eq.anxiety = Level::Medium;
        eq.confidence_signal = -4;
        assert_eq!(emotional_state_of(&eq), EmotionalState::Stressed);

        eq.confidence_signal = 0;
        assert_eq!(emotional_state_of(&eq), EmotionalState::Stable);
    }

    #[test]
    fn test_rewrite_reply_nonempty() {
        let mut session = CoachSession::with_seed(9);
        let out = session.advance("i'm so overwhelmed, idk where to start");
        let rewritten = session.rewrite_reply("You should make a plan. Start small.", &out.tone);
        assert!(!rewritten.is_empty());
    }

    #[test]
    fn test_disengagement_turn_flags() {
        let mut session = CoachSession::with_seed(2);
        session.advance("ok");
        session.advance("sure");
        let out = session.advance("k");
        assert!(out.momentum.disengaged);
        assert_eq!(out.coaching.mv, CoachingMove::Motivate);
    }

    #[test]
    fn test_reset_restores_fresh_session() {
        let mut session = CoachSession::with_seed(3);
        session.advance("my gpa is 3.9 and i'm stressed");
        session.reset();

        assert_eq!(session.eq_state(), &{
            let mut fresh = EqRuntimeState::default();
            fresh.session_start = session.eq_state().session_start;
            fresh
        });
        assert_eq!(session.momentum().state(), &MomentumState::default());
    }

    #[test]
    fn test_tone_pacing_feeds_rewrite() {
        let mut session = CoachSession::with_seed(4);
        let out = session.advance("honestly i'm freaking out about all of this");
        // high anxiety reads as distress and vulnerability, slowing the tone
        assert_eq!(out.tone.pacing, Pacing::Slow);
    }
}
