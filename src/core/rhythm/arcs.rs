//! Arc builder: assembles clauses into the four named rhythm patterns

use crate::core::rhythm::clause::ClauseGenerator;
use crate::types::{ClauseOptions, EmotionalState, Pacing, RhythmPattern, SentenceArc, ToneDirective};

/// Orchestrates clause generation into coherent sentence arcs
#[derive(Debug, Default)]
pub struct RhythmEngine {
    clauses: ClauseGenerator,
}

impl RhythmEngine {
    pub fn new() -> Self {
        Self {
            clauses: ClauseGenerator::new(),
        }
    }

    /// Deterministic arcs for tests and replay
    pub fn with_seed(seed: u64) -> Self {
        Self {
            clauses: ClauseGenerator::with_seed(seed),
        }
    }

    /// Two-sentence arc (validation -> direction), the core pattern.
    ///
    /// Example: "That tension is real. Here's the move I'd focus on next."
    pub fn two_sentence_arc(&mut self, opts: &ClauseOptions) -> SentenceArc {
        SentenceArc {
            validation: Some(self.clauses.validation_clause(opts)),
            direction: Some(self.clauses.direction_clause(opts)),
            encouragement: None,
            pattern: RhythmPattern::ValidationDirection,
        }
    }

    /// Three-sentence arc (validation -> direction -> encouragement) for
    /// higher-stakes moments
    pub fn three_sentence_arc(&mut self, opts: &ClauseOptions) -> SentenceArc {
        SentenceArc {
            validation: Some(self.clauses.validation_clause(opts)),
            direction: Some(self.clauses.direction_clause(opts)),
            encouragement: Some(self.clauses.encouragement_clause(opts)),
            pattern: RhythmPattern::ValidationDirectionEncouragement,
        }
    }

    /// Grounding-clarity arc (emotion -> structure): stabilize before action
    pub fn grounding_clarity_arc(&mut self, opts: &ClauseOptions) -> SentenceArc {
        let breath = self.clauses.breath_marker(opts.pacing);
        let validation = format!("{} {}", breath, self.clauses.validation_clause(opts));

        let softener = self.clauses.softener();
        let direction = format!(
            "{} {}",
            softener,
            lowercase_first(&self.clauses.direction_clause(opts))
        );

        SentenceArc {
            validation: Some(validation),
            direction: Some(direction),
            encouragement: None,
            pattern: RhythmPattern::GroundingClarity,
        }
    }

    /// Empathy-action arc (feeling -> doing): extra validation, softer
    /// direction
    pub fn empathy_action_arc(&mut self, opts: &ClauseOptions) -> SentenceArc {
        let validation = self.clauses.validation_clause(opts);

        let softener = self.clauses.softener();
        let direction = format!(
            "{} {}",
            softener,
            lowercase_first(&self.clauses.direction_clause(opts))
        );

        SentenceArc {
            validation: Some(validation),
            direction: Some(direction),
            encouragement: Some(self.clauses.encouragement_clause(opts)),
            pattern: RhythmPattern::EmpathyAction,
        }
    }

    /// The pattern routing rules, in priority order
    pub fn select_pattern(&self, tone: &ToneDirective, opts: &ClauseOptions) -> RhythmPattern {
        if opts.emotional_state == EmotionalState::Overwhelmed {
            return RhythmPattern::GroundingClarity;
        }
        if opts.emotional_state == EmotionalState::Stressed && opts.pacing == Pacing::Slow {
            return RhythmPattern::EmpathyAction;
        }
        if tone.warmth >= 7.0 && tone.assertiveness <= 4.0 {
            return RhythmPattern::EmpathyAction;
        }
        if opts.pacing == Pacing::Fast && tone.assertiveness >= 7.0 {
            return RhythmPattern::ValidationDirection;
        }
        if tone.directness >= 8.0 {
            return RhythmPattern::ValidationDirection;
        }
        RhythmPattern::ValidationDirectionEncouragement
    }

    /// Build an arc, auto-selecting the pattern unless one is given
    pub fn build_arc(
        &mut self,
        tone: &ToneDirective,
        opts: &ClauseOptions,
        pattern: Option<RhythmPattern>,
    ) -> SentenceArc {
        match pattern.unwrap_or_else(|| self.select_pattern(tone, opts)) {
            RhythmPattern::ValidationDirection => self.two_sentence_arc(opts),
            RhythmPattern::ValidationDirectionEncouragement => self.three_sentence_arc(opts),
            RhythmPattern::GroundingClarity => self.grounding_clarity_arc(opts),
            RhythmPattern::EmpathyAction => self.empathy_action_arc(opts),
        }
    }

    pub fn clauses_mut(&mut self) -> &mut ClauseGenerator {
        &mut self.clauses
    }

    pub fn reset(&mut self) {
        self.clauses.reset();
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
