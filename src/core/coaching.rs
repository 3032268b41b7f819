//! Coaching-move arbiter: chooses one micro-intervention per turn
//!
//! Moves, in strict priority order: breaker, affirm, reframe, challenge,
//! motivate, accountability, anchor, mirror, none. Breaker pre-empts even
//! strong vulnerability signals; affirm pre-empts reframe; reframe pre-empts
//! challenge; motivate pre-empts accountability.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{
    CoachingDirective, CoachingMove, EqRuntimeState, Intensity, Level, MomentumState,
    StudentArchetype, Trend,
};
use crate::MESSAGE_HISTORY_LIMIT;

/// Phrases indicating emotional honesty or vulnerability
const VULNERABILITY_PATTERNS: &[&str] = &[
    "i feel",
    "i'm worried",
    "i'm scared",
    "i'm anxious",
    "i'm nervous",
    "i'm not sure",
    "i don't know",
    "i'm afraid",
    "honestly",
    "to be honest",
    "truth is",
    "i'm struggling",
    "this is hard",
];

/// Phrases indicating cognitive overload or ambiguity
const CONFUSION_PATTERNS: &[&str] = &[
    "confused",
    "overwhelmed",
    "stuck",
    "lost",
    "don't understand",
    "not sure what",
    "how do i",
    "where do i start",
    "too much",
    "complicated",
];

/// Phrases indicating non-commitment or deflection
const AVOIDANCE_PATTERNS: &[&str] = &[
    "maybe",
    "i'll try",
    "someday",
    "later",
    "eventually",
    "hopefully",
    "might",
    "probably",
    "if i can",
    "we'll see",
];

/// Phrases referencing future aspirations
const GOAL_PATTERNS: &[&str] = &[
    "goal",
    "dream",
    "college",
    "university",
    "future",
    "vision",
    "want to",
    "hope to",
    "aspire",
    "ambition",
    "career",
    "major",
];

/// Phrases indicating achievement or forward movement
const PROGRESS_PATTERNS: &[&str] = &[
    "i did",
    "i finished",
    "i completed",
    "i achieved",
    "i got",
    "i made",
    "i improved",
    "i worked on",
    "i figured out",
    "i understand now",
];

/// Phrases indicating self-limitation or low ambition
const PLAYING_SMALL_PATTERNS: &[&str] = &[
    "just a",
    "only a",
    "not that good",
    "probably not",
    "i can't",
    "too hard",
    "impossible",
    "never",
    "no way",
    "settle for",
];

/// Decides which coaching move to deploy each turn
#[derive(Debug, Default)]
pub struct CoachingEngine {
    history: Vec<String>,
    last_move: Option<CoachingMove>,
    move_counts: HashMap<CoachingMove, u32>,
}

impl CoachingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a message against the strict priority order.
    ///
    /// Always returns a directive with a non-empty rationale; the default is
    /// the `none` move.
    pub fn evaluate(
        &mut self,
        message: &str,
        momentum: &MomentumState,
        eq: &EqRuntimeState,
    ) -> CoachingDirective {
        let msg = message.trim().to_lowercase();

        self.history.push(msg.clone());
        if self.history.len() > MESSAGE_HISTORY_LIMIT {
            self.history.remove(0);
        }

        // Priority 1: breaker - stuck state / cognitive loop
        if self.is_looping() {
            return self.record(CoachingDirective {
                mv: CoachingMove::Breaker,
                rationale: "Student in cognitive loop; trigger pattern interrupt".to_string(),
                intensity: Some(Intensity::Strong),
                context: Some("Repetitive language or circular thinking detected".to_string()),
            });
        }

        // Priority 2: affirm - vulnerability, then progress
        if contains_any(&msg, VULNERABILITY_PATTERNS) {
            let intensity = if momentum.score < 40 {
                Intensity::Strong
            } else {
                Intensity::Medium
            };
            return self.record(CoachingDirective {
                mv: CoachingMove::Affirm,
                rationale: "Student shows emotional honesty or vulnerability".to_string(),
                intensity: Some(intensity),
                context: Some("Validate feeling while maintaining forward motion".to_string()),
            });
        }
        if contains_any(&msg, PROGRESS_PATTERNS) {
            return self.record(CoachingDirective {
                mv: CoachingMove::Affirm,
                rationale: "Student sharing progress or achievement".to_string(),
                intensity: Some(Intensity::Medium),
                context: Some("Recognize effort and build momentum".to_string()),
            });
        }

        // Priority 3: reframe - confusion or overwhelm
        if contains_any(&msg, CONFUSION_PATTERNS) {
            let intensity = if momentum.focus_lost {
                Intensity::Strong
            } else {
                Intensity::Medium
            };
            return self.record(CoachingDirective {
                mv: CoachingMove::Reframe,
                rationale: "Student indicates cognitive overload or ambiguity".to_string(),
                intensity: Some(intensity),
                context: Some("Simplify and provide structure".to_string()),
            });
        }

        // Priority 4: challenge - playing small, or engaged but superficial
        if contains_any(&msg, PLAYING_SMALL_PATTERNS) {
            let intensity = if eq.anxiety == Level::High {
                Intensity::Light
            } else {
                Intensity::Medium
            };
            return self.record(CoachingDirective {
                mv: CoachingMove::Challenge,
                rationale: "Student self-limiting or playing small".to_string(),
                intensity: Some(intensity),
                context: Some("Push boundaries without triggering anxiety".to_string()),
            });
        }
        if momentum.trend == Trend::Up && msg.chars().count() < 60 && !momentum.disengaged {
            return self.record(CoachingDirective {
                mv: CoachingMove::Challenge,
                rationale: "Student engaged but superficial; push for depth".to_string(),
                intensity: Some(Intensity::Light),
                context: Some("Ask probing question to deepen engagement".to_string()),
            });
        }

        // Priority 5: motivate - momentum dipping
        if momentum.trend == Trend::Down || momentum.score < 40 {
            let intensity = if momentum.score < 30 {
                Intensity::Strong
            } else {
                Intensity::Medium
            };
            return self.record(CoachingDirective {
                mv: CoachingMove::Motivate,
                rationale: "Energy is dipping; give a momentum spark".to_string(),
                intensity: Some(intensity),
                context: Some("Inject enthusiasm and confidence boost".to_string()),
            });
        }

        // Priority 6: accountability - avoidance patterns
        if contains_any(&msg, AVOIDANCE_PATTERNS) {
            let intensity = if eq.archetype == StudentArchetype::LowConfidenceBuilder {
                Intensity::Light
            } else {
                Intensity::Medium
            };
            return self.record(CoachingDirective {
                mv: CoachingMove::Accountability,
                rationale: "Student is avoiding commitment; nudge lightly".to_string(),
                intensity: Some(intensity),
                context: Some("Seek concrete commitment without pressure".to_string()),
            });
        }

        // Priority 7: anchor - goal talk
        if contains_any(&msg, GOAL_PATTERNS) {
            return self.record(CoachingDirective {
                mv: CoachingMove::Anchor,
                rationale: "Student referencing their future; anchor to long-term vision"
                    .to_string(),
                intensity: Some(Intensity::Medium),
                context: Some("Connect current actions to future aspirations".to_string()),
            });
        }

        // Priority 8: mirror - pattern recognition
        if self.history.len() >= 3 && self.is_repetitive() {
            return self.record(CoachingDirective {
                mv: CoachingMove::Mirror,
                rationale: "Student repeating themselves; reflect pattern".to_string(),
                intensity: Some(Intensity::Light),
                context: Some("Gently point out pattern without judgment".to_string()),
            });
        }

        self.record(CoachingDirective {
            mv: CoachingMove::None,
            rationale: "Conversation flowing naturally; no intervention needed".to_string(),
            intensity: None,
            context: None,
        })
    }

    /// The latest message shares >=3 long words with at least one of the two
    /// messages before it
    fn is_repetitive(&self) -> bool {
        if self.history.len() < 3 {
            return false;
        }
        let recent = &self.history[self.history.len() - 3..];
        let last = &recent[2];

        recent[..2]
            .iter()
            .filter(|earlier| {
                earlier
                    .split_whitespace()
                    .filter(|w| w.len() > 4 && last.contains(*w))
                    .count()
                    >= 3
            })
            .count()
            >= 1
    }

    /// Any bigram of long-enough adjacent words occurring three or more times
    /// across the last four messages
    fn is_looping(&self) -> bool {
        if self.history.len() < 4 {
            return false;
        }
        let recent = &self.history[self.history.len() - 4..];

        let mut bigrams: HashMap<String, u32> = HashMap::new();
        for msg in recent {
            let words: Vec<&str> = msg.split(' ').collect();
            for pair in words.windows(2) {
                if pair[0].len() > 3 && pair[1].len() > 3 {
                    *bigrams
                        .entry(format!("{} {}", pair[0], pair[1]))
                        .or_insert(0) += 1;
                }
            }
        }

        bigrams.values().any(|count| *count >= 3)
    }

    fn record(&mut self, directive: CoachingDirective) -> CoachingDirective {
        self.last_move = Some(directive.mv);
        *self.move_counts.entry(directive.mv).or_insert(0) += 1;
        debug!(mv = %directive.mv, rationale = %directive.rationale, "coaching move chosen");
        directive
    }

    /// How many times each move has been used this session
    pub fn move_counts(&self) -> &HashMap<CoachingMove, u32> {
        &self.move_counts
    }

    pub fn last_move(&self) -> Option<CoachingMove> {
        self.last_move
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_move = None;
        self.move_counts.clear();
    }
}

fn contains_any(msg: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| msg.contains(p))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_momentum() -> MomentumState {
        MomentumState::default()
    }

    fn neutral_eq() -> EqRuntimeState {
        EqRuntimeState::default()
    }

    #[test]
    fn test_vulnerability_triggers_affirm() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "honestly i'm worried about my applications",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Affirm);
        assert!(!d.rationale.is_empty());
    }

    #[test]
    fn test_affirm_strong_when_momentum_low() {
        let mut coach = CoachingEngine::new();
        let mut momentum = neutral_momentum();
        momentum.score = 30;
        let d = coach.evaluate("i feel really behind", &momentum, &neutral_eq());
        assert_eq!(d.mv, CoachingMove::Affirm);
        assert_eq!(d.intensity, Some(Intensity::Strong));
    }

    #[test]
    fn test_confusion_triggers_reframe() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "this whole process is so complicated and confusing to navigate",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Reframe);
    }

    #[test]
    fn test_confusion_beats_playing_small() {
        let mut coach = CoachingEngine::new();
        // matches both "confused" and "i can't"
        let d = coach.evaluate(
            "i'm confused, i can't figure any of this out",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Reframe);
    }

    #[test]
    fn test_playing_small_triggers_challenge() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "it was just a small science fair project, nothing worth mentioning to colleges",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Challenge);
        assert_eq!(d.intensity, Some(Intensity::Medium));
    }

    #[test]
    fn test_challenge_softened_by_high_anxiety() {
        let mut coach = CoachingEngine::new();
        let mut eq = neutral_eq();
        eq.anxiety = Level::High;
        let d = coach.evaluate(
            "it was just a small science fair project, nothing worth mentioning to colleges",
            &neutral_momentum(),
            &eq,
        );
        assert_eq!(d.intensity, Some(Intensity::Light));
    }

    #[test]
    fn test_motivate_on_downward_trend() {
        let mut coach = CoachingEngine::new();
        let mut momentum = neutral_momentum();
        momentum.trend = Trend::Down;
        let d = coach.evaluate(
            "the essay draft came back with lots of comments from the teacher",
            &momentum,
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Motivate);
    }

    #[test]
    fn test_avoidance_triggers_accountability() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "i'll get to the common app essay eventually, we'll see how the semester goes",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Accountability);
    }

    #[test]
    fn test_accountability_light_for_low_confidence_builder() {
        let mut coach = CoachingEngine::new();
        let mut eq = neutral_eq();
        eq.archetype = StudentArchetype::LowConfidenceBuilder;
        let d = coach.evaluate(
            "i'll get to the common app essay eventually, we'll see how the semester goes",
            &neutral_momentum(),
            &eq,
        );
        assert_eq!(d.intensity, Some(Intensity::Light));
    }

    #[test]
    fn test_goal_talk_triggers_anchor() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "the plan for college has been on the whiteboard since freshman year honestly no wait",
            &neutral_momentum(),
            &neutral_eq(),
        );
        // vulnerability ("honestly") outranks anchor
        assert_eq!(d.mv, CoachingMove::Affirm);

        let d = coach.evaluate(
            "getting into a strong engineering college has been the family ambition forever",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::Anchor);
    }

    #[test]
    fn test_breaker_on_loop_beats_vulnerability() {
        let mut coach = CoachingEngine::new();
        let looped = "honestly the essay deadline keeps slipping away from me every single week";
        let mut last = CoachingDirective {
            mv: CoachingMove::None,
            rationale: "start".to_string(),
            intensity: None,
            context: None,
        };
        for _ in 0..4 {
            last = coach.evaluate(looped, &neutral_momentum(), &neutral_eq());
        }
        assert_eq!(last.mv, CoachingMove::Breaker);
        assert_eq!(last.intensity, Some(Intensity::Strong));
    }

    #[test]
    fn test_default_is_none() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate(
            "the counselor meeting happened on tuesday during lunch and ran long",
            &neutral_momentum(),
            &neutral_eq(),
        );
        assert_eq!(d.mv, CoachingMove::None);
        assert!(!d.rationale.is_empty());
    }

    #[test]
    fn test_empty_message_resolves_without_panic() {
        let mut coach = CoachingEngine::new();
        let d = coach.evaluate("", &neutral_momentum(), &neutral_eq());
        assert!(!d.rationale.is_empty());
    }

    #[test]
    fn test_history_bounded() {
        let mut coach = CoachingEngine::new();
        for i in 0..30 {
            coach.evaluate(
                &format!("message number {} about the counselor meeting", i),
                &neutral_momentum(),
                &neutral_eq(),
            );
        }
        assert_eq!(coach.history_len(), MESSAGE_HISTORY_LIMIT);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut coach = CoachingEngine::new();
        coach.evaluate("honestly i'm worried", &neutral_momentum(), &neutral_eq());
        coach.reset();
        assert_eq!(coach.last_move(), None);
        assert_eq!(coach.history_len(), 0);
        assert!(coach.move_counts().is_empty());
    }
}
