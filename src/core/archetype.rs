//! Archetype inference: lightweight keyword detection of student profiles
//!
//! Real-time detection from language patterns and self-description; no LLM.

use crate::types::style::Level;
use crate::types::{ArchetypeGuess, StudentArchetype};

/// First-match detection tables, scanned in fixed priority order
const DETECTION_PATTERNS: [(StudentArchetype, &[&str]); 5] = [
    (
        StudentArchetype::LowConfidenceBuilder,
        &[
            "i'm not good",
            "i feel behind",
            "not smart enough",
            "can't do this",
            "everyone else is better",
            "i'll probably fail",
            "i'm bad at",
        ],
    ),
    (
        StudentArchetype::HighAchieverAnxious,
        &[
            "i need to get into",
            "i must",
            "panic",
            "not good enough",
            "what if i don't",
            "i'm so stressed about",
            "perfect score",
            "anything less than",
        ],
    ),
    (
        StudentArchetype::OverconfidentSpiky,
        &[
            "i already know",
            "i'm ahead",
            "this is easy",
            "don't need help",
            "i got this",
            "pretty sure i'm fine",
            "way ahead of",
        ],
    ),
    (
        StudentArchetype::LateStarter,
        &[
            "starting late",
            "fell behind",
            "need to catch up",
            "behind my peers",
            "just started thinking about",
            "wish i had started earlier",
        ],
    ),
    (
        StudentArchetype::UnderdogHighCeiling,
        &[
            "people don't expect",
            "first generation",
            "first in my family",
            "no one thinks i can",
            "prove them wrong",
            "from a small school",
        ],
    ),
];

/// Weighted scoring tables for the confidence-bearing variant
const WEIGHTED_PATTERNS: [(StudentArchetype, &[(&str, u32)]); 5] = [
    (
        StudentArchetype::LowConfidenceBuilder,
        &[
            ("i'm not good", 3),
            ("i feel behind", 2),
            ("not smart enough", 3),
            ("can't do this", 2),
            ("everyone else is better", 3),
        ],
    ),
    (
        StudentArchetype::HighAchieverAnxious,
        &[
            ("i need to get into", 3),
            ("panic", 2),
            ("perfect", 2),
            ("what if i don't", 2),
            ("i must", 1),
        ],
    ),
    (
        StudentArchetype::OverconfidentSpiky,
        &[
            ("i already know", 3),
            ("i'm ahead", 2),
            ("this is easy", 2),
            ("don't need help", 3),
            ("i got this", 1),
        ],
    ),
    (
        StudentArchetype::LateStarter,
        &[
            ("starting late", 3),
            ("fell behind", 2),
            ("need to catch up", 2),
            ("behind my peers", 2),
        ],
    ),
    (
        StudentArchetype::UnderdogHighCeiling,
        &[
            ("first generation", 3),
            ("first in my family", 3),
            ("no one thinks i can", 3),
            ("prove them wrong", 2),
        ],
    ),
];

/// One matched archetype signal, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeSignal {
    pub archetype: StudentArchetype,
    pub pattern: &'static str,
    pub strength: u32,
}

/// First-match archetype detection; None when no pattern fires
pub fn infer(message: &str) -> Option<StudentArchetype> {
    let m = message.to_lowercase();
    DETECTION_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| m.contains(p)))
        .map(|(archetype, _)| *archetype)
}

/// Weighted variant: sums per-phrase weights and returns the highest-scoring
/// archetype with confidence = min(score/10, 1). Unknown with zero confidence
/// when nothing matches.
pub fn infer_with_confidence(message: &str) -> ArchetypeGuess {
    let m = message.to_lowercase();
    let mut best = ArchetypeGuess {
        label: StudentArchetype::Unknown,
        confidence: 0.0,
    };
    let mut max_score = 0;

    for (archetype, patterns) in WEIGHTED_PATTERNS {
        let score: u32 = patterns
            .iter()
            .filter(|(p, _)| m.contains(p))
            .map(|(_, w)| *w)
            .sum();
        if score > max_score {
            max_score = score;
            best = ArchetypeGuess {
                label: archetype,
                confidence: (f64::from(score) / 10.0).min(1.0),
            };
        }
    }

    best
}

/// Every archetype signal present in the message, with strengths
pub fn signals(message: &str) -> Vec<ArchetypeSignal> {
    let m = message.to_lowercase();
    let mut found = Vec::new();
    for (archetype, patterns) in WEIGHTED_PATTERNS {
        for &(pattern, strength) in patterns {
            if m.contains(pattern) {
                found.push(ArchetypeSignal {
                    archetype,
                    pattern,
                    strength,
                });
            }
        }
    }
    found
}

/// Behavioral signals observed outside the message stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehavioralSignals {
    /// -10 to +10
    pub confidence_level: i32,
    pub anxiety: Level,
    /// 0-10
    pub resistance: u32,
    pub motivation: Level,
    pub performance_gap: PerformanceGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceGap {
    Ahead,
    OnTrack,
    Behind,
}

/// Heuristic archetype detection from behavioral signals rather than text
pub fn detect_from_signals(signals: &BehavioralSignals) -> StudentArchetype {
    if signals.confidence_level > 5 && signals.resistance > 5 {
        return StudentArchetype::OverconfidentSpiky;
    }
    if signals.anxiety == Level::High && signals.confidence_level > 0 {
        return StudentArchetype::HighAchieverAnxious;
    }
    if signals.confidence_level < -3 {
        return StudentArchetype::LowConfidenceBuilder;
    }
    if signals.performance_gap == PerformanceGap::Behind && signals.motivation == Level::High {
        return StudentArchetype::LateStarter;
    }
    StudentArchetype::UnderdogHighCeiling
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_low_confidence() {
        assert_eq!(
            infer("I'm not good at math and everyone else is better"),
            Some(StudentArchetype::LowConfidenceBuilder)
        );
    }

    #[test]
    fn test_infer_priority_order() {
        // matches both low-confidence ("i feel behind") and late-starter
        // ("fell behind" is absent, but "need to catch up" is present);
        // low-confidence is scanned first
        assert_eq!(
            infer("i feel behind and need to catch up"),
            Some(StudentArchetype::LowConfidenceBuilder)
        );
    }

    #[test]
    fn test_infer_none_on_no_signal() {
        assert_eq!(infer("my favorite class is history"), None);
        assert_eq!(infer(""), None);
    }

    #[test]
    fn test_weighted_scoring_picks_argmax() {
        let guess = infer_with_confidence("i already know all this, this is easy");
        assert_eq!(guess.label, StudentArchetype::OverconfidentSpiky);
        assert_eq!(guess.confidence, 0.5);
    }

    #[test]
    fn test_weighted_confidence_capped_at_one() {
        let guess = infer_with_confidence(
            "first generation, first in my family, no one thinks i can, prove them wrong",
        );
        assert_eq!(guess.label, StudentArchetype::UnderdogHighCeiling);
        assert_eq!(guess.confidence, 1.0);
    }

    #[test]
    fn test_weighted_unknown_on_empty() {
        let guess = infer_with_confidence("");
        assert_eq!(guess.label, StudentArchetype::Unknown);
        assert_eq!(guess.confidence, 0.0);
    }

    #[test]
    fn test_signals_listing() {
        let found = signals("panic about the perfect score");
        assert!(found
            .iter()
            .any(|s| s.archetype == StudentArchetype::HighAchieverAnxious
                && s.pattern == "panic"));
        assert_eq!(signals("nothing here").len(), 0);
    }

    #[test]
    fn test_detect_from_signals() {
        let overconfident = BehavioralSignals {
            confidence_level: 7,
            anxiety: Level::Low,
            resistance: 8,
            motivation: Level::Medium,
            performance_gap: PerformanceGap::Ahead,
        };
        assert_eq!(
            detect_from_signals(&overconfident),
            StudentArchetype::OverconfidentSpiky
        );

        let late = BehavioralSignals {
            confidence_level: 0,
            anxiety: Level::Low,
            resistance: 0,
            motivation: Level::High,
            performance_gap: PerformanceGap::Behind,
        };
        assert_eq!(detect_from_signals(&late), StudentArchetype::LateStarter);
    }
}
