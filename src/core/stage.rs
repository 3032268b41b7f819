//! Session-stage inference: forward-only progression from message signals
//!
//! Stage transitions:
//! - opening advances unconditionally on the next message
//! - every later stage advances only on its phrase patterns
//! - a forced advancement triggers once a stage's message cap is exceeded

use crate::types::SessionStage;

const RAPPORT_TO_PROBING: &[&str] = &[
    "grades",
    "gpa",
    "profile",
    "activities",
    "extracurriculars",
    "sat",
    "act",
    "my school",
    "what i've done",
];

const PROBING_TO_ANALYSIS: &[&str] = &[
    "so what does this mean",
    "so am i on track",
    "how do i look",
    "what are my chances",
    "be honest",
    "where do i stand",
    "assess my profile",
];

const ANALYSIS_TO_STRATEGY: &[&str] = &[
    "what should i do",
    "what do you recommend",
    "plan",
    "next steps",
    "how do i improve",
    "what can i change",
    "strategy",
];

const STRATEGY_TO_MOTIVATION: &[&str] = &[
    "okay",
    "got it",
    "makes sense",
    "i understand",
    "thank",
    "appreciate",
];

const MOTIVATION_TO_CLOSING: &[&str] = &[
    "thank you",
    "this helps",
    "i feel better",
    "i'm ready",
    "let me get started",
    "i'll work on",
];

/// Per-stage message caps before forced advancement
const STAGE_MESSAGE_CAPS: [u32; 7] = [2, 5, 10, 5, 5, 3, 3];

/// Detect whether the session should advance, returning the (possibly
/// unchanged) stage. Never returns an earlier stage.
pub fn detect(message: &str, current: SessionStage) -> SessionStage {
    let m = message.to_lowercase();

    let advance = match current {
        // opening is just the first exchange
        SessionStage::Opening => true,
        SessionStage::RapportBuilding => contains_any(&m, RAPPORT_TO_PROBING),
        SessionStage::DiagnosticProbing => contains_any(&m, PROBING_TO_ANALYSIS),
        SessionStage::Analysis => contains_any(&m, ANALYSIS_TO_STRATEGY),
        SessionStage::StrategyReveal => contains_any(&m, STRATEGY_TO_MOTIVATION),
        SessionStage::Motivation => contains_any(&m, MOTIVATION_TO_CLOSING),
        SessionStage::Closing => false,
    };

    if advance {
        current.next().unwrap_or(current)
    } else {
        current
    }
}

/// One matched stage-advancement signal, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSignal {
    pub pattern: &'static str,
    pub target: SessionStage,
}

/// All advancement signals present in the message for the current stage
pub fn advancement_signals(message: &str, current: SessionStage) -> Vec<StageSignal> {
    let m = message.to_lowercase();

    let (patterns, target): (&'static [&'static str], SessionStage) = match current {
        SessionStage::Opening => {
            return vec![StageSignal {
                pattern: "auto-advance",
                target: SessionStage::RapportBuilding,
            }]
        }
        SessionStage::RapportBuilding => (RAPPORT_TO_PROBING, SessionStage::DiagnosticProbing),
        SessionStage::DiagnosticProbing => (PROBING_TO_ANALYSIS, SessionStage::Analysis),
        SessionStage::Analysis => (ANALYSIS_TO_STRATEGY, SessionStage::StrategyReveal),
        SessionStage::StrategyReveal => (STRATEGY_TO_MOTIVATION, SessionStage::Motivation),
        SessionStage::Motivation => (MOTIVATION_TO_CLOSING, SessionStage::Closing),
        SessionStage::Closing => return Vec::new(),
    };

    patterns
        .iter()
        .filter(|p| m.contains(*p))
        .map(|p| StageSignal {
            pattern: *p,
            target,
        })
        .collect()
}

/// Should the stage be forcibly advanced after this many messages in it?
pub fn should_force_advancement(current: SessionStage, message_count: u32) -> bool {
    message_count >= STAGE_MESSAGE_CAPS[current.index()]
}

/// Time-based estimate that can only raise, never lower, the stage
pub fn estimate_from_elapsed(elapsed_minutes: u32, current: SessionStage) -> SessionStage {
    let estimated = SessionStage::estimate_from_time(elapsed_minutes);
    if estimated.index() > current.index() {
        estimated
    } else {
        current
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

    #[test]
    fn test_opening_always_advances() {
        assert_eq!(
            detect("hello!", SessionStage::Opening),
            SessionStage::RapportBuilding
        );
        assert_eq!(
            detect("", SessionStage::Opening),
            SessionStage::RapportBuilding
        );
    }

    #[test]
    fn test_rapport_advances_on_profile_talk() {
        assert_eq!(
            detect("my gpa is 3.8 this semester", SessionStage::RapportBuilding),
            SessionStage::DiagnosticProbing
        );
        assert_eq!(
            detect("i like my teachers", SessionStage::RapportBuilding),
            SessionStage::RapportBuilding
        );
    }

    #[test]
    fn test_probing_advances_on_assessment_request() {
        assert_eq!(
            detect("so where do i stand?", SessionStage::DiagnosticProbing),
            SessionStage::Analysis
        );
    }

    #[test]
    fn test_analysis_advances_on_what_should_i_do() {
        assert_eq!(
            detect("ok so what should i do about it", SessionStage::Analysis),
            SessionStage::StrategyReveal
        );
    }

    #[test]
    fn test_closing_is_terminal() {
        assert_eq!(
            detect("thank you so much!", SessionStage::Closing),
            SessionStage::Closing
        );
    }

    #[test]
    fn test_never_regresses() {
        // a greeting in a late stage holds, never rewinds
        assert_eq!(
            detect("hi again", SessionStage::Motivation),
            SessionStage::Motivation
        );
    }

    #[test]
    fn test_forced_advancement_caps() {
        assert!(should_force_advancement(SessionStage::Opening, 2));
        assert!(!should_force_advancement(SessionStage::DiagnosticProbing, 9));
        assert!(should_force_advancement(SessionStage::DiagnosticProbing, 10));
    }

    #[test]
    fn test_estimate_only_raises() {
        assert_eq!(
            estimate_from_elapsed(40, SessionStage::Opening),
            SessionStage::StrategyReveal
        );
        assert_eq!(
            estimate_from_elapsed(0, SessionStage::Motivation),
            SessionStage::Motivation
        );
    }

    #[test]
    fn test_advancement_signals_listing() {
        let found = advancement_signals("my grades and profile", SessionStage::RapportBuilding);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.target == SessionStage::DiagnosticProbing));
    }
}
