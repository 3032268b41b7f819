//! Confidence signal model: weighted keyword deltas per message
//!
//! Tracked as a cumulative score so the EQ curve can push harder on
//! confident students and support doubtful ones.

use crate::types::{ConfidenceLevel, ConfidenceTrajectory};
use crate::CONFIDENCE_DELTA_CAP;

/// (pattern-pair, delta) tables; either alternative counts once
const STRONG_POSITIVE: &[(&str, &str, i32)] = &[
    ("i got this", "i've got this", 4),
    ("easy", "no problem", 3),
    ("i'm confident", "i feel good about", 4),
    ("already done", "finished already", 3),
    ("i know i can", "i can definitely", 3),
];

const MODERATE_POSITIVE: &[(&str, &str, i32)] = &[
    ("i think i can", "maybe i can", 1),
    ("feeling good", "feel better", 2),
    ("ready", "prepared", 2),
    ("excited", "looking forward", 2),
    ("i understand", "makes sense", 1),
];

const STRONG_NEGATIVE: &[(&str, &str, i32)] = &[
    ("i'm lost", "totally lost", -5),
    ("overwhelmed", "too much", -4),
    ("i don't know", "idk", -3),
    ("can't do this", "can't handle", -4),
    ("give up", "giving up", -5),
    ("failing", "i'm failing", -4),
    ("not smart enough", "too dumb", -5),
];

const MODERATE_NEGATIVE: &[(&str, &str, i32)] = &[
    ("not sure", "unsure", -2),
    ("worried", "nervous", -2),
    ("confused", "don't understand", -2),
    ("struggling", "having trouble", -2),
    ("hard", "difficult", -1),
    ("doubt", "doubting", -2),
];

const COMPARISON: &[(&str, &str, i32)] = &[
    ("everyone else is better", "behind everyone", -3),
    ("i'm ahead", "ahead of my peers", 3),
    ("falling behind", "fell behind", -2),
    ("catching up", "making progress", 2),
];

const CAPABILITY: &[(&str, &str, i32)] = &[
    ("i can't", "unable to", -2),
    ("i can", "i'm able to", 1),
];

/// Per-message confidence delta, clamped to [-10, 10]
pub fn delta(message: &str) -> i32 {
    let m = message.to_lowercase();
    let mut delta = 0;

    for table in [
        STRONG_POSITIVE,
        MODERATE_POSITIVE,
        STRONG_NEGATIVE,
        MODERATE_NEGATIVE,
        COMPARISON,
        CAPABILITY,
    ] {
        for &(a, b, d) in table {
            if m.contains(a) || m.contains(b) {
                delta += d;
            }
        }
    }

    delta.clamp(-CONFIDENCE_DELTA_CAP, CONFIDENCE_DELTA_CAP)
}

/// One matched confidence signal, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceHit {
    pub pattern: &'static str,
    pub delta: i32,
}

/// Every confidence signal present in the message
pub fn signals(message: &str) -> Vec<ConfidenceHit> {
    let m = message.to_lowercase();
    let mut hits = Vec::new();

    for table in [
        STRONG_POSITIVE,
        MODERATE_POSITIVE,
        STRONG_NEGATIVE,
        MODERATE_NEGATIVE,
        COMPARISON,
        CAPABILITY,
    ] {
        for &(a, b, d) in table {
            if m.contains(a) {
                hits.push(ConfidenceHit {
                    pattern: a,
                    delta: d,
                });
            } else if m.contains(b) {
                hits.push(ConfidenceHit {
                    pattern: b,
                    delta: d,
                });
            }
        }
    }

    hits
}

/// Classify the cumulative score into the fixed buckets
pub fn classify(cumulative: i32) -> ConfidenceLevel {
    if cumulative <= -8 {
        ConfidenceLevel::VeryLow
    } else if cumulative <= -3 {
        ConfidenceLevel::Low
    } else if cumulative >= 8 {
        ConfidenceLevel::VeryHigh
    } else if cumulative >= 3 {
        ConfidenceLevel::High
    } else {
        ConfidenceLevel::Medium
    }
}

/// Trajectory over the last five deltas; needs at least three
pub fn trajectory(recent_deltas: &[i32]) -> ConfidenceTrajectory {
    if recent_deltas.len() < 3 {
        return ConfidenceTrajectory::Stable;
    }
    let start = recent_deltas.len().saturating_sub(5);
    let recent = &recent_deltas[start..];
    let avg = recent.iter().sum::<i32>() as f64 / recent.len() as f64;

    if avg > 1.0 {
        ConfidenceTrajectory::Rising
    } else if avg < -1.0 {
        ConfidenceTrajectory::Falling
    } else {
        ConfidenceTrajectory::Stable
    }
}

/// Human-readable confidence summary
pub fn summary(cumulative: i32) -> &'static str {
    match classify(cumulative) {
        ConfidenceLevel::VeryLow => "Student shows very low confidence and high self-doubt",
        ConfidenceLevel::Low => "Student shows low confidence and needs encouragement",
        ConfidenceLevel::Medium => "Student shows balanced confidence",
        ConfidenceLevel::High => "Student shows high confidence and self-belief",
        ConfidenceLevel::VeryHigh => "Student shows very high confidence (may be overconfident)",
    }
}

// =============================================================================
// TESTS
// =============================================================================
