//! Momentum engine: detects energy spikes, dips, disengagement, and focus loss
//!
//! The persona's intuition about when a student is fading (dropout risk),
//! overhyping, zoning out, or disengaging. All deterministic.

use tracing::debug;

use crate::types::{MomentumLevel, MomentumState, Trajectory, Trend};
use crate::{
    BRIEF_REPLY_DELTA, BRIEF_REPLY_MAX, DIP_DELTA, DISENGAGED_DELTA, FOCUS_LOSS_DELTA,
    LONG_REPLY_DELTA, LONG_REPLY_MIN, QUESTION_DELTA, SHORT_REPLY_DELTA, SHORT_REPLY_MAX,
    SPIKE_DELTA,
};

/// Phrases that indicate an enthusiasm surge
const SPIKE_PATTERNS: &[&str] = &[
    "omg",
    "wow",
    "that's cool",
    "that's awesome",
    "amazing",
    "no way",
    "i love",
    "i can do this",
    "this is great",
    "really helpful",
    "makes sense now",
    "i get it",
    "excited",
    "thank you so much",
    "perfect",
    "exactly what i needed",
];

/// Phrases that indicate an energy drop or overwhelm
const DIP_PATTERNS: &[&str] = &[
    "i'm tired",
    "overwhelmed",
    "stressed",
    "this is hard",
    "i can't",
    "too much",
    "giving up",
    "don't want to",
    "this sucks",
    "hate this",
    "frustrated",
    "confused",
    "lost",
    "stuck",
];

/// Short, non-committal replies that signal disengagement (matched whole)
const DISENGAGEMENT_PATTERNS: &[&str] = &[
    "ok", "k", "sure", "fine", "idk", "yeah", "yep", "nope", "nah", "mhm", "uh huh",
];

/// Phrases that indicate the student is losing focus or going vague
const FOCUS_LOSS_PATTERNS: &[&str] = &[
    "idk",
    "i don't know",
    "whatever",
    "uh",
    "um",
    "maybe",
    "i guess",
    "dunno",
    "not sure",
    "kind of",
    "sort of",
];

/// Tracks conversational energy for one session
#[derive(Debug, Default)]
pub struct MomentumEngine {
    state: MomentumState,
}

impl MomentumEngine {
    pub fn new() -> Self {
        Self {
            state: MomentumState::default(),
        }
    }

    /// Process a student message and return the updated state.
    ///
    /// Pattern deltas are summed, applied to the previous score, and the
    /// result is clamped to [0, 100]. Trend follows the sign of the change.
    pub fn update(&mut self, message: &str) -> MomentumState {
        let m = message.trim().to_lowercase();
        let len = m.chars().count();
        let previous = self.state.score;

        let mut delta = 0;

        if SPIKE_PATTERNS.iter().any(|p| m.contains(p)) {
            delta += SPIKE_DELTA;
            self.state.spikes += 1;
            debug!("spike detected");
        }

        if DIP_PATTERNS.iter().any(|p| m.contains(p)) {
            delta += DIP_DELTA;
            self.state.dips += 1;
            debug!("dip detected");
        }

        let disengagement_phrase = DISENGAGEMENT_PATTERNS.iter().any(|p| m == *p);
        if len <= SHORT_REPLY_MAX {
            delta += SHORT_REPLY_DELTA;
            self.state.disengaged = true;
        } else if len <= BRIEF_REPLY_MAX {
            delta += BRIEF_REPLY_DELTA;
            self.state.disengaged = disengagement_phrase;
        } else {
            self.state.disengaged = disengagement_phrase;
        }
        if disengagement_phrase {
            delta += DISENGAGED_DELTA;
        }

        self.state.focus_lost = FOCUS_LOSS_PATTERNS.iter().any(|p| m.contains(p));
        if self.state.focus_lost {
            delta += FOCUS_LOSS_DELTA;
        }

        if len > LONG_REPLY_MIN && !self.state.focus_lost {
            delta += LONG_REPLY_DELTA;
        }

        if m.contains('?') && len > 20 {
            delta += QUESTION_DELTA;
        }

        self.state.score = (previous + delta).clamp(0, 100);
        self.state.trend = match self.state.score.cmp(&previous) {
            std::cmp::Ordering::Greater => Trend::Up,
            std::cmp::Ordering::Less => Trend::Down,
            std::cmp::Ordering::Equal => Trend::Flat,
        };
        let score = self.state.score;
        self.state.push_history(score);

        debug!(
            previous,
            score = self.state.score,
            trend = %self.state.trend,
            disengaged = self.state.disengaged,
            focus_lost = self.state.focus_lost,
            "momentum updated"
        );

        self.state.clone()
    }

    pub fn state(&self) -> &MomentumState {
        &self.state
    }

    /// Categorical momentum bucket of the current score
    pub fn level(&self) -> MomentumLevel {
        self.state.level()
    }

    /// Trajectory over the recent score history
    pub fn trajectory(&self) -> Trajectory {
        self.state.trajectory()
    }

    /// Should the agent intervene to boost momentum?
    pub fn needs_intervention(&self) -> bool {
        self.state.score < 30
            || self.state.disengaged
            || (self.state.trend == Trend::Down && self.state.score < 50)
            || self.trajectory() == Trajectory::Falling
    }

    /// Suggested interventions for the current state
    pub fn intervention_suggestions(&self) -> Vec<&'static str> {
        let mut suggestions = Vec::new();

        if self.state.disengaged {
            suggestions.push("Student disengaged - ask engaging question or share insight");
        }
        if self.state.focus_lost {
            suggestions.push("Focus lost - provide structure and clear next steps");
        }
        if self.state.score < 30 {
            suggestions.push("Critical momentum - boost energy with encouragement or win");
        }
        if self.state.trend == Trend::Down && self.state.score < 50 {
            suggestions.push("Momentum declining - inject enthusiasm or pivot topic");
        }
        if self.state.dips > self.state.spikes && self.state.dips > 2 {
            suggestions.push("Multiple dips detected - check for overwhelm, simplify");
        }
        if suggestions.is_empty() && self.state.score > 70 {
            suggestions.push("High momentum - maintain energy and capitalize on engagement");
        }

        suggestions
    }

    /// Human-readable summary of the current momentum
    pub fn summary(&self) -> String {
        let blurb = match self.level() {
            MomentumLevel::Critical => "Student at dropout risk - immediate intervention needed",
            MomentumLevel::Low => "Low engagement - needs energy boost and encouragement",
            MomentumLevel::Medium => "Neutral momentum - maintain steady pacing",
            MomentumLevel::High => "Good engagement - student is responsive and engaged",
            MomentumLevel::Excellent => "Peak momentum - student highly engaged and energized",
        };
        format!("{} (trajectory: {})", blurb, self.trajectory())
    }

    /// Reset to the neutral starting state
    pub fn reset(&mut self) {
        self.state = MomentumState::default();
    }
}

/// Significant shift between the last window and the one before it (>15 points)
pub fn detect_momentum_shift(history: &[i32], window_size: usize) -> bool {
    if history.len() < window_size * 2 {
        return false;
    }
    let recent = &history[history.len() - window_size..];
    let previous = &history[history.len() - window_size * 2..history.len() - window_size];

    let recent_avg = recent.iter().sum::<i32>() as f64 / recent.len() as f64;
    let previous_avg = previous.iter().sum::<i32>() as f64 / previous.len() as f64;

    (recent_avg - previous_avg).abs() > 15.0
}

/// Volatility score (0-100) of a momentum history; an average swing of 10
/// points reads as 50
pub fn momentum_volatility(history: &[i32]) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    let deltas: Vec<f64> = history
        .windows(2)
        .map(|w| f64::from((w[1] - w[0]).abs()))
        .collect();
    let avg = deltas.iter().sum::<f64>() / deltas.len() as f64;
    (avg * 5.0).min(100.0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_neutral() {
        let engine = MomentumEngine::new();
        assert_eq!(engine.state().score, 50);
        assert_eq!(engine.state().trend, Trend::Flat);
        assert_eq!(engine.state().history.len(), 1);
    }

    #[test]
    fn test_spike_raises_score() {
        let mut engine = MomentumEngine::new();
        let state = engine.update("omg that's awesome, I love this plan!");
        assert!(state.score > 50);
        assert_eq!(state.spikes, 1);
        assert_eq!(state.trend, Trend::Up);
    }

    #[test]
    fn test_dip_lowers_score() {
        let mut engine = MomentumEngine::new();
        let state = engine.update("honestly I'm so overwhelmed by all of this work");
        assert!(state.score < 50);
        assert_eq!(state.dips, 1);
        assert_eq!(state.trend, Trend::Down);
    }

    #[test]
    fn test_very_short_reply_disengages() {
        let mut engine = MomentumEngine::new();
        let state = engine.update("k");
        assert!(state.disengaged);
        // length penalty and the disengagement phrase penalty stack
        assert_eq!(state.score, 50 + SHORT_REPLY_DELTA + DISENGAGED_DELTA);
    }

    #[test]
    fn test_very_short_non_phrase_reply() {
        let mut engine = MomentumEngine::new();
        let state = engine.update("no");
        assert!(state.disengaged);
        assert_eq!(state.score, 50 + SHORT_REPLY_DELTA);
    }

    #[test]
    fn test_disengagement_phrase_in_brief_reply() {
        let mut engine = MomentumEngine::new();
        // 6-15 chars and an exact disengagement token
        let state = engine.update("uh huh");
        assert!(state.disengaged);
    }

    #[test]
    fn test_question_boost() {
        let mut engine = MomentumEngine::new();
        let state = engine.update("what would you recommend for my summer plans?");
        assert!(state.score > 50);
    }

    #[test]
    fn test_long_reply_boost_blocked_by_focus_loss() {
        let mut engine = MomentumEngine::new();
        let long_vague = format!("{} i guess", "a".repeat(120));
        let state = engine.update(&long_vague);
        // focus loss -4 and no +5 long-reply boost
        assert_eq!(state.score, 50 + FOCUS_LOSS_DELTA);
        assert!(state.focus_lost);
    }

    #[test]
    fn test_score_clamped_to_bounds() {
        let mut engine = MomentumEngine::new();
        for _ in 0..20 {
            engine.update("omg amazing, this is great, exactly what i needed!");
        }
        assert!(engine.state().score <= 100);

        let mut engine = MomentumEngine::new();
        for _ in 0..20 {
            engine.update("k");
        }
        assert!(engine.state().score >= 0);
    }

    #[test]
    fn test_needs_intervention_on_disengagement() {
        let mut engine = MomentumEngine::new();
        engine.update("ok");
        engine.update("sure");
        engine.update("k");
        assert!(engine.needs_intervention());
        assert_eq!(engine.level(), MomentumLevel::Critical);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut engine = MomentumEngine::new();
        engine.update("omg wow");
        engine.reset();
        assert_eq!(engine.state(), &MomentumState::default());
    }

    #[test]
    fn test_detect_momentum_shift() {
        let flat = vec![50; 10];
        assert!(!detect_momentum_shift(&flat, 5));

        let mut shifted = vec![50; 5];
        shifted.extend(vec![80; 5]);
        assert!(detect_momentum_shift(&shifted, 5));
    }

    #[test]
    fn test_volatility_scales_with_swings() {
        assert_eq!(momentum_volatility(&[50]), 0.0);
        let calm = momentum_volatility(&[50, 52, 51, 53]);
        let wild = momentum_volatility(&[50, 80, 40, 90]);
        assert!(wild > calm);
        assert!(wild <= 100.0);
    }
}
