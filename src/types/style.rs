//! Categorical style directive - the EQ curve's output

use serde::{Deserialize, Serialize};

/// Three-step level used by every categorical style dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// One step up (idempotent at High)
    pub fn elevate(self) -> Self {
        match self {
            Level::Low => Level::Medium,
            Level::Medium | Level::High => Level::High,
        }
    }

    /// One step down (idempotent at Low)
    pub fn reduce(self) -> Self {
        match self {
            Level::High => Level::Medium,
            Level::Medium | Level::Low => Level::Low,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Delivery pace for the categorical directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Normal,
    Fast,
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Pace::Slow => "slow",
            Pace::Normal => "normal",
            Pace::Fast => "fast",
        };
        write!(f, "{}", name)
    }
}

/// Six-dimensional categorical style directive.
///
/// Consumed as a textual style overlay injected into the reply prompt.
/// Every field is an enum, so the post-curve clamp invariant (each value is
/// one of the enumerated levels) holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDirective {
    pub warmth: Level,
    pub empathy: Level,
    pub firmness: Level,
    pub cheer: Level,
    pub intensity: Level,
    pub pace: Pace,
}

impl Default for StyleDirective {
    fn default() -> Self {
        Self {
            warmth: Level::Medium,
            empathy: Level::Medium,
            firmness: Level::Medium,
            cheer: Level::Medium,
            intensity: Level::Medium,
            pace: Pace::Normal,
        }
    }
}

impl StyleDirective {
    /// Short one-line summary for terminal output
    pub fn summary(&self) -> String {
        format!(
            "warmth={} empathy={} firmness={} cheer={} intensity={} pace={}",
            self.warmth, self.empathy, self.firmness, self.cheer, self.intensity, self.pace
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
