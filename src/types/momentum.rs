//! Momentum state - rolling conversational energy

use serde::{Deserialize, Serialize};

use crate::ENERGY_HISTORY_LIMIT;

/// Direction of the last momentum change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Categorical momentum bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentumLevel {
    /// Dropout risk
    Critical,
    /// Needs a boost
    Low,
    /// Neutral
    Medium,
    /// Good energy
    High,
    /// Peak engagement
    Excellent,
}

/// Shape of the recent score history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trajectory {
    Rising,
    Falling,
    Volatile,
    Stable,
}

/// Rolling engagement energy for one session.
///
/// Score starts neutral (50) and is clamped to [0, 100] after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumState {
    /// 0-100 (50 = neutral, >70 = high energy, <30 = dropout risk)
    pub score: i32,
    pub trend: Trend,
    /// Count of enthusiasm surges
    pub spikes: u32,
    /// Count of energy drops
    pub dips: u32,
    pub disengaged: bool,
    pub focus_lost: bool,
    /// Rolling history of momentum scores (bounded)
    pub history: Vec<i32>,
}

impl Default for MomentumState {
    fn default() -> Self {
        Self {
            score: 50,
            trend: Trend::Flat,
            spikes: 0,
            dips: 0,
            disengaged: false,
            focus_lost: false,
            history: vec![50],
        }
    }
}

impl MomentumState {
    /// Categorical momentum bucket
    pub fn level(&self) -> MomentumLevel {
        match self.score {
            s if s < 20 => MomentumLevel::Critical,
            s if s < 40 => MomentumLevel::Low,
            s if s < 60 => MomentumLevel::Medium,
            s if s < 80 => MomentumLevel::High,
            _ => MomentumLevel::Excellent,
        }
    }

    /// Trajectory over the trailing five history samples.
    ///
    /// Needs at least three samples; variance above 50 reads as volatile
    /// before any rising/falling verdict.
    pub fn trajectory(&self) -> Trajectory {
        if self.history.len() < 3 {
            return Trajectory::Stable;
        }

        let start = self.history.len().saturating_sub(5);
        let recent = &self.history[start..];
        let deltas: Vec<f64> = recent
            .windows(2)
            .map(|w| f64::from(w[1] - w[0]))
            .collect();

        let avg = deltas.iter().sum::<f64>() / deltas.len() as f64;
        let variance =
            deltas.iter().map(|d| (d - avg).powi(2)).sum::<f64>() / deltas.len() as f64;

        if variance > 50.0 {
            Trajectory::Volatile
        } else if avg > 3.0 {
            Trajectory::Rising
        } else if avg < -3.0 {
            Trajectory::Falling
        } else {
            Trajectory::Stable
        }
    }

    /// Append a score to the bounded history
    pub fn push_history(&mut self, score: i32) {
        self.history.push(score);
        if self.history.len() > ENERGY_HISTORY_LIMIT {
            self.history.remove(0);
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for MomentumLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MomentumLevel::Critical => "critical",
            MomentumLevel::Low => "low",
            MomentumLevel::Medium => "medium",
            MomentumLevel::High => "high",
            MomentumLevel::Excellent => "excellent",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Trajectory::Rising => "rising",
            Trajectory::Falling => "falling",
            Trajectory::Volatile => "volatile",
            Trajectory::Stable => "stable",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
