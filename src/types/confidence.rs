//! Confidence classification buckets

use serde::{Deserialize, Serialize};

/// Categorical self-efficacy level, classified from the cumulative score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceLevel::VeryLow => "very-low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very-high",
        };
        write!(f, "{}", name)
    }
}

/// Direction of the recent confidence deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTrajectory {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for ConfidenceTrajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceTrajectory::Rising => "rising",
            ConfidenceTrajectory::Falling => "falling",
            ConfidenceTrajectory::Stable => "stable",
        };
        write!(f, "{}", name)
    }
}
