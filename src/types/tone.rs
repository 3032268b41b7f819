//! Continuous tone directive - the tone composer's output

use serde::{Deserialize, Serialize};

use crate::types::style::Level;
use crate::TONE_MAX;

/// Delivery pacing for the tone path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Slow,
    Medium,
    Fast,
}

impl std::fmt::Display for Pacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Pacing::Slow => "slow",
            Pacing::Medium => "medium",
            Pacing::Fast => "fast",
        };
        write!(f, "{}", name)
    }
}

/// Continuous-valued tone directive guiding response styling.
///
/// All numeric dimensions are 0-10 after the final clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneDirective {
    /// 0 = cold, 10 = very warm
    pub warmth: f64,
    /// 0 = indirect, 10 = very direct
    pub directness: f64,
    /// 0 = passive, 10 = very assertive
    pub assertiveness: f64,
    /// 0 = vague, 10 = very specific
    pub specificity: f64,
    pub pacing: Pacing,
    /// Linguistic fingerprints accumulated across the layers
    pub style_markers: Vec<String>,
    /// Explanation of the tone choices, extended by each layer
    pub rationale: String,
}

impl ToneDirective {
    /// Clamp every numeric dimension into [0, 10]
    pub fn clamp_ranges(&mut self) {
        self.warmth = self.warmth.clamp(0.0, TONE_MAX);
        self.directness = self.directness.clamp(0.0, TONE_MAX);
        self.assertiveness = self.assertiveness.clamp(0.0, TONE_MAX);
        self.specificity = self.specificity.clamp(0.0, TONE_MAX);
    }

    /// Append a style marker
    pub fn mark(&mut self, marker: &str) {
        self.style_markers.push(marker.to_string());
    }

    /// Extend the rationale trail
    pub fn explain(&mut self, note: &str) {
        self.rationale.push_str(" | ");
        self.rationale.push_str(note);
    }

    /// Render as prompt hints with verbal labels per dimension
    pub fn to_hints(&self) -> String {
        let mut hints = vec![
            "-> TONE DIRECTIVE:".to_string(),
            format!("   Warmth: {}/10 ({})", self.warmth, warmth_label(self.warmth)),
            format!(
                "   Directness: {}/10 ({})",
                self.directness,
                directness_label(self.directness)
            ),
            format!(
                "   Assertiveness: {}/10 ({})",
                self.assertiveness,
                assertiveness_label(self.assertiveness)
            ),
            format!("   Pacing: {}", self.pacing),
            format!(
                "   Specificity: {}/10 ({})",
                self.specificity,
                specificity_label(self.specificity)
            ),
        ];
        if !self.style_markers.is_empty() {
            hints.push(format!("   Style Markers: {}", self.style_markers.join(", ")));
        }
        hints.push(format!("   Rationale: {}", self.rationale));
        hints.join("\n")
    }

    /// Compact one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Warmth: {} | Direct: {} | Assert: {} | Pace: {} | Specific: {}",
            self.warmth, self.directness, self.assertiveness, self.pacing, self.specificity
        )
    }
}

fn warmth_label(warmth: f64) -> &'static str {
    if warmth >= 8.0 {
        "very warm"
    } else if warmth >= 6.0 {
        "warm"
    } else if warmth >= 4.0 {
        "neutral"
    } else if warmth >= 2.0 {
        "cool"
    } else {
        "cold"
    }
}

fn directness_label(directness: f64) -> &'static str {
    if directness >= 8.0 {
        "very direct"
    } else if directness >= 6.0 {
        "direct"
    } else if directness >= 4.0 {
        "moderate"
    } else if directness >= 2.0 {
        "indirect"
    } else {
        "very indirect"
    }
}

fn assertiveness_label(assertiveness: f64) -> &'static str {
    if assertiveness >= 8.0 {
        "very assertive"
    } else if assertiveness >= 6.0 {
        "assertive"
    } else if assertiveness >= 4.0 {
        "moderate"
    } else if assertiveness >= 2.0 {
        "gentle"
    } else {
        "passive"
    }
}

fn specificity_label(specificity: f64) -> &'static str {
    if specificity >= 8.0 {
        "very specific"
    } else if specificity >= 6.0 {
        "specific"
    } else if specificity >= 4.0 {
        "moderate"
    } else if specificity >= 2.0 {
        "general"
    } else {
        "vague"
    }
}

/// Simplified emotional signals driving the tone composer's EQ layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqStateForTone {
    /// -1 (negative) to +1 (positive)
    pub valence: f64,
    /// Energy level
    pub activation: Level,
    /// Mental overwhelm
    pub cognitive_load: Level,
    /// Student showing emotional vulnerability
    pub vulnerability: bool,
    /// Student feels safe to share
    pub safety_signals: bool,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_caps_at_ten() {
        let mut tone = ToneDirective {
            warmth: 14.0,
            directness: -2.0,
            assertiveness: 5.0,
            specificity: 11.0,
            pacing: Pacing::Medium,
            style_markers: vec![],
            rationale: "base".to_string(),
        };
        tone.clamp_ranges();
        assert_eq!(tone.warmth, 10.0);
        assert_eq!(tone.directness, 0.0);
        assert_eq!(tone.specificity, 10.0);
    }

    #[test]
    fn test_hints_carry_labels() {
        let tone = ToneDirective {
            warmth: 9.0,
            directness: 5.0,
            assertiveness: 1.0,
            specificity: 6.0,
            pacing: Pacing::Slow,
            style_markers: vec!["grounding phrases".to_string()],
            rationale: "base".to_string(),
        };
        let hints = tone.to_hints();
        assert!(hints.contains("very warm"));
        assert!(hints.contains("passive"));
        assert!(hints.contains("grounding phrases"));
    }
}
