//! Student archetypes - coaching intervention profiles, not personality types

use serde::{Deserialize, Serialize};

use crate::types::style::Level;

/// The five inferred student profiles, plus the no-signal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentArchetype {
    /// Low confidence, needs validation and scaffolding
    LowConfidenceBuilder,
    /// High performing but paralyzed by perfectionism
    HighAchieverAnxious,
    /// Overestimates ability, needs reality checks
    OverconfidentSpiky,
    /// Behind but motivated, needs urgency + encouragement
    LateStarter,
    /// Underestimated potential, needs belief + push
    UnderdogHighCeiling,
    Unknown,
}

/// Default EQ parameters an archetype responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeNeeds {
    pub warmth: Level,
    pub empathy: Level,
    pub firmness: Level,
    pub cheer: Level,
}

impl StudentArchetype {
    pub fn as_str(self) -> &'static str {
        match self {
            StudentArchetype::LowConfidenceBuilder => "low-confidence-builder",
            StudentArchetype::HighAchieverAnxious => "high-achiever-anxious",
            StudentArchetype::OverconfidentSpiky => "overconfident-spiky",
            StudentArchetype::LateStarter => "late-starter",
            StudentArchetype::UnderdogHighCeiling => "underdog-high-ceiling",
            StudentArchetype::Unknown => "unknown",
        }
    }

    /// Clinical description of the profile
    pub fn description(self) -> &'static str {
        match self {
            StudentArchetype::LowConfidenceBuilder => {
                "Student lacks confidence despite having real ability. Needs high warmth, high empathy, low firmness. Focus on small wins and scaffolded growth."
            }
            StudentArchetype::HighAchieverAnxious => {
                "High performer paralyzed by perfectionism and anxiety. Needs empathy + grounding. Help them see 'good enough' vs 'perfect'."
            }
            StudentArchetype::OverconfidentSpiky => {
                "Overestimates abilities, resistant to feedback. Needs high firmness, low empathy initially. Reality checks with care."
            }
            StudentArchetype::LateStarter => {
                "Behind peers but motivated to catch up. Needs urgency + encouragement. Balance honesty about gaps with belief in capacity."
            }
            StudentArchetype::UnderdogHighCeiling => {
                "Underestimated potential (often FGLI, URM, non-traditional). Needs belief + push. Show them what's possible."
            }
            StudentArchetype::Unknown => "No clear profile signal yet.",
        }
    }

    /// Default EQ parameters for the archetype (Unknown gets all-medium)
    pub fn eq_needs(self) -> ArchetypeNeeds {
        use Level::{High, Low, Medium};
        match self {
            StudentArchetype::LowConfidenceBuilder => ArchetypeNeeds {
                warmth: High,
                empathy: High,
                firmness: Low,
                cheer: High,
            },
            StudentArchetype::HighAchieverAnxious => ArchetypeNeeds {
                warmth: High,
                empathy: High,
                firmness: Medium,
                cheer: Medium,
            },
            StudentArchetype::OverconfidentSpiky => ArchetypeNeeds {
                warmth: Medium,
                empathy: Low,
                firmness: High,
                cheer: Low,
            },
            StudentArchetype::LateStarter => ArchetypeNeeds {
                warmth: High,
                empathy: Medium,
                firmness: Medium,
                cheer: High,
            },
            StudentArchetype::UnderdogHighCeiling => ArchetypeNeeds {
                warmth: High,
                empathy: Medium,
                firmness: High,
                cheer: High,
            },
            StudentArchetype::Unknown => ArchetypeNeeds {
                warmth: Medium,
                empathy: Medium,
                firmness: Medium,
                cheer: Medium,
            },
        }
    }

    /// Coaching tips for working with the archetype
    pub fn coaching_tips(self) -> &'static [&'static str] {
        match self {
            StudentArchetype::LowConfidenceBuilder => &[
                "Lead with validation before any feedback",
                "Point out micro-wins and small progress",
                "Use scaffolding: break tasks into tiny steps",
                "Avoid overwhelming with too many improvements",
                "Celebrate effort, not just outcomes",
            ],
            StudentArchetype::HighAchieverAnxious => &[
                "Normalize imperfection and 'good enough'",
                "Reframe anxiety as sign of caring (not weakness)",
                "Give permission to deprioritize low-impact tasks",
                "Challenge catastrophic thinking gently",
                "Model self-compassion in your language",
            ],
            StudentArchetype::OverconfidentSpiky => &[
                "Start with respect for their confidence",
                "Present reality checks as data, not judgment",
                "Ask Socratic questions vs telling",
                "Let natural consequences do the teaching",
                "Don't over-validate; they don't need it",
            ],
            StudentArchetype::LateStarter => &[
                "Be honest about gaps without shame",
                "Show belief in their capacity to catch up",
                "Create urgency without panic",
                "Focus on highest-leverage actions only",
                "Celebrate speed of progress, not just level",
            ],
            StudentArchetype::UnderdogHighCeiling => &[
                "Paint vision of what's possible for them",
                "Call out underestimation patterns directly",
                "Push harder than they expect",
                "Celebrate identity ('you're the type who...')",
                "Don't over-explain; treat them as capable",
            ],
            StudentArchetype::Unknown => &[],
        }
    }

    /// How different two archetypes are (0-1), measured over the needs table
    pub fn distance(self, other: StudentArchetype) -> f64 {
        if self == other {
            return 0.0;
        }
        let a = self.eq_needs();
        let b = other.eq_needs();
        let differences = [
            a.warmth != b.warmth,
            a.empathy != b.empathy,
            a.firmness != b.firmness,
            a.cheer != b.cheer,
        ]
        .iter()
        .filter(|d| **d)
        .count();
        differences as f64 / 4.0
    }
}

impl std::fmt::Display for StudentArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inferred profile-type with a confidence score.
///
/// Confidence is only meaningful when the label is not Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeGuess {
    pub label: StudentArchetype,
    /// 0-1
    pub confidence: f64,
}

/// The tone-modulation archetype taxonomy.
///
/// A different cut of student types than the inferred archetypes: these name
/// the coaching stance rather than the intervention profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneArchetype {
    HighAchiever,
    AnxiousPerfectionist,
    UnfocusedExplorer,
    ReluctantPragmatist,
    OverscheduledOverachiever,
    QuietDeepThinker,
    Unknown,
}

impl From<StudentArchetype> for ToneArchetype {
    fn from(archetype: StudentArchetype) -> Self {
        match archetype {
            StudentArchetype::HighAchieverAnxious => ToneArchetype::HighAchiever,
            StudentArchetype::LowConfidenceBuilder => ToneArchetype::AnxiousPerfectionist,
            StudentArchetype::OverconfidentSpiky => ToneArchetype::ReluctantPragmatist,
            StudentArchetype::LateStarter => ToneArchetype::UnfocusedExplorer,
            StudentArchetype::UnderdogHighCeiling => ToneArchetype::QuietDeepThinker,
            StudentArchetype::Unknown => ToneArchetype::Unknown,
        }
    }
}

/// Minimal archetype representation for tone modulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub kind: ToneArchetype,
    /// 0-1
    pub confidence: f64,
}

impl ArchetypeProfile {
    pub fn unknown() -> Self {
        Self {
            kind: ToneArchetype::Unknown,
            confidence: 0.0,
        }
    }
}

impl From<StudentArchetype> for ArchetypeProfile {
    fn from(archetype: StudentArchetype) -> Self {
        Self {
            kind: archetype.into(),
            confidence: 0.5,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same() {
        assert_eq!(
            StudentArchetype::LateStarter.distance(StudentArchetype::LateStarter),
            0.0
        );
    }

    #[test]
    fn test_distance_counts_differing_needs() {
        // low-confidence (H,H,L,H) vs overconfident (M,L,H,L): all four differ
        let d = StudentArchetype::LowConfidenceBuilder.distance(StudentArchetype::OverconfidentSpiky);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn test_tone_archetype_mapping() {
        assert_eq!(
            ToneArchetype::from(StudentArchetype::HighAchieverAnxious),
            ToneArchetype::HighAchiever
        );
        assert_eq!(
            ToneArchetype::from(StudentArchetype::Unknown),
            ToneArchetype::Unknown
        );
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&StudentArchetype::LowConfidenceBuilder).unwrap();
        assert_eq!(json, "\"low-confidence-builder\"");
    }
}
