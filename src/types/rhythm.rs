//! Sentence-rhythm model types

use serde::{Deserialize, Serialize};

use crate::types::archetype::ToneArchetype;
use crate::types::tone::Pacing;

/// Emotional state of the student, derived from the EQ runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Stable,
    Stressed,
    Overwhelmed,
}

/// The four sentence-arc patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RhythmPattern {
    /// acknowledge -> aim
    ValidationDirection,
    /// acknowledge -> aim -> act
    ValidationDirectionEncouragement,
    /// emotion -> structure
    GroundingClarity,
    /// feeling -> doing
    EmpathyAction,
}

/// Inputs to clause generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseOptions {
    pub emotional_state: EmotionalState,
    pub pacing: Pacing,
    pub archetype: ToneArchetype,
}

/// A fixed two- or three-clause rewrite of one thought.
///
/// At least one of validation/direction is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceArc {
    /// Emotional resonance clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    /// Action/clarity clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Optional closing support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encouragement: Option<String>,
    pub pattern: RhythmPattern,
}

impl SentenceArc {
    /// Join the populated clauses into text
    pub fn to_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(v) = &self.validation {
            parts.push(v);
        }
        if let Some(d) = &self.direction {
            parts.push(d);
        }
        if let Some(e) = &self.encouragement {
            parts.push(e);
        }
        parts.join(" ")
    }
}

/// Coarse per-sentence sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One sentence-level segment classified before rhythm rewriting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtUnit {
    pub content: String,
    pub sentiment: Sentiment,
    /// Contains emotional/struggle language
    pub requires_validation: bool,
    /// Contains actionable language
    pub requires_direction: bool,
}

/// Inputs to the rhythm rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    pub emotional_state: EmotionalState,
    pub pacing: Pacing,
    pub archetype: ToneArchetype,
    /// Cap on output sentences
    pub max_sentences: Option<usize>,
}

// =============================================================================
// TESTS
// =============================================================================
