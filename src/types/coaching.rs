//! Coaching moves - the discrete per-turn intervention types

use serde::{Deserialize, Serialize};

/// The nine micro-coaching moves, one chosen per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachingMove {
    /// Affirmation / praise
    Affirm,
    /// Reframe / clarify
    Reframe,
    /// Challenge / push
    Challenge,
    /// Motivational micro-ping
    Motivate,
    /// Accountability nudge
    Accountability,
    /// Anchor to goal / vision
    Anchor,
    /// Pattern-recognition mirror
    Mirror,
    /// Stuck-state breaker
    Breaker,
    /// No special move needed
    None,
}

impl CoachingMove {
    pub fn as_str(self) -> &'static str {
        match self {
            CoachingMove::Affirm => "affirm",
            CoachingMove::Reframe => "reframe",
            CoachingMove::Challenge => "challenge",
            CoachingMove::Motivate => "motivate",
            CoachingMove::Accountability => "accountability",
            CoachingMove::Anchor => "anchor",
            CoachingMove::Mirror => "mirror",
            CoachingMove::Breaker => "breaker",
            CoachingMove::None => "none",
        }
    }
}

impl std::fmt::Display for CoachingMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How strongly to apply a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Medium,
    Strong,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Strong => "strong",
        };
        write!(f, "{}", name)
    }
}

/// The arbiter's per-turn output. Rationale is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingDirective {
    #[serde(rename = "move")]
    pub mv: CoachingMove,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Additional framing for the move
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl CoachingDirective {
    /// Render as prompt hints with per-move guidance lines
    pub fn to_hints(&self) -> String {
        let mut hints = vec![
            format!("-> COACHING MOVE: {}", self.mv.as_str().to_uppercase()),
            format!("   Rationale: {}", self.rationale),
        ];
        if let Some(i) = self.intensity {
            hints.push(format!("   Intensity: {}", i));
        }
        if let Some(c) = &self.context {
            hints.push(format!("   Context: {}", c));
        }

        let guidance: &[&str] = match self.mv {
            CoachingMove::Affirm => &[
                "   -> Validate their feeling or progress",
                "   -> Be warm and genuine, not generic",
                "   -> Connect affirmation to forward momentum",
            ],
            CoachingMove::Reframe => &[
                "   -> Simplify the complexity",
                "   -> Offer a clearer mental model",
                "   -> Break overwhelm into manageable pieces",
            ],
            CoachingMove::Challenge => &[
                "   -> Push them to think bigger",
                "   -> Ask probing questions",
                "   -> Challenge assumptions without attacking confidence",
            ],
            CoachingMove::Motivate => &[
                "   -> Inject energy and enthusiasm",
                "   -> Share a confidence spark",
                "   -> Remind them of their strengths",
            ],
            CoachingMove::Accountability => &[
                "   -> Seek concrete commitment",
                "   -> Ask for specific next steps",
                "   -> Be soft but firm - no pressure, just clarity",
            ],
            CoachingMove::Anchor => &[
                "   -> Connect current moment to future vision",
                "   -> Remind them why this matters",
                "   -> Make the long-term goal feel real and achievable",
            ],
            CoachingMove::Mirror => &[
                "   -> Reflect the pattern you're noticing",
                "   -> Do it gently, without judgment",
                "   -> Help them see what they might not see",
            ],
            CoachingMove::Breaker => &[
                "   -> Interrupt the loop",
                "   -> Shift perspective dramatically",
                "   -> Ask a totally different question",
            ],
            CoachingMove::None => &[],
        };
        hints.extend(guidance.iter().map(|g| g.to_string()));

        hints.join("\n")
    }

    /// Compact one-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Move: {}", self.mv)];
        if let Some(i) = self.intensity {
            parts.push(format!("Intensity: {}", i));
        }
        parts.push(format!("Reason: {}", self.rationale));
        parts.join(" | ")
    }
}

// =============================================================================
// TESTS
// =============================================================================
