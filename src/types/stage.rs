//! The seven stages of a coaching session

use serde::{Deserialize, Serialize};

/// Session stages in their typical order.
///
/// warm opening -> rapport -> probing -> analysis -> strategy -> motivation -> closing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStage {
    /// First minutes: warm welcome, set tone
    Opening,
    /// Get student comfortable, establish trust
    RapportBuilding,
    /// Ask questions, understand situation
    DiagnosticProbing,
    /// Think critically, identify patterns
    Analysis,
    /// Present insights and recommendations
    StrategyReveal,
    /// Rally energy, build confidence
    Motivation,
    /// Wrap up, ensure clarity, send off strong
    Closing,
}

impl SessionStage {
    /// Canonical session order
    pub const ORDER: [SessionStage; 7] = [
        SessionStage::Opening,
        SessionStage::RapportBuilding,
        SessionStage::DiagnosticProbing,
        SessionStage::Analysis,
        SessionStage::StrategyReveal,
        SessionStage::Motivation,
        SessionStage::Closing,
    ];

    /// Position within the session (0-6)
    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next stage, or None at closing
    pub fn next(self) -> Option<SessionStage> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// Previous stage, or None at opening
    pub fn previous(self) -> Option<SessionStage> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    /// Progress through the session, 0.0 (opening) to 1.0 (closing)
    pub fn progress(self) -> f64 {
        self.index() as f64 / (Self::ORDER.len() - 1) as f64
    }

    pub fn is_early(self) -> bool {
        matches!(self, SessionStage::Opening | SessionStage::RapportBuilding)
    }

    pub fn is_middle(self) -> bool {
        matches!(
            self,
            SessionStage::DiagnosticProbing | SessionStage::Analysis | SessionStage::StrategyReveal
        )
    }

    pub fn is_late(self) -> bool {
        matches!(self, SessionStage::Motivation | SessionStage::Closing)
    }

    /// Typical duration within a 60-minute session
    pub fn duration_minutes(self) -> u32 {
        match self {
            SessionStage::Opening => 5,
            SessionStage::RapportBuilding => 10,
            SessionStage::DiagnosticProbing => 15,
            SessionStage::Analysis => 10,
            SessionStage::StrategyReveal => 10,
            SessionStage::Motivation => 5,
            SessionStage::Closing => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SessionStage::Opening => "Warm welcome, establish safety, set conversational tone",
            SessionStage::RapportBuilding => {
                "Build trust, get student comfortable sharing vulnerably"
            }
            SessionStage::DiagnosticProbing => {
                "Ask probing questions, understand deeper situation"
            }
            SessionStage::Analysis => "Think critically, identify patterns, honest assessment",
            SessionStage::StrategyReveal => {
                "Present key insights and strategic recommendations"
            }
            SessionStage::Motivation => "Rally energy, build confidence, inspire action",
            SessionStage::Closing => "Wrap up clearly, ensure understanding, send off strong",
        }
    }

    /// Stage a session should be at after the given elapsed minutes
    pub fn estimate_from_time(elapsed_minutes: u32) -> SessionStage {
        let mut cumulative = 0;
        for stage in Self::ORDER {
            cumulative += stage.duration_minutes();
            if elapsed_minutes < cumulative {
                return stage;
            }
        }
        SessionStage::Closing
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStage::Opening => "opening",
            SessionStage::RapportBuilding => "rapport-building",
            SessionStage::DiagnosticProbing => "diagnostic-probing",
            SessionStage::Analysis => "analysis",
            SessionStage::StrategyReveal => "strategy-reveal",
            SessionStage::Motivation => "motivation",
            SessionStage::Closing => "closing",
        }
    }
}

impl std::fmt::Display for SessionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
