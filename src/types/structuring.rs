//! Agenda steps and structuring directives

use serde::{Deserialize, Serialize};

/// The fixed six-step topic sequence of a coaching session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaStep {
    Intro,
    Academics,
    Activities,
    Narrative,
    Strategy,
    Closing,
}

impl AgendaStep {
    /// Canonical session order
    pub const ORDER: [AgendaStep; 6] = [
        AgendaStep::Intro,
        AgendaStep::Academics,
        AgendaStep::Activities,
        AgendaStep::Narrative,
        AgendaStep::Strategy,
        AgendaStep::Closing,
    ];

    /// Position within the agenda (0-5)
    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next step, or None at closing
    pub fn next(self) -> Option<AgendaStep> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgendaStep::Intro => "intro",
            AgendaStep::Academics => "academics",
            AgendaStep::Activities => "activities",
            AgendaStep::Narrative => "narrative",
            AgendaStep::Strategy => "strategy",
            AgendaStep::Closing => "closing",
        }
    }
}

impl std::fmt::Display for AgendaStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structuring tracker state, exposed for caller persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuringState {
    pub step: AgendaStep,
    pub last_topic: Option<AgendaStep>,
    pub drift_counter: u32,
    pub messages_in_step: u32,
    /// Detected topics, most recent last (bounded)
    pub topic_history: Vec<AgendaStep>,
    pub completion_signals: u32,
}

impl Default for StructuringState {
    fn default() -> Self {
        Self {
            step: AgendaStep::Intro,
            last_topic: None,
            drift_counter: 0,
            messages_in_step: 0,
            topic_history: Vec::new(),
            completion_signals: 0,
        }
    }
}

/// Instructions for structuring the next response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuringDirectives {
    /// Trigger a micro-summary
    pub should_summarize: bool,
    /// Insert a checkpoint ("let's pause")
    pub should_checkpoint: bool,
    /// Suggested next topic (none at closing)
    pub next_topic_hint: Option<AgendaStep>,
    pub drift_detected: bool,
    /// Progress through the agenda (0-100)
    pub agenda_progress: u8,
    pub agenda_step: AgendaStep,
    pub section_complete: bool,
    /// Guide back to the agenda
    pub needs_rerail: bool,
}

impl StructuringDirectives {
    /// Render as prompt hints for the reply generator
    pub fn to_hints(&self) -> String {
        let mut hints: Vec<String> = Vec::new();

        if self.should_summarize {
            hints.push(
                "-> SUMMARIZE: Include a brief recap of what we've covered so far before continuing."
                    .to_string(),
            );
        }
        if self.should_checkpoint {
            hints.push(
                "-> CHECKPOINT: Pause and check in with the student. Ask if they're following and ready to move forward."
                    .to_string(),
            );
        }
        if self.drift_detected {
            hints.push(
                "-> DRIFT DETECTED: Student has wandered off-topic. Gently guide back to the current focus area."
                    .to_string(),
            );
        }
        if self.needs_rerail {
            hints.push(
                "-> RE-RAIL: Acknowledge their point, then redirect to the structured agenda."
                    .to_string(),
            );
        }
        if self.section_complete {
            hints.push(
                "-> SECTION COMPLETE: This section appears done. Transition to the next topic smoothly."
                    .to_string(),
            );
        }
        if let Some(next) = self.next_topic_hint {
            hints.push(format!("-> NEXT TOPIC: Prepare to guide towards {}", next));
        }
        hints.push(format!(
            "-> AGENDA: Currently in '{}' ({}%)",
            self.agenda_step, self.agenda_progress
        ));

        hints.join("\n")
    }

    /// Compact one-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "Agenda: {} ({}%)",
            self.agenda_step, self.agenda_progress
        )];
        if self.should_summarize {
            parts.push("Summary needed".to_string());
        }
        if self.should_checkpoint {
            parts.push("Checkpoint ready".to_string());
        }
        if self.drift_detected {
            parts.push("Drift detected".to_string());
        }
        if self.section_complete {
            parts.push("Section complete".to_string());
        }
        if let Some(next) = self.next_topic_hint {
            parts.push(format!("Next: {}", next));
        }
        parts.join(" | ")
    }
}

// =============================================================================
// TESTS
// =============================================================================
