//! EQ runtime state - the always-on emotional calibration snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::archetype::StudentArchetype;
use crate::types::stage::SessionStage;
use crate::types::style::{Level, StyleDirective};

/// Accumulated emotional-intelligence state for one session.
///
/// Owned by the EQ runtime; exposed so the caller can persist it across turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqRuntimeState {
    pub archetype: StudentArchetype,
    pub stage: SessionStage,
    pub anxiety: Level,
    /// Cumulative confidence score (unbounded)
    pub confidence_signal: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_directives: Option<StyleDirective>,
    pub messages_in_stage: u32,
    pub total_messages: u32,
    pub session_start: DateTime<Utc>,
    /// Recent confidence deltas, most recent last (bounded)
    pub confidence_history: Vec<i32>,
}

impl Default for EqRuntimeState {
    fn default() -> Self {
        Self {
            archetype: StudentArchetype::Unknown,
            stage: SessionStage::Opening,
            anxiety: Level::Medium,
            confidence_signal: 0,
            last_directives: None,
            messages_in_stage: 0,
            total_messages: 0,
            session_start: Utc::now(),
            confidence_history: Vec::new(),
        }
    }
}
