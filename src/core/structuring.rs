//! Structuring engine: topic tracking, drift detection, agenda progression
//!
//! Turns "AI improv" into a guided session: detects topic drift, suggests
//! checkpoints and micro-summaries, and walks the fixed six-step agenda.

use tracing::debug;

use crate::types::{AgendaStep, MomentumState, StructuringDirectives, StructuringState, Trend};
use crate::{
    DRIFT_THRESHOLD, SECTION_COMPLETION_SIGNALS, SECTION_MESSAGE_LIMIT, SUMMARY_MESSAGE_LIMIT,
    TOPIC_HISTORY_LIMIT,
};

const INTRO_KEYWORDS: &[&str] = &["hi", "hello", "hey", "help", "start", "begin"];

const ACADEMICS_KEYWORDS: &[&str] = &[
    "gpa",
    "grades",
    "courses",
    "rigor",
    "ap",
    "ib",
    "math",
    "science",
    "sat",
    "act",
    "test scores",
    "transcript",
    "honors",
    "weighted",
];

const ACTIVITIES_KEYWORDS: &[&str] = &[
    "club",
    "project",
    "volunteer",
    "leadership",
    "initiative",
    "startup",
    "extracurricular",
    "sport",
    "team",
    "organization",
    "president",
    "founder",
];

const NARRATIVE_KEYWORDS: &[&str] = &[
    "story",
    "theme",
    "identity",
    "thread",
    "positioning",
    "passion",
    "interest",
    "why",
    "what drives",
    "care about",
];

const STRATEGY_KEYWORDS: &[&str] = &[
    "timeline",
    "summer",
    "strategy",
    "12-month",
    "plan",
    "next steps",
    "what should i do",
    "how do i",
    "recommendations",
];

const CLOSING_KEYWORDS: &[&str] = &[
    "thank",
    "thanks",
    "appreciate",
    "goodbye",
    "bye",
    "that's all",
    "got it",
];

/// Keyword lists per agenda topic
const TOPIC_KEYWORDS: [(AgendaStep, &[&str]); 6] = [
    (AgendaStep::Intro, INTRO_KEYWORDS),
    (AgendaStep::Academics, ACADEMICS_KEYWORDS),
    (AgendaStep::Activities, ACTIVITIES_KEYWORDS),
    (AgendaStep::Narrative, NARRATIVE_KEYWORDS),
    (AgendaStep::Strategy, STRATEGY_KEYWORDS),
    (AgendaStep::Closing, CLOSING_KEYWORDS),
];

/// Phrases that signal a section is wrapping up
const COMPLETION_PHRASES: &[&str] = &[
    "got it",
    "makes sense",
    "understand",
    "clear",
    "okay",
    "what's next",
    "next steps",
    "what should i do",
    "sounds good",
    "perfect",
];

/// Manages conversation structure and agenda flow for one session
#[derive(Debug, Default)]
pub struct StructuringEngine {
    state: StructuringState,
}

impl StructuringEngine {
    pub fn new() -> Self {
        Self {
            state: StructuringState::default(),
        }
    }

    /// Analyze a message and produce structuring directives.
    ///
    /// Tracks topic, drift, completion signals, and agenda progression; the
    /// momentum state gates the summary and re-rail directives.
    pub fn evaluate(&mut self, message: &str, momentum: &MomentumState) -> StructuringDirectives {
        let msg = message.to_lowercase();
        self.state.messages_in_step += 1;

        let current_topic = self.detect_topic(&msg);
        if let Some(topic) = current_topic {
            self.state.topic_history.push(topic);
            if self.state.topic_history.len() > TOPIC_HISTORY_LIMIT {
                self.state.topic_history.remove(0);
            }
        }

        let drift_detected = self.track_drift(current_topic);

        let completion_hits = Self::completion_signals(&msg);
        self.state.completion_signals += completion_hits;

        let section_complete = self.state.completion_signals >= SECTION_COMPLETION_SIGNALS
            || self.state.messages_in_step >= SECTION_MESSAGE_LIMIT;

        if self.should_advance(current_topic, section_complete) {
            if let Some(next) = self.state.step.next() {
                self.state.step = next;
                // the triggering message counts as the first of the new step;
                // drift is deliberately left to accumulate
                self.state.messages_in_step = 1;
                self.state.completion_signals = 0;
                debug!(step = %next, "agenda advanced");
            }
        }

        self.state.last_topic = current_topic.or(self.state.last_topic);

        let should_summarize = momentum.trend == Trend::Down
            || drift_detected
            || (self.state.messages_in_step >= SUMMARY_MESSAGE_LIMIT && !section_complete)
            || momentum.focus_lost;

        let index = self.state.step.index();
        let should_checkpoint = index > 0 && (index % 2 == 0 || section_complete);

        let needs_rerail =
            drift_detected || (self.state.drift_counter > 0 && momentum.disengaged);

        let directives = StructuringDirectives {
            should_summarize,
            should_checkpoint,
            next_topic_hint: self.state.step.next(),
            drift_detected,
            agenda_progress: (index * 100 / (AgendaStep::ORDER.len() - 1)) as u8,
            agenda_step: self.state.step,
            section_complete,
            needs_rerail,
        };

        debug!(
            summarize = should_summarize,
            checkpoint = should_checkpoint,
            drift = drift_detected,
            "structuring evaluated"
        );

        directives
    }

    /// Pick the topic whose keyword gives the longest match, avoiding short
    /// substrings (e.g. "help" inside "helping") beating specific terms
    fn detect_topic(&self, msg: &str) -> Option<AgendaStep> {
        let mut best: Option<(AgendaStep, usize)> = None;
        for (topic, words) in TOPIC_KEYWORDS {
            for word in words {
                if msg.contains(word) {
                    if best.map_or(true, |(_, len)| word.len() > len) {
                        best = Some((topic, word.len()));
                    }
                }
            }
        }
        best.map(|(topic, _)| topic)
    }

    /// Update the drift counter and report whether drift is active this turn.
    ///
    /// A null topic detection leaves the counter untouched.
    fn track_drift(&mut self, current_topic: Option<AgendaStep>) -> bool {
        let (Some(topic), Some(last)) = (current_topic, self.state.last_topic) else {
            return false;
        };

        if topic == last {
            self.state.drift_counter = 0;
            return false;
        }

        // returning to a topic seen before the one we're changing from
        // counts as getting back on track
        let older = &self.state.topic_history[..self.state.topic_history.len().saturating_sub(1)];
        if older.contains(&topic) && self.state.drift_counter >= DRIFT_THRESHOLD {
            self.state.drift_counter = 0;
            debug!(topic = %topic, "returned to earlier topic, drift cleared");
            return false;
        }

        self.state.drift_counter += 1;
        if self.state.drift_counter >= DRIFT_THRESHOLD {
            debug!("drift detected");
            return true;
        }
        false
    }

    fn completion_signals(msg: &str) -> u32 {
        COMPLETION_PHRASES
            .iter()
            .filter(|p| msg.contains(*p))
            .count() as u32
    }

    /// Step i advances when the next step's topic is detected, except
    /// strategy -> closing which requires section completion
    fn should_advance(&self, current_topic: Option<AgendaStep>, section_complete: bool) -> bool {
        match self.state.step {
            AgendaStep::Strategy => section_complete,
            step => match (step.next(), current_topic) {
                (Some(next), Some(topic)) => topic == next,
                _ => false,
            },
        }
    }

    pub fn state(&self) -> &StructuringState {
        &self.state
    }

    /// Human-readable agenda progress
    pub fn agenda_summary(&self) -> String {
        let index = self.state.step.index();
        let total = AgendaStep::ORDER.len();
        let progress = index * 100 / (total - 1);
        format!(
            "Step {}/{}: {} ({}% complete)",
            index + 1,
            total,
            self.state.step,
            progress
        )
    }

    /// Manually advance to the next agenda step
    pub fn force_advance(&mut self) {
        if let Some(next) = self.state.step.next() {
            self.state.step = next;
            self.state.messages_in_step = 0;
            self.state.completion_signals = 0;
        }
    }

    pub fn reset(&mut self) {
        self.state = StructuringState::default();
    }
}

// =============================================================================
// TESTS
// =============================================================================
