//! Jenny-0: turn-level affective directive pipeline
//!
//! Per student message: leaf trackers (momentum, structuring, archetype /
//! stage / confidence) → coaching-move arbitration + EQ curve composition →
//! tone modulation → phrasebank selection + rhythm rewriting.

pub mod core;
pub mod types;

// =============================================================================
// MOMENTUM THRESHOLDS [C]
// =============================================================================

/// Reply at or below this many chars is treated as hard disengagement
pub const SHORT_REPLY_MAX: usize = 5;

/// Reply at or below this many chars is brief but not alarming
pub const BRIEF_REPLY_MAX: usize = 15;

/// Reply above this many chars (without focus loss) earns an engagement boost
pub const LONG_REPLY_MIN: usize = 100;

/// Bounded length of the momentum score history
pub const ENERGY_HISTORY_LIMIT: usize = 20;

// =============================================================================
// MOMENTUM DELTAS [C]
// =============================================================================

/// Enthusiasm surge
pub const SPIKE_DELTA: i32 = 12;
/// Energy drop / overwhelm
pub const DIP_DELTA: i32 = -12;
/// Very short reply
pub const SHORT_REPLY_DELTA: i32 = -8;
/// Brief reply
pub const BRIEF_REPLY_DELTA: i32 = -3;
/// Disengagement phrase in a normal-length message
pub const DISENGAGED_DELTA: i32 = -5;
/// Focus-loss phrase
pub const FOCUS_LOSS_DELTA: i32 = -4;
/// Long, engaged reply
pub const LONG_REPLY_DELTA: i32 = 5;
/// Substantive question (contains '?', length > 20)
pub const QUESTION_DELTA: i32 = 3;

// =============================================================================
// STRUCTURING THRESHOLDS [C]
// =============================================================================

/// Consecutive topic changes before drift is declared
pub const DRIFT_THRESHOLD: u32 = 2;

/// Completion signals that close out an agenda section
pub const SECTION_COMPLETION_SIGNALS: u32 = 2;

/// Messages in one agenda step that close out the section regardless
pub const SECTION_MESSAGE_LIMIT: u32 = 8;

/// Messages in one step without completion before a summary is suggested
pub const SUMMARY_MESSAGE_LIMIT: u32 = 6;

/// Bounded length of the detected-topic history
pub const TOPIC_HISTORY_LIMIT: usize = 5;

// =============================================================================
// COACHING / CONFIDENCE WINDOWS [C]
// =============================================================================

/// Rolling message history kept by the coaching arbiter
pub const MESSAGE_HISTORY_LIMIT: usize = 10;

/// Bounded length of the confidence delta history
pub const CONFIDENCE_HISTORY_LIMIT: usize = 10;

/// Per-message confidence delta is clamped to ±this
pub const CONFIDENCE_DELTA_CAP: i32 = 10;

// =============================================================================
// RENDERING RECENCY [C]
// =============================================================================

/// Phrasebank tracks this many recent picks to avoid repetition
pub const PHRASE_RECENCY_LIMIT: usize = 20;

/// Clause generator tracks this many recent picks
pub const CLAUSE_RECENCY_LIMIT: usize = 30;

// =============================================================================
// TONE RANGE [C]
// =============================================================================

/// Continuous tone dimensions are clamped to [0, TONE_MAX]
pub const TONE_MAX: f64 = 10.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
