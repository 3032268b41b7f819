//! Data contracts exchanged with the orchestration layer

pub mod archetype;
pub mod coaching;
pub mod confidence;
pub mod momentum;
pub mod phrase;
pub mod recency;
pub mod rhythm;
pub mod runtime;
pub mod stage;
pub mod structuring;
pub mod style;
pub mod tone;

pub use archetype::{
    ArchetypeGuess, ArchetypeNeeds, ArchetypeProfile, StudentArchetype, ToneArchetype,
};
pub use coaching::{CoachingDirective, CoachingMove, Intensity};
pub use confidence::{ConfidenceLevel, ConfidenceTrajectory};
pub use momentum::{MomentumLevel, MomentumState, Trajectory, Trend};
pub use phrase::{
    LinguisticFingerprint, PhraseBank, PhraseIntensity, SelectedPhrases, VoiceAtom,
    JENNY_FINGERPRINT,
};
pub use recency::RecencyWindow;
pub use rhythm::{
    ClauseOptions, EmotionalState, RewriteOptions, RhythmPattern, SentenceArc, Sentiment,
    ThoughtUnit,
};
pub use runtime::EqRuntimeState;
pub use stage::SessionStage;
pub use structuring::{AgendaStep, StructuringDirectives, StructuringState};
pub use style::{Level, Pace, StyleDirective};
pub use tone::{EqStateForTone, Pacing, ToneDirective};
