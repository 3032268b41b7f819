//! Engines: leaf trackers, directive composers, and renderers

pub mod archetype;
pub mod coaching;
pub mod confidence;
pub mod curve;
pub mod momentum;
pub mod phrasebank;
pub mod rhythm;
pub mod runtime;
pub mod session;
pub mod stage;
pub mod structuring;
pub mod tone;

pub use coaching::CoachingEngine;
pub use curve::{compose_curve, CurveParams};
pub use momentum::MomentumEngine;
pub use phrasebank::PhrasebankEngine;
pub use rhythm::{ClauseGenerator, Rewriter, RhythmEngine};
pub use runtime::{build_style_overlay, EqRuntime};
pub use session::{CoachSession, TurnOutput};
pub use structuring::StructuringEngine;
pub use tone::ToneEngine;
