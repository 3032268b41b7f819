//! Rhythm engine: rebuilds text into the persona's sentence cadence
//!
//! Three parts: clause generation (validation / direction / encouragement
//! pools), arc building (the four named patterns), and the rewriter that
//! segments free text into thought units and resynthesizes them.

pub mod arcs;
pub mod clause;
pub mod rewriter;

pub use arcs::RhythmEngine;
pub use clause::ClauseGenerator;
pub use rewriter::Rewriter;
