//! mesim-core: exercise generation and grading for the quadratic trainer.
//!
//! This crate builds randomized quadratic equations whose discriminant sign is
//! guaranteed by construction, formats them for display, grades a learner's
//! discriminant and root-count answers, and tracks practice sessions and
//! cross-session statistics.
//!
//! Randomness is always injected: every drawing function takes `&mut R` where
//! `R: rand::Rng`, so a seeded generator reproduces a session exactly.

pub mod error;
pub mod evaluate;
pub mod factory;
pub mod format;
pub mod generator;
pub mod model;
pub mod report;
pub mod sampler;
pub mod session;
pub mod statistics;
pub mod store;
pub mod traits;

pub use error::{GenerationError, SessionError};
pub use evaluate::{grade, Answer, GradeResult};
pub use format::format_equation;
pub use generator::{ExerciseGenerator, GeneratorPolicy};
pub use model::{Exercise, ExerciseKind, Solutions};
pub use statistics::AggregateStats;
pub use traits::StatsStore;
