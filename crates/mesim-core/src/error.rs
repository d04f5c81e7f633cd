//! Error types for exercise generation and practice sessions.
//!
//! These are contract violations raised by the engine itself. Learner input
//! never produces an error: an unparsable answer simply scores zero.

use thiserror::Error;

/// Errors raised while building samplers or generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The value and weight sequences are empty, differ in length, or carry
    /// a negative or non-finite weight.
    #[error("invalid distribution: {values} value(s), {weights} weight(s)")]
    InvalidDistribution { values: usize, weights: usize },

    /// Configured exercise-kind weights do not form a probability vector.
    #[error("invalid generator policy: {0}")]
    InvalidPolicy(String),
}

/// Errors raised by a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Every exercise of the session has already been answered or skipped.
    #[error("session finished: all {total} exercise(s) answered")]
    Finished { total: usize },
}

impl GenerationError {
    pub(crate) fn distribution(values: usize, weights: usize) -> Self {
        GenerationError::InvalidDistribution { values, weights }
    }
}
