//! Core data model types for mesim.
//!
//! An [`Exercise`] is created once by a coefficient factory and is read-only
//! afterwards: the formatter and the evaluator both consume it, neither
//! mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which sign of discriminant an exercise was constructed to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Δ < 0, no real root.
    Negative,
    /// Δ = 0, one repeated root.
    Zero,
    /// Δ > 0, two distinct roots.
    Positive,
}

impl ExerciseKind {
    /// All kinds in sampling order.
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::Negative,
        ExerciseKind::Zero,
        ExerciseKind::Positive,
    ];

    /// Number of real roots an exercise of this kind has.
    pub fn root_count(self) -> u8 {
        match self {
            ExerciseKind::Negative => 0,
            ExerciseKind::Zero => 1,
            ExerciseKind::Positive => 2,
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::Negative => write!(f, "negative"),
            ExerciseKind::Zero => write!(f, "zero"),
            ExerciseKind::Positive => write!(f, "positive"),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "negative" | "neg" => Ok(ExerciseKind::Negative),
            "zero" => Ok(ExerciseKind::Zero),
            "positive" | "pos" => Ok(ExerciseKind::Positive),
            other => Err(format!("unknown exercise kind: {other}")),
        }
    }
}

/// One generated equation `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// `b² - 4ac`, computed once by the factory that built the exercise.
    pub delta: f64,
    pub kind: ExerciseKind,
}

impl Exercise {
    /// Build an exercise, computing `delta` from the coefficients.
    pub fn new(a: f64, b: f64, c: f64, kind: ExerciseKind) -> Self {
        Self {
            a,
            b,
            c,
            delta: b * b - 4.0 * a * c,
            kind,
        }
    }

    /// Canonical display text, e.g. `x² - 2x + 1 = 0`.
    pub fn equation(&self) -> String {
        crate::format::format_equation(self.a, self.b, self.c)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.equation())
    }
}

/// The real roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "count", content = "roots", rename_all = "lowercase")]
pub enum Solutions {
    None,
    One(f64),
    Two(f64, f64),
}

impl Solutions {
    /// Number of roots held.
    pub fn count(&self) -> u8 {
        match self {
            Solutions::None => 0,
            Solutions::One(_) => 1,
            Solutions::Two(_, _) => 2,
        }
    }

    /// Roots as a vector, in stored order.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Solutions::None => vec![],
            Solutions::One(x) => vec![x],
            Solutions::Two(x1, x2) => vec![x1, x2],
        }
    }
}
