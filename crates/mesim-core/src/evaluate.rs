//! Answer evaluation.
//!
//! A learner answers two questions about an exercise: the value of Δ and the
//! number of real solutions. Each is worth half a point and is graded
//! independently.

use serde::{Deserialize, Serialize};

use crate::model::{Exercise, Solutions};

/// |Δ| below this counts as zero.
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// Maximum distance between a submitted Δ and the true one.
pub const DELTA_TOLERANCE: f64 = 0.01;

/// Points awarded per correct sub-answer.
pub const SUB_ANSWER_POINTS: f64 = 0.5;

/// Number of real roots implied by a discriminant.
///
/// The near-zero band is checked first so that a repeated root whose Δ comes
/// out as `-1e-15` still counts as one solution.
pub fn correct_count(delta: f64) -> u8 {
    // Only Δ < -1e-9 means no real root; rounding noise below zero is a double root.
    if delta.abs() < ZERO_TOLERANCE {
        1
    } else if delta < 0.0 {
        0
    } else {
        2
    }
}

/// Real roots of `a·x² + b·x + c` given its discriminant; the smaller-numerator
/// root `(-b - √Δ) / 2a` comes first.
pub fn solutions(a: f64, b: f64, delta: f64) -> Solutions {
    match correct_count(delta) {
        0 => Solutions::None,
        1 => Solutions::One(-b / (2.0 * a)),
        _ => {
            let sq = delta.abs().sqrt();
            Solutions::Two((-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a))
        }
    }
}

/// A learner's submission. `None` marks a blank or unparsable sub-answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub delta: Option<f64>,
    pub count: Option<i64>,
}

impl Answer {
    pub fn new(delta: f64, count: i64) -> Self {
        Self {
            delta: Some(delta),
            count: Some(count),
        }
    }

    /// Parse raw text fields. Anything that does not parse becomes `None`.
    pub fn parse(delta_text: &str, count_text: &str) -> Self {
        Self {
            delta: parse_number(delta_text),
            count: count_text.trim().parse::<i64>().ok(),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    // Accept the typographic minus the trainer itself prints.
    let normalized = text.trim().replace('\u{2212}', "-").replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Points earned on each half of an exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub delta_score: f64,
    pub count_score: f64,
}

impl GradeResult {
    /// Zero on both halves, as for a skipped exercise.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Score for the exercise, one of 0, 0.5 or 1.
    pub fn total(&self) -> f64 {
        self.delta_score + self.count_score
    }

    pub fn delta_correct(&self) -> bool {
        self.delta_score > 0.0
    }

    pub fn count_correct(&self) -> bool {
        self.count_score > 0.0
    }

    pub fn is_perfect(&self) -> bool {
        self.delta_correct() && self.count_correct()
    }
}

/// The correct answers for an exercise, for display after grading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub delta: f64,
    pub count: u8,
    pub solutions: Solutions,
}

impl Correction {
    pub fn for_exercise(exercise: &Exercise) -> Self {
        Self {
            delta: exercise.delta,
            count: correct_count(exercise.delta),
            solutions: solutions(exercise.a, exercise.b, exercise.delta),
        }
    }
}

/// Grade a submission against an exercise.
pub fn grade(exercise: &Exercise, answer: &Answer) -> GradeResult {
    let delta_ok = answer
        .delta
        .is_some_and(|d| (d - exercise.delta).abs() < DELTA_TOLERANCE);

    let expected = i64::from(correct_count(exercise.delta));
    let count_ok = answer.count == Some(expected);

    GradeResult {
        delta_score: if delta_ok { SUB_ANSWER_POINTS } else { 0.0 },
        count_score: if count_ok { SUB_ANSWER_POINTS } else { 0.0 },
    }
}
