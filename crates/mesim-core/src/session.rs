//! Practice sessions.
//!
//! A session walks a learner through a fixed batch of exercises. Each
//! exercise is either answered (and graded) or skipped (and scored zero);
//! either way the session moves on and keeps a record for the correction
//! and the final summary.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::evaluate::{grade, Answer, Correction, GradeResult};
use crate::generator::ExerciseGenerator;
use crate::model::Exercise;
use crate::report::SessionReport;

/// What happened to one exercise of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub exercise: Exercise,
    /// `None` when the exercise was skipped.
    pub answer: Option<Answer>,
    pub grade: GradeResult,
}

impl ExerciseRecord {
    pub fn skipped(&self) -> bool {
        self.answer.is_none()
    }

    pub fn correction(&self) -> Correction {
        Correction::for_exercise(&self.exercise)
    }
}

/// Overall appraisal shown at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    GoodEffort,
    KeepPracticing,
}

impl Verdict {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Verdict::Excellent
        } else if pct >= 50.0 {
            Verdict::GoodEffort
        } else {
            Verdict::KeepPracticing
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Excellent => write!(f, "Excellent!"),
            Verdict::GoodEffort => write!(f, "Good effort!"),
            Verdict::KeepPracticing => write!(f, "Keep practicing!"),
        }
    }
}

/// End-of-session totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: f64,
    pub total: usize,
    pub answered: usize,
    pub skipped: usize,
    pub percentage: f64,
    pub verdict: Verdict,
}

/// A batch of exercises being worked through in order.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    exercises: Vec<Exercise>,
    records: Vec<ExerciseRecord>,
}

impl PracticeSession {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            records: Vec::with_capacity(exercises.len()),
            exercises,
        }
    }

    /// Draw `n` fresh exercises and start a session on them.
    pub fn generate<R: Rng + ?Sized>(generator: &ExerciseGenerator, n: usize, rng: &mut R) -> Self {
        Self::new(generator.generate_batch(n, rng))
    }

    /// The exercise awaiting an answer.
    pub fn current(&self) -> Option<&Exercise> {
        self.exercises.get(self.records.len())
    }

    /// Zero-based index of the current exercise and the session length.
    pub fn position(&self) -> (usize, usize) {
        (self.records.len(), self.exercises.len())
    }

    pub fn is_finished(&self) -> bool {
        self.records.len() >= self.exercises.len()
    }

    /// Grade `answer` against the current exercise and advance.
    pub fn submit(&mut self, answer: Answer) -> Result<GradeResult, SessionError> {
        let exercise = *self.current().ok_or(SessionError::Finished {
            total: self.exercises.len(),
        })?;
        let result = grade(&exercise, &answer);
        tracing::debug!(
            index = self.records.len(),
            score = result.total(),
            "exercise graded"
        );
        self.records.push(ExerciseRecord {
            exercise,
            answer: Some(answer),
            grade: result,
        });
        Ok(result)
    }

    /// Give up on the current exercise for zero points and advance.
    pub fn skip(&mut self) -> Result<GradeResult, SessionError> {
        let exercise = *self.current().ok_or(SessionError::Finished {
            total: self.exercises.len(),
        })?;
        tracing::debug!(index = self.records.len(), "exercise skipped");
        self.records.push(ExerciseRecord {
            exercise,
            answer: None,
            grade: GradeResult::zero(),
        });
        Ok(GradeResult::zero())
    }

    /// Points earned so far.
    pub fn score(&self) -> f64 {
        self.records.iter().map(|r| r.grade.total()).sum()
    }

    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Totals over the whole session; unanswered exercises count as zero.
    pub fn summary(&self) -> SessionSummary {
        let total = self.exercises.len();
        let score = self.score();
        let percentage = if total == 0 {
            0.0
        } else {
            score / total as f64 * 100.0
        };
        let skipped = self.records.iter().filter(|r| r.skipped()).count();
        SessionSummary {
            score,
            total,
            answered: self.records.len() - skipped,
            skipped,
            percentage,
            verdict: Verdict::from_percentage(percentage),
        }
    }

    /// Close the session into a timestamped report.
    pub fn into_report(self) -> SessionReport {
        SessionReport::from_session(&self)
    }
}
