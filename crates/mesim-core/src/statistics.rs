//! Cross-session statistics.

use serde::{Deserialize, Serialize};

/// Totals accumulated over every finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of sessions recorded.
    #[serde(default)]
    pub sessions: u32,
    /// Sum of session scores.
    #[serde(default)]
    pub total_score: f64,
    /// Sum of session lengths.
    #[serde(default)]
    pub total_exercises: u32,
    /// Best single-session percentage.
    #[serde(default)]
    pub best_pct: f64,
}

impl AggregateStats {
    /// Fold one session of `total` exercises scoring `score` into the totals.
    pub fn record_session(&mut self, score: f64, total: u32) {
        self.sessions += 1;
        self.total_score += score;
        self.total_exercises += total;
        self.best_pct = self.best_pct.max(session_percentage(score, total));
    }

    /// Percentage over all recorded exercises.
    pub fn average_pct(&self) -> f64 {
        session_percentage(self.total_score, self.total_exercises)
    }
}

/// `100·score/total`, or zero for an empty session.
pub fn session_percentage(score: f64, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        score / f64::from(total) * 100.0
    }
}
