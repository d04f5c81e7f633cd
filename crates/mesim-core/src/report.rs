//! Session reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::round4;
use crate::session::{ExerciseRecord, PracticeSession, SessionSummary};

/// A finished (or abandoned) practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Totals and verdict.
    pub summary: SessionSummary,
    /// Per-exercise outcomes, in the order they were worked.
    pub records: Vec<ExerciseRecord>,
}

impl SessionReport {
    pub fn from_session(session: &PracticeSession) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            summary: session.summary(),
            records: session.records().to_vec(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Score:** {} / {} ({:.1}%), {}\n\n",
            round4(self.summary.score),
            self.summary.total,
            self.summary.percentage,
            self.summary.verdict
        ));

        md.push_str("| # | Equation | Δ | Solutions | Your Δ | Your count | Points |\n");
        md.push_str("|---|----------|---|-----------|--------|------------|--------|\n");
        for (i, r) in self.records.iter().enumerate() {
            let correction = r.correction();
            let (your_delta, your_count) = match r.answer {
                Some(a) => (
                    a.delta.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                    a.count.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
                ),
                None => ("skipped".into(), "skipped".into()),
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                r.exercise.equation(),
                round4(correction.delta),
                correction.count,
                your_delta,
                your_count,
                r.grade.total()
            ));
        }

        md
    }
}
