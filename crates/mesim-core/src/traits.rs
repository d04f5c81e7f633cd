//! Persistence port for cross-session statistics.
//!
//! The engine only ever reads and writes the four fields of
//! [`AggregateStats`]; where they live is up to the implementation
//! (see [`crate::store`]).

use anyhow::Result;

use crate::statistics::AggregateStats;

/// Load/save access to [`AggregateStats`]. A single writer is assumed.
pub trait StatsStore {
    /// Current totals, or all zeros when nothing has been stored yet.
    fn load_stats(&self) -> Result<AggregateStats>;

    /// Replace the stored totals.
    fn persist(&self, stats: &AggregateStats) -> Result<()>;

    /// Fold one finished session into the stored totals and return them.
    fn save_stats(&self, score: f64, total: u32) -> Result<AggregateStats> {
        let mut stats = self.load_stats()?;
        stats.record_session(score, total);
        self.persist(&stats)?;
        Ok(stats)
    }
}
