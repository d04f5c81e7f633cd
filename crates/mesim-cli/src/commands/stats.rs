//! The `mesim stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mesim_core::format::round4;
use mesim_core::store::JsonStatsStore;
use mesim_core::{AggregateStats, StatsStore};

use crate::config::load_config_from;

pub fn execute(reset: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonStatsStore::new(config.stats_path());

    if reset {
        store.persist(&AggregateStats::default())?;
        println!("Stats reset: {}", store.path().display());
        return Ok(());
    }

    let stats = store.load_stats()?;
    print_stats(&stats);
    Ok(())
}

/// Print the four stored fields plus the overall average.
pub(crate) fn print_stats(stats: &AggregateStats) {
    let mut table = Table::new();
    table.set_header(vec!["Statistic", "Value"]);
    table.add_row(vec![Cell::new("Sessions"), Cell::new(stats.sessions)]);
    table.add_row(vec![
        Cell::new("Total score"),
        Cell::new(round4(stats.total_score)),
    ]);
    table.add_row(vec![
        Cell::new("Exercises done"),
        Cell::new(stats.total_exercises),
    ]);
    table.add_row(vec![
        Cell::new("Average"),
        Cell::new(format!("{:.1} %", stats.average_pct())),
    ]);
    table.add_row(vec![
        Cell::new("Best session"),
        Cell::new(format!("{:.1} %", stats.best_pct)),
    ]);

    println!("{table}");
}
