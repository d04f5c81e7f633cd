//! [`StatsStore`] implementations: a JSON file and an in-memory cell.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::statistics::AggregateStats;
use crate::traits::StatsStore;

/// File name used under the home directory when no path is configured.
pub const DEFAULT_STATS_FILE: &str = ".mesim_stats.json";

/// `$HOME/.mesim_stats.json`, or the file name alone when `HOME` is unset.
pub fn default_stats_path() -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(DEFAULT_STATS_FILE))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATS_FILE))
}

/// Stats kept as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonStatsStore {
    fn default() -> Self {
        Self::new(default_stats_path())
    }
}

impl StatsStore for JsonStatsStore {
    fn load_stats(&self) -> Result<AggregateStats> {
        if !self.path.exists() {
            return Ok(AggregateStats::default());
        }

        // Unreadable or corrupt files load as defaults.
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read stats, using defaults");
                return Ok(AggregateStats::default());
            }
        };
        match serde_json::from_str(&content) {
            Ok(stats) => Ok(stats),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt stats file, using defaults");
                Ok(AggregateStats::default())
            }
        }
    }

    fn persist(&self, stats: &AggregateStats) -> Result<()> {
        let json = serde_json::to_string_pretty(stats).context("failed to serialize stats")?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create stats directory {}", parent.display())
                })?;
            }
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write stats to {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), sessions = stats.sessions, "stats saved");
        Ok(())
    }
}

/// Stats held in memory, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    stats: Mutex<AggregateStats>,
}

impl MemoryStatsStore {
    pub fn new(stats: AggregateStats) -> Self {
        Self {
            stats: Mutex::new(stats),
        }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load_stats(&self) -> Result<AggregateStats> {
        let stats = self
            .stats
            .lock()
            .map_err(|_| anyhow::anyhow!("stats lock poisoned"))?;
        Ok(*stats)
    }

    fn persist(&self, stats: &AggregateStats) -> Result<()> {
        let mut current = self
            .stats
            .lock()
            .map_err(|_| anyhow::anyhow!("stats lock poisoned"))?;
        *current = *stats;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::new(dir.path().join("stats.json"));
        assert_eq!(store.load_stats().unwrap(), AggregateStats::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStatsStore::new(dir.path().join("nested").join("stats.json"));

        store.save_stats(3.5, 5).unwrap();
        let stats = store.save_stats(2.0, 2).unwrap();
        assert_eq!(stats.sessions, 2);

        let loaded = store.load_stats().unwrap();
        assert_eq!(loaded.sessions, 2);
        assert_eq!(loaded.total_score, 5.5);
        assert_eq!(loaded.total_exercises, 7);
        assert!((loaded.best_pct - 100.0).abs() < 1e-12);
    }

    #[test]
    fn file_holds_the_four_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        JsonStatsStore::new(&path).save_stats(1.0, 2).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["best_pct", "sessions", "total_exercises", "total_score"]
        );
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonStatsStore::new(&path);
        assert_eq!(store.load_stats().unwrap(), AggregateStats::default());

        let stats = store.save_stats(1.0, 1).unwrap();
        assert_eq!(stats.sessions, 1);
    }

    #[test]
    fn reads_legacy_integer_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(
            &path,
            r#"{"sessions": 1, "total_score": 3, "total_exercises": 5, "best_pct": 60}"#,
        )
        .unwrap();

        let stats = JsonStatsStore::new(&path).load_stats().unwrap();
        assert_eq!(stats.total_score, 3.0);
        assert_eq!(stats.best_pct, 60.0);
    }

    #[test]
    fn memory_store_accumulates() {
        let store = MemoryStatsStore::default();
        store.save_stats(2.0, 4).unwrap();
        store.save_stats(4.0, 4).unwrap();

        let stats = store.load_stats().unwrap();
        assert_eq!(stats.sessions, 2);
        assert_eq!(stats.total_score, 6.0);
        assert!((stats.best_pct - 100.0).abs() < 1e-12);
    }
}
