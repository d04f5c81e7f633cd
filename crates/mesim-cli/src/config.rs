//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mesim_core::store::default_stats_path;
use mesim_core::GeneratorPolicy;

/// Top-level mesim configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MesimConfig {
    /// Exercises per practice session.
    #[serde(default = "default_exercises")]
    pub exercises: usize,
    /// Fixed RNG seed; a fresh one is drawn from the OS when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Where cross-session stats are kept.
    #[serde(default)]
    pub stats_path: Option<PathBuf>,
    /// Kind weights and positive-case output form.
    #[serde(default)]
    pub generator: GeneratorPolicy,
}

fn default_exercises() -> usize {
    5
}

impl Default for MesimConfig {
    fn default() -> Self {
        Self {
            exercises: default_exercises(),
            seed: None,
            stats_path: None,
            generator: GeneratorPolicy::default(),
        }
    }
}

impl MesimConfig {
    /// Configured stats file, falling back to `~/.mesim_stats.json`.
    pub fn stats_path(&self) -> PathBuf {
        self.stats_path.clone().unwrap_or_else(default_stats_path)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.exercises >= 1, "exercises must be at least 1");
        self.generator
            .validate()
            .context("invalid [generator] section")?;
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mesim.toml` in the current directory
/// 2. `~/.config/mesim/config.toml`
///
/// Environment variable overrides: `MESIM_STATS_PATH`, `MESIM_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<MesimConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mesim.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MesimConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MesimConfig::default(),
    };

    // Apply env var overrides
    if let Ok(path) = std::env::var("MESIM_STATS_PATH") {
        if !path.is_empty() {
            config.stats_path = Some(PathBuf::from(path));
        }
    }

    if let Ok(seed) = std::env::var("MESIM_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid MESIM_SEED: '{seed}'"))?;
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mesim"))
}
