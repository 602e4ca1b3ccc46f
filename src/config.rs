//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.fitcheck/config.toml`, or wherever
//! `FITCHECK_CONFIG` points.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::Rounding;
use crate::core::services::ScoreOptions;
use crate::paths;

/// Global fitcheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scoring preferences
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Scoring preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Rounding mode for `.5` means
    #[serde(default)]
    pub rounding: Rounding,
}

impl Config {
    /// Load config from the default location, or defaults if missing or invalid
    #[must_use]
    pub fn load() -> Self {
        let path = paths::global_config();
        if !path.exists() {
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("ignoring config at {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&paths::global_config())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Scoring options, with an optional rounding override
    #[must_use]
    pub const fn score_options(&self, rounding: Option<Rounding>) -> ScoreOptions {
        let rounding = match rounding {
            Some(r) => r,
            None => self.scoring.rounding,
        };
        ScoreOptions { rounding }
    }
}
