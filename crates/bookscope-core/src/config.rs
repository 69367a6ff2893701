use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Query tunables, loaded from `~/.config/bookscope/config.toml`.
///
/// Every field defaults to the catalog conventions the queries were written
/// against; a config file only needs to override what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Prefix a well-formed author field starts with.
    pub author_prefix: String,

    /// Keyword marking a review as a recommendation, matched case-insensitively.
    pub recommend_keyword: String,

    /// Partition boundary: books strictly under this price fall in the "OK" band.
    pub price_threshold: f64,

    /// Price cap for the even-numbered bargain filter.
    pub bargain_cap: f64,

    /// How many leading catalog entries the title preview draws from.
    pub preview_size: usize,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            author_prefix: "Автор".to_string(),
            recommend_keyword: "рекомендую".to_string(),
            price_threshold: 50.0,
            bargain_cap: 100.0,
            preview_size: 3,
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl QueryConfig {
    /// Standard config file path: `~/.config/bookscope/config.toml`
    pub fn config_path() -> PathBuf {
        // Allow override via env var
        if let Ok(path) = std::env::var("BOOKSCOPE_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("bookscope")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded query config");
        Ok(config)
    }

    /// Save config to the standard path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        self.save_to(&path)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
