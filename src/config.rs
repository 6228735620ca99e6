use std::path::{Path, PathBuf};

use crate::engine::HeuristicWeights;
use crate::error::ConfigError;

/// Search depth settings per play mode.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth for the bot's reply in human games.
    pub interactive_depth: u32,
    /// Per-turn random depth range for bot-vs-bot exhibition games.
    pub exhibition_min_depth: u32,
    pub exhibition_max_depth: u32,
    /// Depth used by both sides during statistics batches.
    pub stats_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            interactive_depth: 4,
            exhibition_min_depth: 3,
            exhibition_max_depth: 5,
            stats_depth: 4,
        }
    }
}

/// Statistics batch settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Fully automated games per batch.
    pub num_games: usize,
    /// JSON file the run summaries are appended to.
    pub output_path: PathBuf,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            num_games: 5,
            output_path: PathBuf::from("statistics.json"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub weights: HeuristicWeights,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.interactive_depth == 0 {
            return Err(ConfigError::Validation(
                "search.interactive_depth must be >= 1".into(),
            ));
        }
        if self.search.stats_depth == 0 {
            return Err(ConfigError::Validation(
                "search.stats_depth must be >= 1".into(),
            ));
        }
        if self.search.exhibition_min_depth == 0 {
            return Err(ConfigError::Validation(
                "search.exhibition_min_depth must be >= 1".into(),
            ));
        }
        if self.search.exhibition_max_depth < self.search.exhibition_min_depth {
            return Err(ConfigError::Validation(
                "search.exhibition_max_depth must be >= search.exhibition_min_depth".into(),
            ));
        }
        if self.stats.num_games == 0 {
            return Err(ConfigError::Validation(
                "stats.num_games must be >= 1".into(),
            ));
        }
        if self.weights.four <= 0 {
            return Err(ConfigError::Validation("weights.four must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
