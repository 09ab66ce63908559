//! Configuration file for the drip animation showcase.
//!
//! The file is TOML and every key is optional; anything left out takes
//! the value the demo ships with. See [`Config::default_path`] for where
//! it is looked up.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use drip_core::{AnimationSpeed, ColorTheme, DROP_FRAME_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyphs cycled by the emoji card.
pub const DEFAULT_EMOJIS: [&str; 6] = ["😎", "😵", "🫠", "🤓", "🙂", "🥹"];

/// Errors raised while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multiplier applied to every animation duration.
    pub speed: AnimationSpeed,
    /// Accent color for titles and key hints.
    pub theme: ColorTheme,
    /// Upper bound on the time between two rendered frames.
    pub frame_interval_ms: u64,
    /// Seed for the sampling RNG. Random when absent.
    pub seed: Option<u64>,
    pub emoji: EmojiConfig,
    pub drop: DropConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            theme: ColorTheme::default(),
            frame_interval_ms: 33,
            seed: None,
            emoji: EmojiConfig::default(),
            drop: DropConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Periodic emoji card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub glyphs: Vec<String>,
    pub period_ms: u64,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_EMOJIS.iter().map(|s| s.to_string()).collect(),
            period_ms: 700,
        }
    }
}

/// Periodic water-drop card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    pub min_height: i64,
    pub max_height: i64,
    pub period_ms: u64,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            min_height: 100,
            max_height: 150,
            period_ms: 500,
        }
    }
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file; defaults to `drip.log` in the platform data directory.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// The configured log file, or the platform default.
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            project_dirs().map(|dirs| dirs.data_local_dir().join("drip.log"))
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "drip")
}

impl Config {
    /// `config.toml` inside the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Reject values the scenes cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be positive".to_string(),
            ));
        }
        if self.emoji.period_ms == 0 || self.drop.period_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick periods must be positive".to_string(),
            ));
        }
        let (min, max) = (self.drop.min_height, self.drop.max_height);
        if min > max {
            return Err(ConfigError::Invalid(format!(
                "drop.min_height ({min}) exceeds drop.max_height ({max})"
            )));
        }
        if min < 0 || max as f64 > DROP_FRAME_SIZE {
            return Err(ConfigError::Invalid(format!(
                "drop heights must lie within 0..={DROP_FRAME_SIZE}"
            )));
        }
        Ok(())
    }
}
