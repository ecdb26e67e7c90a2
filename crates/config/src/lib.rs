//! Session configuration for stimlist.
//!
//! Loads `stimlist.toml` from the working directory with environment
//! variable overrides (`STIMLIST_*`). Validates all settings at load. Also
//! owns the two pieces of subject bookkeeping the presentation side needs:
//! deriving a list number from a subject number, and picking the next free
//! subject number from the results directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The session configuration.
///
/// Maps directly to `stimlist.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How many counterbalanced lists the design uses. List numbers cycle
    /// 1..number_of_lists across subjects.
    #[serde(default = "default_number_of_lists")]
    pub number_of_lists: u32,

    /// Path of the item source file.
    #[serde(default = "default_item_file")]
    pub item_file: PathBuf,

    /// Directory holding per-subject output files.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Whether the item source carries a header row.
    #[serde(default)]
    pub has_header: bool,

    /// Fixed RNG seed for reproducible lists. Unset = seed from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_number_of_lists() -> u32 {
    3
}
fn default_item_file() -> PathBuf {
    PathBuf::from("items.txt")
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            number_of_lists: default_number_of_lists(),
            item_file: default_item_file(),
            results_dir: default_results_dir(),
            has_header: false,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from `stimlist.toml` in the working directory.
    ///
    /// Environment overrides, applied after the file:
    /// - `STIMLIST_ITEM_FILE`
    /// - `STIMLIST_RESULTS_DIR`
    /// - `STIMLIST_SEED`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(Path::new("stimlist.toml"))?;

        if let Ok(item_file) = std::env::var("STIMLIST_ITEM_FILE") {
            config.item_file = PathBuf::from(item_file);
        }
        if let Ok(results_dir) = std::env::var("STIMLIST_RESULTS_DIR") {
            config.results_dir = PathBuf::from(results_dir);
        }
        if let Ok(seed) = std::env::var("STIMLIST_SEED") {
            config.seed = Some(seed.parse().map_err(|_| {
                ConfigError::ValidationError(format!("STIMLIST_SEED is not an integer: {seed}"))
            })?);
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_lists == 0 {
            return Err(ConfigError::ValidationError(
                "number_of_lists must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The 1-based list number owed to a subject: subjects cycle through
    /// lists 1..number_of_lists in order.
    pub fn list_for_subject(&self, subject_number: u32) -> u32 {
        (subject_number.saturating_sub(1)) % self.number_of_lists + 1
    }

    /// The next free subject number: one past the highest numbered result
    /// file in the results directory, or 1 when there are none.
    pub fn next_subject_number(&self) -> u32 {
        let Ok(entries) = std::fs::read_dir(&self.results_dir) else {
            return 1;
        };
        let highest = entries
            .flatten()
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(|stem| stem.parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);
        highest + 1
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
