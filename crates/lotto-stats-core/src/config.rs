//! Analysis configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via [`AnalysisConfig::apply_overrides`])
//! 2. Environment variables (`LOTTO_INPUT`, `LOTTO_OUTPUT_DIR`)
//! 3. TOML file (explicit path, or `lotto.toml` in the working directory)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};
use crate::types::{BaselineOptions, RandomnessOptions, MAIN_NUMBERS};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lotto.toml";

/// Column names of the cleaned draw table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub date: String,
    pub main: Vec<String>,
    pub bonus: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: "draw_date".to_string(),
            main: (1..=MAIN_NUMBERS).map(|i| format!("n{i}")).collect(),
            bonus: "bonus".to_string(),
        }
    }
}

/// File names of the artifacts written to the output directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactNames {
    pub main_frequencies: String,
    pub bonus_frequencies: String,
    pub combined_frequencies: String,
    pub pairs: String,
    pub triplets: String,
    pub ml_ready: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            main_frequencies: "main_number_frequencies.csv".to_string(),
            bonus_frequencies: "bonus_number_frequencies.csv".to_string(),
            combined_frequencies: "combined_number_frequencies.csv".to_string(),
            pairs: "pair_frequencies.csv".to_string(),
            triplets: "triplet_frequencies.csv".to_string(),
            ml_ready: "lottomax_ml_ready.csv".to_string(),
        }
    }
}

/// Configuration handed to every engine and I/O function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Cleaned draw table
    pub input_path: PathBuf,
    /// Directory receiving every artifact
    pub output_dir: PathBuf,
    pub columns: ColumnLayout,
    pub artifacts: ArtifactNames,
    pub randomness: RandomnessOptions,
    pub baseline: BaselineOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/processed/lottomax_cleaned.csv"),
            output_dir: PathBuf::from("data/processed"),
            columns: ColumnLayout::default(),
            artifacts: ArtifactNames::default(),
            randomness: RandomnessOptions::default(),
            baseline: BaselineOptions::default(),
        }
    }
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub n_lags: Option<usize>,
    pub test_size: Option<usize>,
}

impl AnalysisConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the default `lotto.toml` is
    /// optional.
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> StatsResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.apply_overrides(overrides);
        config.validate()?;

        tracing::debug!(
            input = %config.input_path.display(),
            output_dir = %config.output_dir.display(),
            "resolved configuration"
        );
        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_file(path: &Path) -> StatsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| StatsError::Config(format!("{}: {e}", path.display())))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> StatsResult<Self> {
        toml::from_str(toml_str).map_err(|e| StatsError::Config(e.to_string()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(input) = std::env::var("LOTTO_INPUT") {
            if !input.is_empty() {
                self.input_path = PathBuf::from(input);
            }
        }
        if let Ok(dir) = std::env::var("LOTTO_OUTPUT_DIR") {
            if !dir.is_empty() {
                self.output_dir = PathBuf::from(dir);
            }
        }
    }

    /// Apply CLI flags on top of the resolved values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(input) = &overrides.input_path {
            self.input_path = input.clone();
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(n_lags) = overrides.n_lags {
            self.baseline.n_lags = n_lags;
        }
        if let Some(test_size) = overrides.test_size {
            self.baseline.test_size = test_size;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> StatsResult<()> {
        if self.columns.main.len() != MAIN_NUMBERS {
            return Err(StatsError::Config(format!(
                "columns.main must name exactly {MAIN_NUMBERS} columns, got {}",
                self.columns.main.len()
            )));
        }
        if self.columns.date.trim().is_empty() {
            return Err(StatsError::Config("columns.date cannot be empty".into()));
        }
        let alpha = self.randomness.alpha;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(StatsError::Config(format!(
                "randomness.alpha must be in (0, 1), got {alpha}"
            )));
        }
        if self.randomness.correlation_threshold < 0.0 || self.randomness.entropy_tolerance < 0.0 {
            return Err(StatsError::Config(
                "randomness thresholds must be non-negative".into(),
            ));
        }
        if self.baseline.n_lags == 0 {
            return Err(StatsError::Config("baseline.n_lags must be at least 1".into()));
        }
        if self.baseline.test_size == 0 {
            return Err(StatsError::Config(
                "baseline.test_size must be at least 1".into(),
            ));
        }
        if self.baseline.logistic.c <= 0.0 {
            return Err(StatsError::Config("baseline.logistic.c must be > 0".into()));
        }
        Ok(())
    }

    /// Path of an artifact inside the output directory
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
