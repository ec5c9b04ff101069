//! Top-level Warden configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report_config::ReportConfig;
use super::triage_config::TriageConfig;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`WARDEN_*`)
/// 2. Project config (`warden.toml` in the project root)
/// 3. User config (`~/.warden/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    pub triage: TriageConfig,
    pub report: ReportConfig,
}

impl WardenConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: user config, lowest file priority
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 2: project config
        let project_config_path = root.join("warden.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1: environment variables, highest priority
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: WardenConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate configured values. Unset fields are always valid since
    /// they resolve to protocol defaults.
    pub fn validate(config: &WardenConfig) -> Result<(), ConfigError> {
        if let Some(margin) = config.triage.conflict_margin {
            if !(0.0..=1.0).contains(&margin) {
                return Err(ConfigError::ValidationFailed {
                    field: "triage.conflict_margin".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.triage.low_confidence_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "triage.low_confidence_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(seconds) = config.report.seconds_saved_per_image {
            if seconds == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "report.seconds_saved_per_image".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".warden").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored for forward compatibility.
    fn merge_toml_file(config: &mut WardenConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let parsed: WardenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &parsed);
        Ok(())
    }

    /// Merge `other` into `base`. A field in `other` overrides `base`
    /// only when it is `Some`.
    fn merge(base: &mut WardenConfig, other: &WardenConfig) {
        // Triage
        if other.triage.conflict_margin.is_some() {
            base.triage.conflict_margin = other.triage.conflict_margin;
        }
        if other.triage.low_confidence_threshold.is_some() {
            base.triage.low_confidence_threshold = other.triage.low_confidence_threshold;
        }

        // Report
        if other.report.seconds_saved_per_image.is_some() {
            base.report.seconds_saved_per_image = other.report.seconds_saved_per_image;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WARDEN_<SECTION>_<FIELD>`. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut WardenConfig) {
        if let Ok(val) = std::env::var("WARDEN_TRIAGE_CONFLICT_MARGIN") {
            if let Ok(parsed) = val.parse::<f64>() {
                config.triage.conflict_margin = Some(parsed);
            }
        }
        if let Ok(val) = std::env::var("WARDEN_TRIAGE_LOW_CONFIDENCE_THRESHOLD") {
            if let Ok(parsed) = val.parse::<f64>() {
                config.triage.low_confidence_threshold = Some(parsed);
            }
        }
        if let Ok(val) = std::env::var("WARDEN_REPORT_SECONDS_SAVED") {
            if let Ok(parsed) = val.parse::<u64>() {
                config.report.seconds_saved_per_image = Some(parsed);
            }
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
