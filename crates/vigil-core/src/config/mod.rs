//! Configuration for every Vigil subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`VIGIL_*`)
//! 2. TOML file passed to [`VigilConfig::load`]
//! 3. Compiled defaults (see [`defaults`])

pub mod defaults;
pub mod engine_config;
pub mod keyword_config;
pub mod observability_config;
pub mod seasonality_config;
pub mod spike_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use engine_config::EngineConfig;
pub use keyword_config::KeywordConfig;
pub use observability_config::ObservabilityConfig;
pub use seasonality_config::SeasonalityConfig;
pub use spike_config::SpikeConfig;
pub use storage_config::StorageConfig;

use crate::constants::MAX_UTC_OFFSET_MINUTES;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub engine: EngineConfig,
    pub seasonality: SeasonalityConfig,
    pub keywords: KeywordConfig,
    pub spikes: SpikeConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Load a TOML file, apply `VIGIL_*` environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: VigilConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing tables and keys take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: VigilConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(std::env::vars());
    }

    /// Apply `VIGIL_*` overrides from an arbitrary key/value source.
    /// Unparseable values are ignored.
    pub fn apply_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                "VIGIL_DB_PATH" => self.storage.db_path = value,
                "VIGIL_BUSY_TIMEOUT_MS" => {
                    if let Ok(ms) = value.parse() {
                        self.storage.busy_timeout_ms = ms;
                    }
                }
                "VIGIL_LOG_LEVEL" => self.observability.log_level = value,
                "VIGIL_JSON_LOGS" => {
                    if let Ok(flag) = value.parse() {
                        self.observability.json_logs = flag;
                    }
                }
                "VIGIL_SEASONALITY_ENABLED" => {
                    if let Ok(flag) = value.parse() {
                        self.seasonality.enabled = flag;
                    }
                }
                "VIGIL_KEYWORDS_ENABLED" => {
                    if let Ok(flag) = value.parse() {
                        self.keywords.enabled = flag;
                    }
                }
                "VIGIL_CRITICAL_FLAGS" => {
                    self.engine.critical_flags = value
                        .split(',')
                        .map(|f| f.trim().to_string())
                        .filter(|f| !f.is_empty())
                        .collect();
                }
                _ => {}
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let taus = [
            ("engine.short_tau_hours", self.engine.short_tau_hours),
            ("engine.long_tau_hours", self.engine.long_tau_hours),
            ("engine.risk_tau_hours", self.engine.risk_tau_hours),
            ("seasonality.horizon_hours", self.seasonality.horizon_hours),
        ];
        for (field, tau) in taus {
            if !(tau.is_finite() && tau > 0.0) {
                return Err(invalid(field, "must be a positive number of hours"));
            }
        }

        let unit_thresholds = [
            ("engine.alert_risk_threshold", self.engine.alert_risk_threshold),
            ("engine.elevated_risk_threshold", self.engine.elevated_risk_threshold),
            ("spikes.risk_threshold", self.spikes.risk_threshold),
        ];
        for (field, value) in unit_thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.engine.elevated_risk_threshold > self.engine.alert_risk_threshold {
            return Err(invalid(
                "engine.elevated_risk_threshold",
                "must not exceed engine.alert_risk_threshold",
            ));
        }

        let z_thresholds = [
            ("engine.alert_z_threshold", self.engine.alert_z_threshold),
            ("engine.elevated_z_threshold", self.engine.elevated_z_threshold),
            ("spikes.z_threshold", self.spikes.z_threshold),
        ];
        for (field, value) in z_thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        if self.engine.elevated_z_threshold > self.engine.alert_z_threshold {
            return Err(invalid(
                "engine.elevated_z_threshold",
                "must not exceed engine.alert_z_threshold",
            ));
        }

        if !(self.keywords.increment.is_finite() && self.keywords.increment > 0.0) {
            return Err(invalid("keywords.increment", "must be greater than 0"));
        }
        if self.spikes.max_per_user == 0 {
            return Err(invalid("spikes.max_per_user", "must be greater than 0"));
        }
        if self.seasonality.default_utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(invalid(
                "seasonality.default_utc_offset_minutes",
                "must be within +/- 18 hours",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
