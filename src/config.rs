use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::SignalWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:8090".to_string(),
            model: "distilbert-base-uncased".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: SignalWeights,
    pub encoder: EncoderConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            encoder: EncoderConfig::default(),
        }
    }
}

impl ScoringConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                // Generate the default config on first use. A read-only
                // config dir must not block scoring, so write failures are
                // ignored and the defaults still apply.
                let config = ScoringConfig::default();
                let _ = config.write(path);
                config
            }
        } else {
            ScoringConfig::default()
        };

        config.apply_env_overrides();
        config.weights.validate()?;
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(enabled) = env::var("ENCODER_ENABLED") {
            if let Ok(value) = enabled.parse::<bool>() {
                self.encoder.enabled = value;
            }
        }
        if let Ok(endpoint) = env::var("ENCODER_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.encoder.endpoint = endpoint;
            }
        }
        if let Ok(model) = env::var("ENCODER_MODEL") {
            if !model.trim().is_empty() {
                self.encoder.model = model;
            }
        }
        if let Ok(timeout) = env::var("ENCODER_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.encoder.timeout_ms = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("POPULARITY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/scoring.toml")))
}
