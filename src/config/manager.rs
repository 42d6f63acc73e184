use super::mutation::MutationChances;
use super::traits::ConfigSection;
use crate::error::EvogenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level engine configuration as persisted in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub mutation: MutationChances,
    /// Scales every operator chance in a pass (1.0 = chances as written)
    pub multiplier: f64,
    /// Fixed RNG seed for reproducible runs; None draws from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mutation: MutationChances::default(),
            multiplier: 1.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EvogenError> {
        self.mutation.validate()?;
        if self.multiplier < 0.0 {
            return Err(EvogenError::Configuration(format!(
                "multiplier must be non-negative, got {}",
                self.multiplier
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EvogenError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EvogenError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: EngineConfig = toml::from_str(&contents)
            .map_err(|e| EvogenError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvogenError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| EvogenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| EvogenError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
