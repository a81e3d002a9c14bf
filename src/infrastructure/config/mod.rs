//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Scenario configuration: who exists, who listens where, and what gets sent
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub colleagues: Vec<String>,
    pub mediators: Vec<MediatorConfig>,
    #[serde(default)]
    pub sends: Vec<SendConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MediatorConfig {
    pub name: String,
    /// Registration order is delivery order
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SendConfig {
    pub from: String,
    pub via: String,
    pub message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colleagues: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            mediators: vec![
                MediatorConfig {
                    name: "M1".to_string(),
                    members: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                },
                MediatorConfig {
                    name: "M2".to_string(),
                    members: vec!["B".to_string(), "D".to_string()],
                },
            ],
            sends: vec![
                SendConfig {
                    from: "A".to_string(),
                    via: "M1".to_string(),
                    message: "MessageX".to_string(),
                },
                SendConfig {
                    from: "B".to_string(),
                    via: "M2".to_string(),
                    message: "MessageY".to_string(),
                },
            ],
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Reject blank or duplicated names. Dangling references are left to the
    /// scenario run, which reports them as invalid references.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for name in &self.colleagues {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("colleague name cannot be empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::InvalidValue(format!("duplicate colleague '{}'", name)));
            }
        }

        let mut seen = HashSet::new();
        for mediator in &self.mediators {
            if mediator.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("mediator name cannot be empty".to_string()));
            }
            if !seen.insert(mediator.name.as_str()) {
                return Err(ConfigError::InvalidValue(format!("duplicate mediator '{}'", mediator.name)));
            }
        }
        Ok(())
    }
}
