//! Showcase configuration loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::catalog::MOCK_LOCATIONS;

/// Runtime settings, read from an optional YAML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// "mock", a JSON file path, or an http(s) URL
    pub catalog: String,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,

    /// Timeout for remote catalogs
    pub request_timeout_secs: u64,

    /// Location labels for autocomplete; the built-in list when absent
    pub locations: Option<Vec<String>>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            catalog: "mock".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            locations: None,
        }
    }
}

impl ShowcaseConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse config")?;
        Ok(config)
    }

    /// Load configuration from a YAML file, or defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn location_labels(&self) -> Vec<String> {
        match &self.locations {
            Some(labels) => labels.clone(),
            None => MOCK_LOCATIONS.iter().map(|l| l.to_string()).collect(),
        }
    }
}
