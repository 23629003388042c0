//! Configuration loading and representation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use gildedrose_inventory::RuleCatalog;

use crate::dispatcher::RuleDispatcher;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Aging configuration.
///
/// ```json
/// { "catalog": { "appreciating": ["Aged Brie"], "conjuredMultiplier": 2 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingConfig {
    pub catalog: RuleCatalog,
}

impl AgingConfig {
    pub fn with_catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading aging config");
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = &self.catalog;
        if catalog.conjured_prefix.is_empty() {
            return Err(ConfigError::Invalid("conjuredPrefix cannot be empty".into()));
        }
        if catalog.time_sensitive_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "timeSensitivePrefix cannot be empty".into(),
            ));
        }
        if catalog.conjured_multiplier < 1 {
            return Err(ConfigError::Invalid(format!(
                "conjuredMultiplier must be at least 1 (got {})",
                catalog.conjured_multiplier
            )));
        }
        Ok(())
    }

    /// Standard dispatcher for this configuration's catalog.
    pub fn dispatcher(&self) -> RuleDispatcher {
        RuleDispatcher::standard(&self.catalog)
    }
}
