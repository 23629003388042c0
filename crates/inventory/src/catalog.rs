//! Item names and prefixes that route items to their aging rule.

use serde::{Deserialize, Serialize};

pub const DEFAULT_APPRECIATING: &str = "Aged Brie";
pub const DEFAULT_LEGENDARY: &str = "Sulfuras, Hand of Ragnaros";
pub const DEFAULT_CONJURED_PREFIX: &str = "Conjured";
pub const DEFAULT_TIME_SENSITIVE_PREFIX: &str = "Backstage passes";
pub const DEFAULT_CONJURED_MULTIPLIER: i32 = 2;

/// Which names belong to which category.
///
/// Every field defaults to the classic inventory, so a partial JSON document
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleCatalog {
    /// Exact names that gain quality with age.
    pub appreciating: Vec<String>,
    /// Exact names that never age.
    pub legendary: Vec<String>,
    /// Name prefix for conjured goods.
    pub conjured_prefix: String,
    /// Decay multiplier applied to conjured goods.
    pub conjured_multiplier: i32,
    /// Name prefix for items that peak and then become worthless.
    pub time_sensitive_prefix: String,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self {
            appreciating: vec![DEFAULT_APPRECIATING.to_string()],
            legendary: vec![DEFAULT_LEGENDARY.to_string()],
            conjured_prefix: DEFAULT_CONJURED_PREFIX.to_string(),
            conjured_multiplier: DEFAULT_CONJURED_MULTIPLIER,
            time_sensitive_prefix: DEFAULT_TIME_SENSITIVE_PREFIX.to_string(),
        }
    }
}

impl RuleCatalog {
    pub fn with_appreciating(mut self, name: impl Into<String>) -> Self {
        self.appreciating.push(name.into());
        self
    }

    pub fn with_legendary(mut self, name: impl Into<String>) -> Self {
        self.legendary.push(name.into());
        self
    }

    pub fn with_conjured_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.conjured_prefix = prefix.into();
        self
    }

    pub fn with_conjured_multiplier(mut self, multiplier: i32) -> Self {
        self.conjured_multiplier = multiplier;
        self
    }

    pub fn with_time_sensitive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.time_sensitive_prefix = prefix.into();
        self
    }
}
