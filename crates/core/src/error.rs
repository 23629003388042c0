//! Rule error model.

use thiserror::Error;

/// Result type returned by aging rules.
pub type RuleResult<T> = Result<T, RuleError>;

/// Failure raised by an aging rule.
///
/// These are caller-contract failures, not normal outcomes: a dispatcher only
/// invokes a rule after the rule has accepted the item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule was asked to update an item it does not accept.
    #[error("strategy mismatch: rule `{rule}` is unsuitable for item `{item}`")]
    StrategyMismatch { rule: String, item: String },
}

impl RuleError {
    pub fn mismatch(rule: impl Into<String>, item: impl Into<String>) -> Self {
        Self::StrategyMismatch {
            rule: rule.into(),
            item: item.into(),
        }
    }
}
