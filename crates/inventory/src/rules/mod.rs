//! Aging rules: one (predicate, transform) pair per item category.
//!
//! A rule never mutates its input. `update` returns a fresh [`Item`] and refuses
//! items the rule does not accept, so a misrouted item surfaces as
//! [`RuleError::StrategyMismatch`] instead of silently aging the wrong way.

mod appreciating;
mod decay;
mod legendary;
mod time_sensitive;

pub use appreciating::AppreciatingRule;
pub use decay::DecayRule;
pub use legendary::LegendaryRule;
pub use time_sensitive::TimeSensitiveRule;

use gildedrose_core::{RuleError, RuleResult};

use crate::catalog::RuleCatalog;
use crate::item::Item;

/// One day's aging behaviour for a category of items.
pub trait AgingRule: Send + Sync {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Whether this rule applies to `item`. Looks at the name only.
    fn is_suitable_for(&self, item: &Item) -> bool;

    /// Age `item` by one day.
    ///
    /// Returns [`RuleError::StrategyMismatch`] when `is_suitable_for(item)` is false.
    fn update(&self, item: &Item) -> RuleResult<Item>;
}

impl core::fmt::Debug for dyn AgingRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AgingRule").field(&self.name()).finish()
    }
}

/// How a rule recognises its items by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatcher {
    /// Matches every name.
    Any,
    /// Matches names equal to one of the listed names.
    Exact(Vec<String>),
    /// Matches names starting with the prefix.
    Prefix(String),
}

impl NameMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Any => true,
            NameMatcher::Exact(names) => names.iter().any(|n| n == name),
            NameMatcher::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

pub(crate) fn ensure_suitable<R: AgingRule + ?Sized>(rule: &R, item: &Item) -> RuleResult<()> {
    if rule.is_suitable_for(item) {
        Ok(())
    } else {
        Err(RuleError::mismatch(rule.name(), item.name.as_str()))
    }
}

/// The standard rule list in precedence order, catch-all last.
pub fn standard_rules(catalog: &RuleCatalog) -> Vec<Box<dyn AgingRule>> {
    vec![
        Box::new(AppreciatingRule::new(catalog.appreciating.clone())),
        Box::new(DecayRule::conjured(
            catalog.conjured_prefix.clone(),
            catalog.conjured_multiplier,
        )),
        Box::new(LegendaryRule::new(catalog.legendary.clone())),
        Box::new(TimeSensitiveRule::new(catalog.time_sensitive_prefix.clone())),
        Box::new(DecayRule::standard()),
    ]
}
