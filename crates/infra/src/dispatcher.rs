//! Daily aging pipeline (application-level orchestration).
//!
//! ```text
//! items
//!   ↓
//! 1. For each item, in input order, pick the first rule that accepts it
//!   ↓
//! 2. Let that rule produce the aged item
//!   ↓
//! 3. Collect results in input order (first failure aborts the whole day)
//! ```
//!
//! The dispatcher holds no state between days; rules are immutable values shared
//! read-only during dispatch. This module contains no IO.

use thiserror::Error;
use tracing::{debug, trace, warn};

use gildedrose_core::RuleError;
use gildedrose_inventory::{AgingRule, Item, RuleCatalog, standard_rules};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No rule in the list accepted the item (the rule list has lost its catch-all).
    #[error("failed to match an aging rule for item `{item}`")]
    NoApplicableRule { item: String },
    /// A selected rule refused or failed on the item.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Ordered, first-match-wins list of aging rules.
///
/// The standard list ends with the catch-all default rule, so every item has a
/// rule. A hand-built list without one surfaces
/// [`DispatchError::NoApplicableRule`] rather than skipping items.
#[derive(Debug, Default)]
pub struct RuleDispatcher {
    rules: Vec<Box<dyn AgingRule>>,
}

impl RuleDispatcher {
    /// An empty dispatcher. Add rules with [`RuleDispatcher::with_rule`].
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard rule list for `catalog`, default rule last.
    pub fn standard(catalog: &RuleCatalog) -> Self {
        Self {
            rules: standard_rules(catalog),
        }
    }

    /// Append a rule at the lowest precedence so far.
    pub fn with_rule<R: AgingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Insert a rule ahead of every existing rule.
    pub fn with_priority_rule<R: AgingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.insert(0, Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Rule names in precedence order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The first rule accepting `item`, if any.
    pub fn rule_for(&self, item: &Item) -> Option<&dyn AgingRule> {
        self.rules
            .iter()
            .find(|rule| rule.is_suitable_for(item))
            .map(|rule| rule.as_ref())
    }

    /// Age a single item by one day.
    pub fn age_item(&self, item: &Item) -> Result<Item, DispatchError> {
        let rule = self
            .rule_for(item)
            .ok_or_else(|| DispatchError::NoApplicableRule {
                item: item.name.clone(),
            })?;

        let aged = rule.update(item)?;
        trace!(
            rule = rule.name(),
            item = %item.name,
            sell_in = aged.sell_in,
            quality = aged.quality,
            "item aged"
        );
        Ok(aged)
    }

    /// Age every item by one day.
    ///
    /// Output has the same length and order as `items`. The first failing item
    /// fails the whole day; no partial result is returned.
    pub fn advance_day(&self, items: &[Item]) -> Result<Vec<Item>, DispatchError> {
        let aged = items
            .iter()
            .map(|item| self.age_item(item))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(error = %e, "aging day aborted"))?;

        debug!(items = aged.len(), rules = self.rules.len(), "aging day complete");
        Ok(aged)
    }
}
