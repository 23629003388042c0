use gildedrose_core::RuleResult;

use super::{AgingRule, NameMatcher, ensure_suitable};
use crate::item::Item;

/// Items that never have to be sold and never change in quality.
///
/// Quality is left as-is, so legendary items are exempt from the `[0, 50]` bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendaryRule {
    matcher: NameMatcher,
}

impl LegendaryRule {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            matcher: NameMatcher::Exact(names),
        }
    }
}

impl AgingRule for LegendaryRule {
    fn name(&self) -> &str {
        "legendary"
    }

    fn is_suitable_for(&self, item: &Item) -> bool {
        self.matcher.matches(&item.name)
    }

    fn update(&self, item: &Item) -> RuleResult<Item> {
        ensure_suitable(self, item)?;
        Ok(item.clone())
    }
}
