use gildedrose_core::RuleResult;

use super::{AgingRule, NameMatcher, ensure_suitable};
use crate::item::{Item, clamp_quality};

/// Items that gain quality with age, twice as fast once expired. Capped at 50.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppreciatingRule {
    matcher: NameMatcher,
}

impl AppreciatingRule {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            matcher: NameMatcher::Exact(names),
        }
    }
}

impl AgingRule for AppreciatingRule {
    fn name(&self) -> &str {
        "appreciating"
    }

    fn is_suitable_for(&self, item: &Item) -> bool {
        self.matcher.matches(&item.name)
    }

    fn update(&self, item: &Item) -> RuleResult<Item> {
        ensure_suitable(self, item)?;

        let sell_in = item.next_sell_in();
        let increment = if sell_in < 0 { 2 } else { 1 };

        Ok(item.aged(sell_in, clamp_quality(item.quality.saturating_add(increment))))
    }
}
