//! The shop: an owned item collection advanced one day at a time.

use tracing::info;

use gildedrose_inventory::{Item, RuleCatalog};

use crate::dispatcher::{DispatchError, RuleDispatcher};

#[derive(Debug)]
pub struct Shop {
    items: Vec<Item>,
    dispatcher: RuleDispatcher,
    day: u32,
}

impl Shop {
    /// A shop aging `items` with the standard rules and classic names.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_dispatcher(items, RuleDispatcher::standard(&RuleCatalog::default()))
    }

    pub fn with_dispatcher(items: Vec<Item>, dispatcher: RuleDispatcher) -> Self {
        Self {
            items,
            dispatcher,
            day: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Days successfully advanced so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn dispatcher(&self) -> &RuleDispatcher {
        &self.dispatcher
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance one day and return the updated items.
    ///
    /// On error the shop keeps the previous day's items.
    pub fn update_quality(&mut self) -> Result<&[Item], DispatchError> {
        self.items = self.dispatcher.advance_day(&self.items)?;
        self.day += 1;
        Ok(&self.items)
    }

    /// Advance `days` days, stopping at the first failing day.
    pub fn advance_days(&mut self, days: u32) -> Result<&[Item], DispatchError> {
        for _ in 0..days {
            self.update_quality()?;
        }
        info!(day = self.day, items = self.items.len(), "shop advanced");
        Ok(&self.items)
    }
}
