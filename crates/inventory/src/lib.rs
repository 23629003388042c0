//! Inventory aging domain module.
//!
//! This crate contains the end-of-day aging rules for shop items, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod item;
pub mod rules;

pub use catalog::RuleCatalog;
pub use item::{Item, MAX_QUALITY, MIN_QUALITY, clamp_quality};
pub use rules::{
    AgingRule, AppreciatingRule, DecayRule, LegendaryRule, NameMatcher, TimeSensitiveRule,
    standard_rules,
};
