use gildedrose_core::RuleResult;

use super::{AgingRule, NameMatcher, ensure_suitable};
use crate::item::{Item, clamp_quality};

/// Items that lose quality as they age, twice as fast once expired.
///
/// The catch-all default rule and the conjured rule are both this transform;
/// conjured goods just carry a larger multiplier and a name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecayRule {
    name: &'static str,
    matcher: NameMatcher,
    multiplier: i32,
}

impl DecayRule {
    /// The catch-all rule: matches every item, multiplier 1.
    pub fn standard() -> Self {
        Self {
            name: "default",
            matcher: NameMatcher::Any,
            multiplier: 1,
        }
    }

    /// Conjured goods: names starting with `prefix`, decay scaled by `multiplier`.
    pub fn conjured(prefix: impl Into<String>, multiplier: i32) -> Self {
        Self {
            name: "conjured",
            matcher: NameMatcher::Prefix(prefix.into()),
            multiplier,
        }
    }

    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }
}

impl AgingRule for DecayRule {
    fn name(&self) -> &str {
        self.name
    }

    fn is_suitable_for(&self, item: &Item) -> bool {
        self.matcher.matches(&item.name)
    }

    fn update(&self, item: &Item) -> RuleResult<Item> {
        ensure_suitable(self, item)?;

        let sell_in = item.next_sell_in();
        let decrement: i32 = if sell_in < 0 { 2 } else { 1 };
        let quality = item
            .quality
            .saturating_sub(decrement.saturating_mul(self.multiplier));

        Ok(item.aged(sell_in, clamp_quality(quality)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_core::RuleError;

    fn item(sell_in: i32, quality: i32) -> Item {
        Item::new("Item", sell_in, quality)
    }

    fn conjured(sell_in: i32, quality: i32) -> Item {
        Item::new("Conjured Jam", sell_in, quality)
    }

    fn conjured_rule() -> DecayRule {
        DecayRule::conjured("Conjured", 2)
    }

    #[test]
    fn default_is_suitable_for_all_items() {
        let rule = DecayRule::standard();
        assert!(rule.is_suitable_for(&item(10, 10)));
        assert!(rule.is_suitable_for(&Item::new("", 0, 0)));
        assert!(rule.is_suitable_for(&Item::new("Aged Brie", 0, 0)));
    }

    #[test]
    fn default_decreases_sell_in_and_quality() {
        let updated = DecayRule::standard().update(&item(8, 10)).unwrap();
        assert_eq!(updated.sell_in, 7);
        assert_eq!(updated.quality, 9);

        let updated = DecayRule::standard().update(&item(10, 20)).unwrap();
        assert_eq!((updated.sell_in, updated.quality), (9, 19));
    }

    #[test]
    fn default_decreases_expired_quality_twice_as_fast() {
        for start in [item(0, 10), item(-2, 10)] {
            let updated = DecayRule::standard().update(&start).unwrap();
            assert_eq!(updated.quality, 8);
        }
    }

    #[test]
    fn default_never_decreases_quality_below_zero() {
        for start in [item(0, 0), item(-2, 0), item(-2, 1), item(10, 0), item(-1, 1)] {
            let updated = DecayRule::standard().update(&start).unwrap();
            assert_eq!(updated.quality, 0);
        }
    }

    #[test]
    fn default_clamps_out_of_range_quality() {
        assert_eq!(DecayRule::standard().update(&item(5, 70)).unwrap().quality, 50);
        assert_eq!(DecayRule::standard().update(&item(5, -4)).unwrap().quality, 0);
    }

    #[test]
    fn conjured_is_not_suitable_for_regular_items() {
        assert!(!conjured_rule().is_suitable_for(&Item::new("Boring", 2, 1)));
        assert!(conjured_rule().is_suitable_for(&conjured(10, 10)));
    }

    #[test]
    fn conjured_rejects_unsuitable_item() {
        let err = conjured_rule().update(&Item::new("Boring", 2, 1)).unwrap_err();
        assert_eq!(err, RuleError::mismatch("conjured", "Boring"));
    }

    #[test]
    fn conjured_decreases_quality_by_two() {
        let updated = conjured_rule().update(&conjured(8, 10)).unwrap();
        assert_eq!(updated.sell_in, 7);
        assert_eq!(updated.quality, 8);
    }

    #[test]
    fn conjured_decreases_expired_quality_twice_as_fast() {
        for start in [conjured(0, 10), conjured(-2, 10)] {
            assert_eq!(conjured_rule().update(&start).unwrap().quality, 6);
        }
    }

    #[test]
    fn conjured_never_decreases_quality_below_zero() {
        for start in [conjured(0, 0), conjured(-2, 0), conjured(-2, 3)] {
            assert_eq!(conjured_rule().update(&start).unwrap().quality, 0);
        }
    }

    #[test]
    fn multiplier_scales_decrement() {
        let rule = DecayRule::conjured("Conjured", 3);
        assert_eq!(rule.multiplier(), 3);
        assert_eq!(rule.update(&conjured(5, 20)).unwrap().quality, 17);
        assert_eq!(rule.update(&conjured(0, 20)).unwrap().quality, 14);
    }
}
