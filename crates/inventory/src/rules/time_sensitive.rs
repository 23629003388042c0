use gildedrose_core::RuleResult;

use super::{AgingRule, NameMatcher, ensure_suitable};
use crate::item::{Item, MIN_QUALITY, clamp_quality};

/// Items that gain quality faster as the date approaches, then become worthless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSensitiveRule {
    matcher: NameMatcher,
}

impl TimeSensitiveRule {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            matcher: NameMatcher::Prefix(prefix.into()),
        }
    }

    /// Quality gain for an item whose post-decrement sell-in is `sell_in`.
    pub fn quality_increment(sell_in: i32) -> i32 {
        if sell_in <= 5 {
            3
        } else if sell_in <= 10 {
            2
        } else {
            1
        }
    }
}

impl AgingRule for TimeSensitiveRule {
    fn name(&self) -> &str {
        "time-sensitive"
    }

    fn is_suitable_for(&self, item: &Item) -> bool {
        self.matcher.matches(&item.name)
    }

    fn update(&self, item: &Item) -> RuleResult<Item> {
        ensure_suitable(self, item)?;

        let sell_in = item.next_sell_in();
        let quality = if sell_in > 0 {
            clamp_quality(item.quality.saturating_add(Self::quality_increment(sell_in)))
        } else {
            MIN_QUALITY
        };

        Ok(item.aged(sell_in, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_core::RuleError;

    fn rule() -> TimeSensitiveRule {
        TimeSensitiveRule::new("Backstage passes")
    }

    fn passes(sell_in: i32, quality: i32) -> Item {
        Item::new("Backstage passes", sell_in, quality)
    }

    #[test]
    fn is_not_suitable_for_regular_items() {
        assert!(!rule().is_suitable_for(&Item::new("Regular Item", 0, 1)));
    }

    #[test]
    fn is_suitable_for_backstage_passes() {
        assert!(rule().is_suitable_for(&passes(10, 10)));
        assert!(rule().is_suitable_for(&Item::new(
            "Backstage passes to a TAFKAL80ETC concert",
            10,
            10
        )));
    }

    #[test]
    fn rejects_unsuitable_item() {
        let err = rule().update(&Item::new("Basic", 1, 1)).unwrap_err();
        assert_eq!(err, RuleError::mismatch("time-sensitive", "Basic"));
    }

    #[test]
    fn increases_quality_as_sell_in_decreases() {
        let updated = rule().update(&passes(12, 20)).unwrap();
        assert_eq!((updated.sell_in, updated.quality), (11, 21));
    }

    #[test]
    fn increases_by_two_with_ten_days_or_fewer_left() {
        let updated = rule().update(&passes(10, 20)).unwrap();
        assert_eq!((updated.sell_in, updated.quality), (9, 22));
    }

    #[test]
    fn increases_by_three_with_five_days_or_fewer_left() {
        let updated = rule().update(&passes(5, 20)).unwrap();
        assert_eq!((updated.sell_in, updated.quality), (4, 23));
    }

    #[test]
    fn tiers_use_post_decrement_sell_in() {
        // 11 -> 10 and 6 -> 5 land on the higher tier.
        assert_eq!(rule().update(&passes(11, 20)).unwrap().quality, 22);
        assert_eq!(rule().update(&passes(6, 20)).unwrap().quality, 23);
        assert_eq!(rule().update(&passes(2, 20)).unwrap().quality, 23);
    }

    #[test]
    fn drops_quality_to_zero_once_sell_in_passes() {
        for start in [passes(0, 50), passes(-1, 36), passes(-100, 0), passes(0, -2), passes(1, 40)] {
            assert_eq!(rule().update(&start).unwrap().quality, 0);
        }

        let updated = rule().update(&passes(0, 40)).unwrap();
        assert_eq!((updated.sell_in, updated.quality), (-1, 0));
    }

    #[test]
    fn never_increases_quality_above_fifty() {
        for start in [passes(12, 50), passes(10, 49), passes(5, 48)] {
            assert_eq!(rule().update(&start).unwrap().quality, 50);
        }
    }

    #[test]
    fn increment_tiers() {
        assert_eq!(TimeSensitiveRule::quality_increment(11), 1);
        assert_eq!(TimeSensitiveRule::quality_increment(10), 2);
        assert_eq!(TimeSensitiveRule::quality_increment(6), 2);
        assert_eq!(TimeSensitiveRule::quality_increment(5), 3);
        assert_eq!(TimeSensitiveRule::quality_increment(1), 3);
    }
}
