use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Lowest quality a bounded (non-legendary) item may hold after a day.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a bounded (non-legendary) item may hold after a day.
pub const MAX_QUALITY: i32 = 50;

/// Clamp a quality value into `[MIN_QUALITY, MAX_QUALITY]`.
///
/// Applied to the result of every bounded rule so out-of-range inputs are
/// pulled back into range rather than merely offset.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// An inventory item as seen at the end of a day.
///
/// `name` is only used to pick the aging rule; it is never validated.
/// `sell_in` may be negative (already expired).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Same item with new sell-in and quality values.
    pub fn aged(&self, sell_in: i32, quality: i32) -> Self {
        Self {
            name: self.name.clone(),
            sell_in,
            quality,
        }
    }

    /// Sell-in after one more day has passed.
    pub fn next_sell_in(&self) -> i32 {
        self.sell_in.saturating_sub(1)
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
