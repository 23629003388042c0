//! Item fixtures: JSON item lists and the textual daily report.

use std::fmt::Write as _;

use gildedrose_inventory::Item;

/// Parse a JSON array of items (`[{ "name": .., "sellIn": .., "quality": .. }]`).
pub fn items_from_json(raw: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn items_to_json(items: &[Item]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Render one day of the golden-master report.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-------- day {day} --------");
    out.push_str("name, sellIn, quality\n");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push('\n');
    out
}

/// The classic starting inventory.
pub fn classic_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
