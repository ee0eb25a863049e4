use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One stack of items placed in a shipping bin on a given day.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct TrackedItemStack {
    /// Game item identifier (e.g. "24" for Parsnip)
    pub id: String,
    pub stack_count: i64,
    /// Sale price of a single item in gold
    pub sale_price: i64,
    /// Quality tier: 0 normal, 1 silver, 2 gold, 4 iridium
    #[serde(default)]
    pub quality: i32,
    /// Game category identifier; negative values are the game's item categories
    #[serde(default)]
    pub category: i32,
}

impl TrackedItemStack {
    pub fn new(id: &str, stack_count: i64, sale_price: i64) -> Self {
        TrackedItemStack {
            id: id.to_string(),
            stack_count,
            sale_price,
            quality: 0,
            category: 0,
        }
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_category(mut self, category: i32) -> Self {
        self.category = category;
        self
    }

    /// Gold earned by the whole stack.
    pub fn total_sale_price(&self) -> i64 {
        self.stack_count * self.sale_price
    }

    pub fn quality_name(&self) -> &'static str {
        quality_name(self.quality)
    }

    pub fn category_name(&self) -> String {
        category_name(self.category)
    }

    /// Compact sale description such as `(5x35g)`.
    pub fn formatted_sale(&self) -> String {
        format!("({}x{}g)", self.stack_count, self.sale_price)
    }

    /// Sort stacks so the most valuable stack comes first.
    pub fn sort_by_value_descending(stacks: &mut [TrackedItemStack]) {
        stacks.sort_by(TrackedItemStack::cmp_by_value_descending);
    }

    fn cmp_by_value_descending(a: &TrackedItemStack, b: &TrackedItemStack) -> Ordering {
        b.total_sale_price().cmp(&a.total_sale_price())
    }
}

/// Display name for a quality tier.
pub fn quality_name(quality: i32) -> &'static str {
    match quality {
        0 => "Normal",
        1 => "Silver",
        2 => "Gold",
        4 => "Iridium",
        _ => "Unknown",
    }
}

/// Display name for a game item category id.
pub fn category_name(category: i32) -> String {
    let name = match category {
        -2 | -12 => "Mineral",
        -4 => "Fish",
        -5 | -6 | -14 | -18 => "Animal Product",
        -7 | -25 => "Cooking",
        -8 => "Crafting",
        -9 => "Big Craftable",
        -15 | -16 => "Resource",
        -17 => "Pierre's Store",
        -19 => "Fertilizer",
        -20 => "Trash",
        -21 => "Bait",
        -22 => "Fishing Tackle",
        -23 => "Fish Shop",
        -24 => "Decor",
        -26 | -27 => "Artisan Goods",
        -28 => "Monster Loot",
        -29 => "Equipment",
        -74 => "Seed",
        -75 => "Vegetable",
        -79 => "Fruit",
        -80 => "Flower",
        -81 => "Forage",
        -95 => "Hat",
        -96 => "Ring",
        -97 => "Boots",
        -98 => "Weapon",
        -99 => "Tool",
        -100 => "Clothing",
        -101 => "Trinket",
        -102 => "Book",
        -103 => "Skill Book",
        -999 => "Litter",
        0 => "Uncategorized",
        other => return format!("Unknown ({other})"),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::{category_name, TrackedItemStack};

    #[test]
    fn test_total_sale_price() {
        let stack = TrackedItemStack::new("24", 5, 35);
        assert_eq!(stack.total_sale_price(), 175);
        assert_eq!(stack.formatted_sale(), "(5x35g)");
    }

    #[test]
    fn test_names() {
        let stack = TrackedItemStack::new("340", 1, 100)
            .with_quality(2)
            .with_category(-26);
        assert_eq!(stack.quality_name(), "Gold");
        assert_eq!(stack.category_name(), "Artisan Goods");
        assert_eq!(category_name(-6), "Animal Product");
        assert_eq!(category_name(-42), "Unknown (-42)");
    }

    #[test]
    fn test_sort_by_value_descending() {
        let mut stacks = vec![
            TrackedItemStack::new("a", 1, 10),
            TrackedItemStack::new("b", 10, 10),
            TrackedItemStack::new("c", 2, 30),
        ];
        TrackedItemStack::sort_by_value_descending(&mut stacks);
        let ids: Vec<&str> = stacks.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_deserialize_defaults_quality_and_category() {
        let stack: TrackedItemStack =
            serde_json::from_str(r#"{"id":"24","stack_count":3,"sale_price":40}"#).unwrap();
        assert_eq!(stack.quality, 0);
        assert_eq!(stack.category, 0);
        assert_eq!(stack.total_sale_price(), 120);
    }
}
