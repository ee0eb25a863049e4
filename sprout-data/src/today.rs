//! The running tally for the day in progress.

use serde::Serialize;
use sprout_core::{TodayLedger, TrackedItemStack};
use sprout_utils::numbers::format_gold_number;

/// What has been placed in the shipping bin today, most valuable stack first.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TodaySummary {
    pub items: Vec<TrackedItemStack>,
    pub gold_in: i64,
    pub gold_out: i64,
}

impl TodaySummary {
    pub fn from_ledger(ledger: &TodayLedger) -> TodaySummary {
        let mut items = ledger.items.clone();
        TrackedItemStack::sort_by_value_descending(&mut items);
        TodaySummary {
            items,
            gold_in: ledger.gold_in,
            gold_out: ledger.gold_out.abs(),
        }
    }

    pub fn shipped_something(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn total_proceeds(&self) -> i64 {
        self.items.iter().map(TrackedItemStack::total_sale_price).sum()
    }

    pub fn total_proceeds_text(&self) -> String {
        format!("Current Shipped: {}", format_gold_number(self.total_proceeds()))
    }
}

#[cfg(test)]
mod tests {
    use super::TodaySummary;
    use sprout_core::{TodayLedger, TrackedItemStack};

    #[test]
    fn test_summary_sorts_and_totals() {
        let ledger = TodayLedger {
            items: vec![
                TrackedItemStack::new("24", 10, 35),
                TrackedItemStack::new("72", 1, 750),
                TrackedItemStack::new("188", 6, 60),
            ],
            gold_in: 1460,
            gold_out: -200,
        };
        let summary = TodaySummary::from_ledger(&ledger);
        assert!(summary.shipped_something());
        assert_eq!(summary.total_proceeds(), 350 + 750 + 360);
        assert_eq!(summary.total_proceeds_text(), "Current Shipped: 1,460g");
        let ids: Vec<&str> = summary.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["72", "188", "24"]);
        assert_eq!(summary.gold_out, 200);
    }

    #[test]
    fn test_empty_ledger() {
        let summary = TodaySummary::from_ledger(&TodayLedger::default());
        assert!(!summary.shipped_something());
        assert_eq!(summary.total_proceeds_text(), "Current Shipped: 0g");
    }
}
