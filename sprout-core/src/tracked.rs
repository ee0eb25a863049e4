use crate::calendar_date::CalendarDate;
use crate::item_stack::TrackedItemStack;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Gold movement recorded at the end of one day.
///
/// `gold_out` may be stored either as a negative delta or as a positive
/// magnitude; readers go through [`GoldInOut::expense`] which always yields
/// the magnitude.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GoldInOut {
    pub gold_in: i64,
    pub gold_out: i64,
    /// Gold held by the player when the day ended
    pub wallet: i64,
}

impl GoldInOut {
    pub fn new(gold_in: i64, gold_out: i64, wallet: i64) -> Self {
        GoldInOut {
            gold_in,
            gold_out,
            wallet,
        }
    }

    /// Gold lost during the day as a non-negative magnitude.
    pub fn expense(&self) -> i64 {
        self.gold_out.abs()
    }
}

/// Everything recorded for a save: shipped stacks and gold movement, keyed by day.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct TrackedData {
    #[serde(default)]
    pub shipped: HashMap<CalendarDate, Vec<TrackedItemStack>>,
    #[serde(default)]
    pub gold: HashMap<CalendarDate, GoldInOut>,
}

impl TrackedData {
    pub fn shipped_item_count(&self) -> usize {
        self.shipped.values().map(Vec::len).sum()
    }

    pub fn gold_entry_count(&self) -> usize {
        self.gold.len()
    }

    /// Latest year with any recorded shipment or gold entry.
    pub fn latest_year(&self) -> Option<u32> {
        self.shipped
            .keys()
            .chain(self.gold.keys())
            .map(CalendarDate::year)
            .max()
    }

    /// Record stacks shipped on `date`, appending to anything already recorded.
    pub fn record_shipment(&mut self, date: CalendarDate, stacks: Vec<TrackedItemStack>) {
        self.shipped.entry(date).or_default().extend(stacks);
    }

    pub fn record_gold(&mut self, date: CalendarDate, gold: GoldInOut) {
        self.gold.insert(date, gold);
    }

    /// Dump every record at trace level, oldest day first.
    pub fn log_tracked_data(&self) {
        debug!(
            "Tracked data: {} shipped stacks across {} days, {} gold entries",
            self.shipped_item_count(),
            self.shipped.len(),
            self.gold_entry_count()
        );
        let mut shipped_dates: Vec<&CalendarDate> = self.shipped.keys().collect();
        shipped_dates.sort();
        for date in shipped_dates {
            for stack in &self.shipped[date] {
                trace!(
                    "    {date} - {} {} {} {}",
                    stack.id,
                    stack.formatted_sale(),
                    stack.quality_name(),
                    stack.category_name()
                );
            }
        }
        let mut gold_dates: Vec<&CalendarDate> = self.gold.keys().collect();
        gold_dates.sort();
        for date in gold_dates {
            let gold = &self.gold[date];
            trace!(
                "    {date} - GoldIn: {} - GoldOut: {} - Wallet: {}",
                gold.gold_in,
                gold.gold_out,
                gold.wallet
            );
        }
    }
}

/// Running totals for the day in progress, not yet written to the tracked data.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct TodayLedger {
    #[serde(default)]
    pub items: Vec<TrackedItemStack>,
    #[serde(default)]
    pub gold_in: i64,
    #[serde(default)]
    pub gold_out: i64,
}

/// Hand-off from the host: the current in-game date, recorded history and today's ledger.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrackedSnapshot {
    pub current_date: CalendarDate,
    #[serde(default)]
    pub data: TrackedData,
    #[serde(default)]
    pub today: TodayLedger,
}

impl TrackedSnapshot {
    pub fn from_json(json: &str) -> Result<TrackedSnapshot, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{GoldInOut, TrackedData, TrackedSnapshot};
    use crate::calendar_date::{CalendarDate, Season};
    use crate::item_stack::TrackedItemStack;

    #[test]
    fn test_expense_is_magnitude() {
        assert_eq!(GoldInOut::new(10, -250, 0).expense(), 250);
        assert_eq!(GoldInOut::new(10, 250, 0).expense(), 250);
    }

    #[test]
    fn test_record_shipment_appends() {
        let date = CalendarDate::from_parts(1, Season::Spring, 4);
        let mut data = TrackedData::default();
        data.record_shipment(date, vec![TrackedItemStack::new("24", 2, 35)]);
        data.record_shipment(date, vec![TrackedItemStack::new("188", 1, 60)]);
        assert_eq!(data.shipped_item_count(), 2);
        assert_eq!(data.shipped[&date].len(), 2);
    }

    #[test]
    fn test_latest_year() {
        let mut data = TrackedData::default();
        assert_eq!(data.latest_year(), None);
        data.record_gold(
            CalendarDate::from_parts(3, Season::Fall, 2),
            GoldInOut::new(1, 1, 1),
        );
        data.record_shipment(CalendarDate::from_parts(2, Season::Fall, 2), vec![]);
        assert_eq!(data.latest_year(), Some(3));
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "current_date": "2-Summer-3",
            "data": {
                "shipped": { "2-Summer-1": [ { "id": "24", "stack_count": 5, "sale_price": 35 } ] },
                "gold": { "2-Summer-1": { "gold_in": 175, "gold_out": -40, "wallet": 900 } }
            },
            "today": { "items": [], "gold_in": 12, "gold_out": 0 }
        }"#;
        let snapshot = TrackedSnapshot::from_json(json).unwrap();
        let day = CalendarDate::from_parts(2, Season::Summer, 1);
        assert_eq!(snapshot.current_date, CalendarDate::from_parts(2, Season::Summer, 3));
        assert_eq!(snapshot.data.shipped[&day][0].total_sale_price(), 175);
        assert_eq!(snapshot.data.gold[&day].expense(), 40);
        assert_eq!(snapshot.today.gold_in, 12);
    }

    #[test]
    fn test_snapshot_defaults_missing_sections() {
        let snapshot = TrackedSnapshot::from_json(r#"{ "current_date": "1-Spring-1" }"#).unwrap();
        assert!(snapshot.data.shipped.is_empty());
        assert!(snapshot.today.items.is_empty());
    }
}
