//! Per-day lookups of the three tracked metrics.

use crate::operation::Channels;
use serde::Serialize;
use sprout_core::{CalendarDate, GoldInOut, TrackedItemStack};
use std::collections::HashMap;
use std::fmt;

/// The three quantities the aggregator charts.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Metric {
    Shipped,
    Wallet,
    CashFlow,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Shipped => "Shipped",
            Metric::Wallet => "Wallet",
            Metric::CashFlow => "Cash Flow",
        };
        f.write_str(name)
    }
}

/// The recorded value(s) for one day.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct DayReading {
    pub primary: i64,
    /// Out channel for in/out metrics
    pub secondary: Option<i64>,
}

impl DayReading {
    pub fn single(value: i64) -> DayReading {
        DayReading {
            primary: value,
            secondary: None,
        }
    }

    pub fn in_out(gold_in: i64, gold_out: i64) -> DayReading {
        DayReading {
            primary: gold_in,
            secondary: Some(gold_out),
        }
    }
}

/// Pure `date -> value` lookup that defaults to zero for days with no record.
pub trait MetricAccessor {
    fn channels(&self) -> Channels;
    fn day_value(&self, date: &CalendarDate) -> DayReading;
}

/// Sum of `stack_count * sale_price` over the stacks shipped that day.
pub struct ShippedValue<'a>(pub &'a HashMap<CalendarDate, Vec<TrackedItemStack>>);

impl MetricAccessor for ShippedValue<'_> {
    fn channels(&self) -> Channels {
        Channels::Single
    }

    fn day_value(&self, date: &CalendarDate) -> DayReading {
        let total = self
            .0
            .get(date)
            .map(|stacks| stacks.iter().map(TrackedItemStack::total_sale_price).sum::<i64>())
            .unwrap_or(0);
        DayReading::single(total)
    }
}

/// End-of-day wallet balance.
pub struct WalletBalance<'a>(pub &'a HashMap<CalendarDate, GoldInOut>);

impl MetricAccessor for WalletBalance<'_> {
    fn channels(&self) -> Channels {
        Channels::Single
    }

    fn day_value(&self, date: &CalendarDate) -> DayReading {
        DayReading::single(self.0.get(date).map_or(0, |gold| gold.wallet))
    }
}

/// Gold in and gold out, the latter always as a non-negative magnitude.
pub struct CashFlow<'a>(pub &'a HashMap<CalendarDate, GoldInOut>);

impl MetricAccessor for CashFlow<'_> {
    fn channels(&self) -> Channels {
        Channels::InOut
    }

    fn day_value(&self, date: &CalendarDate) -> DayReading {
        self.0
            .get(date)
            .map_or(DayReading::in_out(0, 0), |gold| {
                DayReading::in_out(gold.gold_in, gold.expense())
            })
    }
}
