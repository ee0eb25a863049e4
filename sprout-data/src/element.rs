//! Display-ready output of the rendering pass, one element per calendar node.

use crate::display::BarLayout;
use crate::operation::AggValue;
use serde::Serialize;
use sprout_core::{CalendarDate, Season};

/// Where a day sits relative to the current date.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum DayStatus {
    /// Fully elapsed; its data counts toward every ancestor
    Past,
    /// Still in progress; data is only saved at the end of the day
    Today,
    Future,
}

impl DayStatus {
    pub fn classify(date: &CalendarDate, today: &CalendarDate) -> DayStatus {
        if date < today {
            DayStatus::Past
        } else if date == today {
            DayStatus::Today
        } else {
            DayStatus::Future
        }
    }
}

/// Where a season or year sits relative to the current date.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum PeriodStatus {
    Elapsed,
    InProgress,
    Future,
}

/// One bar: its size and color.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Bar {
    pub layout: BarLayout,
    pub tint: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct DayElement {
    pub date: CalendarDate,
    pub value: AggValue,
    pub status: DayStatus,
    pub label: String,
    pub tooltip: String,
    /// The single-value bar, or the "in" bar for cash flow
    pub bar: Bar,
    /// The "out" bar for cash flow
    pub out_bar: Option<Bar>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct SeasonElement {
    pub year: u32,
    pub season: Season,
    pub value: AggValue,
    pub status: PeriodStatus,
    pub label: String,
    pub tooltip: String,
    pub bar: Bar,
    pub out_bar: Option<Bar>,
    /// Day 1 through day 28
    pub days: Vec<DayElement>,
    pub days_newest_first: Vec<DayElement>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct YearElement {
    pub year: u32,
    pub value: AggValue,
    pub status: PeriodStatus,
    pub label: String,
    pub tooltip: String,
    pub bar: Bar,
    pub out_bar: Option<Bar>,
    pub seasons: Vec<SeasonElement>,
    pub seasons_newest_first: Vec<SeasonElement>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RootElement {
    pub value: AggValue,
    /// The headline number: the aggregate for single-value metrics, in minus out for cash flow
    pub total: i64,
    /// In minus out, cash flow only
    pub net: Option<i64>,
    pub text: String,
    pub tooltip: Option<String>,
    pub years: Vec<YearElement>,
    pub years_newest_first: Vec<YearElement>,
}

impl RootElement {
    pub fn find_day(&self, date: &CalendarDate) -> Option<&DayElement> {
        self.years
            .iter()
            .find(|year| year.year == date.year())
            .and_then(|year| year.seasons.iter().find(|s| s.season == date.season()))
            .and_then(|season| season.days.iter().find(|d| d.date == *date))
    }

    pub fn find_season(&self, year: u32, season: Season) -> Option<&SeasonElement> {
        self.find_year(year)
            .and_then(|y| y.seasons.iter().find(|s| s.season == season))
    }

    pub fn find_year(&self, year: u32) -> Option<&YearElement> {
        self.years.iter().find(|y| y.year == year)
    }
}

/// Copy of `items` in reverse order, for newest-first presentation.
pub(crate) fn reversed<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{reversed, DayStatus};
    use sprout_core::{CalendarDate, Season};

    #[test]
    fn test_classify_day() {
        let today = CalendarDate::from_parts(2, Season::Summer, 10);
        let classify =
            |d| DayStatus::classify(&CalendarDate::from_parts(2, Season::Summer, d), &today);
        assert_eq!(classify(9), DayStatus::Past);
        assert_eq!(classify(10), DayStatus::Today);
        assert_eq!(classify(11), DayStatus::Future);
        assert_eq!(
            DayStatus::classify(&CalendarDate::from_parts(1, Season::Winter, 28), &today),
            DayStatus::Past
        );
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed(&[1, 2, 3]), vec![3, 2, 1]);
        assert!(reversed::<u8>(&[]).is_empty());
    }
}
