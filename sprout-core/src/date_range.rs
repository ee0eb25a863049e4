use crate::calendar_date::{CalendarDate, Season};

/// A date range iterator that yields each in-game day from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> DateRange {
        DateRange {
            next: Some(start),
            end,
        }
    }

    /// Every day of one season, day 1 through day 28.
    pub fn season(year: u32, season: Season) -> DateRange {
        DateRange::new(
            CalendarDate::start_of_season(year, season),
            CalendarDate::end_of_season(year, season),
        )
    }
}

impl Iterator for DateRange {
    type Item = CalendarDate;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use crate::calendar_date::{CalendarDate, Season, DAYS_PER_SEASON};

    #[test]
    fn test_date_range_iteration() {
        let start = CalendarDate::from_parts(1, Season::Spring, 1);
        let end = CalendarDate::from_parts(1, Season::Spring, 5);
        let dates: Vec<CalendarDate> = DateRange::new(start, end).collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[4], end);
    }

    #[test]
    fn test_date_range_crosses_year_boundary() {
        let start = CalendarDate::from_parts(1, Season::Winter, 27);
        let end = CalendarDate::from_parts(2, Season::Spring, 2);
        let dates: Vec<CalendarDate> = DateRange::new(start, end).collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[2], CalendarDate::from_parts(2, Season::Spring, 1));
    }

    #[test]
    fn test_season_range_has_every_day() {
        let dates: Vec<CalendarDate> = DateRange::season(4, Season::Fall).collect();
        assert_eq!(dates.len(), DAYS_PER_SEASON as usize);
        assert!(dates.iter().all(|d| d.season() == Season::Fall && d.year() == 4));
    }

    #[test]
    fn test_season_range_in_last_year() {
        let dates: Vec<CalendarDate> = DateRange::season(u32::MAX, Season::Winter).collect();
        assert_eq!(dates.len(), DAYS_PER_SEASON as usize);
        assert_eq!(dates[27], CalendarDate::end_of_season(u32::MAX, Season::Winter));
    }

    #[test]
    fn test_date_range_empty() {
        let start = CalendarDate::from_parts(1, Season::Summer, 15);
        let end = CalendarDate::from_parts(1, Season::Summer, 14);
        assert_eq!(DateRange::new(start, end).count(), 0);
    }
}
