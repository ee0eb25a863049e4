use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days in every in-game season.
pub const DAYS_PER_SEASON: u32 = 28;

/// Number of seasons in an in-game year.
pub const SEASONS_PER_YEAR: usize = 4;

/// The four seasons of an in-game year, in calendar order.
///
/// The derived `Ord` follows declaration order, so `Spring < Summer < Fall < Winter`.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; SEASONS_PER_YEAR] =
        [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Zero-based position of the season within the year.
    pub fn ordinal(&self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// The season after this one, or `None` for Winter.
    pub fn next(&self) -> Option<Season> {
        Season::ALL.get(self.ordinal() + 1).copied()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = CalendarDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalendarDateError::UnknownSeason(trimmed.to_string()))
    }
}

/// Errors produced when reading a calendar date from text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CalendarDateError {
    /// The text was not of the form `<year>-<season>-<day>`.
    Format(String),
    UnknownSeason(String),
    /// Year was zero or day was outside `1..=28`.
    OutOfRange { year: u32, day: u32 },
}

impl fmt::Display for CalendarDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarDateError::Format(text) => {
                write!(f, "calendar date '{text}' must look like 3-Summer-12")
            }
            CalendarDateError::UnknownSeason(text) => write!(f, "unknown season '{text}'"),
            CalendarDateError::OutOfRange { year, day } => write!(
                f,
                "year {year} / day {day} out of range (year >= 1, day 1..={DAYS_PER_SEASON})"
            ),
        }
    }
}

impl std::error::Error for CalendarDateError {}

/// One in-game day: year (from 1), season, and day of the season (1 to 28).
///
/// Field order matters: the derived ordering compares year, then season, then day.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: u32,
    season: Season,
    day: u32,
}

impl CalendarDate {
    /// Build a date, returning `None` when the year is zero or the day is not in `1..=28`.
    pub fn new(year: u32, season: Season, day: u32) -> Option<CalendarDate> {
        if year == 0 || day == 0 || day > DAYS_PER_SEASON {
            return None;
        }
        Some(CalendarDate { year, season, day })
    }

    /// Build a date from parts that are known to be in range.
    ///
    /// # Panics
    /// Panics if the year is zero or the day is not in `1..=28`.
    pub fn from_parts(year: u32, season: Season, day: u32) -> CalendarDate {
        match CalendarDate::new(year, season, day) {
            Some(date) => date,
            None => panic!("invalid calendar date: {year}-{season}-{day}"),
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// First day of the given season.
    pub fn start_of_season(year: u32, season: Season) -> CalendarDate {
        CalendarDate::from_parts(year, season, 1)
    }

    /// Last day of the given season.
    pub fn end_of_season(year: u32, season: Season) -> CalendarDate {
        CalendarDate::from_parts(year, season, DAYS_PER_SEASON)
    }

    /// The following day, rolling over seasons and years.
    ///
    /// `None` only after Winter 28 of the largest representable year.
    pub fn next_day(&self) -> Option<CalendarDate> {
        if self.day < DAYS_PER_SEASON {
            return Some(CalendarDate {
                day: self.day + 1,
                ..*self
            });
        }
        match self.season.next() {
            Some(season) => Some(CalendarDate::start_of_season(self.year, season)),
            None => self
                .year
                .checked_add(1)
                .map(|year| CalendarDate::start_of_season(year, Season::Spring)),
        }
    }

    pub fn is_before(&self, other: &CalendarDate) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self > other
    }

    /// True when this date falls in the same season of the same year as `other`.
    pub fn same_season_as(&self, other: &CalendarDate) -> bool {
        self.year == other.year && self.season == other.season
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.season, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [year, season, day] = parts.as_slice() else {
            return Err(CalendarDateError::Format(s.to_string()));
        };
        let year = year
            .trim()
            .parse::<u32>()
            .map_err(|_| CalendarDateError::Format(s.to_string()))?;
        let season = season.parse::<Season>()?;
        let day = day
            .trim()
            .parse::<u32>()
            .map_err(|_| CalendarDateError::Format(s.to_string()))?;
        CalendarDate::new(year, season, day).ok_or(CalendarDateError::OutOfRange { year, day })
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}
