//! Core types for SproutSight: in-game calendar dates and the shipping and
//! gold records collected for each day.

pub mod calendar_date;
pub mod date_range;
pub mod item_stack;
pub mod tracked;

pub use calendar_date::{CalendarDate, CalendarDateError, Season, DAYS_PER_SEASON, SEASONS_PER_YEAR};
pub use date_range::DateRange;
pub use item_stack::TrackedItemStack;
pub use tracked::{GoldInOut, TodayLedger, TrackedData, TrackedSnapshot};
