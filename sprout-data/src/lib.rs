//! Hierarchical aggregation of tracked shipping and gold data.
//!
//! A calendar tree (year, season, day) is walked twice per metric: once to
//! find the largest value at each level, then again to build display
//! elements whose bars are scaled against those maxima.

pub mod aggregator;
pub mod bounds;
pub mod display;
pub mod element;
pub mod metric;
pub mod operation;
pub mod render;
pub mod today;
pub mod tree;
pub mod view;

pub use aggregator::{recompute, AggregatedView, AggregationParams, MetricView};
pub use bounds::{Bounds, BoundsPass, LevelMaxima};
pub use display::{BarLayout, DisplayConfig, SeasonTints};
pub use element::{
    Bar, DayElement, DayStatus, PeriodStatus, RootElement, SeasonElement, YearElement,
};
pub use metric::{CashFlow, DayReading, Metric, MetricAccessor, ShippedValue, WalletBalance};
pub use operation::{AggValue, Channels, Operation, UnknownOperation};
pub use render::RenderPass;
pub use today::TodaySummary;
pub use tree::{CalendarVisitor, RootNode, TreeLevel, YearFilter};
pub use view::{ShipmentTab, ViewError, ViewState, YearOption, YearSelection};
