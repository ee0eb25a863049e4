//! First pass: find the largest aggregate at each level so the rendering pass
//! can scale bars without a third walk.

use crate::metric::MetricAccessor;
use crate::operation::{AggValue, Channels, Operation};
use crate::tree::{CalendarVisitor, DayNode, RootNode, SeasonNode, TreeLevel, YearNode};
use serde::Serialize;
use sprout_core::CalendarDate;

/// Largest value seen at each level of the tree.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize)]
pub struct LevelMaxima {
    pub day: i64,
    pub season: i64,
    pub year: i64,
}

impl LevelMaxima {
    pub fn at(&self, level: TreeLevel) -> i64 {
        match level {
            TreeLevel::Day => self.day,
            TreeLevel::Season => self.season,
            TreeLevel::Year => self.year,
        }
    }

    fn record(&mut self, level: TreeLevel, value: i64) {
        let slot = match level {
            TreeLevel::Day => &mut self.day,
            TreeLevel::Season => &mut self.season,
            TreeLevel::Year => &mut self.year,
        };
        *slot = (*slot).max(value);
    }

    /// Every level raised to at least 1 so it can be used as a divisor.
    fn floored(self) -> LevelMaxima {
        LevelMaxima {
            day: self.day.max(1),
            season: self.season.max(1),
            year: self.year.max(1),
        }
    }
}

/// Per-level maxima for one metric; `secondary` is the out channel of in/out metrics.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Bounds {
    pub primary: LevelMaxima,
    pub secondary: Option<LevelMaxima>,
}

impl Bounds {
    /// Divisor for bar heights at `level`.
    ///
    /// In and out bars share one scale so their heights are comparable.
    pub fn scale_at(&self, level: TreeLevel) -> i64 {
        let secondary = self.secondary.map_or(0, |maxima| maxima.at(level));
        self.primary.at(level).max(secondary)
    }
}

/// Post-order walk that aggregates exactly like the rendering pass and keeps
/// only the per-level maxima.
pub struct BoundsPass<'a, A: MetricAccessor> {
    operation: Operation,
    today: CalendarDate,
    accessor: &'a A,
    channels: Channels,
    primary: LevelMaxima,
    secondary: LevelMaxima,
}

impl<'a, A: MetricAccessor> BoundsPass<'a, A> {
    pub fn new(operation: Operation, today: CalendarDate, accessor: &'a A) -> Self {
        BoundsPass {
            operation,
            today,
            accessor,
            channels: accessor.channels(),
            primary: LevelMaxima::default(),
            secondary: LevelMaxima::default(),
        }
    }

    /// Walk `root` and return the floored maxima.
    pub fn run(
        operation: Operation,
        today: CalendarDate,
        accessor: &'a A,
        root: &RootNode,
    ) -> Bounds {
        root.walk(&mut BoundsPass::new(operation, today, accessor))
    }

    fn record(&mut self, level: TreeLevel, value: &AggValue) {
        self.primary.record(level, value.value);
        if let Some(out) = value.secondary {
            self.secondary.record(level, out);
        }
    }

    fn combine(&mut self, level: TreeLevel, children: &[AggValue]) -> AggValue {
        let aggregated = AggValue::aggregate(self.operation, children, self.channels);
        self.record(level, &aggregated);
        aggregated
    }
}

impl<A: MetricAccessor> CalendarVisitor for BoundsPass<'_, A> {
    type Day = AggValue;
    type Season = AggValue;
    type Year = AggValue;
    type Root = Bounds;

    fn visit_day(&mut self, day: &DayNode) -> AggValue {
        let reading = self.accessor.day_value(&day.date);
        let value = AggValue::day(reading.primary, reading.secondary, day.date < self.today);
        // today and future days are drawn at fixed heights and never scaled
        if value.is_valid {
            self.record(TreeLevel::Day, &value);
        }
        value
    }

    fn visit_season(&mut self, _: &SeasonNode, days: Vec<AggValue>) -> AggValue {
        self.combine(TreeLevel::Season, &days)
    }

    fn visit_year(&mut self, _: &YearNode, seasons: Vec<AggValue>) -> AggValue {
        self.combine(TreeLevel::Year, &seasons)
    }

    fn visit_root(&mut self, _: &RootNode, _: Vec<AggValue>) -> Bounds {
        Bounds {
            primary: self.primary.floored(),
            secondary: match self.channels {
                Channels::Single => None,
                Channels::InOut => Some(self.secondary.floored()),
            },
        }
    }
}
