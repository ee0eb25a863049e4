//! Second pass: aggregate again and turn every node into a display element.

use crate::bounds::Bounds;
use crate::display::DisplayConfig;
use crate::element::{
    reversed, Bar, DayElement, DayStatus, PeriodStatus, RootElement, SeasonElement, YearElement,
};
use crate::metric::MetricAccessor;
use crate::operation::{AggValue, Channels, Operation};
use crate::tree::{CalendarVisitor, DayNode, RootNode, SeasonNode, TreeLevel, YearNode};
use sprout_core::CalendarDate;
use sprout_utils::numbers::format_gold_number;

const TODAY_TOOLTIP: &str = "Today! Check back tomorrow. (Data is saved at the end of the day.)";
const FUTURE_TOOLTIP: &str = "The Future! No data yet!";

/// Builds the element tree for one metric, scaling bars by `bounds`.
pub struct RenderPass<'a, A: MetricAccessor> {
    operation: Operation,
    today: CalendarDate,
    accessor: &'a A,
    channels: Channels,
    bounds: Bounds,
    config: &'a DisplayConfig,
}

/// Colors for an in/out pair, or for the only bar of a single-value metric.
struct Tints<'t> {
    primary: &'t str,
    out: &'t str,
}

impl<'a, A: MetricAccessor> RenderPass<'a, A> {
    pub fn new(
        operation: Operation,
        today: CalendarDate,
        accessor: &'a A,
        bounds: Bounds,
        config: &'a DisplayConfig,
    ) -> Self {
        RenderPass {
            operation,
            today,
            accessor,
            channels: accessor.channels(),
            bounds,
            config,
        }
    }

    pub fn run(&mut self, root: &RootNode) -> RootElement {
        root.walk(self)
    }

    fn bars(&self, value: &AggValue, level: TreeLevel, tints: Tints<'_>) -> (Bar, Option<Bar>) {
        let scale = self.bounds.scale_at(level);
        let bar = Bar {
            layout: self.config.layout(self.config.bar_height(value.value, scale)),
            tint: tints.primary.to_string(),
        };
        let out_bar = match self.channels {
            Channels::Single => None,
            Channels::InOut => Some(Bar {
                layout: self
                    .config
                    .layout(self.config.bar_height(value.secondary.unwrap_or(0), scale)),
                tint: tints.out.to_string(),
            }),
        };
        (bar, out_bar)
    }

    fn fixed_bars(&self, height: u32, out_height: u32, tint: &str) -> (Bar, Option<Bar>) {
        let bar = Bar {
            layout: self.config.layout(height),
            tint: tint.to_string(),
        };
        let out_bar = match self.channels {
            Channels::Single => None,
            Channels::InOut => Some(Bar {
                layout: self.config.layout(out_height),
                tint: tint.to_string(),
            }),
        };
        (bar, out_bar)
    }

    /// In/Out lines for cash flow, led by a Net line when `with_net` is set.
    fn in_out_lines(&self, value: &AggValue, with_net: bool) -> String {
        let gold_in = value.value;
        let gold_out = value.secondary.unwrap_or(0);
        let mut lines = Vec::with_capacity(3);
        if with_net {
            lines.push(format!("Net: {}", format_gold_number(gold_in - gold_out)));
        }
        lines.push(format!("In: {}", format_gold_number(gold_in)));
        lines.push(format!("Out: {}", format_gold_number(gold_out)));
        lines.join("\n")
    }

    fn period_tooltip(
        &self,
        header: &str,
        period: &str,
        value: &AggValue,
        status: PeriodStatus,
    ) -> String {
        if status == PeriodStatus::Future {
            return format!("{header}: {period} in the future!");
        }
        let body = match self.channels {
            Channels::Single => format!("{header}: {}", format_gold_number(value.value)),
            // Min/Max may take in and out from different children
            Channels::InOut => format!(
                "{header}:\n{}",
                self.in_out_lines(value, !self.operation.is_extremum())
            ),
        };
        match status {
            PeriodStatus::InProgress => format!("{body}\n({period} in progress)"),
            _ => body,
        }
    }

    fn period_tints<'t>(&'t self, status: PeriodStatus, elapsed: &'t str) -> Tints<'t> {
        match (status, self.channels) {
            (PeriodStatus::InProgress, _) => Tints {
                primary: &self.config.today_tint,
                out: &self.config.today_tint,
            },
            (PeriodStatus::Future, _) => Tints {
                primary: &self.config.future_tint,
                out: &self.config.future_tint,
            },
            (PeriodStatus::Elapsed, Channels::Single) => Tints {
                primary: elapsed,
                out: elapsed,
            },
            (PeriodStatus::Elapsed, Channels::InOut) => Tints {
                primary: &self.config.cash_in_tint,
                out: &self.config.cash_out_tint,
            },
        }
    }
}

impl<A: MetricAccessor> CalendarVisitor for RenderPass<'_, A> {
    type Day = DayElement;
    type Season = SeasonElement;
    type Year = YearElement;
    type Root = RootElement;

    fn visit_day(&mut self, day: &DayNode) -> DayElement {
        let date = day.date;
        let reading = self.accessor.day_value(&date);
        let status = DayStatus::classify(&date, &self.today);
        let value = AggValue::day(reading.primary, reading.secondary, status == DayStatus::Past);
        let label = format!("{}-{}", date.season(), date.day());

        let (tooltip, (bar, out_bar)) = match status {
            DayStatus::Past => {
                let tooltip = match self.channels {
                    Channels::Single => format!("{label}: {}", format_gold_number(value.value)),
                    Channels::InOut => format!("{label}\n{}", self.in_out_lines(&value, true)),
                };
                let tints = match self.channels {
                    Channels::Single => {
                        let tint = self.config.season_tint(date.season());
                        Tints {
                            primary: tint,
                            out: tint,
                        }
                    }
                    Channels::InOut => Tints {
                        primary: &self.config.cash_in_tint,
                        out: &self.config.cash_out_tint,
                    },
                };
                (tooltip, self.bars(&value, TreeLevel::Day, tints))
            }
            DayStatus::Today => {
                let height = self.config.today_height();
                (
                    format!("{label}: {TODAY_TOOLTIP}"),
                    self.fixed_bars(height, height, &self.config.today_tint),
                )
            }
            DayStatus::Future => (
                format!("{label}: {FUTURE_TOOLTIP}"),
                self.fixed_bars(self.config.min_row_height, 0, &self.config.future_tint),
            ),
        };

        DayElement {
            date,
            value,
            status,
            label,
            tooltip,
            bar,
            out_bar,
        }
    }

    fn visit_season(&mut self, season: &SeasonNode, days: Vec<DayElement>) -> SeasonElement {
        let values: Vec<AggValue> = days.iter().map(|day| day.value).collect();
        let value = AggValue::aggregate(self.operation, &values, self.channels);
        let first_day = CalendarDate::start_of_season(season.year, season.season);
        let status = if first_day.same_season_as(&self.today) {
            PeriodStatus::InProgress
        } else if value.is_valid {
            PeriodStatus::Elapsed
        } else {
            PeriodStatus::Future
        };

        let header = format!("{} Y-{} {}", season.season, season.year, self.operation);
        let tooltip = self.period_tooltip(&header, "Season", &value, status);
        let tints = self.period_tints(status, self.config.season_tint(season.season));
        let (bar, out_bar) = self.bars(&value, TreeLevel::Season, tints);

        SeasonElement {
            year: season.year,
            season: season.season,
            value,
            status,
            label: season.season.to_string(),
            tooltip,
            bar,
            out_bar,
            days_newest_first: reversed(&days),
            days,
        }
    }

    fn visit_year(&mut self, year: &YearNode, seasons: Vec<SeasonElement>) -> YearElement {
        let values: Vec<AggValue> = seasons.iter().map(|season| season.value).collect();
        let value = AggValue::aggregate(self.operation, &values, self.channels);
        let status = if self.today.year() == year.year {
            PeriodStatus::InProgress
        } else if value.is_valid {
            PeriodStatus::Elapsed
        } else {
            PeriodStatus::Future
        };

        let header = format!("Y-{} {}", year.year, self.operation);
        let tooltip = self.period_tooltip(&header, "Year", &value, status);
        let tints = self.period_tints(status, &self.config.year_tint);
        let (bar, out_bar) = self.bars(&value, TreeLevel::Year, tints);

        YearElement {
            year: year.year,
            value,
            status,
            label: year.year.to_string(),
            tooltip,
            bar,
            out_bar,
            seasons_newest_first: reversed(&seasons),
            seasons,
        }
    }

    fn visit_root(&mut self, _: &RootNode, years: Vec<YearElement>) -> RootElement {
        let values: Vec<AggValue> = years.iter().map(|year| year.value).collect();
        let value = AggValue::aggregate(self.operation, &values, self.channels);
        let net = value.net();
        let (total, text, tooltip) = match net {
            None => (
                value.value,
                format!("Overall {}: {}", self.operation, format_gold_number(value.value)),
                None,
            ),
            Some(net) => (
                net,
                format!("{} Cash Flow", self.operation),
                Some(format!(
                    "Overall {}:\n{}",
                    self.operation,
                    self.in_out_lines(&value, true)
                )),
            ),
        };

        RootElement {
            value,
            total,
            net,
            text,
            tooltip,
            years_newest_first: reversed(&years),
            years,
        }
    }
}
