//! Year, season and day rows of one metric's chart, as text or CSV.

use crate::input::{apply_selection, load};
use crate::{GridFormat, InputArgs, SelectionArgs};
use log::info;
use serde::Serialize;
use sprout_data::{
    AggValue, Bar, DayElement, Metric, MetricView, SeasonElement, YearElement,
};
use sprout_utils::numbers::format_gold_number;
use std::io;

/// One chart element flattened for CSV output.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub metric: String,
    pub level: &'static str,
    pub year: u32,
    pub season: Option<String>,
    pub day: Option<u32>,
    pub status: String,
    pub valid: bool,
    pub days_covered: u32,
    pub value: i64,
    pub out_value: Option<i64>,
    pub height: u32,
    pub out_height: Option<u32>,
    pub tint: String,
    pub tooltip: String,
}

impl GridRow {
    fn new(
        metric: Metric,
        level: &'static str,
        value: &AggValue,
        bar: &Bar,
        out_bar: Option<&Bar>,
        status: String,
        tooltip: &str,
    ) -> GridRow {
        GridRow {
            metric: metric.to_string(),
            level,
            year: 0,
            season: None,
            day: None,
            status,
            valid: value.is_valid,
            days_covered: value.total_days_covered,
            value: value.value,
            out_value: value.secondary,
            height: bar.layout.height,
            out_height: out_bar.map(|bar| bar.layout.height),
            tint: bar.tint.clone(),
            tooltip: tooltip.to_string(),
        }
    }

    fn from_year(metric: Metric, year: &YearElement) -> GridRow {
        GridRow {
            year: year.year,
            ..GridRow::new(
                metric,
                "year",
                &year.value,
                &year.bar,
                year.out_bar.as_ref(),
                format!("{:?}", year.status),
                &year.tooltip,
            )
        }
    }

    fn from_season(metric: Metric, season: &SeasonElement) -> GridRow {
        GridRow {
            year: season.year,
            season: Some(season.season.to_string()),
            ..GridRow::new(
                metric,
                "season",
                &season.value,
                &season.bar,
                season.out_bar.as_ref(),
                format!("{:?}", season.status),
                &season.tooltip,
            )
        }
    }

    fn from_day(metric: Metric, day: &DayElement) -> GridRow {
        GridRow {
            year: day.date.year(),
            season: Some(day.date.season().to_string()),
            day: Some(day.date.day()),
            ..GridRow::new(
                metric,
                "day",
                &day.value,
                &day.bar,
                day.out_bar.as_ref(),
                format!("{:?}", day.status),
                &day.tooltip,
            )
        }
    }
}

/// Every element of `view`, each year followed by its seasons and their days.
pub fn grid_rows(view: &MetricView) -> Vec<GridRow> {
    let mut rows = Vec::new();
    for year in view.years() {
        rows.push(GridRow::from_year(view.metric, year));
        for season in &year.seasons {
            rows.push(GridRow::from_season(view.metric, season));
            rows.extend(season.days.iter().map(|day| GridRow::from_day(view.metric, day)));
        }
    }
    rows
}

fn value_text(value: &AggValue) -> String {
    if !value.is_valid {
        return "-".to_string();
    }
    match value.secondary {
        Some(out) => format!(
            "{} in / {} out",
            format_gold_number(value.value),
            format_gold_number(out)
        ),
        None => format_gold_number(value.value),
    }
}

fn bar_text(bar: &Bar) -> String {
    "#".repeat((bar.layout.height / 8) as usize)
}

fn print_text(view: &MetricView, days: bool) {
    println!("{}", view.text());
    for year in view.years_newest_first() {
        println!(
            "Y-{:<4} {:>28} {}",
            year.year,
            value_text(&year.value),
            bar_text(&year.bar)
        );
        for season in &year.seasons {
            println!(
                "  {:<8} {:>26} {}",
                season.label,
                value_text(&season.value),
                bar_text(&season.bar)
            );
            if days {
                for day in &season.days {
                    println!(
                        "    {:<8} {:>24} {}",
                        day.label,
                        value_text(&day.value),
                        bar_text(&day.bar)
                    );
                }
            }
        }
    }
}

fn write_csv(rows: &[GridRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run_grid(
    input: &InputArgs,
    selection: &SelectionArgs,
    format: GridFormat,
    days: bool,
) -> anyhow::Result<()> {
    let loaded = load(input)?;
    let mut state = loaded.view_state();
    let view = apply_selection(&mut state, selection)?;
    let Some(metric) = state.tab.metric() else {
        anyhow::bail!("The {} tab has no chart; use the today command instead", state.tab);
    };
    let metric_view = view.metric(metric);

    match format {
        GridFormat::Text => print_text(metric_view, days),
        GridFormat::Csv => {
            let rows = grid_rows(metric_view);
            info!("Writing {} grid rows for {metric}", rows.len());
            write_csv(&rows)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::grid_rows;
    use sprout_core::{CalendarDate, GoldInOut, Season, TrackedData};
    use sprout_data::{recompute, AggregationParams, DisplayConfig, Operation, YearFilter};

    #[test]
    fn test_grid_rows_cover_every_element() {
        let mut data = TrackedData::default();
        data.record_gold(
            CalendarDate::from_parts(1, Season::Spring, 1),
            GoldInOut::new(100, -40, 60),
        );
        let params = AggregationParams {
            operation: Operation::Sum,
            years: YearFilter::from_selected(&[1]),
            today: CalendarDate::from_parts(1, Season::Summer, 1),
        };
        let view = recompute(&data, &params, &DisplayConfig::default());
        let rows = grid_rows(&view.cash_flow);
        assert_eq!(rows.len(), 1 + 4 + 4 * 28);
        assert_eq!(rows[0].level, "year");
        assert_eq!(rows[1].level, "season");
        assert_eq!(rows[1].season.as_deref(), Some("Spring"));
        assert_eq!(rows[2].day, Some(1));
        assert_eq!(rows[2].value, 100);
        assert_eq!(rows[2].out_value, Some(40));
        assert_eq!(rows[2].status, "Past");
        assert_eq!(rows[0].status, "InProgress");
    }

    #[test]
    fn test_grid_rows_serialize_to_csv() {
        let data = TrackedData::default();
        let params = AggregationParams {
            operation: Operation::Max,
            years: YearFilter::from_selected(&[2]),
            today: CalendarDate::from_parts(1, Season::Spring, 1),
        };
        let view = recompute(&data, &params, &DisplayConfig::default());
        let mut writer = csv::Writer::from_writer(vec![]);
        for row in grid_rows(&view.shipped) {
            writer.serialize(row).unwrap();
        }
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("metric,level,year,season,day,status"));
        assert!(lines.next().unwrap().starts_with("Shipped,year,2,,,Future,false,0,0,"));
        assert_eq!(text.lines().count(), 1 + 1 + 4 + 112);
    }
}
