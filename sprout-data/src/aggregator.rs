//! Runs both passes for every metric over one shared calendar tree.

use crate::bounds::{Bounds, BoundsPass};
use crate::display::DisplayConfig;
use crate::element::{RootElement, YearElement};
use crate::metric::{CashFlow, Metric, MetricAccessor, ShippedValue, WalletBalance};
use crate::operation::Operation;
use crate::render::RenderPass;
use crate::tree::{RootNode, YearFilter};
use log::{debug, log_enabled, trace, Level};
use serde::Serialize;
use sprout_core::{CalendarDate, TrackedData};

/// Everything one computation depends on besides the data itself.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AggregationParams {
    pub operation: Operation,
    pub years: YearFilter,
    /// Captured once; every day in the computation is classified against it
    pub today: CalendarDate,
}

/// The rendered tree and its bounds for one metric.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct MetricView {
    pub metric: Metric,
    pub bounds: Bounds,
    pub root: RootElement,
}

impl MetricView {
    pub fn years(&self) -> &[YearElement] {
        &self.root.years
    }

    pub fn years_newest_first(&self) -> &[YearElement] {
        &self.root.years_newest_first
    }

    pub fn total(&self) -> i64 {
        self.root.total
    }

    pub fn text(&self) -> &str {
        &self.root.text
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct AggregatedView {
    pub shipped: MetricView,
    pub wallet: MetricView,
    pub cash_flow: MetricView,
}

impl AggregatedView {
    pub fn metric(&self, metric: Metric) -> &MetricView {
        match metric {
            Metric::Shipped => &self.shipped,
            Metric::Wallet => &self.wallet,
            Metric::CashFlow => &self.cash_flow,
        }
    }
}

fn compute_metric<A: MetricAccessor>(
    metric: Metric,
    accessor: &A,
    tree: &RootNode,
    params: &AggregationParams,
    config: &DisplayConfig,
) -> MetricView {
    let bounds = BoundsPass::run(params.operation, params.today, accessor, tree);
    debug!("{metric} bounds: {bounds:?}");
    let root = RenderPass::new(params.operation, params.today, accessor, bounds, config).run(tree);
    MetricView {
        metric,
        bounds,
        root,
    }
}

/// Build the calendar tree for `params` and compute all three metric views.
pub fn recompute(
    data: &TrackedData,
    params: &AggregationParams,
    config: &DisplayConfig,
) -> AggregatedView {
    debug!(
        "Recomputing: operation={} years={:?} today={}",
        params.operation, params.years, params.today
    );
    let tree = RootNode::build(&params.years, params.today.year());
    debug!(
        "Calendar tree: {} years, {} days",
        tree.years.len(),
        tree.day_count()
    );

    let view = AggregatedView {
        shipped: compute_metric(
            Metric::Shipped,
            &ShippedValue(&data.shipped),
            &tree,
            params,
            config,
        ),
        wallet: compute_metric(
            Metric::Wallet,
            &WalletBalance(&data.gold),
            &tree,
            params,
            config,
        ),
        cash_flow: compute_metric(Metric::CashFlow, &CashFlow(&data.gold), &tree, params, config),
    };
    if log_enabled!(Level::Trace) {
        log_grid_structures(&view);
    }
    view
}

/// Dump every element's layout, tint and tooltip at trace level.
pub fn log_grid_structures(view: &AggregatedView) {
    for metric_view in [&view.shipped, &view.wallet, &view.cash_flow] {
        trace!("{} grid: {}", metric_view.metric, metric_view.text());
        for year in metric_view.years() {
            trace!(
                "  Year {} - {} {} - {:?}",
                year.year,
                year.bar.layout,
                year.bar.tint,
                year.tooltip
            );
            for season in &year.seasons {
                trace!(
                    "    {} - {} {} - {:?}",
                    season.label,
                    season.bar.layout,
                    season.bar.tint,
                    season.tooltip
                );
                for day in &season.days {
                    trace!(
                        "      {} - {} {} - {:?}",
                        day.date,
                        day.bar.layout,
                        day.bar.tint,
                        day.tooltip
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{recompute, AggregationParams};
    use crate::display::DisplayConfig;
    use crate::metric::Metric;
    use crate::operation::Operation;
    use crate::tree::YearFilter;
    use sprout_core::{CalendarDate, GoldInOut, Season, TrackedData, TrackedItemStack};

    fn date(year: u32, season: Season, day: u32) -> CalendarDate {
        CalendarDate::from_parts(year, season, day)
    }

    fn sample_data() -> TrackedData {
        let mut data = TrackedData::default();
        let shipments = [
            (date(1, Season::Spring, 1), TrackedItemStack::new("24", 10, 50)),
            (date(1, Season::Spring, 2), TrackedItemStack::new("188", 5, 300)),
            (date(2, Season::Winter, 28), TrackedItemStack::new("24", 1, 35)),
        ];
        for (day, stack) in shipments {
            data.record_shipment(day, vec![stack]);
        }
        data.record_gold(date(1, Season::Spring, 1), GoldInOut::new(500, -200, 800));
        data.record_gold(date(1, Season::Spring, 2), GoldInOut::new(1500, -100, 2200));
        data.record_gold(date(2, Season::Winter, 28), GoldInOut::new(35, 0, 2235));
        data
    }

    fn params(operation: Operation, years: YearFilter) -> AggregationParams {
        AggregationParams {
            operation,
            years,
            today: date(3, Season::Spring, 1),
        }
    }

    #[test]
    fn test_recompute_all_metrics() {
        let data = sample_data();
        let view = recompute(
            &data,
            &params(Operation::Sum, YearFilter::All),
            &DisplayConfig::default(),
        );
        assert_eq!(view.shipped.years().len(), 3);
        assert_eq!(view.shipped.total(), 500 + 1500 + 35);
        assert_eq!(view.shipped.text(), "Overall Sum: 2,035g");
        assert_eq!(view.cash_flow.root.net, Some(2035 - 300));
        assert_eq!(view.cash_flow.text(), "Sum Cash Flow");
        assert_eq!(view.metric(Metric::Wallet).metric, Metric::Wallet);
        assert_eq!(view.shipped.years_newest_first()[0].year, 3);
    }

    #[test]
    fn test_year_filter_limits_data() {
        let data = sample_data();
        let filter = YearFilter::from_selected(&[2]);
        let view = recompute(&data, &params(Operation::Sum, filter), &DisplayConfig::default());
        assert_eq!(view.shipped.years().len(), 1);
        assert_eq!(view.shipped.total(), 35);
        assert_eq!(view.wallet.bounds.primary.year, 2235);
    }

    #[test]
    fn test_wallet_end_across_years() {
        let data = sample_data();
        let view = recompute(
            &data,
            &params(Operation::End, YearFilter::All),
            &DisplayConfig::default(),
        );
        // year 3 has no elapsed days, so End falls back to year 2
        assert_eq!(view.wallet.total(), 2235);
    }

    #[test]
    fn test_empty_data_and_selection() {
        let view = recompute(
            &TrackedData::default(),
            &params(Operation::Average, YearFilter::from_selected(&[])),
            &DisplayConfig::default(),
        );
        assert!(view.shipped.years().is_empty());
        assert_eq!(view.shipped.total(), 0);
        assert_eq!(view.cash_flow.root.net, Some(0));
    }
}
