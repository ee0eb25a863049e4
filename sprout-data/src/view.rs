//! Tab, operation and year selection, recomputing the view on every change.

use crate::aggregator::{recompute, AggregatedView, AggregationParams};
use crate::display::DisplayConfig;
use crate::metric::Metric;
use crate::operation::Operation;
use crate::tree::YearFilter;
use log::info;
use serde::Serialize;
use sprout_core::{CalendarDate, TrackedData};
use std::fmt;
use std::str::FromStr;

/// Years selected when the view first opens.
pub const DEFAULT_YEARS_SELECTED: u32 = 5;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize)]
pub enum ShipmentTab {
    #[default]
    Today,
    Shipping,
    Wallet,
    CashFlow,
}

impl ShipmentTab {
    pub const ALL: [ShipmentTab; 4] = [
        ShipmentTab::Today,
        ShipmentTab::Shipping,
        ShipmentTab::Wallet,
        ShipmentTab::CashFlow,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ShipmentTab::Today => "Today",
            ShipmentTab::Shipping => "Shipping",
            ShipmentTab::Wallet => "Wallet",
            ShipmentTab::CashFlow => "Cash Flow",
        }
    }

    /// A wallet balance cannot be summed; shipments and cash flow have no end state.
    pub fn available_operations(&self) -> Vec<Operation> {
        let excluded = match self {
            ShipmentTab::Today => None,
            ShipmentTab::Wallet => Some(Operation::Sum),
            ShipmentTab::Shipping | ShipmentTab::CashFlow => Some(Operation::End),
        };
        Operation::ALL
            .into_iter()
            .filter(|op| Some(*op) != excluded)
            .collect()
    }

    pub fn default_operation(&self) -> Operation {
        match self {
            ShipmentTab::Wallet => Operation::End,
            _ => Operation::Sum,
        }
    }

    /// The metric charted on this tab; the Today tab has no chart.
    pub fn metric(&self) -> Option<Metric> {
        match self {
            ShipmentTab::Today => None,
            ShipmentTab::Shipping => Some(Metric::Shipped),
            ShipmentTab::Wallet => Some(Metric::Wallet),
            ShipmentTab::CashFlow => Some(Metric::CashFlow),
        }
    }
}

impl fmt::Display for ShipmentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ViewError {
    UnknownTab(String),
    OperationNotAvailable {
        tab: ShipmentTab,
        operation: Operation,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::UnknownTab(name) => write!(
                f,
                "unknown tab '{name}' (expected one of today, shipping, wallet, cashflow)"
            ),
            ViewError::OperationNotAvailable { tab, operation } => {
                write!(f, "{operation} is not available on the {tab} tab")
            }
        }
    }
}

impl std::error::Error for ViewError {}

impl FromStr for ShipmentTab {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "today" => Ok(ShipmentTab::Today),
            "shipping" | "shipped" => Ok(ShipmentTab::Shipping),
            "wallet" => Ok(ShipmentTab::Wallet),
            "cashflow" => Ok(ShipmentTab::CashFlow),
            _ => Err(ViewError::UnknownTab(s.trim().to_string())),
        }
    }
}

/// One checkbox in the year picker; year `0` is the "All" option.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct YearOption {
    pub year: u32,
    pub checked: bool,
}

impl YearOption {
    pub fn label(&self) -> String {
        if self.year == YearFilter::ALL_SENTINEL {
            "All".to_string()
        } else {
            format!("Y-{}", self.year)
        }
    }
}

/// The year picker: "All" first, then every year from the current one down to 1.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct YearSelection {
    options: Vec<YearOption>,
}

impl YearSelection {
    /// Options for `current_year` with the `selected` most recent years checked.
    pub fn new(current_year: u32, selected: u32) -> YearSelection {
        let mut options = vec![YearOption {
            year: YearFilter::ALL_SENTINEL,
            checked: false,
        }];
        options.extend((1..=current_year).rev().map(|year| YearOption {
            year,
            checked: current_year - year < selected,
        }));
        YearSelection { options }
    }

    pub fn with_defaults(current_year: u32) -> YearSelection {
        YearSelection::new(current_year, DEFAULT_YEARS_SELECTED)
    }

    pub fn options(&self) -> &[YearOption] {
        &self.options
    }

    /// Checked years, `0` standing for "All".
    pub fn selected(&self) -> Vec<u32> {
        self.options
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.year)
            .collect()
    }

    /// Toggle `year`. "All" clears every year; any year clears "All".
    ///
    /// Years that are not offered are ignored apart from clearing "All".
    pub fn toggle(&mut self, year: u32) {
        if year == YearFilter::ALL_SENTINEL {
            for option in &mut self.options {
                option.checked = option.year == YearFilter::ALL_SENTINEL && !option.checked;
            }
        } else {
            for option in &mut self.options {
                if option.year == YearFilter::ALL_SENTINEL {
                    option.checked = false;
                } else if option.year == year {
                    option.checked = !option.checked;
                }
            }
        }
    }

    /// Check exactly `years`; a `0` among them checks only "All".
    ///
    /// Returns the requested years that are not offered and were left out.
    pub fn select_only(&mut self, years: &[u32]) -> Vec<u32> {
        let all = years.contains(&YearFilter::ALL_SENTINEL);
        for option in &mut self.options {
            option.checked = if all {
                option.year == YearFilter::ALL_SENTINEL
            } else {
                years.contains(&option.year)
            };
        }
        if all {
            return Vec::new();
        }
        years
            .iter()
            .copied()
            .filter(|year| !self.options.iter().any(|option| option.year == *year))
            .collect()
    }

    pub fn filter(&self) -> YearFilter {
        YearFilter::from_selected(&self.selected())
    }
}

/// Selections driving the charts. Every change recomputes the whole view.
#[derive(Debug, Clone)]
pub struct ViewState<'a> {
    data: &'a TrackedData,
    config: &'a DisplayConfig,
    pub tab: ShipmentTab,
    pub operation: Operation,
    pub years: YearSelection,
    pub today: CalendarDate,
}

impl<'a> ViewState<'a> {
    pub fn new(data: &'a TrackedData, config: &'a DisplayConfig, today: CalendarDate) -> Self {
        let tab = ShipmentTab::default();
        ViewState {
            data,
            config,
            tab,
            operation: tab.default_operation(),
            years: YearSelection::with_defaults(today.year()),
            today,
        }
    }

    pub fn params(&self) -> AggregationParams {
        AggregationParams {
            operation: self.operation,
            years: self.years.filter(),
            today: self.today,
        }
    }

    pub fn recompute(&self) -> AggregatedView {
        recompute(self.data, &self.params(), self.config)
    }

    pub fn available_operations(&self) -> Vec<Operation> {
        self.tab.available_operations()
    }

    /// Switch tab and reset the operation to the tab's default.
    pub fn select_tab(&mut self, tab: ShipmentTab) -> AggregatedView {
        info!("Selecting tab {tab}");
        self.tab = tab;
        self.operation = tab.default_operation();
        self.recompute()
    }

    pub fn select_operation(&mut self, operation: Operation) -> Result<AggregatedView, ViewError> {
        if !self.tab.available_operations().contains(&operation) {
            return Err(ViewError::OperationNotAvailable {
                tab: self.tab,
                operation,
            });
        }
        info!("Selecting operation {operation}");
        self.operation = operation;
        Ok(self.recompute())
    }

    pub fn toggle_year(&mut self, year: u32) -> AggregatedView {
        info!("Toggling year {year}");
        self.years.toggle(year);
        self.recompute()
    }
}

#[cfg(test)]
mod tests {
    use super::{ShipmentTab, ViewError, ViewState, YearSelection};
    use crate::display::DisplayConfig;
    use crate::metric::Metric;
    use crate::operation::Operation;
    use crate::tree::YearFilter;
    use sprout_core::{CalendarDate, Season, TrackedData, TrackedItemStack};
    use std::collections::BTreeSet;

    #[test]
    fn test_tab_operations() {
        assert_eq!(ShipmentTab::Today.available_operations(), Operation::ALL.to_vec());
        assert!(!ShipmentTab::Wallet.available_operations().contains(&Operation::Sum));
        assert!(!ShipmentTab::Shipping.available_operations().contains(&Operation::End));
        assert!(!ShipmentTab::CashFlow.available_operations().contains(&Operation::End));
        assert_eq!(ShipmentTab::CashFlow.available_operations().len(), 4);
        assert_eq!(ShipmentTab::Wallet.default_operation(), Operation::End);
        assert_eq!(ShipmentTab::Shipping.default_operation(), Operation::Sum);
        assert_eq!(ShipmentTab::Today.metric(), None);
        assert_eq!(ShipmentTab::CashFlow.metric(), Some(Metric::CashFlow));
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("cash-flow".parse::<ShipmentTab>().unwrap(), ShipmentTab::CashFlow);
        assert_eq!("Wallet".parse::<ShipmentTab>().unwrap(), ShipmentTab::Wallet);
        assert_eq!(
            "ledger".parse::<ShipmentTab>(),
            Err(ViewError::UnknownTab("ledger".to_string()))
        );
        assert_eq!(ShipmentTab::CashFlow.to_string(), "Cash Flow");
    }

    #[test]
    fn test_default_year_selection() {
        let selection = YearSelection::with_defaults(7);
        assert_eq!(selection.options().len(), 8);
        assert_eq!(selection.options()[0].label(), "All");
        assert_eq!(selection.options()[1].label(), "Y-7");
        assert_eq!(selection.selected(), vec![7, 6, 5, 4, 3]);
        assert_eq!(
            selection.filter(),
            YearFilter::Years(BTreeSet::from([3, 4, 5, 6, 7]))
        );

        let young = YearSelection::with_defaults(2);
        assert_eq!(young.selected(), vec![2, 1]);
    }

    #[test]
    fn test_toggle_all_clears_years() {
        let mut selection = YearSelection::with_defaults(3);
        selection.toggle(0);
        assert_eq!(selection.selected(), vec![0]);
        assert_eq!(selection.filter(), YearFilter::All);
        selection.toggle(0);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_toggle_year_clears_all() {
        let mut selection = YearSelection::with_defaults(3);
        selection.toggle(0);
        selection.toggle(2);
        assert_eq!(selection.selected(), vec![2]);
        selection.toggle(2);
        assert!(selection.selected().is_empty());
        assert_eq!(selection.filter(), YearFilter::Years(BTreeSet::new()));
    }

    #[test]
    fn test_select_only() {
        let mut selection = YearSelection::with_defaults(4);
        assert_eq!(selection.select_only(&[1, 3, 9]), vec![9]);
        assert_eq!(selection.selected(), vec![3, 1]);
        assert!(selection.select_only(&[2, 0, 9]).is_empty());
        assert_eq!(selection.selected(), vec![0]);
        assert_eq!(selection.filter(), YearFilter::All);
    }

    #[test]
    fn test_view_state_transitions() {
        let mut data = TrackedData::default();
        data.record_shipment(
            CalendarDate::from_parts(1, Season::Spring, 1),
            vec![TrackedItemStack::new("24", 4, 25)],
        );
        let config = DisplayConfig::default();
        let today = CalendarDate::from_parts(2, Season::Spring, 1);
        let mut state = ViewState::new(&data, &config, today);
        assert_eq!(state.tab, ShipmentTab::Today);
        assert_eq!(state.operation, Operation::Sum);

        let view = state.select_tab(ShipmentTab::Wallet);
        assert_eq!(state.operation, Operation::End);
        assert_eq!(view.wallet.text(), "Overall End: 0g");
        assert_eq!(
            state.select_operation(Operation::Sum),
            Err(ViewError::OperationNotAvailable {
                tab: ShipmentTab::Wallet,
                operation: Operation::Sum
            })
        );
        assert_eq!(state.operation, Operation::End);

        state.select_tab(ShipmentTab::Shipping);
        let view = state.select_operation(Operation::Max).unwrap();
        assert_eq!(view.shipped.total(), 100);

        let view = state.toggle_year(1);
        assert_eq!(view.shipped.years().len(), 1);
        assert_eq!(view.shipped.total(), 0);
    }
}
