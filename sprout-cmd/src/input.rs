//! Loading the snapshot and display config, and applying selections.

use crate::{InputArgs, SelectionArgs};
use anyhow::Context;
use log::{debug, info, warn};
use sprout_core::{CalendarDate, TrackedSnapshot};
use sprout_data::{AggregatedView, DisplayConfig, ViewState};
use std::fs;

/// Everything a command needs, read from disk once.
pub struct LoadedInput {
    pub snapshot: TrackedSnapshot,
    pub config: DisplayConfig,
    pub today: CalendarDate,
}

pub fn load(input: &InputArgs) -> anyhow::Result<LoadedInput> {
    let json = fs::read_to_string(&input.data)
        .with_context(|| format!("Failed to read snapshot {}", input.data))?;
    let snapshot = TrackedSnapshot::from_json(&json)
        .with_context(|| format!("Failed to parse snapshot {}", input.data))?;
    snapshot.data.log_tracked_data();

    let config = match &input.display_config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read display config {path}"))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse display config {path}"))?
        }
        None => DisplayConfig::default(),
    };
    debug!("Display config: {config:?}");

    let today = input.today.unwrap_or(snapshot.current_date);
    if let Some(latest) = snapshot.data.latest_year() {
        if latest > today.year() {
            warn!("Snapshot has records up to year {latest}, after today ({today})");
        }
    }
    info!(
        "Loaded {} shipped stacks and {} gold entries, today is {}",
        snapshot.data.shipped_item_count(),
        snapshot.data.gold_entry_count(),
        today
    );
    Ok(LoadedInput {
        snapshot,
        config,
        today,
    })
}

impl LoadedInput {
    pub fn view_state(&self) -> ViewState<'_> {
        ViewState::new(&self.snapshot.data, &self.config, self.today)
    }
}

/// Apply the tab, years and operation from the command line, in that order.
pub fn apply_selection(
    state: &mut ViewState<'_>,
    selection: &SelectionArgs,
) -> anyhow::Result<AggregatedView> {
    if let Some(years) = &selection.years {
        let ignored = state.years.select_only(years);
        if !ignored.is_empty() {
            warn!(
                "Ignoring years {ignored:?}: only years 1 through {} exist",
                state.today.year()
            );
        }
    }
    let mut view = state.select_tab(selection.tab);
    if let Some(operation) = selection.operation {
        view = state.select_operation(operation)?;
    }
    Ok(view)
}
