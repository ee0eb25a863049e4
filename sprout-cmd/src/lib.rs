//! Command implementations for the SproutSight CLI.
//!
//! Every command reads a tracked-data snapshot, runs the aggregation for the
//! requested tab, operation and years, and prints the result to stdout.

use clap::{Args, Subcommand, ValueEnum};
use sprout_core::CalendarDate;
use sprout_data::{Operation, ShipmentTab};

pub mod grid;
pub mod input;
pub mod summary;
pub mod today;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to a tracked-data snapshot (JSON)
    #[arg(short, long)]
    pub data: String,

    /// Current date as Y-Season-D, overriding the snapshot's date
    #[arg(long)]
    pub today: Option<CalendarDate>,

    /// JSON file overriding bar sizes and tints
    #[arg(long)]
    pub display_config: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Tab whose rules and default operation apply
    #[arg(short, long, default_value = "shipping")]
    pub tab: ShipmentTab,

    /// Aggregation operation (min, max, sum, average, end); defaults to the tab's
    #[arg(short, long)]
    pub operation: Option<Operation>,

    /// Comma separated years to include, 0 for all; defaults to the five most recent
    #[arg(short, long, value_delimiter = ',')]
    pub years: Option<Vec<u32>>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Text,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the overall shipped, wallet and cash flow lines
    Summary {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the year and season rows of the selected tab's chart
    Grid {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format; csv flattens every element including days
        #[arg(short, long, value_enum, default_value_t = GridFormat::Text)]
        format: GridFormat,

        /// Also print day rows in text output
        #[arg(long)]
        days: bool,
    },

    /// Print what has been shipped so far today
    Today {
        #[command(flatten)]
        input: InputArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input, selection } => summary::run_summary(&input, &selection),
        Command::Grid {
            input,
            selection,
            format,
            days,
        } => grid::run_grid(&input, &selection, format, days),
        Command::Today { input } => today::run_today(&input),
    }
}
