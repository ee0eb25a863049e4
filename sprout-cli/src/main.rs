//! SproutSight CLI - aggregate tracked shipping and gold data by year, season and day.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sprout-cli",
    version,
    about = "SproutSight shipping and gold aggregation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sprout_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sprout_cmd::run(cli.command)
}
