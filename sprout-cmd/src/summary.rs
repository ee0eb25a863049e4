use crate::input::{apply_selection, load};
use crate::{InputArgs, SelectionArgs};
use sprout_data::Metric;

pub fn run_summary(input: &InputArgs, selection: &SelectionArgs) -> anyhow::Result<()> {
    let loaded = load(input)?;
    let mut state = loaded.view_state();
    let view = apply_selection(&mut state, selection)?;

    println!("{} ({})", state.tab, state.operation);
    for metric in [Metric::Shipped, Metric::Wallet, Metric::CashFlow] {
        let metric_view = view.metric(metric);
        match &metric_view.root.tooltip {
            Some(tooltip) => println!("{metric}: {}\n{tooltip}", metric_view.text()),
            None => println!("{metric}: {}", metric_view.text()),
        }
    }
    Ok(())
}
