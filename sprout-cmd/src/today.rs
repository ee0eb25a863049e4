use crate::input::load;
use crate::InputArgs;
use sprout_data::TodaySummary;
use sprout_utils::numbers::format_gold_number;

pub fn run_today(input: &InputArgs) -> anyhow::Result<()> {
    let loaded = load(input)?;
    let summary = TodaySummary::from_ledger(&loaded.snapshot.today);

    println!("{}", loaded.today);
    if !summary.shipped_something() {
        println!("Nothing shipped yet today.");
    }
    for item in &summary.items {
        println!(
            "  {:<10} {:<8} {:>10} {}",
            item.id,
            item.quality_name(),
            item.formatted_sale(),
            format_gold_number(item.total_sale_price())
        );
    }
    println!("{}", summary.total_proceeds_text());
    println!(
        "Gold in: {}  Gold out: {}",
        format_gold_number(summary.gold_in),
        format_gold_number(summary.gold_out)
    );
    Ok(())
}
