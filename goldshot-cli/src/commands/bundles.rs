use comfy_table::{presets::UTF8_FULL, Table};
use goldshot_core::{GameMode, PriceRequest, PricingEngine, Result};

pub fn handle_bundles(
    engine: &PricingEngine,
    mode: GameMode,
    tickets: u32,
    json: bool,
) -> Result<()> {
    let request = PriceRequest::subscription(mode, tickets);
    let options = engine.compute_bundle_options(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if options.is_empty() {
        println!("No prepaid bundles for {}", mode);
        return Ok(());
    }

    println!("Bundle options for {} ({} ticket(s)):", mode, tickets);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Bundle", "Amount", "Draws", "Description"]);

    for option in &options {
        table.add_row(vec![
            option.label.clone(),
            format!("{} {}", option.amount, engine.config().currency),
            option.coverage_periods.to_string(),
            option.description.clone(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
