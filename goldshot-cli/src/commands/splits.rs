use super::quote::format_split;
use comfy_table::{presets::UTF8_FULL, Table};
use goldshot_core::{Amount, GameMode, PricingEngine, Result};

pub fn handle_splits(engine: &PricingEngine) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Mode", "Winner %", "Platform %", "Host %"]);

    for mode in GameMode::ALL {
        let split = engine.get_split(mode);
        table.add_row(vec![
            mode.to_string(),
            split.winner_percent().to_string(),
            split.platform_percent().to_string(),
            split.host_percent().to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn handle_payout(engine: &PricingEngine, mode: GameMode, pot: Amount) -> Result<()> {
    let split = engine.get_split(mode);
    let payout = split.apportion(pot)?;
    let currency = &engine.config().currency;

    println!(
        "Payout of {} {} for {} ({}):",
        pot,
        currency,
        mode,
        format_split(&split)
    );
    println!("  Winner: {} {}", payout.winner, currency);
    println!("  Platform: {} {}", payout.platform, currency);
    if split.host_percent() > 0 {
        println!("  Host: {} {}", payout.host, currency);
    }

    Ok(())
}
