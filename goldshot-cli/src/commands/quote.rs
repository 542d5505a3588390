use comfy_table::{presets::UTF8_FULL, Table};
use goldshot_core::{
    Amount, CostQuote, GameMode, PriceRequest, PricingEngine, Result, RevenueSplit,
};
use serde::Serialize;

/// Quote plus the values only some modes can show.
#[derive(Debug, Serialize)]
struct QuoteView {
    #[serde(flatten)]
    quote: CostQuote,
    potential_win: Option<Amount>,
    win_chance: Option<f64>,
}

pub fn build_request(
    mode: GameMode,
    tickets: u32,
    amount: Option<Amount>,
    custom: bool,
    players: Option<u32>,
) -> PriceRequest {
    PriceRequest {
        mode,
        quantity: tickets,
        unit_price: amount,
        // only the duel has a fixed ladder; every other stake is free-form
        custom: custom || mode != GameMode::Duel,
        player_limit: players,
    }
}

pub fn handle_quote(engine: &PricingEngine, request: &PriceRequest, json: bool) -> Result<()> {
    let quote = engine.compute_cost(request)?;

    let potential_win = match request.seats() {
        Some(_) => Some(engine.potential_win(request)?),
        None => None,
    };
    let win_chance = engine.win_chance(request);

    if json {
        let view = QuoteView {
            quote,
            potential_win,
            win_chance,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let currency = &engine.config().currency;
    println!("Quote for {} x{}:", request.mode, request.quantity);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Item", "Value"]);
    table.add_row(vec![
        "Total cost".to_string(),
        format!("{} {}", quote.total_cost, currency),
    ]);

    for (period, cost) in &quote.per_period_cost {
        table.add_row(vec![
            format!("Cost per {} draw", period),
            format!("{} {}", cost, currency),
        ]);
    }

    table.add_row(vec!["Split".to_string(), format_split(&quote.split)]);

    if let Some(win) = potential_win {
        table.add_row(vec![
            "Potential win".to_string(),
            format!("{} {}", win, currency),
        ]);
    }
    if let Some(chance) = win_chance {
        table.add_row(vec![
            "Win chance".to_string(),
            format!("{:.0}%", chance * 100.0),
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn format_split(split: &RevenueSplit) -> String {
    if split.host_percent() == 0 {
        format!(
            "{}% winner / {}% platform",
            split.winner_percent(),
            split.platform_percent()
        )
    } else {
        format!(
            "{}% winner / {}% platform / {}% host",
            split.winner_percent(),
            split.platform_percent(),
            split.host_percent()
        )
    }
}
