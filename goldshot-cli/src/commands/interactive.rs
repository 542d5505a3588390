use super::bundles::handle_bundles;
use super::quote::handle_quote;
use dialoguer::{Confirm, Input, Select};
use goldshot_core::{
    Amount, GameMode, PriceRequest, PricingEngine, PricingError, Result, DUEL_BET_AMOUNTS,
    HOSTED_PLAYER_LIMITS,
};

/// Walks through mode, tickets and stake, asking again whenever the engine
/// rejects the input.
pub fn handle_interactive(engine: &PricingEngine) -> Result<()> {
    let labels: Vec<&str> = GameMode::ALL.iter().map(|mode| mode.label()).collect();
    let selection = Select::new()
        .with_prompt("Which game?")
        .items(&labels)
        .default(0)
        .interact()?;
    let mode = GameMode::ALL[selection];

    let request = loop {
        let request = prompt_request(mode)?;
        match engine.compute_cost(&request) {
            Ok(_) => break request,
            Err(e) if e.is_input_error() => {
                eprintln!("{}", e);
                tracing::debug!("Re-prompting after rejected input for {}", mode);
            }
            Err(e) => return Err(e),
        }
    };

    handle_quote(engine, &request, false)?;

    if mode.is_subscription() {
        let show = Confirm::new()
            .with_prompt("Show prepaid bundle options?")
            .default(true)
            .interact()?;
        if show {
            handle_bundles(engine, mode, request.quantity, false)?;
        }
    }

    Ok(())
}

fn prompt_request(mode: GameMode) -> Result<PriceRequest> {
    if mode.is_subscription() {
        let tickets: u32 = Input::new()
            .with_prompt("Tickets per draw")
            .default(1)
            .interact_text()?;
        return Ok(PriceRequest::subscription(mode, tickets));
    }

    if mode == GameMode::Duel {
        let mut options: Vec<String> = DUEL_BET_AMOUNTS.iter().map(|a| a.to_string()).collect();
        options.push("Custom".to_string());

        let selection = Select::new()
            .with_prompt("Bet amount")
            .items(&options)
            .default(0)
            .interact()?;

        return match DUEL_BET_AMOUNTS.get(selection) {
            Some(&amount) => Ok(PriceRequest::duel(amount)),
            None => Ok(PriceRequest::custom_duel(prompt_amount("Custom amount")?)),
        };
    }

    let prompt = if mode.is_hosted() {
        "Entry amount"
    } else {
        "Bet amount"
    };
    let amount = prompt_amount(prompt)?;

    if mode == GameMode::HostedInstantGame {
        let options: Vec<String> = HOSTED_PLAYER_LIMITS
            .iter()
            .map(|players| format!("{} Players", players))
            .collect();
        let selection = Select::new()
            .with_prompt("Player limit")
            .items(&options)
            .default(0)
            .interact()?;
        return Ok(PriceRequest::hosted_instant(
            amount,
            HOSTED_PLAYER_LIMITS[selection],
        ));
    }

    Ok(PriceRequest {
        mode,
        quantity: 1,
        unit_price: Some(amount),
        custom: true,
        player_limit: None,
    })
}

fn prompt_amount(prompt: &str) -> Result<Amount> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        match raw.parse::<Amount>() {
            Ok(amount) => return Ok(amount),
            Err(PricingError::InvalidUnitPrice(reason)) => eprintln!("Invalid amount: {}", reason),
            Err(e) => return Err(e),
        }
    }
}
