mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use goldshot_core::{Amount, GameMode, PricingEngine, PricingError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "goldshot")]
#[command(about = "GoldShot - entry costs, bundles and prize splits")]
#[command(version)]
struct Cli {
    /// Data directory holding pricing.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the cost of entering a game
    Quote {
        /// Game mode (daily-lottery, duel, quick-draw-5, hosted-lottery, ...)
        mode: GameMode,
        /// Ticket or entry count
        #[arg(short, long, default_value_t = 1)]
        tickets: u32,
        /// Stake per entry, required for duel, quick draw and hosted games
        #[arg(short, long)]
        amount: Option<Amount>,
        /// Use a custom duel stake instead of the fixed amounts
        #[arg(long)]
        custom: bool,
        /// Player limit for a hosted instant game (2, 5 or 10)
        #[arg(short, long)]
        players: Option<u32>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show prepaid bundle options for a lottery subscription
    Bundles {
        /// Lottery mode (daily-lottery, monthly-lottery, yearly-lottery)
        mode: GameMode,
        /// Tickets per draw
        #[arg(short, long, default_value_t = 1)]
        tickets: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the revenue split of every game mode
    Splits,
    /// Divide a prize pot among winner, platform and host
    Payout {
        /// Game mode the pot belongs to
        mode: GameMode,
        /// Pot size
        pot: Amount,
    },
    /// Build a quote step by step
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "goldshot={},goldshot_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match cli.data_dir {
        Some(dir) => CliConfig::with_data_dir(dir),
        None => CliConfig::default(),
    };
    tracing::debug!("Using data directory {}", config.data_dir.display());

    let pricing = config.load_pricing().await?;
    let engine = PricingEngine::new(pricing)?;

    // Execute command
    let result = match cli.command {
        Commands::Quote {
            mode,
            tickets,
            amount,
            custom,
            players,
            json,
        } => {
            let request = commands::build_request(mode, tickets, amount, custom, players);
            commands::handle_quote(&engine, &request, json)
        }
        Commands::Bundles {
            mode,
            tickets,
            json,
        } => commands::handle_bundles(&engine, mode, tickets, json),
        Commands::Splits => commands::handle_splits(&engine),
        Commands::Payout { mode, pot } => commands::handle_payout(&engine, mode, pot),
        Commands::Interactive => commands::handle_interactive(&engine),
    };

    if let Err(e) = result {
        match e {
            PricingError::InvalidQuantity(quantity) => {
                eprintln!("Error: Invalid quantity {}", quantity);
                eprintln!("Use --tickets with a value of at least 1");
            }
            PricingError::InvalidUnitPrice(reason) => {
                eprintln!("Error: Invalid amount: {}", reason);
                eprintln!("Fixed duel amounts are 10, 20, 50, 100, 200, 500, 1000");
                eprintln!("Pass --custom for any other duel stake");
            }
            PricingError::UnsupportedMode(mode) => {
                eprintln!("Error: Unsupported game mode: {}", mode);
            }
            PricingError::StakeAboveCeiling { amount, ceiling } => {
                eprintln!("Error: Stake too high");
                eprintln!(
                    "Requested: {} {}, Maximum: {} {}",
                    amount,
                    engine.config().currency,
                    ceiling,
                    engine.config().currency
                );
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
