//! GoldShot core - pricing rules for lottery subscriptions, duels, quick
//! draws and user-hosted games.
//!
//! This library computes what a player pays and how a prize pool is divided.
//! Wallet signing and on-chain settlement happen elsewhere; callers hand the
//! resulting [`SettlementInput`] to whatever executes the payment.

pub mod config;
pub mod error;
pub mod pricing;
pub mod types;

pub use config::PricingConfig;
pub use error::{PricingError, Result};
pub use pricing::{
    get_split, BundleOption, CostQuote, GameMode, Payout, PriceRequest, PricingEngine,
    RevenueSplit, SettlementInput, DUEL_BET_AMOUNTS, HOSTED_PLAYER_LIMITS,
};
pub use types::{Amount, Period};
