use super::mode::GameMode;
use super::split::RevenueSplit;
use crate::error::Result;
use crate::types::{Amount, Period};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-chosen pricing parameters for one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub mode: GameMode,
    /// Ticket count for lotteries, entry count otherwise.
    pub quantity: u32,
    pub unit_price: Option<Amount>,
    /// Free-form stake instead of the fixed duel ladder.
    #[serde(default)]
    pub custom: bool,
    /// Host-chosen seat count, only for hosted instant games.
    #[serde(default)]
    pub player_limit: Option<u32>,
}

impl PriceRequest {
    pub fn subscription(mode: GameMode, tickets: u32) -> Self {
        Self {
            mode,
            quantity: tickets,
            unit_price: None,
            custom: false,
            player_limit: None,
        }
    }

    pub fn duel(amount: Amount) -> Self {
        Self {
            mode: GameMode::Duel,
            quantity: 1,
            unit_price: Some(amount),
            custom: false,
            player_limit: None,
        }
    }

    pub fn custom_duel(amount: Amount) -> Self {
        Self {
            custom: true,
            ..Self::duel(amount)
        }
    }

    pub fn quick_draw(players: u32, amount: Amount) -> Result<Self> {
        Ok(Self {
            mode: GameMode::quick_draw(players)?,
            quantity: 1,
            unit_price: Some(amount),
            custom: true,
            player_limit: None,
        })
    }

    pub fn hosted(mode: GameMode, amount: Amount) -> Self {
        Self {
            mode,
            quantity: 1,
            unit_price: Some(amount),
            custom: true,
            player_limit: None,
        }
    }

    /// Hosted instant game with a fixed number of players.
    pub fn hosted_instant(amount: Amount, players: u32) -> Self {
        Self {
            player_limit: Some(players),
            ..Self::hosted(GameMode::HostedInstantGame, amount)
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Equal stakes making up the pot: fixed by the mode, or the host's
    /// player limit for hosted instant games.
    pub fn seats(&self) -> Option<u32> {
        match self.mode {
            GameMode::HostedInstantGame => self.player_limit,
            mode => mode.seats(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostQuote {
    pub mode: GameMode,
    pub total_cost: Amount,
    /// Empty for modes without a subscription period.
    pub per_period_cost: BTreeMap<Period, Amount>,
    pub split: RevenueSplit,
}

/// What a settlement backend needs to pay out a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    pub mode: GameMode,
    pub total_cost: Amount,
    pub split: RevenueSplit,
}

impl CostQuote {
    pub fn period_cost(&self, period: Period) -> Option<Amount> {
        self.per_period_cost.get(&period).copied()
    }

    pub fn settlement(&self) -> SettlementInput {
        SettlementInput {
            mode: self.mode,
            total_cost: self.total_cost,
            split: self.split,
        }
    }
}
