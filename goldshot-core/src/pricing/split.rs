use super::mode::GameMode;
use crate::error::{PricingError, Result};
use crate::types::Amount;
use serde::{Deserialize, Serialize};

/// Percentage division of a prize pool. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SplitPercents")]
pub struct RevenueSplit {
    winner_percent: u8,
    platform_percent: u8,
    host_percent: u8,
}

#[derive(Deserialize)]
struct SplitPercents {
    winner_percent: u8,
    platform_percent: u8,
    host_percent: u8,
}

impl TryFrom<SplitPercents> for RevenueSplit {
    type Error = PricingError;

    fn try_from(raw: SplitPercents) -> Result<Self> {
        RevenueSplit::new(raw.winner_percent, raw.platform_percent, raw.host_percent)
    }
}

/// A pot divided according to a [`RevenueSplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub winner: Amount,
    pub platform: Amount,
    pub host: Amount,
}

impl Payout {
    pub fn total(&self) -> Option<Amount> {
        self.winner
            .to_cents()
            .checked_add(self.platform.to_cents())?
            .checked_add(self.host.to_cents())
            .map(Amount::from_cents)
    }
}

impl RevenueSplit {
    pub fn new(winner_percent: u8, platform_percent: u8, host_percent: u8) -> Result<Self> {
        let split = Self::fixed(winner_percent, platform_percent, host_percent);
        if split.total() != 100 {
            return Err(PricingError::InvalidSplit {
                winner: winner_percent,
                platform: platform_percent,
                host: host_percent,
            });
        }
        Ok(split)
    }

    const fn fixed(winner_percent: u8, platform_percent: u8, host_percent: u8) -> Self {
        Self {
            winner_percent,
            platform_percent,
            host_percent,
        }
    }

    pub fn winner_percent(&self) -> u8 {
        self.winner_percent
    }

    pub fn platform_percent(&self) -> u8 {
        self.platform_percent
    }

    pub fn host_percent(&self) -> u8 {
        self.host_percent
    }

    pub fn total(&self) -> u16 {
        u16::from(self.winner_percent)
            + u16::from(self.platform_percent)
            + u16::from(self.host_percent)
    }

    /// Winner and host shares are floored to the cent; the platform takes
    /// whatever is left so the shares always add up to the pot.
    pub fn apportion(&self, pot: Amount) -> Result<Payout> {
        let winner = pot
            .percent_floor(self.winner_percent)
            .ok_or(PricingError::Overflow)?;
        let host = pot
            .percent_floor(self.host_percent)
            .ok_or(PricingError::Overflow)?;
        let platform = pot
            .to_cents()
            .checked_sub(winner.to_cents())
            .and_then(|rest| rest.checked_sub(host.to_cents()))
            .map(Amount::from_cents)
            .ok_or(PricingError::Overflow)?;

        tracing::debug!(
            "Apportioned pot {}: winner {}, platform {}, host {}",
            pot,
            winner,
            platform,
            host
        );

        Ok(Payout {
            winner,
            platform,
            host,
        })
    }
}

/// Revenue split for a game mode.
pub fn get_split(mode: GameMode) -> RevenueSplit {
    match mode {
        GameMode::DailyLottery | GameMode::MonthlyLottery | GameMode::YearlyLottery => {
            RevenueSplit::fixed(50, 50, 0)
        }
        GameMode::Duel => RevenueSplit::fixed(90, 10, 0),
        GameMode::QuickDraw5 | GameMode::QuickDraw10 => RevenueSplit::fixed(90, 10, 0),
        GameMode::HostedLottery => RevenueSplit::fixed(50, 25, 25),
        GameMode::HostedInstantGame => RevenueSplit::fixed(90, 5, 5),
    }
}
