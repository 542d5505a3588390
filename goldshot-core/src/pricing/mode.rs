use crate::error::{PricingError, Result};
use crate::types::{Amount, Period};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DAILY_LOTTERY_PRICE: Amount = Amount::from_units(1);
pub const MONTHLY_LOTTERY_PRICE: Amount = Amount::from_units(20);
pub const YEARLY_LOTTERY_PRICE: Amount = Amount::from_units(100);

/// Fixed duel stakes offered before the custom path.
pub const DUEL_BET_AMOUNTS: [Amount; 7] = [
    Amount::from_units(10),
    Amount::from_units(20),
    Amount::from_units(50),
    Amount::from_units(100),
    Amount::from_units(200),
    Amount::from_units(500),
    Amount::from_units(1000),
];

/// Player limits a host can pick for an instant game: a duel or a quick draw.
pub const HOSTED_PLAYER_LIMITS: [u32; 3] = [2, 5, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    DailyLottery,
    MonthlyLottery,
    YearlyLottery,
    Duel,
    #[serde(rename = "quick-draw-5")]
    QuickDraw5,
    #[serde(rename = "quick-draw-10")]
    QuickDraw10,
    HostedLottery,
    HostedInstantGame,
}

impl GameMode {
    pub const ALL: [GameMode; 8] = [
        GameMode::DailyLottery,
        GameMode::MonthlyLottery,
        GameMode::YearlyLottery,
        GameMode::Duel,
        GameMode::QuickDraw5,
        GameMode::QuickDraw10,
        GameMode::HostedLottery,
        GameMode::HostedInstantGame,
    ];

    /// Legacy lottery tier index: 0 daily, 1 monthly, 2 yearly.
    pub fn from_lottery_tier(index: u8) -> Result<Self> {
        match index {
            0 => Ok(GameMode::DailyLottery),
            1 => Ok(GameMode::MonthlyLottery),
            2 => Ok(GameMode::YearlyLottery),
            other => Err(PricingError::unsupported(format!(
                "lottery tier index {}",
                other
            ))),
        }
    }

    /// Quick draw mode for a player count.
    pub fn quick_draw(players: u32) -> Result<Self> {
        match players {
            5 => Ok(GameMode::QuickDraw5),
            10 => Ok(GameMode::QuickDraw10),
            other => Err(PricingError::unsupported(format!(
                "quick draw with {} players",
                other
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::DailyLottery => "daily-lottery",
            GameMode::MonthlyLottery => "monthly-lottery",
            GameMode::YearlyLottery => "yearly-lottery",
            GameMode::Duel => "duel",
            GameMode::QuickDraw5 => "quick-draw-5",
            GameMode::QuickDraw10 => "quick-draw-10",
            GameMode::HostedLottery => "hosted-lottery",
            GameMode::HostedInstantGame => "hosted-instant-game",
        }
    }

    pub fn period(self) -> Option<Period> {
        match self {
            GameMode::DailyLottery => Some(Period::Daily),
            GameMode::MonthlyLottery => Some(Period::Monthly),
            GameMode::YearlyLottery => Some(Period::Yearly),
            _ => None,
        }
    }

    pub fn is_subscription(self) -> bool {
        self.period().is_some()
    }

    pub fn is_hosted(self) -> bool {
        matches!(self, GameMode::HostedLottery | GameMode::HostedInstantGame)
    }

    /// Fixed ticket price, only for subscription lotteries.
    pub fn canonical_price(self) -> Option<Amount> {
        match self {
            GameMode::DailyLottery => Some(DAILY_LOTTERY_PRICE),
            GameMode::MonthlyLottery => Some(MONTHLY_LOTTERY_PRICE),
            GameMode::YearlyLottery => Some(YEARLY_LOTTERY_PRICE),
            _ => None,
        }
    }

    /// Number of equal stakes that make up the pot.
    pub fn seats(self) -> Option<u32> {
        match self {
            GameMode::Duel => Some(2),
            GameMode::QuickDraw5 => Some(5),
            GameMode::QuickDraw10 => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.label() == wanted)
            .ok_or_else(|| PricingError::unsupported(s.to_string()))
    }
}
