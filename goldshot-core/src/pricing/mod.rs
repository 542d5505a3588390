//! Entry costs, subscription bundles and prize splits for every game mode.
//!
//! Everything here is a pure function of its inputs: quotes are built fresh
//! per request and nothing is cached between calls.

pub mod bundle;
pub mod mode;
pub mod quote;
pub mod split;

pub use bundle::BundleOption;
pub use mode::{GameMode, DUEL_BET_AMOUNTS, HOSTED_PLAYER_LIMITS};
pub use quote::{CostQuote, PriceRequest, SettlementInput};
pub use split::{get_split, Payout, RevenueSplit};

use crate::config::PricingConfig;
use crate::error::{PricingError, Result};
use crate::types::Amount;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn get_split(&self, mode: GameMode) -> RevenueSplit {
        get_split(mode)
    }

    /// Total cost, per-period projection and split for a request.
    pub fn compute_cost(&self, request: &PriceRequest) -> Result<CostQuote> {
        if request.quantity < 1 {
            return Err(PricingError::InvalidQuantity(request.quantity));
        }

        self.check_player_limit(request)?;
        let unit_price = self.unit_price(request)?;
        let total_cost = unit_price
            .checked_mul(u64::from(request.quantity))
            .ok_or(PricingError::Overflow)?;

        let mut per_period_cost = BTreeMap::new();
        if let Some(period) = request.mode.period() {
            for &(target, factor) in period.projections() {
                let cost = total_cost
                    .checked_mul(factor)
                    .ok_or(PricingError::Overflow)?;
                per_period_cost.insert(target, cost);
            }
        }

        let quote = CostQuote {
            mode: request.mode,
            total_cost,
            per_period_cost,
            split: get_split(request.mode),
        };

        tracing::debug!(
            "Quoted {} x{} at {} {}: total {}",
            request.mode,
            request.quantity,
            unit_price,
            self.config.currency,
            quote.total_cost
        );

        Ok(quote)
    }

    /// Prepaid bundle ladder for subscription lotteries, empty otherwise.
    pub fn compute_bundle_options(&self, request: &PriceRequest) -> Result<Vec<BundleOption>> {
        let period = match request.mode.period() {
            Some(period) => period,
            None => {
                if request.quantity < 1 {
                    return Err(PricingError::InvalidQuantity(request.quantity));
                }
                return Ok(Vec::new());
            }
        };

        let quote = self.compute_cost(request)?;
        bundle::build_ladder(period, request.quantity, quote.total_cost)
            .ok_or(PricingError::Overflow)
    }

    /// Prize a winner takes home. Only defined when the pot has a fixed
    /// seat count.
    pub fn potential_win(&self, request: &PriceRequest) -> Result<Amount> {
        let seats = request.seats().ok_or_else(|| {
            PricingError::unsupported(format!("{} has no fixed pot size", request.mode))
        })?;

        let quote = self.compute_cost(request)?;
        let winner_percent = quote.split.winner_percent();

        let win = match request.mode {
            GameMode::Duel => quote
                .total_cost
                .mul_percent(u64::from(seats), winner_percent),
            _ => self
                .unit_price(request)?
                .mul_percent(u64::from(seats), winner_percent),
        };

        win.ok_or(PricingError::Overflow)
    }

    /// Chance of a single entry winning, `1 / seats`.
    pub fn win_chance(&self, request: &PriceRequest) -> Option<f64> {
        request.seats().map(|seats| 1.0 / f64::from(seats))
    }

    fn check_player_limit(&self, request: &PriceRequest) -> Result<()> {
        let Some(players) = request.player_limit else {
            return Ok(());
        };

        if request.mode != GameMode::HostedInstantGame {
            return Err(PricingError::unsupported(format!(
                "{} does not take a player limit",
                request.mode
            )));
        }

        if !HOSTED_PLAYER_LIMITS.contains(&players) {
            return Err(PricingError::unsupported(format!(
                "hosted instant game with {} players",
                players
            )));
        }

        Ok(())
    }

    fn unit_price(&self, request: &PriceRequest) -> Result<Amount> {
        let mode = request.mode;

        if mode.is_subscription() {
            let canonical = mode.canonical_price().ok_or_else(|| {
                PricingError::unsupported(format!("{} has no ticket price", mode))
            })?;
            if let Some(supplied) = request.unit_price {
                if supplied != canonical {
                    tracing::warn!(
                        "Ignoring unit price {} for {}, ticket price is fixed at {}",
                        supplied,
                        mode,
                        canonical
                    );
                }
            }
            return Ok(canonical);
        }

        let price = request
            .unit_price
            .ok_or_else(|| PricingError::unit_price(format!("{} requires a unit price", mode)))?;

        if price.is_zero() {
            return Err(PricingError::unit_price(format!(
                "{} unit price must be greater than 0",
                mode
            )));
        }

        match mode {
            GameMode::Duel if !request.custom => {
                if !DUEL_BET_AMOUNTS.contains(&price) {
                    return Err(PricingError::unit_price(format!(
                        "{} is not one of the fixed duel amounts",
                        price
                    )));
                }
            }
            GameMode::Duel
            | GameMode::QuickDraw5
            | GameMode::QuickDraw10
            | GameMode::HostedLottery
            | GameMode::HostedInstantGame => {
                if let Some(ceiling) = self.config.max_custom_stake {
                    if price > ceiling {
                        return Err(PricingError::StakeAboveCeiling {
                            amount: price,
                            ceiling,
                        });
                    }
                }
            }
            GameMode::DailyLottery | GameMode::MonthlyLottery | GameMode::YearlyLottery => {
                return Err(PricingError::unsupported(format!(
                    "{} has no pricing rule",
                    mode
                )));
            }
        }

        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    fn units(n: u64) -> Amount {
        Amount::from_units(n)
    }

    fn sample_requests() -> Vec<PriceRequest> {
        vec![
            PriceRequest::subscription(GameMode::DailyLottery, 1),
            PriceRequest::subscription(GameMode::MonthlyLottery, 1),
            PriceRequest::subscription(GameMode::YearlyLottery, 1),
            PriceRequest::duel(units(50)),
            PriceRequest::custom_duel(Amount::from_cents(1234)),
            PriceRequest::quick_draw(5, units(10)).unwrap(),
            PriceRequest::quick_draw(10, units(10)).unwrap(),
            PriceRequest::hosted(GameMode::HostedLottery, units(15)),
            PriceRequest::hosted(GameMode::HostedInstantGame, units(15)),
        ]
    }

    #[test]
    fn test_daily_lottery_projection() {
        let engine = PricingEngine::default();
        let quote = engine
            .compute_cost(&PriceRequest::subscription(GameMode::DailyLottery, 1))
            .unwrap();

        assert_eq!(quote.total_cost, units(1));
        assert_eq!(quote.total_cost.to_string(), "1.00");
        assert_eq!(quote.period_cost(Period::Daily), Some(units(1)));
        assert_eq!(quote.period_cost(Period::Monthly), Some(units(30)));
        assert_eq!(quote.period_cost(Period::Yearly), Some(units(365)));
    }

    #[test]
    fn test_monthly_and_yearly_projection() {
        let engine = PricingEngine::default();

        let monthly = engine
            .compute_cost(&PriceRequest::subscription(GameMode::MonthlyLottery, 2))
            .unwrap();
        assert_eq!(monthly.total_cost, units(40));
        assert_eq!(monthly.period_cost(Period::Daily), None);
        assert_eq!(monthly.period_cost(Period::Yearly), Some(units(480)));

        let yearly = engine
            .compute_cost(&PriceRequest::subscription(GameMode::YearlyLottery, 3))
            .unwrap();
        assert_eq!(yearly.total_cost, units(300));
        assert_eq!(yearly.per_period_cost.len(), 1);
    }

    #[test]
    fn test_subscription_ignores_supplied_price() {
        let engine = PricingEngine::default();
        let mut request = PriceRequest::subscription(GameMode::YearlyLottery, 1);
        request.unit_price = Some(units(7));

        assert_eq!(engine.compute_cost(&request).unwrap().total_cost, units(100));
    }

    #[test]
    fn test_compute_cost_is_idempotent() {
        let engine = PricingEngine::default();
        for request in sample_requests() {
            let first = engine.compute_cost(&request).unwrap();
            let second = engine.compute_cost(&request).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_total_cost_increases_with_quantity() {
        let engine = PricingEngine::default();
        for request in sample_requests() {
            let mut previous = Amount::ZERO;
            for quantity in 1..=5 {
                let quote = engine
                    .compute_cost(&request.clone().with_quantity(quantity))
                    .unwrap();
                assert!(quote.total_cost > previous, "{} x{}", request.mode, quantity);
                previous = quote.total_cost;
            }
        }
    }

    #[test]
    fn test_non_subscription_has_no_projection() {
        let engine = PricingEngine::default();
        let quote = engine.compute_cost(&PriceRequest::duel(units(20))).unwrap();
        assert_eq!(quote.total_cost, units(20));
        assert!(quote.per_period_cost.is_empty());
        assert_eq!(quote.split, get_split(GameMode::Duel));
    }

    #[test]
    fn test_duel_potential_win() {
        let engine = PricingEngine::default();
        let win = engine.potential_win(&PriceRequest::duel(units(50))).unwrap();
        assert_eq!(win, units(90));
        assert_eq!(win.to_string(), "90.00");
    }

    #[test]
    fn test_quick_draw_potential_win_and_chance() {
        let engine = PricingEngine::default();

        let five = PriceRequest::quick_draw(5, units(10)).unwrap();
        assert_eq!(engine.potential_win(&five).unwrap(), units(45));

        let ten = PriceRequest::quick_draw(10, Amount::from_cents(333)).unwrap();
        // 3.33 × 10 × 90% = 29.97
        assert_eq!(engine.potential_win(&ten).unwrap(), Amount::from_cents(2997));

        assert_eq!(engine.win_chance(&ten), Some(0.1));
        let ten_high = PriceRequest::quick_draw(10, units(500)).unwrap();
        assert_eq!(engine.win_chance(&ten_high), Some(0.1));
        assert_eq!(engine.win_chance(&five), Some(0.2));
        assert_eq!(
            engine.win_chance(&PriceRequest::hosted(GameMode::HostedLottery, units(5))),
            None
        );
    }

    #[test]
    fn test_potential_win_unsupported_without_seats() {
        let engine = PricingEngine::default();
        let result = engine.potential_win(&PriceRequest::subscription(GameMode::DailyLottery, 1));
        assert!(matches!(result, Err(PricingError::UnsupportedMode(_))));

        let result = engine.potential_win(&PriceRequest::hosted(GameMode::HostedLottery, units(5)));
        assert!(matches!(result, Err(PricingError::UnsupportedMode(_))));
    }

    #[test]
    fn test_monthly_bundle_options() {
        let engine = PricingEngine::default();
        let options = engine
            .compute_bundle_options(&PriceRequest::subscription(GameMode::MonthlyLottery, 2))
            .unwrap();

        let amounts: Vec<Amount> = options.iter().map(|o| o.amount).collect();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(amounts, vec![units(40), units(120), units(240)]);
        assert_eq!(labels, vec!["1 Month", "3 Months", "6 Months"]);
        assert_eq!(options[1].description, "2 ticket(s) for 3 monthly draws");
    }

    #[test]
    fn test_daily_and_yearly_bundle_options() {
        let engine = PricingEngine::default();

        let daily = engine
            .compute_bundle_options(&PriceRequest::subscription(GameMode::DailyLottery, 1))
            .unwrap();
        let amounts: Vec<Amount> = daily.iter().map(|o| o.amount).collect();
        assert_eq!(amounts, vec![units(7), units(30), units(90)]);

        let yearly = engine
            .compute_bundle_options(&PriceRequest::subscription(GameMode::YearlyLottery, 1))
            .unwrap();
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].label, "1 Year");
        assert_eq!(yearly[0].amount, units(100));
    }

    #[test]
    fn test_bundle_options_empty_for_other_modes() {
        let engine = PricingEngine::default();
        let options = engine
            .compute_bundle_options(&PriceRequest::duel(units(10)))
            .unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let engine = PricingEngine::default();
        let request = PriceRequest::subscription(GameMode::DailyLottery, 0);

        assert!(matches!(
            engine.compute_cost(&request),
            Err(PricingError::InvalidQuantity(0))
        ));
        assert!(matches!(
            engine.compute_bundle_options(&request),
            Err(PricingError::InvalidQuantity(0))
        ));
        assert!(matches!(
            engine.compute_bundle_options(&PriceRequest::duel(units(10)).with_quantity(0)),
            Err(PricingError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_zero_custom_duel_rejected() {
        let engine = PricingEngine::default();
        let result = engine.compute_cost(&PriceRequest::custom_duel(Amount::ZERO));
        assert!(matches!(result, Err(PricingError::InvalidUnitPrice(_))));
    }

    #[test]
    fn test_missing_unit_price_rejected() {
        let engine = PricingEngine::default();
        let request = PriceRequest {
            mode: GameMode::HostedInstantGame,
            quantity: 1,
            unit_price: None,
            custom: true,
            player_limit: None,
        };
        assert!(matches!(
            engine.compute_cost(&request),
            Err(PricingError::InvalidUnitPrice(_))
        ));
    }

    #[test]
    fn test_fixed_duel_must_use_ladder() {
        let engine = PricingEngine::default();
        assert!(matches!(
            engine.compute_cost(&PriceRequest::duel(units(30))),
            Err(PricingError::InvalidUnitPrice(_))
        ));
        assert!(engine.compute_cost(&PriceRequest::custom_duel(units(30))).is_ok());
    }

    #[test]
    fn test_custom_stake_ceiling() {
        let config = PricingConfig::default().with_max_custom_stake(units(100));
        let engine = PricingEngine::new(config).unwrap();

        assert!(engine.compute_cost(&PriceRequest::custom_duel(units(100))).is_ok());
        assert!(matches!(
            engine.compute_cost(&PriceRequest::custom_duel(units(101))),
            Err(PricingError::StakeAboveCeiling { .. })
        ));
        assert!(matches!(
            engine.compute_cost(&PriceRequest::hosted(GameMode::HostedLottery, units(500))),
            Err(PricingError::StakeAboveCeiling { .. })
        ));
        // fixed ladder is platform-defined and not subject to the ceiling
        assert!(engine.compute_cost(&PriceRequest::duel(units(1000))).is_ok());
    }

    #[test]
    fn test_overflow_reported() {
        let engine = PricingEngine::default();
        let request = PriceRequest::custom_duel(Amount::from_cents(u64::MAX / 2)).with_quantity(3);
        assert!(matches!(
            engine.compute_cost(&request),
            Err(PricingError::Overflow)
        ));
    }

    #[test]
    fn test_settlement_input_carries_split() {
        let engine = PricingEngine::default();
        let quote = engine
            .compute_cost(&PriceRequest::hosted(GameMode::HostedInstantGame, units(20)))
            .unwrap();
        let settlement = quote.settlement();

        assert_eq!(settlement.mode, GameMode::HostedInstantGame);
        assert_eq!(settlement.total_cost, units(20));
        assert_eq!(settlement.split.host_percent(), 5);
    }

    #[test]
    fn test_hosted_instant_game_with_player_limit() {
        let engine = PricingEngine::default();
        let request = PriceRequest::hosted_instant(units(10), 5);

        assert_eq!(engine.compute_cost(&request).unwrap().total_cost, units(10));
        // 10 × 5 × 90% = 45.00
        assert_eq!(engine.potential_win(&request).unwrap(), units(45));
        assert_eq!(engine.win_chance(&request), Some(0.2));

        let duel_style = PriceRequest::hosted_instant(units(10), 2);
        assert_eq!(engine.potential_win(&duel_style).unwrap(), units(18));
    }

    #[test]
    fn test_player_limit_rejected_where_not_allowed() {
        let engine = PricingEngine::default();

        assert!(matches!(
            engine.compute_cost(&PriceRequest::hosted_instant(units(10), 7)),
            Err(PricingError::UnsupportedMode(_))
        ));

        let mut lottery = PriceRequest::hosted(GameMode::HostedLottery, units(10));
        lottery.player_limit = Some(5);
        assert!(matches!(
            engine.compute_cost(&lottery),
            Err(PricingError::UnsupportedMode(_))
        ));
    }
}
