use crate::error::{PricingError, Result};
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Ceiling for custom duel, quick draw and hosted stakes. `None` means
    /// any positive amount is accepted.
    pub max_custom_stake: Option<Amount>,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_custom_stake: None,
            currency: "USDT".to_string(),
        }
    }
}

impl PricingConfig {
    pub fn with_max_custom_stake(mut self, ceiling: Amount) -> Self {
        self.max_custom_stake = Some(ceiling);
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: PricingConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded pricing config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(PricingError::config("Currency label cannot be empty"));
        }

        if self.max_custom_stake.map_or(false, Amount::is_zero) {
            return Err(PricingError::config(
                "Max custom stake must be greater than 0",
            ));
        }

        Ok(())
    }
}
