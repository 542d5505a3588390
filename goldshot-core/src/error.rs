use crate::types::Amount;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    #[error("Invalid unit price: {0}")]
    InvalidUnitPrice(String),

    #[error("Unsupported game mode: {0}")]
    UnsupportedMode(String),

    #[error("Stake {amount} exceeds the configured ceiling of {ceiling}")]
    StakeAboveCeiling { amount: Amount, ceiling: Amount },

    #[error("Invalid revenue split {winner}/{platform}/{host}: percentages must sum to 100")]
    InvalidSplit { winner: u8, platform: u8, host: u8 },

    #[error("Amount overflow")]
    Overflow,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl PricingError {
    pub fn unit_price(msg: impl Into<String>) -> Self {
        Self::InvalidUnitPrice(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedMode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Validation failures the caller should answer by asking for new input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity(_)
                | Self::InvalidUnitPrice(_)
                | Self::UnsupportedMode(_)
                | Self::StakeAboveCeiling { .. }
        )
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for PricingError {
    fn from(err: dialoguer::Error) -> Self {
        PricingError::Dialog(err.to_string())
    }
}
