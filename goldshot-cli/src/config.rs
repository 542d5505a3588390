use goldshot_core::{PricingConfig, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub pricing_file: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_data_dir(
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("goldshot"),
        )
    }
}

impl CliConfig {
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            pricing_file: data_dir.join("pricing.json"),
            data_dir,
        }
    }

    /// Pricing config from the data directory, defaults when no file exists.
    pub async fn load_pricing(&self) -> Result<PricingConfig> {
        if !tokio::fs::try_exists(&self.pricing_file).await? {
            tracing::debug!(
                "No pricing file at {}, using defaults",
                self.pricing_file.display()
            );
            return Ok(PricingConfig::default());
        }

        PricingConfig::load(&self.pricing_file)
    }
}
