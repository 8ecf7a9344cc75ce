//! Configuration for the sizing calculator

use core_config::pricing::PricingDataConfig;
use core_config::{Environment, FromEnv};
use domain_pricing::{
    AddOnPolicy, DirectoryTables, EmbeddedTables, PricingTableSource, SupportTier,
};
use eyre::{eyre, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub pricing: PricingDataConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            environment: Environment::from_env(),
            pricing: PricingDataConfig::from_env()?,
        })
    }

    /// Support tier for licensing requests that do not name one
    pub fn default_support_tier(&self) -> Result<SupportTier> {
        self.pricing.default_support_tier.parse().map_err(|_| {
            eyre!(
                "PRICING_DEFAULT_SUPPORT_TIER: unknown support tier '{}'",
                self.pricing.default_support_tier
            )
        })
    }

    /// Policy for add-ons that are unknown or unavailable on the quoted platform
    pub fn addon_policy(&self) -> Result<AddOnPolicy> {
        self.pricing.addon_policy.parse().map_err(|_| {
            eyre!(
                "PRICING_ADDON_POLICY: expected 'ignore' or 'reject', got '{}'",
                self.pricing.addon_policy
            )
        })
    }

    /// Where the low-code pricing tables come from
    pub fn table_source(&self) -> Box<dyn PricingTableSource> {
        match &self.pricing.data_dir {
            Some(dir) => Box::new(DirectoryTables::new(dir.clone())),
            None => Box::new(EmbeddedTables),
        }
    }
}
