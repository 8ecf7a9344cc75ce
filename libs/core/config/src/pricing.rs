use crate::{env_or_default, ConfigError, FromEnv};
use std::env;
use std::path::PathBuf;

/// Pricing data configuration
#[derive(Clone, Debug, PartialEq)]
pub struct PricingDataConfig {
    /// Directory with `mendix_pricing.json` / `outsystems_pricing.json` overrides
    pub data_dir: Option<PathBuf>,
    /// Add-on policy name (`ignore` | `reject`), parsed by the pricing engine
    pub addon_policy: String,
    /// Support tier used when a licensing request does not name one
    pub default_support_tier: String,
}

impl Default for PricingDataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            addon_policy: "ignore".to_string(),
            default_support_tier: "standard".to_string(),
        }
    }
}

impl FromEnv for PricingDataConfig {
    /// Reads from environment variables:
    /// - PRICING_DATA_DIR: optional, embedded tables are used when unset
    /// - PRICING_ADDON_POLICY: ignore | reject (default: ignore)
    /// - PRICING_DEFAULT_SUPPORT_TIER: defaults to standard
    fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env::var("PRICING_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let addon_policy = env_or_default("PRICING_ADDON_POLICY", "ignore")
            .trim()
            .to_ascii_lowercase();
        if addon_policy.is_empty() {
            return Err(ConfigError::ParseError {
                key: "PRICING_ADDON_POLICY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            data_dir,
            addon_policy,
            default_support_tier: env_or_default("PRICING_DEFAULT_SUPPORT_TIER", "standard"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 3] = [
        "PRICING_DATA_DIR",
        "PRICING_ADDON_POLICY",
        "PRICING_DEFAULT_SUPPORT_TIER",
    ];

    #[test]
    fn test_pricing_config_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = PricingDataConfig::from_env().unwrap();
            assert_eq!(config, PricingDataConfig::default());
        });
    }

    #[test]
    fn test_pricing_config_from_env() {
        temp_env::with_vars(
            [
                ("PRICING_DATA_DIR", Some("/etc/pricing")),
                ("PRICING_ADDON_POLICY", Some("Reject")),
                ("PRICING_DEFAULT_SUPPORT_TIER", Some("premium")),
            ],
            || {
                let config = PricingDataConfig::from_env().unwrap();
                assert_eq!(config.data_dir, Some(PathBuf::from("/etc/pricing")));
                assert_eq!(config.addon_policy, "reject");
                assert_eq!(config.default_support_tier, "premium");
            },
        );
    }

    #[test]
    fn test_empty_data_dir_is_ignored() {
        temp_env::with_var("PRICING_DATA_DIR", Some("  "), || {
            let config = PricingDataConfig::from_env().unwrap();
            assert_eq!(config.data_dir, None);
        });
    }

    #[test]
    fn test_empty_addon_policy() {
        temp_env::with_var("PRICING_ADDON_POLICY", Some(" "), || {
            let err = PricingDataConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "PRICING_ADDON_POLICY"));
        });
    }
}
