use thiserror::Error;

use crate::lowcode::DeploymentPlatform;

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur in the pricing domain.
///
/// Cloud and licensing calculations never fail; only low-code quotes do.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Low-code pricing table missing, malformed or inconsistent
    #[error("Pricing data unavailable ({table}): {details}")]
    Data { table: String, details: String },

    /// Resource pack not present in the Mendix table
    #[error("Unknown resource pack: {plan} {size}")]
    UnknownResourcePack { plan: String, size: String },

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    #[error("Add-on '{id}' is not available on {platform}")]
    IncompatibleAddOn {
        id: String,
        platform: DeploymentPlatform,
    },

    /// Edition not carried by the loaded table
    #[error("Unknown edition: {0}")]
    UnknownEdition(String),
}

impl PricingError {
    pub fn data(table: impl Into<String>, details: impl ToString) -> Self {
        PricingError::Data {
            table: table.into(),
            details: details.to_string(),
        }
    }

    /// Whether the error comes from the pricing tables rather than the request
    pub fn is_data_error(&self) -> bool {
        matches!(self, PricingError::Data { .. })
    }
}

impl From<validator::ValidationErrors> for PricingError {
    fn from(err: validator::ValidationErrors) -> Self {
        PricingError::data("validation", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_message() {
        let err = PricingError::data("mendix_pricing.json", "expected value at line 1");
        assert!(err.is_data_error());
        assert_eq!(
            err.to_string(),
            "Pricing data unavailable (mendix_pricing.json): expected value at line 1"
        );
    }

    #[test]
    fn test_incompatible_add_on_message() {
        let err = PricingError::IncompatibleAddOn {
            id: "sentry".to_string(),
            platform: DeploymentPlatform::Cloud,
        };
        assert!(!err.is_data_error());
        assert_eq!(err.to_string(), "Add-on 'sentry' is not available on cloud");
    }
}
