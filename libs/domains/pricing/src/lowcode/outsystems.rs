//! OutSystems pricing: edition base, Application Object packs, user bands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

use super::tiers::check_bands;
use super::{
    non_negative, price_add_ons, user_lines, AddOn, AddOnPolicy, AddOnScaling,
    DeploymentPlatform, LineCategory, LowCodeQuote, QuoteLine, UserBand,
};
use crate::error::{PricingError, PricingResult};

const TABLE: &str = "outsystems_pricing.json";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutSystemsEdition {
    Basic,
    #[default]
    Standard,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OutSystemsEditionPrice {
    pub edition: OutSystemsEdition,
    #[validate(custom(function = "non_negative"))]
    pub base_price_per_year: Decimal,
    /// AO packs covered by the base price
    pub included_ao_packs: u32,
    #[validate(custom(function = "non_negative"))]
    pub ao_pack_price_per_year: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OutSystemsPricingTable {
    pub currency: String,
    #[validate(length(min = 1), nested)]
    pub editions: Vec<OutSystemsEditionPrice>,
    #[validate(nested)]
    pub internal_user_bands: Vec<UserBand>,
    #[validate(nested)]
    pub external_user_bands: Vec<UserBand>,
    #[validate(nested)]
    pub add_ons: Vec<AddOn>,
}

impl OutSystemsPricingTable {
    pub(crate) fn check(&self) -> PricingResult<()> {
        check_bands(TABLE, "internal", &self.internal_user_bands)?;
        check_bands(TABLE, "external", &self.external_user_bands)
    }

    pub fn edition_price(
        &self,
        edition: OutSystemsEdition,
    ) -> PricingResult<&OutSystemsEditionPrice> {
        self.editions
            .iter()
            .find(|e| e.edition == edition)
            .ok_or_else(|| PricingError::UnknownEdition(edition.to_string()))
    }

    /// Annual quote for an OutSystems subscription
    pub fn quote(
        &self,
        request: &OutSystemsQuoteRequest,
        policy: AddOnPolicy,
    ) -> PricingResult<LowCodeQuote> {
        let edition = self.edition_price(request.edition)?;
        let total_packs = request.ao_packs.max(edition.included_ao_packs);
        let extra_packs = total_packs - edition.included_ao_packs;

        let mut lines = vec![QuoteLine::new(
            LineCategory::Edition,
            format!(
                "OutSystems {} edition ({} AO packs included)",
                request.edition, edition.included_ao_packs
            ),
            1,
            edition.base_price_per_year,
        )];
        if extra_packs > 0 {
            lines.push(QuoteLine::new(
                LineCategory::AoPacks,
                "Additional AO packs",
                extra_packs,
                edition.ao_pack_price_per_year,
            ));
        }

        lines.extend(user_lines(
            LineCategory::InternalUsers,
            "Internal",
            &self.internal_user_bands,
            request.internal_users,
        ));
        lines.extend(user_lines(
            LineCategory::ExternalUsers,
            "External",
            &self.external_user_bands,
            request.external_users,
        ));

        let (add_on_lines, skipped) = price_add_ons(
            &self.add_ons,
            &request.add_ons,
            request.platform,
            policy,
            |scaling| match scaling {
                AddOnScaling::PerAoPack => total_packs,
                AddOnScaling::Flat | AddOnScaling::PerEnvironment => 1,
            },
        )?;
        lines.extend(add_on_lines);

        Ok(LowCodeQuote::new(
            "OutSystems",
            request.edition,
            lines,
            0,
            skipped,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutSystemsQuoteRequest {
    pub edition: OutSystemsEdition,
    pub platform: DeploymentPlatform,
    /// Total AO packs; fewer than the edition includes counts as the included amount
    #[serde(default)]
    pub ao_packs: u32,
    #[serde(default)]
    pub internal_users: u32,
    #[serde(default)]
    pub external_users: u32,
    #[serde(default)]
    pub add_ons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lowcode::{band_cost, LowCodeCatalog};
    use rust_decimal_macros::dec;

    fn table() -> OutSystemsPricingTable {
        LowCodeCatalog::embedded().unwrap().outsystems
    }

    fn request(ao_packs: u32) -> OutSystemsQuoteRequest {
        OutSystemsQuoteRequest {
            edition: OutSystemsEdition::Standard,
            platform: DeploymentPlatform::Cloud,
            ao_packs,
            internal_users: 0,
            external_users: 0,
            add_ons: vec![],
        }
    }

    #[test]
    fn test_included_packs_cost_only_base() {
        let table = table();
        let edition = table.edition_price(OutSystemsEdition::Standard).unwrap().clone();

        let quote = table
            .quote(&request(edition.included_ao_packs), AddOnPolicy::Ignore)
            .unwrap();
        assert_eq!(quote.total_per_year, edition.base_price_per_year);

        let below = table.quote(&request(0), AddOnPolicy::Ignore).unwrap();
        assert_eq!(below.total_per_year, edition.base_price_per_year);
    }

    #[test]
    fn test_extra_ao_packs() {
        let table = table();
        let edition = table.edition_price(OutSystemsEdition::Standard).unwrap().clone();

        let quote = table
            .quote(&request(edition.included_ao_packs + 3), AddOnPolicy::Ignore)
            .unwrap();
        assert_eq!(
            quote.subtotal(LineCategory::AoPacks),
            edition.ao_pack_price_per_year * dec!(3)
        );
    }

    #[test]
    fn test_per_pack_add_on_scales_with_total_packs() {
        let table = table();
        let per_pack = table
            .add_ons
            .iter()
            .find(|a| a.scaling == AddOnScaling::PerAoPack && a.available_on(DeploymentPlatform::Cloud))
            .unwrap()
            .clone();
        let flat = table
            .add_ons
            .iter()
            .find(|a| a.scaling == AddOnScaling::Flat && a.available_on(DeploymentPlatform::Cloud))
            .unwrap()
            .clone();

        let mut req = request(5);
        req.add_ons = vec![per_pack.id.clone(), flat.id.clone()];
        let quote = table.quote(&req, AddOnPolicy::Reject).unwrap();

        assert_eq!(
            quote.subtotal(LineCategory::AddOn),
            per_pack.price_per_year * dec!(5) + flat.price_per_year
        );
    }

    #[test]
    fn test_cloud_only_add_on_on_self_managed() {
        let table = table();
        let cloud_only = table
            .add_ons
            .iter()
            .find(|a| !a.available_on(DeploymentPlatform::SelfManaged))
            .unwrap()
            .clone();

        let mut req = request(1);
        req.platform = DeploymentPlatform::SelfManaged;
        req.add_ons = vec![cloud_only.id.clone()];

        let ignored = table.quote(&req, AddOnPolicy::Ignore).unwrap();
        assert_eq!(ignored.skipped_add_ons, vec![cloud_only.id.clone()]);
        assert_eq!(ignored.subtotal(LineCategory::AddOn), dec!(0));

        let rejected = table.quote(&req, AddOnPolicy::Reject).unwrap_err();
        assert!(matches!(
            rejected,
            PricingError::IncompatibleAddOn { platform: DeploymentPlatform::SelfManaged, .. }
        ));
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let table = table();
        let edition = table.edition_price(OutSystemsEdition::Enterprise).unwrap().clone();
        let req = OutSystemsQuoteRequest {
            edition: OutSystemsEdition::Enterprise,
            platform: DeploymentPlatform::Cloud,
            ao_packs: edition.included_ao_packs + 2,
            internal_users: 1_500,
            external_users: 50_000,
            add_ons: vec![],
        };

        let quote = table.quote(&req, AddOnPolicy::Ignore).unwrap();
        let expected = edition.base_price_per_year
            + edition.ao_pack_price_per_year * dec!(2)
            + band_cost(&table.internal_user_bands, 1_500)
            + band_cost(&table.external_user_bands, 50_000);
        assert_eq!(quote.total_per_year, expected);
        assert_eq!(quote.platform, "OutSystems");
        assert_eq!(quote.edition, "enterprise");
    }
}
