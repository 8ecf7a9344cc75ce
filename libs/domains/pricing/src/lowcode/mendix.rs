//! Mendix pricing: platform fee, resource packs per environment, user bands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{Display, EnumString};
use tracing::warn;
use validator::Validate;

use super::tiers::check_bands;
use super::{
    non_negative, price_add_ons, user_lines, AddOn, AddOnPolicy, AddOnScaling,
    DeploymentPlatform, LineCategory, LowCodeQuote, QuoteLine, UserBand,
};
use crate::error::{PricingError, PricingResult};

const TABLE: &str = "mendix_pricing.json";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MendixEdition {
    Basic,
    #[default]
    Standard,
    Premium,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MendixDeployment {
    /// Mendix Cloud, shared infrastructure
    #[default]
    Cloud,
    /// Mendix Cloud, single-tenant
    CloudDedicated,
    /// Customer Kubernetes via Mendix for Private Cloud
    PrivateCloud,
    /// Customer servers / VMs
    Server,
}

impl MendixDeployment {
    pub fn platform(self) -> DeploymentPlatform {
        match self {
            MendixDeployment::Cloud | MendixDeployment::CloudDedicated => {
                DeploymentPlatform::Cloud
            }
            MendixDeployment::PrivateCloud | MendixDeployment::Server => {
                DeploymentPlatform::SelfManaged
            }
        }
    }
}

/// Resource pack plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourcePlan {
    Standard,
    Premium,
    PremiumPlus,
}

/// Resource pack key, matched exactly against the table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePackRef {
    pub plan: ResourcePlan,
    /// XS .. 4XL, or the database-heavy "4XL-5XLDB"
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResourcePack {
    pub plan: ResourcePlan,
    #[validate(length(min = 1))]
    pub size: String,
    #[validate(custom(function = "non_negative"))]
    pub price_per_year: Decimal,
    pub cloud_tokens: u32,
    pub vcpu: Decimal,
    pub memory_gb: Decimal,
    pub database_storage_gb: u32,
    pub file_storage_gb: u32,
    /// Availability SLA, e.g. "99.95%"
    pub sla: String,
}

impl ResourcePack {
    fn matches(&self, key: &ResourcePackRef) -> bool {
        self.plan == key.plan && self.size == key.size
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MendixEditionPrice {
    pub edition: MendixEdition,
    #[validate(custom(function = "non_negative"))]
    pub platform_fee_per_year: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MendixPricingTable {
    pub currency: String,
    #[validate(length(min = 1), nested)]
    pub editions: Vec<MendixEditionPrice>,
    #[validate(length(min = 1), nested)]
    pub resource_packs: Vec<ResourcePack>,
    /// Pack used for cloud environments that do not name one
    pub default_pack: ResourcePackRef,
    #[validate(custom(function = "non_negative"))]
    pub dedicated_cloud_fee_per_year: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub self_managed_environment_fee_per_year: Decimal,
    #[validate(nested)]
    pub internal_user_bands: Vec<UserBand>,
    #[validate(nested)]
    pub external_user_bands: Vec<UserBand>,
    #[validate(nested)]
    pub add_ons: Vec<AddOn>,
}

impl MendixPricingTable {
    /// Cross-field checks the derive cannot express
    pub(crate) fn check(&self) -> PricingResult<()> {
        let mut seen = HashSet::new();
        for pack in &self.resource_packs {
            if !seen.insert((pack.plan, pack.size.as_str())) {
                return Err(PricingError::data(
                    TABLE,
                    format!("duplicate resource pack {} {}", pack.plan, pack.size),
                ));
            }
        }
        if self.find_pack(&self.default_pack).is_none() {
            return Err(PricingError::data(
                TABLE,
                format!(
                    "default pack {} {} is not in the table",
                    self.default_pack.plan, self.default_pack.size
                ),
            ));
        }
        check_bands(TABLE, "internal", &self.internal_user_bands)?;
        check_bands(TABLE, "external", &self.external_user_bands)
    }

    pub fn find_pack(&self, key: &ResourcePackRef) -> Option<&ResourcePack> {
        self.resource_packs.iter().find(|p| p.matches(key))
    }

    pub fn edition_price(&self, edition: MendixEdition) -> PricingResult<&MendixEditionPrice> {
        self.editions
            .iter()
            .find(|e| e.edition == edition)
            .ok_or_else(|| PricingError::UnknownEdition(edition.to_string()))
    }

    /// Annual quote for a Mendix deployment
    pub fn quote(
        &self,
        request: &MendixQuoteRequest,
        policy: AddOnPolicy,
    ) -> PricingResult<LowCodeQuote> {
        let edition = self.edition_price(request.edition)?;
        let mut lines = vec![QuoteLine::new(
            LineCategory::Edition,
            format!("Mendix {} platform", request.edition),
            1,
            edition.platform_fee_per_year,
        )];

        if request.deployment == MendixDeployment::CloudDedicated {
            lines.push(QuoteLine::new(
                LineCategory::Environment,
                "Dedicated cloud infrastructure",
                1,
                self.dedicated_cloud_fee_per_year,
            ));
        }

        let platform = request.deployment.platform();
        let mut cloud_tokens: u32 = 0;
        for environment in &request.environments {
            match platform {
                DeploymentPlatform::Cloud => {
                    let key = environment
                        .resource_pack
                        .as_ref()
                        .unwrap_or(&self.default_pack);
                    let pack = self.find_pack(key).ok_or_else(|| {
                        PricingError::UnknownResourcePack {
                            plan: key.plan.to_string(),
                            size: key.size.clone(),
                        }
                    })?;
                    cloud_tokens = cloud_tokens.saturating_add(pack.cloud_tokens);
                    lines.push(QuoteLine::new(
                        LineCategory::Environment,
                        format!("{}: {} {} resource pack", environment.name, pack.plan, pack.size),
                        1,
                        pack.price_per_year,
                    ));
                }
                DeploymentPlatform::SelfManaged => {
                    if environment.resource_pack.is_some() {
                        warn!(
                            environment = %environment.name,
                            deployment = %request.deployment,
                            "Resource packs only apply to Mendix Cloud, ignoring"
                        );
                    }
                    lines.push(QuoteLine::new(
                        LineCategory::Environment,
                        format!("{}: self-managed environment", environment.name),
                        1,
                        self.self_managed_environment_fee_per_year,
                    ));
                }
            }
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

        let environment_count = u32::try_from(request.environments.len()).unwrap_or(u32::MAX);
        let (add_on_lines, skipped) =
            price_add_ons(&self.add_ons, &request.add_ons, platform, policy, |scaling| {
                match scaling {
                    AddOnScaling::PerEnvironment => environment_count,
                    AddOnScaling::Flat | AddOnScaling::PerAoPack => 1,
                }
            })?;
        lines.extend(add_on_lines);

        Ok(LowCodeQuote::new(
            "Mendix",
            request.edition,
            lines,
            cloud_tokens,
            skipped,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MendixEnvironment {
    pub name: String,
    #[serde(default)]
    pub resource_pack: Option<ResourcePackRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MendixQuoteRequest {
    pub edition: MendixEdition,
    pub deployment: MendixDeployment,
    pub environments: Vec<MendixEnvironment>,
    #[serde(default)]
    pub internal_users: u32,
    #[serde(default)]
    pub external_users: u32,
    #[serde(default)]
    pub add_ons: Vec<String>,
}
