//! Cloud provider pricing tables
//!
//! Every provider is a variant of [`CloudProvider`] backed by a static
//! [`ProviderProfile`]. Lookups are pure: a region (or the provider default)
//! and an HA flag go in, pricing records come out.

mod asia_pacific;
mod developer;
mod european;
mod hyperscalers;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::models::{ComputePricing, NetworkPricing, RegionInfo, StoragePricing};

/// Cloud provider discriminator
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CloudProvider {
    #[default]
    Aws,
    Azure,
    Gcp,
    Oci,
    Ibm,
    Alibaba,
    Tencent,
    Huawei,
    DigitalOcean,
    Linode,
    Vultr,
    Hetzner,
    Ovh,
    Scaleway,
    Civo,
    Exoscale,
    OnPrem,
    /// Red Hat OpenShift Service on AWS
    Rosa,
    /// Azure Red Hat OpenShift
    Aro,
    /// OpenShift Dedicated on GCP
    Osd,
    /// Red Hat OpenShift on IBM Cloud
    Roks,
}

/// Control plane billing rule for a provider's managed Kubernetes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlPlaneRate {
    /// Always charged, HA or not (EKS, GKE)
    Flat(Decimal),
    /// Free tier unless HA is requested
    FreeUnlessHa(Decimal),
    /// Never charged
    Free,
}

/// How region codes affect prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegionalPricing {
    /// Region-invariant prices
    Flat,
    /// Multiplier table applied to compute and storage
    Multiplier,
    /// Multiplier table applied to compute, plus a surcharge outside domestic regions
    Domestic { surcharge: Decimal },
}

/// Region code, display name and price multiplier
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionRate {
    pub code: &'static str,
    pub name: &'static str,
    pub multiplier: Decimal,
}

pub(crate) const fn region(code: &'static str, name: &'static str, multiplier: Decimal) -> RegionRate {
    RegionRate {
        code,
        name,
        multiplier,
    }
}

/// Region code prefixes treated as domestic for surcharge purposes
const DOMESTIC_REGION_PREFIXES: [&str; 2] = ["cn-", "ap-"];

/// Static pricing profile of a single provider
#[derive(Debug)]
pub(crate) struct ProviderProfile {
    pub display_name: &'static str,
    pub default_region: &'static str,
    pub cpu_per_hour: Decimal,
    pub ram_gb_per_hour: Decimal,
    pub openshift_fee_per_worker_hour: Option<Decimal>,
    pub instance_types: &'static [(&'static str, Decimal)],
    pub storage: StoragePricing,
    pub network: NetworkPricing,
    pub control_plane: ControlPlaneRate,
    pub regional_pricing: RegionalPricing,
    pub regions: &'static [RegionRate],
}

static ON_PREM: ProviderProfile = ProviderProfile {
    display_name: "On-Premises",
    default_region: "on-prem",
    cpu_per_hour: Decimal::ZERO,
    ram_gb_per_hour: Decimal::ZERO,
    openshift_fee_per_worker_hour: None,
    instance_types: &[],
    storage: StoragePricing {
        ssd_per_gb_month: Decimal::ZERO,
        hdd_per_gb_month: Decimal::ZERO,
        object_storage_per_gb_month: Decimal::ZERO,
        backup_per_gb_month: Decimal::ZERO,
        registry_per_gb_month: Decimal::ZERO,
    },
    network: NetworkPricing {
        egress_per_gb: Decimal::ZERO,
        load_balancer_per_hour: Decimal::ZERO,
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: Decimal::ZERO,
    },
    control_plane: ControlPlaneRate::Free,
    regional_pricing: RegionalPricing::Flat,
    regions: &[region("on-prem", "On-Premises Datacenter", Decimal::ONE)],
};

/// Pricing tables for one provider and region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudPricingQuote {
    pub provider: CloudProvider,
    pub region: String,
    pub compute: ComputePricing,
    pub storage: StoragePricing,
    pub network: NetworkPricing,
    pub control_plane_per_hour: Decimal,
}

impl CloudProvider {
    /// Iterate over every provider, aliases included
    pub fn all() -> impl Iterator<Item = CloudProvider> {
        CloudProvider::iter()
    }

    /// Resolve managed OpenShift aliases to the provider that hosts them
    pub fn base_provider(self) -> CloudProvider {
        match self {
            CloudProvider::Rosa => CloudProvider::Aws,
            CloudProvider::Aro => CloudProvider::Azure,
            CloudProvider::Osd => CloudProvider::Gcp,
            CloudProvider::Roks => CloudProvider::Ibm,
            other => other,
        }
    }

    /// Whether this variant is a managed OpenShift alias
    pub fn is_openshift_alias(self) -> bool {
        self.base_provider() != self
    }

    /// Managed OpenShift aliases share the profile of their host cloud
    pub(crate) fn profile(self) -> &'static ProviderProfile {
        match self {
            CloudProvider::Aws | CloudProvider::Rosa => &hyperscalers::AWS,
            CloudProvider::Azure | CloudProvider::Aro => &hyperscalers::AZURE,
            CloudProvider::Gcp | CloudProvider::Osd => &hyperscalers::GCP,
            CloudProvider::Oci => &hyperscalers::OCI,
            CloudProvider::Ibm | CloudProvider::Roks => &hyperscalers::IBM,
            CloudProvider::Alibaba => &asia_pacific::ALIBABA,
            CloudProvider::Tencent => &asia_pacific::TENCENT,
            CloudProvider::Huawei => &asia_pacific::HUAWEI,
            CloudProvider::DigitalOcean => &developer::DIGITAL_OCEAN,
            CloudProvider::Linode => &developer::LINODE,
            CloudProvider::Vultr => &developer::VULTR,
            CloudProvider::Civo => &developer::CIVO,
            CloudProvider::Hetzner => &european::HETZNER,
            CloudProvider::Ovh => &european::OVH,
            CloudProvider::Scaleway => &european::SCALEWAY,
            CloudProvider::Exoscale => &european::EXOSCALE,
            CloudProvider::OnPrem => &ON_PREM,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CloudProvider::Rosa => "Red Hat OpenShift Service on AWS",
            CloudProvider::Aro => "Azure Red Hat OpenShift",
            CloudProvider::Osd => "OpenShift Dedicated",
            CloudProvider::Roks => "Red Hat OpenShift on IBM Cloud",
            other => other.profile().display_name,
        }
    }

    /// Region used when the caller does not name one
    pub fn default_region(self) -> &'static str {
        self.profile().default_region
    }

    /// Regional price multiplier looked up by exact region code.
    ///
    /// Region-invariant providers and unknown regions yield exactly 1.0.
    pub fn regional_multiplier(self, region: Option<&str>) -> Decimal {
        let profile = self.profile();
        if profile.regional_pricing == RegionalPricing::Flat {
            return Decimal::ONE;
        }

        let code = region.unwrap_or(profile.default_region);
        match profile.regions.iter().find(|r| r.code == code) {
            Some(rate) => rate.multiplier,
            None => {
                debug!(provider = %self, region = code, "Unknown region, using multiplier 1.0");
                Decimal::ONE
            }
        }
    }

    /// Surcharge applied to compute outside the provider's domestic regions
    pub fn international_surcharge(self, region: Option<&str>) -> Decimal {
        let profile = self.profile();
        match profile.regional_pricing {
            RegionalPricing::Domestic { surcharge } => {
                let code = region.unwrap_or(profile.default_region);
                if DOMESTIC_REGION_PREFIXES
                    .iter()
                    .any(|prefix| code.starts_with(prefix))
                {
                    Decimal::ONE
                } else {
                    surcharge
                }
            }
            RegionalPricing::Flat | RegionalPricing::Multiplier => Decimal::ONE,
        }
    }

    /// Hourly compute rates and instance-type prices for a region
    pub fn compute_pricing(self, region: Option<&str>) -> ComputePricing {
        let profile = self.profile();
        let multiplier = self.regional_multiplier(region) * self.international_surcharge(region);

        let pricing = ComputePricing {
            cpu_per_hour: profile.cpu_per_hour,
            ram_gb_per_hour: profile.ram_gb_per_hour,
            managed_control_plane_per_hour: self.control_plane_cost_per_hour(false),
            openshift_service_fee_per_worker_hour: profile.openshift_fee_per_worker_hour,
            instance_type_prices: profile
                .instance_types
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
        };

        pricing.scaled(multiplier)
    }

    /// Per-GB-month storage rates; only multiplier-table providers vary by region
    pub fn storage_pricing(self, region: Option<&str>) -> StoragePricing {
        let profile = self.profile();
        match profile.regional_pricing {
            RegionalPricing::Multiplier => profile.storage.scaled(self.regional_multiplier(region)),
            RegionalPricing::Flat | RegionalPricing::Domestic { .. } => profile.storage,
        }
    }

    /// Network rates. These are never region-adjusted.
    pub fn network_pricing(self, _region: Option<&str>) -> NetworkPricing {
        self.profile().network
    }

    /// Hourly managed control plane cost
    pub fn control_plane_cost_per_hour(self, is_ha: bool) -> Decimal {
        match self.profile().control_plane {
            ControlPlaneRate::Flat(rate) => rate,
            ControlPlaneRate::FreeUnlessHa(rate) if is_ha => rate,
            ControlPlaneRate::FreeUnlessHa(_) | ControlPlaneRate::Free => Decimal::ZERO,
        }
    }

    /// Managed OpenShift worker-hour surcharge (ROSA, ARO, OSD, ROKS)
    pub fn managed_openshift_fee_per_worker_hour(self) -> Option<Decimal> {
        self.profile().openshift_fee_per_worker_hour
    }

    /// Static region catalogue
    pub fn available_regions(self) -> Vec<RegionInfo> {
        let provider = self.base_provider();
        self.profile()
            .regions
            .iter()
            .map(|r| RegionInfo {
                code: r.code.to_string(),
                display_name: r.name.to_string(),
                provider,
            })
            .collect()
    }

    /// All pricing tables for a region in one record
    pub fn quote(self, region: Option<&str>, is_ha: bool) -> CloudPricingQuote {
        CloudPricingQuote {
            provider: self,
            region: region.unwrap_or(self.default_region()).to_string(),
            compute: self.compute_pricing(region),
            storage: self.storage_pricing(region),
            network: self.network_pricing(region),
            control_plane_per_hour: self.control_plane_cost_per_hour(is_ha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MULTIPLIER_PROVIDERS: [CloudProvider; 4] = [
        CloudProvider::Aws,
        CloudProvider::Azure,
        CloudProvider::Gcp,
        CloudProvider::Oci,
    ];

    #[test]
    fn test_regional_multipliers_within_bounds() {
        for provider in MULTIPLIER_PROVIDERS {
            for region in provider.available_regions() {
                let m = provider.regional_multiplier(Some(&region.code));
                assert!(
                    m >= dec!(0.9) && m <= dec!(1.3),
                    "{provider} {} multiplier {m} out of range",
                    region.code
                );
            }
        }
    }

    #[test]
    fn test_unknown_region_multiplier_is_one() {
        for provider in CloudProvider::all() {
            assert_eq!(provider.regional_multiplier(Some("nowhere-1")), Decimal::ONE);
        }
    }

    #[test]
    fn test_default_region_is_in_catalogue() {
        for provider in CloudProvider::all() {
            let default = provider.default_region();
            assert!(
                provider.available_regions().iter().any(|r| r.code == default),
                "{provider} default region {default} missing from catalogue"
            );
        }
    }

    #[test]
    fn test_none_region_resolves_to_default() {
        for provider in CloudProvider::all() {
            let default = provider.default_region();
            assert_eq!(
                provider.compute_pricing(None),
                provider.compute_pricing(Some(default))
            );
            assert_eq!(
                provider.storage_pricing(None),
                provider.storage_pricing(Some(default))
            );
        }
    }

    #[test]
    fn test_aws_control_plane_is_flat() {
        assert_eq!(CloudProvider::Aws.control_plane_cost_per_hour(true), dec!(0.10));
        assert_eq!(CloudProvider::Aws.control_plane_cost_per_hour(false), dec!(0.10));
        assert_eq!(CloudProvider::Gcp.control_plane_cost_per_hour(false), dec!(0.10));
    }

    #[test]
    fn test_free_tier_control_planes() {
        assert_eq!(CloudProvider::Azure.control_plane_cost_per_hour(false), Decimal::ZERO);
        assert!(CloudProvider::Azure.control_plane_cost_per_hour(true) > Decimal::ZERO);
        assert_eq!(CloudProvider::Hetzner.control_plane_cost_per_hour(true), Decimal::ZERO);
    }

    #[test]
    fn test_compute_control_plane_matches_non_ha_rate() {
        for provider in CloudProvider::all() {
            for region in provider.available_regions() {
                assert_eq!(
                    provider.compute_pricing(Some(&region.code)).managed_control_plane_per_hour,
                    provider.control_plane_cost_per_hour(false),
                    "{provider} {}",
                    region.code
                );
            }
        }
        assert_eq!(
            CloudProvider::Azure.compute_pricing(None).managed_control_plane_per_hour,
            Decimal::ZERO
        );
        assert_eq!(
            CloudProvider::Aws.compute_pricing(Some("sa-east-1")).managed_control_plane_per_hour,
            dec!(0.10)
        );
    }

    #[test]
    fn test_aliases_price_like_their_host_cloud() {
        for alias in [
            CloudProvider::Rosa,
            CloudProvider::Aro,
            CloudProvider::Osd,
            CloudProvider::Roks,
        ] {
            let host = alias.base_provider();
            assert_ne!(host, CloudProvider::OnPrem);
            assert_eq!(alias.compute_pricing(None), host.compute_pricing(None));
            assert_eq!(alias.storage_pricing(None), host.storage_pricing(None));
            assert_eq!(alias.network_pricing(None), host.network_pricing(None));
            assert_eq!(alias.default_region(), host.default_region());
            assert!(alias.compute_pricing(None).cpu_per_hour > Decimal::ZERO);
        }
    }

    #[test]
    fn test_on_prem_is_all_zero() {
        for region in [None, Some("on-prem"), Some("us-east-1"), Some("")] {
            let compute = CloudProvider::OnPrem.compute_pricing(region);
            assert_eq!(compute, ComputePricing::zero());
            assert_eq!(
                CloudProvider::OnPrem.storage_pricing(region),
                StoragePricing::default()
            );
            assert_eq!(
                CloudProvider::OnPrem.network_pricing(region),
                NetworkPricing::default()
            );
        }
        assert_eq!(CloudProvider::OnPrem.control_plane_cost_per_hour(true), Decimal::ZERO);
    }

    #[test]
    fn test_regional_multiplier_scales_compute_and_storage() {
        let base = CloudProvider::Aws.compute_pricing(Some("us-east-1"));
        let sao_paulo = CloudProvider::Aws.compute_pricing(Some("sa-east-1"));
        let m = CloudProvider::Aws.regional_multiplier(Some("sa-east-1"));

        assert_eq!(sao_paulo.cpu_per_hour, base.cpu_per_hour * m);
        assert_eq!(
            sao_paulo.instance_type_prices["m5.xlarge"],
            base.instance_type_prices["m5.xlarge"] * m
        );

        let storage = CloudProvider::Aws.storage_pricing(Some("sa-east-1"));
        assert_eq!(
            storage.ssd_per_gb_month,
            CloudProvider::Aws.storage_pricing(None).ssd_per_gb_month * m
        );
    }

    #[test]
    fn test_network_never_region_adjusted() {
        for provider in MULTIPLIER_PROVIDERS {
            let regions = provider.available_regions();
            let first = provider.network_pricing(Some(&regions[0].code));
            for region in &regions {
                assert_eq!(provider.network_pricing(Some(&region.code)), first);
            }
        }
    }

    #[test]
    fn test_international_surcharge() {
        assert_eq!(
            CloudProvider::Alibaba.international_surcharge(Some("cn-hangzhou")),
            Decimal::ONE
        );
        assert_eq!(
            CloudProvider::Alibaba.international_surcharge(Some("eu-central-1")),
            dec!(1.10)
        );
        assert_eq!(
            CloudProvider::Tencent.international_surcharge(Some("na-siliconvalley")),
            dec!(1.15)
        );
        assert_eq!(
            CloudProvider::Aws.international_surcharge(Some("eu-central-1")),
            Decimal::ONE
        );

        let domestic = CloudProvider::Alibaba.compute_pricing(Some("cn-hangzhou"));
        let frankfurt = CloudProvider::Alibaba.compute_pricing(Some("eu-central-1"));
        let expected = domestic.cpu_per_hour
            * CloudProvider::Alibaba.regional_multiplier(Some("eu-central-1"))
            * dec!(1.10);
        assert_eq!(frankfurt.cpu_per_hour, expected);
    }

    #[test]
    fn test_domestic_providers_keep_storage_region_invariant() {
        for provider in [
            CloudProvider::Alibaba,
            CloudProvider::Tencent,
            CloudProvider::Huawei,
        ] {
            assert_eq!(
                provider.storage_pricing(Some("eu-central-1")),
                provider.storage_pricing(None)
            );
        }
    }

    #[test]
    fn test_openshift_aliases() {
        assert_eq!(CloudProvider::Rosa.base_provider(), CloudProvider::Aws);
        assert_eq!(
            CloudProvider::Rosa.managed_openshift_fee_per_worker_hour(),
            Some(dec!(0.171))
        );
        assert_eq!(
            CloudProvider::Aro.managed_openshift_fee_per_worker_hour(),
            Some(dec!(0.21))
        );
        assert_eq!(
            CloudProvider::Osd.managed_openshift_fee_per_worker_hour(),
            Some(dec!(0.166))
        );
        assert_eq!(
            CloudProvider::Roks.managed_openshift_fee_per_worker_hour(),
            Some(dec!(0.20))
        );
        assert_eq!(CloudProvider::Hetzner.managed_openshift_fee_per_worker_hour(), None);
        assert!(CloudProvider::Roks.is_openshift_alias());
        assert!(!CloudProvider::Ibm.is_openshift_alias());
    }

    #[test]
    fn test_all_rates_non_negative() {
        for provider in CloudProvider::all() {
            let quote = provider.quote(None, true);
            assert!(quote.compute.cpu_per_hour >= Decimal::ZERO);
            assert!(quote.compute.ram_gb_per_hour >= Decimal::ZERO);
            assert!(quote.compute.instance_type_prices.values().all(|p| *p >= Decimal::ZERO));
            assert!(quote.storage.ssd_per_gb_month >= Decimal::ZERO);
            assert!(quote.network.egress_per_gb >= Decimal::ZERO);
            assert!(quote.control_plane_per_hour >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_provider_parses_from_string() {
        assert_eq!("aws".parse::<CloudProvider>().unwrap(), CloudProvider::Aws);
        assert_eq!(
            "DigitalOcean".parse::<CloudProvider>().unwrap(),
            CloudProvider::DigitalOcean
        );
        assert_eq!("onprem".parse::<CloudProvider>().unwrap(), CloudProvider::OnPrem);
        assert!("nimbus".parse::<CloudProvider>().is_err());
    }
}
