use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};

use crate::cloud::CloudProvider;

/// Hours billed per year for hourly rates
pub const HOURS_PER_YEAR: Decimal = dec!(8760);

/// Hours billed per month (~30.4 days * 24 hours)
pub const HOURS_PER_MONTH: Decimal = dec!(730);

/// Months per year, used for monthly/yearly conversions
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Hourly compute rates for a provider in a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputePricing {
    /// Price per vCPU-hour
    pub cpu_per_hour: Decimal,
    /// Price per GB of RAM per hour
    pub ram_gb_per_hour: Decimal,
    /// Managed Kubernetes control plane price per hour without HA; not region-adjusted
    pub managed_control_plane_per_hour: Decimal,
    /// Managed OpenShift service fee per worker-hour (ROSA, ARO, OSD, ROKS)
    pub openshift_service_fee_per_worker_hour: Option<Decimal>,
    /// Hourly price per named instance type
    pub instance_type_prices: BTreeMap<String, Decimal>,
}

impl ComputePricing {
    /// All-zero compute pricing
    pub fn zero() -> Self {
        Self {
            cpu_per_hour: Decimal::ZERO,
            ram_gb_per_hour: Decimal::ZERO,
            managed_control_plane_per_hour: Decimal::ZERO,
            openshift_service_fee_per_worker_hour: None,
            instance_type_prices: BTreeMap::new(),
        }
    }

    /// Hourly price for one node.
    ///
    /// Uses the named instance type when the table knows it, otherwise falls back
    /// to `cpu * vcpus + ram * memory_gb`.
    pub fn node_price_per_hour(
        &self,
        instance_type: Option<&str>,
        vcpus: u32,
        memory_gb: u32,
    ) -> Decimal {
        instance_type
            .and_then(|name| self.instance_type_prices.get(name).copied())
            .unwrap_or_else(|| {
                self.cpu_per_hour * Decimal::from(vcpus)
                    + self.ram_gb_per_hour * Decimal::from(memory_gb)
            })
    }

    pub(crate) fn scaled(mut self, multiplier: Decimal) -> Self {
        if multiplier == Decimal::ONE {
            return self;
        }
        self.cpu_per_hour *= multiplier;
        self.ram_gb_per_hour *= multiplier;
        self.openshift_service_fee_per_worker_hour = self
            .openshift_service_fee_per_worker_hour
            .map(|fee| fee * multiplier);
        for price in self.instance_type_prices.values_mut() {
            *price *= multiplier;
        }
        self
    }
}

/// Per-GB-month storage rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoragePricing {
    pub ssd_per_gb_month: Decimal,
    pub hdd_per_gb_month: Decimal,
    pub object_storage_per_gb_month: Decimal,
    pub backup_per_gb_month: Decimal,
    pub registry_per_gb_month: Decimal,
}

impl StoragePricing {
    pub(crate) fn scaled(self, multiplier: Decimal) -> Self {
        Self {
            ssd_per_gb_month: self.ssd_per_gb_month * multiplier,
            hdd_per_gb_month: self.hdd_per_gb_month * multiplier,
            object_storage_per_gb_month: self.object_storage_per_gb_month * multiplier,
            backup_per_gb_month: self.backup_per_gb_month * multiplier,
            registry_per_gb_month: self.registry_per_gb_month * multiplier,
        }
    }
}

/// Network rates (egress per GB, everything else per hour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkPricing {
    pub egress_per_gb: Decimal,
    pub load_balancer_per_hour: Decimal,
    pub nat_gateway_per_hour: Decimal,
    pub vpn_per_hour: Decimal,
    pub public_ip_per_hour: Decimal,
}

/// A provider region as listed in the provider catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Provider-specific region code (e.g. "us-east-1", "eastus")
    pub code: String,
    pub display_name: String,
    pub provider: CloudProvider,
}

/// Support level requested for a distribution subscription
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SupportTier {
    /// No vendor support
    None,
    Basic,
    #[default]
    Standard,
    Premium,
    Enterprise,
}

/// Support offering of a distribution vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTierInfo {
    pub tier: SupportTier,
    pub name: String,
    /// Coverage hours (e.g. "8x5", "24x7")
    pub hours: String,
    pub response_sla: String,
    /// Multiplier over the license cost; 1.0 means support is included
    pub cost_multiplier: Decimal,
    pub additional_annual_cost: Decimal,
    /// Technical account manager included
    pub includes_tam: bool,
}

/// How a distribution bills its subscription
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LicensingModel {
    PerNode,
    PerCore,
    PerSocket,
    PerWorkerNode,
    FlatRate,
    UsageBased,
}

/// Cluster shape and contract parameters for a licensing calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingInput {
    pub node_count: u32,
    pub total_cores: u32,
    pub total_sockets: u32,
    pub master_node_count: u32,
    pub worker_node_count: u32,
    pub infra_node_count: u32,
    pub support_tier: SupportTier,
    /// Contract length in years (1 or more)
    pub contract_years: u32,
    pub is_managed_service: bool,
}

impl Default for LicensingInput {
    fn default() -> Self {
        Self {
            node_count: 0,
            total_cores: 0,
            total_sockets: 0,
            master_node_count: 0,
            worker_node_count: 0,
            infra_node_count: 0,
            support_tier: SupportTier::default(),
            contract_years: 1,
            is_managed_service: false,
        }
    }
}

/// Annual licensing and support cost for one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicensingCost {
    pub base_license_per_year: Decimal,
    pub support_cost_per_year: Decimal,
    pub additional_fees_per_year: Decimal,
    pub per_node_per_year: Decimal,
    /// Multi-year discount applied to the base license, in percent
    pub discount_percent: Decimal,
    /// Human-readable description of the licensing model
    pub licensing_model: String,
}

impl LicensingCost {
    /// Zero-cost result with the given model description
    pub fn free(licensing_model: impl Into<String>) -> Self {
        Self {
            base_license_per_year: Decimal::ZERO,
            support_cost_per_year: Decimal::ZERO,
            additional_fees_per_year: Decimal::ZERO,
            per_node_per_year: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            licensing_model: licensing_model.into(),
        }
    }

    pub fn total_per_year(&self) -> Decimal {
        self.base_license_per_year + self.support_cost_per_year + self.additional_fees_per_year
    }

    pub fn total_per_month(&self) -> Decimal {
        self.total_per_year() / MONTHS_PER_YEAR
    }
}
