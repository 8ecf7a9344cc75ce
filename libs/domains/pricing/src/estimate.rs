//! Cluster cost estimate: provider infrastructure plus distribution licensing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;
use validator::Validate;

use crate::cloud::CloudProvider;
use crate::licensing::{Distribution, LicensingOptions, LicensingStrategy};
use crate::models::{
    LicensingCost, LicensingInput, SupportTier, HOURS_PER_MONTH, MONTHS_PER_YEAR,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NodeRole {
    Master,
    #[default]
    Worker,
    Infra,
}

fn default_sockets() -> u32 {
    1
}

fn default_contract_years() -> u32 {
    1
}

/// Identical nodes sharing one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NodePool {
    #[serde(default)]
    pub role: NodeRole,
    pub count: u32,
    #[validate(range(min = 1))]
    pub vcpus: u32,
    #[validate(range(min = 1))]
    pub memory_gb: u32,
    /// Provider instance type; unknown types fall back to per-vCPU/GB pricing
    #[serde(default)]
    pub instance_type: Option<String>,
    #[serde(default = "default_sockets")]
    pub sockets_per_node: u32,
}

/// Provisioned storage in GB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageRequirements {
    pub ssd_gb: u32,
    pub hdd_gb: u32,
    pub object_storage_gb: u32,
    pub backup_gb: u32,
    pub registry_gb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkRequirements {
    pub egress_gb_per_month: u32,
    pub load_balancers: u32,
    pub nat_gateways: u32,
    pub vpn_connections: u32,
    pub public_ips: u32,
}

/// Cluster topology to price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClusterSizing {
    pub provider: CloudProvider,
    #[serde(default)]
    pub region: Option<String>,
    pub distribution: Distribution,
    #[serde(default)]
    pub options: LicensingOptions,
    #[validate(length(min = 1), nested)]
    pub node_pools: Vec<NodePool>,
    #[serde(default)]
    pub storage: StorageRequirements,
    #[serde(default)]
    pub network: NetworkRequirements,
    #[serde(default)]
    pub support_tier: SupportTier,
    #[serde(default = "default_contract_years")]
    #[validate(range(min = 1))]
    pub contract_years: u32,
    /// Billed as a hosted service (adds the managed worker fee when configured)
    #[serde(default)]
    pub managed_service: bool,
    #[serde(default)]
    pub ha_control_plane: bool,
}

impl ClusterSizing {
    fn count(&self, role: NodeRole) -> u32 {
        self.node_pools
            .iter()
            .filter(|p| p.role == role)
            .fold(0u32, |total, p| total.saturating_add(p.count))
    }

    /// Totals saturate at `u32::MAX` instead of wrapping
    fn sum_over_pools(&self, per_pool: impl Fn(&NodePool) -> u32) -> u32 {
        self.node_pools
            .iter()
            .fold(0u32, |total, p| total.saturating_add(per_pool(p)))
    }

    /// Licensing input derived from the node pools
    pub fn licensing_input(&self) -> LicensingInput {
        LicensingInput {
            node_count: self.sum_over_pools(|p| p.count),
            total_cores: self.sum_over_pools(|p| p.count.saturating_mul(p.vcpus)),
            total_sockets: self.sum_over_pools(|p| p.count.saturating_mul(p.sockets_per_node)),
            master_node_count: self.count(NodeRole::Master),
            worker_node_count: self.count(NodeRole::Worker),
            infra_node_count: self.count(NodeRole::Infra),
            support_tier: self.support_tier,
            contract_years: self.contract_years,
            is_managed_service: self.managed_service,
        }
    }

    fn licensing_options(&self) -> LicensingOptions {
        LicensingOptions {
            ha_control_plane: self.ha_control_plane || self.options.ha_control_plane,
            ..self.options.clone()
        }
    }
}

/// Monthly and yearly cost of a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCostEstimate {
    pub provider: CloudProvider,
    pub region: String,
    pub distribution: Distribution,
    /// Nodes the customer pays compute for
    pub billable_nodes: u32,
    pub compute_per_month: Decimal,
    pub storage_per_month: Decimal,
    pub network_per_month: Decimal,
    pub licensing_per_month: Decimal,
    pub licensing: LicensingCost,
    pub total_per_month: Decimal,
    pub total_per_year: Decimal,
}

pub(crate) fn estimate_cluster(sizing: &ClusterSizing) -> ClusterCostEstimate {
    let provider = sizing.provider;
    let region = sizing.region.as_deref();
    let provider_managed = sizing.distribution.is_provider_managed();

    let compute = provider.compute_pricing(region);
    let mut billable_nodes: u32 = 0;
    let mut compute_per_month = Decimal::ZERO;
    for pool in &sizing.node_pools {
        if provider_managed && pool.role == NodeRole::Master {
            debug!(count = pool.count, "Control plane nodes run by the provider, not billed");
            continue;
        }
        billable_nodes = billable_nodes.saturating_add(pool.count);
        let hourly =
            compute.node_price_per_hour(pool.instance_type.as_deref(), pool.vcpus, pool.memory_gb);
        compute_per_month += hourly * Decimal::from(pool.count) * HOURS_PER_MONTH;
    }

    let storage = provider.storage_pricing(region);
    let needs = sizing.storage;
    let storage_per_month = storage.ssd_per_gb_month * Decimal::from(needs.ssd_gb)
        + storage.hdd_per_gb_month * Decimal::from(needs.hdd_gb)
        + storage.object_storage_per_gb_month * Decimal::from(needs.object_storage_gb)
        + storage.backup_per_gb_month * Decimal::from(needs.backup_gb)
        + storage.registry_per_gb_month * Decimal::from(needs.registry_gb);

    let network = provider.network_pricing(region);
    let traffic = sizing.network;
    let network_hourly = network.load_balancer_per_hour * Decimal::from(traffic.load_balancers)
        + network.nat_gateway_per_hour * Decimal::from(traffic.nat_gateways)
        + network.vpn_per_hour * Decimal::from(traffic.vpn_connections)
        + network.public_ip_per_hour * Decimal::from(traffic.public_ips);
    let network_per_month = network.egress_per_gb * Decimal::from(traffic.egress_gb_per_month)
        + network_hourly * HOURS_PER_MONTH;

    let strategy =
        LicensingStrategy::for_distribution(sizing.distribution, &sizing.licensing_options());
    let licensing = strategy.calculate(&sizing.licensing_input());
    let licensing_per_month = licensing.total_per_month();

    let infrastructure_per_month = compute_per_month + storage_per_month + network_per_month;
    let total_per_month = infrastructure_per_month + licensing_per_month;
    let total_per_year = infrastructure_per_month * MONTHS_PER_YEAR + licensing.total_per_year();

    ClusterCostEstimate {
        provider,
        region: region.unwrap_or(provider.default_region()).to_string(),
        distribution: sizing.distribution,
        billable_nodes,
        compute_per_month,
        storage_per_month,
        network_per_month,
        licensing_per_month,
        licensing,
        total_per_month,
        total_per_year,
    }
}
