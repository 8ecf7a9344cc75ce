//! Kubernetes distribution licensing
//!
//! Each [`Distribution`] resolves to a [`LicensingStrategy`], a plain data
//! record describing how the vendor bills. Subscription distributions run
//! through the shared template calculation; managed OpenShift and managed
//! cloud Kubernetes use dedicated hourly paths.

mod catalog;
mod support;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::cloud::CloudProvider;
use crate::error::{PricingError, PricingResult};
use crate::models::{
    LicensingCost, LicensingInput, LicensingModel, SupportTier, SupportTierInfo, HOURS_PER_YEAR,
};
use support::{community_support_cost, resolve_tier, SupportTierDef};

pub const OPEN_SOURCE_MODEL: &str = "Open Source - No License Required";
pub const MANAGED_SERVICE_MODEL: &str = "Managed Service - Per Worker Hour";
pub const MANAGED_CONTROL_PLANE_MODEL: &str = "Managed Control Plane - Hourly";

/// Kubernetes distribution discriminator
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Distribution {
    /// Upstream Kubernetes
    #[default]
    Kubernetes,
    OpenShift,
    Rosa,
    Aro,
    Osd,
    Roks,
    Tanzu,
    Rancher,
    Rke2,
    K3s,
    MicroK8s,
    Charmed,
    Eks,
    Aks,
    Gke,
    Oke,
    Iks,
    Ack,
    Tke,
    Cce,
    Doks,
    Lke,
    Vke,
    HetznerK8s,
    OvhKubernetes,
    ScalewayKapsule,
}

impl Distribution {
    pub fn all() -> impl Iterator<Item = Distribution> {
        Distribution::iter()
    }

    /// Provider operating the managed OpenShift service, if any
    pub fn managed_openshift_provider(self) -> Option<CloudProvider> {
        match self {
            Distribution::Rosa => Some(CloudProvider::Rosa),
            Distribution::Aro => Some(CloudProvider::Aro),
            Distribution::Osd => Some(CloudProvider::Osd),
            Distribution::Roks => Some(CloudProvider::Roks),
            _ => None,
        }
    }

    /// Provider operating the managed Kubernetes control plane, if any
    pub fn managed_kubernetes_provider(self) -> Option<CloudProvider> {
        match self {
            Distribution::Eks => Some(CloudProvider::Aws),
            Distribution::Aks => Some(CloudProvider::Azure),
            Distribution::Gke => Some(CloudProvider::Gcp),
            Distribution::Oke => Some(CloudProvider::Oci),
            Distribution::Iks => Some(CloudProvider::Ibm),
            Distribution::Ack => Some(CloudProvider::Alibaba),
            Distribution::Tke => Some(CloudProvider::Tencent),
            Distribution::Cce => Some(CloudProvider::Huawei),
            Distribution::Doks => Some(CloudProvider::DigitalOcean),
            Distribution::Lke => Some(CloudProvider::Linode),
            Distribution::Vke => Some(CloudProvider::Vultr),
            Distribution::HetznerK8s => Some(CloudProvider::Hetzner),
            Distribution::OvhKubernetes => Some(CloudProvider::Ovh),
            Distribution::ScalewayKapsule => Some(CloudProvider::Scaleway),
            _ => None,
        }
    }

    /// Whether the provider runs the control plane (masters are not customer nodes)
    pub fn is_provider_managed(self) -> bool {
        self.managed_openshift_provider().is_some() || self.managed_kubernetes_provider().is_some()
    }
}

/// OpenShift subscription unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OpenShiftModel {
    #[default]
    PerNode,
    PerCore,
    PerSocket,
    PerWorkerNode,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TanzuEdition {
    #[default]
    Standard,
    Advanced,
    Enterprise,
}

/// Rancher / RKE2 subscription level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SuseEdition {
    #[default]
    Community,
    Prime,
    Government,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharmedEdition {
    #[default]
    Community,
    Pro,
    ProSupport,
}

/// Caller-selected licensing context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingOptions {
    pub openshift_model: OpenShiftModel,
    pub tanzu_edition: TanzuEdition,
    pub rancher_edition: SuseEdition,
    pub rke2_edition: SuseEdition,
    pub k3s_rancher_prime: bool,
    pub microk8s_ubuntu_pro: bool,
    pub charmed_edition: CharmedEdition,
    /// HA control plane for managed cloud Kubernetes
    pub ha_control_plane: bool,
    /// Negotiated per-cluster annual fee; switches the template to flat-rate billing
    pub negotiated_cluster_fee: Option<Decimal>,
    /// Hosted management fee per worker-hour, charged when the input is a managed service
    pub managed_worker_fee_per_hour: Option<Decimal>,
    /// Fixed annual cost per cluster on top of node licensing
    pub cluster_fixed_cost_per_year: Option<Decimal>,
}

impl LicensingOptions {
    /// Select the edition named by `edition` for `distribution`.
    ///
    /// Tanzu takes standard/advanced/enterprise, Rancher and RKE2 take
    /// community/prime/government, Charmed takes community/pro/pro_support.
    /// K3s accepts `prime` and MicroK8s accepts `pro`; both also accept
    /// `community`. Distributions without editions reject any name.
    pub fn apply_edition(&mut self, distribution: Distribution, edition: &str) -> PricingResult<()> {
        let unknown = || PricingError::UnknownEdition(format!("{distribution}/{edition}"));
        match distribution {
            Distribution::Tanzu => self.tanzu_edition = edition.parse().map_err(|_| unknown())?,
            Distribution::Rancher => self.rancher_edition = edition.parse().map_err(|_| unknown())?,
            Distribution::Rke2 => self.rke2_edition = edition.parse().map_err(|_| unknown())?,
            Distribution::Charmed => self.charmed_edition = edition.parse().map_err(|_| unknown())?,
            Distribution::K3s => match edition.to_ascii_lowercase().as_str() {
                "prime" | "rancher_prime" => self.k3s_rancher_prime = true,
                "community" => self.k3s_rancher_prime = false,
                _ => return Err(unknown()),
            },
            Distribution::MicroK8s => match edition.to_ascii_lowercase().as_str() {
                "pro" | "ubuntu_pro" => self.microk8s_ubuntu_pro = true,
                "community" => self.microk8s_ubuntu_pro = false,
                _ => return Err(unknown()),
            },
            _ => return Err(unknown()),
        }
        Ok(())
    }
}

/// Multi-year contract discount on the base license.
///
/// 0% for one year, 5% for two, 10% for three, 15% from four years on.
pub fn multi_year_discount(contract_years: u32) -> Decimal {
    match contract_years {
        0 | 1 => Decimal::ZERO,
        2 => dec!(0.05),
        3 => dec!(0.10),
        _ => dec!(0.15),
    }
}

/// Billing terms of a subscription distribution
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TemplateTerms {
    pub requires_license: bool,
    pub model: LicensingModel,
    pub model_label: String,
    /// Price per billable unit per year (per hour for usage-based)
    pub rate: Decimal,
    pub min_billable_units: u32,
    pub cluster_fixed_cost_per_year: Decimal,
    pub support_tiers: &'static [SupportTierDef],
    pub community_support: &'static [(SupportTier, Decimal)],
    pub managed_worker_fee_per_hour: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StrategyKind {
    Template(TemplateTerms),
    ManagedOpenShift { fee_per_worker_hour: Decimal },
    ManagedKubernetes { control_plane_per_hour: Decimal },
}

/// Licensing calculator for one distribution
#[derive(Debug, Clone, PartialEq)]
pub struct LicensingStrategy {
    distribution: Distribution,
    name: &'static str,
    kind: StrategyKind,
}

impl LicensingStrategy {
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn requires_license(&self) -> bool {
        match &self.kind {
            StrategyKind::Template(terms) => terms.requires_license,
            StrategyKind::ManagedOpenShift { .. } => true,
            StrategyKind::ManagedKubernetes { .. } => false,
        }
    }

    /// Primary licensing model of the strategy
    pub fn model(&self) -> LicensingModel {
        match &self.kind {
            StrategyKind::Template(terms) => terms.model,
            StrategyKind::ManagedOpenShift { .. } | StrategyKind::ManagedKubernetes { .. } => {
                LicensingModel::UsageBased
            }
        }
    }

    /// Support offerings of the vendor (empty for managed services)
    pub fn support_tiers(&self) -> Vec<SupportTierInfo> {
        match &self.kind {
            StrategyKind::Template(terms) => {
                terms.support_tiers.iter().map(SupportTierDef::info).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Fixed annual cost per cluster, independent of node licensing
    pub fn cluster_fixed_cost_per_year(&self) -> Decimal {
        match &self.kind {
            StrategyKind::Template(terms) => terms.cluster_fixed_cost_per_year,
            _ => Decimal::ZERO,
        }
    }

    /// Mark the strategy as a managed variant billed per worker-hour on top of licensing
    pub fn with_managed_fee(mut self, fee_per_worker_hour: Decimal) -> Self {
        if let StrategyKind::Template(terms) = &mut self.kind {
            terms.managed_worker_fee_per_hour = Some(fee_per_worker_hour);
        }
        self
    }

    pub fn with_cluster_fixed_cost(mut self, cost_per_year: Decimal) -> Self {
        if let StrategyKind::Template(terms) = &mut self.kind {
            terms.cluster_fixed_cost_per_year = cost_per_year;
        }
        self
    }

    /// Annual licensing + support cost for a cluster
    pub fn calculate(&self, input: &LicensingInput) -> LicensingCost {
        match &self.kind {
            StrategyKind::Template(terms) => calculate_template(terms, input),
            StrategyKind::ManagedOpenShift { .. } => self.calculate_managed(input),
            StrategyKind::ManagedKubernetes {
                control_plane_per_hour,
            } => {
                let fees = *control_plane_per_hour * HOURS_PER_YEAR;
                let mut cost = LicensingCost::free(MANAGED_CONTROL_PLANE_MODEL);
                cost.additional_fees_per_year = fees;
                cost.per_node_per_year = fees / Decimal::from(input.node_count.max(1));
                cost
            }
        }
    }

    /// Managed OpenShift billing: worker-hour fee only, control plane included.
    ///
    /// Strategies without a worker-hour service fee return a zero cost.
    pub fn calculate_managed(&self, input: &LicensingInput) -> LicensingCost {
        let fee = match &self.kind {
            StrategyKind::ManagedOpenShift {
                fee_per_worker_hour,
            } => *fee_per_worker_hour,
            StrategyKind::Template(terms) => terms.managed_worker_fee_per_hour.unwrap_or_default(),
            StrategyKind::ManagedKubernetes { .. } => Decimal::ZERO,
        };

        let base = Decimal::from(input.worker_node_count) * fee * HOURS_PER_YEAR;
        let divisor = input.node_count.max(input.worker_node_count).max(1);

        LicensingCost {
            base_license_per_year: base,
            support_cost_per_year: Decimal::ZERO,
            additional_fees_per_year: Decimal::ZERO,
            per_node_per_year: base / Decimal::from(divisor),
            discount_percent: Decimal::ZERO,
            licensing_model: MANAGED_SERVICE_MODEL.to_string(),
        }
    }
}

fn calculate_template(terms: &TemplateTerms, input: &LicensingInput) -> LicensingCost {
    let node_divisor = Decimal::from(input.node_count.max(1));

    if !terms.requires_license {
        let support = community_support_cost(terms.community_support, input.support_tier);
        let mut cost = LicensingCost::free(OPEN_SOURCE_MODEL);
        cost.support_cost_per_year = support;
        cost.per_node_per_year = support / node_divisor;
        return cost;
    }

    let units = match terms.model {
        LicensingModel::PerNode => input.node_count,
        LicensingModel::PerCore => input.total_cores,
        LicensingModel::PerSocket => input.total_sockets,
        LicensingModel::PerWorkerNode => input.worker_node_count,
        LicensingModel::FlatRate => 1,
        LicensingModel::UsageBased => input.worker_node_count,
    };
    let billable = Decimal::from(units.max(terms.min_billable_units));
    let rate = match terms.model {
        LicensingModel::UsageBased => terms.rate * HOURS_PER_YEAR,
        _ => terms.rate,
    };

    let undiscounted = billable * rate + terms.cluster_fixed_cost_per_year;
    let discount = multi_year_discount(input.contract_years);
    let base = undiscounted * (Decimal::ONE - discount);

    let support = resolve_tier(terms.support_tiers, input.support_tier)
        .map(|tier| tier.cost_over(base))
        .unwrap_or(Decimal::ZERO);

    let additional_fees = match terms.managed_worker_fee_per_hour {
        Some(fee) if input.is_managed_service => {
            Decimal::from(input.worker_node_count) * fee * HOURS_PER_YEAR
        }
        _ => Decimal::ZERO,
    };

    LicensingCost {
        base_license_per_year: base,
        support_cost_per_year: support,
        additional_fees_per_year: additional_fees,
        per_node_per_year: (base + support + additional_fees) / node_divisor,
        discount_percent: discount * dec!(100),
        licensing_model: terms.model_label.clone(),
    }
}
