//! Distribution -> licensing terms lookup

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::support::{
    SupportTierDef, CANONICAL, LIGHTWEIGHT_COMMUNITY, OPEN_CORE_COMMUNITY, RED_HAT, SUSE,
    VANILLA_COMMUNITY, VMWARE,
};
use super::{
    CharmedEdition, Distribution, LicensingOptions, LicensingStrategy, OpenShiftModel,
    StrategyKind, SuseEdition, TanzuEdition, TemplateTerms,
};
use crate::models::{LicensingModel, SupportTier};

const TANZU_MIN_CORES: u32 = 16;

impl TemplateTerms {
    fn paid(
        model: LicensingModel,
        label: &str,
        rate: Decimal,
        support_tiers: &'static [SupportTierDef],
    ) -> Self {
        Self {
            requires_license: true,
            model,
            model_label: label.to_string(),
            rate,
            min_billable_units: 0,
            cluster_fixed_cost_per_year: Decimal::ZERO,
            support_tiers,
            community_support: &[],
            managed_worker_fee_per_hour: None,
        }
    }

    fn open_source(community_support: &'static [(SupportTier, Decimal)]) -> Self {
        Self {
            requires_license: false,
            model: LicensingModel::PerNode,
            model_label: super::OPEN_SOURCE_MODEL.to_string(),
            rate: Decimal::ZERO,
            min_billable_units: 0,
            cluster_fixed_cost_per_year: Decimal::ZERO,
            support_tiers: &[],
            community_support,
            managed_worker_fee_per_hour: None,
        }
    }

    /// Paid per-node terms when `rate` is set, community terms otherwise
    fn open_core(
        rate: Option<Decimal>,
        label: &str,
        support_tiers: &'static [SupportTierDef],
        community_support: &'static [(SupportTier, Decimal)],
    ) -> Self {
        match rate {
            Some(rate) => Self::paid(LicensingModel::PerNode, label, rate, support_tiers),
            None => Self::open_source(community_support),
        }
    }
}

fn openshift_terms(model: OpenShiftModel) -> TemplateTerms {
    let (model, label, rate) = match model {
        OpenShiftModel::PerNode => (LicensingModel::PerNode, "Per Node Subscription", dec!(2500)),
        OpenShiftModel::PerCore => (LicensingModel::PerCore, "Per Core Subscription", dec!(200)),
        OpenShiftModel::PerSocket => (
            LicensingModel::PerSocket,
            "Per Socket-Pair Subscription",
            dec!(1875),
        ),
        OpenShiftModel::PerWorkerNode => (
            LicensingModel::PerWorkerNode,
            "Per Worker Node Subscription",
            dec!(2500),
        ),
    };
    TemplateTerms::paid(model, label, rate, &RED_HAT)
}

fn tanzu_terms(edition: TanzuEdition) -> TemplateTerms {
    let (label, rate) = match edition {
        TanzuEdition::Standard => ("Tanzu Standard - Per Core", dec!(1500)),
        TanzuEdition::Advanced => ("Tanzu Advanced - Per Core", dec!(2000)),
        TanzuEdition::Enterprise => ("Tanzu Enterprise - Per Core", dec!(2500)),
    };
    let mut terms = TemplateTerms::paid(LicensingModel::PerCore, label, rate, &VMWARE);
    terms.min_billable_units = TANZU_MIN_CORES;
    terms
}

fn suse_rate(edition: SuseEdition, prime: Decimal, government: Decimal) -> Option<Decimal> {
    match edition {
        SuseEdition::Community => None,
        SuseEdition::Prime => Some(prime),
        SuseEdition::Government => Some(government),
    }
}

impl LicensingStrategy {
    /// Resolve the licensing strategy of a distribution under the given options
    pub fn for_distribution(distribution: Distribution, options: &LicensingOptions) -> Self {
        if let Some(provider) = distribution.managed_openshift_provider() {
            return Self {
                distribution,
                name: provider.display_name(),
                kind: StrategyKind::ManagedOpenShift {
                    fee_per_worker_hour: provider
                        .managed_openshift_fee_per_worker_hour()
                        .unwrap_or_default(),
                },
            };
        }

        if let Some(provider) = distribution.managed_kubernetes_provider() {
            return Self {
                distribution,
                name: provider.display_name(),
                kind: StrategyKind::ManagedKubernetes {
                    control_plane_per_hour: provider
                        .control_plane_cost_per_hour(options.ha_control_plane),
                },
            };
        }

        let (name, mut terms) = match distribution {
            Distribution::OpenShift => (
                "Red Hat OpenShift Container Platform",
                openshift_terms(options.openshift_model),
            ),
            Distribution::Tanzu => ("VMware Tanzu", tanzu_terms(options.tanzu_edition)),
            Distribution::Rancher => (
                "SUSE Rancher",
                TemplateTerms::open_core(
                    suse_rate(options.rancher_edition, dec!(1000), dec!(1500)),
                    "Rancher Prime - Per Node",
                    &SUSE,
                    &OPEN_CORE_COMMUNITY,
                ),
            ),
            Distribution::Rke2 => (
                "RKE2",
                TemplateTerms::open_core(
                    suse_rate(options.rke2_edition, dec!(750), dec!(1200)),
                    "RKE2 Prime - Per Node",
                    &SUSE,
                    &OPEN_CORE_COMMUNITY,
                ),
            ),
            Distribution::K3s => (
                "K3s",
                TemplateTerms::open_core(
                    options.k3s_rancher_prime.then_some(dec!(500)),
                    "K3s Rancher Prime - Per Node",
                    &SUSE,
                    &LIGHTWEIGHT_COMMUNITY,
                ),
            ),
            Distribution::MicroK8s => (
                "Canonical MicroK8s",
                TemplateTerms::open_core(
                    options.microk8s_ubuntu_pro.then_some(dec!(225)),
                    "Ubuntu Pro - Per Node",
                    &CANONICAL,
                    &LIGHTWEIGHT_COMMUNITY,
                ),
            ),
            Distribution::Charmed => {
                let rate = match options.charmed_edition {
                    CharmedEdition::Community => None,
                    CharmedEdition::Pro => Some(dec!(500)),
                    CharmedEdition::ProSupport => Some(dec!(1500)),
                };
                (
                    "Charmed Kubernetes",
                    TemplateTerms::open_core(
                        rate,
                        "Charmed Kubernetes Support - Per Node",
                        &CANONICAL,
                        &OPEN_CORE_COMMUNITY,
                    ),
                )
            }
            _ => (
                "Kubernetes (Vanilla)",
                TemplateTerms::open_source(&VANILLA_COMMUNITY),
            ),
        };

        if terms.requires_license {
            if let Some(fee) = options.negotiated_cluster_fee {
                terms.model = LicensingModel::FlatRate;
                terms.model_label = "Negotiated Cluster Subscription".to_string();
                terms.rate = fee;
                terms.min_billable_units = 0;
            }
        }

        let mut strategy = Self {
            distribution,
            name,
            kind: StrategyKind::Template(terms),
        };
        if let Some(fee) = options.managed_worker_fee_per_hour {
            strategy = strategy.with_managed_fee(fee);
        }
        if let Some(cost) = options.cluster_fixed_cost_per_year {
            strategy = strategy.with_cluster_fixed_cost(cost);
        }
        strategy
    }
}
