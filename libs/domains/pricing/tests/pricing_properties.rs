//! Properties that hold across every provider and distribution

use domain_pricing::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

const MULTIPLIER_PROVIDERS: [CloudProvider; 4] = [
    CloudProvider::Aws,
    CloudProvider::Azure,
    CloudProvider::Gcp,
    CloudProvider::Oci,
];

fn sizing(provider: CloudProvider, distribution: Distribution, workers: u32) -> ClusterSizing {
    serde_json::from_value(json!({
        "provider": provider,
        "distribution": distribution,
        "node_pools": [
            { "role": "master", "count": 3, "vcpus": 4, "memory_gb": 16 },
            { "role": "worker", "count": workers, "vcpus": 8, "memory_gb": 32 }
        ],
        "storage": { "ssd_gb": 500 },
        "network": { "load_balancers": 1 }
    }))
    .unwrap()
}

#[test]
fn test_regional_multipliers_stay_in_bounds() {
    for provider in MULTIPLIER_PROVIDERS {
        for region in provider.available_regions() {
            let multiplier = provider.regional_multiplier(Some(&region.code));
            assert!(
                (dec!(0.9)..=dec!(1.3)).contains(&multiplier),
                "{provider} {} has multiplier {multiplier}",
                region.code
            );
        }
    }
}

#[test]
fn test_unknown_region_multiplier_is_exactly_one() {
    for provider in CloudProvider::all() {
        assert_eq!(provider.regional_multiplier(Some("nowhere-9")), Decimal::ONE);
    }
}

#[test]
fn test_on_prem_costs_nothing_in_any_region() {
    let provider = CloudProvider::OnPrem;
    for region in [None, Some("us-east-1"), Some("datacenter-1")] {
        assert_eq!(provider.compute_pricing(region), ComputePricing::zero());
        assert_eq!(provider.storage_pricing(region), StoragePricing::default());
        assert_eq!(provider.network_pricing(region), NetworkPricing::default());
    }
}

#[test]
fn test_aws_control_plane_is_flat() {
    assert_eq!(CloudProvider::Aws.control_plane_cost_per_hour(false), dec!(0.10));
    assert_eq!(CloudProvider::Aws.control_plane_cost_per_hour(true), dec!(0.10));
}

#[test]
fn test_compute_cost_is_monotone_in_node_count() {
    let service = PricingService::embedded(AddOnPolicy::Ignore).unwrap();
    let mut previous: Option<Decimal> = None;
    for workers in 0..20u32 {
        let sizing: ClusterSizing = serde_json::from_value(json!({
            "provider": "aws",
            "distribution": "kubernetes",
            "region": "eu-central-1",
            "node_pools": [
                { "role": "worker", "count": workers, "vcpus": 4, "memory_gb": 16, "instance_type": "m5.xlarge" }
            ]
        }))
        .unwrap();
        let estimate = service.estimate_cluster(&sizing);
        assert_eq!(estimate.billable_nodes, workers);
        if let Some(previous) = previous {
            assert!(
                estimate.compute_per_month > previous,
                "compute did not grow at {workers} m5.xlarge workers"
            );
        } else {
            assert_eq!(estimate.compute_per_month, Decimal::ZERO);
        }
        previous = Some(estimate.compute_per_month);
    }
}

#[test]
fn test_cluster_estimate_is_monotone_in_workers() {
    let service = PricingService::embedded(AddOnPolicy::Ignore).unwrap();
    for provider in [CloudProvider::Aws, CloudProvider::Hetzner, CloudProvider::OnPrem] {
        for distribution in [Distribution::Kubernetes, Distribution::OpenShift, Distribution::Rke2] {
            let mut previous = Decimal::ZERO;
            for workers in 1..8 {
                let estimate = service.estimate_cluster(&sizing(provider, distribution, workers));
                assert!(
                    estimate.total_per_year >= previous,
                    "{provider}/{distribution} decreased at {workers} workers"
                );
                previous = estimate.total_per_year;
            }
        }
    }
}

#[test]
fn test_licensing_costs_are_non_negative_for_all_distributions() {
    let input = LicensingInput {
        node_count: 7,
        total_cores: 56,
        total_sockets: 7,
        master_node_count: 3,
        worker_node_count: 4,
        support_tier: SupportTier::Enterprise,
        contract_years: 5,
        is_managed_service: true,
        ..LicensingInput::default()
    };

    for distribution in Distribution::all() {
        let cost = LicensingStrategy::for_distribution(distribution, &LicensingOptions::default())
            .calculate(&input);
        assert!(cost.total_per_year() >= Decimal::ZERO, "{distribution}");
        assert!(cost.per_node_per_year >= Decimal::ZERO, "{distribution}");
    }
}

#[test]
fn test_compute_pricing_survives_json() {
    let pricing = CloudProvider::Azure.compute_pricing(Some("westeurope"));
    let json = serde_json::to_string(&pricing).unwrap();
    let back: ComputePricing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pricing);
}

#[test]
fn test_licensing_cost_survives_json() {
    let cost = LicensingStrategy::for_distribution(Distribution::Tanzu, &LicensingOptions::default())
        .calculate(&LicensingInput {
            node_count: 3,
            total_cores: 48,
            contract_years: 2,
            ..LicensingInput::default()
        });
    let json = serde_json::to_string(&cost).unwrap();
    let back: LicensingCost = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cost);
    assert_eq!(back.base_license_per_year.to_string(), cost.base_license_per_year.to_string());
}
