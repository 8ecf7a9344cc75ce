//! Licensing scenarios across distributions
//!
//! These tests drive the public API the way the CLI does: pick a
//! distribution, describe the cluster, read back the annual cost.

use domain_pricing::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn cost(distribution: Distribution, input: &LicensingInput) -> LicensingCost {
    LicensingStrategy::for_distribution(distribution, &LicensingOptions::default()).calculate(input)
}

#[test]
fn test_openshift_on_prem_ten_nodes_standard_support() {
    let input = LicensingInput {
        node_count: 10,
        support_tier: SupportTier::Standard,
        contract_years: 1,
        ..LicensingInput::default()
    };

    let cost = cost(Distribution::OpenShift, &input);

    assert_eq!(cost.base_license_per_year, dec!(25000));
    assert_eq!(cost.discount_percent, Decimal::ZERO);
    assert_eq!(cost.support_cost_per_year, Decimal::ZERO);
    assert_eq!(cost.total_per_year(), dec!(25000));
    assert_eq!(cost.per_node_per_year, dec!(2500));
}

#[test]
fn test_managed_rosa_five_workers() {
    let input = LicensingInput {
        worker_node_count: 5,
        ..LicensingInput::default()
    };

    let strategy = LicensingStrategy::for_distribution(Distribution::Rosa, &LicensingOptions::default());
    let cost = strategy.calculate_managed(&input);

    assert_eq!(cost.base_license_per_year, dec!(7489.8));
    assert_eq!(cost.additional_fees_per_year, Decimal::ZERO);
    assert_eq!(cost.total_per_year(), dec!(7489.8));
}

#[test]
fn test_tanzu_standard_core_floor() {
    let input = LicensingInput {
        node_count: 1,
        total_cores: 4,
        support_tier: SupportTier::Basic,
        ..LicensingInput::default()
    };

    let cost = cost(Distribution::Tanzu, &input);

    assert_eq!(cost.base_license_per_year, dec!(24000));
}

#[test]
fn test_multi_year_contract_discounts_base_only() {
    let one_year = LicensingInput {
        node_count: 10,
        support_tier: SupportTier::Premium,
        ..LicensingInput::default()
    };
    let three_years = LicensingInput {
        contract_years: 3,
        ..one_year.clone()
    };

    let full = cost(Distribution::OpenShift, &one_year);
    let discounted = cost(Distribution::OpenShift, &three_years);

    assert_eq!(discounted.discount_percent, dec!(10));
    assert_eq!(
        discounted.base_license_per_year,
        full.base_license_per_year * dec!(0.90)
    );
}

#[test]
fn test_multi_year_discount_table_is_clamped() {
    assert_eq!(multi_year_discount(1), Decimal::ZERO);
    assert_eq!(multi_year_discount(2), dec!(0.05));
    assert_eq!(multi_year_discount(3), dec!(0.10));
    assert_eq!(multi_year_discount(4), dec!(0.15));
    assert_eq!(multi_year_discount(10), dec!(0.15));
}

#[test]
fn test_open_source_distributions_have_no_base_license() {
    let input = LicensingInput {
        node_count: 12,
        total_cores: 96,
        total_sockets: 12,
        worker_node_count: 9,
        master_node_count: 3,
        support_tier: SupportTier::Premium,
        ..LicensingInput::default()
    };

    let free: Vec<_> = Distribution::all()
        .map(|d| LicensingStrategy::for_distribution(d, &LicensingOptions::default()))
        .filter(|s| !s.requires_license())
        .collect();
    assert!(free.iter().any(|s| s.distribution() == Distribution::Kubernetes));

    for strategy in free {
        let cost = strategy.calculate(&input);
        assert_eq!(
            cost.base_license_per_year,
            Decimal::ZERO,
            "{} charged a license",
            strategy.name()
        );
    }
}

#[test]
fn test_managed_cloud_kubernetes_bills_control_plane_as_fee() {
    let input = LicensingInput {
        node_count: 3,
        worker_node_count: 3,
        ..LicensingInput::default()
    };

    let eks = cost(Distribution::Eks, &input);

    assert_eq!(eks.base_license_per_year, Decimal::ZERO);
    assert_eq!(eks.additional_fees_per_year, dec!(0.10) * dec!(8760));
}

#[test]
fn test_editions_change_the_bill() {
    let input = LicensingInput {
        node_count: 5,
        total_cores: 40,
        ..LicensingInput::default()
    };

    let mut options = LicensingOptions::default();
    let community = LicensingStrategy::for_distribution(Distribution::Rancher, &options).calculate(&input);
    options.apply_edition(Distribution::Rancher, "prime").unwrap();
    let prime = LicensingStrategy::for_distribution(Distribution::Rancher, &options).calculate(&input);

    assert_eq!(community.base_license_per_year, Decimal::ZERO);
    assert!(prime.base_license_per_year > Decimal::ZERO);
}

#[test]
fn test_negotiated_fee_switches_to_flat_rate() {
    let options = LicensingOptions {
        negotiated_cluster_fee: Some(dec!(40000)),
        ..LicensingOptions::default()
    };
    let strategy = LicensingStrategy::for_distribution(Distribution::OpenShift, &options);

    assert_eq!(strategy.model(), LicensingModel::FlatRate);

    let small = strategy.calculate(&LicensingInput {
        node_count: 3,
        ..LicensingInput::default()
    });
    let large = strategy.calculate(&LicensingInput {
        node_count: 30,
        ..LicensingInput::default()
    });
    assert_eq!(small.base_license_per_year, large.base_license_per_year);
}
