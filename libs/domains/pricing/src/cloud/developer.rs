//! Developer-focused clouds: DigitalOcean, Linode (Akamai), Vultr, Civo
//!
//! All prices are region-invariant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{region, ControlPlaneRate, ProviderProfile, RegionalPricing};
use crate::models::{NetworkPricing, StoragePricing};

pub(crate) static DIGITAL_OCEAN: ProviderProfile = ProviderProfile {
    display_name: "DigitalOcean",
    default_region: "nyc1",
    cpu_per_hour: dec!(0.0179),
    ram_gb_per_hour: dec!(0.0045),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("s-2vcpu-4gb", dec!(0.03571)),
        ("s-4vcpu-8gb", dec!(0.07143)),
        ("g-4vcpu-16gb", dec!(0.18750)),
        ("c-4", dec!(0.12500)),
        ("m-4vcpu-32gb", dec!(0.25000)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.10),
        hdd_per_gb_month: dec!(0.10),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.02),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.01),
        load_balancer_per_hour: dec!(0.01786),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.00595),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.06)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("nyc1", "New York 1", Decimal::ONE),
        region("nyc3", "New York 3", Decimal::ONE),
        region("sfo3", "San Francisco 3", Decimal::ONE),
        region("tor1", "Toronto 1", Decimal::ONE),
        region("ams3", "Amsterdam 3", Decimal::ONE),
        region("fra1", "Frankfurt 1", Decimal::ONE),
        region("lon1", "London 1", Decimal::ONE),
        region("sgp1", "Singapore 1", Decimal::ONE),
        region("blr1", "Bangalore 1", Decimal::ONE),
        region("syd1", "Sydney 1", Decimal::ONE),
    ],
};

pub(crate) static LINODE: ProviderProfile = ProviderProfile {
    display_name: "Linode (Akamai)",
    default_region: "us-east",
    cpu_per_hour: dec!(0.0180),
    ram_gb_per_hour: dec!(0.0045),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("g6-standard-2", dec!(0.036)),
        ("g6-standard-4", dec!(0.072)),
        ("g6-standard-6", dec!(0.144)),
        ("g6-dedicated-4", dec!(0.108)),
        ("g7-highmem-1", dec!(0.09)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.10),
        hdd_per_gb_month: dec!(0.10),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.02),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.005),
        load_balancer_per_hour: dec!(0.015),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.0027),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.09)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("us-east", "Newark, NJ", Decimal::ONE),
        region("us-central", "Dallas, TX", Decimal::ONE),
        region("us-west", "Fremont, CA", Decimal::ONE),
        region("eu-west", "London, UK", Decimal::ONE),
        region("eu-central", "Frankfurt, DE", Decimal::ONE),
        region("ap-south", "Singapore, SG", Decimal::ONE),
        region("ap-northeast", "Tokyo, JP", Decimal::ONE),
    ],
};

pub(crate) static VULTR: ProviderProfile = ProviderProfile {
    display_name: "Vultr",
    default_region: "ewr",
    cpu_per_hour: dec!(0.0170),
    ram_gb_per_hour: dec!(0.0043),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("vc2-2c-4gb", dec!(0.030)),
        ("vc2-4c-8gb", dec!(0.060)),
        ("vhp-4c-8gb-amd", dec!(0.071)),
        ("voc-g-4c-16gb-80s", dec!(0.179)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.10),
        hdd_per_gb_month: dec!(0.025),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.02),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.01),
        load_balancer_per_hour: dec!(0.015),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.004),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.014)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("ewr", "New Jersey", Decimal::ONE),
        region("ord", "Chicago", Decimal::ONE),
        region("lax", "Los Angeles", Decimal::ONE),
        region("ams", "Amsterdam", Decimal::ONE),
        region("fra", "Frankfurt", Decimal::ONE),
        region("nrt", "Tokyo", Decimal::ONE),
        region("sgp", "Singapore", Decimal::ONE),
    ],
};

pub(crate) static CIVO: ProviderProfile = ProviderProfile {
    display_name: "Civo",
    default_region: "lon1",
    cpu_per_hour: dec!(0.0150),
    ram_gb_per_hour: dec!(0.0040),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("g4s.kube.small", dec!(0.0149)),
        ("g4s.kube.medium", dec!(0.0298)),
        ("g4s.kube.large", dec!(0.0595)),
        ("g4s.kube.xlarge", dec!(0.1190)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.10),
        hdd_per_gb_month: dec!(0.10),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.02),
    },
    network: NetworkPricing {
        egress_per_gb: Decimal::ZERO,
        load_balancer_per_hour: dec!(0.0137),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: Decimal::ZERO,
    },
    control_plane: ControlPlaneRate::Free,
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("lon1", "London", Decimal::ONE),
        region("fra1", "Frankfurt", Decimal::ONE),
        region("nyc1", "New York", Decimal::ONE),
        region("phx1", "Phoenix", Decimal::ONE),
    ],
};
