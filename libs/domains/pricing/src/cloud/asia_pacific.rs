//! Alibaba Cloud, Tencent Cloud and Huawei Cloud (USD list prices)
//!
//! Compute is region-adjusted and carries an international surcharge outside
//! domestic regions. Storage and network are region-invariant.

use rust_decimal_macros::dec;

use super::{region, ControlPlaneRate, ProviderProfile, RegionalPricing};
use crate::models::{NetworkPricing, StoragePricing};

pub(crate) static ALIBABA: ProviderProfile = ProviderProfile {
    display_name: "Alibaba Cloud",
    default_region: "cn-hangzhou",
    cpu_per_hour: dec!(0.0350),
    ram_gb_per_hour: dec!(0.0045),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("ecs.g7.large", dec!(0.089)),
        ("ecs.g7.xlarge", dec!(0.178)),
        ("ecs.g7.2xlarge", dec!(0.356)),
        ("ecs.c7.xlarge", dec!(0.152)),
        ("ecs.r7.xlarge", dec!(0.232)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.14),
        hdd_per_gb_month: dec!(0.045),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.04),
        registry_per_gb_month: dec!(0.08),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.117),
        load_balancer_per_hour: dec!(0.021),
        nat_gateway_per_hour: dec!(0.043),
        vpn_per_hour: dec!(0.052),
        public_ip_per_hour: dec!(0.004),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.09)),
    regional_pricing: RegionalPricing::Domestic {
        surcharge: dec!(1.10),
    },
    regions: &[
        region("cn-hangzhou", "China (Hangzhou)", dec!(1.00)),
        region("cn-shanghai", "China (Shanghai)", dec!(1.00)),
        region("cn-beijing", "China (Beijing)", dec!(1.00)),
        region("cn-shenzhen", "China (Shenzhen)", dec!(1.00)),
        region("cn-hongkong", "China (Hong Kong)", dec!(1.15)),
        region("ap-southeast-1", "Singapore", dec!(1.10)),
        region("ap-northeast-1", "Japan (Tokyo)", dec!(1.15)),
        region("us-west-1", "US (Silicon Valley)", dec!(1.05)),
        region("us-east-1", "US (Virginia)", dec!(1.05)),
        region("eu-central-1", "Germany (Frankfurt)", dec!(1.10)),
    ],
};

pub(crate) static TENCENT: ProviderProfile = ProviderProfile {
    display_name: "Tencent Cloud",
    default_region: "ap-guangzhou",
    cpu_per_hour: dec!(0.0330),
    ram_gb_per_hour: dec!(0.0044),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("S5.MEDIUM4", dec!(0.052)),
        ("S5.LARGE8", dec!(0.104)),
        ("S5.2XLARGE16", dec!(0.208)),
        ("S5.4XLARGE32", dec!(0.416)),
        ("M5.2XLARGE32", dec!(0.294)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.11),
        hdd_per_gb_month: dec!(0.04),
        object_storage_per_gb_month: dec!(0.018),
        backup_per_gb_month: dec!(0.035),
        registry_per_gb_month: dec!(0.07),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.12),
        load_balancer_per_hour: dec!(0.02),
        nat_gateway_per_hour: dec!(0.04),
        vpn_per_hour: dec!(0.05),
        public_ip_per_hour: dec!(0.003),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.0456)),
    regional_pricing: RegionalPricing::Domestic {
        surcharge: dec!(1.15),
    },
    regions: &[
        region("ap-guangzhou", "South China (Guangzhou)", dec!(1.00)),
        region("ap-shanghai", "East China (Shanghai)", dec!(1.00)),
        region("ap-beijing", "North China (Beijing)", dec!(1.00)),
        region("ap-chengdu", "Southwest China (Chengdu)", dec!(0.95)),
        region("ap-hongkong", "Hong Kong", dec!(1.10)),
        region("ap-singapore", "Singapore", dec!(1.10)),
        region("ap-tokyo", "Tokyo", dec!(1.15)),
        region("na-siliconvalley", "Silicon Valley", dec!(1.05)),
        region("na-ashburn", "Virginia", dec!(1.05)),
        region("eu-frankfurt", "Frankfurt", dec!(1.10)),
    ],
};

pub(crate) static HUAWEI: ProviderProfile = ProviderProfile {
    display_name: "Huawei Cloud",
    default_region: "cn-north-4",
    cpu_per_hour: dec!(0.0340),
    ram_gb_per_hour: dec!(0.0046),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("s6.large.2", dec!(0.062)),
        ("s6.xlarge.2", dec!(0.124)),
        ("s6.2xlarge.2", dec!(0.248)),
        ("c7.xlarge.2", dec!(0.163)),
        ("m7.xlarge.8", dec!(0.251)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.13),
        hdd_per_gb_month: dec!(0.045),
        object_storage_per_gb_month: dec!(0.019),
        backup_per_gb_month: dec!(0.04),
        registry_per_gb_month: dec!(0.08),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.11),
        load_balancer_per_hour: dec!(0.022),
        nat_gateway_per_hour: dec!(0.045),
        vpn_per_hour: dec!(0.05),
        public_ip_per_hour: dec!(0.004),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.07)),
    regional_pricing: RegionalPricing::Domestic {
        surcharge: dec!(1.12),
    },
    regions: &[
        region("cn-north-4", "CN North-Beijing4", dec!(1.00)),
        region("cn-east-3", "CN East-Shanghai1", dec!(1.00)),
        region("cn-south-1", "CN South-Guangzhou", dec!(1.00)),
        region("ap-southeast-1", "CN-Hong Kong", dec!(1.10)),
        region("ap-southeast-3", "AP-Singapore", dec!(1.12)),
        region("af-south-1", "AF-Johannesburg", dec!(1.20)),
        region("la-south-2", "LA-Santiago", dec!(1.25)),
        region("eu-west-101", "EU-Dublin", dec!(1.15)),
    ],
};
