//! European providers: Hetzner, OVHcloud, Scaleway, Exoscale
//!
//! Prices converted to USD at list rates; all region-invariant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{region, ControlPlaneRate, ProviderProfile, RegionalPricing};
use crate::models::{NetworkPricing, StoragePricing};

pub(crate) static HETZNER: ProviderProfile = ProviderProfile {
    display_name: "Hetzner Cloud",
    default_region: "fsn1",
    cpu_per_hour: dec!(0.0060),
    ram_gb_per_hour: dec!(0.0015),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("cx22", dec!(0.0060)),
        ("cx32", dec!(0.0113)),
        ("cx42", dec!(0.0273)),
        ("cx52", dec!(0.0546)),
        ("ccx23", dec!(0.0395)),
        ("ccx33", dec!(0.0790)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.0572),
        hdd_per_gb_month: dec!(0.0572),
        object_storage_per_gb_month: dec!(0.0065),
        backup_per_gb_month: dec!(0.0119),
        registry_per_gb_month: dec!(0.0065),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.0011),
        load_balancer_per_hour: dec!(0.0098),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.0008),
    },
    control_plane: ControlPlaneRate::Free,
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("fsn1", "Falkenstein", Decimal::ONE),
        region("nbg1", "Nuremberg", Decimal::ONE),
        region("hel1", "Helsinki", Decimal::ONE),
        region("ash", "Ashburn, VA", Decimal::ONE),
        region("hil", "Hillsboro, OR", Decimal::ONE),
        region("sin", "Singapore", Decimal::ONE),
    ],
};

pub(crate) static OVH: ProviderProfile = ProviderProfile {
    display_name: "OVHcloud",
    default_region: "GRA",
    cpu_per_hour: dec!(0.0120),
    ram_gb_per_hour: dec!(0.0030),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("b3-8", dec!(0.0680)),
        ("b3-16", dec!(0.1360)),
        ("b3-32", dec!(0.2720)),
        ("c3-8", dec!(0.0840)),
        ("r3-32", dec!(0.1480)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.088),
        hdd_per_gb_month: dec!(0.044),
        object_storage_per_gb_month: dec!(0.0077),
        backup_per_gb_month: dec!(0.011),
        registry_per_gb_month: dec!(0.0077),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.011),
        load_balancer_per_hour: dec!(0.0137),
        nat_gateway_per_hour: dec!(0.0055),
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.0027),
    },
    control_plane: ControlPlaneRate::Free,
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("GRA", "Gravelines", Decimal::ONE),
        region("SBG", "Strasbourg", Decimal::ONE),
        region("RBX", "Roubaix", Decimal::ONE),
        region("DE", "Frankfurt", Decimal::ONE),
        region("UK", "London", Decimal::ONE),
        region("WAW", "Warsaw", Decimal::ONE),
        region("BHS", "Beauharnois", Decimal::ONE),
    ],
};

pub(crate) static SCALEWAY: ProviderProfile = ProviderProfile {
    display_name: "Scaleway",
    default_region: "fr-par",
    cpu_per_hour: dec!(0.0140),
    ram_gb_per_hour: dec!(0.0035),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("DEV1-M", dec!(0.0216)),
        ("DEV1-L", dec!(0.0432)),
        ("GP1-XS", dec!(0.0960)),
        ("GP1-S", dec!(0.1800)),
        ("PRO2-S", dec!(0.2330)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.088),
        hdd_per_gb_month: dec!(0.044),
        object_storage_per_gb_month: dec!(0.0161),
        backup_per_gb_month: dec!(0.0110),
        registry_per_gb_month: dec!(0.0290),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.0110),
        load_balancer_per_hour: dec!(0.0150),
        nat_gateway_per_hour: dec!(0.0430),
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.0042),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.1370)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("fr-par", "Paris", Decimal::ONE),
        region("nl-ams", "Amsterdam", Decimal::ONE),
        region("pl-waw", "Warsaw", Decimal::ONE),
    ],
};

pub(crate) static EXOSCALE: ProviderProfile = ProviderProfile {
    display_name: "Exoscale",
    default_region: "ch-gva-2",
    cpu_per_hour: dec!(0.0220),
    ram_gb_per_hour: dec!(0.0055),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("standard.small", dec!(0.0236)),
        ("standard.medium", dec!(0.0472)),
        ("standard.large", dec!(0.0944)),
        ("standard.extra-large", dec!(0.1889)),
        ("cpu.extra-large", dec!(0.2222)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.11),
        hdd_per_gb_month: dec!(0.11),
        object_storage_per_gb_month: dec!(0.022),
        backup_per_gb_month: dec!(0.022),
        registry_per_gb_month: dec!(0.022),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.022),
        load_balancer_per_hour: dec!(0.0278),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: dec!(0.0056),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.0611)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("ch-gva-2", "Geneva", Decimal::ONE),
        region("ch-dk-2", "Zurich", Decimal::ONE),
        region("de-fra-1", "Frankfurt", Decimal::ONE),
        region("de-muc-1", "Munich", Decimal::ONE),
        region("at-vie-1", "Vienna", Decimal::ONE),
        region("bg-sof-1", "Sofia", Decimal::ONE),
    ],
};
