//! AWS, Azure, GCP, OCI and IBM Cloud list prices (Linux on-demand, USD)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{region, ControlPlaneRate, ProviderProfile, RegionalPricing};
use crate::models::{NetworkPricing, StoragePricing};

pub(crate) static AWS: ProviderProfile = ProviderProfile {
    display_name: "Amazon Web Services",
    default_region: "us-east-1",
    cpu_per_hour: dec!(0.0400),
    ram_gb_per_hour: dec!(0.0050),
    openshift_fee_per_worker_hour: Some(dec!(0.171)),
    instance_types: &[
        ("t3.medium", dec!(0.0416)),
        ("t3.large", dec!(0.0832)),
        ("t3.xlarge", dec!(0.1664)),
        ("m5.large", dec!(0.096)),
        ("m5.xlarge", dec!(0.192)),
        ("m5.2xlarge", dec!(0.384)),
        ("m6i.4xlarge", dec!(0.768)),
        ("c5.xlarge", dec!(0.17)),
        ("c5.2xlarge", dec!(0.34)),
        ("r5.xlarge", dec!(0.252)),
        ("r5.2xlarge", dec!(0.504)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.08),
        hdd_per_gb_month: dec!(0.045),
        object_storage_per_gb_month: dec!(0.023),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.10),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.09),
        load_balancer_per_hour: dec!(0.0225),
        nat_gateway_per_hour: dec!(0.045),
        vpn_per_hour: dec!(0.05),
        public_ip_per_hour: dec!(0.005),
    },
    control_plane: ControlPlaneRate::Flat(dec!(0.10)),
    regional_pricing: RegionalPricing::Multiplier,
    regions: &[
        region("us-east-1", "US East (N. Virginia)", dec!(1.00)),
        region("us-east-2", "US East (Ohio)", dec!(1.00)),
        region("us-west-1", "US West (N. California)", dec!(1.08)),
        region("us-west-2", "US West (Oregon)", dec!(1.00)),
        region("ca-central-1", "Canada (Central)", dec!(1.04)),
        region("eu-west-1", "Europe (Ireland)", dec!(1.05)),
        region("eu-west-2", "Europe (London)", dec!(1.08)),
        region("eu-central-1", "Europe (Frankfurt)", dec!(1.10)),
        region("eu-north-1", "Europe (Stockholm)", dec!(1.02)),
        region("ap-south-1", "Asia Pacific (Mumbai)", dec!(0.95)),
        region("ap-southeast-1", "Asia Pacific (Singapore)", dec!(1.12)),
        region("ap-southeast-2", "Asia Pacific (Sydney)", dec!(1.15)),
        region("ap-northeast-1", "Asia Pacific (Tokyo)", dec!(1.18)),
        region("sa-east-1", "South America (Sao Paulo)", dec!(1.30)),
    ],
};

pub(crate) static AZURE: ProviderProfile = ProviderProfile {
    display_name: "Microsoft Azure",
    default_region: "eastus",
    cpu_per_hour: dec!(0.0430),
    ram_gb_per_hour: dec!(0.0057),
    openshift_fee_per_worker_hour: Some(dec!(0.21)),
    instance_types: &[
        ("Standard_B2ms", dec!(0.0832)),
        ("Standard_D2s_v5", dec!(0.096)),
        ("Standard_D4s_v5", dec!(0.192)),
        ("Standard_D8s_v5", dec!(0.384)),
        ("Standard_D16s_v5", dec!(0.768)),
        ("Standard_E4s_v5", dec!(0.252)),
        ("Standard_E8s_v5", dec!(0.504)),
        ("Standard_F4s_v2", dec!(0.169)),
        ("Standard_F8s_v2", dec!(0.338)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.12),
        hdd_per_gb_month: dec!(0.045),
        object_storage_per_gb_month: dec!(0.0184),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.10),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.087),
        load_balancer_per_hour: dec!(0.025),
        nat_gateway_per_hour: dec!(0.045),
        vpn_per_hour: dec!(0.04),
        public_ip_per_hour: dec!(0.005),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.10)),
    regional_pricing: RegionalPricing::Multiplier,
    regions: &[
        region("eastus", "East US", dec!(1.00)),
        region("eastus2", "East US 2", dec!(1.00)),
        region("westus2", "West US 2", dec!(1.00)),
        region("centralus", "Central US", dec!(1.02)),
        region("canadacentral", "Canada Central", dec!(1.05)),
        region("westeurope", "West Europe", dec!(1.08)),
        region("northeurope", "North Europe", dec!(1.05)),
        region("uksouth", "UK South", dec!(1.10)),
        region("germanywestcentral", "Germany West Central", dec!(1.10)),
        region("centralindia", "Central India", dec!(0.92)),
        region("southeastasia", "Southeast Asia", dec!(1.12)),
        region("japaneast", "Japan East", dec!(1.15)),
        region("australiaeast", "Australia East", dec!(1.15)),
        region("brazilsouth", "Brazil South", dec!(1.30)),
    ],
};

pub(crate) static GCP: ProviderProfile = ProviderProfile {
    display_name: "Google Cloud Platform",
    default_region: "us-central1",
    cpu_per_hour: dec!(0.0332),
    ram_gb_per_hour: dec!(0.0045),
    openshift_fee_per_worker_hour: Some(dec!(0.166)),
    instance_types: &[
        ("e2-standard-2", dec!(0.067)),
        ("e2-standard-4", dec!(0.134)),
        ("e2-standard-8", dec!(0.268)),
        ("n2-standard-4", dec!(0.194)),
        ("n2-standard-8", dec!(0.388)),
        ("n2-standard-16", dec!(0.777)),
        ("n2-highmem-4", dec!(0.262)),
        ("c2-standard-4", dec!(0.209)),
        ("c2-standard-8", dec!(0.418)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.17),
        hdd_per_gb_month: dec!(0.04),
        object_storage_per_gb_month: dec!(0.02),
        backup_per_gb_month: dec!(0.05),
        registry_per_gb_month: dec!(0.10),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.12),
        load_balancer_per_hour: dec!(0.025),
        nat_gateway_per_hour: dec!(0.044),
        vpn_per_hour: dec!(0.05),
        public_ip_per_hour: dec!(0.004),
    },
    control_plane: ControlPlaneRate::Flat(dec!(0.10)),
    regional_pricing: RegionalPricing::Multiplier,
    regions: &[
        region("us-central1", "Iowa", dec!(1.00)),
        region("us-east1", "South Carolina", dec!(1.00)),
        region("us-east4", "Northern Virginia", dec!(1.06)),
        region("us-west1", "Oregon", dec!(1.00)),
        region("northamerica-northeast1", "Montreal", dec!(1.05)),
        region("europe-west1", "Belgium", dec!(1.05)),
        region("europe-west2", "London", dec!(1.12)),
        region("europe-west3", "Frankfurt", dec!(1.15)),
        region("asia-south1", "Mumbai", dec!(0.93)),
        region("asia-southeast1", "Singapore", dec!(1.10)),
        region("asia-northeast1", "Tokyo", dec!(1.16)),
        region("australia-southeast1", "Sydney", dec!(1.20)),
        region("southamerica-east1", "Sao Paulo", dec!(1.28)),
    ],
};

pub(crate) static OCI: ProviderProfile = ProviderProfile {
    display_name: "Oracle Cloud Infrastructure",
    default_region: "us-ashburn-1",
    cpu_per_hour: dec!(0.0250),
    ram_gb_per_hour: dec!(0.0015),
    openshift_fee_per_worker_hour: None,
    instance_types: &[
        ("VM.Standard.E4.Flex.2x16", dec!(0.074)),
        ("VM.Standard.E4.Flex.4x32", dec!(0.148)),
        ("VM.Standard.E4.Flex.8x64", dec!(0.296)),
        ("VM.Standard3.Flex.4x32", dec!(0.208)),
        ("VM.Optimized3.Flex.4x16", dec!(0.178)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.0425),
        hdd_per_gb_month: dec!(0.0255),
        object_storage_per_gb_month: dec!(0.0255),
        backup_per_gb_month: dec!(0.0255),
        registry_per_gb_month: dec!(0.0255),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.0085),
        load_balancer_per_hour: dec!(0.0113),
        nat_gateway_per_hour: Decimal::ZERO,
        vpn_per_hour: Decimal::ZERO,
        public_ip_per_hour: Decimal::ZERO,
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.10)),
    regional_pricing: RegionalPricing::Multiplier,
    regions: &[
        region("us-ashburn-1", "US East (Ashburn)", dec!(1.00)),
        region("us-phoenix-1", "US West (Phoenix)", dec!(1.00)),
        region("ca-toronto-1", "Canada Southeast (Toronto)", dec!(1.02)),
        region("uk-london-1", "UK South (London)", dec!(1.05)),
        region("eu-frankfurt-1", "Germany Central (Frankfurt)", dec!(1.05)),
        region("eu-amsterdam-1", "Netherlands Northwest (Amsterdam)", dec!(1.05)),
        region("ap-mumbai-1", "India West (Mumbai)", dec!(0.90)),
        region("ap-tokyo-1", "Japan East (Tokyo)", dec!(1.10)),
        region("ap-sydney-1", "Australia East (Sydney)", dec!(1.10)),
        region("sa-saopaulo-1", "Brazil East (Sao Paulo)", dec!(1.20)),
    ],
};

pub(crate) static IBM: ProviderProfile = ProviderProfile {
    display_name: "IBM Cloud",
    default_region: "us-south",
    cpu_per_hour: dec!(0.0480),
    ram_gb_per_hour: dec!(0.0060),
    openshift_fee_per_worker_hour: Some(dec!(0.20)),
    instance_types: &[
        ("bx2.2x8", dec!(0.096)),
        ("bx2.4x16", dec!(0.192)),
        ("bx2.8x32", dec!(0.384)),
        ("cx2.4x8", dec!(0.167)),
        ("mx2.4x32", dec!(0.245)),
    ],
    storage: StoragePricing {
        ssd_per_gb_month: dec!(0.13),
        hdd_per_gb_month: dec!(0.05),
        object_storage_per_gb_month: dec!(0.022),
        backup_per_gb_month: dec!(0.06),
        registry_per_gb_month: dec!(0.50),
    },
    network: NetworkPricing {
        egress_per_gb: dec!(0.09),
        load_balancer_per_hour: dec!(0.027),
        nat_gateway_per_hour: dec!(0.04),
        vpn_per_hour: dec!(0.10),
        public_ip_per_hour: dec!(0.005),
    },
    control_plane: ControlPlaneRate::FreeUnlessHa(dec!(0.10)),
    regional_pricing: RegionalPricing::Flat,
    regions: &[
        region("us-south", "Dallas", Decimal::ONE),
        region("us-east", "Washington DC", Decimal::ONE),
        region("ca-tor", "Toronto", Decimal::ONE),
        region("eu-gb", "London", Decimal::ONE),
        region("eu-de", "Frankfurt", Decimal::ONE),
        region("jp-tok", "Tokyo", Decimal::ONE),
        region("au-syd", "Sydney", Decimal::ONE),
        region("br-sao", "Sao Paulo", Decimal::ONE),
    ],
};
