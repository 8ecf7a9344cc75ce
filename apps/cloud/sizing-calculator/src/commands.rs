//! Command implementations
//!
//! Each command returns a serializable report; `main` prints it as JSON.

use std::fs;
use std::path::Path;

use clap::Args;
use domain_pricing::{
    CloudPricingQuote, CloudProvider, ClusterCostEstimate, ClusterSizing, Distribution,
    LicensingCost, LicensingInput, LicensingModel, LicensingOptions, LowCodeQuote,
    MendixQuoteRequest, OpenShiftModel, OutSystemsQuoteRequest, PricingService, RegionInfo,
    SupportTier, SupportTierInfo,
};
use eyre::{Result, WrapErr};
use observability::{PricingMetrics, PricingTimer};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use validator::Validate;

/// Cluster shape and contract flags of the `license` command
#[derive(Args, Debug, Clone, Default)]
pub struct LicenseArgs {
    /// Kubernetes distribution (openshift, rosa, tanzu, rancher, k3s, eks, ...)
    #[arg(short, long)]
    pub distribution: Distribution,

    /// Total nodes. Defaults to masters + workers + infra.
    #[arg(short, long)]
    pub nodes: Option<u32>,

    #[arg(short, long, default_value_t = 0)]
    pub workers: u32,

    #[arg(short, long, default_value_t = 0)]
    pub masters: u32,

    #[arg(short, long, default_value_t = 0)]
    pub infra: u32,

    /// Total physical cores across the cluster
    #[arg(short, long, default_value_t = 0)]
    pub cores: u32,

    /// Total CPU sockets across the cluster
    #[arg(short, long, default_value_t = 0)]
    pub sockets: u32,

    /// Support tier (none, basic, standard, premium, enterprise)
    #[arg(long)]
    pub support: Option<SupportTier>,

    /// Contract length in years
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub years: u32,

    /// Price as a hosted managed service, charging `--managed-fee` per worker-hour
    #[arg(long, requires = "managed_fee")]
    pub managed: bool,

    /// Hosted management fee per worker-hour
    #[arg(long)]
    pub managed_fee: Option<Decimal>,

    /// Negotiated annual fee per cluster, replacing per-unit licensing
    #[arg(long)]
    pub negotiated_fee: Option<Decimal>,

    /// Fixed annual cost per cluster on top of node licensing
    #[arg(long)]
    pub cluster_fixed_cost: Option<Decimal>,

    /// Distribution edition (tanzu: standard/advanced/enterprise, rancher/rke2: prime, k3s: prime, ...)
    #[arg(short, long)]
    pub edition: Option<String>,

    #[arg(long)]
    pub openshift_model: Option<OpenShiftModel>,

    /// HA control plane for managed cloud Kubernetes
    #[arg(long)]
    pub ha_control_plane: bool,
}

impl LicenseArgs {
    pub fn input(&self, default_tier: SupportTier) -> LicensingInput {
        LicensingInput {
            node_count: self
                .nodes
                .unwrap_or(self.masters.saturating_add(self.workers).saturating_add(self.infra)),
            total_cores: self.cores,
            total_sockets: self.sockets,
            master_node_count: self.masters,
            worker_node_count: self.workers,
            infra_node_count: self.infra,
            support_tier: self.support.unwrap_or(default_tier),
            contract_years: self.years,
            is_managed_service: self.managed,
        }
    }

    pub fn options(&self) -> Result<LicensingOptions> {
        let mut options = LicensingOptions {
            openshift_model: self.openshift_model.unwrap_or_default(),
            ha_control_plane: self.ha_control_plane,
            negotiated_cluster_fee: self.negotiated_fee,
            managed_worker_fee_per_hour: self.managed_fee,
            cluster_fixed_cost_per_year: self.cluster_fixed_cost,
            ..LicensingOptions::default()
        };
        if let Some(edition) = &self.edition {
            options.apply_edition(self.distribution, edition)?;
        }
        Ok(options)
    }
}

/// Licensing strategy summary together with the computed cost
#[derive(Debug, Serialize)]
pub struct LicenseReport {
    pub distribution: Distribution,
    pub name: &'static str,
    pub requires_license: bool,
    pub model: LicensingModel,
    pub support_tiers: Vec<SupportTierInfo>,
    pub input: LicensingInput,
    pub cost: LicensingCost,
    pub total_per_year: Decimal,
    pub total_per_month: Decimal,
}

/// Low-code quote with its monthly equivalent
#[derive(Debug, Serialize)]
pub struct QuoteReport {
    #[serde(flatten)]
    pub quote: LowCodeQuote,
    pub total_per_month: Decimal,
}

impl From<LowCodeQuote> for QuoteReport {
    fn from(quote: LowCodeQuote) -> Self {
        let total_per_month = quote.total_per_month();
        Self {
            quote,
            total_per_month,
        }
    }
}

/// Whether `region` is missing from the provider's catalogue and priced at the base rate
pub fn is_region_fallback(provider: CloudProvider, region: Option<&str>) -> bool {
    match region {
        Some(code) => !provider.available_regions().iter().any(|r| r.code == code),
        None => false,
    }
}

fn note_region(provider: CloudProvider, region: Option<&str>) {
    if is_region_fallback(provider, region) {
        PricingMetrics::record_region_fallback(&provider.to_string());
    }
}

pub fn regions(service: &PricingService, provider: CloudProvider) -> Vec<RegionInfo> {
    let regions = service.regions(provider);
    PricingMetrics::set_catalog_entries(&format!("{provider}_regions"), regions.len());
    regions
}

pub fn cloud(
    service: &PricingService,
    provider: CloudProvider,
    region: Option<&str>,
    ha: bool,
) -> CloudPricingQuote {
    let _timer = PricingTimer::new("cloud", &provider.to_string());
    note_region(provider, region);
    service.cloud_quote(provider, region, ha)
}

pub fn license(
    service: &PricingService,
    args: &LicenseArgs,
    default_tier: SupportTier,
) -> Result<LicenseReport> {
    let _timer = PricingTimer::new("licensing", &args.distribution.to_string());
    let options = args.options()?;
    let input = args.input(default_tier);

    let strategy = service.licensing_strategy(args.distribution, &options);
    let cost = strategy.calculate(&input);

    Ok(LicenseReport {
        distribution: strategy.distribution(),
        name: strategy.name(),
        requires_license: strategy.requires_license(),
        model: strategy.model(),
        support_tiers: strategy.support_tiers(),
        total_per_year: cost.total_per_year(),
        total_per_month: cost.total_per_month(),
        input,
        cost,
    })
}

pub fn mendix(service: &PricingService, request_path: &Path) -> Result<QuoteReport> {
    let request: MendixQuoteRequest = read_json(request_path)?;
    let _timer = PricingTimer::new("mendix", &request.edition.to_string());
    Ok(service.mendix_quote(&request)?.into())
}

pub fn outsystems(service: &PricingService, request_path: &Path) -> Result<QuoteReport> {
    let request: OutSystemsQuoteRequest = read_json(request_path)?;
    let _timer = PricingTimer::new("outsystems", &request.edition.to_string());
    Ok(service.outsystems_quote(&request)?.into())
}

pub fn estimate(service: &PricingService, sizing_path: &Path) -> Result<ClusterCostEstimate> {
    let sizing: ClusterSizing = read_json(sizing_path)?;
    sizing
        .validate()
        .wrap_err_with(|| format!("invalid cluster sizing in {}", sizing_path.display()))?;

    let _timer = PricingTimer::new("estimate", &sizing.provider.to_string());
    note_region(sizing.provider, sizing.region.as_deref());
    Ok(service.estimate_cluster(&sizing))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Reading {}", path.display());
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("failed to parse {}", path.display()))
}
