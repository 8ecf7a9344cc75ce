use std::sync::Arc;

use crate::cloud::{CloudPricingQuote, CloudProvider};
use crate::error::PricingResult;
use crate::estimate::{estimate_cluster, ClusterCostEstimate, ClusterSizing};
use crate::licensing::{Distribution, LicensingOptions, LicensingStrategy};
use crate::lowcode::{
    AddOnPolicy, EmbeddedTables, LowCodeCatalog, LowCodeQuote, MendixQuoteRequest,
    OutSystemsQuoteRequest, PricingTableSource,
};
use crate::models::{LicensingCost, LicensingInput, RegionInfo};

/// Entry point to every pricing calculation
#[derive(Debug, Clone)]
pub struct PricingService {
    catalog: Arc<LowCodeCatalog>,
    add_on_policy: AddOnPolicy,
}

impl PricingService {
    pub fn new(catalog: LowCodeCatalog, add_on_policy: AddOnPolicy) -> Self {
        Self {
            catalog: Arc::new(catalog),
            add_on_policy,
        }
    }

    /// Load the low-code tables from `source`
    pub fn from_source(
        source: &dyn PricingTableSource,
        add_on_policy: AddOnPolicy,
    ) -> PricingResult<Self> {
        Ok(Self::new(LowCodeCatalog::load(source)?, add_on_policy))
    }

    /// Service over the compiled-in tables
    pub fn embedded(add_on_policy: AddOnPolicy) -> PricingResult<Self> {
        Self::from_source(&EmbeddedTables, add_on_policy)
    }

    pub fn catalog(&self) -> &LowCodeCatalog {
        &self.catalog
    }

    pub fn add_on_policy(&self) -> AddOnPolicy {
        self.add_on_policy
    }

    pub fn regions(&self, provider: CloudProvider) -> Vec<RegionInfo> {
        provider.available_regions()
    }

    pub fn cloud_quote(
        &self,
        provider: CloudProvider,
        region: Option<&str>,
        is_ha: bool,
    ) -> CloudPricingQuote {
        provider.quote(region, is_ha)
    }

    pub fn licensing_strategy(
        &self,
        distribution: Distribution,
        options: &LicensingOptions,
    ) -> LicensingStrategy {
        LicensingStrategy::for_distribution(distribution, options)
    }

    /// Annual licensing cost of a distribution
    pub fn licensing_cost(
        &self,
        distribution: Distribution,
        input: &LicensingInput,
        options: &LicensingOptions,
    ) -> LicensingCost {
        self.licensing_strategy(distribution, options).calculate(input)
    }

    /// Combined infrastructure and licensing cost for a cluster
    pub fn estimate_cluster(&self, sizing: &ClusterSizing) -> ClusterCostEstimate {
        estimate_cluster(sizing)
    }

    pub fn mendix_quote(&self, request: &MendixQuoteRequest) -> PricingResult<LowCodeQuote> {
        self.catalog.mendix.quote(request, self.add_on_policy)
    }

    pub fn outsystems_quote(
        &self,
        request: &OutSystemsQuoteRequest,
    ) -> PricingResult<LowCodeQuote> {
        self.catalog.outsystems.quote(request, self.add_on_policy)
    }
}
