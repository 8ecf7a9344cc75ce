//! Pricing Domain
//!
//! Pure calculators turning a sizing configuration into cost numbers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ PricingService  │  ← Entry point, cluster estimates
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┬──────────────────┬──────────────────┐
//! │ cloud           │ licensing        │ lowcode          │
//! │ provider tables │ distribution     │ Mendix /         │
//! │ per region      │ strategies       │ OutSystems       │
//! └────────┬────────┴────────┬─────────┴────────┬─────────┘
//!          │                 │                  │
//! ┌────────▼─────────────────▼──────┐  ┌────────▼─────────┐
//! │ models (value records)          │  │ PricingTable-    │
//! └─────────────────────────────────┘  │ Source (JSON)    │
//!                                      └──────────────────┘
//! ```
//!
//! Cloud and licensing lookups never fail: unknown regions price at the
//! base rate and unknown support tiers fall back to the vendor default.
//! Only the low-code calculators return [`PricingError`], because their
//! tables are external data.

pub mod cloud;
pub mod error;
pub mod estimate;
pub mod licensing;
pub mod lowcode;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use cloud::{CloudPricingQuote, CloudProvider};
pub use error::{PricingError, PricingResult};
pub use estimate::{
    ClusterCostEstimate, ClusterSizing, NetworkRequirements, NodePool, NodeRole,
    StorageRequirements,
};
pub use licensing::{
    multi_year_discount, CharmedEdition, Distribution, LicensingOptions, LicensingStrategy,
    OpenShiftModel, SuseEdition, TanzuEdition,
};
pub use lowcode::{
    AddOnPolicy, DirectoryTables, EmbeddedTables, LowCodeCatalog, LowCodeQuote,
    MendixQuoteRequest, OutSystemsQuoteRequest, PricingTable, PricingTableSource,
};
pub use models::{
    ComputePricing, LicensingCost, LicensingInput, LicensingModel, NetworkPricing, RegionInfo,
    StoragePricing, SupportTier, SupportTierInfo,
};
pub use service::PricingService;
