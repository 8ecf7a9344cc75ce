//! Low-code platform pricing (Mendix, OutSystems)
//!
//! Price tables are JSON documents loaded through a [`PricingTableSource`]:
//! the defaults are compiled into the crate, and a directory of overrides can
//! replace them. [`LowCodeCatalog`] parses and validates both tables once;
//! the calculators then run purely against the parsed data.

pub mod mendix;
pub mod outsystems;
pub mod tiers;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};
use tracing::{info, warn};
use validator::{Validate, ValidationError};

use crate::error::{PricingError, PricingResult};
use crate::models::MONTHS_PER_YEAR;
pub use mendix::{MendixPricingTable, MendixQuoteRequest};
pub use outsystems::{OutSystemsPricingTable, OutSystemsQuoteRequest};
pub use tiers::{band_cost, resolve_bands, BandCharge, UserBand};

pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Pricing tables known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PricingTable {
    Mendix,
    OutSystems,
}

impl PricingTable {
    pub fn file_name(self) -> &'static str {
        match self {
            PricingTable::Mendix => "mendix_pricing.json",
            PricingTable::OutSystems => "outsystems_pricing.json",
        }
    }
}

/// Where raw pricing table JSON comes from
#[cfg_attr(test, mockall::automock)]
pub trait PricingTableSource {
    fn load(&self, table: PricingTable) -> PricingResult<String>;
}

/// Default tables compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTables;

impl PricingTableSource for EmbeddedTables {
    fn load(&self, table: PricingTable) -> PricingResult<String> {
        let json = match table {
            PricingTable::Mendix => include_str!("../../data/mendix_pricing.json"),
            PricingTable::OutSystems => include_str!("../../data/outsystems_pricing.json"),
        };
        Ok(json.to_string())
    }
}

/// Tables read from `<dir>/<table file name>`
#[derive(Debug, Clone)]
pub struct DirectoryTables {
    dir: PathBuf,
}

impl DirectoryTables {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PricingTableSource for DirectoryTables {
    fn load(&self, table: PricingTable) -> PricingResult<String> {
        let path = self.dir.join(table.file_name());
        std::fs::read_to_string(&path)
            .map_err(|e| PricingError::data(table.file_name(), format!("{}: {e}", path.display())))
    }
}

/// What to do with add-ons that are unknown or unavailable on the chosen platform
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AddOnPolicy {
    /// Skip the add-on and report it in the quote
    #[default]
    Ignore,
    /// Fail the quote
    Reject,
}

/// Hosting side of a low-code deployment, used for add-on exclusivity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeploymentPlatform {
    Cloud,
    SelfManaged,
}

/// How an add-on price scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnScaling {
    #[default]
    Flat,
    PerEnvironment,
    PerAoPack,
}

/// Optional paid extra (HA, Sentry, premium support, extra environments...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddOn {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price_per_year: Decimal,
    #[serde(default)]
    pub scaling: AddOnScaling,
    /// Platforms offering the add-on; empty means all
    #[serde(default)]
    pub platforms: Vec<DeploymentPlatform>,
}

impl AddOn {
    pub fn available_on(&self, platform: DeploymentPlatform) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&platform)
    }
}

/// Quote line grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Edition,
    Environment,
    AoPacks,
    InternalUsers,
    ExternalUsers,
    AddOn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub category: LineCategory,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

impl QuoteLine {
    pub fn new(
        category: LineCategory,
        description: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            quantity,
            unit_price,
            amount: Decimal::from(quantity) * unit_price,
        }
    }
}

/// Itemised annual quote for a low-code platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowCodeQuote {
    pub platform: String,
    pub edition: String,
    pub lines: Vec<QuoteLine>,
    /// Cloud tokens included with the selected resource packs
    pub cloud_tokens: u32,
    /// Add-ons ignored because they are unknown or unavailable on the platform
    pub skipped_add_ons: Vec<String>,
    pub total_per_year: Decimal,
}

impl LowCodeQuote {
    pub(crate) fn new(
        platform: &str,
        edition: impl ToString,
        lines: Vec<QuoteLine>,
        cloud_tokens: u32,
        skipped_add_ons: Vec<String>,
    ) -> Self {
        let total_per_year = lines.iter().map(|l| l.amount).sum();
        Self {
            platform: platform.to_string(),
            edition: edition.to_string(),
            lines,
            cloud_tokens,
            skipped_add_ons,
            total_per_year,
        }
    }

    pub fn total_per_month(&self) -> Decimal {
        self.total_per_year / MONTHS_PER_YEAR
    }

    /// Sum of the lines in one category
    pub fn subtotal(&self, category: LineCategory) -> Decimal {
        self.lines
            .iter()
            .filter(|l| l.category == category)
            .map(|l| l.amount)
            .sum()
    }
}

/// Quote lines for the user bands charged for `users`
pub(crate) fn user_lines(
    category: LineCategory,
    label: &str,
    bands: &[UserBand],
    users: u32,
) -> Vec<QuoteLine> {
    resolve_bands(bands, users)
        .into_iter()
        .map(|charge| {
            let range = match charge.max_users {
                Some(max) => format!("{}-{max}", charge.min_users + 1),
                None => format!("{}+", charge.min_users + 1),
            };
            QuoteLine::new(
                category,
                format!("{label} users {range} ({} packs)", charge.packs),
                charge.packs,
                charge.price_per_pack,
            )
        })
        .collect()
}

/// Price the requested add-ons.
///
/// `quantity` maps an add-on's scaling to its billed quantity. Returns the
/// priced lines and the ids skipped under [`AddOnPolicy::Ignore`].
pub(crate) fn price_add_ons(
    catalog: &[AddOn],
    requested: &[String],
    platform: DeploymentPlatform,
    policy: AddOnPolicy,
    quantity: impl Fn(AddOnScaling) -> u32,
) -> PricingResult<(Vec<QuoteLine>, Vec<String>)> {
    let mut lines = Vec::with_capacity(requested.len());
    let mut skipped = Vec::new();

    for id in requested {
        let error = match catalog.iter().find(|a| &a.id == id) {
            Some(add_on) if add_on.available_on(platform) => {
                lines.push(QuoteLine::new(
                    LineCategory::AddOn,
                    add_on.name.clone(),
                    quantity(add_on.scaling),
                    add_on.price_per_year,
                ));
                continue;
            }
            Some(_) => PricingError::IncompatibleAddOn {
                id: id.clone(),
                platform,
            },
            None => PricingError::UnknownAddOn(id.clone()),
        };

        match policy {
            AddOnPolicy::Reject => return Err(error),
            AddOnPolicy::Ignore => {
                warn!(add_on = %id, %platform, reason = %error, "Skipping add-on");
                skipped.push(id.clone());
            }
        }
    }

    Ok((lines, skipped))
}

/// Parsed and validated low-code pricing tables
#[derive(Debug, Clone, PartialEq)]
pub struct LowCodeCatalog {
    pub mendix: MendixPricingTable,
    pub outsystems: OutSystemsPricingTable,
}

impl LowCodeCatalog {
    pub fn load(source: &dyn PricingTableSource) -> PricingResult<Self> {
        let mendix: MendixPricingTable = parse_table(source, PricingTable::Mendix)?;
        mendix.check()?;
        let outsystems: OutSystemsPricingTable = parse_table(source, PricingTable::OutSystems)?;
        outsystems.check()?;

        info!(
            mendix_packs = mendix.resource_packs.len(),
            outsystems_editions = outsystems.editions.len(),
            "Loaded low-code pricing tables"
        );
        Ok(Self { mendix, outsystems })
    }

    /// Catalog built from the compiled-in tables
    pub fn embedded() -> PricingResult<Self> {
        Self::load(&EmbeddedTables)
    }
}

fn parse_table<T>(source: &dyn PricingTableSource, table: PricingTable) -> PricingResult<T>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let json = source.load(table)?;
    let parsed: T =
        serde_json::from_str(&json).map_err(|e| PricingError::data(table.file_name(), e))?;
    parsed
        .validate()
        .map_err(|e| PricingError::data(table.file_name(), e))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn add_on(id: &str, platforms: Vec<DeploymentPlatform>) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: id.to_uppercase(),
            price_per_year: dec!(1000),
            scaling: AddOnScaling::Flat,
            platforms,
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = LowCodeCatalog::embedded().unwrap();
        assert!(!catalog.mendix.resource_packs.is_empty());
        assert!(!catalog.outsystems.editions.is_empty());
    }

    #[test]
    fn test_malformed_table_is_data_error() {
        let mut source = MockPricingTableSource::new();
        source
            .expect_load()
            .with(eq(PricingTable::Mendix))
            .times(1)
            .returning(|_| Ok("{ not json".to_string()));

        let err = LowCodeCatalog::load(&source).unwrap_err();
        assert!(err.is_data_error());
        assert!(err.to_string().contains("mendix_pricing.json"));
    }

    #[test]
    fn test_missing_table_propagates() {
        let mut source = MockPricingTableSource::new();
        source
            .expect_load()
            .with(eq(PricingTable::Mendix))
            .returning(|t| EmbeddedTables.load(t));
        source
            .expect_load()
            .with(eq(PricingTable::OutSystems))
            .returning(|t| Err(PricingError::data(t.file_name(), "not found")));

        let err = LowCodeCatalog::load(&source).unwrap_err();
        assert!(matches!(err, PricingError::Data { ref table, .. } if table == "outsystems_pricing.json"));
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let mut source = MockPricingTableSource::new();
        source.expect_load().returning(|t| {
            let mut table: serde_json::Value =
                serde_json::from_str(&EmbeddedTables.load(t)?).unwrap();
            table["add_ons"][0]["price_per_year"] = serde_json::json!(-5);
            Ok(table.to_string())
        });

        let err = LowCodeCatalog::load(&source).unwrap_err();
        assert!(err.is_data_error());
    }

    #[test]
    fn test_directory_tables_missing_dir() {
        let source = DirectoryTables::new("/nonexistent/pricing");
        let err = source.load(PricingTable::OutSystems).unwrap_err();
        assert!(err.is_data_error());
    }

    #[test]
    fn test_add_on_policy_ignore_collects_skipped() {
        let catalog = vec![
            add_on("ha", vec![]),
            add_on("sentry", vec![DeploymentPlatform::SelfManaged]),
        ];
        let requested = vec!["ha".to_string(), "sentry".to_string(), "bogus".to_string()];

        let (lines, skipped) = price_add_ons(
            &catalog,
            &requested,
            DeploymentPlatform::Cloud,
            AddOnPolicy::Ignore,
            |_| 1,
        )
        .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].description, "HA");
        assert_eq!(skipped, vec!["sentry".to_string(), "bogus".to_string()]);
    }

    #[test]
    fn test_add_on_policy_reject() {
        let catalog = vec![add_on("sentry", vec![DeploymentPlatform::SelfManaged])];

        let err = price_add_ons(
            &catalog,
            &["sentry".to_string()],
            DeploymentPlatform::Cloud,
            AddOnPolicy::Reject,
            |_| 1,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::IncompatibleAddOn { .. }));

        let err = price_add_ons(
            &catalog,
            &["bogus".to_string()],
            DeploymentPlatform::SelfManaged,
            AddOnPolicy::Reject,
            |_| 1,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::UnknownAddOn(ref id) if id == "bogus"));
    }

    #[test]
    fn test_add_on_policy_parses_case_insensitively() {
        assert_eq!("Reject".parse::<AddOnPolicy>().unwrap(), AddOnPolicy::Reject);
        assert_eq!("ignore".parse::<AddOnPolicy>().unwrap(), AddOnPolicy::Ignore);
        assert!("sometimes".parse::<AddOnPolicy>().is_err());
        assert_eq!(AddOnPolicy::default().to_string(), "ignore");
    }

    #[test]
    fn test_add_on_quantity_scaling() {
        let mut per_pack = add_on("support", vec![]);
        per_pack.scaling = AddOnScaling::PerAoPack;

        let (lines, _) = price_add_ons(
            &[per_pack],
            &["support".to_string()],
            DeploymentPlatform::Cloud,
            AddOnPolicy::Ignore,
            |scaling| match scaling {
                AddOnScaling::PerAoPack => 4,
                _ => 1,
            },
        )
        .unwrap();
        assert_eq!(lines[0].amount, dec!(4000));
    }

    #[test]
    fn test_quote_totals() {
        let quote = LowCodeQuote::new(
            "Mendix",
            "standard",
            vec![
                QuoteLine::new(LineCategory::Edition, "Platform", 1, dec!(12000)),
                QuoteLine::new(LineCategory::AddOn, "HA", 2, dec!(6000)),
            ],
            0,
            vec![],
        );
        assert_eq!(quote.total_per_year, dec!(24000));
        assert_eq!(quote.total_per_month(), dec!(2000));
        assert_eq!(quote.subtotal(LineCategory::AddOn), dec!(12000));
    }
}
