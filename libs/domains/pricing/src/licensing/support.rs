//! Vendor support tiers and third-party community support add-ons

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{SupportTier, SupportTierInfo};

/// Static support tier definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SupportTierDef {
    pub tier: SupportTier,
    pub name: &'static str,
    pub hours: &'static str,
    pub response_sla: &'static str,
    pub cost_multiplier: Decimal,
    pub additional_annual_cost: Decimal,
    pub includes_tam: bool,
}

impl SupportTierDef {
    pub fn info(&self) -> SupportTierInfo {
        SupportTierInfo {
            tier: self.tier,
            name: self.name.to_string(),
            hours: self.hours.to_string(),
            response_sla: self.response_sla.to_string(),
            cost_multiplier: self.cost_multiplier,
            additional_annual_cost: self.additional_annual_cost,
            includes_tam: self.includes_tam,
        }
    }

    /// Support cost over an already discounted license base
    pub fn cost_over(&self, base: Decimal) -> Decimal {
        let cost = base * (self.cost_multiplier - Decimal::ONE) + self.additional_annual_cost;
        cost.max(Decimal::ZERO)
    }
}

/// Pick the requested tier, or the first (default) tier of the table
pub(crate) fn resolve_tier(
    tiers: &'static [SupportTierDef],
    requested: SupportTier,
) -> Option<&'static SupportTierDef> {
    tiers.iter().find(|t| t.tier == requested).or_else(|| {
        let fallback = tiers.first();
        if let Some(def) = fallback {
            debug!(
                requested = %requested,
                fallback = %def.tier,
                "Support tier not offered, using default tier"
            );
        }
        fallback
    })
}

/// Flat third-party support price for open-source distributions
pub(crate) fn community_support_cost(
    table: &'static [(SupportTier, Decimal)],
    requested: SupportTier,
) -> Decimal {
    table
        .iter()
        .find(|(tier, _)| *tier == requested)
        .map(|(_, price)| *price)
        .unwrap_or(Decimal::ZERO)
}

pub(crate) static RED_HAT: [SupportTierDef; 3] = [
    SupportTierDef {
        tier: SupportTier::Standard,
        name: "Standard",
        hours: "8x5",
        response_sla: "4 business hours (Sev 1)",
        cost_multiplier: dec!(1.0),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Premium,
        name: "Premium",
        hours: "24x7",
        response_sla: "1 hour (Sev 1)",
        cost_multiplier: dec!(1.5),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Enterprise,
        name: "Premium with Technical Account Manager",
        hours: "24x7",
        response_sla: "1 hour (Sev 1)",
        cost_multiplier: dec!(1.5),
        additional_annual_cost: dec!(75000),
        includes_tam: true,
    },
];

pub(crate) static VMWARE: [SupportTierDef; 2] = [
    SupportTierDef {
        tier: SupportTier::Standard,
        name: "Production Support",
        hours: "24x7",
        response_sla: "30 minutes (Sev 1)",
        cost_multiplier: dec!(1.0),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Premium,
        name: "Premier Services",
        hours: "24x7",
        response_sla: "30 minutes (Sev 1)",
        cost_multiplier: dec!(1.0),
        additional_annual_cost: dec!(50000),
        includes_tam: true,
    },
];

pub(crate) static SUSE: [SupportTierDef; 3] = [
    SupportTierDef {
        tier: SupportTier::Standard,
        name: "Standard",
        hours: "12x5",
        response_sla: "4 business hours (Sev 1)",
        cost_multiplier: dec!(1.0),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Premium,
        name: "Priority",
        hours: "24x7",
        response_sla: "1 hour (Sev 1)",
        cost_multiplier: dec!(1.25),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Enterprise,
        name: "Priority with Premium Service",
        hours: "24x7",
        response_sla: "1 hour (Sev 1)",
        cost_multiplier: dec!(1.25),
        additional_annual_cost: dec!(40000),
        includes_tam: true,
    },
];

pub(crate) static CANONICAL: [SupportTierDef; 3] = [
    SupportTierDef {
        tier: SupportTier::Standard,
        name: "Weekday Support",
        hours: "8x5",
        response_sla: "8 business hours (Sev 1)",
        cost_multiplier: dec!(1.0),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Premium,
        name: "24/7 Support",
        hours: "24x7",
        response_sla: "2 hours (Sev 1)",
        cost_multiplier: dec!(1.4),
        additional_annual_cost: Decimal::ZERO,
        includes_tam: false,
    },
    SupportTierDef {
        tier: SupportTier::Enterprise,
        name: "24/7 Support with Dedicated Engineer",
        hours: "24x7",
        response_sla: "2 hours (Sev 1)",
        cost_multiplier: dec!(1.4),
        additional_annual_cost: dec!(30000),
        includes_tam: true,
    },
];

/// Third-party support for upstream Kubernetes
pub(crate) static VANILLA_COMMUNITY: [(SupportTier, Decimal); 2] = [
    (SupportTier::Basic, dec!(2000)),
    (SupportTier::Premium, dec!(10000)),
];

/// Third-party support for community Rancher / RKE2 / Charmed
pub(crate) static OPEN_CORE_COMMUNITY: [(SupportTier, Decimal); 2] = [
    (SupportTier::Basic, dec!(1500)),
    (SupportTier::Premium, dec!(7500)),
];

/// Third-party support for lightweight distributions (K3s, MicroK8s)
pub(crate) static LIGHTWEIGHT_COMMUNITY: [(SupportTier, Decimal); 2] = [
    (SupportTier::Basic, dec!(1000)),
    (SupportTier::Premium, dec!(5000)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_tier() {
        let tier = resolve_tier(&RED_HAT, SupportTier::Premium).unwrap();
        assert_eq!(tier.name, "Premium");
    }

    #[test]
    fn test_resolve_falls_back_to_first_tier() {
        let tier = resolve_tier(&VMWARE, SupportTier::Basic).unwrap();
        assert_eq!(tier.tier, SupportTier::Standard);
    }

    #[test]
    fn test_break_even_tier_costs_nothing() {
        assert_eq!(RED_HAT[0].cost_over(dec!(25000)), Decimal::ZERO);
    }

    #[test]
    fn test_multiplier_and_additional_cost() {
        // 20000 * 0.25 + 40000
        assert_eq!(SUSE[2].cost_over(dec!(20000)), dec!(45000));
    }

    #[test]
    fn test_community_support_lookup() {
        assert_eq!(
            community_support_cost(&VANILLA_COMMUNITY, SupportTier::Basic),
            dec!(2000)
        );
        assert_eq!(
            community_support_cost(&VANILLA_COMMUNITY, SupportTier::Premium),
            dec!(10000)
        );
        assert_eq!(
            community_support_cost(&VANILLA_COMMUNITY, SupportTier::Standard),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_all_tables_have_non_negative_terms() {
        for table in [&RED_HAT[..], &VMWARE[..], &SUSE[..], &CANONICAL[..]] {
            for def in table {
                assert!(def.cost_multiplier >= Decimal::ZERO);
                assert!(def.additional_annual_cost >= Decimal::ZERO);
            }
        }
    }
}
