//! Banded per-user pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PricingError, PricingResult};

/// One user band covering `(min_users, max_users]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserBand {
    pub min_users: u32,
    /// `None` for the open-ended top band
    pub max_users: Option<u32>,
    #[validate(custom(function = "super::non_negative"))]
    pub price_per_pack: Decimal,
    #[validate(range(min = 1))]
    pub pack_size: u32,
}

impl UserBand {
    fn packs_for(&self, users: u32) -> u32 {
        users.saturating_sub(self.min_users).div_ceil(self.pack_size.max(1))
    }
}

/// Packs bought in one band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCharge {
    pub min_users: u32,
    pub max_users: Option<u32>,
    pub packs: u32,
    pub price_per_pack: Decimal,
    pub amount: Decimal,
}

/// Annual cost of `users` across sorted, contiguous bands.
///
/// The band containing the count is charged `ceil((users - min) / pack_size)`
/// packs, each band fully below it is charged in full, and counts past the
/// last band extend that band. Counts at or below the first floor are free.
pub fn resolve_bands(bands: &[UserBand], users: u32) -> Vec<BandCharge> {
    let Some(first) = bands.first() else {
        return Vec::new();
    };
    if users <= first.min_users {
        return Vec::new();
    }

    let mut charges = Vec::new();
    for (index, band) in bands.iter().enumerate() {
        let is_last = index + 1 == bands.len();
        let (packs, done) = match band.max_users {
            Some(max) if users > max && !is_last => (band.packs_for(max), false),
            _ => (band.packs_for(users), true),
        };
        charges.push(BandCharge {
            min_users: band.min_users,
            max_users: band.max_users,
            packs,
            price_per_pack: band.price_per_pack,
            amount: Decimal::from(packs) * band.price_per_pack,
        });
        if done {
            break;
        }
    }
    charges
}

/// Sum of [`resolve_bands`]
pub fn band_cost(bands: &[UserBand], users: u32) -> Decimal {
    resolve_bands(bands, users).iter().map(|c| c.amount).sum()
}

/// Bands must be contiguous and ascending, with only the last one open-ended
pub(crate) fn check_bands(table: &str, label: &str, bands: &[UserBand]) -> PricingResult<()> {
    for (index, band) in bands.iter().enumerate() {
        let is_last = index + 1 == bands.len();
        match band.max_users {
            Some(max) if max <= band.min_users => {
                return Err(PricingError::data(
                    table,
                    format!("{label} band {index} has max_users <= min_users"),
                ));
            }
            None if !is_last => {
                return Err(PricingError::data(
                    table,
                    format!("{label} band {index} is open-ended but not last"),
                ));
            }
            _ => {}
        }
        if let Some(next) = bands.get(index + 1) {
            if band.max_users != Some(next.min_users) {
                return Err(PricingError::data(
                    table,
                    format!("{label} bands {index} and {} are not contiguous", index + 1),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bands() -> Vec<UserBand> {
        vec![
            UserBand {
                min_users: 100,
                max_users: Some(1000),
                price_per_pack: dec!(6000),
                pack_size: 100,
            },
            UserBand {
                min_users: 1000,
                max_users: Some(10000),
                price_per_pack: dec!(4000),
                pack_size: 1000,
            },
            UserBand {
                min_users: 10000,
                max_users: None,
                price_per_pack: dec!(2000),
                pack_size: 10000,
            },
        ]
    }

    #[test]
    fn test_users_at_or_below_floor_are_free() {
        assert_eq!(band_cost(&bands(), 0), dec!(0));
        assert_eq!(band_cost(&bands(), 100), dec!(0));
        assert!(resolve_bands(&bands(), 50).is_empty());
    }

    #[test]
    fn test_partial_pack_rounds_up() {
        // 101 users -> 1 pack in the first band
        assert_eq!(band_cost(&bands(), 101), dec!(6000));
        // 250 users -> ceil(150 / 100) = 2 packs
        assert_eq!(band_cost(&bands(), 250), dec!(12000));
    }

    #[test]
    fn test_band_boundary_is_inclusive_of_max() {
        // 1000 users sit in the first band: 9 packs
        assert_eq!(band_cost(&bands(), 1000), dec!(54000));
        // 1001 users: first band full + 1 pack of the second
        assert_eq!(band_cost(&bands(), 1001), dec!(58000));
    }

    #[test]
    fn test_cost_never_decreases() {
        let bands = bands();
        let mut previous = Decimal::ZERO;
        for users in (0..25_000).step_by(37) {
            let cost = band_cost(&bands, users);
            assert!(cost >= previous, "cost dropped at {users}");
            previous = cost;
        }
    }

    #[test]
    fn test_open_band_itemisation() {
        let charges = resolve_bands(&bands(), 25_000);
        assert_eq!(charges.len(), 3);
        assert_eq!(charges[0].packs, 9);
        assert_eq!(charges[1].packs, 9);
        assert_eq!(charges[2].packs, 2);
        assert_eq!(band_cost(&bands(), 25_000), dec!(94000));
    }

    #[test]
    fn test_counts_past_last_bounded_band_extend_it() {
        let bands = vec![UserBand {
            min_users: 0,
            max_users: Some(500),
            price_per_pack: dec!(100),
            pack_size: 50,
        }];
        assert_eq!(band_cost(&bands, 500), dec!(1000));
        assert_eq!(band_cost(&bands, 620), dec!(1300));
    }

    #[test]
    fn test_empty_bands_cost_nothing() {
        assert_eq!(band_cost(&[], 10_000), dec!(0));
    }

    #[test]
    fn test_check_bands_rejects_gaps() {
        let mut gapped = bands();
        gapped[1].min_users = 1500;
        let err = check_bands("t", "internal", &gapped).unwrap_err();
        assert!(err.to_string().contains("not contiguous"));
    }

    #[test]
    fn test_check_bands_rejects_inner_open_band() {
        let mut open = bands();
        open[0].max_users = None;
        assert!(check_bands("t", "internal", &open).is_err());
        assert!(check_bands("t", "internal", &bands()).is_ok());
    }
}
