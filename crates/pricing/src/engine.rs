//! Amount and volume-credit calculation.
//!
//! Each genre's policy is one `match` arm over its own constants; there is no
//! shared branch between genres.

use playbill_core::{DomainError, DomainResult, Money};
use playbill_plays::Genre;

use crate::rules::PricingRules;

impl PricingRules {
    /// Charge for one performance, in minor units.
    ///
    /// Fails only on arithmetic overflow; the genre is already validated by
    /// construction.
    pub fn amount_for(&self, genre: Genre, audience: u32) -> DomainResult<Money> {
        let tariff = self.tariff(genre);
        let over = tariff.seats_over_threshold(audience);
        let mut amount = tariff.base_amount;

        match genre {
            Genre::Tragedy | Genre::History | Genre::Pastoral => {
                if over > 0 {
                    amount = add(amount, per_seat(tariff.over_threshold_per_person, over)?)?;
                }
            }
            Genre::Comedy => {
                let extras = &self.comedy_extras;
                if over > 0 {
                    amount = add(amount, extras.over_threshold_surcharge)?;
                    amount = add(amount, per_seat(tariff.over_threshold_per_person, over)?)?;
                }
                amount = add(amount, per_seat(extras.per_audience_member, audience)?)?;
            }
        }

        Ok(amount)
    }

    /// Volume credits earned by one performance.
    pub fn volume_credits_for(&self, genre: Genre, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(self.tariff(genre).credit_threshold));

        let extra = match genre {
            Genre::Comedy => audience / self.comedy_extras.credit_divisor.get(),
            Genre::Pastoral => audience / self.pastoral_extras.credit_divisor.get(),
            Genre::Tragedy | Genre::History => 0,
        };

        base + u64::from(extra)
    }
}

/// [`PricingRules::amount_for`] at house rates.
pub fn amount_for(genre: Genre, audience: u32) -> DomainResult<Money> {
    PricingRules::HOUSE.amount_for(genre, audience)
}

/// [`PricingRules::volume_credits_for`] at house rates.
pub fn volume_credits_for(genre: Genre, audience: u32) -> u64 {
    PricingRules::HOUSE.volume_credits_for(genre, audience)
}

fn add(a: Money, b: Money) -> DomainResult<Money> {
    a.checked_add(b)
        .ok_or_else(|| DomainError::overflow("performance amount"))
}

fn per_seat(rate: Money, seats: u32) -> DomainResult<Money> {
    rate.checked_mul(u64::from(seats))
        .ok_or_else(|| DomainError::overflow("per-seat charge"))
}
