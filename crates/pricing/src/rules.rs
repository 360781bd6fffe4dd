//! Per-genre pricing and crediting constants.

use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

use playbill_core::{DomainError, DomainResult, Money};
use playbill_plays::Genre;

/// The four constants every genre carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreTariff {
    /// Charged for every performance regardless of audience.
    pub base_amount: Money,
    /// Audience size up to which only the base amount applies.
    pub audience_threshold: u32,
    /// Charged per seat above `audience_threshold`.
    pub over_threshold_per_person: Money,
    /// Audience size above which each seat earns one volume credit.
    pub credit_threshold: u32,
}

impl GenreTariff {
    pub const fn new(
        base_amount: u64,
        audience_threshold: u32,
        over_threshold_per_person: u64,
        credit_threshold: u32,
    ) -> Self {
        Self {
            base_amount: Money::from_cents(base_amount),
            audience_threshold,
            over_threshold_per_person: Money::from_cents(over_threshold_per_person),
            credit_threshold,
        }
    }

    /// Seats above the pricing threshold (0 when at or below it).
    pub fn seats_over_threshold(&self, audience: u32) -> u32 {
        audience.saturating_sub(self.audience_threshold)
    }
}

/// Comedy-only pricing terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComedyExtras {
    /// One-off charge once the audience exceeds the comedy threshold.
    pub over_threshold_surcharge: Money,
    /// Charged for every audience member, threshold or not.
    pub per_audience_member: Money,
    /// One extra credit per this many attendees.
    pub credit_divisor: NonZeroU32,
}

/// Pastoral-only crediting terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PastoralExtras {
    /// One extra credit per this many attendees.
    pub credit_divisor: NonZeroU32,
}

/// Complete, immutable rate card.
///
/// Built once at startup (house rates or a JSON override) and then shared
/// read-only. Any field missing from a JSON override, at any depth, keeps its
/// house value; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RulesOverride")]
pub struct PricingRules {
    pub tragedy: GenreTariff,
    pub comedy: GenreTariff,
    pub history: GenreTariff,
    pub pastoral: GenreTariff,
    pub comedy_extras: ComedyExtras,
    pub pastoral_extras: PastoralExtras,
}

/// Credit threshold shared by tragedy and comedy.
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

impl PricingRules {
    /// House rates.
    pub const HOUSE: PricingRules = PricingRules {
        tragedy: GenreTariff::new(4000, 30, 1000, BASE_VOLUME_CREDIT_THRESHOLD),
        comedy: GenreTariff::new(3000, 20, 500, BASE_VOLUME_CREDIT_THRESHOLD),
        history: GenreTariff::new(2000, 20, 1000, 20),
        pastoral: GenreTariff::new(4000, 20, 2500, 25),
        comedy_extras: ComedyExtras {
            over_threshold_surcharge: Money::from_cents(1000),
            per_audience_member: Money::from_cents(300),
            credit_divisor: NonZeroU32::new(5).unwrap(),
        },
        pastoral_extras: PastoralExtras {
            credit_divisor: NonZeroU32::new(2).unwrap(),
        },
    };

    /// Parse a JSON rate card. Zero credit divisors and unknown keys are
    /// rejected.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::config(e.to_string()))
    }

    pub fn tariff(&self, genre: Genre) -> &GenreTariff {
        match genre {
            Genre::Tragedy => &self.tragedy,
            Genre::Comedy => &self.comedy,
            Genre::History => &self.history,
            Genre::Pastoral => &self.pastoral,
        }
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::HOUSE
    }
}

/// JSON rate card as written: every field optional, merged over `HOUSE`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RulesOverride {
    tragedy: TariffOverride,
    comedy: TariffOverride,
    history: TariffOverride,
    pastoral: TariffOverride,
    comedy_extras: ComedyOverride,
    pastoral_extras: PastoralOverride,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TariffOverride {
    base_amount: Option<Money>,
    audience_threshold: Option<u32>,
    over_threshold_per_person: Option<Money>,
    credit_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComedyOverride {
    over_threshold_surcharge: Option<Money>,
    per_audience_member: Option<Money>,
    credit_divisor: Option<NonZeroU32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PastoralOverride {
    credit_divisor: Option<NonZeroU32>,
}

impl TariffOverride {
    fn over(self, house: GenreTariff) -> GenreTariff {
        GenreTariff {
            base_amount: self.base_amount.unwrap_or(house.base_amount),
            audience_threshold: self.audience_threshold.unwrap_or(house.audience_threshold),
            over_threshold_per_person: self
                .over_threshold_per_person
                .unwrap_or(house.over_threshold_per_person),
            credit_threshold: self.credit_threshold.unwrap_or(house.credit_threshold),
        }
    }
}

impl From<RulesOverride> for PricingRules {
    fn from(o: RulesOverride) -> Self {
        let house = PricingRules::HOUSE;
        PricingRules {
            tragedy: o.tragedy.over(house.tragedy),
            comedy: o.comedy.over(house.comedy),
            history: o.history.over(house.history),
            pastoral: o.pastoral.over(house.pastoral),
            comedy_extras: ComedyExtras {
                over_threshold_surcharge: o
                    .comedy_extras
                    .over_threshold_surcharge
                    .unwrap_or(house.comedy_extras.over_threshold_surcharge),
                per_audience_member: o
                    .comedy_extras
                    .per_audience_member
                    .unwrap_or(house.comedy_extras.per_audience_member),
                credit_divisor: o
                    .comedy_extras
                    .credit_divisor
                    .unwrap_or(house.comedy_extras.credit_divisor),
            },
            pastoral_extras: PastoralExtras {
                credit_divisor: o
                    .pastoral_extras
                    .credit_divisor
                    .unwrap_or(house.pastoral_extras.credit_divisor),
            },
        }
    }
}
