//! Pricing/crediting engine.
//!
//! Pure functions from (genre, audience) to a charge in minor units and to a
//! volume-credit score. No state beyond the immutable [`PricingRules`] tables.

pub mod engine;
pub mod rules;

pub use engine::{amount_for, volume_credits_for};
pub use rules::{ComedyExtras, GenreTariff, PastoralExtras, PricingRules};
