//! Money in minor currency units.
//!
//! All charges are integer cents; nothing in the domain touches floating point.
//! The system has a single display currency (US dollars), so `Display` renders
//! the en-US form used on statements: `$1,234.56`.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Minor units per major unit (cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Non-negative amount of money in minor units (e.g. cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole dollars (truncated).
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Cents part, always `0..=99`.
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % MINOR_UNITS_PER_MAJOR
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply a per-unit rate by a count (e.g. a per-seat rate by seats).
    pub fn checked_mul(self, count: u64) -> Option<Money> {
        self.0.checked_mul(count).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.dollars().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${}.{:02}", grouped, self.cents_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_dollar_sign_and_two_decimals() {
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(65_000).to_string(), "$650.00");
        assert_eq!(Money::from_cents(29_050).to_string(), "$290.50");
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::from_cents(173_000).to_string(), "$1,730.00");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(12_345_678).to_string(), "$123,456.78");
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(Money::from_cents(u64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(u64::MAX).checked_mul(2), None);
        assert_eq!(
            Money::from_cents(500).checked_mul(3),
            Some(Money::from_cents(1500))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: stripping the formatting gives back the exact cents.
        #[test]
        fn display_preserves_value(cents in 0u64..10_000_000_000u64) {
            let rendered = Money::from_cents(cents).to_string();
            let digits: String = rendered.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits.parse::<u64>().unwrap(), cents);
        }
    }
}
