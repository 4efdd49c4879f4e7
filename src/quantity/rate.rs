use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::{Quantity, cost::KilowattCost};

/// Euro cents per kilowatt-hour.
pub type KilowattHourRate = Quantity<f64, -1, -1, 1>;

impl KilowattHourRate {
    /// Round to hundredths of a cent, half away from zero.
    ///
    /// Negative zero collapses into zero, so that the rate never renders as `-0.00`.
    pub fn round_to_hundredths(self) -> Self {
        let rounded = (self.0 * 100.0).round() / 100.0;
        Self(if rounded == 0.0 { 0.0 } else { rounded })
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ct/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}ct/kWh", self.0)
    }
}

impl Mul<TimeDelta> for KilowattHourRate {
    type Output = KilowattCost;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        Quantity(self.0 * hours)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(KilowattHourRate::from(1.234).round_to_hundredths().0, 1.23);
        assert_abs_diff_eq!(KilowattHourRate::from(-5.0051).round_to_hundredths().0, -5.01);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_abs_diff_eq!(KilowattHourRate::from(0.125).round_to_hundredths().0, 0.13);
        assert_abs_diff_eq!(KilowattHourRate::from(-0.125).round_to_hundredths().0, -0.13);
    }

    #[test]
    fn test_negative_zero_is_coerced() {
        let rate = KilowattHourRate::from(-0.001).round_to_hundredths();
        assert!(rate.0.is_sign_positive());
        assert_eq!(rate.to_string(), "0.00 ct/kWh");
    }

    #[test]
    fn test_mul_time_delta() {
        assert_abs_diff_eq!((KilowattHourRate::from(10.0) * TimeDelta::minutes(90)).0, 15.0);
    }

    proptest! {
        #[test]
        fn prop_round_to_hundredths_is_idempotent(value in -100_000.0..100_000.0_f64) {
            let once = KilowattHourRate::from(value).round_to_hundredths();
            let twice = once.round_to_hundredths();
            prop_assert_eq!(once.0.to_bits(), twice.0.to_bits());
        }
    }
}
