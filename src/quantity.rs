pub mod cost;
pub mod energy;
pub mod market;
pub mod power;
pub mod rate;

use std::{
    cmp::Ordering,
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimensioned value.
///
/// The const parameters are the exponents of kilowatts, hours, and euro cents.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const COST: isize>(pub T);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<f64, POWER, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> PartialEq
    for Quantity<f64, POWER, TIME, COST>
{
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Eq
    for Quantity<f64, POWER, TIME, COST>
{
}

impl<const POWER: isize, const TIME: isize, const COST: isize> PartialOrd
    for Quantity<f64, POWER, TIME, COST>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Ord
    for Quantity<f64, POWER, TIME, COST>
{
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Mul<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Div<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<f64, 0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1.0).min(Bare::from(2.0)), Bare::from(1.0));
        assert_eq!(Bare::from(2.0).min(Bare::from(1.0)), Bare::from(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1.0).max(Bare::from(2.0)), Bare::from(2.0));
        assert_eq!(Bare::from(2.0).max(Bare::from(1.0)), Bare::from(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Bare::from(1.0).clamp(Bare::from(2.0), Bare::from(3.0)), Bare::from(2.0));
        assert_eq!(Bare::from(4.0).clamp(Bare::from(2.0), Bare::from(3.0)), Bare::from(3.0));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Bare::from(-0.0), Bare::ZERO);
    }

    #[test]
    fn test_scalar_mul() {
        assert_eq!(Bare::from(2.5) * 2.0, Bare::from(5.0));
    }
}
