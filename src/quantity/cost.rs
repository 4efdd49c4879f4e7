use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use chrono::TimeDelta;

use crate::quantity::{Quantity, power::Kilowatts, rate::KilowattHourRate};

/// Euro cents.
pub type Cents = Quantity<f64, 0, 0, 1>;

impl Display for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ct", self.0)
    }
}

impl Debug for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}ct", self.0)
    }
}

/// Cost of a window per kilowatt of constant draw: rate integrated over time.
///
/// Multiplied by the appliance power, it gives the actual [`Cents`].
pub type KilowattCost = Quantity<f64, -1, 0, 1>;

impl Display for KilowattCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ct/kW", self.0)
    }
}

impl Debug for KilowattCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}ct/kW", self.0)
    }
}

impl Mul<Kilowatts> for KilowattCost {
    type Output = Cents;

    fn mul(self, rhs: Kilowatts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Div<TimeDelta> for KilowattCost {
    type Output = KilowattHourRate;

    fn div(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        Quantity(self.0 / hours)
    }
}
