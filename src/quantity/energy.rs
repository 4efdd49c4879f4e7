use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;

use crate::quantity::{Quantity, power::Kilowatts};

pub type KilowattHours = Quantity<f64, 1, 1, 0>;

impl KilowattHours {
    /// Get the time needed to consume the energy at the constant power.
    ///
    /// The result is rounded to whole seconds. [`None`] when it does not fit into [`TimeDelta`]
    /// or either operand is not finite.
    #[must_use]
    pub fn duration_at(self, power: Kilowatts) -> Option<TimeDelta> {
        let seconds = self.0 / power.0 * 3600.0;
        if !seconds.is_finite() || seconds.abs() >= 1e15 {
            return None;
        }

        #[expect(clippy::cast_possible_truncation)]
        TimeDelta::try_seconds(seconds.round() as i64)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}kWh", self.0)
    }
}
