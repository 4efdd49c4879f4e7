use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use serde_with::{TimestampSeconds, serde_as};

use crate::{
    core::point::NormalizedPricePoint,
    ops::Interval,
    quantity::{
        cost::{Cents, KilowattCost},
        energy::KilowattHours,
        power::Kilowatts,
        rate::KilowattHourRate,
    },
};

/// The cheapest window found.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HourWindow {
    /// Points overlapping the window, in time order.
    pub associated_price_points: Vec<NormalizedPricePoint>,

    #[serde_as(as = "TimestampSeconds<i64>")]
    pub window_start: DateTime<Utc>,

    #[serde_as(as = "TimestampSeconds<i64>")]
    pub window_end: DateTime<Utc>,

    /// Time-weighted sum of the rates, that is the cost per kilowatt of constant draw.
    pub total_cost: KilowattCost,
}

impl HourWindow {
    pub const fn interval(&self) -> Interval {
        Interval::new(self.window_start, self.window_end)
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.window_end - self.window_start
    }

    pub fn average_rate(&self) -> KilowattHourRate {
        self.total_cost / self.duration()
    }

    /// Cost of running a constant load through the window.
    pub fn energy_cost(&self, power: Kilowatts) -> Cents {
        self.total_cost * power
    }

    pub fn energy(&self, power: Kilowatts) -> KilowattHours {
        power * self.duration()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    use super::*;

    fn window() -> HourWindow {
        let window_start = Utc.with_ymd_and_hms(2025, 10, 11, 1, 30, 0).unwrap();
        HourWindow {
            associated_price_points: Vec::new(),
            window_start,
            window_end: window_start + TimeDelta::minutes(90),
            total_cost: KilowattCost::from(15.0),
        }
    }

    #[test]
    fn test_helpers() {
        let window = window();
        assert_eq!(window.duration(), TimeDelta::minutes(90));
        assert_abs_diff_eq!(window.average_rate().0, 10.0);
        assert_abs_diff_eq!(window.energy_cost(Kilowatts::from(2.0)).0, 30.0);
        assert_abs_diff_eq!(window.energy(Kilowatts::from(2.0)).0, 3.0);
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&window())?,
            r#"{"associated_price_points":[],"window_start":1760146200,"window_end":1760151600,"total_cost":15.0}"#,
        );
        Ok(())
    }
}
