use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    error::InvalidUsageRequest,
    ops::Interval,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// How much the appliance needs to run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Usage {
    /// Fixed run time.
    Duration(TimeDelta),

    /// Energy consumed at a constant power, the run time follows from the two.
    Energy { energy: KilowattHours, power: Kilowatts },
}

impl Usage {
    /// Get the run time, rounded to whole seconds in the energy mode.
    pub fn duration(self) -> Result<TimeDelta, InvalidUsageRequest> {
        let duration = match self {
            Self::Duration(duration) => duration,
            Self::Energy { energy, power } => {
                if power <= Kilowatts::ZERO {
                    return Err(InvalidUsageRequest::NonPositivePower);
                }
                if energy <= KilowattHours::ZERO {
                    return Err(InvalidUsageRequest::NonPositiveEnergy);
                }
                energy.duration_at(power).ok_or(InvalidUsageRequest::DurationOutOfRange)?
            }
        };
        if duration <= TimeDelta::zero() {
            return Err(InvalidUsageRequest::NonPositiveDuration);
        }
        Ok(duration)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UsageRequest {
    pub usage: Usage,

    /// The window must fit entirely into this range.
    pub search_range: Interval,
}

impl UsageRequest {
    pub const fn with_duration(
        duration: TimeDelta,
        search_start: DateTime<Utc>,
        search_end: DateTime<Utc>,
    ) -> Self {
        Self { usage: Usage::Duration(duration), search_range: Interval::new(search_start, search_end) }
    }

    pub const fn with_energy(
        energy: KilowattHours,
        power: Kilowatts,
        search_start: DateTime<Utc>,
        search_end: DateTime<Utc>,
    ) -> Self {
        Self {
            usage: Usage::Energy { energy, power },
            search_range: Interval::new(search_start, search_end),
        }
    }

    /// Validate the request and get the usage duration.
    pub fn validate(&self) -> Result<TimeDelta, InvalidUsageRequest> {
        let duration = self.usage.duration()?;
        if self.search_range.is_empty() {
            return Err(InvalidUsageRequest::EmptySearchRange);
        }
        if duration > self.search_range.len() {
            return Err(InvalidUsageRequest::DurationExceedsSearchRange);
        }
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn range() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2025, 10, 11, 0, 0, 0).unwrap();
        (start, start + TimeDelta::days(1))
    }

    #[test]
    fn test_energy_mode_duration() {
        let (start, end) = range();
        let request =
            UsageRequest::with_energy(KilowattHours::from(2.0), Kilowatts::from(0.5), start, end);
        assert_eq!(request.validate(), Ok(TimeDelta::seconds(14_400)));
    }

    #[test]
    fn test_non_positive_duration() {
        let (start, end) = range();
        for duration in [TimeDelta::zero(), TimeDelta::hours(-1)] {
            assert_eq!(
                UsageRequest::with_duration(duration, start, end).validate(),
                Err(InvalidUsageRequest::NonPositiveDuration),
            );
        }
    }

    #[test]
    fn test_non_positive_power() {
        let (start, end) = range();
        let request = UsageRequest::with_energy(KilowattHours::from(1.0), Kilowatts::ZERO, start, end);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::NonPositivePower));
    }

    #[test]
    fn test_non_positive_energy() {
        let (start, end) = range();
        let request =
            UsageRequest::with_energy(KilowattHours::from(-1.0), Kilowatts::from(1.0), start, end);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::NonPositiveEnergy));
    }

    #[test]
    fn test_tiny_energy_rounds_to_zero() {
        let (start, end) = range();
        let request =
            UsageRequest::with_energy(KilowattHours::from(1e-6), Kilowatts::from(1.0), start, end);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::NonPositiveDuration));
    }

    #[test]
    fn test_duration_out_of_range() {
        let (start, end) = range();
        let request =
            UsageRequest::with_energy(KilowattHours::from(1e300), Kilowatts::from(1e-300), start, end);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::DurationOutOfRange));
    }

    #[test]
    fn test_empty_search_range() {
        let (start, _) = range();
        let request = UsageRequest::with_duration(TimeDelta::hours(1), start, start);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::EmptySearchRange));
    }

    #[test]
    fn test_duration_exceeds_search_range() {
        let (start, end) = range();
        let request = UsageRequest::with_duration(TimeDelta::hours(25), start, end);
        assert_eq!(request.validate(), Err(InvalidUsageRequest::DurationExceedsSearchRange));

        let request = UsageRequest::with_duration(TimeDelta::hours(24), start, end);
        assert_eq!(request.validate(), Ok(TimeDelta::hours(24)), "exact fit is fine");
    }
}
