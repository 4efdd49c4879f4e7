//! Quick search range presets.

use chrono::{DateTime, MappedLocalTime, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::ops::Interval;

const EVENING_HOUR: u32 = 20;
const MORNING_HOUR: u32 = 7;

/// From now on for the specified time, clipped to the horizon.
#[must_use]
pub fn next_hours(now: DateTime<Utc>, length: TimeDelta, horizon: Interval) -> Option<Interval> {
    Interval::new(now, now.checked_add_signed(length)?).intersection(horizon)
}

/// From now on till the end of the price data.
#[must_use]
pub fn until_horizon_end(now: DateTime<Utc>, horizon: Interval) -> Option<Interval> {
    horizon.intersection(horizon.with_start(now))
}

/// Tonight from 20:00 till 07:00 local time, clipped to the horizon.
///
/// When it is already night, the range starts now.
#[must_use]
pub fn tonight(now: DateTime<Utc>, time_zone: Tz, horizon: Interval) -> Option<Interval> {
    let local_now = now.with_timezone(&time_zone);
    let today = local_now.date_naive();
    let hour = local_now.hour();
    let night = if hour < MORNING_HOUR {
        Interval::new(now, local_time(time_zone, today, MORNING_HOUR)?)
    } else if hour >= EVENING_HOUR {
        Interval::new(now, local_time(time_zone, today.succ_opt()?, MORNING_HOUR)?)
    } else {
        Interval::new(
            local_time(time_zone, today, EVENING_HOUR)?,
            local_time(time_zone, today.succ_opt()?, MORNING_HOUR)?,
        )
    };
    night.intersection(horizon)
}

fn local_time(time_zone: Tz, date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    match time_zone.from_local_datetime(&date.and_hms_opt(hour, 0, 0)?) {
        MappedLocalTime::Single(time) | MappedLocalTime::Ambiguous(time, _) => {
            Some(time.with_timezone(&Utc))
        }
        MappedLocalTime::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, day, hour, minute, 0).unwrap()
    }

    /// 2025-10-11 00:00 till 2025-10-12 22:00 UTC.
    fn horizon() -> Interval {
        Interval::new(at(11, 0, 0), at(12, 22, 0))
    }

    #[test]
    fn test_next_hours() {
        assert_eq!(
            next_hours(at(11, 10, 30), TimeDelta::hours(3), horizon()),
            Some(Interval::new(at(11, 10, 30), at(11, 13, 30))),
        );
        assert_eq!(
            next_hours(at(12, 20, 0), TimeDelta::hours(3), horizon()),
            Some(Interval::new(at(12, 20, 0), at(12, 22, 0))),
            "clipped to the horizon",
        );
        assert_eq!(next_hours(at(13, 0, 0), TimeDelta::hours(3), horizon()), None);
    }

    #[test]
    fn test_until_horizon_end() {
        assert_eq!(
            until_horizon_end(at(11, 10, 30), horizon()),
            Some(Interval::new(at(11, 10, 30), at(12, 22, 0))),
        );
        assert_eq!(until_horizon_end(at(10, 0, 0), horizon()), Some(horizon()));
        assert_eq!(until_horizon_end(at(12, 22, 0), horizon()), None);
    }

    #[test]
    fn test_tonight_in_the_afternoon() {
        // 14:00 in Berlin, which is UTC+2 in October:
        assert_eq!(
            tonight(at(11, 12, 0), Tz::Europe__Berlin, horizon()),
            Some(Interval::new(at(11, 18, 0), at(12, 5, 0))),
        );
    }

    #[test]
    fn test_tonight_in_the_evening() {
        // 23:30 in Berlin:
        assert_eq!(
            tonight(at(11, 21, 30), Tz::Europe__Berlin, horizon()),
            Some(Interval::new(at(11, 21, 30), at(12, 5, 0))),
        );
    }

    #[test]
    fn test_tonight_after_midnight() {
        // 03:00 in Berlin:
        assert_eq!(
            tonight(at(12, 1, 0), Tz::Europe__Berlin, horizon()),
            Some(Interval::new(at(12, 1, 0), at(12, 5, 0))),
        );
    }

    #[test]
    fn test_tonight_beyond_horizon() {
        // 14:00 in Berlin on the last day, the night starts at 18:00 UTC and is clipped:
        assert_eq!(
            tonight(at(12, 12, 0), Tz::Europe__Berlin, horizon()),
            Some(Interval::new(at(12, 18, 0), at(12, 22, 0))),
        );
        let short_horizon = Interval::new(at(11, 0, 0), at(11, 15, 0));
        assert_eq!(tonight(at(11, 12, 0), Tz::Europe__Berlin, short_horizon), None);
    }
}
