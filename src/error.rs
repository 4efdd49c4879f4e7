use chrono::TimeDelta;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or non-finite input data.
    #[error("malformed price data: `{field}` of point #{index} {reason}")]
    DataFormat { index: usize, field: &'static str, reason: &'static str },

    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration { field: &'static str, reason: &'static str },

    /// No usable price points.
    #[error("no price data available")]
    EmptySeries,

    /// The requested usage does not fit into the covered part of the search range.
    #[error(
        "the usage needs {}, but only {} of contiguous price data is available in the range",
        FormattedDuration(*.required),
        FormattedDuration(*.available),
    )]
    InsufficientRange { required: TimeDelta, available: TimeDelta },

    #[error("invalid usage request: {0}")]
    InvalidUsageRequest(#[from] InvalidUsageRequest),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InvalidUsageRequest {
    #[error("the duration must be positive")]
    NonPositiveDuration,

    #[error("the energy must be positive")]
    NonPositiveEnergy,

    #[error("the power must be positive")]
    NonPositivePower,

    #[error("the duration is too large")]
    DurationOutOfRange,

    #[error("the search range must end after it starts")]
    EmptySearchRange,

    #[error("the duration exceeds the search range")]
    DurationExceedsSearchRange,
}

/// Displays a duration as `1h 30m 15s`, omitting zero components.
pub struct FormattedDuration(pub TimeDelta);

impl std::fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.0.num_seconds();
        if total == 0 {
            return write!(f, "0s");
        }
        if total < 0 {
            write!(f, "-")?;
        }
        let total = total.unsigned_abs();
        let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);
        let mut separator = "";
        for (value, unit) in [(hours, "h"), (minutes, "m"), (seconds, "s")] {
            if value != 0 {
                write!(f, "{separator}{value}{unit}")?;
                separator = " ";
            }
        }
        Ok(())
    }
}
