use bon::Builder;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use chrono_tz::Tz;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::{
    core::{
        point::{NormalizedPricePoint, PricePoint, RawPricePoint},
        region::Region,
        series::PriceSeries,
    },
    error::{Error, Result},
    quantity::rate::KilowattHourRate,
};

/// Largest accepted tax multiplier.
pub const MAX_TAX_MULTIPLIER: f64 = 10.0;

/// Largest accepted base fee magnitude in cents per kilowatt-hour.
pub const MAX_BASE_FEE: f64 = 1e9;

/// Turns raw market prices into a [`PriceSeries`].
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Normalizer {
    /// Value-added tax as a multiplier, for example `1.19`.
    tax_multiplier: f64,

    /// Time zone in which the current hour starts.
    time_zone: Tz,

    /// Flat fee per kilowatt-hour charged on top of the market price.
    #[builder(default)]
    base_fee: KilowattHourRate,
}

impl Normalizer {
    pub fn for_region(region: Region) -> Self {
        Self::builder().tax_multiplier(region.tax_multiplier()).time_zone(region.time_zone()).build()
    }

    /// Normalize the raw points as of `now`.
    ///
    /// The points may come in any order. Points which ended before the current hour started
    /// are dropped.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfiguration`] on a tax multiplier or base fee out of the bounds.
    /// - [`Error::DataFormat`] on a missing or malformed field, or overlapping points.
    /// - [`Error::EmptySeries`] when no point is left.
    #[instrument(skip_all, fields(n_points = raw.len(), now = %now))]
    pub fn normalize(&self, raw: &[RawPricePoint], now: DateTime<Utc>) -> Result<PriceSeries> {
        self.validate()?;

        let mut points: Vec<(usize, PricePoint)> = raw
            .iter()
            .enumerate()
            .map(|(index, raw)| Ok((index, PricePoint::try_from_raw(index, raw)?)))
            .collect::<Result<_>>()?;
        points.sort_by_key(|(_, point)| point.interval.start);

        if let Some((_, (index, _))) = points
            .iter()
            .tuple_windows()
            .find(|((_, previous), (_, next))| previous.interval.end > next.interval.start)
        {
            return Err(Error::DataFormat {
                index: *index,
                field: "start_timestamp",
                reason: "overlaps with another point",
            });
        }

        let since = start_of_hour(now, self.time_zone);
        let n_points = points.len();
        points.retain(|(_, point)| point.interval.end > since);
        debug!(%since, n_stale = n_points - points.len(), "dropped stale points");

        if points.is_empty() {
            return Err(Error::EmptySeries);
        }
        let series = PriceSeries::new(
            points
                .into_iter()
                .map(|(_, point)| NormalizedPricePoint::from_price_point(point, self.tax_multiplier))
                .collect(),
            self.base_fee.round_to_hundredths(),
        );
        info!(
            len = series.len(),
            min_price = %series.min_price(),
            max_price = %series.max_price(),
            "normalized",
        );
        Ok(series)
    }

    fn validate(&self) -> Result {
        if !(self.tax_multiplier > 0.0 && self.tax_multiplier <= MAX_TAX_MULTIPLIER) {
            return Err(Error::InvalidConfiguration {
                field: "tax_multiplier",
                reason: "must be a positive number not exceeding 10",
            });
        }
        if !(-MAX_BASE_FEE..=MAX_BASE_FEE).contains(&self.base_fee.0) {
            return Err(Error::InvalidConfiguration {
                field: "base_fee",
                reason: "must be a finite number not exceeding 1e9 in magnitude",
            });
        }
        Ok(())
    }
}

/// Truncate the moment to the start of its hour in the time zone.
#[must_use]
pub fn start_of_hour(now: DateTime<Utc>, time_zone: Tz) -> DateTime<Utc> {
    now.with_timezone(&time_zone)
        .duration_trunc(TimeDelta::hours(1))
        .map_or(now, |start| start.with_timezone(&Utc))
}
