use std::collections::BTreeSet;

use bon::Builder;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, instrument};

use crate::{
    core::{series::PriceSeries, usage::UsageRequest, window::HourWindow},
    error::{Error, Result},
    ops::Interval,
    quantity::cost::KilowattCost,
};

/// Hundredths of a cent per kilowatt-hour, times nanoseconds, in a cent per kilowatt.
const UNITS_PER_KILOWATT_CENT: f64 = 100.0 * 3_600_000_000_000.0;

/// Searches the series for the cheapest window of the requested usage.
#[must_use]
#[derive(Builder)]
pub struct Finder<'a> {
    series: &'a PriceSeries,

    /// Compare the prices with the value-added tax.
    #[builder(default)]
    include_tax: bool,
}

impl Finder<'_> {
    /// Find the cheapest window, the earliest one among equally cheap windows.
    ///
    /// The window may start and end in the middle of a price point, but it never spans a gap
    /// in the price data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUsageRequest`] when the request does not make sense.
    /// - [`Error::EmptySeries`] when there is no price data at all.
    /// - [`Error::InsufficientRange`] when no contiguous data in the search range is long enough.
    #[instrument(
        skip_all,
        fields(usage = ?request.usage, search_range = ?request.search_range, include_tax = self.include_tax),
    )]
    pub fn find(&self, request: &UsageRequest) -> Result<HourWindow> {
        let duration = request.validate()?;
        if self.series.is_empty() {
            return Err(Error::EmptySeries);
        }

        let runs = self.runs(request.search_range);
        let mut best: Option<(DateTime<Utc>, i128)> = None;
        let mut n_candidates = 0_usize;
        for run in runs.iter().filter(|run| run.len() >= duration) {
            for start in self.candidates(*run, duration) {
                n_candidates += 1;
                let Some(cost) = self.exact_cost(Interval::new(start, start + duration)) else {
                    continue;
                };
                if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                    best = Some((start, cost));
                }
            }
        }
        debug!(n_runs = runs.len(), n_candidates, "evaluated");

        let Some((window_start, cost)) = best else {
            let available = runs.iter().map(|run| run.len()).max().unwrap_or_else(TimeDelta::zero);
            return Err(Error::InsufficientRange { required: duration, available });
        };
        let interval = Interval::new(window_start, window_start + duration);
        let window = HourWindow {
            associated_price_points: self
                .series
                .iter()
                .filter(|point| point.interval().intersection(interval).is_some())
                .copied()
                .collect(),
            window_start: interval.start,
            window_end: interval.end,
            total_cost: to_kilowatt_cost(cost),
        };
        info!(
            window_start = %window.window_start,
            window_end = %window.window_end,
            total_cost = %window.total_cost,
            "found",
        );
        Ok(window)
    }

    /// Price an arbitrary window.
    ///
    /// Returns [`None`] when any part of the window is not covered by the price data.
    #[must_use]
    pub fn cost_of(&self, window: Interval) -> Option<KilowattCost> {
        self.exact_cost(window).map(to_kilowatt_cost)
    }

    /// Split the covered part of the search range into contiguous runs.
    fn runs(&self, search_range: Interval) -> Vec<Interval> {
        let mut runs: Vec<Interval> = Vec::new();
        for clipped in
            self.series.iter().filter_map(|point| point.interval().intersection(search_range))
        {
            match runs.last_mut() {
                Some(run) if run.end == clipped.start => run.end = clipped.end,
                _ => runs.push(clipped),
            }
        }
        runs
    }

    /// Window starts where the cost, as a function of the start, may bend.
    ///
    /// The cost is linear between the moments where either window edge crosses a price boundary,
    /// so the minimum is always among these.
    fn candidates(&self, run: Interval, duration: TimeDelta) -> BTreeSet<DateTime<Utc>> {
        let latest = run.end - duration;
        let mut candidates = BTreeSet::from([run.start, latest]);
        for point in self.series.iter() {
            for boundary in [point.start_time, point.end_time] {
                let starts = [Some(boundary), boundary.checked_sub_signed(duration)];
                for start in starts.into_iter().flatten() {
                    if run.start <= start && start <= latest {
                        candidates.insert(start);
                    }
                }
            }
        }
        candidates
    }

    /// Sum of the rates in hundredths of a cent multiplied by the overlaps in nanoseconds.
    ///
    /// Integer arithmetic makes equally priced windows compare exactly equal. The normalizer bounds
    /// the prices, tax and fee, so that the sum stays far below the `i128` limit.
    fn exact_cost(&self, window: Interval) -> Option<i128> {
        let mut covered_until = window.start;
        let mut cost = 0_i128;
        for point in self.series.iter() {
            let Some(overlap) = point.interval().intersection(window) else {
                continue;
            };
            if overlap.start != covered_until {
                return None;
            }
            covered_until = overlap.end;

            #[expect(clippy::cast_possible_truncation)]
            let rate = (self.series.rate(point, self.include_tax).0 * 100.0).round() as i128;
            cost += rate * i128::from(overlap.len().num_nanoseconds()?);
        }
        (covered_until == window.end).then_some(cost)
    }
}

#[expect(clippy::cast_precision_loss)]
fn to_kilowatt_cost(cost: i128) -> KilowattCost {
    KilowattCost::from(cost as f64 / UNITS_PER_KILOWATT_CENT)
}
