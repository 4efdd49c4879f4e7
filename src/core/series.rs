use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{core::point::NormalizedPricePoint, ops::Interval, quantity::rate::KilowattHourRate};

/// Sorted, non-overlapping sequence of normalized price points.
///
/// Gaps between the points are allowed.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<NormalizedPricePoint>,

    /// Lowest pre-tax price, zero for an empty series.
    min_price: KilowattHourRate,

    /// Highest pre-tax price, zero for an empty series.
    max_price: KilowattHourRate,

    /// Fee added to every price by the window search.
    base_fee: KilowattHourRate,
}

impl Deref for PriceSeries {
    type Target = [NormalizedPricePoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl PriceSeries {
    /// Wrap the already sorted and de-overlapped points.
    pub(crate) fn new(points: Vec<NormalizedPricePoint>, base_fee: KilowattHourRate) -> Self {
        let (min_price, max_price) = match points.first() {
            None => (KilowattHourRate::ZERO, KilowattHourRate::ZERO),
            Some(first) => points.iter().fold((first.price, first.price), |(min, max), point| {
                (min.min(point.price), max.max(point.price))
            }),
        };
        Self { points, min_price, max_price, base_fee }
    }

    pub const fn min_price(&self) -> KilowattHourRate {
        self.min_price
    }

    pub const fn max_price(&self) -> KilowattHourRate {
        self.max_price
    }

    pub const fn base_fee(&self) -> KilowattHourRate {
        self.base_fee
    }

    /// Total span from the first start till the last end, gaps included.
    #[must_use]
    pub fn horizon(&self) -> Option<Interval> {
        let (first, last) = (self.points.first()?, self.points.last()?);
        Some(Interval::new(first.start_time, last.end_time))
    }

    /// Get the point, which is in effect at the moment.
    #[must_use]
    pub fn current(&self, now: DateTime<Utc>) -> Option<&NormalizedPricePoint> {
        self.points.iter().find(|point| point.interval().contains(now))
    }

    /// Effective rate of the point: the selected price plus the base fee.
    pub fn rate(&self, point: &NormalizedPricePoint, include_tax: bool) -> KilowattHourRate {
        point.price(include_tax) + self.base_fee
    }

    /// Get the cheapest point, the earliest one on a tie.
    #[must_use]
    pub fn cheapest(&self, include_tax: bool) -> Option<&NormalizedPricePoint> {
        self.points.iter().reduce(|cheapest, point| {
            if point.price(include_tax) < cheapest.price(include_tax) { point } else { cheapest }
        })
    }

    /// Iterate over the points priced at or below the threshold.
    pub fn below(
        &self,
        threshold: KilowattHourRate,
        include_tax: bool,
    ) -> impl Iterator<Item = &NormalizedPricePoint> {
        self.points.iter().filter(move |point| point.price(include_tax) <= threshold)
    }
}
