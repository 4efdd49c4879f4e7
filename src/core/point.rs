use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::{
    error::{Error, Result},
    ops::Interval,
    quantity::{market::MarketPrice, rate::KilowattHourRate},
};

/// Largest accepted market price magnitude in €/MWh.
///
/// Real day-ahead prices are capped at a few thousand euro, this only keeps the window costs
/// within the integer range of the finder.
pub const MAX_MARKET_PRICE: f64 = 1e9;

/// Price point as it comes over the wire.
///
/// All fields are optional here, so that a missing one is reported by name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPricePoint {
    /// Epoch seconds, inclusive.
    #[serde(default)]
    pub start_timestamp: Option<i64>,

    /// Epoch seconds, exclusive.
    #[serde(default)]
    pub end_timestamp: Option<i64>,

    /// Euro per megawatt-hour.
    #[serde(default)]
    pub marketprice: Option<f64>,
}

impl RawPricePoint {
    pub const fn new(start_timestamp: i64, end_timestamp: i64, marketprice: f64) -> Self {
        Self {
            start_timestamp: Some(start_timestamp),
            end_timestamp: Some(end_timestamp),
            marketprice: Some(marketprice),
        }
    }
}

/// Validated market price over an interval.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PricePoint {
    pub interval: Interval,
    pub market_price: MarketPrice,
}

impl PricePoint {
    /// Validate the raw point, `index` is only used to point at the culprit.
    pub fn try_from_raw(index: usize, raw: &RawPricePoint) -> Result<Self> {
        let start = parse_timestamp(index, "start_timestamp", raw.start_timestamp)?;
        let end = parse_timestamp(index, "end_timestamp", raw.end_timestamp)?;
        if end <= start {
            return Err(Error::DataFormat {
                index,
                field: "end_timestamp",
                reason: "is not after the start timestamp",
            });
        }
        let market_price = match raw.marketprice {
            None => {
                return Err(Error::DataFormat { index, field: "marketprice", reason: "is missing" });
            }
            Some(value) if !value.is_finite() => {
                return Err(Error::DataFormat {
                    index,
                    field: "marketprice",
                    reason: "is not a finite number",
                });
            }
            Some(value) if value.abs() > MAX_MARKET_PRICE => {
                return Err(Error::DataFormat {
                    index,
                    field: "marketprice",
                    reason: "is out of range",
                });
            }
            Some(value) => MarketPrice(value),
        };
        Ok(Self { interval: Interval::new(start, end), market_price })
    }
}

fn parse_timestamp(
    index: usize,
    field: &'static str,
    timestamp: Option<i64>,
) -> Result<DateTime<Utc>> {
    let timestamp = timestamp.ok_or(Error::DataFormat { index, field, reason: "is missing" })?;
    DateTime::from_timestamp(timestamp, 0).ok_or(Error::DataFormat {
        index,
        field,
        reason: "is out of the representable range",
    })
}

/// Price point converted into consumer units.
#[serde_as]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedPricePoint {
    /// Inclusive.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub start_time: DateTime<Utc>,

    /// Exclusive.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub end_time: DateTime<Utc>,

    /// Pre-tax price, rounded to hundredths.
    pub price: KilowattHourRate,

    /// Price multiplied by the tax factor, rounded to hundredths.
    pub price_with_tax: KilowattHourRate,
}

impl NormalizedPricePoint {
    pub fn from_price_point(point: PricePoint, tax_multiplier: f64) -> Self {
        let price = point.market_price.to_kilowatt_hour_rate().round_to_hundredths();
        Self {
            start_time: point.interval.start,
            end_time: point.interval.end,
            price,
            price_with_tax: (price * tax_multiplier).round_to_hundredths(),
        }
    }

    pub const fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    /// Pick the price according to the tax preference.
    #[must_use]
    pub const fn price(&self, include_tax: bool) -> KilowattHourRate {
        if include_tax { self.price_with_tax } else { self.price }
    }
}
