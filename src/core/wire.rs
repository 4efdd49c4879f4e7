//! Envelopes of the price payload on the input boundary.

use serde::Deserialize;

use crate::core::point::RawPricePoint;

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// Bare array of points.
    Bare(Vec<RawPricePoint>),

    /// Shape served by the price backend.
    Prices { prices: Vec<RawPricePoint> },

    /// Shape served by the day-ahead market API.
    Data { data: Vec<RawPricePoint> },
}

impl Payload {
    #[must_use]
    pub fn into_points(self) -> Vec<RawPricePoint> {
        match self {
            Self::Bare(points) | Self::Prices { prices: points } | Self::Data { data: points } => {
                points
            }
        }
    }
}
