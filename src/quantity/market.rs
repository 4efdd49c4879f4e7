use std::fmt::{Display, Formatter};

use crate::quantity::{Quantity, rate::KilowattHourRate};

/// Wholesale market price in euro per megawatt-hour, as published by the exchange.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    derive_more::From,
    derive_more::FromStr,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct MarketPrice(pub f64);

impl MarketPrice {
    /// Convert €/MWh into ct/kWh, without rounding.
    pub fn to_kilowatt_hour_rate(self) -> KilowattHourRate {
        // 1 €/MWh = 100 ct / 1000 kWh:
        Quantity(self.0 / 10.0)
    }
}

impl Display for MarketPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/MWh", self.0)
    }
}
