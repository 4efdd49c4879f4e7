use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use clap::Parser;
use spotwindow::{
    core::{Normalizer, Payload, PriceSeries, Region},
    quantity::rate::KilowattHourRate,
};

use crate::prelude::*;

/// Where the prices come from and how to normalize them.
#[derive(Parser)]
pub struct InputArgs {
    /// JSON price payload, `-` reads the standard input.
    #[clap(default_value = "-")]
    pub input: PathBuf,

    /// Market region, which provides the default tax and time zone.
    #[clap(long, env = "SPOTWINDOW_REGION", default_value = "de")]
    pub region: Region,

    /// Value-added tax multiplier, overrides the region default.
    #[clap(long, env = "SPOTWINDOW_TAX_MULTIPLIER")]
    pub tax_multiplier: Option<f64>,

    /// Time zone of the market hours, overrides the region default.
    #[clap(long, env = "SPOTWINDOW_TIME_ZONE")]
    pub time_zone: Option<Tz>,

    /// Flat fee in cents per kilowatt-hour on top of every price.
    #[clap(long = "base-fee", env = "SPOTWINDOW_BASE_FEE", default_value = "0")]
    pub base_fee: KilowattHourRate,

    /// Override the current time, for example: `2025-10-11T14:00:00Z`.
    #[clap(long)]
    pub now: Option<DateTime<Utc>>,
}

impl InputArgs {
    /// Current time truncated to whole seconds, or the override.
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(|| {
            let now = Utc::now();
            now.with_nanosecond(0).unwrap_or(now)
        })
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone.unwrap_or_else(|| self.region.time_zone())
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::builder()
            .tax_multiplier(self.tax_multiplier.unwrap_or_else(|| self.region.tax_multiplier()))
            .time_zone(self.time_zone())
            .base_fee(self.base_fee)
            .build()
    }

    /// Read the payload and normalize it.
    #[instrument(skip_all, fields(input = %self.input.display()))]
    pub fn load(&self) -> Result<PriceSeries> {
        let payload = self.read()?;
        let payload: Payload =
            serde_json::from_str(&payload).context("failed to parse the price payload")?;
        let points = payload.into_points();
        info!(len = points.len(), "loaded");
        self.normalizer().normalize(&points, self.now()).context("failed to normalize the prices")
    }

    fn read(&self) -> Result<String> {
        if self.input.as_os_str() == "-" {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload).context("failed to read the standard input")?;
            Ok(payload)
        } else {
            fs::read_to_string(&self.input)
                .with_context(|| format!("failed to read `{}`", self.input.display()))
        }
    }
}
