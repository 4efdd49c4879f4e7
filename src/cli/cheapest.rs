use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use clap::{ArgGroup, Parser};
use spotwindow::{
    core::{Finder, Usage, UsageRequest, search_range},
    error::FormattedDuration,
    ops::Interval,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

use crate::{cli::InputArgs, prelude::*, tables::build_window_table};

#[derive(Parser)]
#[command(group(ArgGroup::new("usage").required(true).args(["duration", "energy"])))]
pub struct CheapestArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Compare the prices with the value-added tax.
    #[clap(long, env = "SPOTWINDOW_INCLUDE_TAX")]
    include_tax: bool,

    /// Run time, for example: `3h 30m`.
    #[clap(long)]
    duration: Option<humantime::Duration>,

    /// Energy to consume, in kilowatt-hours.
    #[clap(long, requires = "power")]
    energy: Option<KilowattHours>,

    /// Constant power draw, in kilowatts.
    #[clap(long)]
    power: Option<Kilowatts>,

    /// Search range start, for example: `2025-10-11T20:00:00+02:00`.
    #[clap(long, requires = "to", conflicts_with_all = ["tonight", "next_hours"])]
    from: Option<DateTime<Utc>>,

    /// Search range end.
    #[clap(long, requires = "from")]
    to: Option<DateTime<Utc>>,

    /// Search tonight from 20:00 till 07:00.
    #[clap(long, conflicts_with = "next_hours")]
    tonight: bool,

    /// Search the next hours from now.
    #[clap(long)]
    next_hours: Option<u32>,

    /// Print JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl CheapestArgs {
    pub fn run(&self) -> Result {
        let series = self.input.load()?;
        let now = self.input.now();
        let time_zone = self.input.time_zone();

        let horizon = series.horizon().context("the price series is empty")?;
        let request = UsageRequest {
            usage: self.usage()?,
            search_range: self.search_range(now, time_zone, horizon)?,
        };
        let finder = Finder::builder().series(&series).include_tax(self.include_tax).build();
        let window = finder.find(&request).context("failed to find the cheapest window")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&window)?);
            return Ok(());
        }

        println!("{}", build_window_table(&window, &series, self.include_tax, time_zone));
        info!(
            start = %window.window_start.with_timezone(&time_zone),
            end = %window.window_end.with_timezone(&time_zone),
            duration = %FormattedDuration(window.duration()),
            total_cost = %window.total_cost,
            average_rate = %window.average_rate(),
            "cheapest",
        );
        if let Some(power) = self.power {
            info!(energy = %window.energy(power), cost = %window.energy_cost(power), %power, "estimated");
        }
        let start = request.search_range.start;
        if let Some(end) = start.checked_add_signed(window.duration())
            && let Some(cost) = finder.cost_of(Interval::new(start, end))
            && cost > window.total_cost
        {
            info!(savings = %(cost - window.total_cost), "compared to starting right away");
        }
        Ok(())
    }

    fn usage(&self) -> Result<Usage> {
        if let Some(duration) = &self.duration {
            return Ok(Usage::Duration(TimeDelta::from_std(**duration)?));
        }
        match (self.energy, self.power) {
            (Some(energy), Some(power)) => Ok(Usage::Energy { energy, power }),
            _ => bail!("either `--duration`, or `--energy` with `--power` is required"),
        }
    }

    fn search_range(
        &self,
        now: DateTime<Utc>,
        time_zone: Tz,
        horizon: Interval,
    ) -> Result<Interval> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            return Ok(Interval::new(from, to));
        }
        let search_range = if self.tonight {
            search_range::tonight(now, time_zone, horizon)
        } else if let Some(hours) = self.next_hours {
            search_range::next_hours(now, TimeDelta::hours(hours.into()), horizon)
        } else {
            search_range::until_horizon_end(now, horizon)
        };
        let search_range =
            search_range.context("the search range does not overlap with the price data")?;
        debug!(?search_range, "selected");
        Ok(search_range)
    }
}
