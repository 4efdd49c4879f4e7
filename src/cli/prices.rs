use clap::Parser;
use itertools::Itertools;
use spotwindow::quantity::rate::KilowattHourRate;

use crate::{cli::InputArgs, prelude::*, tables::build_series_table};

#[derive(Parser)]
pub struct PricesArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Show the prices with the value-added tax.
    #[clap(long, env = "SPOTWINDOW_INCLUDE_TAX")]
    include_tax: bool,

    /// Only show the prices at or below the threshold, in cents per kilowatt-hour.
    #[clap(long)]
    below: Option<KilowattHourRate>,

    /// Print JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl PricesArgs {
    pub fn run(&self) -> Result {
        let series = self.input.load()?;
        let time_zone = self.input.time_zone();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&series)?);
            return Ok(());
        }

        let points = match self.below {
            Some(threshold) => {
                let points = series.below(threshold, self.include_tax).copied().collect_vec();
                info!(%threshold, len = points.len(), "filtered");
                points
            }
            None => series.to_vec(),
        };
        println!("{}", build_series_table(&series, &points, self.include_tax, time_zone));
        if let Some(current) = series.current(self.input.now()) {
            info!(price = %series.rate(current, self.include_tax), "current");
        }
        Ok(())
    }
}
