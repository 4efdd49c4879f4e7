mod cheapest;
mod input;
mod prices;

use clap::{Parser, Subcommand};

pub use self::{cheapest::CheapestArgs, input::InputArgs, prices::PricesArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize the prices and print them.
    #[clap(name = "prices")]
    Prices(Box<PricesArgs>),

    /// Find the cheapest window to run an appliance.
    #[clap(name = "cheapest")]
    Cheapest(Box<CheapestArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_cheapest_energy() -> Result<(), clap::Error> {
        let args = Args::try_parse_from([
            "spotwindow",
            "cheapest",
            "--energy",
            "2",
            "--power",
            "0.5",
            "--tonight",
            "prices.json",
        ])?;
        assert!(matches!(args.command, Command::Cheapest(_)));
        Ok(())
    }

    #[test]
    fn test_duration_conflicts_with_energy() {
        let result = Args::try_parse_from([
            "spotwindow",
            "cheapest",
            "--duration",
            "3h",
            "--energy",
            "2",
            "--power",
            "0.5",
        ]);
        assert!(result.is_err());
    }
}
