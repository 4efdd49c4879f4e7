use chrono_tz::Tz;

#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
pub enum Region {
    /// Germany.
    #[serde(rename = "DE")]
    #[value(name = "de")]
    Germany,

    /// Austria.
    #[serde(rename = "AT")]
    #[value(name = "at")]
    Austria,
}

impl Region {
    /// Value-added tax as a multiplier.
    #[must_use]
    pub const fn tax_multiplier(self) -> f64 {
        match self {
            Self::Germany => 1.19,
            Self::Austria => 1.20,
        }
    }

    /// Time zone the market day is defined in.
    #[must_use]
    pub const fn time_zone(self) -> Tz {
        match self {
            Self::Germany => Tz::Europe__Berlin,
            Self::Austria => Tz::Europe__Vienna,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::from_str::<Region>(r#""AT""#)?, Region::Austria);
        Ok(())
    }

    #[test]
    fn test_time_zone_names() {
        assert_eq!(Region::Germany.time_zone().name(), "Europe/Berlin");
        assert_eq!(Region::Austria.time_zone().name(), "Europe/Vienna");
    }
}
