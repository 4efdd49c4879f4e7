pub mod finder;
pub mod normalizer;
pub mod point;
pub mod region;
pub mod search_range;
pub mod series;
pub mod usage;
pub mod window;
pub mod wire;

pub use self::{
    finder::Finder,
    normalizer::Normalizer,
    point::{NormalizedPricePoint, PricePoint, RawPricePoint},
    region::Region,
    series::PriceSeries,
    usage::{Usage, UsageRequest},
    window::HourWindow,
    wire::Payload,
};
