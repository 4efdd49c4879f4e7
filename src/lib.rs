//! Day-ahead electricity prices: normalization into consumer units and the cheapest usage window.

pub mod core;
pub mod error;
pub mod ops;
pub mod quantity;

pub use crate::error::{Error, InvalidUsageRequest, Result};
