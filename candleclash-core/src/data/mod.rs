//! Candle datasets: loading, aggregation, synthetic generation

pub mod aggregate;
pub mod dataset;
pub mod synthetic;

pub use aggregate::{aggregate, candles_for};
pub use dataset::{DataError, Dataset};
pub use synthetic::{generate, SyntheticSpec};
