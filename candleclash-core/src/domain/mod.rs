//! Domain types for Candle Clash

pub mod candle;
pub mod timeframe;

pub use candle::{price_range, Candle};
pub use timeframe::{Timeframe, AGGREGATION_FACTOR};
