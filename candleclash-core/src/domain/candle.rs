//! Candle: the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// OHLCV candle for one fixed interval.
///
/// `time` is the interval start in epoch seconds. Prices are taken as given;
/// the game never checks them for financial plausibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    /// Price a trade executes at while this candle is current.
    ///
    /// The close is used when it is a usable price, otherwise the open.
    pub fn fill_price(&self) -> f64 {
        if usable(self.close) {
            self.close
        } else {
            self.open
        }
    }

    /// True when the candle closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Lowest low and highest high across `candles`.
pub fn price_range(candles: &[Candle]) -> Option<(f64, f64)> {
    if candles.is_empty() {
        return None;
    }
    let low = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let high = candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    Some((low, high))
}

fn usable(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
