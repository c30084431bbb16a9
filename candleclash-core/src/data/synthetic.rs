//! Synthetic 5-minute session generator.
//!
//! Stands in for a real market data pull: a random walk that starts at the
//! US cash open (14:30 UTC) and steps one candle every five minutes.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;

use crate::data::Dataset;
use crate::domain::Candle;

/// Seconds between consecutive base candles.
pub const BASE_INTERVAL_SECS: i64 = 300;

/// Parameters for a generated session.
#[derive(Debug, Clone)]
pub struct SyntheticSpec {
    pub ticker: String,
    pub date: NaiveDate,
    pub count: usize,
}

impl SyntheticSpec {
    pub fn new(ticker: impl Into<String>, date: NaiveDate, count: usize) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            count,
        }
    }
}

/// Generate a dataset from `spec` using `rng`.
///
/// The walk drifts slightly upward: each step is `(u - 0.48) * 0.5` for
/// uniform `u`. Wicks extend up to 0.2 beyond the body.
pub fn generate<R: Rng + ?Sized>(spec: &SyntheticSpec, rng: &mut R) -> Dataset {
    let open_time = NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default();
    let base_time = spec.date.and_time(open_time).and_utc().timestamp();
    let mut price = 95.0 + rng.gen::<f64>() * 10.0;

    let candles = (0..spec.count)
        .map(|i| {
            let change = (rng.gen::<f64>() - 0.48) * 0.5;
            let open = price;
            price += change;
            let high = open.max(price) + rng.gen::<f64>() * 0.2;
            let low = open.min(price) - rng.gen::<f64>() * 0.2;
            Candle {
                time: base_time + i as i64 * BASE_INTERVAL_SECS,
                open,
                high,
                low,
                close: price,
                volume: rng.gen_range(1_000_000..3_000_000),
            }
        })
        .collect();

    Dataset {
        ticker: spec.ticker.clone(),
        date: spec.date.format("%Y-%m-%d").to_string(),
        timeframe: "5m".into(),
        candles,
    }
}
