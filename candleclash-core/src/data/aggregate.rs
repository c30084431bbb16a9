//! Candle aggregation: fold consecutive base candles into coarser ones.

use crate::domain::{Candle, Timeframe};

/// Group `candles` into consecutive chunks of `group` and fold each chunk.
///
/// open = first open, close = last close, high = max high, low = min low,
/// volume = sum, time = first time. A trailing partial chunk is folded the
/// same way. `group` of 0 or 1 returns the input unchanged.
pub fn aggregate(candles: &[Candle], group: usize) -> Vec<Candle> {
    if group <= 1 {
        return candles.to_vec();
    }
    candles.chunks(group).filter_map(fold_chunk).collect()
}

/// The candle sequence for `timeframe`, derived from the 5-minute base.
pub fn candles_for(base: &[Candle], timeframe: Timeframe) -> Vec<Candle> {
    aggregate(base, timeframe.group_size())
}

fn fold_chunk(chunk: &[Candle]) -> Option<Candle> {
    let first = chunk.first()?;
    let last = chunk.last()?;
    Some(Candle {
        time: first.time,
        open: first.open,
        high: chunk.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max),
        low: chunk.iter().map(|c| c.low).fold(f64::INFINITY, f64::min),
        close: last.close,
        volume: chunk.iter().map(|c| c.volume).sum(),
    })
}
