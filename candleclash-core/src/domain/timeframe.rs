//! Display granularity of the candle sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of base candles folded into one candle of the coarser timeframe.
pub const AGGREGATION_FACTOR: usize = 3;

/// Which candle view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "5min")]
    FiveMin,
    #[serde(rename = "15min")]
    FifteenMin,
}

impl Timeframe {
    pub const ALL: [Timeframe; 2] = [Timeframe::FiveMin, Timeframe::FifteenMin];

    /// Short label for controls (`5m`, `15m`).
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::FiveMin => "5m",
            Timeframe::FifteenMin => "15m",
        }
    }

    /// How many base candles make up one candle of this timeframe.
    pub fn group_size(self) -> usize {
        match self {
            Timeframe::FiveMin => 1,
            Timeframe::FifteenMin => AGGREGATION_FACTOR,
        }
    }

    pub fn toggle(self) -> Timeframe {
        match self {
            Timeframe::FiveMin => Timeframe::FifteenMin,
            Timeframe::FifteenMin => Timeframe::FiveMin,
        }
    }

    /// Map a candle index in `self` to the matching index in `to`.
    ///
    /// Not clamped; callers clamp against the target sequence length.
    pub fn remap_index(self, index: usize, to: Timeframe) -> usize {
        match (self, to) {
            (Timeframe::FiveMin, Timeframe::FifteenMin) => index / AGGREGATION_FACTOR,
            (Timeframe::FifteenMin, Timeframe::FiveMin) => index * AGGREGATION_FACTOR,
            _ => index,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::FiveMin => write!(f, "5min"),
            Timeframe::FifteenMin => write!(f, "15min"),
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5m" | "5min" => Ok(Timeframe::FiveMin),
            "15m" | "15min" => Ok(Timeframe::FifteenMin),
            other => Err(format!("unknown timeframe '{other}' (expected 5min or 15min)")),
        }
    }
}
