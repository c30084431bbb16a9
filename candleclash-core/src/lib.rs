//! Candle Clash core: the single-player candle trading game without a UI.
//!
//! - Candles and timeframes
//! - Dataset loading, 5m → 15m aggregation, synthetic sessions
//! - Game state, trade executor, tick transitions
//! - Tick driver (explicit scheduler for a single-threaded run loop)
//! - TOML game config

pub mod config;
pub mod data;
pub mod domain;
pub mod game;

pub use config::{ConfigError, GameConfig};
pub use data::{DataError, Dataset};
pub use domain::{Candle, Timeframe};
pub use game::{GameResult, GameState, Phase, SellAmount, Speed, TickDriver, TickOutcome};
