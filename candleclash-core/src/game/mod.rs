//! The match: state, trade executor, tick transitions and scheduler.

pub mod driver;
pub mod speed;
pub mod state;
pub mod tick;
pub mod trade;

pub use driver::TickDriver;
pub use speed::Speed;
pub use state::{GameState, Phase};
pub use tick::{GameResult, TickOutcome, TimeframeSwitch};
pub use trade::{dollar_label, SellAmount, TradeReceipt, TradeSide, BUY_AMOUNTS, SELL_AMOUNTS};

/// Cash every match starts with.
pub const STARTING_CASH: f64 = 100_000.0;

/// Default playback interval.
pub const TICK_INTERVAL_MS: u64 = 3_000;
