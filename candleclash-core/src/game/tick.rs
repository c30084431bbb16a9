//! Tick transitions: candle advancement, end of game, timeframe switching.

use tracing::{debug, info};

use crate::data::candles_for;
use crate::domain::Timeframe;
use crate::game::state::{GameState, Phase};

/// Final numbers handed to the results screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    pub final_value: f64,
    /// `final_value - starting_cash`.
    pub profit_loss: f64,
    pub total_trades: u32,
}

impl GameResult {
    pub fn is_win(&self) -> bool {
        self.profit_loss > 0.0
    }
}

/// What one timer fire did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The match is not running; nothing changed.
    Idle,
    /// Moved to `index`. `mark_value` is the account valued at that candle's open.
    Advanced { index: usize, mark_value: f64 },
    /// The match ended on this tick.
    Finished(GameResult),
}

/// A completed timeframe change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeSwitch {
    pub from: Timeframe,
    pub to: Timeframe,
    pub index: usize,
}

impl GameState {
    /// Advance one candle. Only acts while `Playing`.
    ///
    /// Reaching the last candle ends the match and values it at that
    /// candle's close. With no next candle at all, the match ends at the
    /// current fill price.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Idle;
        }

        let next_index = self.current_candle_index + 1;
        let Some(next) = self.candles.get(next_index).copied() else {
            self.phase = Phase::GameOver;
            let result = self.result_at(self.fill_price());
            info!(?result, "match over: no candles left");
            return TickOutcome::Finished(result);
        };

        self.current_candle_index = next_index;
        if next_index + 1 >= self.candles.len() {
            self.phase = Phase::GameOver;
            let result = self.result_at(next.close);
            info!(?result, "match over");
            return TickOutcome::Finished(result);
        }

        let mark_value = self.cash + self.shares as f64 * next.open;
        debug!(index = next_index, mark_value, "tick");
        TickOutcome::Advanced {
            index: next_index,
            mark_value,
        }
    }

    /// Switch the active candle view, keeping position and trades.
    ///
    /// The index is rescaled by the aggregation factor and clamped. Returns
    /// `None` when the match is over or `to` is already active.
    pub fn switch_timeframe(&mut self, to: Timeframe) -> Option<TimeframeSwitch> {
        if self.is_game_over() || to == self.timeframe {
            return None;
        }
        let from = self.timeframe;
        let candles = candles_for(&self.base_candles, to);
        let mapped = from.remap_index(self.current_candle_index, to);
        let index = mapped.min(candles.len().saturating_sub(1));

        self.candles = candles;
        self.current_candle_index = index;
        self.timeframe = to;
        info!(%from, %to, index, "timeframe switched");

        Some(TimeframeSwitch { from, to, index })
    }

    fn result_at(&self, price: f64) -> GameResult {
        let final_value = self.cash + self.shares as f64 * price;
        GameResult {
            final_value,
            profit_loss: final_value - self.starting_cash,
            total_trades: self.total_trades,
        }
    }
}
