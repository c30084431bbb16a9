//! GameState: the single mutable record of one match.
//!
//! Owned by exactly one screen. Only the trade executor (`trade.rs`) and the
//! tick transitions (`tick.rs`) mutate it; everything else reads the derived
//! values below.

use tracing::info;

use crate::config::GameConfig;
use crate::data::candles_for;
use crate::domain::{Candle, Timeframe};
use crate::game::speed::Speed;

/// Where the match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to start.
    Idle,
    Playing,
    /// Playing, but the clock is held and trades are blocked.
    Paused,
    /// Terminal. No further ticks or trades.
    GameOver,
}

/// State of one match.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) base_candles: Vec<Candle>,
    pub(crate) candles: Vec<Candle>,
    pub(crate) current_candle_index: usize,
    pub(crate) cash: f64,
    pub(crate) shares: u64,
    pub(crate) total_invested: f64,
    pub(crate) phase: Phase,
    pub(crate) total_trades: u32,
    pub(crate) tick_interval_ms: u64,
    pub(crate) timeframe: Timeframe,
    pub(crate) starting_cash: f64,
}

impl GameState {
    /// Fresh match over `base_candles` (finest granularity) on the 5-minute view.
    pub fn new(base_candles: Vec<Candle>, config: &GameConfig) -> Self {
        Self::with_timeframe(base_candles, config, Timeframe::FiveMin)
    }

    pub fn with_timeframe(base_candles: Vec<Candle>, config: &GameConfig, timeframe: Timeframe) -> Self {
        let candles = candles_for(&base_candles, timeframe);
        Self {
            base_candles,
            candles,
            current_candle_index: 0,
            cash: config.starting_cash,
            shares: 0,
            total_invested: 0.0,
            phase: Phase::Idle,
            total_trades: 0,
            tick_interval_ms: config.tick_interval_ms.max(1),
            timeframe,
            starting_cash: config.starting_cash,
        }
    }

    /// Idle → Playing. No effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Playing;
            info!(candles = self.candles.len(), "match started");
        }
    }

    /// Playing ⇄ Paused. No effect before start or after game over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
    }

    /// Swap the playback interval. Takes effect when the driver next syncs.
    pub fn set_speed(&mut self, speed: Speed) {
        self.tick_interval_ms = speed.interval_ms();
    }

    /// Current speed option, if the interval matches one.
    pub fn speed(&self) -> Option<Speed> {
        Speed::from_interval_ms(self.tick_interval_ms)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the match is running, paused or not.
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True when the tick clock should be running.
    pub fn is_runnable(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn base_candles(&self) -> &[Candle] {
        &self.base_candles
    }

    pub fn candle_count(&self) -> usize {
        self.candles.len()
    }

    pub fn current_candle_index(&self) -> usize {
        self.current_candle_index
    }

    pub fn current_candle(&self) -> Option<&Candle> {
        self.candles.get(self.current_candle_index)
    }

    /// Candles revealed so far, up to and including the current one.
    pub fn visible_candles(&self) -> &[Candle] {
        let end = (self.current_candle_index + 1).min(self.candles.len());
        &self.candles[..end]
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    pub fn total_invested(&self) -> f64 {
        self.total_invested
    }

    pub fn total_trades(&self) -> u32 {
        self.total_trades
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn starting_cash(&self) -> f64 {
        self.starting_cash
    }

    // ── Derived values ───────────────────────────────────────────────

    /// Execution price for trades right now; 0 if there is no current candle.
    pub fn fill_price(&self) -> f64 {
        self.current_candle().map(Candle::fill_price).unwrap_or(0.0)
    }

    /// Cash plus shares marked at the fill price.
    pub fn account_value(&self) -> f64 {
        self.cash + self.shares as f64 * self.fill_price()
    }

    pub fn profit_loss(&self) -> f64 {
        self.account_value() - self.starting_cash
    }

    pub fn profit_loss_pct(&self) -> f64 {
        if self.starting_cash > 0.0 {
            self.profit_loss() / self.starting_cash * 100.0
        } else {
            0.0
        }
    }

    /// Average cost per held share; 0 when flat.
    pub fn avg_cost(&self) -> f64 {
        if self.shares > 0 {
            self.total_invested / self.shares as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_candles(n: usize, price: f64) -> Vec<Candle> {
        (0..n)
            .map(|i| Candle {
                time: i as i64 * 300,
                open: price,
                high: price + 1.0,
                low: price - 1.0,
                close: price,
                volume: 1_000,
            })
            .collect()
    }

    #[test]
    fn fresh_state() {
        let state = GameState::new(flat_candles(10, 50.0), &GameConfig::default());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.cash(), 100_000.0);
        assert_eq!(state.shares(), 0);
        assert_eq!(state.total_trades(), 0);
        assert_eq!(state.tick_interval_ms(), 3_000);
        assert_eq!(state.speed(), Some(Speed::X2));
        assert_eq!(state.timeframe(), Timeframe::FiveMin);
        assert_eq!(state.account_value(), 100_000.0);
        assert_eq!(state.profit_loss(), 0.0);
        assert_eq!(state.avg_cost(), 0.0);
        assert_eq!(state.visible_candles().len(), 1);
    }

    #[test]
    fn start_only_from_idle() {
        let mut state = GameState::new(flat_candles(5, 50.0), &GameConfig::default());
        state.start();
        assert_eq!(state.phase(), Phase::Playing);
        state.toggle_pause();
        state.start();
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn pause_toggles_only_while_playing() {
        let mut state = GameState::new(flat_candles(5, 50.0), &GameConfig::default());
        state.toggle_pause();
        assert_eq!(state.phase(), Phase::Idle);

        state.start();
        state.toggle_pause();
        assert!(state.is_paused());
        assert!(state.is_playing());
        assert!(!state.is_runnable());
        state.toggle_pause();
        assert!(state.is_runnable());
    }

    #[test]
    fn fifteen_minute_start() {
        let state = GameState::with_timeframe(
            flat_candles(10, 50.0),
            &GameConfig::default(),
            Timeframe::FifteenMin,
        );
        assert_eq!(state.candle_count(), 4);
        assert_eq!(state.base_candles().len(), 10);
    }

    #[test]
    fn empty_sequence_has_zero_fill_price() {
        let state = GameState::new(Vec::new(), &GameConfig::default());
        assert_eq!(state.fill_price(), 0.0);
        assert!(state.current_candle().is_none());
        assert!(state.visible_candles().is_empty());
    }

    #[test]
    fn set_speed_changes_interval() {
        let mut state = GameState::new(flat_candles(5, 50.0), &GameConfig::default());
        state.set_speed(Speed::X5);
        assert_eq!(state.tick_interval_ms(), 1_000);
    }
}
