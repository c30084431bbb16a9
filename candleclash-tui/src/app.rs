//! Application state: single-owner, main-thread only.
//!
//! The run loop calls [`AppState::on_frame`] once per iteration and routes
//! key presses through `input::handle_key`. Both take the current instant,
//! so every timer in here is driven from the outside.

use std::time::{Duration, Instant};

use tracing::info;

use candleclash_core::game::{SellAmount, TradeReceipt, BUY_AMOUNTS};
use candleclash_core::{
    Dataset, GameConfig, GameResult, GameState, Phase, Speed, TickDriver, TickOutcome, Timeframe,
};

use crate::notify::Countdown;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    /// Start view while the match is idle, main view once it runs.
    Game,
    Results,
}

/// Modal popup drawn over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// "Coming soon" notice behind the home screen's multiplayer entry.
    Multiplayer,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub overlay: Overlay,

    pub config: GameConfig,
    pub dataset: Dataset,
    pub game: GameState,
    pub driver: TickDriver,

    // Presentation-only notifications
    pub trade_flash: Countdown<TradeReceipt>,
    pub profit_flash: Countdown<f64>,
    pub switching: Countdown<Timeframe>,

    /// Terminal result waiting out its delay before the results screen opens.
    pub pending_result: Option<(Instant, GameResult)>,
    /// Result shown on the results screen.
    pub result: Option<GameResult>,
    /// Account value after each tick of the current match.
    pub equity: Vec<f64>,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: GameConfig) -> Self {
        let game = GameState::new(dataset.candles.clone(), &config);
        Self {
            running: true,
            screen: Screen::Home,
            overlay: Overlay::None,
            config,
            dataset,
            game,
            driver: TickDriver::new(),
            trade_flash: Countdown::new(),
            profit_flash: Countdown::new(),
            switching: Countdown::new(),
            pending_result: None,
            result: None,
            equity: Vec::new(),
            status_message: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Open the game screen on a fresh, idle match.
    pub fn play_solo(&mut self) {
        self.teardown();
        self.game = GameState::new(self.dataset.candles.clone(), &self.config);
        self.result = None;
        self.screen = Screen::Game;
        self.set_status(format!(
            "{} {}: {} candles ready",
            self.dataset.ticker,
            self.dataset.date,
            self.game.candle_count()
        ));
    }

    pub fn play_again(&mut self) {
        self.play_solo();
    }

    pub fn go_home(&mut self) {
        self.teardown();
        self.screen = Screen::Home;
        self.status_message = None;
    }

    /// Leaving a screen cancels its timers and pending notifications.
    fn teardown(&mut self) {
        self.driver.cancel();
        self.trade_flash.clear();
        self.profit_flash.clear();
        self.switching.clear();
        self.pending_result = None;
        self.equity.clear();
        self.overlay = Overlay::None;
    }

    // ── Match controls ───────────────────────────────────────────────

    pub fn start_match(&mut self, now: Instant) {
        if self.game.phase() != Phase::Idle {
            return;
        }
        self.game.start();
        self.equity = vec![self.game.account_value()];
        self.set_status("Match started");
        self.sync_clock(now);
    }

    /// Buy with the `slot`-th offered amount.
    pub fn buy(&mut self, slot: usize, now: Instant) {
        let Some(&amount) = BUY_AMOUNTS.get(slot) else {
            return;
        };
        if let Some(receipt) = self.game.buy(amount) {
            self.trade_flash.show(receipt, now, self.flash_duration());
        }
    }

    pub fn sell(&mut self, amount: SellAmount, now: Instant) {
        if let Some(receipt) = self.game.sell(amount) {
            self.trade_flash.show(receipt, now, self.flash_duration());
            if let Some(profit) = receipt.profit.filter(|p| *p > 0.0) {
                self.profit_flash.show(
                    profit,
                    now,
                    Duration::from_millis(self.config.profit_flash_ms),
                );
            }
        }
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.game.toggle_pause();
        if self.game.is_paused() {
            self.set_warning("Paused");
        } else if self.game.is_runnable() {
            self.set_status("Resumed");
        }
        self.sync_clock(now);
    }

    pub fn cycle_speed(&mut self, now: Instant) {
        let next = self.game.speed().map(Speed::next).unwrap_or(Speed::X2);
        self.select_speed(next, now);
    }

    pub fn select_speed(&mut self, speed: Speed, now: Instant) {
        if self.game.is_game_over() {
            return;
        }
        self.game.set_speed(speed);
        self.set_status(format!("Speed {}", speed.label()));
        self.sync_clock(now);
    }

    pub fn toggle_timeframe(&mut self, now: Instant) {
        let to = self.game.timeframe().toggle();
        if let Some(switch) = self.game.switch_timeframe(to) {
            self.switching.show(
                switch.to,
                now,
                Duration::from_millis(self.config.switch_overlay_ms),
            );
        }
    }

    fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.config.trade_flash_ms)
    }

    // ── Clock ────────────────────────────────────────────────────────

    /// Align the tick timer with the game's phase and speed.
    pub fn sync_clock(&mut self, now: Instant) {
        if self.screen == Screen::Game {
            self.driver.sync(&self.game, now);
        } else {
            self.driver.cancel();
        }
    }

    /// Advance every timer to `now`: tick, expire notifications, deliver the
    /// results handoff once its delay has passed.
    pub fn on_frame(&mut self, now: Instant) {
        if let Some(outcome) = self.driver.poll(&mut self.game, now) {
            self.apply_tick(outcome, now);
        }

        self.trade_flash.expire(now);
        self.profit_flash.expire(now);
        self.switching.expire(now);

        if let Some((due, result)) = self.pending_result {
            if now >= due {
                self.pending_result = None;
                self.result = Some(result);
                self.screen = Screen::Results;
                self.status_message = None;
            }
        }
    }

    fn apply_tick(&mut self, outcome: TickOutcome, now: Instant) {
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Advanced { mark_value, .. } => self.equity.push(mark_value),
            TickOutcome::Finished(result) => {
                self.equity.push(result.final_value);
                let due = now + Duration::from_millis(self.config.results_delay_ms);
                self.pending_result = Some((due, result));
                info!(
                    final_value = result.final_value,
                    trades = result.total_trades,
                    "results scheduled"
                );
            }
        }
    }
}
