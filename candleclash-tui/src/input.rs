//! Keyboard input dispatch: overlays → global keys → screen-specific handlers.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use candleclash_core::game::SellAmount;
use candleclash_core::{Phase, Speed};

use crate::app::{AppState, Overlay, Screen};

/// Handle a key event at `now`, then realign the tick clock.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay != Overlay::None {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    match app.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::Game if app.game.phase() == Phase::Idle => handle_start_key(app, key, now),
        Screen::Game => handle_game_key(app, key, now),
        Screen::Results => handle_results_key(app, key),
    }

    app.sync_clock(now);
}

fn handle_home_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.play_solo(),
        KeyCode::Char('m') => app.overlay = Overlay::Multiplayer,
        _ => {}
    }
}

fn handle_start_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => app.start_match(now),
        KeyCode::Char('t') => app.toggle_timeframe(now),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_game_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('1') => app.buy(0, now),
        KeyCode::Char('2') => app.buy(1, now),
        KeyCode::Char('3') => app.buy(2, now),
        KeyCode::Char('4') => app.sell(SellAmount::Dollars(5_000.0), now),
        KeyCode::Char('5') => app.sell(SellAmount::Dollars(10_000.0), now),
        KeyCode::Char('h') => app.sell(SellAmount::Half, now),
        KeyCode::Char('a') => app.sell(SellAmount::All, now),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_pause(now),
        KeyCode::Char('s') => app.cycle_speed(now),
        KeyCode::F(n @ 1..=4) => app.select_speed(Speed::ALL[usize::from(n) - 1], now),
        KeyCode::Char('t') => app.toggle_timeframe(now),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.play_again(),
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use candleclash_core::{Candle, Dataset, GameConfig, Timeframe};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        let candles = (0..12)
            .map(|i| Candle {
                time: i * 300,
                open: 40.0,
                high: 41.0,
                low: 39.0,
                close: 40.0,
                volume: 10,
            })
            .collect();
        let dataset = Dataset {
            ticker: "TST".into(),
            date: "2026-10-16".into(),
            timeframe: "5m".into(),
            candles,
        };
        AppState::new(dataset, GameConfig::default())
    }

    #[test]
    fn home_enter_opens_start_view() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter), Instant::now());
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.game.phase(), Phase::Idle);
        assert!(!app.driver.is_armed());
    }

    #[test]
    fn multiplayer_overlay_swallows_keys() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Char('m')), now);
        assert_eq!(app.overlay, Overlay::Multiplayer);

        handle_key(&mut app, press(KeyCode::Char('x')), now);
        assert_eq!(app.overlay, Overlay::Multiplayer);
        assert!(app.running);

        handle_key(&mut app, press(KeyCode::Esc), now);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn trade_keys_before_start_do_nothing() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Char('1')), now);
        assert_eq!(app.game.total_trades(), 0);
    }

    #[test]
    fn game_keys_map_to_actions() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert!(app.game.is_runnable());
        assert!(app.driver.is_armed());

        handle_key(&mut app, press(KeyCode::Char('3')), now);
        assert_eq!(app.game.shares(), 500);
        handle_key(&mut app, press(KeyCode::Char('h')), now);
        assert_eq!(app.game.shares(), 250);
        handle_key(&mut app, press(KeyCode::Char('4')), now);
        assert_eq!(app.game.shares(), 125);

        handle_key(&mut app, press(KeyCode::Char(' ')), now);
        assert!(app.game.is_paused());
        assert!(!app.driver.is_armed());
        handle_key(&mut app, press(KeyCode::Char('a')), now);
        assert_eq!(app.game.shares(), 125);
        handle_key(&mut app, press(KeyCode::Char('p')), now);
        handle_key(&mut app, press(KeyCode::Char('a')), now);
        assert_eq!(app.game.shares(), 0);

        handle_key(&mut app, press(KeyCode::Char('t')), now);
        assert_eq!(app.game.timeframe(), Timeframe::FifteenMin);
        handle_key(&mut app, press(KeyCode::Char('s')), now);
        assert_eq!(app.game.tick_interval_ms(), 1_500);
    }

    #[test]
    fn function_keys_pick_speed_directly() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Enter), now);

        handle_key(&mut app, press(KeyCode::F(4)), now);
        assert_eq!(app.game.speed(), Some(Speed::X5));
        handle_key(&mut app, press(KeyCode::F(1)), now);
        assert_eq!(app.game.speed(), Some(Speed::X1));
        assert_eq!(app.driver.interval(), Some(Duration::from_millis(5_000)));
        handle_key(&mut app, press(KeyCode::F(5)), now);
        assert_eq!(app.game.speed(), Some(Speed::X1));
    }

    #[test]
    fn escape_returns_home_and_cancels_clock() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        handle_key(&mut app, press(KeyCode::Esc), now);
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.driver.is_armed());
    }

    #[test]
    fn q_quits_anywhere() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')), Instant::now());
        assert!(!app.running);
    }

    #[test]
    fn help_toggles() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Char('?')), now);
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('?')), now);
        assert_eq!(app.overlay, Overlay::None);
    }
}
