//! Full sessions driven through key presses and synthetic clock instants.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use candleclash_core::{Candle, Dataset, GameConfig};
use candleclash_tui::app::Overlay;
use candleclash_tui::{handle_key, ui, AppState, Screen};

const MS: Duration = Duration::from_millis(1);

fn press(app: &mut AppState, code: KeyCode, now: Instant) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
}

fn rising(n: usize) -> Dataset {
    Dataset {
        ticker: "STX".into(),
        date: "2026-10-16".into(),
        timeframe: "5m".into(),
        candles: (0..n)
            .map(|i| {
                let close = 50.0 + i as f64;
                Candle {
                    time: 1_792_161_000 + i as i64 * 300,
                    open: close - 0.5,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1_000,
                }
            })
            .collect(),
    }
}

fn render(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn winning_match_reaches_results_once() {
    let mut app = AppState::new(rising(6), GameConfig::default());
    let t0 = Instant::now();

    press(&mut app, KeyCode::Enter, t0); // home → start view
    press(&mut app, KeyCode::Enter, t0); // start match
    press(&mut app, KeyCode::Char('2'), t0); // $10K @ 50 → 200 shares
    assert_eq!(app.game.shares(), 200);

    let mut now = t0;
    let mut entered_results = 0;
    for _ in 0..400 {
        now += 50 * MS;
        let before = app.screen;
        app.on_frame(now);
        if before != Screen::Results && app.screen == Screen::Results {
            entered_results += 1;
        }
    }

    assert_eq!(entered_results, 1);
    assert_eq!(app.screen, Screen::Results);
    let result = app.result.unwrap();
    // Five ticks at 3 s each; the last candle closes at 55.
    assert_eq!(result.final_value, 90_000.0 + 200.0 * 55.0);
    assert!(result.is_win());
    assert!(render(&app).contains("WINNER"));

    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.screen, Screen::Game);
    assert_eq!(app.game.cash(), 100_000.0);
}

#[test]
fn results_wait_for_delay() {
    let mut app = AppState::new(rising(2), GameConfig::default());
    let t0 = Instant::now();
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Enter, t0);

    app.on_frame(t0 + 3_000 * MS);
    assert!(app.game.is_game_over());
    assert_eq!(app.screen, Screen::Game);

    app.on_frame(t0 + 3_050 * MS);
    assert_eq!(app.screen, Screen::Game);
    app.on_frame(t0 + 3_100 * MS);
    assert_eq!(app.screen, Screen::Results);
}

#[test]
fn paused_match_does_not_advance() {
    let mut app = AppState::new(rising(6), GameConfig::default());
    let t0 = Instant::now();
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Char('p'), t0 + 1_000 * MS);

    for step in 1..=100 {
        app.on_frame(t0 + step * 100 * MS);
    }
    assert_eq!(app.game.current_candle_index(), 0);
    assert!(render(&app).contains("PAUSED"));

    let resume = t0 + 10_000 * MS;
    press(&mut app, KeyCode::Char('p'), resume);
    app.on_frame(resume + 2_999 * MS);
    assert_eq!(app.game.current_candle_index(), 0);
    app.on_frame(resume + 3_000 * MS);
    assert_eq!(app.game.current_candle_index(), 1);
}

#[test]
fn profit_flash_follows_profitable_sell() {
    let mut app = AppState::new(rising(6), GameConfig::default());
    let t0 = Instant::now();
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Char('1'), t0);

    let later = t0 + 3_000 * MS;
    app.on_frame(later);
    press(&mut app, KeyCode::Char('a'), later);
    app.on_frame(later + 10 * MS);
    let screen = render(&app);
    assert!(screen.contains("SELL EXECUTED"));
    assert!(screen.contains("PROFIT LOCKED!"));

    // Trade flash gone at 800 ms, profit flash still up until 1500 ms.
    app.on_frame(later + 800 * MS);
    assert!(app.trade_flash.current().is_none());
    assert!(app.profit_flash.current().is_some());
    app.on_frame(later + 1_500 * MS);
    assert!(app.profit_flash.current().is_none());
}

#[test]
fn every_screen_renders() {
    let mut app = AppState::new(rising(10), GameConfig::default());
    let t0 = Instant::now();
    assert!(render(&app).contains("PLAY SOLO"));

    press(&mut app, KeyCode::Char('m'), t0);
    assert_eq!(app.overlay, Overlay::Multiplayer);
    assert!(render(&app).contains("Coming soon!"));
    press(&mut app, KeyCode::Esc, t0);

    press(&mut app, KeyCode::Enter, t0);
    assert!(render(&app).contains("Start Match"));

    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Char('t'), t0);
    assert!(render(&app).contains("Switching to 15min"));

    press(&mut app, KeyCode::Char('?'), t0);
    assert!(render(&app).contains("Sell half"));
}
