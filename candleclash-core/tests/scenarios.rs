//! End-to-end scenarios for the trade executor and tick transitions.

use std::time::{Duration, Instant};

use candleclash_core::game::{SellAmount, TickDriver, TickOutcome, BUY_AMOUNTS};
use candleclash_core::{Candle, GameConfig, GameState};

fn candles(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle {
            time: 1_792_161_000 + i as i64 * 300,
            open: close,
            high: close + 0.5,
            low: close - 0.5,
            close,
            volume: 1_000_000,
        })
        .collect()
}

fn started(closes: &[f64], config: &GameConfig) -> GameState {
    let mut state = GameState::new(candles(closes), config);
    state.start();
    state
}

#[test]
fn buy_ten_thousand_at_fifty() {
    let mut state = started(&[50.0, 51.0, 52.0], &GameConfig::default());
    let receipt = state.buy(10_000.0).expect("buy should execute");

    assert_eq!(receipt.shares, 200);
    assert_eq!(state.cash(), 90_000.0);
    assert_eq!(state.shares(), 200);
    assert_eq!(state.total_invested(), 10_000.0);
    assert_eq!(state.total_trades(), 1);
}

#[test]
fn sell_all_at_sixty_locks_profit() {
    let mut state = started(&[50.0, 60.0, 55.0], &GameConfig::default());
    state.buy(10_000.0).unwrap();
    state.tick();
    assert_eq!(state.fill_price(), 60.0);
    assert_eq!(state.avg_cost(), 50.0);

    let receipt = state.sell(SellAmount::All).expect("sell should execute");
    assert_eq!(receipt.value, 12_000.0);
    assert_eq!(receipt.profit, Some(2_000.0));
    assert!(receipt.locked_profit());
    assert_eq!(state.cash(), 102_000.0);
    assert_eq!(state.shares(), 0);
    assert_eq!(state.total_invested(), 0.0);
    assert_eq!(state.total_trades(), 2);
}

#[test]
fn buy_rejected_without_enough_cash() {
    let config = GameConfig {
        starting_cash: 100.0,
        ..GameConfig::default()
    };
    let mut state = started(&[1_000.0, 1_000.0], &config);
    assert!(!state.can_buy(5_000.0));
    assert!(state.buy(5_000.0).is_none());

    assert_eq!(state.cash(), 100.0);
    assert_eq!(state.shares(), 0);
    assert_eq!(state.total_invested(), 0.0);
    assert_eq!(state.total_trades(), 0);
}

#[test]
fn terminal_tick_hands_off_exactly_once() {
    let closes = [50.0, 51.0, 52.0, 53.0, 54.0];
    let mut state = started(&closes, &GameConfig::default());
    state.buy(5_000.0).unwrap(); // 100 shares @ 50

    let t0 = Instant::now();
    let mut driver = TickDriver::new();
    driver.sync(&state, t0);

    let mut results = Vec::new();
    for second in 1..=60 {
        let now = t0 + Duration::from_secs(second);
        if let Some(TickOutcome::Finished(result)) = driver.poll(&mut state, now) {
            results.push(result);
        }
        driver.sync(&state, now);
    }

    assert_eq!(results.len(), 1);
    assert_eq!(state.current_candle_index(), closes.len() - 1);
    assert!(state.is_game_over());
    assert!(!state.is_playing());

    let result = results[0];
    assert_eq!(result.final_value, 95_000.0 + 100.0 * 54.0);
    assert_eq!(result.profit_loss, 400.0);
    assert_eq!(result.total_trades, 1);
    assert!(result.is_win());
}

#[test]
fn second_to_last_candle_goes_straight_to_game_over() {
    let mut state = started(&[10.0, 11.0, 12.0, 13.0], &GameConfig::default());
    state.tick();
    state.tick();
    assert_eq!(state.current_candle_index(), 2);

    let outcome = state.tick();
    assert!(matches!(outcome, TickOutcome::Finished(_)));
    assert_eq!(state.current_candle_index(), 3);
}

#[test]
fn pause_blocks_trades_and_ticks() {
    let mut state = started(&[20.0, 21.0, 22.0], &GameConfig::default());
    state.buy(BUY_AMOUNTS[0]).unwrap();
    state.toggle_pause();

    assert!(state.buy(BUY_AMOUNTS[0]).is_none());
    assert!(state.sell(SellAmount::All).is_none());
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.total_trades(), 1);

    state.toggle_pause();
    assert!(state.sell(SellAmount::All).is_some());
    assert!(matches!(state.tick(), TickOutcome::Advanced { .. }));
}

#[test]
fn no_trades_after_game_over() {
    let mut state = started(&[20.0, 21.0], &GameConfig::default());
    state.buy(5_000.0).unwrap();
    state.tick();
    assert!(state.is_game_over());

    assert!(state.buy(5_000.0).is_none());
    assert!(state.sell(SellAmount::All).is_none());
    assert_eq!(state.total_trades(), 1);
}

#[test]
fn account_value_moves_with_the_candle() {
    let mut state = started(&[50.0, 55.0, 40.0], &GameConfig::default());
    state.buy(10_000.0).unwrap();
    assert_eq!(state.account_value(), 100_000.0);

    state.tick();
    assert_eq!(state.account_value(), 101_000.0);
    assert_eq!(state.profit_loss(), 1_000.0);
    assert!((state.profit_loss_pct() - 1.0).abs() < 1e-12);
}
