//! Candle Clash TUI: single-player trading game in the terminal.
//!
//! Screens:
//! 1. Home: play solo or peek at multiplayer
//! 2. Game: start view, then the live chart with trade controls
//! 3. Results: final value, P&L, winner badge

pub mod app;
pub mod input;
pub mod logging;
pub mod notify;
pub mod theme;
pub mod ui;

pub use app::{AppState, Screen};
pub use input::handle_key;
pub use theme::Theme;
