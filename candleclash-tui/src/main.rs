//! Candle Clash: terminal trading game.
//!
//! Replays one session of candles on a fixed cadence. Buy and sell against
//! the latest close, then see how you did when the session runs out.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, Level};

use candleclash_core::{Dataset, GameConfig};
use candleclash_tui::{handle_key, logging, ui, AppState};

/// Session bundled into the binary, used when no `--dataset` is given.
const SAMPLE_DATASET: &str = include_str!("../../data/sample-candles.json");

#[derive(Parser)]
#[command(name = "candleclash", about = "Candle Clash: a terminal trading game")]
struct Args {
    /// Candle dataset JSON to play instead of the bundled session.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Game config TOML (default: <config dir>/candleclash/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/candleclash/candleclash.log).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    logging::init(&log_path, level)?;

    let config = load_config(args.config.as_deref())?;
    let dataset = match &args.dataset {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("load dataset {}", path.display()))?,
        None => Dataset::from_json(SAMPLE_DATASET).context("parse bundled dataset")?,
    };
    info!(
        ticker = %dataset.ticker,
        date = %dataset.date,
        candles = dataset.candles.len(),
        "dataset loaded"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(dataset, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exit");
    result
}

/// `--config` must exist; the default location may be absent.
fn load_config(explicit: Option<&std::path::Path>) -> Result<GameConfig> {
    match explicit {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display())),
        None => {
            let path = dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("candleclash")
                .join("config.toml");
            GameConfig::load_or_default(&path)
                .with_context(|| format!("load config {}", path.display()))
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key, Instant::now());
            }
        }

        // 3. Timers: tick, notifications, results handoff
        app.on_frame(Instant::now());

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
