//! Game screen: start view while idle, then header, chart, controls.

use chrono::DateTime;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use candleclash_core::game::{dollar_label, BUY_AMOUNTS, SELL_AMOUNTS};
use candleclash_core::{Phase, SellAmount, Timeframe};

use crate::app::AppState;
use crate::theme::{self, Theme};
use crate::ui::candle_chart::CandleChart;
use crate::ui::{equity_chart, money, overlays, signed_money};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.game.phase() == Phase::Idle {
        render_start(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(8),    // candle chart
            Constraint::Length(1), // OHLC line
            Constraint::Length(1), // speed / timeframe / pause
            Constraint::Length(1), // buy row
            Constraint::Length(1), // sell row
            Constraint::Length(7), // equity
        ])
        .split(area);

    render_header(f, chunks[0], app);

    let theme = Theme::default();
    let game = &app.game;
    let title = format!("{} · {}", app.dataset.ticker, game.timeframe());
    let avg_cost = (game.shares() > 0).then(|| game.avg_cost());
    f.render_widget(
        CandleChart::new(game.visible_candles(), title, &theme).avg_cost(avg_cost),
        chunks[1],
    );

    render_ohlc(f, chunks[2], app);
    render_controls(f, chunks[3], app);
    render_buy_row(f, chunks[4], app);
    render_sell_row(f, chunks[5], app);
    equity_chart::render(f, chunks[6], &app.equity, game.starting_cash());

    // Transient overlays, drawn over the chart.
    if let Some(receipt) = app.trade_flash.current() {
        overlays::render_trade_flash(f, chunks[1], receipt);
    }
    if let Some(profit) = app.profit_flash.current() {
        overlays::render_profit_flash(f, chunks[1], *profit);
    }
    if let Some(to) = app.switching.current() {
        overlays::render_switching(f, chunks[1], *to);
    }
    if game.is_paused() {
        overlays::render_paused(f, chunks[1]);
    }
}

fn render_start(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Solo Match ")
        .title_style(theme::panel_title(true));

    let game = &app.game;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(app.dataset.ticker.clone(), theme::accent_bold())),
        Line::from(Span::styled(app.dataset.date.clone(), theme::secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} candles", game.candle_count()), theme::text()),
            Span::styled(format!("  ·  {} view", game.timeframe()), theme::muted()),
        ]),
        Line::from(Span::styled(
            format!("Starting cash {}", money(game.starting_cash())),
            theme::text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::accent()),
            Span::styled("Start Match", theme::positive()),
            Span::styled("   [t] ", theme::accent()),
            Span::styled("Timeframe", theme::muted()),
            Span::styled("   [Esc] ", theme::accent()),
            Span::styled("Home", theme::muted()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    let pnl = game.profit_loss();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(
            " {} · Candle {}/{} ",
            app.dataset.ticker,
            game.current_candle_index() + 1,
            game.candle_count()
        ))
        .title_style(theme::panel_title(true));

    let position = if game.shares() > 0 {
        format!("{} shares @ {}", game.shares(), money(game.avg_cost()))
    } else {
        "flat".to_string()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Portfolio ", theme::muted()),
            Span::styled(money(game.account_value()), theme::text()),
            Span::styled("   P&L ", theme::muted()),
            Span::styled(
                format!("{} ({:+.2}%)", signed_money(pnl), game.profit_loss_pct()),
                theme::pnl(pnl),
            ),
        ]),
        Line::from(vec![
            Span::styled("Cash ", theme::muted()),
            Span::styled(money(game.cash()), theme::text()),
            Span::styled("   Position ", theme::muted()),
            Span::styled(position, theme::secondary()),
            Span::styled(format!("   Trades {}", game.total_trades()), theme::muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_ohlc(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(candle) = app.game.current_candle() else {
        return;
    };
    let clock = DateTime::from_timestamp(candle.time, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default();
    let style = if candle.is_up() {
        theme::positive()
    } else {
        theme::negative()
    };
    let line = Line::from(vec![
        Span::styled(format!(" {clock} UTC  "), theme::muted()),
        Span::styled(
            format!(
                "O {:.2}  H {:.2}  L {:.2}  C {:.2}",
                candle.open, candle.high, candle.low, candle.close
            ),
            style,
        ),
        Span::styled(format!("  Vol {}", candle.volume), theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    let speed = game
        .speed()
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| format!("{}ms", game.tick_interval_ms()));

    let mut spans = vec![
        Span::styled(" [s] Speed ", theme::accent()),
        Span::styled(speed, theme::text()),
        Span::styled("   [t] ", theme::accent()),
    ];
    for tf in Timeframe::ALL {
        let style = if tf == game.timeframe() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("{} ", tf.label()), style));
    }
    let (label, style) = if game.is_paused() {
        ("RESUME", theme::warning())
    } else {
        ("PAUSE", theme::muted())
    };
    spans.push(Span::styled("  [p] ", theme::accent()));
    spans.push(Span::styled(label, style));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_buy_row(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![Span::styled(" BUY  ", theme::positive())];
    for (i, amount) in BUY_AMOUNTS.iter().enumerate() {
        let enabled = app.game.can_buy(*amount);
        spans.push(Span::styled(
            format!("[{}] {}  ", i + 1, dollar_label(*amount)),
            theme::control(enabled, theme::positive()),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_sell_row(f: &mut Frame, area: Rect, app: &AppState) {
    let enabled = app.game.can_sell();
    let mut spans = vec![Span::styled(" SELL ", theme::negative())];
    for amount in SELL_AMOUNTS {
        spans.push(Span::styled(
            format!("[{}] {}  ", sell_key(amount), amount),
            theme::control(enabled, theme::negative()),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn sell_key(amount: SellAmount) -> &'static str {
    match amount {
        SellAmount::Dollars(x) if x <= 5_000.0 => "4",
        SellAmount::Dollars(_) => "5",
        SellAmount::Half => "h",
        SellAmount::All => "a",
    }
}
