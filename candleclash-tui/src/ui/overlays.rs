//! Overlay widgets: help, multiplayer notice, and the in-game flashes.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use candleclash_core::game::{TradeReceipt, TradeSide};
use candleclash_core::Timeframe;

use crate::theme;
use crate::ui::{centered_rect, money, signed_money};

/// Key binding overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Home");
    key(&mut lines, "Enter", "Play solo");
    key(&mut lines, "m", "Multiplayer");
    lines.push(Line::from(""));

    section(&mut lines, "Match");
    key(&mut lines, "Enter", "Start match");
    key(&mut lines, "1 / 2 / 3", "Buy $5K / $10K / $20K");
    key(&mut lines, "4 / 5", "Sell $5K / $10K");
    key(&mut lines, "h", "Sell half");
    key(&mut lines, "a", "Sell all");
    key(&mut lines, "p / Space", "Pause / resume");
    key(&mut lines, "s", "Cycle speed (1x 2x 3x 5x)");
    key(&mut lines, "F1-F4", "Speed 1x / 2x / 3x / 5x");
    key(&mut lines, "t", "Toggle 5m / 15m candles");
    key(&mut lines, "Esc", "Back to home");
    lines.push(Line::from(""));

    section(&mut lines, "Results");
    key(&mut lines, "Enter", "Play again");
    key(&mut lines, "h", "Home");
    lines.push(Line::from(""));

    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>12}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

/// Multiplayer is not available yet.
pub fn render_multiplayer(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral())
        .title(" Multiplayer ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Coming soon!", theme::gold_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Head-to-head matches on the same chart are on the way.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Esc to close", theme::neutral())),
    ];
    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// "BUY EXECUTED" / "SELL EXECUTED" banner.
pub fn render_trade_flash(f: &mut Frame, area: Rect, receipt: &TradeReceipt) {
    let style = match receipt.side {
        TradeSide::Buy => theme::positive(),
        TradeSide::Sell => theme::negative(),
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("{} EXECUTED", receipt.side.label()),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} shares @ {}", receipt.shares, money(receipt.price)),
            theme::text(),
        )),
    ];
    banner(f, top_band(area, 0), lines, style);
}

pub fn render_profit_flash(f: &mut Frame, area: Rect, profit: f64) {
    let lines = vec![Line::from(Span::styled(
        format!("PROFIT LOCKED! {}", signed_money(profit)),
        theme::gold_bold(),
    ))];
    banner(f, top_band(area, 5), lines, theme::gold_bold());
}

pub fn render_switching(f: &mut Frame, area: Rect, to: Timeframe) {
    let lines = vec![Line::from(Span::styled(
        format!("Switching to {to}..."),
        theme::warning(),
    ))];
    banner(f, centered_rect(40, 30, area), lines, theme::warning());
}

pub fn render_paused(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "PAUSED",
            theme::warning().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("press p to resume", theme::muted())),
    ];
    banner(f, centered_rect(30, 40, area), lines, theme::warning());
}

/// A 4-row band near the top of `area`, offset by `row`.
fn top_band(area: Rect, row: u16) -> Rect {
    let width = area.width.saturating_mul(2) / 3;
    let x = area.x + (area.width - width) / 2;
    let y = (area.y + 1 + row).min(area.bottom().saturating_sub(1));
    let height = 4u16.min(area.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}

fn banner(f: &mut Frame, popup: Rect, lines: Vec<Line<'_>>, border: Style) {
    if popup.width < 3 || popup.height < 3 {
        return;
    }
    f.render_widget(Clear, popup);
    let block = Block::default().borders(Borders::ALL).border_style(border);
    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        popup,
    );
}
