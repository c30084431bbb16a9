//! Results screen: final value, P&L, trades, winner badge.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use candleclash_core::GameResult;

use crate::app::AppState;
use crate::theme;
use crate::ui::{centered_rect, money, signed_money};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 70, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Game Over ")
        .title_style(theme::panel_title(true));

    let lines = match &app.result {
        Some(result) => result_lines(result, &app.dataset.ticker),
        None => vec![Line::from(Span::styled("No result yet.", theme::muted()))],
    };
    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        popup,
    );
}

fn result_lines(result: &GameResult, ticker: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", theme::accent_bold())),
        Line::from(Span::styled(ticker.to_string(), theme::secondary())),
        Line::from(""),
    ];
    if result.is_win() {
        lines.push(Line::from(Span::styled("★ WINNER ★", theme::gold_bold())));
        lines.push(Line::from(""));
    }
    lines.extend([
        Line::from(vec![
            Span::styled("Final value  ", theme::muted()),
            Span::styled(money(result.final_value), theme::text()),
        ]),
        Line::from(vec![
            Span::styled("P&L  ", theme::muted()),
            Span::styled(signed_money(result.profit_loss), theme::pnl(result.profit_loss)),
        ]),
        Line::from(vec![
            Span::styled("Total trades  ", theme::muted()),
            Span::styled(result.total_trades.to_string(), theme::text()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::accent()),
            Span::styled("Play Again", theme::positive()),
            Span::styled("   [h] ", theme::accent()),
            Span::styled("Home", theme::muted()),
        ]),
    ]);
    lines
}
