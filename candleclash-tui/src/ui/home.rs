//! Home screen: title, tagline, mode choice.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme;

const TITLE: [&str; 5] = [
    " ██████  █████  ███  ██ ██████  ██      ███████ ",
    "██      ██   ██ ████ ██ ██   ██ ██      ██      ",
    "██      ███████ ██ ████ ██   ██ ██      █████   ",
    "██      ██   ██ ██  ███ ██   ██ ██      ██      ",
    " ██████ ██   ██ ██   ██ ██████  ███████ ███████ ",
];

pub const TAGLINE: &str = "Buy right. Sell smart. Beat the chart.";

pub fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Candle Clash ")
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(TITLE.len() as u16 + 2),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut title: Vec<Line> = TITLE
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme::accent_bold())))
        .collect();
    title.push(Line::from(""));
    title.push(Line::from(Span::styled("C L A S H", theme::gold_bold())));
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);

    f.render_widget(
        Paragraph::new(Span::styled(TAGLINE, theme::secondary())).alignment(Alignment::Center),
        chunks[2],
    );

    let menu = vec![
        Line::from(vec![
            Span::styled("[Enter] ", theme::accent()),
            Span::styled("PLAY SOLO", theme::positive().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[m] ", theme::accent()),
            Span::styled("MULTIPLAYER", theme::neutral()),
        ]),
    ];
    f.render_widget(Paragraph::new(menu).alignment(Alignment::Center), chunks[3]);
}
