//! Bottom status bar: key hints for the current screen, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use candleclash_core::Phase;

use crate::app::{AppState, Screen, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(hints(app), theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(app: &AppState) -> &'static str {
    match app.screen {
        Screen::Home => " Enter:Play m:Multiplayer ?:Help q:Quit",
        Screen::Game if app.game.phase() == Phase::Idle => " Enter:Start t:Timeframe Esc:Home q:Quit",
        Screen::Game => " 1-3:Buy 4-5/h/a:Sell p:Pause s/F1-F4:Speed t:Timeframe ?:Help Esc:Home",
        Screen::Results => " Enter:Play again h:Home q:Quit",
    }
}
