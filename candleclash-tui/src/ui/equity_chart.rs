//! Account value line chart for the current match.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, equity: &[f64], starting_cash: f64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Equity ")
        .title_style(theme::muted());

    if equity.len() < 2 {
        let para = Paragraph::new(Span::styled("Waiting for the first tick...", theme::muted()))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let (y_min, y_max) = bounds(equity, starting_cash);
    let x_max = equity.len().saturating_sub(1) as f64;

    let data: Vec<(f64, f64)> = equity
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    let baseline = [(0.0, starting_cash), (x_max, starting_cash)];

    let last = equity[equity.len() - 1];
    let line_color = theme::Theme::default().pnl_color(last - starting_cash);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::MUTED))
            .graph_type(GraphType::Line)
            .data(&baseline),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(line_color))
            .graph_type(GraphType::Line)
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

/// Y bounds covering the curve and the starting-cash baseline, padded 5%.
fn bounds(equity: &[f64], starting_cash: f64) -> (f64, f64) {
    let min_y = equity.iter().copied().fold(starting_cash, f64::min);
    let max_y = equity.iter().copied().fold(starting_cash, f64::max);
    let padding = ((max_y - min_y).abs() * 0.05).max(1.0);
    (min_y - padding, max_y + padding)
}
