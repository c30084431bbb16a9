//! Candle chart widget - revealed candles with an average-cost line
//!
//! Renders candlesticks using direct buffer writes:
//! - Each candle = 2 terminal columns (body + gap) while they fit, else 1
//! - Body: block char, green if close >= open, pink otherwise
//! - Wicks: vertical line chars to high/low
//! - Average cost: dashed horizontal line while a position is held

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use candleclash_core::Candle;

use crate::theme::Theme;

pub struct CandleChart<'a> {
    candles: &'a [Candle],
    title: String,
    avg_cost: Option<f64>,
    theme: &'a Theme,
}

impl<'a> CandleChart<'a> {
    pub fn new(candles: &'a [Candle], title: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            candles,
            title: title.into(),
            avg_cost: None,
            theme,
        }
    }

    /// Draw a dashed line at the position's average cost.
    pub fn avg_cost(mut self, price: Option<f64>) -> Self {
        self.avg_cost = price.filter(|p| *p > 0.0);
        self
    }
}

/// Map a price to a row in the plot area (0 = top).
fn price_to_y(price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
    if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
        return 0;
    }
    let frac = (price - y_min) / (y_max - y_min);
    let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
    y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
}

impl Widget for CandleChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.candles.is_empty() {
            return;
        }

        // Reserve left margin for Y-axis labels
        let label_width: u16 = 9;
        let plot_left = inner.x + label_width;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(label_width);
        let plot_height = inner.height;
        if plot_width == 0 || plot_height == 0 {
            return;
        }

        // Scroll so the newest candle stays in view
        let step: u16 = if self.candles.len() * 2 <= plot_width as usize { 2 } else { 1 };
        let capacity = (plot_width / step) as usize;
        let start = self.candles.len().saturating_sub(capacity);
        let shown = &self.candles[start..];

        let mut y_min = shown.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let mut y_max = shown.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        if let Some(cost) = self.avg_cost {
            y_min = y_min.min(cost);
            y_max = y_max.max(cost);
        }
        let range = y_max - y_min;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        let y_lower = y_min - pad;
        let y_upper = y_max + pad;

        let label_style = Style::default().fg(self.theme.muted);
        let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (value, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            buf.set_string(inner.x, plot_top + y_pos, format!("{value:>8.2}"), label_style);
        }

        if let Some(cost) = self.avg_cost {
            let py = plot_top + price_to_y(cost, y_lower, y_upper, plot_height);
            let style = Style::default()
                .fg(self.theme.warning)
                .add_modifier(Modifier::DIM);
            for x in plot_left..plot_left + plot_width {
                if (x - plot_left) % 3 == 0 {
                    buf.set_string(x, py, "-", style);
                }
            }
            buf.set_string(
                plot_left,
                py,
                format!("avg {cost:.2}"),
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            );
        }

        for (i, candle) in shown.iter().enumerate() {
            let x = plot_left + i as u16 * step;
            if x >= inner.right() {
                break;
            }

            let is_up = candle.is_up();
            let color = if is_up {
                self.theme.positive
            } else {
                self.theme.negative
            };
            let style = Style::default().fg(color);

            let high_y = price_to_y(candle.high, y_lower, y_upper, plot_height);
            let low_y = price_to_y(candle.low, y_lower, y_upper, plot_height);
            let body_top_y = price_to_y(candle.open.max(candle.close), y_lower, y_upper, plot_height);
            let body_bot_y = price_to_y(candle.open.min(candle.close), y_lower, y_upper, plot_height);

            for y in high_y..body_top_y {
                buf.set_string(x, plot_top + y, "│", style);
            }
            let body_char = if is_up { "█" } else { "▓" };
            for y in body_top_y..=body_bot_y {
                buf.set_string(x, plot_top + y, body_char, style);
            }
            for y in (body_bot_y + 1)..=low_y {
                buf.set_string(x, plot_top + y, "│", style);
            }
        }
    }
}
