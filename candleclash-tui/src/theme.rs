//! Arcade neon theme tokens for the Candle Clash TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (titles, focus, selected options)
//! - **Positive**: Neon green (up candles, gains, buy controls)
//! - **Negative**: Hot pink (down candles, losses, sell controls)
//! - **Warning**: Neon orange (paused, switching)
//! - **Gold**: Winner badge and profit flash
//! - **Muted**: Steel blue (disabled controls, hints)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Palette handed to widgets that render straight into the buffer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub gold: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::arcade_neon()
    }
}

impl Theme {
    pub fn arcade_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            gold: GOLD,
            muted: MUTED,
            text_primary: TEXT_PRIMARY,
        }
    }

    /// Green for zero and gains, pink for losses.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

// ── Style helpers ────────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn gold_bold() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn pnl(value: f64) -> Style {
    Style::default().fg(Theme::default().pnl_color(value))
}

/// Trade control style: its side color when enabled, dimmed when not.
pub fn control(enabled: bool, base: Style) -> Style {
    if enabled {
        base.add_modifier(Modifier::BOLD)
    } else {
        muted().add_modifier(Modifier::DIM)
    }
}

pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, ACCENT);
    }

    #[test]
    fn test_pnl_color() {
        let theme = Theme::default();
        assert_eq!(theme.pnl_color(100.0), theme.positive);
        assert_eq!(theme.pnl_color(-50.0), theme.negative);
        assert_eq!(theme.pnl_color(0.0), theme.positive);
    }

    #[test]
    fn test_disabled_control_is_dimmed() {
        let style = control(false, positive());
        assert_eq!(style.fg, Some(MUTED));
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert_eq!(control(true, positive()).fg, Some(POSITIVE));
    }
}
