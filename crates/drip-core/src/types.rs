//! Shared enums cycled at runtime and read from the configuration file.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Global multiplier applied to every animation duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(&self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Scale a duration in milliseconds by this speed.
    pub fn scale_ms(self, duration_ms: u64) -> u64 {
        match self {
            AnimationSpeed::Slow => duration_ms + duration_ms / 2,
            AnimationSpeed::Medium => duration_ms,
            AnimationSpeed::Fast => duration_ms / 2,
        }
    }

    /// Human readable label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Accent used for card titles, the button and key hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    Magenta,
    Yellow,
    Red,
    Blue,
    White,
}

impl ColorTheme {
    /// Themes in the order `c` steps through them.
    pub const ALL: [ColorTheme; 7] = [
        ColorTheme::Cyan,
        ColorTheme::Green,
        ColorTheme::Magenta,
        ColorTheme::Yellow,
        ColorTheme::Red,
        ColorTheme::Blue,
        ColorTheme::White,
    ];

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Terminal palette color of the accent.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
            ColorTheme::White => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_scaling() {
        assert_eq!(AnimationSpeed::Slow.scale_ms(2000), 3000);
        assert_eq!(AnimationSpeed::Medium.scale_ms(2000), 2000);
        assert_eq!(AnimationSpeed::Fast.scale_ms(2000), 1000);
    }

    #[test]
    fn test_cycles_return_to_start() {
        let mut speed = AnimationSpeed::default();
        for _ in 0..3 {
            speed = speed.next();
        }
        assert_eq!(speed, AnimationSpeed::default());

        let mut theme = ColorTheme::default();
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::default());
    }

    #[test]
    fn test_theme_order() {
        assert_eq!(ColorTheme::Cyan.next(), ColorTheme::Green);
        assert_eq!(ColorTheme::Green.next(), ColorTheme::Magenta);
        assert_eq!(ColorTheme::White.next(), ColorTheme::Cyan);
        assert_eq!(ColorTheme::Blue.color(), Color::Blue);
    }
}
