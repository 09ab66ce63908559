//! RGB colors that can be blended and interpolated.

use ratatui::style::Color;

use crate::animation::Interpolate;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const ORANGE: Rgb = Rgb(255, 149, 0);
    pub const RED: Rgb = Rgb(255, 59, 48);
    pub const PURPLE: Rgb = Rgb(175, 82, 222);
    pub const BLUE: Rgb = Rgb(0, 122, 255);
    /// Card background, a dark grouped-list gray.
    pub const CARD: Rgb = Rgb(28, 28, 30);

    /// Composite `self` at `opacity` over `background`.
    pub fn over(self, background: Rgb, opacity: f64) -> Rgb {
        background.interpolate(&self, opacity.clamp(0.0, 1.0))
    }
}

impl Interpolate for Rgb {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}
