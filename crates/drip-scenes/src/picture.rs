//! Picture that shrinks and fades when tapped.

use drip_art::{HEAVY_IDLE, art_width, scale_art};
use drip_core::{Animated, Animation, AnimationSpeed, Rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use tracing::info;

const TAP_ANIMATION: Animation = Animation::ease_in_out(1500);

#[derive(Debug, Clone)]
pub struct PictureView {
    scale: Animated<f64>,
    opacity: Animated<f64>,
    shrunk: bool,
}

impl Default for PictureView {
    fn default() -> Self {
        Self::new()
    }
}

impl PictureView {
    pub fn new() -> Self {
        Self {
            scale: Animated::new(1.0),
            opacity: Animated::new(1.0),
            shrunk: false,
        }
    }

    /// Toggle between full size and half size at half opacity.
    pub fn tap(&mut self, now_ms: u64, speed: AnimationSpeed) {
        self.shrunk = !self.shrunk;
        let (scale, opacity) = if self.shrunk { (0.5, 0.5) } else { (1.0, 1.0) };
        let animation = TAP_ANIMATION.scaled(speed);
        self.scale.animate_to(scale, animation, now_ms);
        self.opacity.animate_to(opacity, animation, now_ms);
        info!(shrunk = self.shrunk, "picture tapped");
    }

    /// Re-time a running tap transition.
    pub fn set_speed(&mut self, now_ms: u64, speed: AnimationSpeed) {
        let duration_ms = TAP_ANIMATION.scaled(speed).duration_ms;
        self.scale.retime(duration_ms, now_ms);
        self.opacity.retime(duration_ms, now_ms);
    }

    pub fn scale(&self, now_ms: u64) -> f64 {
        self.scale.value(now_ms)
    }

    pub fn opacity(&self, now_ms: u64) -> f64 {
        self.opacity.value(now_ms)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: u64) {
        // Fit the art inside the area, one column of padding on each side
        let fit = (f64::from(area.width.saturating_sub(2)) / art_width(&HEAVY_IDLE) as f64)
            .min(f64::from(area.height) / HEAVY_IDLE.len() as f64);
        let lines = scale_art(&HEAVY_IDLE, fit * self.scale(now_ms));

        let color = Rgb::WHITE.over(Rgb::CARD, self.opacity(now_ms));
        let top_padding = usize::from(area.height).saturating_sub(lines.len()) / 2;
        let text: Vec<Line> = std::iter::repeat_n(Line::default(), top_padding)
            .chain(lines.into_iter().map(Line::from))
            .collect();

        let picture = Paragraph::new(text)
            .style(Style::new().fg(color.into()))
            .alignment(Alignment::Center);
        frame.render_widget(picture, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    #[test]
    fn test_tap_twice_restores() {
        let mut picture = PictureView::new();
        picture.tap(0, AnimationSpeed::Medium);
        assert_eq!(picture.scale(1500), 0.5);
        assert_eq!(picture.opacity(1500), 0.5);

        picture.tap(2000, AnimationSpeed::Medium);
        assert!(picture.scale(2750) > 0.5 && picture.scale(2750) < 1.0);
        assert_eq!(picture.scale(3500), 1.0);
        assert_eq!(picture.opacity(3500), 1.0);
    }

    #[test]
    fn test_tap_midway_reverses_smoothly() {
        let mut picture = PictureView::new();
        picture.tap(0, AnimationSpeed::Medium);
        let midway = picture.scale(750);
        picture.tap(750, AnimationSpeed::Medium);
        assert_eq!(picture.scale(750), midway);
    }

    fn painted_cells(picture: &PictureView, now_ms: u64) -> (usize, Color) {
        let mut terminal = Terminal::new(TestBackend::new(26, 12)).unwrap();
        terminal
            .draw(|frame| picture.render(frame, frame.area(), now_ms))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let count = buffer.content().iter().filter(|c| c.symbol() == "█").count();
        (count, buffer[(0, 0)].fg)
    }

    #[test]
    fn test_set_speed_finishes_tap_sooner() {
        let mut picture = PictureView::new();
        picture.tap(0, AnimationSpeed::Medium);
        picture.set_speed(750, AnimationSpeed::Fast);
        assert_eq!(picture.scale(1125), 0.5);
        assert_eq!(picture.opacity(1125), 0.5);
    }

    #[test]
    fn test_render_shrinks_and_fades() {
        let mut picture = PictureView::new();
        let (full, full_color) = painted_cells(&picture, 0);
        assert_eq!(full_color, Color::Rgb(255, 255, 255));

        picture.tap(0, AnimationSpeed::Medium);
        let (half, half_color) = painted_cells(&picture, 2000);
        assert!(half > 0 && half < full);
        assert_ne!(half_color, full_color);
    }
}
