//! Square-pixel rendering with upper half blocks: every terminal cell
//! holds two vertically stacked pixels (foreground on top, background
//! below).

use drip_core::{Point, Rgb};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Build `height` lines of `width` cells from a pixel colour function
/// addressed in pixel coordinates (`0..width`, `0..height * 2`).
pub fn half_block_lines(
    width: u16,
    height: u16,
    pixel: impl Fn(u16, u16) -> Rgb,
) -> Vec<Line<'static>> {
    (0..height)
        .map(|row| {
            let spans: Vec<Span> = (0..width)
                .map(|col| {
                    let top = pixel(col, row * 2);
                    let bottom = pixel(col, row * 2 + 1);
                    Span::styled("▀", Style::new().fg(top.into()).bg(bottom.into()))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Maps a pixel grid onto a logical frame, keeping the frame centred and
/// entirely visible.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pixels_w: f64,
    pixels_h: f64,
    frame_w: f64,
    frame_h: f64,
    /// Logical points per pixel.
    scale: f64,
}

impl Viewport {
    pub fn fit(pixels_w: u16, pixels_h: u16, frame_w: f64, frame_h: f64) -> Self {
        let pixels_w = f64::from(pixels_w.max(1));
        let pixels_h = f64::from(pixels_h.max(1));
        let scale = (frame_w / pixels_w).max(frame_h / pixels_h);
        Self {
            pixels_w,
            pixels_h,
            frame_w,
            frame_h,
            scale,
        }
    }

    /// Logical position of the centre of pixel `(px, py)`.
    pub fn to_logical(&self, px: u16, py: u16) -> Point {
        Point::new(
            (f64::from(px) + 0.5 - self.pixels_w / 2.0) * self.scale + self.frame_w / 2.0,
            (f64::from(py) + 0.5 - self.pixels_h / 2.0) * self.scale + self.frame_h / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block_dimensions() {
        let lines = half_block_lines(5, 3, |_, _| Rgb::BLUE);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.spans.len() == 5));
    }

    #[test]
    fn test_viewport_centres_frame() {
        let viewport = Viewport::fit(100, 50, 210.0, 210.0);
        let centre = viewport.to_logical(50, 25);
        assert!((centre.x - 105.0 - 0.5 * 4.2).abs() < 1e-9);
        assert!((centre.y - 105.0 - 0.5 * 4.2).abs() < 1e-9);
        let corner = viewport.to_logical(0, 0);
        assert!(corner.y >= 0.0);
    }
}
