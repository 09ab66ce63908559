//! Linear gradients with evenly spaced color stops and animatable end
//! points.

use crate::animation::Interpolate;
use crate::color::Rgb;

/// A point in coordinates relative to a frame: (0, 0) is the top-leading
/// corner and (1, 1) the bottom-trailing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP_TRAILING: UnitPoint = UnitPoint::new(1.0, 0.0);
    pub const BOTTOM_LEADING: UnitPoint = UnitPoint::new(0.0, 1.0);
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint::new(1.0, 1.0);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Interpolate for UnitPoint {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        UnitPoint::new(self.x.interpolate(&other.x, t), self.y.interpolate(&other.y, t))
    }
}

/// Colors spread evenly along the line from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub colors: Vec<Rgb>,
    pub start: UnitPoint,
    pub end: UnitPoint,
}

impl LinearGradient {
    pub fn new(colors: Vec<Rgb>, start: UnitPoint, end: UnitPoint) -> Self {
        Self { colors, start, end }
    }

    /// Color at relative position `t` along the gradient axis.
    pub fn sample(&self, t: f64) -> Rgb {
        match self.colors.len() {
            0 => Rgb::BLACK,
            1 => self.colors[0],
            n => {
                let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                self.colors[i].interpolate(&self.colors[i + 1], pos - i as f64)
            }
        }
    }

    /// Color at `(x, y)` inside a `width` × `height` frame. Positions are
    /// projected onto the start→end axis in frame space.
    pub fn color_at(&self, x: f64, y: f64, width: f64, height: f64) -> Rgb {
        let (sx, sy) = (self.start.x * width, self.start.y * height);
        let (dx, dy) = (self.end.x * width - sx, self.end.y * height - sy);
        let len2 = dx * dx + dy * dy;
        if len2 <= f64::EPSILON {
            return self.sample(0.0);
        }
        let t = ((x - sx) * dx + (y - sy) * dy) / len2;
        self.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunset() -> LinearGradient {
        LinearGradient::new(
            vec![Rgb::ORANGE, Rgb::RED, Rgb::PURPLE],
            UnitPoint::TOP_LEADING,
            UnitPoint::BOTTOM_TRAILING,
        )
    }

    #[test]
    fn test_stops() {
        let g = sunset();
        assert_eq!(g.sample(0.0), Rgb::ORANGE);
        assert_eq!(g.sample(0.5), Rgb::RED);
        assert_eq!(g.sample(1.0), Rgb::PURPLE);
        assert_eq!(g.sample(-3.0), Rgb::ORANGE);
    }

    #[test]
    fn test_color_at_corners() {
        let g = sunset();
        assert_eq!(g.color_at(0.0, 0.0, 200.0, 100.0), Rgb::ORANGE);
        assert_eq!(g.color_at(200.0, 100.0, 200.0, 100.0), Rgb::PURPLE);
        assert_eq!(g.color_at(100.0, 50.0, 200.0, 100.0), Rgb::RED);
    }

    #[test]
    fn test_degenerate_axis_and_empty_stops() {
        let g = LinearGradient::new(vec![Rgb::BLUE], UnitPoint::BOTTOM, UnitPoint::BOTTOM);
        assert_eq!(g.color_at(3.0, 4.0, 10.0, 10.0), Rgb::BLUE);
        let empty = LinearGradient::new(Vec::new(), UnitPoint::TOP_LEADING, UnitPoint::BOTTOM);
        assert_eq!(empty.sample(0.3), Rgb::BLACK);
    }

    #[test]
    fn test_unit_point_interpolation() {
        let mid = UnitPoint::BOTTOM_LEADING.interpolate(&UnitPoint::TOP_LEADING, 0.5);
        assert_eq!(mid, UnitPoint::new(0.0, 0.5));
    }
}
