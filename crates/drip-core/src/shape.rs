//! Shapes that produce a path for a given frame, and the water-drop
//! shape whose bulge follows an animatable height.

use crate::animation::Interpolate;
use crate::geometry::{Path, Point, Rect};

/// Side length, in points, of the square frame the water drop is drawn in.
pub const DROP_FRAME_SIZE: f64 = 150.0;

/// Something that can outline itself inside a rectangle.
pub trait Shape {
    fn path(&self, rect: Rect) -> Path;
}

/// A shape with one value that is interpolated between renders.
pub trait Animatable {
    type Data: Interpolate + Clone;

    fn animatable_data(&self) -> Self::Data;
    fn set_animatable_data(&mut self, data: Self::Data);
}

/// Droplet silhouette: two quadratic curves hanging from the top centre
/// of the frame, meeting again at `height` points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterDrop {
    pub height: f64,
}

impl WaterDrop {
    pub const fn new(height: f64) -> Self {
        Self { height }
    }
}

impl Shape for WaterDrop {
    fn path(&self, rect: Rect) -> Path {
        let mid = rect.width / 2.0;
        let h = self.height;

        let mut path = Path::new();
        path.move_to(Point::new(mid, 0.0));
        path.quad_to(Point::new(mid, h), Point::new(rect.width, h));
        path.quad_to(Point::new(mid, 0.0), Point::new(0.0, h));
        path.close();
        path
    }
}

impl Animatable for WaterDrop {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.height
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.height = data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PathElement, quad_point};

    #[test]
    fn test_control_points_for_reference_frame() {
        let path = WaterDrop::new(130.0).path(Rect::from_size(150.0, 130.0));
        assert_eq!(
            path.elements(),
            &[
                PathElement::MoveTo(Point::new(75.0, 0.0)),
                PathElement::QuadTo {
                    control: Point::new(150.0, 130.0),
                    to: Point::new(75.0, 130.0),
                },
                PathElement::QuadTo {
                    control: Point::new(0.0, 130.0),
                    to: Point::new(75.0, 0.0),
                },
                PathElement::Close,
            ]
        );
        assert_eq!(path.end_point(), Some(Point::new(75.0, 0.0)));
    }

    #[test]
    fn test_path_is_closed_for_all_heights() {
        for width in [1.0, 37.5, 150.0, 400.0] {
            for h in 0..=150 {
                let path = WaterDrop::new(h as f64).path(Rect::from_size(width, 150.0));
                assert!(path.is_closed());
                assert_eq!(path.start_point(), path.end_point());
                assert_eq!(path.start_point(), Some(Point::new(width / 2.0, 0.0)));
            }
        }
    }

    #[test]
    fn test_path_is_mirror_symmetric() {
        for width in [10.0, 150.0, 321.0] {
            for h in [0.0, 42.0, 100.0, 150.0] {
                let path = WaterDrop::new(h).path(Rect::from_size(width, 150.0));
                let els = path.elements();
                let PathElement::MoveTo(start) = els[0] else {
                    panic!("path must start with a move");
                };
                let PathElement::QuadTo {
                    control: c1,
                    to: p1,
                } = els[1]
                else {
                    panic!("expected right curve");
                };
                let PathElement::QuadTo {
                    control: c2,
                    to: p2,
                } = els[2]
                else {
                    panic!("expected left curve");
                };

                let mid = width / 2.0;
                for i in 0..=20 {
                    let t = i as f64 / 20.0;
                    let right = quad_point(start, c1, p1, t);
                    let left = quad_point(p1, c2, p2, 1.0 - t);
                    assert!((right.x - mid + (left.x - mid)).abs() < 1e-9);
                    assert!((right.y - left.y).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_area_grows_with_height() {
        let rect = Rect::from_size(150.0, 150.0);
        let mut previous = WaterDrop::new(0.0).path(rect).area();
        assert_eq!(previous, 0.0);
        for h in 1..=150 {
            let area = WaterDrop::new(h as f64).path(rect).area();
            assert!(area > previous);
            previous = area;
        }
    }

    #[test]
    fn test_area_matches_closed_form() {
        let area = WaterDrop::new(130.0).path(Rect::from_size(150.0, 130.0)).area();
        assert!((area - 150.0 * 130.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_height_degenerates() {
        let path = WaterDrop::new(-20.0).path(Rect::from_size(150.0, 150.0));
        assert!(path.is_closed());
        assert!(path.scanline(5.0).is_empty());
    }

    #[test]
    fn test_animatable_data() {
        let mut drop = WaterDrop::new(100.0);
        assert_eq!(drop.animatable_data(), 100.0);
        drop.set_animatable_data(125.5);
        assert_eq!(drop.height, 125.5);
    }
}
