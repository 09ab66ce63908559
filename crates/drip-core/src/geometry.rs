//! 2D points, rectangles and vector paths made of line and quadratic
//! Bézier segments. Coordinates are in layout points with y growing
//! downward.

/// A point in layout space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// One drawing command of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

/// A 2D vector outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new subpath at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    /// Quadratic Bézier from the current point to `to`.
    pub fn quad_to(&mut self, to: Point, control: Point) {
        self.elements.push(PathElement::QuadTo { control, to });
    }

    /// Close the current subpath back to its starting point.
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the path ends with a close command.
    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(PathElement::Close))
    }

    /// The first point of the path.
    pub fn start_point(&self) -> Option<Point> {
        self.elements.iter().find_map(|el| match el {
            PathElement::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// The current point once every element has been applied.
    pub fn end_point(&self) -> Option<Point> {
        let mut current = None;
        let mut subpath_start = None;
        for el in &self.elements {
            match *el {
                PathElement::MoveTo(p) => {
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathElement::LineTo(p) | PathElement::QuadTo { to: p, .. } => current = Some(p),
                PathElement::Close => current = subpath_start,
            }
        }
        current
    }

    /// Approximate each subpath with a polyline, splitting every curve
    /// into `segments_per_curve` straight pieces.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Vec<Point>> {
        let segments = segments_per_curve.max(1);
        let mut subpaths = Vec::new();
        let mut current: Vec<Point> = Vec::new();

        for el in &self.elements {
            match *el {
                PathElement::MoveTo(p) => {
                    if current.len() > 1 {
                        subpaths.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                }
                PathElement::LineTo(p) => current.push(p),
                PathElement::QuadTo { control, to } => {
                    let Some(&from) = current.last() else {
                        continue;
                    };
                    for i in 1..=segments {
                        let t = i as f64 / segments as f64;
                        current.push(quad_point(from, control, to, t));
                    }
                }
                PathElement::Close => {
                    if let Some(&first) = current.first() {
                        current.push(first);
                    }
                }
            }
        }
        if current.len() > 1 {
            subpaths.push(current);
        }
        subpaths
    }

    /// Exact enclosed area. Each quadratic segment adds two thirds of its
    /// control triangle to the polygon through its end points.
    pub fn area(&self) -> f64 {
        let mut total = 0.0;
        let mut current = Point::default();
        let mut subpath_start = Point::default();

        for el in &self.elements {
            match *el {
                PathElement::MoveTo(p) => {
                    total += cross(current, subpath_start);
                    current = p;
                    subpath_start = p;
                }
                PathElement::LineTo(p) => {
                    total += cross(current, p);
                    current = p;
                }
                PathElement::QuadTo { control, to } => {
                    total += cross(current, to);
                    total += 2.0 / 3.0 * triangle_cross(current, control, to);
                    current = to;
                }
                PathElement::Close => {
                    total += cross(current, subpath_start);
                    current = subpath_start;
                }
            }
        }
        total += cross(current, subpath_start);
        (total / 2.0).abs()
    }

    /// Interior spans `(x_start, x_end)` along the horizontal line at `y`,
    /// using the even-odd rule on the flattened outline.
    pub fn scanline(&self, y: f64) -> Vec<(f64, f64)> {
        let mut crossings = Vec::new();
        for polyline in self.flatten(32) {
            let closing = [polyline[polyline.len() - 1], polyline[0]];
            let edges = polyline.windows(2).chain(std::iter::once(&closing[..]));
            for edge in edges {
                let (a, b) = (edge[0], edge[1]);
                if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                    crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
        }
        crossings.sort_by(f64::total_cmp);
        crossings
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// Whether `point` lies inside the filled path.
    pub fn contains(&self, point: Point) -> bool {
        self.scanline(point.y)
            .iter()
            .any(|&(start, end)| point.x >= start && point.x <= end)
    }
}

/// Evaluate a quadratic Bézier at `t`.
pub fn quad_point(from: Point, control: Point, to: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * from.x + 2.0 * mt * t * control.x + t * t * to.x,
        mt * mt * from.y + 2.0 * mt * t * control.y + t * t * to.y,
    )
}

fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - b.x * a.y
}

fn triangle_cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}
