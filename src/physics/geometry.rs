use std::f64::consts::TAU;

/// A point in diagram space (unitless, y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight line segment between two diagram points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Segment through `center` reaching `(dx, dy)` to either side.
    pub fn centered(center: Point, dx: f64, dy: f64) -> Self {
        Self {
            start: center.offset(-dx, -dy),
            end: center.offset(dx, dy),
        }
    }

    /// Vector from `start` to `end`.
    pub fn direction(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    pub fn length(&self) -> f64 {
        let (dx, dy) = self.direction();
        dx.hypot(dy)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            0.5 * (self.start.x + self.end.x),
            0.5 * (self.start.y + self.end.y),
        )
    }

    /// Dot product of the two segments' direction vectors.
    pub fn dot(&self, other: &Segment) -> f64 {
        let (ax, ay) = self.direction();
        let (bx, by) = other.direction();
        ax * bx + ay * by
    }
}

/// Sample an axis-aligned ellipse centered on the origin.
///
/// The first and last samples coincide so the outline closes when drawn
/// as a polyline.
pub fn ellipse_points(semi_major: f64, semi_minor: f64, samples: usize) -> Vec<Point> {
    let samples = samples.max(3);
    (0..=samples)
        .map(|i| {
            let t = TAU * i as f64 / samples as f64;
            Point::new(semi_major * t.cos(), semi_minor * t.sin())
        })
        .collect()
}
