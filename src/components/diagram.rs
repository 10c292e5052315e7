use crate::physics::{Point, Segment};
use leptos::*;

/// Maps a rectangle of world coordinates (y up) onto an SVG viewBox (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, width: f64, height: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            width,
            height,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn x(&self, x: f64) -> f64 {
        (x - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    pub fn y(&self, y: f64) -> f64 {
        (self.y_max - y) / (self.y_max - self.y_min) * self.height
    }

    pub fn point(&self, p: Point) -> (f64, f64) {
        (self.x(p.x), self.y(p.y))
    }

    /// SVG units per world unit along x, for radii and stroke lengths.
    pub fn scale(&self) -> f64 {
        self.width / (self.x_max - self.x_min)
    }

    /// Format world points as an SVG `points` attribute.
    pub fn polyline(&self, points: &[Point]) -> String {
        points
            .iter()
            .map(|&p| {
                let (x, y) = self.point(p);
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A world-space segment drawn as an SVG `<line>`.
#[component]
pub fn SegmentLine(
    viewport: Viewport,
    segment: Segment,
    /// CSS class of the line, e.g. `axis` or `equator`
    kind: &'static str,
    #[prop(optional)] marker_end: Option<&'static str>,
) -> impl IntoView {
    let (x1, y1) = viewport.point(segment.start);
    let (x2, y2) = viewport.point(segment.end);
    view! {
        <line
            x1=x1
            y1=y1
            x2=x2
            y2=y2
            class=kind
            marker-end=marker_end.map(|id| format!("url(#{})", id))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 320.0, 320.0);

    #[test]
    fn test_corners_and_center() {
        assert_eq!(VIEW.point(Point::new(-2.0, 2.0)), (0.0, 0.0));
        assert_eq!(VIEW.point(Point::new(2.0, -2.0)), (320.0, 320.0));
        assert_eq!(VIEW.point(Point::ORIGIN), (160.0, 160.0));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let (_, up) = VIEW.point(Point::new(0.0, 1.0));
        let (_, down) = VIEW.point(Point::new(0.0, -1.0));
        assert!(up < down);
    }

    #[test]
    fn test_scale_and_view_box() {
        assert_eq!(VIEW.scale(), 80.0);
        assert_eq!(VIEW.view_box(), "0 0 320 320");
        let wide = Viewport::new(-4.0, 4.0, -3.2, 3.2, 400.0, 320.0);
        assert_eq!(wide.scale(), 50.0);
        assert_eq!(wide.y(0.0), 160.0);
    }

    #[test]
    fn test_polyline_format() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(VIEW.polyline(&points), "160.0,160.0 240.0,80.0");
        assert_eq!(VIEW.polyline(&[]), "");
    }
}
