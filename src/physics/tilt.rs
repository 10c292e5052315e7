use super::geometry::{Point, Segment};
use super::PhysicsError;

pub const MIN_TILT_DEG: f64 = 21.5;
pub const MAX_TILT_DEG: f64 = 24.5;
pub const DEFAULT_TILT_DEG: f64 = 23.5;

/// Half-length of the drawn rotation axis; it pokes out past the unit disc.
pub const AXIS_HALF_LENGTH: f64 = 1.5;
pub const EARTH_RADIUS: f64 = 1.0;

/// Sunlight arrow: starts right of the planet and stops short of its disc.
const SUNLIGHT_TAIL: Point = Point::new(1.8, 0.5);
const SUNLIGHT_LENGTH: f64 = 0.8;

/// Earth's axial tilt (obliquity) in degrees, limited to the range Earth
/// actually swings through.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AxialTilt(f64);

impl AxialTilt {
    pub fn new(degrees: f64) -> Result<Self, PhysicsError> {
        if degrees.is_finite() && (MIN_TILT_DEG..=MAX_TILT_DEG).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(PhysicsError::OutOfDomain {
                quantity: "axial tilt",
                value: degrees,
                min: MIN_TILT_DEG,
                max: MAX_TILT_DEG,
            })
        }
    }

    /// Clamp an arbitrary value into the supported range (NaN maps to the default).
    pub fn clamped(degrees: f64) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(MIN_TILT_DEG, MAX_TILT_DEG))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl Default for AxialTilt {
    fn default() -> Self {
        Self(DEFAULT_TILT_DEG)
    }
}

/// Line work for the tilted-Earth diagram, in units of the planet radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltGeometry {
    pub tilt: AxialTilt,
    pub radius: f64,
    /// Rotation axis through both poles.
    pub axis: Segment,
    /// Equator seen edge-on, always perpendicular to `axis`.
    pub equator: Segment,
    /// Incoming sunlight, pointing toward the planet.
    pub sunlight: Segment,
}

/// Rotate the axis and equator lines of a unit-circle Earth by `tilt`.
///
/// The axis direction is `(sin θ, cos θ)` and the equator direction is
/// `(cos θ, -sin θ)`, so their dot product vanishes for every θ.
pub fn tilt_geometry(tilt: AxialTilt) -> TiltGeometry {
    let (sin, cos) = tilt.degrees().to_radians().sin_cos();
    TiltGeometry {
        tilt,
        radius: EARTH_RADIUS,
        axis: Segment::centered(Point::ORIGIN, AXIS_HALF_LENGTH * sin, AXIS_HALF_LENGTH * cos),
        equator: Segment::centered(Point::ORIGIN, EARTH_RADIUS * cos, -EARTH_RADIUS * sin),
        sunlight: Segment {
            start: SUNLIGHT_TAIL,
            end: SUNLIGHT_TAIL.offset(-SUNLIGHT_LENGTH, 0.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tilt_domain_validation() {
        assert!(AxialTilt::new(21.5).is_ok());
        assert!(AxialTilt::new(24.5).is_ok());
        assert!(AxialTilt::new(23.44).is_ok());

        for bad in [21.4, 24.6, 0.0, -23.5, f64::NAN, f64::INFINITY] {
            match AxialTilt::new(bad) {
                Err(PhysicsError::OutOfDomain { quantity, min, max, .. }) => {
                    assert_eq!(quantity, "axial tilt");
                    assert_eq!(min, MIN_TILT_DEG);
                    assert_eq!(max, MAX_TILT_DEG);
                }
                other => panic!("tilt {} should be rejected, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_clamped_tilt() {
        assert_eq!(AxialTilt::clamped(30.0).degrees(), MAX_TILT_DEG);
        assert_eq!(AxialTilt::clamped(-5.0).degrees(), MIN_TILT_DEG);
        assert_eq!(AxialTilt::clamped(22.0).degrees(), 22.0);
        assert_eq!(AxialTilt::clamped(f64::NAN), AxialTilt::default());
    }

    #[test]
    fn test_axis_endpoints() {
        let geom = tilt_geometry(AxialTilt::default());
        let theta = DEFAULT_TILT_DEG.to_radians();
        assert_abs_diff_eq!(geom.axis.end.x, 1.5 * theta.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(geom.axis.end.y, 1.5 * theta.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(geom.axis.start.x, -geom.axis.end.x, epsilon = 1e-12);
        assert_abs_diff_eq!(geom.axis.length(), 2.0 * AXIS_HALF_LENGTH, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_on_unit_circle() {
        let geom = tilt_geometry(AxialTilt::new(22.0).unwrap());
        for p in [geom.equator.start, geom.equator.end] {
            assert_abs_diff_eq!(p.x.hypot(p.y), EARTH_RADIUS, epsilon = 1e-12);
        }
        // Equator dips on the +x side as the axis leans toward +x
        assert!(geom.equator.end.y < 0.0);
    }

    #[test]
    fn test_axis_perpendicular_to_equator() {
        let mut deg = MIN_TILT_DEG;
        while deg <= MAX_TILT_DEG + 1e-9 {
            let geom = tilt_geometry(AxialTilt::clamped(deg));
            assert_abs_diff_eq!(geom.axis.dot(&geom.equator), 0.0, epsilon = 1e-12);
            deg += 0.1;
        }
    }

    #[test]
    fn test_sunlight_stays_outside_planet() {
        let geom = tilt_geometry(AxialTilt::default());
        let tip = geom.sunlight.end;
        assert!(tip.x.hypot(tip.y) > geom.radius);
        assert!(geom.sunlight.direction().0 < 0.0);
    }
}
