use super::geometry::{ellipse_points, Point, Segment};
use super::solar::Season;
use super::PhysicsError;

/// Length of one full axial precession cycle, in years.
pub const PRECESSION_CYCLE_YEARS: u32 = 26_000;

/// Orbit drawn on the precession page.
pub const DIAGRAM_SEMI_MAJOR: f64 = 3.0;
pub const DIAGRAM_SEMI_MINOR: f64 = 2.5;

/// Tilt used for the Earth markers on the orbit (present-day obliquity).
pub const MARKER_TILT_DEG: f64 = 23.5;
/// Half-length of the axis line drawn through each Earth marker.
pub const MARKER_AXIS_HALF_LENGTH: f64 = 0.4;

const ORBIT_SAMPLES: usize = 120;

/// An elliptical orbit centered on the origin with its major axis along x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitEllipse {
    semi_major: f64,
    semi_minor: f64,
}

impl OrbitEllipse {
    pub fn new(semi_major: f64, semi_minor: f64) -> Result<Self, PhysicsError> {
        let valid = semi_major.is_finite() && semi_minor > 0.0 && semi_major > semi_minor;
        if valid {
            Ok(Self { semi_major, semi_minor })
        } else {
            Err(PhysicsError::InvalidOrbit { semi_major, semi_minor })
        }
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn eccentricity(&self) -> f64 {
        let ratio = self.semi_minor / self.semi_major;
        (1.0 - ratio * ratio).sqrt()
    }

    /// Distance from the center to either focus.
    pub fn focal_offset(&self) -> f64 {
        self.semi_major * self.eccentricity()
    }
}

impl Default for OrbitEllipse {
    fn default() -> Self {
        Self {
            semi_major: DIAGRAM_SEMI_MAJOR,
            semi_minor: DIAGRAM_SEMI_MINOR,
        }
    }
}

/// The three milestones the precession diagram can show.
///
/// Only the exact half-cycle reverses the seasons; there is no
/// interpolation between milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CyclePosition {
    #[default]
    Start,
    HalfCycle,
    FullCycle,
}

impl CyclePosition {
    pub const ALL: [CyclePosition; 3] = [
        CyclePosition::Start,
        CyclePosition::HalfCycle,
        CyclePosition::FullCycle,
    ];

    pub fn years(&self) -> u32 {
        match self {
            CyclePosition::Start => 0,
            CyclePosition::HalfCycle => PRECESSION_CYCLE_YEARS / 2,
            CyclePosition::FullCycle => PRECESSION_CYCLE_YEARS,
        }
    }

    pub fn from_years(years: u32) -> Result<Self, PhysicsError> {
        Self::ALL
            .into_iter()
            .find(|position| position.years() == years)
            .ok_or(PhysicsError::UnknownCyclePosition { years })
    }

    pub fn reverses_seasons(&self) -> bool {
        *self == CyclePosition::HalfCycle
    }

    pub fn label(&self) -> &'static str {
        match self {
            CyclePosition::Start => "Today",
            CyclePosition::HalfCycle => "Half cycle",
            CyclePosition::FullCycle => "Full cycle",
        }
    }
}

/// Earth drawn at one point of its orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthMarker {
    pub position: Point,
    pub axis: Segment,
    /// Northern-hemisphere season while Earth sits here.
    pub season: Season,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecessionDiagram {
    pub position: CyclePosition,
    pub orbit: OrbitEllipse,
    pub orbit_path: Vec<Point>,
    pub sun: Point,
    pub perihelion: EarthMarker,
    pub aphelion: EarthMarker,
    pub seasons_reversed: bool,
}

fn earth_marker(position: Point, lean: f64, season: Season) -> EarthMarker {
    let (sin, cos) = MARKER_TILT_DEG.to_radians().sin_cos();
    EarthMarker {
        position,
        axis: Segment::centered(
            position,
            lean * sin * MARKER_AXIS_HALF_LENGTH,
            cos * MARKER_AXIS_HALF_LENGTH,
        ),
        season,
    }
}

/// Lay out the precession diagram for one cycle milestone.
///
/// The Sun is drawn halfway between the center and the focus, a
/// simplified placement that keeps it visibly off-center. Perihelion and
/// aphelion stay fixed on the major axis; precession only flips which way
/// the axis leans and, with it, which season falls at each.
pub fn precession_diagram(orbit: OrbitEllipse, position: CyclePosition) -> PrecessionDiagram {
    let a = orbit.semi_major();
    let reversed = position.reverses_seasons();
    let (lean, perihelion_season) = if reversed {
        (-1.0, Season::Summer)
    } else {
        (1.0, Season::Winter)
    };

    PrecessionDiagram {
        position,
        orbit,
        orbit_path: ellipse_points(a, orbit.semi_minor(), ORBIT_SAMPLES),
        sun: Point::new(orbit.focal_offset() / 2.0, 0.0),
        perihelion: earth_marker(Point::new(a, 0.0), lean, perihelion_season),
        aphelion: earth_marker(Point::new(-a, 0.0), lean, perihelion_season.opposite()),
        seasons_reversed: reversed,
    }
}
