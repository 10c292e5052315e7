mod eccentricity;
mod error;
mod geometry;
mod precession;
mod solar;
mod tilt;
mod trend;
#[cfg(test)]
mod property_tests;

pub use eccentricity::{
    eccentricity_diagram, orbital_energy, Eccentricity, EccentricityDiagram, OrbitalEnergy,
    DEFAULT_ECCENTRICITY, DISPLAY_EXAGGERATION, MAX_ECCENTRICITY, MIN_ECCENTRICITY,
};
pub use error::PhysicsError;
pub use geometry::{ellipse_points, Point, Segment};
pub use precession::{
    precession_diagram, CyclePosition, EarthMarker, OrbitEllipse, PrecessionDiagram,
    PRECESSION_CYCLE_YEARS,
};
pub use solar::{
    declination, seasonal_energies, solar_energy, Season, SeasonalEnergy, DEFAULT_LATITUDE_DEG,
};
pub use tilt::{
    tilt_geometry, AxialTilt, TiltGeometry, DEFAULT_TILT_DEG, MAX_TILT_DEG, MIN_TILT_DEG,
};
pub use trend::{
    fit_csv, fractional_year, parse_calendar_date, Observation, TemperatureSeries, TimeAxis,
    TrendFit, TrendReport, MAX_ROWS,
};
