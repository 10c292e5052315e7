use super::geometry::{ellipse_points, Point};
use super::PhysicsError;

pub const MIN_ECCENTRICITY: f64 = 0.0;
pub const MAX_ECCENTRICITY: f64 = 0.2;
/// Present-day eccentricity of Earth's orbit.
pub const DEFAULT_ECCENTRICITY: f64 = 0.0167;

/// Real eccentricities are too small to see, so the drawn ellipse uses
/// this multiple of the true value.
pub const DISPLAY_EXAGGERATION: f64 = 1.5;
const MAX_DISPLAY_ECCENTRICITY: f64 = 0.99;
const ORBIT_SAMPLES: usize = 120;

/// Orbital eccentricity, limited to the range Earth's orbit can reach.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Eccentricity(f64);

impl Eccentricity {
    pub fn new(value: f64) -> Result<Self, PhysicsError> {
        if value.is_finite() && (MIN_ECCENTRICITY..=MAX_ECCENTRICITY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PhysicsError::OutOfDomain {
                quantity: "eccentricity",
                value,
                min: MIN_ECCENTRICITY,
                max: MAX_ECCENTRICITY,
            })
        }
    }

    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_ECCENTRICITY, MAX_ECCENTRICITY))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Eccentricity of the drawn ellipse.
    pub fn display_value(&self) -> f64 {
        (self.0 * DISPLAY_EXAGGERATION).min(MAX_DISPLAY_ECCENTRICITY)
    }
}

impl Default for Eccentricity {
    fn default() -> Self {
        Self(DEFAULT_ECCENTRICITY)
    }
}

/// Sunlight received at the two apsides, relative to perihelion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalEnergy {
    /// Perihelion distance in units of the semi-major axis.
    pub perihelion_distance: f64,
    pub aphelion_distance: f64,
    pub perihelion_pct: f64,
    pub aphelion_pct: f64,
}

impl OrbitalEnergy {
    /// How much weaker aphelion sunlight is, in percentage points.
    pub fn contrast_pct(&self) -> f64 {
        self.perihelion_pct - self.aphelion_pct
    }
}

/// Inverse-square comparison of perihelion and aphelion sunlight.
///
/// Uses the true eccentricity; perihelion is normalized to exactly 100%.
pub fn orbital_energy(ecc: Eccentricity) -> OrbitalEnergy {
    let e = ecc.value();
    let r_peri = 1.0 - e;
    let r_aphe = 1.0 + e;
    let flux_peri = 1.0 / (r_peri * r_peri);
    let flux_aphe = 1.0 / (r_aphe * r_aphe);
    OrbitalEnergy {
        perihelion_distance: r_peri,
        aphelion_distance: r_aphe,
        perihelion_pct: 100.0,
        aphelion_pct: flux_aphe / flux_peri * 100.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EccentricityDiagram {
    pub eccentricity: Eccentricity,
    /// Exaggerated eccentricity used for the drawing only.
    pub display_eccentricity: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub orbit_path: Vec<Point>,
    /// Sun at the drawn ellipse's focus.
    pub sun: Point,
    pub perihelion: Point,
    pub aphelion: Point,
    pub energy: OrbitalEnergy,
}

/// Lay out the eccentricity page: a legible ellipse plus the true energy ratio.
pub fn eccentricity_diagram(ecc: Eccentricity) -> EccentricityDiagram {
    let e_vis = ecc.display_value();
    let semi_major = 1.0;
    let semi_minor = semi_major * (1.0 - e_vis * e_vis).sqrt();
    EccentricityDiagram {
        eccentricity: ecc,
        display_eccentricity: e_vis,
        semi_major,
        semi_minor,
        orbit_path: ellipse_points(semi_major, semi_minor, ORBIT_SAMPLES),
        sun: Point::new(semi_major * e_vis, 0.0),
        perihelion: Point::new(semi_major, 0.0),
        aphelion: Point::new(-semi_major, 0.0),
        energy: orbital_energy(ecc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_eccentricity_validation() {
        assert!(Eccentricity::new(0.0).is_ok());
        assert!(Eccentricity::new(0.2).is_ok());
        assert!(Eccentricity::new(0.0167).is_ok());
        for bad in [-0.001, 0.2001, 0.5, f64::NAN] {
            assert!(
                matches!(
                    Eccentricity::new(bad),
                    Err(PhysicsError::OutOfDomain { quantity: "eccentricity", .. })
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_circular_orbit_has_equal_energy() {
        let energy = orbital_energy(Eccentricity::new(0.0).unwrap());
        assert_eq!(energy.perihelion_pct, 100.0);
        assert_eq!(energy.aphelion_pct, 100.0);
        assert_eq!(energy.contrast_pct(), 0.0);
    }

    #[test]
    fn test_present_day_energy_contrast() {
        let energy = orbital_energy(Eccentricity::default());
        assert_eq!(energy.perihelion_pct, 100.0);
        assert!(energy.aphelion_pct < 100.0);
        // ((1 - e) / (1 + e))^2 ≈ 0.9354 for e = 0.0167
        assert_abs_diff_eq!(energy.aphelion_pct, 93.54, epsilon = 0.01);
        assert_abs_diff_eq!(energy.perihelion_distance, 0.9833, epsilon = 1e-12);
        assert_abs_diff_eq!(energy.aphelion_distance, 1.0167, epsilon = 1e-12);
    }

    #[test]
    fn test_aphelion_falls_as_eccentricity_grows() {
        let mut previous = 100.0;
        for step in 1..=40 {
            let e = step as f64 * 0.005;
            let energy = orbital_energy(Eccentricity::clamped(e));
            assert!(energy.aphelion_pct < previous, "aphelion should drop at e = {}", e);
            assert_eq!(energy.perihelion_pct, 100.0);
            previous = energy.aphelion_pct;
        }
    }

    #[test]
    fn test_display_is_exaggerated_but_energy_is_not() {
        let ecc = Eccentricity::new(0.1).unwrap();
        let diagram = eccentricity_diagram(ecc);
        assert_abs_diff_eq!(diagram.display_eccentricity, 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(diagram.sun.x, 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(diagram.energy.perihelion_distance, 0.9, epsilon = 1e-12);
        let expected_minor = (1.0_f64 - 0.15 * 0.15).sqrt();
        assert_abs_diff_eq!(diagram.semi_minor, expected_minor, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_at_zero_eccentricity() {
        let diagram = eccentricity_diagram(Eccentricity::new(0.0).unwrap());
        assert_eq!(diagram.semi_minor, diagram.semi_major);
        assert_eq!(diagram.sun, Point::ORIGIN);
    }

    #[test]
    fn test_display_eccentricity_is_capped() {
        // Only reachable through direct construction in tests; the public
        // constructor already stops at 0.2.
        let wild = Eccentricity(0.9);
        assert_eq!(wild.display_value(), MAX_DISPLAY_ECCENTRICITY);
    }
}
