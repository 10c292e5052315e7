/// Observer latitude used throughout the app (degrees north).
pub const DEFAULT_LATITUDE_DEG: f64 = 37.0;

/// A point in the seasonal cycle, identified by the Sun's ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Calendar order, which is also display order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Ecliptic longitude of the season's midpoint, in degrees.
    pub fn longitude_deg(&self) -> f64 {
        match self {
            Season::Spring => 0.0,
            Season::Summer => 90.0,
            Season::Autumn => 180.0,
            Season::Winter => 270.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// The season half a year away.
    pub fn opposite(&self) -> Season {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }
}

/// Solar declination in degrees for a given ecliptic longitude and axial tilt.
pub fn declination(season_angle_deg: f64, tilt_deg: f64) -> f64 {
    tilt_deg * season_angle_deg.to_radians().sin()
}

/// Relative noon solar energy at `lat_deg`, as a percentage of overhead sun.
///
/// The noon zenith angle is `|lat - declination|`. Energy scales with the
/// sine of the solar altitude `90 - zenith`, floored at zero once the Sun
/// stays below the horizon, and rounded to one decimal place.
pub fn solar_energy(lat_deg: f64, tilt_deg: f64, season_angle_deg: f64) -> f64 {
    let zenith = (lat_deg - declination(season_angle_deg, tilt_deg)).abs();
    if zenith.is_nan() || zenith >= 90.0 {
        return 0.0;
    }
    let altitude = (90.0 - zenith).to_radians();
    let fraction = altitude.sin().max(0.0);
    (fraction * 1000.0).round() / 10.0
}

/// Energy received in one season at a given latitude and tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalEnergy {
    pub season: Season,
    pub declination_deg: f64,
    pub energy_pct: f64,
}

/// Noon solar energy for each season, in calendar order.
pub fn seasonal_energies(lat_deg: f64, tilt_deg: f64) -> Vec<SeasonalEnergy> {
    Season::ALL
        .iter()
        .map(|&season| SeasonalEnergy {
            season,
            declination_deg: declination(season.longitude_deg(), tilt_deg),
            energy_pct: solar_energy(lat_deg, tilt_deg, season.longitude_deg()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declination_at_solstices_and_equinoxes() {
        assert!(declination(0.0, 23.5).abs() < 1e-12);
        assert!((declination(90.0, 23.5) - 23.5).abs() < 1e-12);
        assert!(declination(180.0, 23.5).abs() < 1e-12);
        assert!((declination(270.0, 23.5) + 23.5).abs() < 1e-12);
    }

    #[test]
    fn test_summer_beats_winter_at_default_latitude() {
        let summer = solar_energy(DEFAULT_LATITUDE_DEG, 23.5, 90.0);
        let winter = solar_energy(DEFAULT_LATITUDE_DEG, 23.5, 270.0);
        assert!(summer > winter, "summer {} should exceed winter {}", summer, winter);
        // zenith 13.5° -> sin(76.5°) ≈ 0.9724
        assert!((summer - 97.2).abs() < 1e-9);
        // zenith 60.5° -> sin(29.5°) ≈ 0.4924
        assert!((winter - 49.2).abs() < 1e-9);
    }

    #[test]
    fn test_equinox_energy_ignores_tilt() {
        let a = solar_energy(DEFAULT_LATITUDE_DEG, 21.5, 0.0);
        let b = solar_energy(DEFAULT_LATITUDE_DEG, 24.5, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overhead_sun_is_full_energy() {
        assert_eq!(solar_energy(23.5, 23.5, 90.0), 100.0);
    }

    #[test]
    fn test_sun_below_horizon_is_zero() {
        // Polar night: zenith = 90 + 23.5
        assert_eq!(solar_energy(90.0, 23.5, 270.0), 0.0);
        // Exactly on the horizon
        assert_eq!(solar_energy(90.0, 0.0, 0.0), 0.0);
        // Far beyond, where sin(90 - zenith) turns positive again
        assert_eq!(solar_energy(400.0, 23.5, 90.0), 0.0);
    }

    #[test]
    fn test_larger_tilt_means_stronger_summer_and_weaker_winter() {
        let summer_low = solar_energy(DEFAULT_LATITUDE_DEG, 21.5, 90.0);
        let summer_high = solar_energy(DEFAULT_LATITUDE_DEG, 24.5, 90.0);
        let winter_low = solar_energy(DEFAULT_LATITUDE_DEG, 21.5, 270.0);
        let winter_high = solar_energy(DEFAULT_LATITUDE_DEG, 24.5, 270.0);
        assert!(summer_high > summer_low);
        assert!(winter_high < winter_low);
    }

    #[test]
    fn test_seasonal_energies_in_calendar_order() {
        let table = seasonal_energies(DEFAULT_LATITUDE_DEG, 23.5);
        let seasons: Vec<_> = table.iter().map(|e| e.season).collect();
        assert_eq!(seasons, Season::ALL.to_vec());
        assert_eq!(table[0].energy_pct, table[2].energy_pct);
        assert!((table[1].declination_deg - 23.5).abs() < 1e-12);
    }

    #[test]
    fn test_season_opposites() {
        for season in Season::ALL {
            assert_eq!(season.opposite().opposite(), season);
            let gap = (season.opposite().longitude_deg() - season.longitude_deg()).abs();
            assert_eq!(gap, 180.0);
        }
    }
}
