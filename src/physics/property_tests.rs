//! Properties that span several formula groups: output ranges over whole
//! parameter sweeps, agreement between modules, and repeatability.

use super::*;

fn sweep(start: f64, end: f64, step: f64) -> Vec<f64> {
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

#[test]
fn solar_energy_stays_within_percent_range() {
    for lat in sweep(-400.0, 400.0, 12.5) {
        for tilt in sweep(-90.0, 90.0, 7.5) {
            for angle in sweep(-360.0, 720.0, 15.0) {
                let e = solar_energy(lat, tilt, angle);
                assert!(
                    (0.0..=100.0).contains(&e),
                    "energy {} out of range at lat {}, tilt {}, angle {}",
                    e,
                    lat,
                    tilt,
                    angle
                );
                let zenith = (lat - declination(angle, tilt)).abs();
                if zenith >= 90.0 {
                    assert_eq!(e, 0.0, "sun below horizon must give zero at lat {}", lat);
                }
            }
        }
    }
}

#[test]
fn tilt_sweep_keeps_axis_and_equator_orthogonal() {
    for deg in sweep(MIN_TILT_DEG, MAX_TILT_DEG, 0.1) {
        let geom = tilt_geometry(AxialTilt::clamped(deg));
        assert!(geom.axis.dot(&geom.equator).abs() < 1e-12, "not orthogonal at {}°", deg);
    }
}

#[test]
fn seasonal_energy_table_matches_direct_formula() {
    for tilt in sweep(MIN_TILT_DEG, MAX_TILT_DEG, 0.5) {
        for row in seasonal_energies(DEFAULT_LATITUDE_DEG, tilt) {
            assert_eq!(
                row.energy_pct,
                solar_energy(DEFAULT_LATITUDE_DEG, tilt, row.season.longitude_deg())
            );
        }
    }
}

#[test]
fn northern_summer_beats_winter_for_every_supported_tilt() {
    for tilt in sweep(MIN_TILT_DEG, MAX_TILT_DEG, 0.1) {
        let summer = solar_energy(DEFAULT_LATITUDE_DEG, tilt, Season::Summer.longitude_deg());
        let winter = solar_energy(DEFAULT_LATITUDE_DEG, tilt, Season::Winter.longitude_deg());
        assert!(summer > winter, "tilt {}: summer {} <= winter {}", tilt, summer, winter);
    }
}

#[test]
fn aphelion_never_exceeds_perihelion() {
    for e in sweep(MIN_ECCENTRICITY, MAX_ECCENTRICITY, 0.005) {
        let energy = orbital_energy(Eccentricity::clamped(e));
        assert_eq!(energy.perihelion_pct, 100.0);
        assert!(energy.aphelion_pct <= energy.perihelion_pct);
        if e > 0.0 {
            assert!(energy.aphelion_pct < 100.0);
        }
    }
}

#[test]
fn precession_reversal_is_a_step_function() {
    let orbit = OrbitEllipse::default();
    let flags: Vec<bool> = CyclePosition::ALL
        .iter()
        .map(|&p| precession_diagram(orbit, p).seasons_reversed)
        .collect();
    assert_eq!(flags, vec![false, true, false]);

    for position in CyclePosition::ALL {
        let diagram = precession_diagram(orbit, position);
        assert_eq!(diagram.aphelion.season, diagram.perihelion.season.opposite());
    }
}

#[test]
fn precession_axis_matches_tilt_geometry_direction() {
    // The markers on the orbit lean the same way as the close-up diagram at 23.5°.
    let close_up = tilt_geometry(AxialTilt::default());
    let diagram = precession_diagram(OrbitEllipse::default(), CyclePosition::Start);
    let (ax, ay) = close_up.axis.direction();
    let (mx, my) = diagram.perihelion.axis.direction();
    assert!((ax / ay - mx / my).abs() < 1e-12);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let tilt = AxialTilt::new(22.7).unwrap();
    assert_eq!(tilt_geometry(tilt), tilt_geometry(tilt));

    let a = solar_energy(37.0, 22.7, 123.0);
    let b = solar_energy(37.0, 22.7, 123.0);
    assert_eq!(a.to_bits(), b.to_bits());

    let orbit = OrbitEllipse::default();
    assert_eq!(
        precession_diagram(orbit, CyclePosition::HalfCycle),
        precession_diagram(orbit, CyclePosition::HalfCycle)
    );

    let ecc = Eccentricity::new(0.043).unwrap();
    let first = eccentricity_diagram(ecc);
    let second = eccentricity_diagram(ecc);
    assert_eq!(first, second);
    assert_eq!(
        first.energy.aphelion_pct.to_bits(),
        second.energy.aphelion_pct.to_bits()
    );

    let csv = "year,temp\n1990,14.1\n2000,14.3\n2010,14.6\n";
    assert_eq!(fit_csv(csv), fit_csv(csv));
}
