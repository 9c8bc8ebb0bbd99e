//! Kinetic energy and crater scaling for a spherical impactor
//!
//! Every function here is total: a non-positive (or NaN) diameter, velocity
//! or density produces zero energy instead of an error.

use std::f64::consts::PI;

/// Joules per megaton of TNT (simulation path)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Joules per kiloton of TNT (catalog path)
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Target rock density used for crater scaling (sedimentary rock)
pub const DEFAULT_TARGET_DENSITY_KG_M3: f64 = 1800.0;

/// Transient crater scaling coefficient
const CRATER_COEFFICIENT: f64 = 1.161;

/// Transient crater scaling exponent denominator
const CRATER_EXPONENT_DENOMINATOR: f64 = 3.4;

/// Transient-to-final widening from gravity-driven collapse
const CRATER_COLLAPSE_FACTOR: f64 = 1.25;

fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Volume of a sphere of the given diameter (m³)
pub fn sphere_volume(diameter_m: f64) -> f64 {
    let radius_m = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius_m.powi(3)
}

/// Mass of a homogeneous sphere (kg)
pub fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    sphere_volume(diameter_m) * density_kg_m3
}

/// Kinetic energy in joules, `0.5 · m · v²`
pub fn kinetic_energy_joules(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> f64 {
    if !is_positive(diameter_m) || !is_positive(velocity_km_s) || !is_positive(density_kg_m3) {
        return 0.0;
    }
    let velocity_ms = velocity_km_s * 1000.0;
    0.5 * sphere_mass(diameter_m, density_kg_m3) * velocity_ms * velocity_ms
}

/// Impact energy in megatons of TNT
pub fn impact_energy_megatons(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> f64 {
    kinetic_energy_joules(diameter_m, velocity_km_s, density_kg_m3) / JOULES_PER_MEGATON
}

/// Impact energy in kilotons of TNT
pub fn impact_energy_kilotons(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> f64 {
    kinetic_energy_joules(diameter_m, velocity_km_s, density_kg_m3) / JOULES_PER_KILOTON
}

/// Final crater diameter (m) for an impact of the given energy in megatons,
/// into the default target rock
pub fn crater_diameter(energy_megatons: f64) -> f64 {
    crater_diameter_in(energy_megatons, DEFAULT_TARGET_DENSITY_KG_M3)
}

/// Final crater diameter (m) for a specific target density
pub fn crater_diameter_in(energy_megatons: f64, target_density_kg_m3: f64) -> f64 {
    if !is_positive(energy_megatons) || !is_positive(target_density_kg_m3) {
        return 0.0;
    }
    let energy_joules = energy_megatons * JOULES_PER_MEGATON;
    let transient = CRATER_COEFFICIENT
        * (energy_joules / target_density_kg_m3).powf(1.0 / CRATER_EXPONENT_DENOMINATOR);
    transient * CRATER_COLLAPSE_FACTOR
}

/// Typical Earth-relative impact velocity (km/s) by semi-major axis bucket
pub fn estimate_impact_velocity(semi_major_axis_au: f64) -> f64 {
    if semi_major_axis_au < 1.0 {
        25.0
    } else if semi_major_axis_au < 1.3 {
        20.0
    } else if semi_major_axis_au < 2.0 {
        15.0
    } else {
        12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        ((a - b) / b).abs() < rel
    }

    #[test]
    fn test_reference_impact() {
        // 1 km stony body at 20 km/s: ~3.14e20 J
        let joules = kinetic_energy_joules(1000.0, 20.0, 3000.0);
        assert!(close(joules, 3.141_592_65e20, 1e-6));

        let mt = impact_energy_megatons(1000.0, 20.0, 3000.0);
        assert!(close(mt, 75_085.87, 1e-6));

        let kt = impact_energy_kilotons(1000.0, 20.0, 3000.0);
        assert!(close(kt, mt * 1000.0, 1e-12));
    }

    #[test]
    fn test_degenerate_inputs_are_zero() {
        assert_eq!(impact_energy_megatons(0.0, 20.0, 3000.0), 0.0);
        assert_eq!(impact_energy_megatons(100.0, -1.0, 3000.0), 0.0);
        assert_eq!(impact_energy_kilotons(100.0, 20.0, 0.0), 0.0);
        assert_eq!(impact_energy_megatons(f64::NAN, 20.0, 3000.0), 0.0);
    }

    #[test]
    fn test_crater_diameter() {
        assert_eq!(crater_diameter(0.0), 0.0);
        assert_eq!(crater_diameter(-5.0), 0.0);

        // 1 Mt: 1.161 * (4.184e15 / 1800)^(1/3.4) * 1.25
        let expected = 1.161 * (4.184e15_f64 / 1800.0).powf(1.0 / 3.4) * 1.25;
        assert!(close(crater_diameter(1.0), expected, 1e-12));
    }

    #[test]
    fn test_velocity_buckets() {
        assert_eq!(estimate_impact_velocity(0.92), 25.0);
        assert_eq!(estimate_impact_velocity(1.0), 20.0);
        assert_eq!(estimate_impact_velocity(1.29), 20.0);
        assert_eq!(estimate_impact_velocity(1.3), 15.0);
        assert_eq!(estimate_impact_velocity(1.99), 15.0);
        assert_eq!(estimate_impact_velocity(2.0), 12.0);
        assert_eq!(estimate_impact_velocity(2.66), 12.0);
    }

    proptest! {
        #[test]
        fn prop_energy_monotonic(
            d in 1.0f64..5000.0,
            v in 1.0f64..70.0,
            rho in 500.0f64..8000.0,
            bump in 1.01f64..3.0,
        ) {
            let base = impact_energy_megatons(d, v, rho);
            prop_assert!(impact_energy_megatons(d * bump, v, rho) > base);
            prop_assert!(impact_energy_megatons(d, v * bump, rho) > base);
            prop_assert!(impact_energy_megatons(d, v, rho * bump) > base);
        }

        #[test]
        fn prop_non_positive_input_gives_zero(
            bad in -1.0e6f64..=0.0,
            d in 1.0f64..5000.0,
            v in 1.0f64..70.0,
            rho in 500.0f64..8000.0,
        ) {
            prop_assert_eq!(impact_energy_megatons(bad, v, rho), 0.0);
            prop_assert_eq!(impact_energy_megatons(d, bad, rho), 0.0);
            prop_assert_eq!(impact_energy_megatons(d, v, bad), 0.0);
            prop_assert_eq!(impact_energy_kilotons(bad, bad, bad), 0.0);
        }

        #[test]
        fn prop_crater_strictly_increasing(e in 1.0e-9f64..1.0e9, bump in 1.001f64..10.0) {
            prop_assert!(crater_diameter(e * bump) > crater_diameter(e));
        }
    }
}
