//! # Sample Near Earth Objects
//!
//! Hand-picked well-known NEOs used when the live orbital source is
//! unreachable. Diameters are single published estimates, so min and max
//! coincide.
//!
//! Fields: name, id, diameter (m), a (AU), hazardous

use crate::types::OrbitalElement;

/// Source label for catalogs built from the sample list
pub const SAMPLE_SOURCE_NAME: &str = "Sample Data (NASA NEO API unavailable)";

/// `api_url` recorded for sample catalogs
pub const SAMPLE_API_URL: &str = "sample";

/// Eccentricity assumed for every sample object
pub const SAMPLE_ECCENTRICITY: f64 = 0.1;

/// Angular spacing (degrees) between consecutive sample objects
pub const SAMPLE_ANGLE_STEP_DEG: f64 = 36.0;

/// Inclination step (degrees) between consecutive sample objects
pub const SAMPLE_INCLINATION_STEP_DEG: f64 = 5.0;

struct SampleNeo {
    name: &'static str,
    id: &'static str,
    diameter_m: f64,
    a: f64,
    hazardous: bool,
}

const SAMPLE_NEOS: [SampleNeo; 10] = [
    // Amors
    SampleNeo { name: "433 Eros", id: "2000433", diameter_m: 16840.0, a: 1.46, hazardous: false },
    SampleNeo { name: "1036 Ganymed", id: "1001036", diameter_m: 31660.0, a: 2.66, hazardous: false },
    // Apollos and Atens
    SampleNeo { name: "1566 Icarus", id: "1001566", diameter_m: 1400.0, a: 1.08, hazardous: true },
    SampleNeo { name: "2062 Aten", id: "2002062", diameter_m: 800.0, a: 0.97, hazardous: true },
    SampleNeo { name: "3122 Florence", id: "3003122", diameter_m: 4500.0, a: 1.77, hazardous: true },
    SampleNeo { name: "4179 Toutatis", id: "4004179", diameter_m: 2500.0, a: 2.53, hazardous: true },
    SampleNeo { name: "4660 Nereus", id: "4004660", diameter_m: 330.0, a: 1.49, hazardous: true },
    // Mission targets
    SampleNeo { name: "99942 Apophis", id: "2099942", diameter_m: 370.0, a: 0.92, hazardous: true },
    SampleNeo { name: "101955 Bennu", id: "2101955", diameter_m: 492.0, a: 1.13, hazardous: true },
    SampleNeo { name: "162173 Ryugu", id: "2162173", diameter_m: 900.0, a: 1.19, hazardous: false },
];

/// Returns the sample objects in their fixed order; object `i` has
/// inclination `5·i` degrees
pub fn sample_elements() -> Vec<OrbitalElement> {
    SAMPLE_NEOS
        .iter()
        .enumerate()
        .map(|(i, neo)| OrbitalElement {
            id: neo.id.to_string(),
            name: neo.name.to_string(),
            semi_major_axis_au: neo.a,
            eccentricity: SAMPLE_ECCENTRICITY,
            inclination_deg: i as f64 * SAMPLE_INCLINATION_STEP_DEG,
            diameter_min_m: neo.diameter_m,
            diameter_max_m: neo.diameter_m,
            is_hazardous: neo.hazardous,
        })
        .collect()
}

/// Placement angle of sample object `index`
pub fn sample_angle(index: usize) -> f64 {
    (index as f64 * SAMPLE_ANGLE_STEP_DEG) % 360.0
}
