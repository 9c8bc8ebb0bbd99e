//! Catalog assembly from raw orbital elements

use chrono::Utc;
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::sample::{sample_angle, sample_elements, SAMPLE_API_URL, SAMPLE_SOURCE_NAME};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::physics::ImpactStatistics;
use crate::providers::OrbitalDataSource;
use crate::trajectory::{self, Point3};
use crate::types::{CatalogDocument, NeoRecord, OrbitalElement};

/// Scene units per AU before clamping
const SCENE_UNITS_PER_AU: f64 = 50.0;
const MIN_ORBIT_RADIUS: f64 = 80.0;
const MAX_ORBIT_RADIUS: f64 = 300.0;

const SIZE_SCALE: f64 = 0.3;
const MIN_SIZE: f64 = 0.2;
const MAX_SIZE: f64 = 2.0;

/// Scene-scaled gravitational parameter
const GM: f64 = 1.0;
const VELOCITY_SCALE: f64 = 0.1;

/// Turns orbital elements into visualization-ready catalog records
#[derive(Debug, Clone)]
pub struct NeoCatalogBuilder {
    density_kg_m3: f64,
    trajectory_points: usize,
    orbit_fraction: f64,
}

impl Default for NeoCatalogBuilder {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl NeoCatalogBuilder {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            density_kg_m3: config.default_density_kg_m3,
            trajectory_points: config.trajectory_points,
            orbit_fraction: config.orbit_fraction,
        }
    }

    /// Build one record, placing it at the hash-derived angle of its id
    pub fn build_record(&self, element: &OrbitalElement) -> Result<NeoRecord> {
        self.build_record_at(element, placement_angle(&element.id))
    }

    fn build_record_at(&self, element: &OrbitalElement, angle_deg: f64) -> Result<NeoRecord> {
        let avg_diameter = element.average_diameter_m();
        if !(avg_diameter > 0.0) {
            return Err(Error::record_skipped(
                element.id.clone(),
                "estimated diameter is not positive",
            ));
        }
        if !(element.semi_major_axis_au > 0.0) {
            return Err(Error::record_skipped(
                element.id.clone(),
                "semi-major axis is not positive",
            ));
        }

        let orbit_radius = scene_orbit_radius(element.semi_major_axis_au);
        let placed = trajectory::place_on_orbit(orbit_radius, angle_deg, element.inclination_deg);
        let trajectory = trajectory::generate(
            &placed,
            orbit_radius,
            element.inclination_deg,
            element.eccentricity,
            self.trajectory_points,
            self.orbit_fraction,
        );
        // The rendered object must sit on its own path
        let position: Point3 = trajectory.first().copied().unwrap_or(placed);

        Ok(NeoRecord {
            name: element.name.clone(),
            id: element.id.clone(),
            position,
            diameter_meters: avg_diameter,
            diameter_min_meters: element.diameter_min_m,
            diameter_max_meters: element.diameter_max_m,
            orbit_radius_au: element.semi_major_axis_au,
            eccentricity: element.eccentricity,
            inclination: element.inclination_deg,
            is_hazardous: element.is_hazardous,
            size: display_size(avg_diameter),
            velocity: orbital_velocity(element.semi_major_axis_au, orbit_radius),
            trajectory,
            impact_stats: ImpactStatistics::compute(
                avg_diameter,
                element.semi_major_axis_au,
                self.density_kg_m3,
            ),
        })
    }

    /// Build a catalog from raw NeoWs records, skipping the ones that cannot
    /// be decoded or are non-physical
    pub fn build(&self, raw: &[Value], source: &str, api_url: &str) -> CatalogDocument {
        let mut neos = Vec::with_capacity(raw.len());
        let mut skipped = 0usize;

        for record in raw {
            match OrbitalElement::from_neows(record).and_then(|e| self.build_record(&e)) {
                Ok(neo) => {
                    tracing::debug!("Processed NEO {} ({})", neo.name, neo.id);
                    neos.push(neo);
                }
                Err(e) => {
                    tracing::warn!("Skipping NEO: {}", e);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Processed {} valid NEOs ({} skipped) from {}",
            neos.len(),
            skipped,
            source
        );

        CatalogDocument::assemble(neos, source, api_url, Utc::now())
    }

    /// Build the catalog from the fixed sample list
    pub fn build_fallback(&self) -> CatalogDocument {
        let neos = sample_elements()
            .iter()
            .enumerate()
            .filter_map(|(i, element)| match self.build_record_at(element, sample_angle(i)) {
                Ok(neo) => Some(neo),
                Err(e) => {
                    tracing::warn!("Skipping sample NEO: {}", e);
                    None
                }
            })
            .collect();

        CatalogDocument::assemble(neos, SAMPLE_SOURCE_NAME, SAMPLE_API_URL, Utc::now())
    }

    /// Fetch from `source` and build; falls back to the sample catalog when
    /// the source fails or yields no usable record
    pub async fn build_from_source(&self, source: &dyn OrbitalDataSource) -> CatalogDocument {
        match source.fetch_records().await {
            Ok(raw) => {
                tracing::info!("Retrieved {} raw NEOs from {}", raw.len(), source.name());
                let document = self.build(&raw, source.name(), source.url());
                if document.neos.is_empty() {
                    tracing::warn!("No valid NEO data from {}; using sample data", source.name());
                    self.build_fallback()
                } else {
                    document
                }
            }
            Err(e) => {
                tracing::warn!("{} unavailable ({}); using sample data", source.name(), e);
                self.build_fallback()
            }
        }
    }
}

/// Scene orbit radius for a semi-major axis in AU
pub fn scene_orbit_radius(semi_major_axis_au: f64) -> f64 {
    (semi_major_axis_au * SCENE_UNITS_PER_AU).clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS)
}

/// Marker size for a body of the given diameter
pub fn display_size(diameter_m: f64) -> f64 {
    (diameter_m.log10() * SIZE_SCALE).clamp(MIN_SIZE, MAX_SIZE)
}

/// Vis-viva speed at scene radius `current_radius` on an orbit with
/// semi-major axis `semi_major_axis`; circular speed when the vis-viva term
/// is not positive
pub fn orbital_velocity(semi_major_axis: f64, current_radius: f64) -> f64 {
    let inner = GM * (2.0 / current_radius - 1.0 / semi_major_axis);
    if inner <= 0.0 {
        (GM / current_radius).sqrt() * VELOCITY_SCALE
    } else {
        inner.sqrt() * VELOCITY_SCALE
    }
}

/// Stable placement angle in `[0, 360)` derived from an object id
pub fn placement_angle(id: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % 360) as f64
}
