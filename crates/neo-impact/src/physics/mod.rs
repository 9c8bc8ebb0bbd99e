//! Impact physics: energy, crater size, and severity classification

pub mod energy;
pub mod severity;

pub use energy::{
    crater_diameter, crater_diameter_in, estimate_impact_velocity, impact_energy_kilotons,
    impact_energy_megatons, kinetic_energy_joules, sphere_mass, sphere_volume,
    JOULES_PER_KILOTON, JOULES_PER_MEGATON,
};
pub use severity::{classify_severity, SeverityBand, SeverityTier, SEVERITY_LADDER};

use serde::{Deserialize, Serialize};

/// Derived impact figures for a catalog object (kiloton scale)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactStatistics {
    pub mass_kg: f64,
    pub mass_tons: f64,
    pub volume_m3: f64,
    pub impact_velocity_km_s: f64,
    pub energy_kilotons: f64,
    pub energy_megatons: f64,
    pub scale_category: SeverityTier,
    pub description: String,
    pub historical_comparison: String,
}

impl ImpactStatistics {
    /// Compute statistics for a body of the given diameter on an orbit with
    /// the given semi-major axis
    pub fn compute(diameter_m: f64, semi_major_axis_au: f64, density_kg_m3: f64) -> Self {
        let mass_kg = sphere_mass(diameter_m, density_kg_m3);
        let impact_velocity_km_s = estimate_impact_velocity(semi_major_axis_au);
        let energy_kilotons = impact_energy_kilotons(diameter_m, impact_velocity_km_s, density_kg_m3);
        let band = classify_severity(energy_kilotons);

        Self {
            mass_kg,
            mass_tons: mass_kg / 1000.0,
            volume_m3: sphere_volume(diameter_m),
            impact_velocity_km_s,
            energy_kilotons,
            energy_megatons: energy_kilotons / 1000.0,
            scale_category: band.tier,
            description: band.description.to_string(),
            historical_comparison: band.historical_comparison.to_string(),
        }
    }
}
