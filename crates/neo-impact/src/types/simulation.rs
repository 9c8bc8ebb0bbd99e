//! Simulation and intensity request/response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::generation::NarrativeAnalysis;
use crate::types::neo::number_of;

/// Physical parameters of a hypothetical impactor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactInputs {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
}

/// Ground-zero coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Validated `/simulate` request body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRequest {
    pub meteorite: ImpactInputs,
    pub location: Location,
}

impl SimulationRequest {
    /// Validate a raw body of the form
    /// `{meteorite: {diameter, velocity, density}, location: {lat, lng}}`.
    pub fn from_json(body: &Value) -> Result<Self> {
        let body = body
            .as_object()
            .ok_or_else(|| Error::invalid_input("request body must be a JSON object"))?;

        let meteorite = body
            .get("meteorite")
            .ok_or_else(|| Error::invalid_input("missing 'meteorite'"))?;
        let location = body
            .get("location")
            .ok_or_else(|| Error::invalid_input("missing 'location'"))?;

        if location.get("lat").is_none() || location.get("lng").is_none() {
            return Err(Error::invalid_input("location must contain 'lat' and 'lng'"));
        }

        Ok(Self {
            meteorite: ImpactInputs {
                diameter_m: required_number(meteorite, "meteorite", "diameter")?,
                velocity_km_s: required_number(meteorite, "meteorite", "velocity")?,
                density_kg_m3: required_number(meteorite, "meteorite", "density")?,
            },
            location: Location {
                lat: required_number(location, "location", "lat")?,
                lng: required_number(location, "location", "lng")?,
            },
        })
    }
}

fn required_number(parent: &Value, parent_name: &str, field: &str) -> Result<f64> {
    let value = parent
        .get(field)
        .ok_or_else(|| Error::invalid_input(format!("missing '{}.{}'", parent_name, field)))?;
    number_of(value).ok_or_else(|| {
        Error::invalid_input(format!("'{}.{}' must be a number", parent_name, field))
    })
}

/// Validated `/intensity` request body; absent fields count as zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRequest {
    pub inputs: ImpactInputs,
}

impl IntensityRequest {
    pub fn from_json(body: &Value) -> Result<Self> {
        let field = |name: &str| -> Result<f64> {
            match body.get(name) {
                None | Some(Value::Null) => Ok(0.0),
                Some(v) => number_of(v)
                    .ok_or_else(|| Error::invalid_input(format!("'{}' must be a number", name))),
            }
        };

        Ok(Self {
            inputs: ImpactInputs {
                diameter_m: field("diameter")?,
                velocity_km_s: field("velocity")?,
                density_kg_m3: field("density")?,
            },
        })
    }
}

/// Figures handed to the narrative collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactFigures {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
    pub energy_megatons: f64,
    pub crater_diameter_m: f64,
}

/// Rounded physical effects of a simulated impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEffects {
    pub energy_megatons: f64,
    pub crater_diameter_meters: f64,
}

/// `/simulate` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub impact_effects: ImpactEffects,
    pub location: Location,
    pub narrative_analysis: NarrativeAnalysis,
}

/// `/intensity` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityResponse {
    /// Currently equal to `energy_megatons`
    pub intensity: f64,
    pub energy_megatons: f64,
    pub crater_diameter_meters: f64,
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_numeric_strings() {
        let req = SimulationRequest::from_json(&json!({
            "meteorite": {"diameter": "150", "velocity": 17.5, "density": "3000"},
            "location": {"lat": "19.43", "lng": -99.13}
        }))
        .unwrap();

        assert_eq!(req.meteorite.diameter_m, 150.0);
        assert_eq!(req.meteorite.velocity_km_s, 17.5);
        assert_eq!(req.location.lat, 19.43);
    }

    #[test]
    fn test_missing_sections() {
        let err = SimulationRequest::from_json(&json!({"location": {"lat": 0, "lng": 0}}))
            .unwrap_err();
        assert!(err.to_string().contains("meteorite"));

        let err = SimulationRequest::from_json(&json!({
            "meteorite": {"diameter": 1, "velocity": 1, "density": 1},
            "location": {"lat": 0}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("'lat' and 'lng'"));
    }

    #[test]
    fn test_bad_number_names_field() {
        let err = SimulationRequest::from_json(&json!({
            "meteorite": {"diameter": 10, "velocity": "fast", "density": 1},
            "location": {"lat": 0, "lng": 0}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("meteorite.velocity"));
    }

    #[test]
    fn test_intensity_defaults_to_zero() {
        let req = IntensityRequest::from_json(&json!({"diameter": 50})).unwrap();
        assert_eq!(req.inputs.diameter_m, 50.0);
        assert_eq!(req.inputs.velocity_km_s, 0.0);
        assert_eq!(req.inputs.density_kg_m3, 0.0);

        assert!(IntensityRequest::from_json(&json!({"density": [1]})).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
