//! Orbital elements, catalog records, and the persisted catalog document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::physics::ImpactStatistics;
use crate::trajectory::{Point3, TrajectoryPoint};

/// Value of `metadata.type` for every catalog
pub const CATALOG_TYPE: &str = "near_earth_objects";

/// Raw orbital record as delivered by the orbital-data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElement {
    pub id: String,
    pub name: String,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub is_hazardous: bool,
}

impl OrbitalElement {
    /// Mean of the estimated diameter range
    pub fn average_diameter_m(&self) -> f64 {
        (self.diameter_min_m + self.diameter_max_m) / 2.0
    }

    /// Decode a NeoWs `near_earth_objects[]` entry.
    ///
    /// Numeric fields may arrive as JSON numbers or numeric strings (NeoWs
    /// sends orbital data as strings). Any missing or non-numeric required
    /// field yields [`Error::RecordSkipped`].
    pub fn from_neows(record: &Value) -> Result<Self> {
        let id = record
            .get("id")
            .and_then(text_of)
            .ok_or_else(|| Error::record_skipped("<unknown>", "missing id"))?;

        let skip = |reason: String| Error::record_skipped(id.clone(), reason);

        let name = record
            .get("name")
            .and_then(text_of)
            .ok_or_else(|| skip("missing name".to_string()))?;

        let number = |field: &str| -> Result<f64> {
            let pointer = format!("/{}", field.replace('.', "/"));
            let value = record
                .pointer(&pointer)
                .ok_or_else(|| skip(format!("missing {}", field)))?;
            number_of(value).ok_or_else(|| skip(format!("{} is not numeric", field)))
        };

        let diameter_min_m = number("estimated_diameter.meters.estimated_diameter_min")?;
        let diameter_max_m = number("estimated_diameter.meters.estimated_diameter_max")?;
        let semi_major_axis_au = number("orbital_data.semi_major_axis")?;
        let eccentricity = number("orbital_data.eccentricity")?;
        let inclination_deg = number("orbital_data.inclination")?;

        let is_hazardous = record
            .get("is_potentially_hazardous_asteroid")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(Self {
            id,
            name: clean_name(&name),
            semi_major_axis_au,
            eccentricity,
            inclination_deg,
            diameter_min_m,
            diameter_max_m,
            is_hazardous,
        })
    }
}

/// Strip the parentheses NeoWs wraps provisional designations in
pub fn clean_name(name: &str) -> String {
    name.chars().filter(|c| *c != '(' && *c != ')').collect()
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Interpret a JSON number or numeric string as a finite f64
pub(crate) fn number_of(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Visualization-ready catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub name: String,
    pub id: String,
    pub position: Point3,
    pub diameter_meters: f64,
    pub diameter_min_meters: f64,
    pub diameter_max_meters: f64,
    /// Semi-major axis in AU
    pub orbit_radius_au: f64,
    pub eccentricity: f64,
    /// Inclination in degrees
    pub inclination: f64,
    pub is_hazardous: bool,
    pub size: f64,
    pub velocity: f64,
    pub trajectory: Vec<TrajectoryPoint>,
    pub impact_stats: ImpactStatistics,
}

impl NeoRecord {
    /// Ranking score used for "largest impact" listings
    pub fn impact_score(&self) -> f64 {
        self.impact_stats.energy_kilotons
    }
}

/// Catalog header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub count: usize,
    pub hazardous_count: usize,
    pub last_updated: DateTime<Utc>,
    pub source: String,
    pub api_url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Persisted catalog: header plus records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub metadata: CatalogMetadata,
    pub neos: Vec<NeoRecord>,
}

impl CatalogDocument {
    /// Assemble a document, deriving the aggregate header from the records
    pub fn assemble(
        neos: Vec<NeoRecord>,
        source: impl Into<String>,
        api_url: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        let hazardous_count = neos.iter().filter(|n| n.is_hazardous).count();
        Self {
            metadata: CatalogMetadata {
                count: neos.len(),
                hazardous_count,
                last_updated,
                source: source.into(),
                api_url: api_url.into(),
                kind: CATALOG_TYPE.to_string(),
            },
            neos,
        }
    }

    /// Check the header aggregates against the records
    pub fn validate(&self) -> Result<()> {
        if self.metadata.count != self.neos.len() {
            return Err(Error::data_unavailable(format!(
                "catalog metadata.count is {} but {} records are present",
                self.metadata.count,
                self.neos.len()
            )));
        }
        let hazardous = self.neos.iter().filter(|n| n.is_hazardous).count();
        if self.metadata.hazardous_count != hazardous {
            return Err(Error::data_unavailable(format!(
                "catalog metadata.hazardous_count is {} but {} records are hazardous",
                self.metadata.hazardous_count, hazardous
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn neows_entry() -> Value {
        json!({
            "id": "2099942",
            "name": "99942 Apophis (2004 MN4)",
            "estimated_diameter": {
                "meters": {
                    "estimated_diameter_min": 320.0,
                    "estimated_diameter_max": 420.0
                }
            },
            "orbital_data": {
                "semi_major_axis": "0.9223803",
                "eccentricity": "0.1911",
                "inclination": "3.339"
            },
            "is_potentially_hazardous_asteroid": true
        })
    }

    #[test]
    fn test_decode_neows_entry() {
        let element = OrbitalElement::from_neows(&neows_entry()).unwrap();
        assert_eq!(element.id, "2099942");
        assert_eq!(element.name, "99942 Apophis 2004 MN4");
        assert!((element.semi_major_axis_au - 0.9223803).abs() < 1e-12);
        assert!((element.average_diameter_m() - 370.0).abs() < 1e-12);
        assert!(element.is_hazardous);
    }

    #[test]
    fn test_missing_field_skips_record() {
        let mut entry = neows_entry();
        entry["orbital_data"]
            .as_object_mut()
            .unwrap()
            .remove("eccentricity");

        match OrbitalElement::from_neows(&entry) {
            Err(Error::RecordSkipped { id, reason }) => {
                assert_eq!(id, "2099942");
                assert!(reason.contains("orbital_data.eccentricity"));
            }
            other => panic!("expected RecordSkipped, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field_skips_record() {
        let mut entry = neows_entry();
        entry["orbital_data"]["inclination"] = json!("steep");
        assert!(matches!(
            OrbitalElement::from_neows(&entry),
            Err(Error::RecordSkipped { .. })
        ));
    }

    #[test]
    fn test_hazard_flag_defaults_false() {
        let mut entry = neows_entry();
        entry
            .as_object_mut()
            .unwrap()
            .remove("is_potentially_hazardous_asteroid");
        assert!(!OrbitalElement::from_neows(&entry).unwrap().is_hazardous);
    }

    #[test]
    fn test_metadata_type_field_name() {
        let doc = CatalogDocument::assemble(Vec::new(), "test", "none", Utc::now());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["metadata"]["type"], CATALOG_TYPE);
        assert_eq!(json["metadata"]["count"], 0);
        assert!(doc.validate().is_ok());
    }
}
