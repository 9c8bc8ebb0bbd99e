//! Read-only lookups over a catalog snapshot

use serde::{Deserialize, Serialize};

use crate::physics::SeverityTier;
use crate::types::{CatalogDocument, NeoRecord};

/// Compact view of one catalog object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoSummary {
    pub name: String,
    pub velocity: f64,
    pub diameter_meters: f64,
    pub orbit_radius_au: f64,
    pub scale_category: SeverityTier,
    pub energy_megatons: f64,
}

impl From<&NeoRecord> for NeoSummary {
    fn from(neo: &NeoRecord) -> Self {
        Self {
            name: neo.name.clone(),
            velocity: neo.velocity,
            diameter_meters: neo.diameter_meters,
            orbit_radius_au: neo.orbit_radius_au,
            scale_category: neo.impact_stats.scale_category,
            energy_megatons: neo.impact_stats.energy_megatons,
        }
    }
}

/// Query service borrowing a catalog document
pub struct CatalogQueryService<'a> {
    document: &'a CatalogDocument,
}

impl<'a> CatalogQueryService<'a> {
    pub fn new(document: &'a CatalogDocument) -> Self {
        Self { document }
    }

    /// All record names in catalog order
    pub fn list_names(&self) -> Vec<String> {
        self.document.neos.iter().map(|n| n.name.clone()).collect()
    }

    /// First record whose name matches exactly (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&'a NeoRecord> {
        self.document.neos.iter().find(|n| n.name == name)
    }

    /// The `n` records with the greatest impact score, descending; ties keep
    /// catalog order
    pub fn top_n_by_impact(&self, n: usize) -> Vec<&'a NeoRecord> {
        let mut ranked: Vec<&NeoRecord> = self.document.neos.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.impact_score().total_cmp(&a.impact_score()));
        ranked.truncate(n);
        ranked
    }

    /// Summary of the named record
    pub fn summary(&self, name: &str) -> Option<NeoSummary> {
        self.find_by_name(name).map(NeoSummary::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NeoCatalogBuilder;

    fn sample_catalog() -> CatalogDocument {
        NeoCatalogBuilder::default().build_fallback()
    }

    #[test]
    fn test_list_and_find() {
        let document = sample_catalog();
        let service = CatalogQueryService::new(&document);

        let names = service.list_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "433 Eros");

        assert!(service.find_by_name("101955 Bennu").is_some());
        assert!(service.find_by_name("101955 bennu").is_none());
        assert!(service.find_by_name("Bennu").is_none());
    }

    #[test]
    fn test_top_five_of_ten() {
        let document = sample_catalog();
        let service = CatalogQueryService::new(&document);

        let top = service.top_n_by_impact(5);
        assert_eq!(top.len(), 5);
        for pair in top.windows(2) {
            assert!(pair[0].impact_score() >= pair[1].impact_score());
        }
        // Largest body, slowest bucket, still dominates
        assert_eq!(top[0].name, "1036 Ganymed");
    }

    #[test]
    fn test_top_n_larger_than_catalog() {
        let document = sample_catalog();
        let before = document.clone();
        let service = CatalogQueryService::new(&document);

        assert_eq!(service.top_n_by_impact(100).len(), 10);
        assert!(service.top_n_by_impact(0).is_empty());
        assert_eq!(document, before);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut document = sample_catalog();
        let twin = document.neos[3].clone();
        document.neos[5].impact_stats = twin.impact_stats.clone();
        let service = CatalogQueryService::new(&document);

        let ranked = service.top_n_by_impact(10);
        let first = ranked.iter().position(|n| n.name == document.neos[3].name).unwrap();
        let second = ranked.iter().position(|n| n.name == document.neos[5].name).unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_summary() {
        let document = sample_catalog();
        let service = CatalogQueryService::new(&document);

        let summary = service.summary("99942 Apophis").unwrap();
        assert_eq!(summary.diameter_meters, 370.0);
        assert_eq!(summary.orbit_radius_au, 0.92);
        assert_eq!(summary.scale_category, SeverityTier::Extinction);
        assert!(service.summary("Unknown").is_none());
    }
}
