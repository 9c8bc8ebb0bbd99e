//! neo-impact: asteroid impact physics, a near-earth object catalog, and an
//! impact simulation API
//!
//! Physics and trajectory generation are pure functions. The catalog builder
//! turns NASA NeoWs orbital elements into visualization-ready records (with a
//! fixed sample list when the source is unreachable), and the simulation
//! service pairs impact figures with an optional Gemini narrative.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod physics;
pub mod providers;
pub mod server;
pub mod simulation;
pub mod trajectory;
pub mod types;

pub use catalog::{CatalogHandle, CatalogQueryService, CatalogStore, NeoCatalogBuilder};
pub use config::ImpactConfig;
pub use error::{Error, Result};
pub use physics::{ImpactStatistics, SeverityTier};
pub use simulation::ImpactSimulationService;
pub use types::{CatalogDocument, NeoRecord, OrbitalElement, SimulationResult};
