//! Core types for the impact service

pub mod neo;
pub mod simulation;

pub use neo::{CatalogDocument, CatalogMetadata, NeoRecord, OrbitalElement};
pub use simulation::{
    round_to, ImpactEffects, ImpactFigures, ImpactInputs, IntensityRequest, IntensityResponse, Location,
    SimulationRequest, SimulationResult,
};
