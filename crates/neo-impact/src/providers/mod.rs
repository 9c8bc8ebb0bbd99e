//! External collaborators
//!
//! Abstract traits for the orbital-data source and the narrative analyzer,
//! with HTTP implementations for NASA NeoWs and Gemini.

pub mod analysis;
pub mod gemini;
pub mod neows;
pub mod orbital_source;
pub mod retry;

pub use analysis::{DisabledAnalyzer, NarrativeAnalyzer};
pub use gemini::GeminiAnalyzer;
pub use neows::{NeoWsClient, NEOWS_SOURCE_NAME};
pub use orbital_source::OrbitalDataSource;

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::Result;

/// Build the configured analyzer, or the disabled one when no key is set
pub fn create_analyzer(config: &AnalysisConfig) -> Result<Arc<dyn NarrativeAnalyzer>> {
    if config.is_configured() {
        let analyzer = GeminiAnalyzer::new(config)?;
        tracing::info!("Narrative analysis enabled with model {}", analyzer.model());
        Ok(Arc::new(analyzer))
    } else {
        tracing::warn!("GEMINI_API_KEY not set; narrative analysis disabled");
        Ok(Arc::new(DisabledAnalyzer))
    }
}
