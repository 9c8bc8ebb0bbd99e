//! Narrative analysis provider trait

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{ImpactFigures, Location};

/// Trait for free-text impact commentary
///
/// Implementations:
/// - `GeminiAnalyzer`: Google Generative Language API
/// - `DisabledAnalyzer`: no credentials configured
#[async_trait]
pub trait NarrativeAnalyzer: Send + Sync {
    /// Produce raw commentary (prose or JSON text) for an impact.
    /// Failures are reported as [`Error::AnalysisUnavailable`].
    async fn analyze(&self, figures: &ImpactFigures, location: &Location) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}

/// Analyzer used when no API key is configured
pub struct DisabledAnalyzer;

#[async_trait]
impl NarrativeAnalyzer for DisabledAnalyzer {
    async fn analyze(&self, _figures: &ImpactFigures, _location: &Location) -> Result<String> {
        Err(Error::analysis_unavailable(
            "Gemini API key not configured. Set GEMINI_API_KEY in the environment",
        ))
    }

    fn name(&self) -> &str {
        "disabled"
    }

    fn model(&self) -> &str {
        "none"
    }
}
