//! What-if impact simulation
//!
//! Validation is fail-fast; the narrative step never fails the request.
//! Whatever the analyzer does (error, timeout, panic) ends up as data in
//! `narrative_analysis`.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::Result;
use crate::generation::NarrativeAnalysis;
use crate::physics::{crater_diameter, impact_energy_megatons};
use crate::providers::NarrativeAnalyzer;
use crate::types::{
    round_to, ImpactEffects, ImpactFigures, ImpactInputs, IntensityRequest, IntensityResponse,
    Location, SimulationRequest, SimulationResult,
};

/// Orchestrates physics and narrative analysis for one request
pub struct ImpactSimulationService {
    analyzer: Arc<dyn NarrativeAnalyzer>,
    analysis_timeout: Duration,
}

impl ImpactSimulationService {
    pub fn new(analyzer: Arc<dyn NarrativeAnalyzer>, analysis_timeout: Duration) -> Self {
        Self {
            analyzer,
            analysis_timeout,
        }
    }

    pub fn analyzer(&self) -> &dyn NarrativeAnalyzer {
        self.analyzer.as_ref()
    }

    /// Megaton-scale energy and crater size for the given impactor
    pub fn compute(inputs: &ImpactInputs) -> ImpactFigures {
        let energy_megatons =
            impact_energy_megatons(inputs.diameter_m, inputs.velocity_km_s, inputs.density_kg_m3);
        ImpactFigures {
            diameter_m: inputs.diameter_m,
            velocity_km_s: inputs.velocity_km_s,
            density_kg_m3: inputs.density_kg_m3,
            energy_megatons,
            crater_diameter_m: crater_diameter(energy_megatons),
        }
    }

    /// Validate a raw request body and simulate it
    pub async fn simulate(&self, body: &Value) -> Result<SimulationResult> {
        let request = SimulationRequest::from_json(body)?;
        Ok(self.simulate_request(request).await)
    }

    /// Simulate an already validated request
    pub async fn simulate_request(&self, request: SimulationRequest) -> SimulationResult {
        let figures = Self::compute(&request.meteorite);
        tracing::info!(
            "Simulating impact: {:.1} m at {:.1} km/s -> {:.2} Mt, crater {:.0} m",
            figures.diameter_m,
            figures.velocity_km_s,
            figures.energy_megatons,
            figures.crater_diameter_m
        );

        let narrative_analysis = self.narrate(figures, request.location).await;

        SimulationResult {
            impact_effects: ImpactEffects {
                energy_megatons: round_to(figures.energy_megatons, 2),
                crater_diameter_meters: round_to(figures.crater_diameter_m, 2),
            },
            location: request.location,
            narrative_analysis,
        }
    }

    /// Run the analyzer on its own task under the configured timeout
    async fn narrate(&self, figures: ImpactFigures, location: Location) -> NarrativeAnalysis {
        let analyzer = Arc::clone(&self.analyzer);
        let mut task = tokio::spawn(async move { analyzer.analyze(&figures, &location).await });

        let analysis = match timeout(self.analysis_timeout, &mut task).await {
            Ok(Ok(outcome)) => NarrativeAnalysis::from_outcome(outcome),
            Ok(Err(join_error)) => NarrativeAnalysis::unavailable(format!(
                "Analysis from {} failed unexpectedly: {}",
                self.analyzer.name(),
                join_error
            )),
            Err(_) => {
                task.abort();
                NarrativeAnalysis::unavailable(format!(
                    "Analysis from {} timed out after {:?}",
                    self.analyzer.name(),
                    self.analysis_timeout
                ))
            }
        };

        if let NarrativeAnalysis::Unavailable { error } = &analysis {
            tracing::warn!("Narrative analysis unavailable: {}", error);
        }
        analysis
    }

    /// Intensity figures for a raw `/intensity` body; `intensity` currently
    /// equals the rounded megaton energy
    pub fn intensity(body: &Value) -> Result<IntensityResponse> {
        let request = IntensityRequest::from_json(body)?;
        let figures = Self::compute(&request.inputs);
        let energy = round_to(figures.energy_megatons, 4);

        Ok(IntensityResponse {
            intensity: energy,
            energy_megatons: energy,
            crater_diameter_meters: round_to(figures.crater_diameter_m, 2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::providers::DisabledAnalyzer;
    use async_trait::async_trait;
    use serde_json::json;

    enum Behavior {
        Reply(&'static str),
        Fail,
        Panic,
        Hang,
    }

    struct StubAnalyzer(Behavior);

    #[async_trait]
    impl NarrativeAnalyzer for StubAnalyzer {
        async fn analyze(&self, figures: &ImpactFigures, _location: &Location) -> Result<String> {
            match self.0 {
                Behavior::Reply(text) => Ok(text.to_string()),
                Behavior::Fail => Err(Error::analysis_unavailable("quota exceeded")),
                Behavior::Panic => panic!("analyzer exploded at {}", figures.energy_megatons),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(String::new())
                }
            }
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn service(behavior: Behavior) -> ImpactSimulationService {
        ImpactSimulationService::new(Arc::new(StubAnalyzer(behavior)), Duration::from_millis(200))
    }

    fn body() -> Value {
        json!({
            "meteorite": {"diameter": 1000, "velocity": 20, "density": 3000},
            "location": {"lat": 0, "lng": 0}
        })
    }

    #[tokio::test]
    async fn test_simulate_without_analyzer() {
        let service = ImpactSimulationService::new(Arc::new(DisabledAnalyzer), Duration::from_secs(5));
        let result = service.simulate(&body()).await.unwrap();

        assert!((result.impact_effects.energy_megatons - 75_085.87).abs() < 1e-6);
        assert!((result.impact_effects.crater_diameter_meters - 170_955.33).abs() < 1e-6);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["narrative_analysis"]["error"]
            .as_str()
            .unwrap()
            .contains("GEMINI_API_KEY"));
        assert_eq!(json["location"], json!({"lat": 0.0, "lng": 0.0}));
    }

    #[tokio::test]
    async fn test_simulate_text_and_structured() {
        let result = service(Behavior::Reply("Open ocean. A large tsunami."))
            .simulate(&body())
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result.narrative_analysis).unwrap(),
            json!({"text": "Open ocean. A large tsunami."})
        );

        let result = service(Behavior::Reply("Here you go: {\"zone\": \"ocean\"}"))
            .simulate(&body())
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result.narrative_analysis).unwrap(),
            json!({"zone": "ocean"})
        );
    }

    #[tokio::test]
    async fn test_analyzer_failures_become_data() {
        for behavior in [Behavior::Fail, Behavior::Panic, Behavior::Hang, Behavior::Reply("  ")] {
            let result = service(behavior).simulate(&body()).await.unwrap();
            assert!(!result.narrative_analysis.is_available());
            assert!(result.impact_effects.energy_megatons > 0.0);
        }
    }

    #[tokio::test]
    async fn test_invalid_input_fails_fast() {
        let service = service(Behavior::Panic);
        for bad in [
            json!({"location": {"lat": 0, "lng": 0}}),
            json!({"meteorite": {"diameter": 1, "velocity": 1, "density": 1}}),
            json!({"meteorite": {"diameter": 1, "velocity": 1, "density": 1}, "location": {"lat": 0}}),
            json!({"meteorite": {"diameter": 1, "velocity": "fast", "density": 1}, "location": {"lat": 0, "lng": 0}}),
        ] {
            assert!(matches!(
                service.simulate(&bad).await,
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_degenerate_inputs_are_zero() {
        let body = json!({
            "meteorite": {"diameter": 0, "velocity": 20, "density": 3000},
            "location": {"lat": "10.5", "lng": "-3"}
        });
        let result = service(Behavior::Fail).simulate(&body).await.unwrap();
        assert_eq!(result.impact_effects.energy_megatons, 0.0);
        assert_eq!(result.impact_effects.crater_diameter_meters, 0.0);
        assert_eq!(result.location, Location { lat: 10.5, lng: -3.0 });
    }

    #[test]
    fn test_intensity() {
        let response = ImpactSimulationService::intensity(&json!({
            "diameter": 50, "velocity": 17, "density": 3000, "lat": 1, "lng": 2, "angle": 45
        }))
        .unwrap();
        assert!((response.intensity - 6.7812).abs() < 1e-9);
        assert_eq!(response.intensity, response.energy_megatons);
        assert!((response.crater_diameter_meters - 11_050.88).abs() < 1e-6);

        let empty = ImpactSimulationService::intensity(&json!({})).unwrap();
        assert_eq!(empty.intensity, 0.0);
        assert_eq!(empty.crater_diameter_meters, 0.0);

        assert!(ImpactSimulationService::intensity(&json!({"diameter": "big"})).is_err());
    }
}
