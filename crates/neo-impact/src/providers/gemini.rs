//! Gemini client for impact narratives via the Generative Language API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::analysis::NarrativeAnalyzer;
use super::retry::retry_request;
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::types::{ImpactFigures, Location};

/// Gemini analyzer
pub struct GeminiAnalyzer {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_retries: u32,
}

impl GeminiAnalyzer {
    /// Create a new Gemini analyzer; fails when no API key is configured
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("Gemini API key is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_retries: config.max_retries,
        })
    }

    /// Get the API endpoint URL
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[async_trait]
impl NarrativeAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, figures: &ImpactFigures, location: &Location) -> Result<String> {
        let prompt = PromptBuilder::impact_prompt(figures, location);
        let url = self.endpoint();

        tracing::info!("Requesting impact analysis from {}", self.model);

        retry_request("Gemini analysis", self.max_retries, || {
            let request = GenerateRequest {
                contents: vec![Content {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: prompt.clone(),
                    }],
                }],
                generation_config: GenerationConfig {
                    temperature: self.temperature,
                    max_output_tokens: 1024,
                },
            };
            let client = self.client.clone();
            let url = url.clone();
            let api_key = self.api_key.clone();

            async move {
                let response = client
                    .post(&url)
                    .header("x-goog-api-key", api_key)
                    .json(&request)
                    .send()
                    .await
                    .map_err(|e| Error::analysis_unavailable(format!("Gemini request failed: {}", e)))?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    return Err(Error::analysis_unavailable(format!(
                        "Gemini generation failed ({}): {}",
                        status, body
                    )));
                }

                let gen_response: GenerateResponse = response.json().await.map_err(|e| {
                    Error::analysis_unavailable(format!("Failed to parse Gemini response: {}", e))
                })?;

                gen_response
                    .into_text()
                    .ok_or_else(|| Error::analysis_unavailable("No response from the analysis model"))
            }
        })
        .await
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let config = AnalysisConfig::default();
        assert!(matches!(GeminiAnalyzer::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoint() {
        let config = AnalysisConfig {
            api_key: Some("key".to_string()),
            base_url: "https://example.test/v1beta/".to_string(),
            ..AnalysisConfig::default()
        };
        let analyzer = GeminiAnalyzer::new(&config).unwrap();
        assert_eq!(
            analyzer.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Coastal city. "}, {"text": "Severe damage."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_text().as_deref(),
            Some("Coastal city. Severe damage.")
        );

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(empty.into_text().is_none());

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(blocked.into_text().is_none());
    }
}
