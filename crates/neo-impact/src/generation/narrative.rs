//! Normalization of narrative collaborator output
//!
//! Whatever the collaborator does (structured JSON, free text, an error, a
//! timeout) the response carries one JSON object: the structured payload,
//! `{"text": ...}`, or `{"error": ...}`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Normalized narrative analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NarrativeAnalysis {
    /// The model answered with a JSON object
    Structured(Map<String, Value>),
    /// The model answered with prose
    Text { text: String },
    /// No analysis could be produced
    Unavailable { error: String },
}

impl NarrativeAnalysis {
    /// Build an unavailable analysis carrying a reason
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            error: reason.into(),
        }
    }

    /// Normalize raw model text
    pub fn from_raw(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::unavailable("No response from the analysis model");
        }

        if let Some(object) = parse_object(text) {
            return Self::Structured(object);
        }

        // Models often wrap JSON in prose or code fences
        if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
            if end > start {
                if let Some(object) = parse_object(&text[start..=end]) {
                    return Self::Structured(object);
                }
            }
        }

        Self::Text {
            text: text.to_string(),
        }
    }

    /// Normalize the collaborator's result, turning errors into data
    pub fn from_outcome(outcome: Result<String>) -> Self {
        match outcome {
            Ok(raw) => Self::from_raw(&raw),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
