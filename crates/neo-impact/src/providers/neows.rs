//! NASA NeoWs browse client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::orbital_source::OrbitalDataSource;
use super::retry::retry_request;
use crate::config::NeoSourceConfig;
use crate::error::{Error, Result};

/// Source label for catalogs built from NeoWs
pub const NEOWS_SOURCE_NAME: &str = "NASA Near Earth Object Web Service (NeoWs)";

/// Client for the `neo/browse` endpoint
pub struct NeoWsClient {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: u32,
    pages: u32,
    max_retries: u32,
}

#[derive(Deserialize)]
struct BrowsePage {
    #[serde(default)]
    near_earth_objects: Vec<Value>,
}

impl NeoWsClient {
    /// Create a new NeoWs client
    pub fn new(config: &NeoSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
            pages: config.pages.max(1),
            max_retries: config.max_retries,
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<Value>> {
        let label = format!("NeoWs page {}", page);
        retry_request(&label, self.max_retries, || async move {
            let response = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("api_key", self.api_key.clone()),
                    ("size", self.page_size.to_string()),
                    ("page", page.to_string()),
                ])
                .send()
                .await
                .map_err(|e| Error::data_unavailable(format!("NeoWs request failed: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::data_unavailable(format!(
                    "NeoWs returned {}: {}",
                    status, body
                )));
            }

            let page: BrowsePage = response.json().await.map_err(|e| {
                Error::data_unavailable(format!("Failed to parse NeoWs response: {}", e))
            })?;
            Ok(page.near_earth_objects)
        })
        .await
    }
}

#[async_trait]
impl OrbitalDataSource for NeoWsClient {
    async fn fetch_records(&self) -> Result<Vec<Value>> {
        let mut records = Vec::new();

        for page in 0..self.pages {
            let batch = self.fetch_page(page).await?;
            tracing::info!("Fetched {} NEOs from NeoWs page {}", batch.len(), page);
            let exhausted = batch.len() < self.page_size as usize;
            records.extend(batch);
            if exhausted {
                break;
            }
        }

        Ok(records)
    }

    fn name(&self) -> &str {
        NEOWS_SOURCE_NAME
    }

    fn url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = NeoSourceConfig {
            pages: 0,
            ..NeoSourceConfig::default()
        };
        let client = NeoWsClient::new(&config).unwrap();
        assert_eq!(client.pages, 1);
        assert_eq!(client.url(), "https://api.nasa.gov/neo/rest/v1/neo/browse");
        assert_eq!(client.name(), NEOWS_SOURCE_NAME);
    }

    #[test]
    fn test_browse_page_decoding() {
        let page: BrowsePage = serde_json::from_str(
            r#"{"links": {}, "page": {"size": 2}, "near_earth_objects": [{"id": "1"}, {"id": "2"}]}"#,
        )
        .unwrap();
        assert_eq!(page.near_earth_objects.len(), 2);

        let empty: BrowsePage = serde_json::from_str(r#"{"page": {}}"#).unwrap();
        assert!(empty.near_earth_objects.is_empty());
    }
}
