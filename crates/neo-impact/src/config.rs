//! Configuration for the impact service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "NEO_IMPACT_CONFIG";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpactConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog build and storage configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// NASA NeoWs source configuration
    #[serde(default)]
    pub neo_source: NeoSourceConfig,
    /// Narrative analysis (Gemini) configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl ImpactConfig {
    /// Load configuration: optional TOML file from `NEO_IMPACT_CONFIG`,
    /// then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing sections use defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.analysis.api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.analysis.model = model;
        }
        if let Some(key) = lookup("NASA_API_KEY") {
            self.neo_source.api_key = key;
        }
        if let Some(path) = lookup("NEO_CATALOG_PATH") {
            self.catalog.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Catalog build and storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the persisted catalog document
    pub path: PathBuf,
    /// Bulk density assumed for catalog objects (stony asteroid)
    pub default_density_kg_m3: f64,
    /// Trajectory samples per object
    pub trajectory_points: usize,
    /// Fraction of a full orbit covered by the trajectory
    pub orbit_fraction: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("meteorites_data.json"),
            default_density_kg_m3: 2600.0,
            trajectory_points: 120,
            orbit_fraction: 0.8,
        }
    }
}

/// NASA Near Earth Object Web Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NeoSourceConfig {
    /// Browse endpoint
    pub base_url: String,
    /// API key (DEMO_KEY is rate limited)
    pub api_key: String,
    /// Objects per page
    pub page_size: u32,
    /// Number of pages to fetch
    pub pages: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for NeoSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nasa.gov/neo/rest/v1/neo/browse".to_string(),
            api_key: "DEMO_KEY".to_string(),
            page_size: 100,
            pages: 1,
            timeout_secs: 30,
            max_retries: 2,
        }
    }
}

/// Narrative analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gemini API key; analysis is disabled when absent
    pub api_key: Option<String>,
    /// Generation model name
    pub model: String,
    /// Generative Language API base URL
    pub base_url: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl AnalysisConfig {
    /// Whether an API key is present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.4,
            timeout_secs: 60,
            max_retries: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ImpactConfig::from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            enable_cors = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(!config.server.enable_cors);
        assert_eq!(config.catalog.trajectory_points, 120);
        assert_eq!(config.analysis.model, "gemini-2.5-pro");
        assert!(!config.analysis.is_configured());
    }

    #[test]
    fn test_partial_section() {
        let config = ImpactConfig::from_toml(
            r#"
            [neo_source]
            pages = 3

            [analysis]
            model = "gemini-2.5-flash"
            "#,
        )
        .unwrap();

        assert_eq!(config.neo_source.pages, 3);
        assert_eq!(config.neo_source.api_key, "DEMO_KEY");
        assert_eq!(config.analysis.model, "gemini-2.5-flash");
        assert_eq!(config.analysis.timeout_secs, 60);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "abc123"),
            ("PORT", "9000"),
            ("NEO_CATALOG_PATH", "/tmp/neos.json"),
        ]
        .into_iter()
        .collect();

        let mut config = ImpactConfig::default();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert!(config.analysis.is_configured());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.catalog.path, PathBuf::from("/tmp/neos.json"));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let mut config = ImpactConfig::default();
        let err = config
            .apply_env(|k| (k == "PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
