//! Application state for the impact server

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::catalog::{CatalogHandle, CatalogStore, NeoCatalogBuilder};
use crate::config::ImpactConfig;
use crate::error::{Error, Result};
use crate::providers::{self, NarrativeAnalyzer, NeoWsClient, OrbitalDataSource};
use crate::simulation::ImpactSimulationService;
use crate::types::CatalogDocument;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ImpactConfig,
    /// Current catalog snapshot
    catalog: CatalogHandle,
    /// Persisted catalog file
    store: CatalogStore,
    /// Record pipeline used by rebuilds
    builder: NeoCatalogBuilder,
    /// Orbital-data source for rebuilds
    orbital_source: Arc<dyn OrbitalDataSource>,
    /// Simulation orchestration
    simulation: ImpactSimulationService,
    /// Serializes catalog rebuilds
    rebuild_lock: Mutex<()>,
}

impl AppState {
    /// Create application state from configuration, loading the persisted
    /// catalog when one exists
    pub fn new(config: ImpactConfig) -> Result<Self> {
        tracing::info!("Initializing impact application state...");

        let analyzer = providers::create_analyzer(&config.analysis)?;
        let orbital_source: Arc<dyn OrbitalDataSource> = Arc::new(NeoWsClient::new(&config.neo_source)?);
        tracing::info!("Orbital source: {} ({})", orbital_source.name(), orbital_source.url());

        let store = CatalogStore::new(config.catalog.path.clone());
        let catalog = match store.load() {
            Ok(document) => CatalogHandle::new(document),
            Err(e) => {
                tracing::warn!("{}; POST /api/catalog/rebuild to create one", e);
                CatalogHandle::empty()
            }
        };

        Ok(Self::with_components(config, catalog, analyzer, orbital_source))
    }

    /// Assemble state from explicit collaborators
    pub fn with_components(
        config: ImpactConfig,
        catalog: CatalogHandle,
        analyzer: Arc<dyn NarrativeAnalyzer>,
        orbital_source: Arc<dyn OrbitalDataSource>,
    ) -> Self {
        let simulation = ImpactSimulationService::new(
            analyzer,
            Duration::from_secs(config.analysis.timeout_secs),
        );

        Self {
            inner: Arc::new(AppStateInner {
                store: CatalogStore::new(config.catalog.path.clone()),
                builder: NeoCatalogBuilder::new(&config.catalog),
                config,
                catalog,
                orbital_source,
                simulation,
                rebuild_lock: Mutex::new(()),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ImpactConfig {
        &self.inner.config
    }

    /// Get the catalog handle
    pub fn catalog(&self) -> &CatalogHandle {
        &self.inner.catalog
    }

    /// Get the simulation service
    pub fn simulation(&self) -> &ImpactSimulationService {
        &self.inner.simulation
    }

    /// Ready once a catalog snapshot is loaded
    pub fn is_ready(&self) -> bool {
        self.inner.catalog.is_loaded()
    }

    /// Fetch, build, persist and publish a new catalog
    pub async fn rebuild_catalog(&self) -> Result<Arc<CatalogDocument>> {
        let _guard = self.inner.rebuild_lock.lock().await;
        tracing::info!("Rebuilding NEO catalog from {}", self.inner.orbital_source.name());

        let document = self
            .inner
            .builder
            .build_from_source(self.inner.orbital_source.as_ref())
            .await;

        let store = self.inner.store.clone();
        let document = tokio::task::spawn_blocking(move || store.save(&document).map(|_| document))
            .await
            .map_err(|e| Error::internal(format!("catalog save task failed: {}", e)))??;

        Ok(self.inner.catalog.replace(document))
    }
}
