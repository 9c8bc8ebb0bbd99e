//! Orbital-data source trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Pull interface for raw orbital-element records
///
/// Implementations:
/// - `NeoWsClient`: NASA Near Earth Object Web Service
///
/// Records are returned undecoded so the catalog builder can skip malformed
/// entries one at a time instead of failing the whole batch.
#[async_trait]
pub trait OrbitalDataSource: Send + Sync {
    /// Fetch raw records; must respect a bounded timeout
    async fn fetch_records(&self) -> Result<Vec<Value>>;

    /// Human-readable source label stored in catalog metadata
    fn name(&self) -> &str;

    /// Source URL stored in catalog metadata
    fn url(&self) -> &str;
}
