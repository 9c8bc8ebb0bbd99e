//! Catalog maintenance endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::CatalogMetadata;

/// POST /api/catalog/rebuild - Fetch, persist and publish a fresh catalog
pub async fn rebuild(State(state): State<AppState>) -> Result<Json<CatalogMetadata>> {
    let document = state.rebuild_catalog().await?;

    tracing::info!(
        "Catalog rebuilt: {} NEOs ({} hazardous) from {}",
        document.metadata.count,
        document.metadata.hazardous_count,
        document.metadata.source
    );

    Ok(Json(document.metadata.clone()))
}
