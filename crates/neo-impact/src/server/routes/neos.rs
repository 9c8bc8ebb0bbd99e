//! Catalog query endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::catalog::{CatalogQueryService, NeoSummary};
use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::NeoRecord;

/// Query parameters for name lookups
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    fn required(self) -> Result<String> {
        self.name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::invalid_input("query parameter 'name' is required"))
    }
}

/// Query parameters for top-N listings
#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_top_n")]
    pub n: usize,
}

fn default_top_n() -> usize {
    5
}

fn query_params<T>(query: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| Error::invalid_input(rejection.body_text()))
}

/// GET /api/neos - The whole catalog document
pub async fn list_catalog(State(state): State<AppState>) -> Result<Response> {
    let document = state.catalog().require()?;
    Ok(Json(document.as_ref()).into_response())
}

/// GET /api/neos/names - All names in catalog order
pub async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let document = state.catalog().require()?;
    Ok(Json(CatalogQueryService::new(&document).list_names()))
}

/// GET /api/neos/lookup?name= - Exact-name lookup
pub async fn lookup(
    State(state): State<AppState>,
    query: std::result::Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<NeoRecord>> {
    let name = query_params(query)?.required()?;
    let document = state.catalog().require()?;

    CatalogQueryService::new(&document)
        .find_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or(Error::NotFound(name))
}

/// GET /api/neos/summary?name= - Compact view of one object
pub async fn summary(
    State(state): State<AppState>,
    query: std::result::Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<NeoSummary>> {
    let name = query_params(query)?.required()?;
    let document = state.catalog().require()?;

    CatalogQueryService::new(&document)
        .summary(&name)
        .map(Json)
        .ok_or(Error::NotFound(name))
}

/// GET /api/neos/top?n= - Largest impact energies first
pub async fn top_by_impact(
    State(state): State<AppState>,
    query: std::result::Result<Query<TopQuery>, QueryRejection>,
) -> Result<Json<Vec<NeoRecord>>> {
    let n = query_params(query)?.n;
    let document = state.catalog().require()?;

    let top = CatalogQueryService::new(&document)
        .top_n_by_impact(n)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(top))
}
