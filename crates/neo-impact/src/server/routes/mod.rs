//! API routes for the impact server

pub mod catalog;
pub mod neos;
pub mod simulate;

use axum::{
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog queries
        .route("/neos", get(neos::list_catalog))
        .route("/neos/names", get(neos::list_names))
        .route("/neos/lookup", get(neos::lookup))
        .route("/neos/summary", get(neos::summary))
        .route("/neos/top", get(neos::top_by_impact))
        // Simulation
        .route("/simulate", post(simulate::simulate))
        .route("/intensity", post(simulate::intensity))
        // Catalog maintenance
        .route("/catalog/rebuild", post(catalog::rebuild))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "neo-impact",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Near-earth object catalog and asteroid impact simulation",
        "endpoints": {
            "GET /api/neos": "Full NEO catalog document",
            "GET /api/neos/names": "Names of all catalog objects",
            "GET /api/neos/lookup?name=": "One catalog object by exact name",
            "GET /api/neos/summary?name=": "Compact impact summary for one object",
            "GET /api/neos/top?n=": "Objects with the largest impact energy (default 5)",
            "POST /api/simulate": "Impact effects and narrative analysis for a hypothetical impactor",
            "POST /api/intensity": "Impact intensity without location",
            "POST /api/catalog/rebuild": "Refetch orbital data and replace the catalog"
        },
        "units": {
            "simulation_energy": "megatons of TNT",
            "catalog_energy": "kilotons of TNT",
            "diameter": "meters",
            "velocity": "km/s",
            "density": "kg/m^3"
        }
    }))
}
