//! Simulation and intensity endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::simulation::ImpactSimulationService;
use crate::types::{IntensityResponse, SimulationResult};

fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| Error::invalid_input(rejection.body_text()))
}

/// POST /api/simulate - Impact effects plus narrative analysis
pub async fn simulate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<SimulationResult>> {
    let body = json_body(payload)?;
    let result = state.simulation().simulate(&body).await?;
    Ok(Json(result))
}

/// POST /api/intensity - Energy-derived intensity without location
pub async fn intensity(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<IntensityResponse>> {
    let body = json_body(payload)?;
    Ok(Json(ImpactSimulationService::intensity(&body)?))
}
