use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for the city enumeration
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// Distinct city names, sorted
    pub cities: Vec<String>,
    pub count: usize,
}

/// GET /cities - All cities the route table knows about
pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<CitiesResponse> {
    let cities = state.route_table.cities();
    let count = cities.len();
    Json(CitiesResponse { cities, count })
}

/// Query parameters for distance lookup
#[derive(Debug, Deserialize)]
pub struct DistanceQueryParams {
    pub origin: String,
    pub destination: String,
}

impl DistanceQueryParams {
    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "origin must not be empty".to_string(),
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "destination must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response for distance lookups
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

/// GET /distance - Road distance for a known city pair, either orientation
pub async fn find_distance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DistanceQueryParams>,
) -> Result<Json<DistanceResponse>> {
    params.validate()?;

    let distance_km = state
        .route_table
        .find_distance(&params.origin, &params.destination)
        .ok_or_else(|| {
            AppError::RouteNotFound(format!(
                "no known route between '{}' and '{}'",
                params.origin.trim(),
                params.destination.trim()
            ))
        })?;

    Ok(Json(DistanceResponse {
        origin: params.origin,
        destination: params.destination,
        distance_km,
    }))
}
