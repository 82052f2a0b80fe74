use crate::error::{AppError, Result};
use crate::models::{CreditEstimate, EstimateRequest, ModeResult, SavingsResult, TransportMode};
use crate::services::presenter::{self, TripPresentation};
use crate::services::{comparison, credit, emission};
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

/// Response for a full trip estimate
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub route: RouteInfo,
    /// Result for the requested mode
    pub selected: ModeResult,
    /// Every mode, ranked ascending by emission
    pub comparison: Vec<ModeResult>,
    /// Savings against the car baseline; absent when car itself was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsResult>,
    pub credit: CreditEstimate,
    pub display: TripPresentation,
}

/// POST /trips/estimate
/// Full CO2 estimate for a trip: selected-mode emission, cross-mode ranking,
/// savings against the car baseline, carbon-credit cost, display strings.
pub async fn estimate_trip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let distance_km = state
        .route_table
        .find_distance(&request.origin, &request.destination)
        .ok_or_else(|| {
            AppError::RouteNotFound(format!(
                "no known route between '{}' and '{}'",
                request.origin.trim(),
                request.destination.trim()
            ))
        })?;

    tracing::info!(
        origin = %request.origin.trim(),
        destination = %request.destination.trim(),
        distance_km,
        mode = %request.mode,
        "Trip estimate request"
    );

    let comparison = comparison::all_modes(distance_km)?;
    let selected = comparison
        .iter()
        .find(|r| r.mode == request.mode)
        .copied()
        .ok_or_else(|| AppError::Internal("mode missing from comparison".to_string()))?;

    let savings = if request.mode.is_baseline() {
        None
    } else {
        let baseline_kg = emission::emission(distance_km, TransportMode::Car)?;
        Some(comparison::savings(selected.emission_kg, baseline_kg))
    };

    let credit = credit::estimate(selected.emission_kg);

    let display = presenter::present(
        &request.origin,
        &request.destination,
        distance_km,
        &selected,
        &comparison,
        savings.as_ref(),
        &credit,
    );

    Ok(Json(EstimateResponse {
        route: RouteInfo {
            origin: request.origin,
            destination: request.destination,
            distance_km,
        },
        selected,
        comparison,
        savings,
        credit,
        display,
    }))
}
