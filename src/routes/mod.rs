pub mod cities;
pub mod debug;
pub mod estimate;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cities", get(cities::list_cities))
        .route("/distance", get(cities::find_distance))
        .route("/trips/estimate", post(estimate::estimate_trip))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
