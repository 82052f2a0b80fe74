use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check that the route table loaded sensibly
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let route_count = state.route_table.len();
    let city_count = state.route_table.cities().len();

    let status = if route_count > 0 { "ok" } else { "error" };

    Json(json!({
        "status": status,
        "checks": {
            "routes": route_count,
            "cities": city_count,
        }
    }))
}
