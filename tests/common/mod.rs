use ecotrip::models::CityRoute;
use ecotrip::services::route_table::RouteTable;
use ecotrip::AppState;
use std::sync::Arc;

/// Small fixed table for endpoint tests
#[allow(dead_code)]
pub fn sample_routes() -> Vec<CityRoute> {
    vec![
        CityRoute::new("São Paulo, SP", "Rio de Janeiro, RJ", 430.0),
        CityRoute::new("São Paulo, SP", "Curitiba, PR", 408.0),
        CityRoute::new("Curitiba, PR", "Florianópolis, SC", 300.0),
    ]
}

#[allow(dead_code)]
pub fn test_route_table() -> RouteTable {
    RouteTable::new(sample_routes())
}

/// Router wired exactly like production, minus the outer /api/v1 nesting
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    let state = Arc::new(AppState {
        route_table: test_route_table(),
    });
    ecotrip::routes::create_router(state)
}
