use axum::Router;
use ecotrip::config::Config;
use ecotrip::services::route_table::RouteTable;
use ecotrip::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrip=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting EcoTrip API server");

    // Load the route table: ROUTES_FILE override, or the embedded dataset
    let route_table = match config.routes_file {
        Some(ref path) => {
            tracing::info!("Loading route dataset from {}", path);
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path, e))?;
            RouteTable::from_json_str(&json)?
        }
        None => RouteTable::from_json_str(ecotrip::EMBEDDED_ROUTES_JSON)?,
    };

    tracing::info!(
        "Route table loaded: {} routes covering {} cities",
        route_table.len(),
        route_table.cities().len()
    );

    // Create application state
    let state = Arc::new(AppState { route_table });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", ecotrip::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
