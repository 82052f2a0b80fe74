// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::route_table::RouteTable;

/// Route dataset compiled into the binary. `ROUTES_FILE` overrides it.
pub const EMBEDDED_ROUTES_JSON: &str = include_str!("../data/routes.json");

// App state for sharing across the application
pub struct AppState {
    pub route_table: RouteTable,
}
