use crate::models::TransportMode;
use serde::{Deserialize, Serialize};

/// A known city pair with its road distance. Loaded once at startup and never
/// mutated. Lookup is orientation-insensitive; see
/// [`RouteTable`](crate::services::route_table::RouteTable).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityRoute {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

impl CityRoute {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, distance_km: f64) -> Self {
        CityRoute {
            origin: origin.into(),
            destination: destination.into(),
            distance_km,
        }
    }
}

// Request types for API endpoints

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub mode: TransportMode,
}

impl EstimateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() {
            return Err("origin must not be empty".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        Ok(())
    }
}
