use crate::error::{AppError, Result};
use crate::models::CityRoute;
use std::collections::BTreeSet;

/// In-memory table of known city-pair distances. Built once at startup from
/// the embedded dataset (or a `ROUTES_FILE` override) and shared read-only
/// across requests.
pub struct RouteTable {
    routes: Vec<CityRoute>,
}

impl RouteTable {
    pub fn new(routes: Vec<CityRoute>) -> Self {
        RouteTable { routes }
    }

    /// Parse a JSON array of routes and validate every distance.
    /// Non-positive or non-finite distances are a dataset defect and fail
    /// loading outright.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let routes: Vec<CityRoute> = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid route dataset: {}", e)))?;

        for route in &routes {
            if !route.distance_km.is_finite() || route.distance_km <= 0.0 {
                return Err(AppError::Config(format!(
                    "Invalid distance {} for route {} - {}",
                    route.distance_km, route.origin, route.destination
                )));
            }
        }

        Ok(RouteTable::new(routes))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every distinct city name appearing as an origin or destination, in
    /// their verbatim spelling, sorted byte-wise. Deterministic and total;
    /// no locale collation.
    pub fn cities(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .routes
            .iter()
            .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distance for a city pair in either orientation. Inputs are trimmed and
    /// case-folded before comparison; no partial or fuzzy matching. Empty
    /// input after trimming never matches.
    pub fn find_distance(&self, origin: &str, destination: &str) -> Option<f64> {
        let from = normalize(origin);
        let to = normalize(destination);
        if from.is_empty() || to.is_empty() {
            return None;
        }

        self.routes
            .iter()
            .find(|r| {
                let a = normalize(&r.origin);
                let b = normalize(&r.destination);
                (a == from && b == to) || (a == to && b == from)
            })
            .map(|r| r.distance_km)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
