//! Stable application-wide constants.
//!
//! Values here are emission coefficients, carbon-credit market parameters, and
//! default fallbacks for env-var-based configuration. They should rarely
//! change. The route dataset itself lives in `data/routes.json`, not here.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Emission factors (kg CO2 per km) ---
// Per-passenger figures for passenger modes, per-vehicle for freight.
// Car is the comparison baseline.

/// Bicycle emits nothing regardless of distance.
pub const BICYCLE_FACTOR_KG_PER_KM: f64 = 0.0;
/// Average passenger car, single occupant.
pub const CAR_FACTOR_KG_PER_KM: f64 = 0.12;
/// Intercity bus, per passenger.
pub const BUS_FACTOR_KG_PER_KM: f64 = 0.08;
/// Freight truck, per vehicle.
pub const TRUCK_FACTOR_KG_PER_KM: f64 = 0.96;

// --- Carbon credit market parameters ---

/// One carbon credit offsets this many kg of CO2.
pub const KG_PER_CREDIT: f64 = 1000.0;
/// Lower bound of the per-credit price range (BRL).
/// Must not exceed [`CREDIT_PRICE_MAX_BRL`]; not runtime-checked.
pub const CREDIT_PRICE_MIN_BRL: f64 = 50.0;
/// Upper bound of the per-credit price range (BRL).
pub const CREDIT_PRICE_MAX_BRL: f64 = 150.0;
