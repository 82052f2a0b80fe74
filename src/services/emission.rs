use super::round2;
use crate::error::{AppError, Result};
use crate::models::TransportMode;

/// CO2 emitted over `distance_km` using `mode`, in kg, rounded to 2 decimals
/// (half away from zero). Linear in distance; bicycle is always 0.
///
/// Negative or non-finite distances are rejected before any arithmetic runs,
/// so NaN/Infinity never reach callers.
pub fn emission(distance_km: f64, mode: TransportMode) -> Result<f64> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::InvalidRequest(format!(
            "distance_km must be a non-negative number, got {}",
            distance_km
        )));
    }

    Ok(round2(distance_km * mode.factor_kg_per_km()))
}
