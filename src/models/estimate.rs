use crate::models::TransportMode;
use serde::{Deserialize, Serialize};

/// Emission outcome for a single transport mode over a given distance.
/// Recomputed on every request; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ModeResult {
    pub mode: TransportMode,
    /// Rounded to 2 decimals.
    pub emission_kg: f64,
    /// Emission relative to the car baseline, in percent. 0 when the baseline
    /// emission is 0 (distance 0).
    pub percentage_vs_car: f64,
}

/// Difference between a mode's emission and the car baseline. Negative values
/// mean the mode emits more than the baseline; that is a valid result, not an
/// error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SavingsResult {
    pub saved_kg: f64,
    pub percentage: f64,
}

/// Carbon-credit price range in BRL, derived from the fixed per-credit
/// min/max unit prices. min <= average <= max holds by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CreditEstimate {
    /// Credits needed to offset the emission, rounded to 4 decimals.
    pub credits: f64,
    pub price: PriceRange,
}
