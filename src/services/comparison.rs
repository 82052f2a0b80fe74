use super::emission::emission;
use super::round2;
use crate::error::Result;
use crate::models::{ModeResult, SavingsResult, TransportMode};
use std::cmp::Ordering;

/// Emission for every transport mode over `distance_km`, ranked ascending by
/// emission. The sort is stable, so equal emissions (distance 0) keep the
/// mode declaration order: bicycle, car, bus, truck.
///
/// `percentage_vs_car` is the mode's emission relative to the car baseline.
/// A zero baseline (distance 0) reports 0, never NaN or Infinity.
pub fn all_modes(distance_km: f64) -> Result<Vec<ModeResult>> {
    let car_emission = emission(distance_km, TransportMode::Car)?;

    let mut results = TransportMode::ALL
        .iter()
        .map(|&mode| {
            let emission_kg = emission(distance_km, mode)?;
            let percentage_vs_car = if car_emission == 0.0 {
                0.0
            } else {
                round2(emission_kg / car_emission * 100.0)
            };
            Ok(ModeResult {
                mode,
                emission_kg,
                percentage_vs_car,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by(|a, b| {
        a.emission_kg
            .partial_cmp(&b.emission_kg)
            .unwrap_or(Ordering::Equal)
    });

    Ok(results)
}

/// How much `emission_kg` saves against `baseline_kg`, in kg and percent.
/// Negative values mean the mode costs more than the baseline; that is a
/// valid result. A zero baseline reports percentage 0.
pub fn savings(emission_kg: f64, baseline_kg: f64) -> SavingsResult {
    let saved_kg = round2(baseline_kg - emission_kg);
    let percentage = if baseline_kg == 0.0 {
        0.0
    } else {
        round2((baseline_kg - emission_kg) / baseline_kg * 100.0)
    };

    SavingsResult {
        saved_kg,
        percentage,
    }
}
