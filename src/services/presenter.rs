//! Display formatting for computed results.
//!
//! Pure functions from numbers the core already rounded to display strings.
//! The convention is fixed pt-BR (decimal comma, dot thousands grouping) with
//! BRL currency, matching the route dataset's locale. Digit selection reuses
//! the same scaled half-away-from-zero rounding as the core, so a formatted
//! value can never disagree with the computed one.

use crate::models::{CreditEstimate, ModeResult, SavingsResult, TransportMode};
use serde::Serialize;

/// One row of the cross-mode comparison, ready for rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModeRow {
    pub mode: TransportMode,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// e.g. "51,60 kg"
    pub emission: String,
    /// e.g. "100,00%"; "0,00%" for the zero-baseline case
    pub percentage_vs_car: String,
}

/// Display-ready view of a full trip estimate. No markup, no business logic;
/// the UI layer renders these strings verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripPresentation {
    /// e.g. "São Paulo, SP → Rio de Janeiro, RJ"
    pub route: String,
    /// e.g. "430 km"
    pub distance: String,
    /// Selected mode's emission, e.g. "51,60 kg de CO2"
    pub emission: String,
    pub comparison: Vec<ModeRow>,
    /// Present only for non-baseline modes, e.g. "51,60 kg (100,00%)"
    pub savings_vs_car: Option<String>,
    /// e.g. "0,0516 créditos"
    pub credits: String,
    /// e.g. "R$ 2,58 - R$ 7,74"
    pub price_range: String,
    /// e.g. "R$ 5,16"
    pub price_average: String,
}

pub fn present(
    origin: &str,
    destination: &str,
    distance_km: f64,
    selected: &ModeResult,
    comparison: &[ModeResult],
    savings: Option<&SavingsResult>,
    credit: &CreditEstimate,
) -> TripPresentation {
    TripPresentation {
        route: format!("{} → {}", origin.trim(), destination.trim()),
        distance: format!("{} km", format_decimal(distance_km, 0)),
        emission: format!("{} kg de CO2", format_decimal(selected.emission_kg, 2)),
        comparison: comparison.iter().map(mode_row).collect(),
        savings_vs_car: savings.map(|s| {
            format!(
                "{} kg ({}%)",
                format_decimal(s.saved_kg, 2),
                format_decimal(s.percentage, 2)
            )
        }),
        credits: format!("{} créditos", format_decimal(credit.credits, 4)),
        price_range: format!(
            "{} - {}",
            format_brl(credit.price.min),
            format_brl(credit.price.max)
        ),
        price_average: format_brl(credit.price.average),
    }
}

fn mode_row(result: &ModeResult) -> ModeRow {
    ModeRow {
        mode: result.mode,
        label: result.mode.label(),
        icon: result.mode.icon(),
        color: result.mode.color(),
        emission: format!("{} kg", format_decimal(result.emission_kg, 2)),
        percentage_vs_car: format!("{}%", format_decimal(result.percentage_vs_car, 2)),
    }
}

/// Format with a decimal comma and dot thousands grouping, e.g.
/// `1883.52 -> "1.883,52"`. Digits come from the same scaled rounding the
/// core uses, so an already-rounded input renders exactly.
pub fn format_decimal(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    let scaled = (value * scale).round();
    let negative = scaled < 0.0;
    let scaled = scaled.abs() as u64;
    let divisor = scale as u64;

    let int_part = scaled / divisor;
    let frac_part = scaled % divisor;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if places > 0 {
        out.push(',');
        out.push_str(&format!("{:0width$}", frac_part, width = places));
    }
    out
}

/// BRL currency string, always 2 decimals, e.g. `100.0 -> "R$ 100,00"`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2))
}

fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(".")
}
