pub mod comparison;
pub mod credit;
pub mod emission;
pub mod presenter;
pub mod route_table;

/// Round to 2 decimal places, half away from zero.
/// All kg and BRL quantities leaving the core use this.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places, half away from zero. Used for credit counts,
/// which are small fractions of a 1000 kg unit.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
