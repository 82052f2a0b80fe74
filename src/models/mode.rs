use crate::constants::{
    BICYCLE_FACTOR_KG_PER_KM, BUS_FACTOR_KG_PER_KM, CAR_FACTOR_KG_PER_KM, TRUCK_FACTOR_KG_PER_KM,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bicycle,
    #[default]
    Car,
    Bus,
    Truck,
}

impl TransportMode {
    /// Declaration order; doubles as the tie-break order when two modes
    /// produce equal emissions.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bicycle,
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Truck,
    ];

    /// Fixed emission coefficient in kg CO2 per km.
    pub fn factor_kg_per_km(&self) -> f64 {
        match self {
            TransportMode::Bicycle => BICYCLE_FACTOR_KG_PER_KM,
            TransportMode::Car => CAR_FACTOR_KG_PER_KM,
            TransportMode::Bus => BUS_FACTOR_KG_PER_KM,
            TransportMode::Truck => TRUCK_FACTOR_KG_PER_KM,
        }
    }

    /// Car is the reference point for percentage and savings comparisons.
    pub fn is_baseline(&self) -> bool {
        matches!(self, TransportMode::Car)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Truck => "Truck",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "🚲",
            TransportMode::Car => "🚗",
            TransportMode::Bus => "🚌",
            TransportMode::Truck => "🚚",
        }
    }

    /// Display color used by UI layers for comparison rows.
    pub fn color(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "#27ae60",
            TransportMode::Car => "#f39c12",
            TransportMode::Bus => "#2980b9",
            TransportMode::Truck => "#c0392b",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Bicycle => write!(f, "bicycle"),
            TransportMode::Car => write!(f, "car"),
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Truck => write!(f, "truck"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bicycle" | "bike" => Ok(TransportMode::Bicycle),
            "car" => Ok(TransportMode::Car),
            "bus" => Ok(TransportMode::Bus),
            "truck" => Ok(TransportMode::Truck),
            _ => Err(format!("Invalid transport mode: '{}'", s)),
        }
    }
}
