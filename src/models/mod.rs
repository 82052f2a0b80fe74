pub mod estimate;
pub mod mode;
pub mod route;

pub use estimate::{CreditEstimate, ModeResult, PriceRange, SavingsResult};
pub use mode::TransportMode;
pub use route::{CityRoute, EstimateRequest};
