use super::{round2, round4};
use crate::constants::{CREDIT_PRICE_MAX_BRL, CREDIT_PRICE_MIN_BRL, KG_PER_CREDIT};
use crate::models::{CreditEstimate, PriceRange};

/// Carbon credits needed to offset `emission_kg` (1 credit = 1000 kg),
/// rounded to 4 decimals.
pub fn credits_for(emission_kg: f64) -> f64 {
    round4(emission_kg / KG_PER_CREDIT)
}

/// BRL price range for a credit count, from the fixed per-credit unit prices.
/// All three figures rounded to 2 decimals; min <= average <= max by
/// construction.
pub fn price_for(credits: f64) -> PriceRange {
    let min = round2(credits * CREDIT_PRICE_MIN_BRL);
    let max = round2(credits * CREDIT_PRICE_MAX_BRL);

    PriceRange {
        min,
        max,
        average: round2((min + max) / 2.0),
    }
}

/// Credits and price range for an emission, in one step.
pub fn estimate(emission_kg: f64) -> CreditEstimate {
    let credits = credits_for(emission_kg);
    CreditEstimate {
        credits,
        price: price_for(credits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_credit_per_thousand_kg() {
        assert_eq!(credits_for(1000.0), 1.0);
        assert_eq!(credits_for(500.0), 0.5);
        assert_eq!(credits_for(0.0), 0.0);
    }

    #[test]
    fn test_credits_rounded_to_four_decimals() {
        assert_eq!(credits_for(51.6), 0.0516);
        assert_eq!(credits_for(412.8), 0.4128);
    }

    #[test]
    fn test_price_for_one_credit() {
        let price = price_for(1.0);
        assert_eq!(price.min, 50.0);
        assert_eq!(price.max, 150.0);
        assert_eq!(price.average, 100.0);
    }

    #[test]
    fn test_price_ordering_invariant() {
        for credits in [0.0, 0.0516, 0.4128, 1.0, 2.5] {
            let price = price_for(credits);
            assert!(price.min <= price.average);
            assert!(price.average <= price.max);
        }
    }

    #[test]
    fn test_estimate_combines_credits_and_price() {
        let estimate = estimate(51.6);
        assert_eq!(estimate.credits, 0.0516);
        assert_eq!(estimate.price.min, 2.58);
        assert_eq!(estimate.price.max, 7.74);
        assert_eq!(estimate.price.average, 5.16);
    }
}
