//! # Price Rules
//!
//! The per-product rule evaluator: floor-at-cost and the ±10% band.
//!
//! ## Rule Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  evaluate(product, new_price)                                       │
//! │       │                                                             │
//! │       ├── new_price < cost?        → PriceBelowCost                 │
//! │       │                                                             │
//! │       ├── |Δ| > 10% of current?    → PriceOutsideBand               │
//! │       │                                                             │
//! │       └── returns 0, 1 or 2 violations, ALWAYS in that order        │
//! │                                                                     │
//! │  The rules are independent: a price can be below cost AND outside   │
//! │  the band, and the report then carries both messages.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure functions only; the pack consistency rule lives in
//! [`consistency`](crate::consistency) because it needs the whole batch.

use crate::error::Violation;
use crate::money::Money;
use crate::types::Product;
use crate::PRICE_BAND_PERCENT;

/// Evaluates both per-product rules against a proposed price.
///
/// Returns the violations in evaluation order: floor rule first, band rule
/// second. No side effects; same inputs always yield the same output.
pub fn evaluate(product: &Product, new_price: Money) -> Vec<Violation> {
    let mut violations = Vec::new();

    if below_cost(product, new_price) {
        violations.push(Violation::PriceBelowCost);
    }

    if outside_band(product.sales_cents, new_price) {
        violations.push(Violation::PriceOutsideBand);
    }

    violations
}

/// Floor rule: the proposed price may not undercut the cost price.
///
/// Exact cent comparison; a price equal to cost passes.
fn below_cost(product: &Product, new_price: Money) -> bool {
    new_price < product.cost_cents
}

/// Band rule: the proposed price may not move more than
/// [`PRICE_BAND_PERCENT`] percent from the current price, in either
/// direction.
///
/// Evaluated in integer math as `|Δ| * 100 > current * band`, the
/// division-free form of `|Δ| / current * 100 > band`. This keeps the
/// boundary exact: a change of precisely 10% passes.
///
/// ## Zero Current Price
/// With a current price of zero the percentage change is unbounded, and
/// the same inequality makes that explicit: any non-zero proposal fails,
/// a zero proposal passes. No division, no panic.
fn outside_band(current: Money, new_price: Money) -> bool {
    let delta = (new_price - current).abs();

    // i128 so pathological i64 prices cannot overflow the products
    (delta.cents() as i128) * 100 > (current.cents() as i128) * PRICE_BAND_PERCENT as i128
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(cost_cents: i64, sales_cents: i64) -> Product {
        Product {
            code: 16,
            name: "test product".to_string(),
            cost_cents: Money::from_cents(cost_cents),
            sales_cents: Money::from_cents(sales_cents),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_floor_rule_fires_below_cost() {
        let p = product(1900, 2000);
        let violations = evaluate(&p, Money::from_cents(1850));
        assert!(violations.contains(&Violation::PriceBelowCost));
    }

    #[test]
    fn test_floor_rule_passes_at_exactly_cost() {
        let p = product(1900, 2000);
        let violations = evaluate(&p, Money::from_cents(1900));
        assert!(!violations.contains(&Violation::PriceBelowCost));
    }

    #[test]
    fn test_band_rule_fires_above_ten_percent() {
        let p = product(1000, 2000);

        // +10.05% and -10.05%
        assert!(evaluate(&p, Money::from_cents(2201)).contains(&Violation::PriceOutsideBand));
        assert!(evaluate(&p, Money::from_cents(1799)).contains(&Violation::PriceOutsideBand));
    }

    #[test]
    fn test_band_rule_passes_at_exactly_ten_percent() {
        let p = product(1000, 2000);

        // 2000 ± 200 is exactly 10% in both directions
        assert!(evaluate(&p, Money::from_cents(2200)).is_empty());
        assert!(evaluate(&p, Money::from_cents(1800)).is_empty());
    }

    #[test]
    fn test_band_rule_passes_within_band() {
        let p = product(1000, 2000);
        assert!(evaluate(&p, Money::from_cents(2100)).is_empty());
        assert!(evaluate(&p, Money::from_cents(2000)).is_empty());
    }

    #[test]
    fn test_zero_current_price_fails_any_change() {
        // Percentage change from zero is unbounded: every non-zero proposal
        // is outside the band, only "stay at zero" passes.
        let p = product(0, 0);
        assert!(evaluate(&p, Money::from_cents(1)).contains(&Violation::PriceOutsideBand));
        assert!(evaluate(&p, Money::zero()).is_empty());
    }

    #[test]
    fn test_both_rules_fire_in_order() {
        // 15.00 is below the 19.00 cost AND more than 10% below 21.00
        let p = product(1900, 2100);
        let violations = evaluate(&p, Money::from_cents(1500));

        assert_eq!(
            violations,
            vec![Violation::PriceBelowCost, Violation::PriceOutsideBand]
        );
    }

    #[test]
    fn test_rules_are_pure() {
        let p = product(729, 729);
        let first = evaluate(&p, Money::from_cents(787));
        let second = evaluate(&p, Money::from_cents(787));
        assert_eq!(first, second);
    }
}
