//! # Pack Consistency
//!
//! Recomputes a pack's total from its (possibly repriced) components and
//! compares it against the pack's own (possibly repriced) price.
//!
//! ## Effective Prices
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Pack 1020 (stored 57.00)      Batch: { 19 → 7.87, 1020 → 58.74 }   │
//! │  ├── component 19, qty 3       effective: 7.87  (from batch)        │
//! │  └── component 21, qty 3       effective: 11.71 (stored price)      │
//! │                                                                     │
//! │  computed total = 7.87×3 + 11.71×3 = 58.74                          │
//! │  pack effective = 58.74 (from batch)                                │
//! │                                                                     │
//! │  58.74 == 58.74 → consistent                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Equality is exact to the cent. A one-cent mismatch is a violation: the
//! business rule is "pack price must equal the sum of its products", with
//! no rounding tolerance. Keeping prices in integer cents (and rejecting
//! sub-cent input at the edge) is what makes that strictness safe.

use crate::error::Violation;
use crate::money::Money;
use crate::types::{proposed_price, PackInfo, PriceChange};

/// Checks one resolved pack against the whole proposed batch.
///
/// The batch acts as a read-only price-override source: every component
/// (and the pack itself) is priced at its batch proposal when present,
/// otherwise at its stored sales price. Returns at most one violation.
///
/// Pure function of its inputs; the caller decides which report entries
/// the violation lands on.
pub fn check(pack: &PackInfo, batch: &[PriceChange]) -> Vec<Violation> {
    let computed_total = pack
        .components
        .iter()
        .map(|component| {
            let effective = proposed_price(batch, component.product.code)
                .unwrap_or(component.product.sales_cents);
            effective * component.qty
        })
        .fold(Money::zero(), |total, line| total + line);

    let pack_effective = proposed_price(batch, pack.pack.code).unwrap_or(pack.pack.sales_cents);

    if computed_total != pack_effective {
        return vec![Violation::PackPriceMismatch];
    }

    Vec::new()
}

// =============================================================================
// Unit Tests
// =============================================================================
