//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  The pack consistency check compares totals with EXACT equality:    │
//! │    7.87 * 3 + 11.71 * 3 must equal 58.74 to the cent.               │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    787 * 3 + 1171 * 3 == 5874       ✅ Exact, always.               │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(729); // 7.29
//!
//! // Or parse a 2-decimal string at the ingestion edge
//! let parsed = Money::parse_decimal("7.29").unwrap();
//! assert_eq!(price, parsed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::MoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Deltas during band evaluation may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Exactly 2 fractional digits**: Enforced at the parsing edge, so the
///   exact-equality pack check never sees sub-cent precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(5700); // 57.00
    /// assert_eq!(price.cents(), 5700);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Parses a fixed-point decimal string with at most 2 fractional digits.
    ///
    /// This is the ingestion gate for every price that enters the engine:
    /// anything finer than a cent is rejected here, before rule evaluation,
    /// so the exact-equality consistency check never has to reason about
    /// sub-cent drift.
    ///
    /// ## Accepted Forms
    /// - `"57"`    → 5700 cents
    /// - `"7.2"`   → 720 cents (short fractions normalise)
    /// - `"7.29"`  → 729 cents
    /// - `"-0.50"` → -50 cents
    ///
    /// ## Rejected Forms
    /// - `"7.295"` → [`MoneyError::TooManyDecimals`]
    /// - `""`, `"."`, `"7,29"`, `"abc"` → [`MoneyError::Invalid`]
    pub fn parse_decimal(input: &str) -> Result<Self, MoneyError> {
        let trimmed = input.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(MoneyError::Invalid(input.to_string()));
        }

        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyError::Invalid(input.to_string()));
        }

        if frac_part.len() > 2 {
            return Err(MoneyError::TooManyDecimals(frac_part.len()));
        }

        let units: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| MoneyError::Invalid(input.to_string()))?
        };

        // Normalise short fractions: "7.2" means 7.20, not 7.02
        let frac_cents: i64 = match frac_part.len() {
            0 => 0,
            1 => frac_part.parse::<i64>().map_err(|_| MoneyError::Invalid(input.to_string()))? * 10,
            _ => frac_part
                .parse()
                .map_err(|_| MoneyError::Invalid(input.to_string()))?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| MoneyError::Invalid(input.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the fixed-point decimal form, e.g. `57.00` or `-5.50`.
///
/// ## Note
/// This is for logs and debugging. Caller-facing formatting (currency
/// symbols, locale) is the transport layer's concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when summing pack component totals.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a component quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
