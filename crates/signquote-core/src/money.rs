//! # Money Module
//!
//! Provides the `Money` type for quotation amounts.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    2.2 × 2 × 1.1 × 100 = 484.00000000000006  ❌ WRONG!                  │
//! │                                                                         │
//! │  Sign and print pricing multiplies fractional areas (m²) by            │
//! │  fractional waste factors, so integer cents are not enough either.     │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    dec!(2.2) × dec!(2) × dec!(1.1) × dec!(100) = 484.0 exactly         │
//! │    Same input, same digits, every time                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use signquote_core::money::Money;
//!
//! let price = Money::new(dec!(150));          // per m²
//! let line = price.times(dec!(11));           // 11 m² of material
//! assert_eq!(line.amount(), dec!(1650));
//!
//! let vat = Money::new(dec!(70.35)).round_half_up();
//! assert_eq!(vat.amount(), dec!(70));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major currency units (e.g. 1650.50).
///
/// ## Design Decisions
/// - **Decimal**: exact base-10 arithmetic, no binary float drift
/// - **Signed**: intermediate differences may go negative even though a
///   finished quotation never does
/// - **Single field tuple struct**: serializes as the bare decimal string
///
/// ## Where Money is Used
/// ```text
/// Material.selling_price ──┐
/// LineItem.custom_unit_price ┴─► unit price × material area ──► subtotal
///                                                                  │
///                              discount ◄──────── tier ────────────┤
///                                                                  ▼
///   items subtotal + service charges ──► floor ──► VAT ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use signquote_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1500).to_string(), "1500.00");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity basis (m² or pieces).
    #[inline]
    pub fn times(&self, factor: Decimal) -> Money {
        Money(self.0 * factor)
    }

    /// Returns `percent`% of this amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use signquote_core::money::Money;
    ///
    /// let subtotal = Money::new(dec!(16500));
    /// assert_eq!(subtotal.percentage(dec!(20)).amount(), dec!(3300));
    /// ```
    #[inline]
    pub fn percentage(&self, percent: Decimal) -> Money {
        Money(self.0 * percent / Decimal::ONE_HUNDRED)
    }

    /// Rounds to the nearest whole currency unit, halves away from zero.
    ///
    /// ## Half-Up Rounding
    /// ```text
    /// 70.35 → 70      332.5 → 333      -2.5 → -3
    /// ```
    /// Quotations are printed in whole baht when rounding is enabled, and
    /// customers expect the schoolbook rule rather than banker's rounding.
    #[inline]
    pub fn round_half_up(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns the larger of two amounts.
    #[inline]
    pub fn max(self, other: Money) -> Money {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two decimal places, no currency symbol.
///
/// ## Note
/// This is for logs and debugging. The document renderer owns currency
/// symbols, grouping and localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
