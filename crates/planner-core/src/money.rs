//! # Money Module
//!
//! Provides the `Money` type for every price, subtotal and discount.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHOLE CURRENCY UNITS                                                   │
//! │                                                                         │
//! │  Catalog prices are whole dollars: Auditorium Hall = 5500               │
//! │  Line totals are unit price × integer quantity → always whole          │
//! │                                                                         │
//! │  The ONLY place a fraction can appear is a percentage discount:        │
//! │    760 × 5% = 38.0        → 38                                          │
//! │    455 × 5% = 22.75       → 23                                          │
//! │                                                                         │
//! │  That rounding happens in exactly one function: `Money::percentage`    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use planner_core::money::Money;
//!
//! let hall = Money::from_units(5500);
//! let two_halls = hall.multiply_quantity(2);
//! assert_eq!(two_halls.units(), 11000);
//! assert_eq!(two_halls.to_string(), "$11,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: discount rows are shown negative, and a stale promotion
///   may push a grand total below zero
/// - **Single field tuple struct**: serializes as a bare JSON number
///
/// ## Where Money Flows
/// ```text
/// CatalogItem.unit_price ──► LineItem.total ──► category subtotal
///                                                     │
///                         AppliedPromotion.discount ◄─┘
///                                                     │
///                              grand subtotal ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(3500).units(), 3500);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
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

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Projectors $200
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $600
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Returns `percent`% of this amount, rounded half up.
    ///
    /// ## Rounding
    /// Half-way values round towards positive infinity, so `22.5 → 23`.
    /// Every discount amount in the system is produced by this function.
    ///
    /// ## Implementation
    /// Integer math only: `floor((amount × percent + 50) / 100)`
    ///
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(760).percentage(5).units(), 38);
    /// assert_eq!(Money::from_units(450).percentage(5).units(), 23); // 22.5
    /// ```
    pub fn percentage(&self, percent: u8) -> Money {
        // i128 keeps the intermediate product from overflowing
        let scaled = self.0 as i128 * percent as i128 + 50;
        Money(scaled.div_euclid(100) as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// let subtotal = Money::from_units(11000);
    /// assert_eq!(subtotal.apply_percentage_discount(10).units(), 9900);
    /// ```
    pub fn apply_percentage_discount(&self, percent: u8) -> Money {
        *self - self.percentage(percent)
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Formats a non-negative integer with `,` thousands separators.
///
/// ```rust
/// use planner_core::money::group_digits;
///
/// assert_eq!(group_digits(0), "0");
/// assert_eq!(group_digits(12100), "12,100");
/// assert_eq!(group_digits(1234567), "1,234,567");
/// ```
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Whole-unit USD display: `$12,100`, `-$38`, `$0`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, group_digits(self.0.unsigned_abs()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
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
