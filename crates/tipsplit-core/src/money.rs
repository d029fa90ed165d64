//! # Money Module
//!
//! Provides the `Money` type used at the display boundary.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The engine works in f64 because the form hands over decimal text and  │
//! │  the split is a plain ratio:                                            │
//! │                                                                         │
//! │    compute_result(100.0, 15.0, 4) → { 3.75, 28.75 }                     │
//! │                                                                         │
//! │  Anything shown to the user goes through Money first:                  │
//! │                                                                         │
//! │    28.75 ──► Money::from_amount ──► 2875 cents ──► "$28.75"            │
//! │                                                                         │
//! │  Rounding happens exactly once, to the nearest cent.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::money::Money;
//!
//! let share = Money::from_amount(28.75);
//! assert_eq!(share.cents(), 2875);
//! assert_eq!(share.to_string(), "$28.75");
//! ```

use std::fmt;

/// Symbol used by [`Money`]'s `Display` implementation.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a calculated amount to the nearest cent.
    ///
    /// Rounds the exact binary value of `amount`, so `2.23 / 2` (stored just
    /// below `1.115`) gives 111 cents. Exact halves round away from zero.
    /// NaN and infinities become zero, and amounts beyond the `i64` cent
    /// range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(3.75).cents(), 375);
    /// assert_eq!(Money::from_amount(0.125).cents(), 13);
    /// assert_eq!(Money::from_amount(2.23 / 2.0).cents(), 111);
    /// assert_eq!(Money::from_amount(f64::NAN).cents(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }

        let scaled = amount * 100.0;
        // scaled + error == amount * 100 exactly.
        let error = amount.mul_add(100.0, -scaled);
        let mut cents = scaled.round();

        // A product that rounded onto a half-cent hides which side it came from.
        if cents - scaled == 0.5 && error < 0.0 {
            cents -= 1.0;
        } else if scaled - cents == 0.5 && error > 0.0 {
            cents += 1.0;
        }

        // `as` saturates on overflow.
        Money(cents as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats with an explicit currency symbol and exactly two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1234).format_with_symbol("€"), "€12.34");
    /// assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$0.05");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

/// Formats a calculated amount for display, e.g. `3.75` → `"$3.75"`.
///
/// Non-finite input renders as `$0.00`.
pub fn format_amount(amount: f64) -> String {
    Money::from_amount(amount).to_string()
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::from_cents(1099);
        assert_eq!(m.cents(), 1099);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 99);
    }

    #[test]
    fn test_from_amount_rounds_to_cent() {
        assert_eq!(Money::from_amount(28.75).cents(), 2875);
        assert_eq!(Money::from_amount(33.333_333).cents(), 3333);
        assert_eq!(Money::from_amount(66.666_666).cents(), 6667);
        assert_eq!(Money::from_amount(0.0).cents(), 0);
        assert_eq!(Money::from_amount(-0.0).cents(), 0);
    }

    #[test]
    fn test_from_amount_non_finite_is_zero() {
        assert_eq!(Money::from_amount(f64::INFINITY), Money::zero());
        assert_eq!(Money::from_amount(f64::NEG_INFINITY), Money::zero());
        assert_eq!(Money::from_amount(f64::NAN), Money::zero());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(100).to_string(), "$1.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.75), "$3.75");
        assert_eq!(format_amount(25.0), "$25.00");
        assert_eq!(format_amount(f64::NAN), "$0.00");
    }

    #[test]
    fn test_from_amount_uses_exact_value_near_half_cent() {
        // Quotients that land just below a half-cent round down.
        assert_eq!(Money::from_amount(2.23 / 2.0).cents(), 111);
        assert_eq!(Money::from_amount(1.115).cents(), 111);
        assert_eq!(Money::from_amount(-1.115).cents(), -111);
        assert_eq!(Money::from_amount(28.755).cents(), 2875);

        // True halves still round away from zero.
        assert_eq!(Money::from_amount(0.125).cents(), 13);
        assert_eq!(Money::from_amount(-0.125).cents(), -13);
        assert_eq!(Money::from_amount(10.625).cents(), 1063);
    }
}
