//! # Money Module
//!
//! Rounding helpers for currency amounts.
//!
//! ## Why f64 and not integer cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Amounts arrive from the REST backend and the dashboard forms as        │
//! │  plain JSON numbers. A malformed field turns into NaN upstream, and     │
//! │  the dashboard relies on NaN reaching the display layer so it can       │
//! │  show a placeholder instead of a wrong figure.                          │
//! │                                                                         │
//! │  So we keep f64 end to end, and fight drift by rounding to cents        │
//! │  at the comparison points:                                              │
//! │                                                                         │
//! │    0.1 + 0.2           = 0.30000000000000004                            │
//! │    round_currency(...) = 0.3                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tienda_core::money::round_currency;
//!
//! assert_eq!(round_currency(0.1 + 0.2), 0.3);
//! assert_eq!(round_currency(-0.125), -0.13);
//! ```

/// Number of minor units in one major unit (cents per dollar).
const MINOR_UNITS: f64 = 100.0;

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// NaN and infinities pass through unchanged.
///
/// ## Example
/// ```rust
/// use tienda_core::money::round_currency;
///
/// assert_eq!(round_currency(10.125), 10.13);
/// assert_eq!(round_currency(99.994), 99.99);
/// assert!(round_currency(f64::NAN).is_nan());
/// ```
#[inline]
pub fn round_currency(amount: f64) -> f64 {
    (amount * MINOR_UNITS).round() / MINOR_UNITS
}

/// Floors an amount at zero while letting NaN through.
///
/// `f64::max` would turn NaN into 0, which hides a broken input from the
/// display layer.
#[inline]
pub fn floor_at_zero(amount: f64) -> f64 {
    if amount < 0.0 {
        0.0
    } else {
        amount
    }
}

/// Converts an amount to whole minor units at `decimals` places, rounding
/// half away from zero.
///
/// Returns `None` for NaN, infinite amounts, and amounts whose minor units
/// do not fit in an `i64`.
///
/// ## Example
/// ```rust
/// use tienda_core::money::to_minor_units;
///
/// assert_eq!(to_minor_units(12.34, 2), Some(1234));
/// assert_eq!(to_minor_units(1e17, 2), None);
/// ```
pub fn to_minor_units(amount: f64, decimals: u32) -> Option<i64> {
    // 2^63: i64::MIN is exactly -I64_BOUND, i64::MAX is just below I64_BOUND
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    let scaled = (amount * 10_f64.powi(decimals as i32)).round();
    if !scaled.is_finite() || scaled < -I64_BOUND || scaled >= I64_BOUND {
        return None;
    }
    Some(scaled as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================
