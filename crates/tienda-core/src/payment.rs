//! # Payment Status
//!
//! Derives the payment status of an order after a payment is registered.
//!
//! ## Decision Flow
//! ```text
//! current_received + amount_to_add ──► new_total
//!                                         │
//!              round_currency(new_total)  │  round_currency(total_cost)
//!                                         ▼
//!   rounded_total >= rounded_cost AND rounded_cost > 0 ──► Paid
//!   rounded_total > 0 ───────────────────────────────────► Partial
//!   otherwise ───────────────────────────────────────────► Unpaid
//! ```
//!
//! Both sides are rounded before the comparison. Comparing a raw total
//! against a rounded cost moves the Paid boundary by fractions of a cent.
//!
//! A zero-cost order never becomes Paid.

use crate::money::{floor_at_zero, round_currency};
use crate::types::{PaymentStatus, PaymentStatusResult};

/// Registers `amount_to_add` on top of `current_received` and classifies
/// the result against `total_cost`.
///
/// Inputs are not validated. NaN flows into `new_total` and `remaining`.
///
/// ## Example
/// ```rust
/// use tienda_core::payment::calculate_payment_status;
/// use tienda_core::PaymentStatus;
///
/// let result = calculate_payment_status(20.0, 30.0, 100.0);
/// assert_eq!(result.new_total, 50.0);
/// assert_eq!(result.remaining, 50.0);
/// assert_eq!(result.new_status, PaymentStatus::Partial);
/// ```
pub fn calculate_payment_status(
    current_received: f64,
    amount_to_add: f64,
    total_cost: f64,
) -> PaymentStatusResult {
    let new_total = round_currency(current_received + amount_to_add);
    let cost = round_currency(total_cost);

    let new_status = PaymentStatus::classify(new_total, cost);
    let remaining = floor_at_zero(round_currency(cost - new_total));

    PaymentStatusResult {
        new_total,
        remaining,
        new_status,
        status_color: new_status.color().to_string(),
    }
}

impl PaymentStatus {
    /// Derives the status from a received amount and a total cost.
    ///
    /// This is the only source of truth for a status: a stored status that
    /// disagrees with this is stale.
    pub fn derive(received: f64, total_cost: f64) -> PaymentStatus {
        PaymentStatus::classify(round_currency(received), round_currency(total_cost))
    }

    /// Checks that a persisted status matches the amounts it was derived from.
    pub fn is_consistent_with(&self, received: f64, total_cost: f64) -> bool {
        *self == PaymentStatus::derive(received, total_cost)
    }

    /// Classifies already rounded amounts.
    fn classify(rounded_total: f64, rounded_cost: f64) -> PaymentStatus {
        if rounded_total >= rounded_cost && rounded_cost > 0.0 {
            PaymentStatus::Paid
        } else if rounded_total > 0.0 {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Unpaid
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
