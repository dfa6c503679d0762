//! # Purchase Cost
//!
//! Total cost of a purchased product line.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal      = unit_price × quantity                               │
//! │  2. base          = subtotal + shipping                                 │
//! │  3. tax_on_base   = charge_tax ? base × 7% : 0                          │
//! │  4. base_for_rate = base + tax_on_base                                  │
//! │  5. shop_rate_fee = base_for_rate × shop_rate%                          │
//! │  6. total         = base + tax_on_base + shop_rate_fee                  │
//! │                     + added_taxes + own_taxes                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shop fee compounds on top of the sales tax. Reordering these steps
//! changes the result, so the order is fixed.
//!
//! ## Reconciliation
//! When a line was bought in the exact quantity requested, the total stored
//! at request time is authoritative and returned as is. Recomputing it could
//! disagree by a rounding hair with the figure already shown on the order.

use crate::types::{CostBreakdown, PurchaseProduct};
use crate::SALES_TAX_RATE;

/// Inputs of [`calculate_total_cost`], with the usual defaults.
///
/// ## Example
/// ```rust
/// use tienda_core::purchase::TotalCostInput;
///
/// let input = TotalCostInput {
///     unit_price: 10.0,
///     quantity: 2.0,
///     shipping_cost: 5.0,
///     ..TotalCostInput::default()
/// };
/// assert!(input.charge_tax);
/// assert_eq!(input.shop_tax_rate_percent, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalCostInput {
    pub unit_price: f64,
    pub quantity: f64,
    pub shipping_cost: f64,
    pub shop_tax_rate_percent: f64,
    pub added_taxes_fixed: f64,
    pub own_taxes_fixed: f64,
    pub charge_tax: bool,
}

impl Default for TotalCostInput {
    fn default() -> Self {
        TotalCostInput {
            unit_price: 0.0,
            quantity: 0.0,
            shipping_cost: 0.0,
            shop_tax_rate_percent: 0.0,
            added_taxes_fixed: 0.0,
            own_taxes_fixed: 0.0,
            charge_tax: true,
        }
    }
}

impl TotalCostInput {
    /// Runs the computation and keeps every intermediate step.
    pub fn breakdown(&self) -> CostBreakdown {
        let subtotal = self.unit_price * self.quantity;
        let base = subtotal + self.shipping_cost;
        let tax_on_base = if self.charge_tax {
            base * SALES_TAX_RATE
        } else {
            0.0
        };
        let base_for_rate = base + tax_on_base;
        let shop_rate_fee = base_for_rate * (self.shop_tax_rate_percent / 100.0);
        let total =
            base + tax_on_base + shop_rate_fee + self.added_taxes_fixed + self.own_taxes_fixed;

        CostBreakdown {
            subtotal,
            base,
            tax_on_base,
            shop_rate_fee,
            added_taxes: self.added_taxes_fixed,
            own_taxes: self.own_taxes_fixed,
            total,
        }
    }

    /// Total cost only.
    #[inline]
    pub fn total(&self) -> f64 {
        self.breakdown().total
    }
}

/// Total cost of `quantity` units plus shipping and taxes.
///
/// ## Example
/// ```rust
/// use tienda_core::purchase::calculate_total_cost;
///
/// // No tax, no shop fee: just price × quantity + shipping
/// let total = calculate_total_cost(12.5, 4.0, 10.0, 0.0, 0.0, 0.0, false);
/// assert_eq!(total, 60.0);
/// ```
pub fn calculate_total_cost(
    unit_price: f64,
    quantity: f64,
    shipping_cost: f64,
    shop_tax_rate_percent: f64,
    added_taxes_fixed: f64,
    own_taxes_fixed: f64,
    charge_tax: bool,
) -> f64 {
    TotalCostInput {
        unit_price,
        quantity,
        shipping_cost,
        shop_tax_rate_percent,
        added_taxes_fixed,
        own_taxes_fixed,
        charge_tax,
    }
    .total()
}

impl PurchaseProduct {
    /// Calculator inputs from the stored fields, missing numbers as zero.
    pub fn cost_input(&self) -> TotalCostInput {
        TotalCostInput {
            unit_price: self.unit_cost.unwrap_or(0.0),
            quantity: self.amount_buyed.unwrap_or(0.0),
            shipping_cost: self.shipping_cost.unwrap_or(0.0),
            shop_tax_rate_percent: self.shop_tax_rate.unwrap_or(0.0),
            added_taxes_fixed: self.added_taxes.unwrap_or(0.0),
            own_taxes_fixed: self.own_taxes.unwrap_or(0.0),
            charge_tax: self.charge_tax.unwrap_or(true),
        }
    }

    /// True when the line was bought in the exact quantity requested.
    pub fn is_fully_fulfilled(&self) -> bool {
        self.amount_buyed == self.amount_requested
    }

    /// Step-by-step cost for the bought quantity.
    ///
    /// Always recomputes; use [`calculate_product_purchase_cost`] for the
    /// figure to display.
    pub fn cost_breakdown(&self) -> CostBreakdown {
        self.cost_input().breakdown()
    }
}

/// Cost of a purchased product line.
///
/// Returns the stored `total_cost` when the bought quantity matches the
/// requested one, otherwise recomputes from the stored unit cost, shipping
/// and taxes.
///
/// ## Example
/// ```rust
/// use tienda_core::purchase::calculate_product_purchase_cost;
/// use tienda_core::PurchaseProduct;
///
/// let item = PurchaseProduct {
///     amount_buyed: Some(3.0),
///     amount_requested: Some(3.0),
///     total_cost: Some(99.99),
///     unit_cost: Some(30.0),
///     ..PurchaseProduct::default()
/// };
/// assert_eq!(calculate_product_purchase_cost(&item), 99.99);
/// ```
pub fn calculate_product_purchase_cost(item: &PurchaseProduct) -> f64 {
    if item.is_fully_fulfilled() {
        return item.total_cost.unwrap_or(0.0);
    }
    item.cost_input().total()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_tax_is_base_only() {
        for (price, qty, shipping) in [(10.0, 3.0, 5.0), (0.0, 7.0, 2.5), (19.99, 1.0, 0.0)] {
            let total = calculate_total_cost(price, qty, shipping, 0.0, 0.0, 0.0, false);
            assert_eq!(total, price * qty + shipping);
        }
    }

    #[test]
    fn test_sales_tax_on_product_and_shipping() {
        // base = 100 + 0 = 100, tax = 7
        let total = calculate_total_cost(50.0, 2.0, 0.0, 0.0, 0.0, 0.0, true);
        assert!(approx(total, 107.0));

        // shipping is taxed too: base = 90 + 10 = 100
        let total = calculate_total_cost(30.0, 3.0, 10.0, 0.0, 0.0, 0.0, true);
        assert!(approx(total, 107.0));
    }

    #[test]
    fn test_shop_fee_compounds_on_taxed_base() {
        // base 100, tax 7, fee 10% of 107 = 10.7
        let breakdown = TotalCostInput {
            unit_price: 100.0,
            quantity: 1.0,
            shop_tax_rate_percent: 10.0,
            ..TotalCostInput::default()
        }
        .breakdown();

        assert!(approx(breakdown.tax_on_base, 7.0));
        assert!(approx(breakdown.shop_rate_fee, 10.7));
        assert!(approx(breakdown.total, 117.7));
    }

    #[test]
    fn test_fixed_taxes_added_last() {
        let total = calculate_total_cost(100.0, 1.0, 0.0, 10.0, 2.0, 3.0, true);
        assert!(approx(total, 122.7));

        // Fixed taxes are not part of the shop fee base
        let total = calculate_total_cost(100.0, 1.0, 0.0, 10.0, 2.0, 3.0, false);
        assert!(approx(total, 115.0));
    }

    #[test]
    fn test_defaults_charge_tax() {
        let input = TotalCostInput {
            unit_price: 10.0,
            quantity: 1.0,
            ..TotalCostInput::default()
        };
        assert!(approx(input.total(), 10.7));
    }

    #[test]
    fn test_nan_propagates() {
        let total = calculate_total_cost(f64::NAN, 1.0, 0.0, 0.0, 0.0, 0.0, true);
        assert!(total.is_nan());
    }

    #[test]
    fn test_matching_quantities_reuse_stored_total() {
        let item = PurchaseProduct {
            amount_buyed: Some(5.0),
            amount_requested: Some(5.0),
            total_cost: Some(53.51),
            unit_cost: Some(10.0),
            ..PurchaseProduct::default()
        };
        // Recomputing would give 53.5; the stored figure wins
        assert!(approx(item.cost_breakdown().total, 53.5));
        assert_eq!(calculate_product_purchase_cost(&item), 53.51);
    }

    #[test]
    fn test_partial_fulfillment_recomputes() {
        let item = PurchaseProduct {
            amount_buyed: Some(3.0),
            amount_requested: Some(5.0),
            total_cost: Some(53.5),
            unit_cost: Some(10.0),
            shipping_cost: Some(2.0),
            charge_tax: Some(false),
            ..PurchaseProduct::default()
        };
        assert_eq!(calculate_product_purchase_cost(&item), 32.0);
    }

    #[test]
    fn test_missing_fields_count_as_zero() {
        let item = PurchaseProduct {
            amount_buyed: Some(2.0),
            amount_requested: Some(4.0),
            ..PurchaseProduct::default()
        };
        assert_eq!(calculate_product_purchase_cost(&item), 0.0);

        let empty = PurchaseProduct::default();
        assert!(empty.is_fully_fulfilled());
        assert_eq!(calculate_product_purchase_cost(&empty), 0.0);
    }
}
