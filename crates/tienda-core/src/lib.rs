//! # tienda-core: Business Logic for the Tienda Admin Dashboard
//!
//! The dashboard (inventory, orders, purchases, deliveries, invoices,
//! expenses, users) is a TypeScript app over a REST backend. The few rules
//! that must give the same answer everywhere live here, as pure functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Admin Dashboard / Public Site (TypeScript)         │   │
//! │  │   Orders ──► Payments ──► Purchases ──► Product descriptions    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated types (ts-rs)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  payment  │  │ purchase  │  │   tags    │  │ features  │   │   │
//! │  │   │  status   │  │   cost    │  │  codecs   │  │   store   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO NETWORK • NO DATABASE • PURE CALCULATIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                REST backend (external, not modeled)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`payment`] - Payment status after registering a payment
//! - [`purchase`] - Purchase line total cost
//! - [`tags`] - Tag blocks embedded in description text
//! - [`features`] - Observable admin feature store
//! - [`config`] - Startup configuration
//! - [`types`] - Shared domain types
//! - [`money`] - Currency rounding
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, nothing mutated
//! 2. **No Validation in Calculators**: NaN in, NaN out; the display layer
//!    decides what to show
//! 3. **Lenient Readers**: stored descriptions may be corrupted; tag parsers
//!    return nothing rather than fail
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::payment::calculate_payment_status;
//! use tienda_core::purchase::calculate_total_cost;
//! use tienda_core::PaymentStatus;
//!
//! let cost = calculate_total_cost(25.0, 4.0, 0.0, 0.0, 0.0, 0.0, false);
//! assert_eq!(cost, 100.0);
//!
//! let result = calculate_payment_status(60.0, 40.0, cost);
//! assert_eq!(result.new_status, PaymentStatus::Paid);
//! assert_eq!(result.remaining, 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod features;
pub mod money;
pub mod payment;
pub mod purchase;
pub mod tags;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::CoreConfig;
pub use error::{ConfigError, CoreError, CoreResult, TagError};
pub use features::FeatureStore;
pub use payment::calculate_payment_status;
pub use purchase::{calculate_product_purchase_cost, calculate_total_cost};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to product plus shipping on purchases (7%).
///
/// Fixed by law for the purchases we record; not a per-shop setting.
pub const SALES_TAX_RATE: f64 = 0.07;

/// Dashboard sections that can be toggled, as `(key, label)`.
pub const ADMIN_SECTIONS: &[(&str, &str)] = &[
    ("inventory", "Inventario"),
    ("orders", "Pedidos"),
    ("purchases", "Compras"),
    ("deliveries", "Entregas"),
    ("invoices", "Facturas"),
    ("expenses", "Gastos"),
    ("users", "Usuarios"),
];
