//! # Domain Types
//!
//! Core domain types shared between the calculators and the dashboard.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  ┌────────────────┐  │
//! │  │ PaymentStatusResult │  │  PurchaseProduct    │  │   ParsedTag    │  │
//! │  │  ─────────────────  │  │  ─────────────────  │  │  ────────────  │  │
//! │  │  newTotal           │  │  amountBuyed        │  │  name          │  │
//! │  │  remaining          │  │  amountRequested    │  │  value         │  │
//! │  │  newStatus ─────────┼─►│  total_cost         │  └────────────────┘  │
//! │  │  statusColor        │  │  unit_cost ...      │                      │
//! │  └─────────────────────┘  └─────────────────────┘  ┌────────────────┐  │
//! │                                                    │  AdminFeature  │  │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  │  ────────────  │  │
//! │  │   PaymentStatus     │  │   CostBreakdown     │  │  key, label    │  │
//! │  │  Unpaid|Paid|Partial│  │  subtotal → total   │  │  enabled       │  │
//! │  └─────────────────────┘  └─────────────────────┘  └────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here derives `TS`, so the dashboard imports the generated
//! bindings instead of redeclaring the shapes by hand.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Payment Status
// =============================================================================

/// Payment state of an order or invoice.
///
/// Never stored on its own authority: it is always recomputable from the
/// received amount and the total cost (see [`PaymentStatus::derive`]).
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    /// Nothing received yet.
    Unpaid,
    /// Received amount covers a non-zero total.
    Paid,
    /// Something received, but not the full total.
    Partial,
}

impl PaymentStatus {
    /// Colour token the dashboard uses for the status badge.
    pub const fn color(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "red",
            PaymentStatus::Paid => "green",
            PaymentStatus::Partial => "orange",
        }
    }

    /// Label as stored by the backend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Unpaid
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of registering a payment against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResult {
    /// Received amount after this payment, rounded to cents.
    pub new_total: f64,
    /// Balance still owed, rounded to cents, never below zero.
    pub remaining: f64,
    /// Status derived from `new_total` and the total cost.
    pub new_status: PaymentStatus,
    /// Colour token for `new_status`.
    pub status_color: String,
}

// =============================================================================
// Purchase
// =============================================================================

/// A purchased product line as stored by the backend.
///
/// Every numeric field is optional: older records lack the tax columns,
/// and missing values count as zero in the cost math.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseProduct {
    /// Quantity actually bought.
    #[serde(rename = "amountBuyed", default)]
    pub amount_buyed: Option<f64>,

    /// Quantity originally requested.
    #[serde(rename = "amountRequested", default)]
    pub amount_requested: Option<f64>,

    /// Total persisted when the purchase was first recorded.
    #[serde(default)]
    pub total_cost: Option<f64>,

    /// Price per unit.
    #[serde(default)]
    pub unit_cost: Option<f64>,

    /// Shipping charged for the line.
    #[serde(default)]
    pub shipping_cost: Option<f64>,

    /// Shop fee as a percentage (3.5 = 3.5%).
    #[serde(default)]
    pub shop_tax_rate: Option<f64>,

    /// Fixed taxes added by the seller.
    #[serde(default)]
    pub added_taxes: Option<f64>,

    /// Fixed taxes we add ourselves.
    #[serde(default)]
    pub own_taxes: Option<f64>,

    /// Whether the 7% sales tax applies. Missing means yes.
    #[serde(default)]
    pub charge_tax: Option<bool>,
}

/// Each step of the purchase cost computation, in computation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub subtotal: f64,
    pub base: f64,
    pub tax_on_base: f64,
    pub shop_rate_fee: f64,
    pub added_taxes: f64,
    pub own_taxes: f64,
    pub total: f64,
}

// =============================================================================
// Tags
// =============================================================================

/// A name/value tag embedded in a free-text description.
///
/// Order is meaningful and duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ParsedTag {
    pub name: String,
    pub value: String,
}

impl ParsedTag {
    /// Creates a tag from anything string-like.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ParsedTag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A tag as the forms hand it over: either `"Talla: L"` text or a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum TagInput {
    /// Free text, split on the first `:` or `=`.
    Text(String),
    /// Already split.
    Pair(ParsedTag),
}

impl From<ParsedTag> for TagInput {
    fn from(tag: ParsedTag) -> Self {
        TagInput::Pair(tag)
    }
}

impl From<&str> for TagInput {
    fn from(text: &str) -> Self {
        TagInput::Text(text.to_string())
    }
}

impl From<String> for TagInput {
    fn from(text: String) -> Self {
        TagInput::Text(text)
    }
}

// =============================================================================
// Admin Features
// =============================================================================

/// A dashboard section that can be switched on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminFeature {
    /// Stable identifier (`"inventory"`, `"orders"`, ...).
    pub key: String,
    /// Menu label.
    pub label: String,
    pub enabled: bool,
}

impl AdminFeature {
    pub fn new(key: impl Into<String>, label: impl Into<String>, enabled: bool) -> Self {
        AdminFeature {
            key: key.into(),
            label: label.into(),
            enabled,
        }
    }

    /// The dashboard sections, all enabled.
    pub fn defaults() -> Vec<AdminFeature> {
        crate::ADMIN_SECTIONS
            .iter()
            .map(|(key, label)| AdminFeature::new(*key, *label, true))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
