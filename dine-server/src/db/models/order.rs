//! Order Model
//!
//! Payment lifecycle: `payment` is absent while the order is open, and is
//! written exactly once by a gateway callback: `complete` (with a
//! transaction id) or `failed` (without one). No code path rewrites a
//! terminal value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Terminal payment outcome reported by the gateway callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Complete,
    Failed,
}

/// Order model
///
/// Two flavors share the table: single-food orders carry `price`,
/// cart-checkout orders carry `total_bill` and a generated `code` used to
/// correlate gateway callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<OrderId>,
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub food_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bill: Option<Decimal>,
    /// Checkout correlation code (cart flow only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_email: String,
    pub user_name: Option<String>,
    pub food_name: String,
    pub food_category: Option<String>,
    pub price: Decimal,
}

/// Inline cart-checkout payload; becomes an order with a generated code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCreate {
    pub user_email: String,
    pub user_name: Option<String>,
    pub total_bill: Decimal,
}

/// Value a gateway callback uses to find its originating order.
#[derive(Debug, Clone)]
pub enum Correlation {
    /// The order's own record id (single-food flow)
    OrderId(String),
    /// The generated checkout code (cart flow)
    Code(String),
}
