//! Cart Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CartItemId = RecordId;

/// Cart line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Option<CartItemId>,
    pub user_email: String,
    /// Referenced food record id (kept as the wire string)
    #[serde(default)]
    pub food_id: String,
    #[serde(default)]
    pub food_name: String,
    /// Line amount
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    pub user_email: String,
    pub food_id: Option<String>,
    pub food_name: Option<String>,
    pub price: Decimal,
    pub quantity: Option<i64>,
}
