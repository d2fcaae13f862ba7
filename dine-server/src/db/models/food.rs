//! Food Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type FoodId = RecordId;

/// Food (menu item) model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: Option<FoodId>,
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub food_category: String,
    #[serde(default)]
    pub food_image: String,
    #[serde(default)]
    pub price: Decimal,
    /// Units in stock; decremented by the stock update, not the general update
    #[serde(default)]
    pub quantity: i64,
    /// Lifetime units sold; drives the top-selling listing
    #[serde(default)]
    pub sell_count: i64,
    #[serde(default)]
    pub food_origin: String,
    #[serde(default)]
    pub short_description: String,
    /// Owner (the user who added this item). Default-empty so that partial
    /// documents created by the upsert paths still deserialize.
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCreate {
    pub food_name: String,
    pub food_category: String,
    pub food_image: Option<String>,
    pub price: Decimal,
    pub quantity: Option<i64>,
    pub sell_count: Option<i64>,
    pub food_origin: Option<String>,
    pub short_description: Option<String>,
    pub user_email: String,
    pub user_name: Option<String>,
}

/// General (owner-facing) food update. Upsert semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdate {
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub food_category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
    pub food_origin: Option<String>,
    pub short_description: Option<String>,
}

/// Stock mutation applied after a purchase: quantity and sellCount only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodStockUpdate {
    pub quantity: i64,
    pub sell_count: i64,
}
