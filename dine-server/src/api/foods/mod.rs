//! Food API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public catalog
        .route("/api/v1/foods", get(handler::list))
        .route("/api/v1/foods/desc", get(handler::top_selling))
        .route("/api/v1/foodDetails/{foodId}", get(handler::get_by_id))
        // Stock mutation after a purchase
        .route("/api/v1/foods/{foodId}", put(handler::update_stock))
        // Owner-facing management
        .route("/api/v1/user/added-foods", get(handler::added_foods))
        .route("/api/v1/user/add-food", post(handler::create))
        .route("/api/v1/user/update-food/{foodId}", put(handler::update))
        .route("/api/v1/user/delete-food/{foodId}", delete(handler::delete))
}
