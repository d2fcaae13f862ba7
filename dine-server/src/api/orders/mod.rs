//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/v1/user/food-order", post(handler::create))
        .route("/api/v1/customer-orders", get(handler::list))
        .route(
            "/api/v1/user/food-orders/{userEmail}",
            get(handler::list_for_user),
        )
        .route(
            "/api/v1/user/delete-order/{orderId}",
            delete(handler::delete),
        )
}
