//! Cart API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/v1/user/cart", post(handler::create))
        .route("/api/v1/user/cart/{email}", get(handler::list_for_user))
        .route(
            "/api/v1/user/cart/delete-item/{itemId}",
            delete(handler::delete),
        )
}
