//! User API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/v1/users", post(handler::create))
        .route("/api/v1/user/role/{email}", get(handler::get_role))
}
