//! Auth API 模块
//!
//! 会话令牌的签发与清除。令牌经 httpOnly Cookie 传递。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/v1/auth/access-token", post(handler::access_token))
        .route("/logOut", post(handler::log_out))
}
