//! Payment API 模块
//!
//! 发起支付 (单品订单 / 购物车结算) 与网关回调。回调路由在启动时独立
//! 注册，与发起路由只共享关联值 (orderId 或 code)。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Initiation
        .route("/api/v1/user/food/payment/{id}", post(handler::pay_order))
        .route("/api/v1/user/foods/payment", post(handler::pay_cart))
        // Gateway callbacks
        .route(
            "/api/v1/user/payment/success/{tranId}",
            post(handler::payment_success),
        )
        .route(
            "/api/v1/user/payment/fail/{tranId}",
            post(handler::payment_fail),
        )
}
