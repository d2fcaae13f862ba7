//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 会话令牌接口
//! - [`users`] - 用户管理接口
//! - [`foods`] - 菜品管理接口 (含动态列表查询)
//! - [`banners`] - 首页轮播图接口
//! - [`orders`] - 订单管理接口
//! - [`cart`] - 购物车接口
//! - [`payment`] - 支付发起与网关回调接口

pub mod auth;
pub mod banners;
pub mod cart;
pub mod foods;
pub mod health;
pub mod orders;
pub mod payment;
pub mod users;

use axum::Router;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health - public route
        .merge(health::router())
        // Auth API - session cookie issue/clear
        .merge(auth::router())
        // Data APIs
        .merge(users::router())
        .merge(banners::router())
        .merge(foods::router())
        .merge(orders::router())
        .merge(cart::router())
        // Payment initiation + gateway callbacks (registered independently
        // at startup; the callbacks share nothing with the initiators but
        // the correlation values)
        .merge(payment::router())
}
