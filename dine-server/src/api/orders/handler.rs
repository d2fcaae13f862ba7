//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::SessionUser;
use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::OrderRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// POST /api/v1/user/food-order - 下单 (支付字段保持未设置)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.create(payload).await?;

    tracing::info!(email = %order.user_email, food = %order.food_name, "Order placed");

    Ok(Json(order))
}

/// GET /api/v1/customer-orders - 获取全部订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// GET /api/v1/user/food-orders/:userEmail - 用户自己的订单
///
/// 需要有效会话 Cookie，且令牌内邮箱与路径邮箱一致 (大小写不敏感)。
pub async fn list_for_user(
    State(state): State<ServerState>,
    user: SessionUser,
    Path(user_email): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    if !user.email_matches(&user_email) {
        security_log!(
            "WARN",
            "order_email_mismatch",
            session_email = %user.email,
            path_email = %user_email
        );
        return Err(AppError::forbidden("Forbidden access"));
    }

    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_by_user_email(&user_email).await?;
    Ok(Json(orders))
}

/// DELETE /api/v1/user/delete-order/:orderId - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.get_db());
    repo.delete(&order_id).await?;

    tracing::info!(order_id = %order_id, "Order deleted");

    Ok(Json(true))
}
