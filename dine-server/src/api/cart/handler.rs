//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{CartItem, CartItemCreate};
use crate::db::repository::CartRepository;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_required_text};
use crate::utils::AppResult;

/// POST /api/v1/user/cart - 加入购物车
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<CartItem>> {
    validate_required_text(&payload.user_email, "userEmail", MAX_EMAIL_LEN)?;

    let repo = CartRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(Json(item))
}

/// GET /api/v1/user/cart/:email - 用户购物车
pub async fn list_for_user(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<CartItem>>> {
    let repo = CartRepository::new(state.get_db());
    let items = repo.find_by_user_email(&email).await?;
    Ok(Json(items))
}

/// DELETE /api/v1/user/cart/delete-item/:itemId - 移除购物车条目
pub async fn delete(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CartRepository::new(state.get_db());
    repo.delete(&item_id).await?;
    Ok(Json(true))
}
