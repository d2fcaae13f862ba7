//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Food, FoodCreate, FoodStockUpdate, FoodUpdate};
use crate::db::repository::{FoodPage, FoodQuery, FoodRepository};
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/v1/foods - 动态列表查询 (过滤/排序/分页/搜索)
///
/// 返回 `{ result, count }`，其中 count 是全表计数 (不随过滤条件变化)。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FoodQuery>,
) -> AppResult<Json<FoodPage>> {
    let repo = FoodRepository::new(state.get_db());
    let page = repo.search(&query).await?;
    Ok(Json(page))
}

/// GET /api/v1/foods/desc - 按销量降序获取全部菜品
pub async fn top_selling(State(state): State<ServerState>) -> AppResult<Json<Vec<Food>>> {
    let repo = FoodRepository::new(state.get_db());
    let foods = repo.find_all_by_sell_count().await?;
    Ok(Json(foods))
}

/// GET /api/v1/foodDetails/:foodId - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.get_db());
    let food = repo
        .find_by_id(&food_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food {food_id}")))?;
    Ok(Json(food))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedFoodsQuery {
    pub user_email: Option<String>,
    pub food_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedFoodsResponse {
    pub result: Vec<Food>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_result: Option<Food>,
}

/// GET /api/v1/user/added-foods?userEmail&foodId - 用户添加的菜品
///
/// userEmail 必填；带 foodId 时额外返回该用户名下的单个菜品。
pub async fn added_foods(
    State(state): State<ServerState>,
    Query(query): Query<AddedFoodsQuery>,
) -> AppResult<Json<AddedFoodsResponse>> {
    let user_email = query
        .user_email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::validation("User email is required"))?;

    let repo = FoodRepository::new(state.get_db());

    let single_result = match &query.food_id {
        Some(food_id) => repo.find_owned(user_email, food_id).await?,
        None => None,
    };

    let result = repo.find_by_owner(user_email).await?;

    Ok(Json(AddedFoodsResponse {
        result,
        single_result,
    }))
}

/// POST /api/v1/user/add-food - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodCreate>,
) -> AppResult<Json<Food>> {
    validate_required_text(&payload.food_name, "foodName", MAX_NAME_LEN)?;
    validate_required_text(&payload.user_email, "userEmail", MAX_EMAIL_LEN)?;

    let repo = FoodRepository::new(state.get_db());
    let food = repo.create(payload).await?;

    tracing::info!(food = %food.food_name, "Food created");

    Ok(Json(food))
}

/// PUT /api/v1/foods/:foodId - 购买后更新库存 (quantity/sellCount, upsert)
pub async fn update_stock(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
    Json(payload): Json<FoodStockUpdate>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.get_db());
    let food = repo.update_stock(&food_id, payload).await?;
    Ok(Json(food))
}

/// PUT /api/v1/user/update-food/:foodId - 更新菜品 (upsert)
pub async fn update(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
    Json(payload): Json<FoodUpdate>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.get_db());
    let food = repo.update(&food_id, payload).await?;
    Ok(Json(food))
}

/// DELETE /api/v1/user/delete-food/:foodId - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FoodRepository::new(state.get_db());
    repo.delete(&food_id).await?;

    tracing::info!(food_id = %food_id, "Food deleted");

    Ok(Json(true))
}
