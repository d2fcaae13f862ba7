//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::UserRepository;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// POST /api/v1/users - 创建用户 (邮箱唯一)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let repo = UserRepository::new(state.get_db());

    // Duplicate emails are a client error, not a conflict escalation
    if repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::invalid("User already exists"));
    }

    let user = repo.create(payload).await?;

    tracing::info!(email = %user.email, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/user/role/:email - 查询用户角色记录
pub async fn get_role(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {email}")))?;
    Ok(Json(user))
}
