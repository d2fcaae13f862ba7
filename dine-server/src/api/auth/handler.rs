//! Auth API Handlers
//!
//! Issues and clears the session cookie.

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;

use crate::auth::{clear_session_cookie, session_cookie};
use crate::core::ServerState;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest {
    pub email: String,
}

/// POST /api/v1/auth/access-token - 签发会话 Cookie (1 小时有效)
pub async fn access_token(
    State(state): State<ServerState>,
    Json(payload): Json<AccessTokenRequest>,
) -> AppResult<impl IntoResponse> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(payload.email.clone())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %payload.email, "Session token issued");

    let cookie = session_cookie(&token, jwt_service.expiration_seconds());

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(serde_json::json!({ "success": true })),
    ))
}

/// POST /logOut - 清除会话 Cookie
pub async fn log_out() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "success": true })),
    )
}
