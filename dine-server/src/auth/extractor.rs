//! Session Extractor
//!
//! Custom extractor validating the `token` session cookie.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{SESSION_COOKIE, SessionUser};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Pull the session token out of the Cookie header.
fn token_from_cookies(parts: &Parts) -> Option<&str> {
    let header = parts
        .headers
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

/// Session Auth Extractor
///
/// Use this extractor in protected handlers to automatically validate the
/// session cookie and extract the SessionUser
impl FromRequestParts<ServerState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted
        if let Some(user) = parts.extensions.get::<SessionUser>() {
            return Ok(user.clone());
        }

        let token = match token_from_cookies(parts) {
            Some(token) => token,
            None => {
                security_log!("WARN", "auth_missing", uri = ?parts.uri);
                return Err(AppError::Unauthorized);
            }
        };

        let jwt_service = state.get_jwt_service();
        match jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = SessionUser::from(claims);

                tracing::debug!(email = %user.email, "Session validated");

                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                security_log!("WARN", "auth_failed", error = %e, uri = ?parts.uri);

                match e {
                    crate::auth::jwt::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
