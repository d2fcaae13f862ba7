//! Home Banner API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::BannerSlide;
use crate::db::repository::BannerRepository;
use crate::utils::AppResult;

/// GET /api/v1/home-banner-slider - 获取所有首页轮播图
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BannerSlide>>> {
    let repo = BannerRepository::new(state.get_db());
    let slides = repo.find_all().await?;
    Ok(Json(slides))
}
