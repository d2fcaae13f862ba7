//! Banner Slide Repository
//!
//! Read-only from the API's perspective; slides are seeded out of band.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::BannerSlide;

#[derive(Clone)]
pub struct BannerRepository {
    base: BaseRepository,
}

impl BannerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<BannerSlide>> {
        let slides: Vec<BannerSlide> = self
            .base
            .db()
            .query("SELECT * FROM banner_slide")
            .await?
            .take(0)?;
        Ok(slides)
    }
}
