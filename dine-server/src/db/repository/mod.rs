//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod banner;
pub mod cart;
pub mod food;
pub mod order;
pub mod user;

// Re-exports
pub use banner::BannerRepository;
pub use cart::CartRepository;
pub use food::{FoodPage, FoodQuery, FoodRepository};
pub use order::OrderRepository;
pub use user::UserRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "food:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("food", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Resolve a path/query id into a RecordId for the given table.
///
/// Accepts both the bare key ("abc") and the full form ("food:abc").
pub fn record_id(table: &str, id: &str) -> RecordId {
    match id.parse::<RecordId>() {
        Ok(rid) if rid.table() == table => rid,
        _ => RecordId::from_table_key(table, id),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
