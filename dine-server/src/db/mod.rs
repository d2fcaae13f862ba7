//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). Tables are schemaless documents;
//! the REST payload shape (camelCase) is stored as-is.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "restaurant";
const DATABASE: &str = "restaurant";

/// Open the embedded database under the given directory.
pub async fn connect(db_path: &Path) -> Result<Surreal<Db>, AppError> {
    let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    tracing::info!(path = %db_path.display(), "Database connection established (SurrealDB embedded)");

    Ok(db)
}
