//! User account integration tests.
//! Run: cargo test -p dine-server --test accounts

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tempfile::TempDir;

use dine_server::db::models::UserCreate;
use dine_server::db::repository::{RepoError, UserRepository};

async fn test_db() -> (Surreal<Db>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    (db, tmp)
}

fn user(email: &str) -> UserCreate {
    UserCreate {
        email: email.to_string(),
        name: Some("Alice".to_string()),
        role: None,
    }
}

#[tokio::test]
async fn fresh_email_creates_exactly_one_user() {
    let (db, _tmp) = test_db().await;
    let repo = UserRepository::new(db);

    let created = repo.create(user("alice@example.com")).await.unwrap();
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.role, "user");

    let found = repo.find_by_email("alice@example.com").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let (db, _tmp) = test_db().await;
    let repo = UserRepository::new(db);

    repo.create(user("alice@example.com")).await.unwrap();

    let duplicate = repo.create(user("ALICE@Example.COM")).await;
    assert!(matches!(duplicate, Err(RepoError::Duplicate(_))));

    // Still exactly one record under that identity
    let found = repo.find_by_email("Alice@example.com").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn missing_user_lookup_returns_none() {
    let (db, _tmp) = test_db().await;
    let repo = UserRepository::new(db);

    let found = repo.find_by_email("ghost@example.com").await.unwrap();
    assert!(found.is_none());
}
