//! Order/payment state machine integration tests.
//! Run: cargo test -p dine-server --test payment_flow

use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tempfile::TempDir;

use dine_server::db::models::{
    CartItemCreate, CheckoutCreate, Correlation, OrderCreate, PaymentStatus,
};
use dine_server::db::repository::{CartRepository, OrderRepository};
use dine_server::gateway;

async fn test_db() -> (Surreal<Db>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    (db, tmp)
}

fn order(email: &str) -> OrderCreate {
    OrderCreate {
        user_email: email.to_string(),
        user_name: Some("Alice".to_string()),
        food_name: "Ramen".to_string(),
        food_category: Some("Main".to_string()),
        price: Decimal::from(14),
    }
}

fn cart_item(email: &str, name: &str) -> CartItemCreate {
    CartItemCreate {
        user_email: email.to_string(),
        food_id: None,
        food_name: Some(name.to_string()),
        price: Decimal::from(5),
        quantity: Some(1),
    }
}

#[tokio::test]
async fn success_callback_completes_order_and_stores_transaction_id() {
    let (db, _tmp) = test_db().await;
    let repo = OrderRepository::new(db);

    let placed = repo.create(order("alice@example.com")).await.unwrap();
    assert!(placed.payment.is_none());

    let corr = Correlation::OrderId(placed.id.as_ref().unwrap().to_string());
    let updated = repo
        .record_payment(&corr, PaymentStatus::Complete, Some("tx-1".to_string()))
        .await
        .unwrap()
        .expect("open order should be updated");

    assert_eq!(updated.payment, Some(PaymentStatus::Complete));
    assert_eq!(updated.transaction_id.as_deref(), Some("tx-1"));
}

#[tokio::test]
async fn fail_callback_records_failure_without_transaction_id() {
    let (db, _tmp) = test_db().await;
    let repo = OrderRepository::new(db);

    let placed = repo.create(order("alice@example.com")).await.unwrap();
    let corr = Correlation::OrderId(placed.id.as_ref().unwrap().to_string());

    let updated = repo
        .record_payment(&corr, PaymentStatus::Failed, None)
        .await
        .unwrap()
        .expect("open order should be updated");

    assert_eq!(updated.payment, Some(PaymentStatus::Failed));
    assert!(updated.transaction_id.is_none());
}

#[tokio::test]
async fn unknown_correlation_mutates_nothing() {
    let (db, _tmp) = test_db().await;
    let repo = OrderRepository::new(db.clone());

    let placed = repo.create(order("alice@example.com")).await.unwrap();

    // Bogus record id and bogus checkout code both miss
    for corr in [
        Correlation::OrderId("order:doesnotexist".to_string()),
        Correlation::Code("nosuchcode".to_string()),
    ] {
        let updated = repo
            .record_payment(&corr, PaymentStatus::Complete, Some("tx-9".to_string()))
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    let reloaded = repo
        .find_by_id(&placed.id.as_ref().unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.payment.is_none());
    assert!(reloaded.transaction_id.is_none());
}

#[tokio::test]
async fn terminal_order_is_never_rewritten() {
    let (db, _tmp) = test_db().await;
    let repo = OrderRepository::new(db);

    let placed = repo.create(order("alice@example.com")).await.unwrap();
    let corr = Correlation::OrderId(placed.id.as_ref().unwrap().to_string());

    repo.record_payment(&corr, PaymentStatus::Complete, Some("tx-1".to_string()))
        .await
        .unwrap()
        .expect("first callback settles the order");

    // A late fail callback for the same order matches zero records
    let second = repo
        .record_payment(&corr, PaymentStatus::Failed, None)
        .await
        .unwrap();
    assert!(second.is_none());

    let reloaded = repo
        .find_by_id(&placed.id.as_ref().unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.payment, Some(PaymentStatus::Complete));
    assert_eq!(reloaded.transaction_id.as_deref(), Some("tx-1"));
}

#[tokio::test]
async fn checkout_code_correlates_the_inline_order() {
    let (db, _tmp) = test_db().await;
    let repo = OrderRepository::new(db);

    let checkout = CheckoutCreate {
        user_email: "alice@example.com".to_string(),
        user_name: Some("Alice".to_string()),
        total_bill: Decimal::from(42),
    };
    let created = repo
        .create_checkout(checkout, "code-123".to_string())
        .await
        .unwrap();
    assert_eq!(created.code.as_deref(), Some("code-123"));
    assert_eq!(created.total_bill, Some(Decimal::from(42)));

    let corr = Correlation::Code("code-123".to_string());
    let found = repo.find_by_correlation(&corr).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    let updated = repo
        .record_payment(&corr, PaymentStatus::Complete, Some("tx-7".to_string()))
        .await
        .unwrap()
        .expect("checkout order should settle");
    assert_eq!(updated.payment, Some(PaymentStatus::Complete));
}

#[tokio::test]
async fn cart_cleanup_is_scoped_to_the_paying_user() {
    let (db, _tmp) = test_db().await;
    let cart = CartRepository::new(db);

    cart.create(cart_item("alice@example.com", "Ramen")).await.unwrap();
    cart.create(cart_item("Alice@Example.com", "Baklava")).await.unwrap();
    cart.create(cart_item("bob@example.com", "Burger")).await.unwrap();

    // Case-insensitive: both of Alice's rows go, Bob's stays
    let removed = cart.delete_for_user("alice@example.com").await.unwrap();
    assert_eq!(removed, 2);

    assert!(cart.find_by_user_email("alice@example.com").await.unwrap().is_empty());

    let bobs = cart.find_by_user_email("bob@example.com").await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].food_name, "Burger");
}

#[tokio::test]
async fn cart_item_delete_removes_exactly_one() {
    let (db, _tmp) = test_db().await;
    let cart = CartRepository::new(db);

    let a = cart.create(cart_item("alice@example.com", "Ramen")).await.unwrap();
    cart.create(cart_item("alice@example.com", "Baklava")).await.unwrap();

    cart.delete(&a.id.as_ref().unwrap().to_string()).await.unwrap();

    let remaining = cart.find_by_user_email("alice@example.com").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].food_name, "Baklava");
}

#[test]
fn payment_initiations_mint_distinct_transaction_ids() {
    // The correlation scheme requires a fresh id per initiation
    let ids: Vec<String> = (0..4).map(|_| gateway::new_tran_id()).collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}
