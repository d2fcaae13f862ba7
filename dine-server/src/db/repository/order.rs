//! Order Repository
//!
//! Carries the payment lifecycle: `record_payment` is the only writer of
//! the `payment`/`transactionId` fields, and its UPDATE is guarded by
//! `payment IS NONE` so a terminal order is never rewritten. Racing
//! callbacks serialize through that guard: first writer wins, the loser
//! matches zero records.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{CheckoutCreate, Correlation, Order, OrderCreate, PaymentStatus};

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Place a single-food order. Payment fields start unset.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            user_email: data.user_email,
            user_name: data.user_name.unwrap_or_default(),
            food_name: data.food_name,
            food_category: data.food_category.unwrap_or_default(),
            price: Some(data.price),
            total_bill: None,
            code: None,
            payment: None,
            transaction_id: None,
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Insert the inline checkout order carrying the generated code.
    pub async fn create_checkout(&self, data: CheckoutCreate, code: String) -> RepoResult<Order> {
        let order = Order {
            id: None,
            user_email: data.user_email,
            user_name: data.user_name.unwrap_or_default(),
            food_name: String::new(),
            food_category: String::new(),
            price: None,
            total_bill: Some(data.total_bill),
            code: Some(code),
            payment: None,
            transaction_id: None,
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create checkout order".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self.base.db().query("SELECT * FROM order").await?.take(0)?;
        Ok(orders)
    }

    /// Orders belonging to one user (email compared case-insensitively).
    pub async fn find_by_user_email(&self, email: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE string::lowercase(userEmail) = string::lowercase($email)")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(record_id(ORDER_TABLE, id)).await?;
        Ok(order)
    }

    /// Resolve a gateway callback's correlation value to its order.
    pub async fn find_by_correlation(&self, corr: &Correlation) -> RepoResult<Option<Order>> {
        match corr {
            Correlation::OrderId(id) => self.find_by_id(id).await,
            Correlation::Code(code) => {
                let orders: Vec<Order> = self
                    .base
                    .db()
                    .query("SELECT * FROM order WHERE code = $code")
                    .bind(("code", code.clone()))
                    .await?
                    .take(0)?;
                Ok(orders.into_iter().next())
            }
        }
    }

    /// Record the terminal payment outcome for an order.
    ///
    /// Returns the updated order, or `None` when no open order matched the
    /// correlation value (missing, or already terminal). The transaction id
    /// is stored only on `complete`.
    pub async fn record_payment(
        &self,
        corr: &Correlation,
        status: PaymentStatus,
        transaction_id: Option<String>,
    ) -> RepoResult<Option<Order>> {
        let set_clause = if transaction_id.is_some() {
            "payment = $payment, transactionId = $tran_id"
        } else {
            "payment = $payment"
        };

        let mut result = match corr {
            Correlation::OrderId(id) => {
                let sql =
                    format!("UPDATE $id SET {set_clause} WHERE payment IS NONE RETURN AFTER");
                let mut query = self
                    .base
                    .db()
                    .query(sql)
                    .bind(("id", record_id(ORDER_TABLE, id)))
                    .bind(("payment", status));
                if let Some(tran_id) = transaction_id {
                    query = query.bind(("tran_id", tran_id));
                }
                query.await?
            }
            Correlation::Code(code) => {
                let sql = format!(
                    "UPDATE order SET {set_clause} WHERE code = $code AND payment IS NONE RETURN AFTER"
                );
                let mut query = self
                    .base
                    .db()
                    .query(sql)
                    .bind(("code", code.clone()))
                    .bind(("payment", status));
                if let Some(tran_id) = transaction_id {
                    query = query.bind(("tran_id", tran_id));
                }
                query.await?
            }
        };

        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<Order> = self.base.db().delete(record_id(ORDER_TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Order {id} not found")));
        }
        Ok(())
    }
}
