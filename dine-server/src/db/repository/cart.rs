//! Cart Item Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{CartItem, CartItemCreate};

const CART_TABLE: &str = "cart_item";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: CartItemCreate) -> RepoResult<CartItem> {
        let item = CartItem {
            id: None,
            user_email: data.user_email,
            food_id: data.food_id.unwrap_or_default(),
            food_name: data.food_name.unwrap_or_default(),
            price: data.price,
            quantity: data.quantity.unwrap_or(1),
        };

        let created: Option<CartItem> = self.base.db().create(CART_TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cart item".to_string()))
    }

    pub async fn find_by_user_email(&self, email: &str) -> RepoResult<Vec<CartItem>> {
        let items: Vec<CartItem> = self
            .base
            .db()
            .query("SELECT * FROM cart_item WHERE string::lowercase(userEmail) = string::lowercase($email)")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<CartItem> = self.base.db().delete(record_id(CART_TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Cart item {id} not found")));
        }
        Ok(())
    }

    /// Post-payment cleanup, scoped to the paying user's items.
    ///
    /// Returns the number of removed items.
    pub async fn delete_for_user(&self, email: &str) -> RepoResult<usize> {
        let deleted: Vec<CartItem> = self
            .base
            .db()
            .query("DELETE cart_item WHERE string::lowercase(userEmail) = string::lowercase($email) RETURN BEFORE")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(deleted.len())
    }
}
