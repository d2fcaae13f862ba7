//! Food Repository
//!
//! Holds the dynamic listing query builder: optional category filter,
//! case-insensitive name search, whitelisted sort, LIMIT/START pagination.

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Food, FoodCreate, FoodStockUpdate, FoodUpdate};

const FOOD_TABLE: &str = "food";

/// Optional listing parameters, straight from the query string.
///
/// All fields are combinable; absent fields impose no constraint.
/// `page`/`limit` are not clamped; a page of 0 or a negative limit is the
/// caller's problem and produces an erroring query.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodQuery {
    /// Exact match on foodCategory
    pub category: Option<String>,
    /// Sort column (whitelisted); only applied together with sort_order
    pub sort_field: Option<String>,
    /// asc | desc (case-insensitive)
    pub sort_order: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
    /// Case-insensitive substring match on foodName
    pub food_name: Option<String>,
}

/// One page of foods plus the unfiltered table count.
///
/// `count` deliberately ignores the applied filters: the frontend pager
/// wants the whole-catalog size, and a filtered count would cost a second
/// conditioned scan per request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPage {
    pub result: Vec<Food>,
    pub count: i64,
}

/// Sortable columns. ORDER BY cannot be parameter-bound, so the field name
/// is resolved through this static table instead of interpolating caller
/// input into the statement.
fn sort_column(field: &str) -> Option<&'static str> {
    match field {
        "price" => Some("price"),
        "quantity" => Some("quantity"),
        "sellCount" => Some("sellCount"),
        "foodName" => Some("foodName"),
        "foodCategory" => Some("foodCategory"),
        "foodOrigin" => Some("foodOrigin"),
        _ => None,
    }
}

fn sort_direction(order: &str) -> Option<&'static str> {
    match order.to_lowercase().as_str() {
        "asc" | "ascending" | "1" => Some("ASC"),
        "desc" | "descending" | "-1" => Some("DESC"),
        _ => None,
    }
}

/// Compile a [`FoodQuery`] into one SurrealQL SELECT statement.
///
/// Filter values stay parameter-bound ($category / $foodName); only
/// whitelisted identifiers and the caller's raw page arithmetic are
/// interpolated.
pub fn build_food_query(q: &FoodQuery) -> RepoResult<String> {
    let mut clauses: Vec<&'static str> = Vec::new();
    if q.category.is_some() {
        clauses.push("foodCategory = $category");
    }
    if q.food_name.is_some() {
        clauses.push("string::lowercase(foodName) CONTAINS string::lowercase($foodName)");
    }

    let mut sql = String::from("SELECT * FROM food");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let (Some(field), Some(order)) = (&q.sort_field, &q.sort_order) {
        let column = sort_column(field)
            .ok_or_else(|| RepoError::Validation(format!("Unsortable field: {field}")))?;
        let direction = sort_direction(order)
            .ok_or_else(|| RepoError::Validation(format!("Invalid sort order: {order}")))?;
        sql.push_str(&format!(" ORDER BY {column} {direction}"));
    }

    if let (Some(page), Some(limit)) = (q.page, q.limit) {
        // skip = (page - 1) * limit, no lower-bound clamping
        let skip = (page - 1) * limit;
        sql.push_str(&format!(" LIMIT {limit} START {skip}"));
    }

    Ok(sql)
}

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Paged/filtered listing plus the unfiltered table count.
    pub async fn search(&self, q: &FoodQuery) -> RepoResult<FoodPage> {
        let sql = build_food_query(q)?;

        let mut query = self.base.db().query(sql);
        if let Some(category) = q.category.clone() {
            query = query.bind(("category", category));
        }
        if let Some(food_name) = q.food_name.clone() {
            query = query.bind(("foodName", food_name));
        }

        let result: Vec<Food> = query.await?.take(0)?;
        let count = self.count_all().await?;

        Ok(FoodPage { result, count })
    }

    /// Unfiltered table count (the listing's `count` field).
    pub async fn count_all(&self) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct Counted {
            count: i64,
        }

        let counted: Vec<Counted> = self
            .base
            .db()
            .query("SELECT count() FROM food GROUP ALL")
            .await?
            .take(0)?;
        Ok(counted.first().map(|c| c.count).unwrap_or(0))
    }

    /// Top-selling listing: all foods by sellCount descending.
    pub async fn find_all_by_sell_count(&self) -> RepoResult<Vec<Food>> {
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM food ORDER BY sellCount DESC")
            .await?
            .take(0)?;
        Ok(foods)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        let food: Option<Food> = self.base.db().select(record_id(FOOD_TABLE, id)).await?;
        Ok(food)
    }

    /// Foods added by one user (owner email, case-insensitive).
    pub async fn find_by_owner(&self, user_email: &str) -> RepoResult<Vec<Food>> {
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM food WHERE string::lowercase(userEmail) = string::lowercase($email)")
            .bind(("email", user_email.to_string()))
            .await?
            .take(0)?;
        Ok(foods)
    }

    /// A single food, only if it belongs to the given owner.
    pub async fn find_owned(&self, user_email: &str, id: &str) -> RepoResult<Option<Food>> {
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM food WHERE id = $id AND string::lowercase(userEmail) = string::lowercase($email)")
            .bind(("id", record_id(FOOD_TABLE, id)))
            .bind(("email", user_email.to_string()))
            .await?
            .take(0)?;
        Ok(foods.into_iter().next())
    }

    pub async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        let food = Food {
            id: None,
            food_name: data.food_name,
            food_category: data.food_category,
            food_image: data.food_image.unwrap_or_default(),
            price: data.price,
            quantity: data.quantity.unwrap_or(0),
            sell_count: data.sell_count.unwrap_or(0),
            food_origin: data.food_origin.unwrap_or_default(),
            short_description: data.short_description.unwrap_or_default(),
            user_email: data.user_email,
            user_name: data.user_name.unwrap_or_default(),
        };

        let created: Option<Food> = self.base.db().create(FOOD_TABLE).content(food).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create food".to_string()))
    }

    /// Stock mutation (quantity + sellCount), upsert semantics.
    pub async fn update_stock(&self, id: &str, data: FoodStockUpdate) -> RepoResult<Food> {
        let mut result = self
            .base
            .db()
            .query("UPSERT $id SET quantity = $quantity, sellCount = $sell_count RETURN AFTER")
            .bind(("id", record_id(FOOD_TABLE, id)))
            .bind(("quantity", data.quantity))
            .bind(("sell_count", data.sell_count))
            .await?;
        let foods: Vec<Food> = result.take(0)?;
        foods
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database(format!("Stock update returned nothing for {id}")))
    }

    /// General update of the owner-editable fields, upsert semantics.
    pub async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<Food> {
        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = Vec::new();

        if data.food_name.is_some() {
            set_parts.push("foodName = $food_name");
        }
        if data.food_image.is_some() {
            set_parts.push("foodImage = $food_image");
        }
        if data.food_category.is_some() {
            set_parts.push("foodCategory = $food_category");
        }
        if data.quantity.is_some() {
            set_parts.push("quantity = $quantity");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.food_origin.is_some() {
            set_parts.push("foodOrigin = $food_origin");
        }
        if data.short_description.is_some() {
            set_parts.push("shortDescription = $short_description");
        }

        if set_parts.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Food {id} not found")));
        }

        let query_str = format!("UPSERT $id SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("id", record_id(FOOD_TABLE, id)));

        if let Some(v) = data.food_name {
            query = query.bind(("food_name", v));
        }
        if let Some(v) = data.food_image {
            query = query.bind(("food_image", v));
        }
        if let Some(v) = data.food_category {
            query = query.bind(("food_category", v));
        }
        if let Some(v) = data.quantity {
            query = query.bind(("quantity", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.food_origin {
            query = query.bind(("food_origin", v));
        }
        if let Some(v) = data.short_description {
            query = query.bind(("short_description", v));
        }

        let mut result = query.await?;
        let foods: Vec<Food> = result.take(0)?;
        foods
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Food {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<Food> = self.base.db().delete(record_id(FOOD_TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Food {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, name: Option<&str>) -> FoodQuery {
        FoodQuery {
            category: category.map(String::from),
            food_name: name.map(String::from),
            ..FoodQuery::default()
        }
    }

    #[test]
    fn bare_query_selects_everything() {
        let sql = build_food_query(&FoodQuery::default()).unwrap();
        assert_eq!(sql, "SELECT * FROM food");
    }

    #[test]
    fn filters_combine_with_and() {
        let sql = build_food_query(&query(Some("Dessert"), Some("cake"))).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM food WHERE foodCategory = $category \
             AND string::lowercase(foodName) CONTAINS string::lowercase($foodName)"
        );
    }

    #[test]
    fn sort_requires_both_field_and_order() {
        let mut q = FoodQuery::default();
        q.sort_field = Some("price".to_string());
        // No sort_order: unsorted
        assert_eq!(build_food_query(&q).unwrap(), "SELECT * FROM food");

        q.sort_order = Some("desc".to_string());
        assert_eq!(
            build_food_query(&q).unwrap(),
            "SELECT * FROM food ORDER BY price DESC"
        );
    }

    #[test]
    fn sort_field_is_whitelisted() {
        let mut q = FoodQuery::default();
        q.sort_field = Some("payment; DELETE food".to_string());
        q.sort_order = Some("asc".to_string());
        assert!(matches!(
            build_food_query(&q),
            Err(RepoError::Validation(_))
        ));
    }

    #[test]
    fn pagination_offsets_from_page_one() {
        let mut q = FoodQuery::default();
        q.page = Some(3);
        q.limit = Some(10);
        assert_eq!(
            build_food_query(&q).unwrap(),
            "SELECT * FROM food LIMIT 10 START 20"
        );
    }

    #[test]
    fn page_zero_is_not_clamped() {
        // Callers must send page >= 1; page 0 compiles to a negative START
        // and fails at the database rather than being silently corrected.
        let mut q = FoodQuery::default();
        q.page = Some(0);
        q.limit = Some(5);
        assert_eq!(
            build_food_query(&q).unwrap(),
            "SELECT * FROM food LIMIT 5 START -5"
        );
    }

    #[test]
    fn all_parameters_compose() {
        let q = FoodQuery {
            category: Some("Dessert".to_string()),
            sort_field: Some("sellCount".to_string()),
            sort_order: Some("DESC".to_string()),
            page: Some(2),
            limit: Some(4),
            food_name: Some("Pie".to_string()),
        };
        assert_eq!(
            build_food_query(&q).unwrap(),
            "SELECT * FROM food WHERE foodCategory = $category \
             AND string::lowercase(foodName) CONTAINS string::lowercase($foodName) \
             ORDER BY sellCount DESC LIMIT 4 START 4"
        );
    }
}
