//! Food listing integration tests: dynamic filter/sort/pagination against
//! an embedded store.
//! Run: cargo test -p dine-server --test food_listing

use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tempfile::TempDir;

use dine_server::db::models::FoodCreate;
use dine_server::db::repository::{FoodQuery, FoodRepository};

async fn test_db() -> (Surreal<Db>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    (db, tmp)
}

fn food(name: &str, category: &str, price: i64) -> FoodCreate {
    FoodCreate {
        food_name: name.to_string(),
        food_category: category.to_string(),
        food_image: None,
        price: Decimal::from(price),
        quantity: Some(10),
        sell_count: Some(0),
        food_origin: None,
        short_description: None,
        user_email: "owner@example.com".to_string(),
        user_name: Some("Owner".to_string()),
    }
}

async fn seed_menu(repo: &FoodRepository) {
    // 5 desserts + 3 mains = 8 foods total
    for (name, price) in [
        ("Chocolate Cake", 12),
        ("Cupcake", 4),
        ("Baklava", 9),
        ("Tiramisu", 11),
        ("Cheesecake", 10),
    ] {
        repo.create(food(name, "Dessert", price)).await.unwrap();
    }
    for (name, price) in [("Beef Burger", 15), ("Pad Thai", 13), ("Ramen", 14)] {
        repo.create(food(name, "Main", price)).await.unwrap();
    }
}

#[tokio::test]
async fn category_filter_with_pagination() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let page1 = repo
        .search(&FoodQuery {
            category: Some("Dessert".to_string()),
            page: Some(1),
            limit: Some(2),
            ..FoodQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(page1.result.len(), 2);
    assert!(page1.result.iter().all(|f| f.food_category == "Dessert"));
    // count is the whole table, not the filtered set
    assert_eq!(page1.count, 8);

    let page3 = repo
        .search(&FoodQuery {
            category: Some("Dessert".to_string()),
            page: Some(3),
            limit: Some(2),
            ..FoodQuery::default()
        })
        .await
        .unwrap();

    // 5 desserts: page 3 of 2 holds the single remainder
    assert_eq!(page3.result.len(), 1);
    assert_eq!(page3.count, 8);
}

#[tokio::test]
async fn pages_do_not_overlap() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let mut seen = Vec::new();
    for page in 1..=4 {
        let result = repo
            .search(&FoodQuery {
                sort_field: Some("foodName".to_string()),
                sort_order: Some("asc".to_string()),
                page: Some(page),
                limit: Some(2),
                ..FoodQuery::default()
            })
            .await
            .unwrap()
            .result;
        assert_eq!(result.len(), 2);
        seen.extend(result.into_iter().map(|f| f.food_name));
    }

    assert_eq!(seen.len(), 8);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 8, "pages returned overlapping rows");
}

#[tokio::test]
async fn sort_orders_by_whitelisted_field() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let page = repo
        .search(&FoodQuery {
            sort_field: Some("price".to_string()),
            sort_order: Some("desc".to_string()),
            ..FoodQuery::default()
        })
        .await
        .unwrap();

    let prices: Vec<_> = page.result.iter().map(|f| f.price).collect();
    let mut sorted = prices.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(prices, sorted);
    assert_eq!(prices.first(), Some(&Decimal::from(15)));
}

#[tokio::test]
async fn name_search_is_case_insensitive_substring() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let page = repo
        .search(&FoodQuery {
            food_name: Some("CAKE".to_string()),
            ..FoodQuery::default()
        })
        .await
        .unwrap();

    let mut names: Vec<_> = page.result.iter().map(|f| f.food_name.clone()).collect();
    names.sort();
    assert_eq!(names, ["Cheesecake", "Chocolate Cake", "Cupcake"]);
}

#[tokio::test]
async fn filters_combine_with_and_semantics() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    // "a" appears in mains too; the category filter must still apply
    let page = repo
        .search(&FoodQuery {
            category: Some("Main".to_string()),
            food_name: Some("ra".to_string()),
            ..FoodQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(page.result.len(), 1);
    assert_eq!(page.result[0].food_name, "Ramen");
}

#[tokio::test]
async fn absent_parameters_impose_no_constraint() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let page = repo.search(&FoodQuery::default()).await.unwrap();
    assert_eq!(page.result.len(), 8);
    assert_eq!(page.count, 8);
}

#[tokio::test]
async fn top_selling_sorts_by_sell_count() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);

    for (name, sold) in [("Slow", 1), ("Hit", 50), ("Steady", 7)] {
        let mut f = food(name, "Main", 10);
        f.sell_count = Some(sold);
        repo.create(f).await.unwrap();
    }

    let foods = repo.find_all_by_sell_count().await.unwrap();
    let names: Vec<_> = foods.iter().map(|f| f.food_name.as_str()).collect();
    assert_eq!(names, ["Hit", "Steady", "Slow"]);
}

#[tokio::test]
async fn stock_update_touches_only_quantity_and_sell_count() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);

    let created = repo.create(food("Ramen", "Main", 14)).await.unwrap();
    let id = created.id.as_ref().unwrap().to_string();

    let updated = repo
        .update_stock(
            &id,
            dine_server::db::models::FoodStockUpdate {
                quantity: 9,
                sell_count: 1,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 9);
    assert_eq!(updated.sell_count, 1);
    // Untouched fields survive
    assert_eq!(updated.food_name, "Ramen");
    assert_eq!(updated.price, Decimal::from(14));
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let (db, _tmp) = test_db().await;
    let repo = FoodRepository::new(db);
    seed_menu(&repo).await;

    let all = repo.search(&FoodQuery::default()).await.unwrap().result;
    let victim = all[0].id.as_ref().unwrap().to_string();

    repo.delete(&victim).await.unwrap();

    let remaining = repo.search(&FoodQuery::default()).await.unwrap();
    assert_eq!(remaining.result.len(), 7);
    assert!(
        remaining
            .result
            .iter()
            .all(|f| f.id.as_ref().unwrap().to_string() != victim)
    );
}
