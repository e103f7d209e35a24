mod common;

use sqlx::PgPool;
use std::sync::Arc;
use storefront::AppError;
use storefront::domain::entities::{NewProduct, ProductPatch};
use storefront::domain::listing::{ListRequest, PRODUCT_LISTING};
use storefront::domain::repositories::ProductRepository;
use storefront::infrastructure::persistence::PgProductRepository;

fn repo(pool: PgPool) -> PgProductRepository {
    PgProductRepository::new(Arc::new(pool))
}

fn new_product(name: &str, price: &str, stock: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: Some("tools".to_string()),
        price: price.to_string(),
        stock,
        unit: "pcs".to_string(),
        description: "test product".to_string(),
    }
}

fn list_request(sort: Option<&str>, search: Option<&str>) -> ListRequest {
    ListRequest {
        page_number: None,
        page_size: None,
        sort: sort.map(str::to_string),
        search: search.map(str::to_string),
    }
}

// ─── STOCK DECREMENT ─────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_decrement_stock_subtracts(pool: PgPool) {
    let repo = repo(pool.clone());

    let id = common::insert_product(&pool, "Widget", "10", 5).await;

    let updated = repo.decrement_stock(id, 3).await.unwrap().unwrap();

    assert_eq!(updated.stock, 2);
    assert_eq!(common::product_stock(&pool, id).await, 2);
}

#[sqlx::test]
async fn test_decrement_stock_refuses_insufficient(pool: PgPool) {
    let repo = repo(pool.clone());

    let id = common::insert_product(&pool, "Widget", "10", 5).await;

    let result = repo.decrement_stock(id, 6).await.unwrap();

    assert!(result.is_none());
    assert_eq!(common::product_stock(&pool, id).await, 5);
}

#[sqlx::test]
async fn test_decrement_stock_to_exactly_zero(pool: PgPool) {
    let repo = repo(pool.clone());

    let id = common::insert_product(&pool, "Widget", "10", 5).await;

    let updated = repo.decrement_stock(id, 5).await.unwrap().unwrap();

    assert_eq!(updated.stock, 0);

    // Nothing left: the next decrement refuses.
    assert!(repo.decrement_stock(id, 1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_decrement_stock_unknown_product(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.decrement_stock(999, 1).await.unwrap().is_none());
}

// ─── UNIQUENESS ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_duplicate_name_maps_to_name_taken(pool: PgPool) {
    let repo = repo(pool);

    repo.create(new_product("Widget", "10", 5)).await.unwrap();

    let err = repo.create(new_product("Widget", "1", 1)).await.unwrap_err();

    assert!(matches!(err, AppError::NameTaken { .. }));
}

#[sqlx::test]
async fn test_update_rename_onto_taken_name_maps_to_name_taken(pool: PgPool) {
    let repo = repo(pool);

    let widget = repo.create(new_product("Widget", "10", 5)).await.unwrap();
    repo.create(new_product("Gadget", "10", 5)).await.unwrap();

    let patch = ProductPatch {
        name: Some("Gadget".to_string()),
        ..Default::default()
    };
    let err = repo.update(widget.id, patch).await.unwrap_err();

    assert!(matches!(err, AppError::NameTaken { .. }));
}

// ─── LISTING ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_sorts_price_numerically_not_lexically(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_product(&pool, "a", "10", 1).await;
    common::insert_product(&pool, "b", "5", 1).await;
    common::insert_product(&pool, "c", "20", 1).await;

    let query = PRODUCT_LISTING
        .parse(&list_request(Some("price:asc"), None))
        .unwrap()
        .paginate(3)
        .unwrap();

    let products = repo.list(&query).await.unwrap();
    let prices: Vec<&str> = products.iter().map(|p| p.price.as_str()).collect();

    // Lexical ordering would give ["10", "20", "5"].
    assert_eq!(prices, vec!["5", "10", "20"]);
}

#[sqlx::test]
async fn test_list_search_matches_substring_case_insensitively(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_product(&pool, "Widget", "10", 1).await;
    common::insert_product(&pool, "WIDGETRY", "10", 1).await;
    common::insert_product(&pool, "Gadget", "10", 1).await;

    let parsed = PRODUCT_LISTING
        .parse(&list_request(None, Some("name:wid")))
        .unwrap();

    let total = repo.count(parsed.filter().cloned()).await.unwrap();
    assert_eq!(total, 2);

    let query = parsed.paginate(total).unwrap();
    let products = repo.list(&query).await.unwrap();
    assert_eq!(products.len(), 2);
}

#[sqlx::test]
async fn test_list_search_treats_like_metacharacters_literally(pool: PgPool) {
    let repo = repo(pool.clone());

    common::insert_product(&pool, "100% cotton", "10", 1).await;
    common::insert_product(&pool, "100 percent", "10", 1).await;

    let parsed = PRODUCT_LISTING
        .parse(&list_request(None, Some("name:100%")))
        .unwrap();

    // `%` must not act as a wildcard.
    let total = repo.count(parsed.filter().cloned()).await.unwrap();
    assert_eq!(total, 1);
}

#[sqlx::test]
async fn test_list_pagination_window(pool: PgPool) {
    let repo = repo(pool.clone());

    for name in ["a", "b", "c", "d", "e"] {
        common::insert_product(&pool, name, "1", 1).await;
    }

    let query = PRODUCT_LISTING
        .parse(&ListRequest {
            page_number: Some(2),
            page_size: Some(2),
            sort: Some("name:asc".to_string()),
            search: None,
        })
        .unwrap()
        .paginate(5)
        .unwrap();

    let products = repo.list(&query).await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["c", "d"]);
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_only_patched_fields_change(pool: PgPool) {
    let repo = repo(pool.clone());

    let created = repo.create(new_product("Widget", "10", 5)).await.unwrap();

    let patch = ProductPatch {
        stock: Some(7),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.stock, 7);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price, "10");
    assert_eq!(updated.category.as_deref(), Some("tools"));
}

#[sqlx::test]
async fn test_update_unknown_product_is_none(pool: PgPool) {
    let repo = repo(pool);

    let patch = ProductPatch {
        stock: Some(7),
        ..Default::default()
    };
    assert!(repo.update(999, patch).await.unwrap().is_none());
}
