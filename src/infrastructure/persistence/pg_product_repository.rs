//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::listing_sql::{push_filter, push_order_by};
use crate::utils::db_error::is_unique_violation_on;

const PRODUCT_COLUMNS: &str =
    "id, name, category, price, stock, unit, description, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: Option<String>,
    price: String,
    stock: i64,
    unit: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            stock: row.stock,
            unit: row.unit,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for catalog products.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, category, price, stock, unit, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, category, price, stock, unit, description, created_at, updated_at",
        )
        .bind(&new_product.name)
        .bind(&new_product.category)
        .bind(&new_product.price)
        .bind(new_product.stock)
        .bind(&new_product.unit)
        .bind(&new_product.description)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_name_violation)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, category, price, stock, unit, description, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, category, price, stock, unit, description, created_at, updated_at \
             FROM products WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Product>, AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));

        push_filter(&mut builder, query.filter.as_ref());
        push_order_by(&mut builder, &query.sort);
        builder.push(" LIMIT ");
        builder.push_bind(query.limit());
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
        push_filter(&mut builder, filter.as_ref());

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "UPDATE products SET \
                name = COALESCE($2, name), \
                category = COALESCE($3, category), \
                price = COALESCE($4, price), \
                stock = COALESCE($5, stock), \
                unit = COALESCE($6, unit), \
                description = COALESCE($7, description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, category, price, stock, unit, description, created_at, updated_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(&patch.price)
        .bind(patch.stock)
        .bind(&patch.unit)
        .bind(&patch.description)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_name_violation)?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn decrement_stock(&self, id: i64, quantity: i64) -> Result<Option<Product>, AppError> {
        // Single conditional update: the guard and the write are one
        // statement, so concurrent orders cannot drive stock negative.
        let row = sqlx::query_as::<_, ProductRow>(
            "UPDATE products \
             SET stock = stock - $2, updated_at = now() \
             WHERE id = $1 AND stock >= $2 \
             RETURNING id, name, category, price, stock, unit, description, created_at, updated_at",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}

fn map_name_violation(e: sqlx::Error) -> AppError {
    if is_unique_violation_on(&e, "products_name_key") {
        AppError::name_taken("Name is already registered")
    } else {
        e.into()
    }
}
