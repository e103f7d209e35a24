//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::listing_sql::{push_filter, push_order_by};

const ORDER_COLUMNS: &str = "id, product_id, product_name, category, price, quantity, created_at";

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    product_id: i64,
    product_name: String,
    category: Option<String>,
    price: String,
    quantity: i64,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            category: row.category,
            price: row.price,
            quantity: row.quantity,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for order history.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (product_id, product_name, category, price, quantity) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, product_id, product_name, category, price, quantity, created_at",
        )
        .bind(new_order.product_id)
        .bind(&new_order.product_name)
        .bind(&new_order.category)
        .bind(&new_order.price)
        .bind(new_order.quantity)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, product_id, product_name, category, price, quantity, created_at \
             FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Order>, AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {ORDER_COLUMNS} FROM orders"));

        push_filter(&mut builder, query.filter.as_ref());
        push_order_by(&mut builder, &query.sort);
        builder.push(" LIMIT ");
        builder.push_bind(query.limit());
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        let rows = builder
            .build_query_as::<OrderRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM orders");
        push_filter(&mut builder, filter.as_ref());

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update_quantity(&self, id: i64, quantity: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET quantity = $2 WHERE id = $1 \
             RETURNING id, product_id, product_name, category, price, quantity, created_at",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
