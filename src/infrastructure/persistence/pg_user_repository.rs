//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::listing_sql::{push_filter, push_order_by};
use crate::utils::db_error::is_unique_violation_on;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, name, email, password_hash, created_at, updated_at",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_email_violation)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at, updated_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));

        push_filter(&mut builder, query.filter.as_ref());
        push_order_by(&mut builder, &query.sort);
        builder.push(" LIMIT ");
        builder.push_bind(query.limit());
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM users");
        push_filter(&mut builder, filter.as_ref());

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, email, password_hash, created_at, updated_at",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_email_violation)?;

        Ok(row.map(Into::into))
    }

    async fn set_password_hash(&self, id: i64, password_hash: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_email_violation(e: sqlx::Error) -> AppError {
    if is_unique_violation_on(&e, "users_email_key") {
        AppError::email_taken("Email is already registered")
    } else {
        e.into()
    }
}
