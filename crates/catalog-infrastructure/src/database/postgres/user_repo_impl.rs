//! PostgreSQL user repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use catalog_core::domain::User;
use catalog_core::error::DomainError;
use catalog_core::repositories::UserRepository;
use catalog_security::password::IdentityError;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub failed_login_attempts: i32,
    pub lockout_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            failed_login_attempts: row.failed_login_attempts,
            lockout_end: row.lockout_end,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash,
                   failed_login_attempts, lockout_end, created_at
            FROM users
            WHERE LOWER(username) = LOWER($1)
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by username: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        info!("Creating user: {}", user.username);

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (
                id, username, email, password_hash,
                failed_login_attempts, lockout_end, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, username, email, password_hash,
                      failed_login_attempts, lockout_end, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.failed_login_attempts)
        .bind(user.lockout_end)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating user: {}", e);
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                DomainError::IdentityErrors(vec![IdentityError::new(
                    "DuplicateUserName",
                    format!("Username '{}' is already taken.", user.username),
                )])
            } else {
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            UPDATE users
            SET username = $2,
                email = $3,
                password_hash = $4,
                failed_login_attempts = $5,
                lockout_end = $6
            WHERE id = $1
            RETURNING id, username, email, password_hash,
                      failed_login_attempts, lockout_end, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.failed_login_attempts)
        .bind(user.lockout_end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}
