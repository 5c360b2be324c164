//! PostgreSQL product repository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use catalog_core::domain::Product;
use catalog_core::error::DomainError;
use catalog_core::repositories::ProductRepository;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub amount: Option<Decimal>,
    pub active: bool,
    pub teste: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            amount: row.amount,
            active: row.active,
            teste: row.teste,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, amount, active, teste
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing products: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, amount, active, teste
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding product by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, product: &Product) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, amount, active, teste)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.amount)
        .bind(product.active)
        .bind(product.teste)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating product: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    async fn update(&self, product: &Product) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                amount = $5,
                active = $6,
                teste = $7
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.amount)
        .bind(product.active)
        .bind(product.teste)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating product: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting product: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }
}
