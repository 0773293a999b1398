//! Product repository.
//!
//! Direct pass-through CRUD against the `products` table. Rows are stored
//! flat (one column per document field, tags as a TEXT array) and always
//! read back sorted by display order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use remix_beats_core::{Category, Product, ProductId};

use super::RepositoryError;
use crate::models::ProductDraft;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: Option<String>,
    image_url: String,
    alt_text: Option<String>,
    category: String,
    display_order: i32,
    is_active: bool,
    price: Decimal,
    brand: String,
    color: Option<String>,
    specifications: Option<String>,
    stock: i32,
    weight: Option<String>,
    dimensions: Option<String>,
    warranty: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, RepositoryError> {
        let category: Category = row.category.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "invalid category in database: {}",
                row.category
            ))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            alt_text: row.alt_text,
            category,
            order: row.display_order,
            is_active: row.is_active,
            price: row.price,
            brand: row.brand,
            color: row.color,
            specifications: row.specifications,
            stock: u32::try_from(row.stock).unwrap_or(0),
            weight: row.weight,
            dimensions: row.dimensions,
            warranty: row.warranty,
            tags: row.tags,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

const SELECT_COLUMNS: &str = "id, title, description, image_url, alt_text, category, \
     display_order, is_active, price, brand, color, specifications, stock, \
     weight, dimensions, warranty, tags, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products, sorted by display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM products ORDER BY display_order, created_at"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Active products in one category, sorted by display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM products \
             WHERE category = $1 AND is_active \
             ORDER BY display_order, created_at"
        ))
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Products matching a list of ids (used by the favorites drawer).
    ///
    /// Unknown ids are silently skipped; an empty id list yields an empty
    /// result without touching the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_strings: Vec<String> = ids.iter().map(|id| id.as_str().to_owned()).collect();
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM products \
             WHERE id = ANY($1) \
             ORDER BY display_order, created_at"
        ))
        .bind(&id_strings)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get one product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"))
                .bind(id.as_str())
                .fetch_optional(self.pool)
                .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product, assigning a fresh id, and return the stored
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let row: ProductRow = sqlx::query_as(&format!(
            "INSERT INTO products \
             (id, title, description, image_url, alt_text, category, display_order, \
              is_active, price, brand, color, specifications, stock, weight, \
              dimensions, warranty, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.alt_text)
        .bind(draft.category.as_str())
        .bind(draft.order)
        .bind(draft.is_active)
        .bind(draft.price)
        .bind(&draft.brand)
        .bind(&draft.color)
        .bind(&draft.specifications)
        .bind(i32::try_from(draft.stock).unwrap_or(i32::MAX))
        .bind(&draft.weight)
        .bind(&draft.dimensions)
        .bind(&draft.warranty)
        .bind(&draft.tags)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Replace an existing product's fields and return the updated document.
    ///
    /// Returns `Ok(None)` when no product has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "UPDATE products SET \
             title = $2, description = $3, image_url = $4, alt_text = $5, \
             category = $6, display_order = $7, is_active = $8, price = $9, \
             brand = $10, color = $11, specifications = $12, stock = $13, \
             weight = $14, dimensions = $15, warranty = $16, tags = $17, \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(id.as_str())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.alt_text)
        .bind(draft.category.as_str())
        .bind(draft.order)
        .bind(draft.is_active)
        .bind(draft.price)
        .bind(&draft.brand)
        .bind(&draft.color)
        .bind(&draft.specifications)
        .bind(i32::try_from(draft.stock).unwrap_or(i32::MAX))
        .bind(&draft.weight)
        .bind(&draft.dimensions)
        .bind(&draft.warranty)
        .bind(&draft.tags)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Delete a product. Returns `false` when no product had the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
