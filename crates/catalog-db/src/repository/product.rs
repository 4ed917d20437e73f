//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Filtered + paginated listing
//! - CRUD operations
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Listing Search Works                             │
//! │                                                                         │
//! │  Operator types: "wid"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pattern: %wid%  (wildcards in the term itself are escaped)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products                                │                           │
//! │  │                                         │                           │
//! │  │ Widget   | A test widget    | 9.99     │ ← name MATCH               │
//! │  │ Spanner  | widens anything  | 4.50     │ ← description MATCH        │
//! │  │ Gadget   | A test gadget    | 3.99     │                            │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LIKE over name OR description OR price text, case-insensitive,        │
//! │  newest first, LIMIT/OFFSET for the requested page                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use catalog_core::pagination::ListQuery;
use catalog_core::Product;

/// The full column list, shared by every SELECT.
const PRODUCT_COLUMNS: &str = "id, name, description, price, featured_image, \
     featured_image_original_name, created_at, updated_at";

/// One page of the product store, plus the counts the listing reports.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Rows of the requested page, newest first.
    pub items: Vec<Product>,
    /// Count of all products, irrespective of filter.
    pub total_count: u64,
    /// Count of products matching the current filter.
    pub filtered_count: u64,
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // List one page
/// let page = repo.list_page(&query).await?;
///
/// // Get by ID
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists one page of products, filtered and ordered newest first.
    ///
    /// ## How It Works
    /// 1. A non-empty search term becomes an escaped `%term%` LIKE pattern
    ///    matched against name OR description OR price text
    /// 2. Rows are ordered by `created_at DESC` (id as tiebreak)
    /// 3. `PageSize::Limited` applies LIMIT/OFFSET; `PageSize::All` returns
    ///    every matching row
    ///
    /// Out-of-range pages return an empty item list, never an error.
    pub async fn list_page(&self, query: &ListQuery) -> DbResult<ProductPage> {
        debug!(
            search = query.search.as_deref().unwrap_or(""),
            page = query.page,
            "Listing products"
        );

        let pattern = query.search.as_deref().map(like_pattern);

        let total_count = self.count().await?;
        let filtered_count = match &pattern {
            Some(p) => self.count_matching(p).await?,
            None => total_count,
        };

        let mut sql = format!("SELECT {PRODUCT_COLUMNS} FROM products");
        if pattern.is_some() {
            sql.push_str(
                " WHERE name LIKE ?1 ESCAPE '\\' \
                 OR description LIKE ?1 ESCAPE '\\' \
                 OR price LIKE ?1 ESCAPE '\\'",
            );
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");
        if query.per_page.limit().is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut rows = sqlx::query_as::<_, Product>(&sql);
        if let Some(p) = &pattern {
            rows = rows.bind(p);
        }
        if let Some(limit) = query.per_page.limit() {
            let offset = i64::from(query.page.max(1) - 1) * i64::from(limit);
            rows = rows.bind(i64::from(limit)).bind(offset);
        }

        let items = rows.fetch_all(&self.pool).await?;

        debug!(
            count = items.len(),
            filtered_count, total_count, "Listing returned products"
        );

        Ok(ProductPage {
            items,
            total_count,
            filtered_count,
        })
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Arguments
    /// * `product` - Product to insert (id and timestamps already stamped)
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(id = %product.id, "Inserting product");

        sqlx::query(
            "INSERT INTO products (
                id, name, description, price,
                featured_image, featured_image_original_name,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.featured_image)
        .bind(&product.featured_image_original_name)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Updates an existing product, restamping `updated_at`.
    ///
    /// Image fields are written as given: callers keep the previous values
    /// on the struct when no new file was uploaded.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE products SET
                name = ?2,
                description = ?3,
                price = ?4,
                featured_image = ?5,
                featured_image_original_name = ?6,
                updated_at = ?7
            WHERE id = ?1",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.featured_image)
        .bind(&product.featured_image_original_name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// The stored image file (if any) is left in place; cleanup is an
    /// external responsibility.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No row had this id
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Counts products matching an escaped LIKE pattern.
    async fn count_matching(&self, pattern: &str) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products
             WHERE name LIKE ?1 ESCAPE '\\'
                OR description LIKE ?1 ESCAPE '\\'
                OR price LIKE ?1 ESCAPE '\\'",
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }
}

/// Builds a `%term%` substring pattern, escaping LIKE metacharacters.
///
/// `%`, `_`, and the escape character itself are matched literally, so a
/// search term is never interpreted by the query language.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

// =============================================================================
// Unit Tests
// =============================================================================
