//! Repository for the `products` table.
//!
//! Every read joins `categories` so callers always get a [`Product`] with its
//! category resolved. Writes use a data-modifying CTE named `p` so the same
//! joined column list serves inserts and updates.

use inventario_core::schema::PRICE_SCALE;
use inventario_core::types::DbId;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductRow, UpdateProduct};

/// Joined column list; expects the product relation aliased `p` and the
/// category relation aliased `c`.
const COLUMNS: &str = "p.id, p.name, p.description, p.price, p.quantity, p.category_id, \
     p.created_at, p.updated_at, \
     c.name AS category_name, c.description AS category_description, \
     c.created_at AS category_created_at, c.updated_at AS category_updated_at";

const JOIN_CATEGORY: &str = "JOIN categories c ON c.id = p.category_id";

/// Round to cents with half-cents going away from zero, as `NUMERIC` does.
fn to_cents(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Provides CRUD and search operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning it with its category.
    ///
    /// The price is rounded to two fractional digits, half-cents up.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO products (name, description, price, quantity, category_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN_CATEGORY}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(to_cents(input.price))
            .bind(input.quantity)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products p {JOIN_CATEGORY} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// List all products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products p {JOIN_CATEGORY} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products whose name equals `name` exactly.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products p {JOIN_CATEGORY} WHERE p.name = $1 ORDER BY p.id"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(name)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products whose category name equals `category_name` exactly.
    pub async fn find_by_category_name(
        pool: &PgPool,
        category_name: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products p {JOIN_CATEGORY} WHERE c.name = $1 ORDER BY p.id"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(category_name)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// IDs of the products that reference `category_id`, ascending.
    pub async fn list_ids_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM products WHERE category_id = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE products SET
                    name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    price = COALESCE($4, price),
                    quantity = COALESCE($5, quantity),
                    category_id = COALESCE($6, category_id),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN_CATEGORY}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price.map(to_cents))
            .bind(input.quantity)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// Permanently delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
