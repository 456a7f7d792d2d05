use chrono::Utc;
use serde_json::Value;
use sqlx::{SqlitePool, types::Json};

use crate::{error::Result, models::Product};

/// Get all products in storage order.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Find product by ID.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Insert a new product with the given fields object.
pub async fn insert(pool: &SqlitePool, fields: &Value) -> Result<Product> {
    let now = Utc::now();

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (fields, created_at, updated_at)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(Json(fields))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Persist a new fields object for an existing product, refreshing
/// `updated_at`. Returns `None` if the id does not exist.
pub async fn update_fields(pool: &SqlitePool, id: i64, fields: &Value) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET fields = $1, updated_at = $2 WHERE id = $3 RETURNING *",
    )
    .bind(Json(fields))
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
