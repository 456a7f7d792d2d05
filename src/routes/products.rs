use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{ProductPayload, ProductResponse, merge_fields, validate_fields},
    queries::product_queries,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = product_queries::get_all(&state.db).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let fields = match payload.fields {
        Some(ref value) => {
            validate_fields(value)?;
            value.clone()
        }
        None => Value::Object(Default::default()),
    };

    let product = product_queries::insert(&state.db, &fields).await?;
    tracing::info!("Created product {}", product.display_name());

    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into()))
}

/// PUT and PATCH both merge the incoming object into the stored one
/// instead of replacing it; keys missing from the body are left
/// untouched.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>> {
    let existing = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    let merged = match payload.fields {
        Some(ref value) => merge_fields(&existing.fields, validate_fields(value)?),
        None => existing.fields.0.clone(),
    };

    let product = product_queries::update_fields(&state.db, id, &merged)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = product_queries::delete(&state.db, id).await?;

    if !deleted {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
