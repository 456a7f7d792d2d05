mod health;
mod index;
mod products;

use axum::{
    Router,
    routing::get,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    let list_create = get(products::list_products).post(products::create_product);
    let detail = get(products::get_product)
        .put(products::update_product)
        .patch(products::update_product)
        .delete(products::delete_product);

    Router::new()
        .route("/", get(index::product_index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // Both slash variants are registered to avoid 404/redirect issues.
        .route("/api/products", list_create.clone())
        .route("/api/products/", list_create)
        .route("/api/products/:id", detail.clone())
        .route("/api/products/:id/", detail)
}
