//! Product CRUD handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use catalog_core::domain::{Product, ProductPayload};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /products (token required)
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

/// GET /product/{id} (anonymous)
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

/// POST /product (token required)
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let product = payload.into_product(catalog_shared::new_id());
    let rows = state.products.create(&product).await?;
    if rows == 0 {
        return Err(ApiError::BadRequest(
            "There was an error registering a product".to_string(),
        ));
    }

    let location = format!("/product/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// PUT /product/{id} (token required). Full replace: the stored record is
/// overwritten with the payload under the path id, whatever id the body
/// carries.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;

    state
        .products
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let product = payload.into_product(id);
    let rows = state.products.update(&product).await?;
    if rows == 0 {
        return Err(ApiError::BadRequest(
            "There was an error updating the product".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /product/{id} (token required)
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .products
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let rows = state.products.delete(&id).await?;
    if rows == 0 {
        return Err(ApiError::BadRequest(
            "There was an error removing the product".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
