use std::sync::Arc;

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::ProductInput;

use crate::api_error::ApiError;
use crate::dto::ProductDto;
use crate::handlers::{parse_id, ApiJson};
use crate::AppState;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state
        .product_service
        .all()
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

pub async fn find_product(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_id(&id, uri.path())?;
    let product = state
        .product_service
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(ProductDto::from(product)))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let product = state
        .product_service
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(product))))
}
