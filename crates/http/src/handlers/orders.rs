use std::sync::Arc;

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::OrderInput;

use crate::api_error::ApiError;
use crate::dto::OrderDto;
use crate::handlers::{parse_id, ApiJson};
use crate::AppState;

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let orders =
        state.order_service.all().await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

pub async fn find_order(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<OrderDto>, ApiError> {
    let id = parse_id(&id, uri.path())?;
    let order =
        state.order_service.get(id).await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(OrderDto::from(order)))
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    ApiJson(input): ApiJson<OrderInput>,
) -> Result<(StatusCode, Json<OrderDto>), ApiError> {
    let order = state
        .order_service
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(OrderDto::from(order))))
}
