use std::sync::Arc;

use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::CustomerInput;
use storefront_storage::Page;

use crate::api_error::ApiError;
use crate::api_types::{PagedQuery, SearchQuery};
use crate::dto::CustomerDto;
use crate::handlers::ApiJson;
use crate::AppState;

pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state
        .customer_service
        .all()
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

pub async fn list_customers_paged(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PagedQuery>,
) -> Result<Json<Page<CustomerDto>>, ApiError> {
    let (page, size) = query
        .validated()
        .map_err(|violations| ApiError::constraint_violation(violations, uri.path()))?;
    let customers = state
        .customer_service
        .page(page, size)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(customers.map(CustomerDto::from)))
}

pub async fn search_customers(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state
        .customer_service
        .search(&query.query)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    let customer = state
        .customer_service
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(CustomerDto::from(customer))))
}
