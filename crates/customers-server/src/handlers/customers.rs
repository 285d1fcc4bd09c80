//! Customer handlers

use super::parse_id;
use crate::error::{ApiError, Result};
use crate::extractors::{ApiBody, Authorized};
use crate::services::PageRequest;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use customers_types::{Customer, CustomerDraft, CustomerUpdate, Page};
use tracing::{debug, info};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.store.customers().await)
}

pub async fn page(
    State(state): State<AppState>,
    Path((skip, top)): Path<(String, String)>,
) -> Json<Page<Customer>> {
    let request = PageRequest::parse(&skip, &top);
    debug!("Skip: {} Top: {}", request.skip, request.top);
    Json(state.store.page_customers(request).await)
}

/// Missing ids yield `null`, not an error.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Option<Customer>> {
    let customer = match parse_id(&id) {
        Some(id) => state.store.customer(id).await,
        None => None,
    };
    Json(customer)
}

pub async fn create(
    State(state): State<AppState>,
    ApiBody(draft): ApiBody<CustomerDraft>,
) -> Json<Customer> {
    let customer = state.store.append_customer(draft).await;
    info!("Created customer {} ({})", customer.id, customer.gender);
    Json(customer)
}

/// An unknown id is reported before the body is looked at, so a missing or
/// undecodable body on an unknown id still answers "Cannot find customer".
pub async fn update(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<ApiBody<CustomerUpdate>, ApiError>,
) -> Result<Json<Customer>> {
    let customer_id = match parse_id(&id) {
        Some(customer_id) if state.store.customer(customer_id).await.is_some() => customer_id,
        _ => return Err(ApiError::CustomerNotFound(id)),
    };
    let ApiBody(update) = body?;

    let customer = state
        .store
        .update_customer(customer_id, |customer| update.apply_to(customer))
        .await
        .ok_or(ApiError::CustomerNotFound(id))?;

    info!("Updated customer {}", customer.id);
    Ok(Json(customer))
}

pub async fn delete(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>> {
    let customer_id = parse_id(&id).ok_or_else(|| ApiError::CustomerNotFound(id.clone()))?;

    let removed = state
        .store
        .remove_customer(customer_id)
        .await
        .ok_or(ApiError::CustomerNotFound(id))?;

    info!("Deleted customer {}", removed.id);
    Ok(Json(removed))
}
