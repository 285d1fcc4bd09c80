//! Order lookup
//!
//! Responds with the whole customer record for a customer id, or an empty
//! list when there is none. Clients depend on this shape.

use super::parse_id;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let customer = match parse_id(&id) {
        Some(id) => state.store.customer(id).await,
        None => None,
    };

    match customer {
        Some(customer) => Json(customer).into_response(),
        None => Json(json!([])).into_response(),
    }
}
