//! Authentication handlers

use crate::error::{ApiError, Result};
use crate::extractors::{ApiBody, Authorized};
use crate::services::auth::issue_token;
use crate::AppState;
use axum::{extract::State, Json};
use customers_types::{User, UserLogin};
use tracing::{info, warn};

/// Issue a fresh token to the user matching the submitted credentials.
pub async fn login(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<UserLogin>,
) -> Result<Json<User>> {
    info!("Login attempt for: {}", req.email);

    let token = issue_token();
    let user = state
        .store
        .update_user_by_credentials(&req.email, &req.password, |user| {
            user.token = Some(token);
        })
        .await
        .ok_or_else(|| {
            warn!("Login failed for: {}", req.email);
            ApiError::InvalidCredentials
        })?;

    info!("Login successful for: {}", req.email);
    Ok(Json(user))
}

/// Tokens are not revoked; logout only checks the gate.
pub async fn logout(_auth: Authorized) -> Json<bool> {
    Json(true)
}
