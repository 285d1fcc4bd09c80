//! User handlers

use crate::error::{ApiError, Result};
use crate::extractors::{ApiBody, Authorized};
use crate::AppState;
use axum::{extract::State, Json};
use customers_types::{EmailChange, User};
use tracing::{info, warn};

/// Change a user's email. The user is found by current email and password,
/// independently of whoever holds the bearer token.
pub async fn change_email(
    _auth: Authorized,
    State(state): State<AppState>,
    ApiBody(req): ApiBody<EmailChange>,
) -> Result<Json<User>> {
    info!("Email change requested for: {}", req.current_email);

    let new_email = req.new_email;
    let user = state
        .store
        .update_user_by_credentials(&req.current_email, &req.password, |user| {
            user.email = new_email;
        })
        .await
        .ok_or_else(|| {
            warn!("Email change rejected for: {}", req.current_email);
            ApiError::InvalidCredentials
        })?;

    info!("User {} email changed to {}", user.id, user.email);
    Ok(Json(user))
}
