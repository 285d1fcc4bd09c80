//! API error type
//!
//! Every handler failure maps to a status code and a `{ "message": ... }`
//! body. Nothing escapes to the transport layer as an unhandled fault.

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("token is required")]
    TokenRequired,

    #[error("token is invalid")]
    TokenInvalid,

    #[error("Cannot find customer with id:{0}")]
    CustomerNotFound(String),

    #[error("Email or password is invalid")]
    InvalidCredentials,

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    InvalidForm(#[from] FormRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TokenRequired | ApiError::TokenInvalid => StatusCode::UNAUTHORIZED,
            ApiError::CustomerNotFound(_)
            | ApiError::InvalidCredentials
            | ApiError::InvalidBody(_)
            | ApiError::InvalidForm(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::TokenRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::TokenInvalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::CustomerNotFound("3".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::CustomerNotFound("42".to_string()).to_string(),
            "Cannot find customer with id:42"
        );
        assert_eq!(ApiError::TokenRequired.to_string(), "token is required");
    }
}
