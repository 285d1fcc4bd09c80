//! Request body extractor with `{message}` rejections

use crate::error::ApiError;
use async_trait::async_trait;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json,
};

/// Request body decoded from JSON, or from a urlencoded form when the
/// request says so. Bodies that fail to decode are rejected through
/// [`ApiError`] so clients always see the same error envelope.
#[derive(Debug, Clone)]
pub struct ApiBody<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for ApiBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(ApiBody(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(ApiBody(value))
        }
    }
}
