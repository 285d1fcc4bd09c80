//! Request extractors

pub mod auth;
pub mod body;

pub use auth::Authorized;
pub use body::ApiBody;
