//! Business logic services

pub mod auth;
pub mod pagination;

pub use auth::{AuthService, TokenPolicy};
pub use pagination::PageRequest;
