//! HTTP handlers

pub mod auth;
pub mod customers;
pub mod health;
pub mod orders;
pub mod states;
pub mod users;

pub use health::health;

use crate::services::pagination::parse_leading_int;

/// Parse a path id the same lenient way page bounds are parsed. Ids with no
/// leading integer match no record.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    parse_leading_int(raw)
}
