//! User types

use serde::{Deserialize, Serialize};

/// User account.
///
/// The password is stored and echoed back in plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub number_per_page: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// User login request.
///
/// Missing fields decode as empty strings, which match no user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLogin {
    pub email: String,
    pub password: String,
}

/// Email change request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailChange {
    pub current_email: String,
    pub new_email: String,
    pub password: String,
    /// Accepted for client compatibility; not applied to the user.
    pub number_per_page: Option<i64>,
}
