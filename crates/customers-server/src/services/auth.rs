//! Authentication service
//!
//! Gatekeeping only: a request either carries an acceptable bearer token or
//! it is rejected. The gate never resolves which user owns the token.

use crate::error::ApiError;
use crate::storage::RecordStore;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// How a presented bearer token is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// The token must be held by some user.
    #[default]
    Membership,
    /// Any present token is accepted.
    Presence,
}

impl fmt::Display for TokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPolicy::Membership => write!(f, "membership"),
            TokenPolicy::Presence => write!(f, "presence"),
        }
    }
}

impl FromStr for TokenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "membership" => Ok(TokenPolicy::Membership),
            "presence" => Ok(TokenPolicy::Presence),
            other => Err(format!("unknown token policy: {}", other)),
        }
    }
}

pub struct AuthService {
    store: Arc<RecordStore>,
    policy: TokenPolicy,
}

impl AuthService {
    pub fn new(store: Arc<RecordStore>, policy: TokenPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> TokenPolicy {
        self.policy
    }

    /// Check an `Authorization` header value.
    pub async fn authorize(&self, header: Option<&str>) -> Result<(), ApiError> {
        let token = header
            .and_then(bearer_token)
            .ok_or(ApiError::TokenRequired)?;

        match self.policy {
            TokenPolicy::Presence => Ok(()),
            TokenPolicy::Membership => {
                if self.store.user_holding_token(token).await {
                    debug!("Bearer token accepted");
                    Ok(())
                } else {
                    warn!("Rejected unknown bearer token");
                    Err(ApiError::TokenInvalid)
                }
            }
        }
    }
}

/// Everything after the first `"Bearer "`, trimmed. Empty tokens count as
/// missing.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (_, token) = header.split_once("Bearer ")?;
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Fresh opaque login token: 32 lowercase hex characters.
pub fn issue_token() -> String {
    Uuid::new_v4().simple().to_string()
}
