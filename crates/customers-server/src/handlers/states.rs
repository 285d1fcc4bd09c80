//! State reference data

use crate::AppState;
use axum::{extract::State, Json};
use customers_types::State as UsState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<UsState>> {
    Json(state.store.states().to_vec())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_lists_states() {
        let app = app(seeded_store());
        let body = expect(send(&app, "GET", "/api/states", None, None).await, StatusCode::OK).await;
        assert_eq!(body[0]["abbreviation"], "AL");
        assert_eq!(body[0]["_id"], "s1");
    }
}
