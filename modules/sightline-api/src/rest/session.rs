use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::state::AppState;

/// Create a fresh workspace seeded with the sample dataset.
pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (id, workspace) = state.store.create_session().await;
    Json(json!({ "session_id": id, "workspace": workspace }))
}
