use std::sync::Arc;

use ai_client::Message;
use axum::extract::State;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::script;
use crate::state::AppState;

/// The demo shop's full catalog. No session required.
pub async fn list_products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "products": state.catalog }))
}

#[derive(Debug, Deserialize)]
pub struct DemoChatBody {
    #[serde(default)]
    messages: Vec<Message>,
}

/// Advance the scripted storefront conversation. An empty history (or a
/// missing one) gets the greeting.
pub async fn demo_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DemoChatBody>,
) -> impl IntoResponse {
    Json(script::advance(&state.catalog, &body.messages))
}
