use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use futures::StreamExt;
use serde::Deserialize;
use serde_json::json;
use sightline_common::Keyword;
use sightline_scoring::score_keyword;
use sightline_store::{filter_keywords, sort_keywords, SortDirection, SortKey};
use uuid::Uuid;

use super::{error_response, session_id, store_error};
use crate::state::AppState;

/// How many rescores run at once during a refresh.
const MAX_CONCURRENT_REFRESH: usize = 4;

#[derive(Debug, Deserialize)]
pub struct KeywordListQuery {
    sort: Option<String>,
    dir: Option<String>,
    q: Option<String>,
}

/// List the session's keywords, optionally filtered and sorted.
pub async fn list_keywords(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<KeywordListQuery>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let sort = match params.sort.as_deref() {
        Some(raw) => match SortKey::parse(raw) {
            Some(key) => Some(key),
            None => return error_response(StatusCode::BAD_REQUEST, "Unknown sort key"),
        },
        None => None,
    };

    let direction = match params.dir.as_deref() {
        Some(raw) => match SortDirection::parse(raw) {
            Some(dir) => dir,
            None => return error_response(StatusCode::BAD_REQUEST, "Unknown sort direction"),
        },
        None => SortDirection::Desc,
    };

    let result = state
        .store
        .with_session(session, |workspace| {
            let mut keywords =
                filter_keywords(&workspace.keywords, params.q.as_deref().unwrap_or(""));
            if let Some(key) = sort {
                sort_keywords(&mut keywords, key, direction);
            }
            let selected: Vec<Uuid> = workspace.selected.iter().copied().collect();
            (keywords, selected)
        })
        .await;

    match result {
        Ok((keywords, selected)) => {
            Json(json!({ "keywords": keywords, "selected": selected })).into_response()
        }
        Err(e) => store_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct AddKeyword {
    term: String,
    volume: Option<u32>,
}

/// Add a keyword to the workspace, scored on the way in.
pub async fn add_keyword(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AddKeyword>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let term = body.term.trim();
    if term.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "term is required");
    }

    let volume = body.volume.unwrap_or(0);
    let scores = score_keyword(term, volume);
    let keyword = Keyword {
        id: Uuid::new_v4(),
        term: term.to_string(),
        volume,
        ai_likelihood: scores.ai_likelihood,
        difficulty: scores.difficulty,
        opportunity: scores.opportunity,
        intent: scores.intent,
        starred: false,
        scored_at: Utc::now(),
    };

    let stored = keyword.clone();
    match state
        .store
        .mutate(session, move |workspace| workspace.upsert_keyword(stored))
        .await
    {
        Ok(()) => (StatusCode::CREATED, Json(keyword)).into_response(),
        Err(e) => store_error(e),
    }
}

/// Flip the starred flag on one keyword.
pub async fn toggle_star(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .mutate(session, |workspace| workspace.toggle_star(id))
        .await
    {
        Ok(Some(starred)) => Json(json!({ "id": id, "starred": starred })).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Unknown keyword"),
        Err(e) => store_error(e),
    }
}

/// Toggle one keyword in or out of the comparison selection.
pub async fn toggle_selected(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .mutate(session, |workspace| workspace.toggle_selected(id))
        .await
    {
        Ok(Some(selected)) => Json(json!({ "id": id, "selected": selected })).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Unknown keyword"),
        Err(e) => store_error(e),
    }
}

pub async fn clear_selection(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .mutate(session, |workspace| workspace.clear_selection())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn delete_keyword(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .mutate(session, |workspace| workspace.remove_keyword(id))
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Unknown keyword"),
        Err(e) => store_error(e),
    }
}

/// Rescore every keyword in the workspace.
///
/// Keywords are rescored concurrently and each result lands in its own
/// store mutation, so one bad row never blocks the rest.
pub async fn refresh_keywords(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let targets: Vec<(Uuid, String, u32)> = match state
        .store
        .with_session(session, |workspace| {
            workspace
                .keywords
                .iter()
                .map(|k| (k.id, k.term.clone(), k.volume))
                .collect()
        })
        .await
    {
        Ok(t) => t,
        Err(e) => return store_error(e),
    };

    let results: Vec<serde_json::Value> = futures::stream::iter(targets)
        .map(|(id, term, volume)| {
            let store = &state.store;
            async move {
                let scores = score_keyword(&term, volume);
                match store
                    .mutate(session, |workspace| workspace.set_scores(id, &scores))
                    .await
                {
                    Ok(true) => json!({
                        "id": id,
                        "status": "updated",
                        "opportunity": scores.opportunity,
                    }),
                    Ok(false) => json!({ "id": id, "status": "missing" }),
                    Err(_) => json!({ "id": id, "status": "error" }),
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_REFRESH)
        .collect()
        .await;

    let refreshed = results
        .iter()
        .filter(|r| r["status"] == "updated")
        .count();

    Json(json!({ "refreshed": refreshed, "results": results })).into_response()
}
