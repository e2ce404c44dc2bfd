use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use sightline_common::{BrandProfile, Competitor};
use uuid::Uuid;

use super::{error_response, session_id, store_error};
use crate::state::AppState;

const DEFAULT_COLOR: &str = "#8884d8";

pub async fn list_competitors(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .with_session(session, |workspace| workspace.competitors.clone())
        .await
    {
        Ok(competitors) => Json(json!({ "competitors": competitors })).into_response(),
        Err(e) => store_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpsertCompetitor {
    id: Option<Uuid>,
    name: String,
    website: Option<String>,
    color: Option<String>,
    logo_url: Option<String>,
}

/// Add a competitor, or replace one when the body carries an id.
pub async fn upsert_competitor(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpsertCompetitor>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let name = body.name.trim();
    if name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "name is required");
    }

    let is_new = body.id.is_none();
    let competitor = Competitor {
        id: body.id.unwrap_or_else(Uuid::new_v4),
        name: name.to_string(),
        website: body.website.unwrap_or_default(),
        color: body.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        logo_url: body.logo_url.unwrap_or_default(),
    };

    let stored = competitor.clone();
    match state
        .store
        .mutate(session, move |workspace| {
            workspace.upsert_competitor(stored)
        })
        .await
    {
        Ok(()) if is_new => (StatusCode::CREATED, Json(competitor)).into_response(),
        Ok(()) => Json(competitor).into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn delete_competitor(
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
        .mutate(session, |workspace| workspace.remove_competitor(id))
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Unknown competitor"),
        Err(e) => store_error(e),
    }
}

pub async fn get_brand(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .store
        .with_session(session, |workspace| workspace.brand.clone())
        .await
    {
        Ok(brand) => Json(brand).into_response(),
        Err(e) => store_error(e),
    }
}

/// Replace the brand profile wholesale.
pub async fn put_brand(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(brand): Json<BrandProfile>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if brand.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "name is required");
    }

    let stored = brand.clone();
    match state
        .store
        .mutate(session, move |workspace| workspace.set_brand(stored))
        .await
    {
        Ok(()) => Json(brand).into_response(),
        Err(e) => store_error(e),
    }
}
