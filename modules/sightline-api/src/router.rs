use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::rest;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Sessions
        .route("/api/session", post(rest::session::create_session))
        // Keyword workspace
        .route(
            "/api/keywords",
            get(rest::keywords::list_keywords).post(rest::keywords::add_keyword),
        )
        .route("/api/keywords/refresh", post(rest::keywords::refresh_keywords))
        .route("/api/keywords/selection", delete(rest::keywords::clear_selection))
        .route("/api/keywords/{id}", delete(rest::keywords::delete_keyword))
        .route("/api/keywords/{id}/star", post(rest::keywords::toggle_star))
        .route("/api/keywords/{id}/select", post(rest::keywords::toggle_selected))
        // Competitors and brand
        .route(
            "/api/competitors",
            get(rest::competitors::list_competitors).post(rest::competitors::upsert_competitor),
        )
        .route("/api/competitors/{id}", delete(rest::competitors::delete_competitor))
        .route(
            "/api/brand",
            get(rest::competitors::get_brand).put(rest::competitors::put_brand),
        )
        // Vendor proxies
        .route("/api/chat", post(rest::proxy::chat))
        .route("/api/search", post(rest::proxy::search))
        .route("/api/read", post(rest::proxy::read_page))
        .route("/api/audit", post(rest::proxy::audit_page))
        .route("/api/score", post(rest::proxy::score))
        .route("/api/visibility", post(rest::proxy::visibility))
        .route("/api/prompts/suggest", post(rest::proxy::suggest_prompts))
        // Demo storefront
        .route("/api/demo/products", get(rest::demo::list_products))
        .route("/api/demo/chat", post(rest::demo::demo_chat))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Session responses are per-user, never cacheable
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(CompressionLayer::new())
        // Logging layer: method + path + status + latency only (no bodies)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
