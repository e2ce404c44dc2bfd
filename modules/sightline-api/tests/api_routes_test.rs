//! Route-level tests over the full router with mock vendors.
//!
//! Each test builds an app with `test_app`, drives it through tower's
//! `oneshot`, and asserts on the JSON bodies. No network, no real vendors.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use ai_client::Message;
use serper_client::{
    AiOverviewBlock, OrganicResult, OverviewReference, RelatedQuestion, SerpResponse, TextBlock,
};
use sightline_api::providers::{ChatProvider, PageReader, PromptIdea, SearchProvider};
use sightline_api::testing::{MockChat, MockReader, MockSearch};
use sightline_api::{build_router, AppState};
use sightline_common::ReadablePage;
use sightline_store::SessionStore;

fn test_app(
    chat: Option<Arc<dyn ChatProvider>>,
    search: Option<Arc<dyn SearchProvider>>,
    reader: Arc<dyn PageReader>,
) -> Router {
    let state = AppState::new(SessionStore::new(60), chat, search, reader);
    build_router(Arc::new(state))
}

/// App with no vendors configured at all.
fn bare_app() -> Router {
    test_app(None, None, Arc::new(MockReader::new()))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str, session: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Session-Id", session)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, session: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = session {
        builder = builder.header("X-Session-Id", id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn delete(uri: &str, session: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("X-Session-Id", session)
        .body(Body::empty())
        .unwrap()
}

async fn create_session(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check_responds() {
    let response = bare_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn new_sessions_come_seeded() {
    let app = bare_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert!(body["session_id"].as_str().is_some());
    assert_eq!(body["workspace"]["keywords"].as_array().unwrap().len(), 8);
    assert_eq!(body["workspace"]["competitors"].as_array().unwrap().len(), 3);
    assert_eq!(body["workspace"]["brand"]["name"], "Verdant & Vine");
}

#[tokio::test]
async fn missing_and_unknown_sessions_are_rejected() {
    let app = bare_app();

    let no_header = Request::builder()
        .uri("/api/keywords")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(no_header).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get("/api/keywords", "not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stranger = Uuid::new_v4().to_string();
    let response = app.oneshot(get("/api/keywords", &stranger)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn adding_a_keyword_scores_it_on_the_way_in() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/keywords",
            Some(&session),
            json!({ "term": "  buy ceramic planters online  ", "volume": 880 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_response(response).await;
    assert_eq!(body["term"], "buy ceramic planters online");
    assert_eq!(body["intent"], "high");
    assert!(body["opportunity"].as_u64().unwrap() > 0);

    let response = app
        .clone()
        .oneshot(get("/api/keywords?q=ceramic", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 1);

    let response = app
        .oneshot(post_json(
            "/api/keywords",
            Some(&session),
            json!({ "term": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn keyword_list_supports_sort_and_filter() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(get("/api/keywords?sort=volume&dir=desc", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    let keywords = body["keywords"].as_array().unwrap();
    assert_eq!(keywords[0]["volume"], 12100);
    assert_eq!(keywords[keywords.len() - 1]["volume"], 1300);

    let response = app
        .clone()
        .oneshot(get("/api/keywords?sort=term&dir=asc", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(
        body["keywords"][0]["term"],
        "best low light houseplants"
    );

    let response = app
        .clone()
        .oneshot(get("/api/keywords?q=monstera", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(get("/api/keywords?sort=nonsense", &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(get("/api/keywords?sort=volume&dir=sideways", &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn star_select_and_delete_round_trip() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(get("/api/keywords", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    let first = &body["keywords"][0];
    let id = first["id"].as_str().unwrap().to_string();
    let starred_before = first["starred"].as_bool().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/keywords/{id}/star"),
            Some(&session),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["starred"], !starred_before);

    // toggle into and back out of the selection
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/keywords/{id}/select"),
            Some(&session),
            json!({}),
        ))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["selected"], true);

    let response = app
        .clone()
        .oneshot(get("/api/keywords", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["selected"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(delete("/api/keywords/selection", &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let unknown = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/keywords/{unknown}/select"),
            Some(&session),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/keywords/{id}"), &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/keywords/{id}"), &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/keywords", &session)).await.unwrap();
    let body = json_response(response).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn refresh_rescores_every_keyword() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .oneshot(post_json(
            "/api/keywords/refresh",
            Some(&session),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["refreshed"], 8);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r["status"] == "updated"));
}

#[tokio::test]
async fn chat_serves_fallback_without_provider() {
    let app = bare_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/chat",
            None,
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["fallback"], true);
    assert!(!body["reply"].as_str().unwrap().is_empty());

    let response = app
        .oneshot(post_json("/api/chat", None, json!({ "messages": [] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_uses_provider_and_falls_back_on_error() {
    let chat = MockChat::new().on_reply(
        "What is AI search optimization?",
        "Making your content the answer assistants cite.",
    );
    let app = test_app(Some(Arc::new(chat)), None, Arc::new(MockReader::new()));

    let response = app
        .oneshot(post_json(
            "/api/chat",
            None,
            json!({ "messages": [{ "role": "user", "content": "What is AI search optimization?" }] }),
        ))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["fallback"], false);
    assert_eq!(
        body["reply"],
        "Making your content the answer assistants cite."
    );

    let app = test_app(
        Some(Arc::new(MockChat::failing())),
        None,
        Arc::new(MockReader::new()),
    );
    let response = app
        .oneshot(post_json(
            "/api/chat",
            None,
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["fallback"], true);
}

fn sample_serp() -> SerpResponse {
    SerpResponse {
        organic: vec![
            OrganicResult {
                title: "Monstera".to_string(),
                link: "https://en.wikipedia.org/wiki/Monstera".to_string(),
                snippet: "A genus of flowering plants.".to_string(),
                position: 1,
            },
            OrganicResult {
                title: "Monstera care thread".to_string(),
                link: "https://www.reddit.com/r/houseplants/mc".to_string(),
                snippet: "What works for mine.".to_string(),
                position: 2,
            },
        ],
        ai_overview: Some(AiOverviewBlock {
            text_blocks: vec![TextBlock {
                block_type: "paragraph".to_string(),
                snippet: "Monsteras want bright indirect light.".to_string(),
            }],
            references: vec![OverviewReference {
                title: "Monstera".to_string(),
                link: "https://en.wikipedia.org/wiki/Monstera".to_string(),
                snippet: String::new(),
                source: "Wikipedia".to_string(),
                index: 1,
            }],
        }),
        people_also_ask: vec![RelatedQuestion {
            question: "How often should I water a monstera?".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn search_reshapes_the_serp() {
    let search = MockSearch::new().on_search("monstera care", sample_serp());
    let app = test_app(None, Some(Arc::new(search)), Arc::new(MockReader::new()));

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/search",
            None,
            json!({ "query": "monstera care" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["query"], "monstera care");
    assert_eq!(body["organic"][0]["source"], "en.wikipedia.org");
    assert_eq!(body["organic"][0]["difficulty"], "hard");
    assert_eq!(body["organic"][1]["difficulty"], "easy");
    assert_eq!(
        body["ai_overview"]["text"],
        "Monsteras want bright indirect light."
    );
    assert_eq!(
        body["related_questions"][0],
        "How often should I water a monstera?"
    );

    // unregistered query means the provider errors
    let response = app
        .oneshot(post_json("/api/search", None, json!({ "query": "other" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn search_without_provider_is_unavailable() {
    let response = bare_app()
        .oneshot(post_json(
            "/api/search",
            None,
            json!({ "query": "monstera care" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

fn guide_page(url: &str) -> ReadablePage {
    let content = format!(
        "## How often should I water?\n\
         - Check the top soil\n- Use pots with drainage\n- Skip a week in winter\n\
         ## Frequently asked questions\n\
         Updated for {}.\n{}",
        chrono::Utc::now().format("%Y"),
        "water light soil roots leaves growth ".repeat(110)
    );
    ReadablePage {
        url: url.to_string(),
        title: "The Complete Monstera Watering Guide for Beginners".to_string(),
        content,
        description: Some("A watering guide".to_string()),
        site_name: Some("Verdant & Vine".to_string()),
        published_time: None,
    }
}

#[tokio::test]
async fn read_returns_page_with_word_count() {
    let url = "https://verdantandvine.com/guides/watering";
    let page = guide_page(url);
    let expected_words = page.content.split_whitespace().count();
    let reader = MockReader::new().on_page(url, page);
    let app = test_app(None, None, Arc::new(reader));

    let response = app
        .clone()
        .oneshot(post_json("/api/read", None, json!({ "url": url })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["word_count"], expected_words);
    assert_eq!(
        body["page"]["title"],
        "The Complete Monstera Watering Guide for Beginners"
    );

    let response = app
        .clone()
        .oneshot(post_json("/api/read", None, json!({ "url": "ftp://x" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/api/read",
            None,
            json!({ "url": "https://unknown.example.com/" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn audit_scores_the_extracted_page() {
    let url = "https://verdantandvine.com/guides/watering";
    let reader = MockReader::new().on_page(url, guide_page(url));
    let app = test_app(None, None, Arc::new(reader));

    let response = app
        .oneshot(post_json("/api/audit", None, json!({ "url": url })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    // solid depth 15 + question heading 20 + lists 15 + faq 15 + year 15 + title 10
    assert_eq!(body["audit"]["score"], 90);
    assert!(body["audit"]["strengths"].as_array().unwrap().len() >= 5);
}

#[tokio::test]
async fn score_endpoint_needs_no_session() {
    let response = bare_app()
        .oneshot(post_json(
            "/api/score",
            None,
            json!({ "term": "buy monstera online", "volume": 4400 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["scores"]["intent"], "high");
    assert!(body["scores"]["difficulty"].as_u64().is_some());
}

#[tokio::test]
async fn visibility_counts_mentions_across_prompts() {
    let chat = MockChat::new()
        .on_reply(
            "best online plant shop for beginners",
            "Verdant & Vine is a great pick, and Leafline has solid starter kits.",
        )
        .on_reply(
            "where should I buy a monstera online",
            "Leafline ships monsteras nationwide.",
        )
        .on_reply(
            "best place to order low light indoor plants",
            "PlantPost has a strong low light selection.",
        );
    let app = test_app(Some(Arc::new(chat)), None, Arc::new(MockReader::new()));
    let session = create_session(&app).await;

    let response = app
        .oneshot(post_json("/api/visibility", Some(&session), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["total_prompts"], 4);
    // one fixture prompt has no registered reply, so it errors
    assert_eq!(body["answered"], 3);
    assert_eq!(body["brand_share"], 1);
    assert_eq!(body["competitor_share"]["Leafline"], 2);
    assert_eq!(body["competitor_share"]["PlantPost"], 1);
    assert_eq!(body["competitor_share"]["Sprig & Soil"], 0);

    let outcomes = body["prompts"].as_array().unwrap();
    assert_eq!(
        outcomes.iter().filter(|o| o["status"] == "error").count(),
        1
    );
}

#[tokio::test]
async fn visibility_without_chat_is_unavailable() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .oneshot(post_json("/api/visibility", Some(&session), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn prompt_suggestions_fall_back_to_canned_ideas() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/prompts/suggest",
            Some(&session),
            json!({ "topic": "pet safe plants" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["fallback"], true);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);

    let response = app
        .oneshot(post_json(
            "/api/prompts/suggest",
            Some(&session),
            json!({ "topic": "  " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn prompt_suggestions_use_the_provider_when_it_delivers() {
    let chat = MockChat::new().with_suggestions(vec![PromptIdea {
        prompt: "best pet safe plants for apartments".to_string(),
        rationale: "High purchase intent".to_string(),
    }]);
    let app = test_app(Some(Arc::new(chat)), None, Arc::new(MockReader::new()));
    let session = create_session(&app).await;

    let response = app
        .oneshot(post_json(
            "/api/prompts/suggest",
            Some(&session),
            json!({ "topic": "pet safe plants" }),
        ))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["fallback"], false);
    assert_eq!(
        body["suggestions"][0]["prompt"],
        "best pet safe plants for apartments"
    );
}

#[tokio::test]
async fn demo_catalog_and_script_run_without_a_session() {
    let app = bare_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/demo/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 8);

    let response = app
        .clone()
        .oneshot(post_json("/api/demo/chat", None, json!({})))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["stage"], "greeting");

    let browse = json!({
        "messages": [{ "role": "user", "content": "do you have a snake plant?" }]
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/demo/chat", None, browse))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["stage"], "browsing");
    assert!(body["products"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["name"] == "Snake Plant"));

    let checkout = json!({
        "messages": [
            { "role": "user", "content": "add the snake plant to my cart" },
            { "role": "assistant", "content": "Done!" },
            { "role": "user", "content": "checkout please" }
        ]
    });
    let response = app
        .oneshot(post_json("/api/demo/chat", None, checkout))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["stage"], "checkout");
}

#[tokio::test]
async fn competitor_and_brand_crud_round_trip() {
    let app = bare_app();
    let session = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/competitors",
            Some(&session),
            json!({ "name": "GreenCart", "website": "greencart.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_response(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get("/api/competitors", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["competitors"].as_array().unwrap().len(), 4);

    // same id replaces instead of appending
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/competitors",
            Some(&session),
            json!({ "id": id, "name": "GreenCart", "color": "#123456" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get("/api/competitors", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    let competitors = body["competitors"].as_array().unwrap();
    assert_eq!(competitors.len(), 4);
    assert!(competitors
        .iter()
        .any(|c| c["name"] == "GreenCart" && c["color"] == "#123456"));

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/competitors/{id}"), &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let unknown = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(delete(&format!("/api/competitors/{unknown}"), &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get("/api/brand", &session))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["name"], "Verdant & Vine");

    let update = json!({
        "name": "Verdant & Vine Co",
        "website": "verdantandvine.com",
        "color": "#2f6f4f",
        "logo_url": "/logos/verdantandvine.svg",
        "prompts": ["best plant shop"]
    });
    let put = Request::builder()
        .method("PUT")
        .uri("/api/brand")
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Session-Id", &session)
        .body(Body::from(update.to_string()))
        .unwrap();
    let response = app.clone().oneshot(put).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/brand", &session)).await.unwrap();
    let body = json_response(response).await;
    assert_eq!(body["name"], "Verdant & Vine Co");
    assert_eq!(body["prompts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn sessions_are_isolated_from_each_other() {
    let app = bare_app();
    let first = create_session(&app).await;
    let second = create_session(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/keywords",
            Some(&first),
            json!({ "term": "terrarium kits", "volume": 720 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get("/api/keywords", &first))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 9);

    let response = app.oneshot(get("/api/keywords", &second)).await.unwrap();
    let body = json_response(response).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn chat_accepts_typed_message_payloads() {
    let chat = MockChat::new().on_reply("ping", "pong");
    let app = test_app(Some(Arc::new(chat)), None, Arc::new(MockReader::new()));

    let messages = vec![Message::system("You are helpful."), Message::user("ping")];
    let response = app
        .oneshot(post_json(
            "/api/chat",
            None,
            json!({ "messages": messages }),
        ))
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["reply"], "pong");
}
