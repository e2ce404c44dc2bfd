//! Proxy routes in front of the chat, search, and reader vendors.
//!
//! Vendor responses are reshaped into the dashboard's own types before
//! they leave the server, so the client never sees a vendor wire format.

use std::collections::BTreeMap;
use std::sync::Arc;

use ai_client::Message;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serper_client::SerpResponse;
use sightline_common::{AiOverview, Reference, SearchSnapshot};
use sightline_scoring::{
    audit_content, count_mentions, display_host, reference_difficulty, score_keyword,
};
use tracing::warn;
use url::Url;

use super::{error_response, session_id, store_error};
use crate::providers::PromptIdea;
use crate::state::AppState;

const DEFAULT_RESULT_COUNT: usize = 10;
const MAX_RESULT_COUNT: usize = 20;

/// How many visibility prompts run against the chat vendor at once.
const MAX_CONCURRENT_PROMPTS: usize = 4;

/// Served whenever the chat vendor is missing or errors, so the marketing
/// widget always has something to say.
const CHAT_FALLBACK: &str = "Thanks for reaching out! Our assistant is briefly offline. \
     Try again in a moment, or explore the keyword dashboard while you wait.";

// --- Chat ---

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    messages: Vec<Message>,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatBody>,
) -> Response {
    if body.messages.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "messages must not be empty");
    }

    let Some(provider) = &state.chat else {
        return fallback_reply();
    };

    match provider.chat(&body.messages).await {
        Ok(reply) => Json(json!({ "reply": reply, "fallback": false })).into_response(),
        Err(e) => {
            warn!(error = %e, "Chat provider failed");
            fallback_reply()
        }
    }
}

fn fallback_reply() -> Response {
    Json(json!({ "reply": CHAT_FALLBACK, "fallback": true })).into_response()
}

// --- Search ---

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    query: String,
    num: Option<usize>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> Response {
    let query = body.query.trim();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "query is required");
    }

    let Some(provider) = &state.search else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Search is not configured");
    };

    let num = body.num.unwrap_or(DEFAULT_RESULT_COUNT).min(MAX_RESULT_COUNT);
    match provider.search(query, num).await {
        Ok(serp) => Json(snapshot_from_serp(query, serp)).into_response(),
        Err(e) => {
            warn!(error = %e, query, "Search provider failed");
            error_response(StatusCode::BAD_GATEWAY, "Search provider failed")
        }
    }
}

fn reference_from(title: &str, link: &str, snippet: &str, position: u32) -> Reference {
    Reference {
        title: title.to_string(),
        link: link.to_string(),
        snippet: snippet.to_string(),
        source: display_host(link).unwrap_or_default(),
        position,
        difficulty: reference_difficulty(link),
    }
}

/// Reshape a raw SERP into the dashboard's snapshot type.
///
/// The AI Overview keeps its citation list; when Google returns an answer
/// box instead, that box is promoted into the overview slot so the client
/// renders one thing.
pub(crate) fn snapshot_from_serp(query: &str, serp: SerpResponse) -> SearchSnapshot {
    let organic = serp
        .organic
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let position = if result.position > 0 {
                result.position
            } else {
                i as u32 + 1
            };
            reference_from(&result.title, &result.link, &result.snippet, position)
        })
        .collect();

    let ai_overview = serp
        .ai_overview
        .as_ref()
        .map(|block| AiOverview {
            text: block
                .text_blocks
                .iter()
                .map(|b| b.snippet.as_str())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
            references: block
                .references
                .iter()
                .map(|r| reference_from(&r.title, &r.link, &r.snippet, r.index))
                .collect(),
        })
        .or_else(|| {
            serp.answer_box.as_ref().map(|answer| AiOverview {
                text: if answer.answer.is_empty() {
                    answer.snippet.clone()
                } else {
                    answer.answer.clone()
                },
                references: if answer.link.is_empty() {
                    Vec::new()
                } else {
                    vec![reference_from(&answer.title, &answer.link, &answer.snippet, 1)]
                },
            })
        });

    SearchSnapshot {
        query: query.to_string(),
        ai_overview,
        organic,
        related_questions: serp
            .people_also_ask
            .iter()
            .map(|q| q.question.clone())
            .filter(|q| !q.is_empty())
            .collect(),
    }
}

// --- Read / audit ---

#[derive(Debug, Deserialize)]
pub struct ReadBody {
    url: String,
}

pub async fn read_page(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReadBody>,
) -> Response {
    let url = match validate_url(&body.url) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state.reader.read(&url).await {
        Ok(page) => {
            let word_count = page.content.split_whitespace().count();
            Json(json!({ "page": page, "word_count": word_count })).into_response()
        }
        Err(e) => {
            warn!(error = %e, url = %url, "Reader failed");
            error_response(StatusCode::BAD_GATEWAY, "Failed to read page")
        }
    }
}

pub async fn audit_page(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReadBody>,
) -> Response {
    let url = match validate_url(&body.url) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state.reader.read(&url).await {
        Ok(page) => {
            let audit = audit_content(&page);
            Json(json!({ "url": page.url, "title": page.title, "audit": audit }))
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, url = %url, "Reader failed");
            error_response(StatusCode::BAD_GATEWAY, "Failed to read page")
        }
    }
}

fn validate_url(raw: &str) -> Result<String, Response> {
    let parsed = Url::parse(raw.trim())
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid url"))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Only http(s) urls are supported",
        ));
    }

    Ok(parsed.to_string())
}

// --- Scoring ---

#[derive(Debug, Deserialize)]
pub struct ScoreBody {
    term: String,
    volume: Option<u32>,
}

/// Score a term without touching any session.
pub async fn score(Json(body): Json<ScoreBody>) -> Response {
    let term = body.term.trim();
    if term.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "term is required");
    }

    let volume = body.volume.unwrap_or(0);
    let scores = score_keyword(term, volume);
    Json(json!({ "term": term, "volume": volume, "scores": scores })).into_response()
}

// --- Visibility ---

#[derive(Debug, Serialize)]
pub struct PromptOutcome {
    pub prompt: String,
    pub status: String,
    pub answer: Option<String>,
    pub brand_mentions: u32,
    pub competitor_mentions: BTreeMap<String, u32>,
}

#[derive(Debug, Serialize)]
pub struct VisibilityReport {
    pub total_prompts: usize,
    pub answered: usize,
    /// Prompts whose answer mentioned the brand at least once.
    pub brand_share: usize,
    pub competitor_share: BTreeMap<String, usize>,
    pub prompts: Vec<PromptOutcome>,
}

/// Run every tracked prompt through the chat vendor and count who gets
/// mentioned in the answers.
pub async fn visibility(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let Some(provider) = state.chat.clone() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Chat is not configured");
    };

    let snapshot = state
        .store
        .with_session(session, |workspace| {
            (
                workspace.brand.name.clone(),
                workspace.brand.prompts.clone(),
                workspace
                    .competitors
                    .iter()
                    .map(|c| c.name.clone())
                    .collect::<Vec<_>>(),
            )
        })
        .await;

    let (brand_name, prompts, competitor_names) = match snapshot {
        Ok(s) => s,
        Err(e) => return store_error(e),
    };

    if prompts.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No prompts configured for the brand");
    }

    let outcomes: Vec<PromptOutcome> = futures::stream::iter(prompts)
        .map(|prompt| {
            let provider = provider.clone();
            let brand = brand_name.clone();
            let competitors = competitor_names.clone();
            async move {
                match provider.chat(&[Message::user(&prompt)]).await {
                    Ok(answer) => {
                        let brand_mentions = count_mentions(&answer, &brand);
                        let competitor_mentions = competitors
                            .iter()
                            .map(|name| (name.clone(), count_mentions(&answer, name)))
                            .collect();
                        PromptOutcome {
                            prompt,
                            status: "ok".to_string(),
                            answer: Some(answer),
                            brand_mentions,
                            competitor_mentions,
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Visibility prompt failed");
                        PromptOutcome {
                            prompt,
                            status: "error".to_string(),
                            answer: None,
                            brand_mentions: 0,
                            competitor_mentions: BTreeMap::new(),
                        }
                    }
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_PROMPTS)
        .collect()
        .await;

    let answered = outcomes.iter().filter(|o| o.status == "ok").count();
    let brand_share = outcomes.iter().filter(|o| o.brand_mentions > 0).count();
    let competitor_share = competitor_names
        .iter()
        .map(|name| {
            let share = outcomes
                .iter()
                .filter(|o| o.competitor_mentions.get(name).copied().unwrap_or(0) > 0)
                .count();
            (name.clone(), share)
        })
        .collect();

    Json(VisibilityReport {
        total_prompts: outcomes.len(),
        answered,
        brand_share,
        competitor_share,
        prompts: outcomes,
    })
    .into_response()
}

// --- Prompt suggestions ---

#[derive(Debug, Deserialize)]
pub struct SuggestBody {
    topic: String,
}

/// Suggest prompts for the session's brand, with a canned fallback when
/// the chat vendor can't help.
pub async fn suggest_prompts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SuggestBody>,
) -> Response {
    let session = match session_id(&headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let topic = body.topic.trim();
    if topic.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "topic is required");
    }

    let brand = match state
        .store
        .with_session(session, |workspace| workspace.brand.name.clone())
        .await
    {
        Ok(b) => b,
        Err(e) => return store_error(e),
    };

    let Some(provider) = &state.chat else {
        return canned_reply(&brand, topic);
    };

    match provider.suggest_prompts(&brand, topic).await {
        Ok(ideas) if !ideas.is_empty() => {
            Json(json!({ "suggestions": ideas, "fallback": false })).into_response()
        }
        Ok(_) => canned_reply(&brand, topic),
        Err(e) => {
            warn!(error = %e, "Prompt suggestion failed");
            canned_reply(&brand, topic)
        }
    }
}

fn canned_reply(brand: &str, topic: &str) -> Response {
    Json(json!({ "suggestions": canned_suggestions(brand, topic), "fallback": true }))
        .into_response()
}

fn canned_suggestions(brand: &str, topic: &str) -> Vec<PromptIdea> {
    vec![
        PromptIdea {
            prompt: format!("best {topic} to buy online"),
            rationale: "Transactional phrasing with strong purchase intent".to_string(),
        },
        PromptIdea {
            prompt: format!("where should I buy {topic}"),
            rationale: "Store-recommendation question assistants answer with names".to_string(),
        },
        PromptIdea {
            prompt: format!("is {brand} good for {topic}"),
            rationale: "Direct brand question to track sentiment".to_string(),
        },
        PromptIdea {
            prompt: format!("{topic} compared across shops"),
            rationale: "Comparison phrasing that surfaces competitor lists".to_string(),
        },
        PromptIdea {
            prompt: format!("beginner guide to {topic}"),
            rationale: "Informational phrasing that AI overviews cite heavily".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serper_client::{AnswerBox, OrganicResult};
    use sightline_common::RefDifficulty;

    #[test]
    fn organic_results_become_tagged_references() {
        let serp = SerpResponse {
            organic: vec![
                OrganicResult {
                    title: "Monstera".to_string(),
                    link: "https://en.wikipedia.org/wiki/Monstera".to_string(),
                    snippet: "A genus".to_string(),
                    position: 1,
                },
                OrganicResult {
                    title: "Care thread".to_string(),
                    link: "https://www.reddit.com/r/houseplants/1".to_string(),
                    snippet: "".to_string(),
                    position: 0,
                },
            ],
            ..Default::default()
        };

        let snapshot = snapshot_from_serp("monstera care", serp);
        assert_eq!(snapshot.organic.len(), 2);
        assert_eq!(snapshot.organic[0].source, "en.wikipedia.org");
        assert_eq!(snapshot.organic[0].difficulty, RefDifficulty::Hard);
        assert_eq!(snapshot.organic[1].difficulty, RefDifficulty::Easy);
        // missing position falls back to list order
        assert_eq!(snapshot.organic[1].position, 2);
    }

    #[test]
    fn answer_box_promotes_into_overview_slot() {
        let serp = SerpResponse {
            answer_box: Some(AnswerBox {
                title: "Watering".to_string(),
                answer: "About once a week.".to_string(),
                snippet: "".to_string(),
                link: "https://thespruce.com/watering".to_string(),
            }),
            ..Default::default()
        };

        let snapshot = snapshot_from_serp("how often to water", serp);
        let overview = snapshot.ai_overview.unwrap();
        assert_eq!(overview.text, "About once a week.");
        assert_eq!(overview.references.len(), 1);
        assert_eq!(overview.references[0].source, "thespruce.com");
    }

    #[test]
    fn empty_serp_yields_bare_snapshot() {
        let snapshot = snapshot_from_serp("anything", SerpResponse::default());
        assert!(snapshot.ai_overview.is_none());
        assert!(snapshot.organic.is_empty());
        assert!(snapshot.related_questions.is_empty());
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(validate_url("ftp://example.com/file").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("https://example.com/page").is_ok());
    }

    #[test]
    fn canned_suggestions_mention_brand_and_topic() {
        let ideas = canned_suggestions("Verdant & Vine", "pet safe plants");
        assert_eq!(ideas.len(), 5);
        assert!(ideas.iter().any(|i| i.prompt.contains("Verdant & Vine")));
        assert!(ideas.iter().all(|i| !i.prompt.is_empty()));
    }
}
