use anyhow::Result;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use initiative_core::{Chatbot, InitiativeRecord, Statistics, DEFAULT_TOP_N};

/// Shared handle to the response engine. The engine is immutable apart
/// from its reply RNG; a corpus reload replaces the whole value behind
/// the lock instead of mutating the index in place.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<Chatbot>>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    DEFAULT_TOP_N
}

#[derive(Serialize)]
pub struct SearchHit {
    pub title: String,
    pub status: Option<String>,
    pub result: Option<String>,
    pub score: f32,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

pub fn build_app(corpus: Vec<InitiativeRecord>) -> Result<Router> {
    let engine = Chatbot::new(corpus)?;
    let state = AppState {
        engine: Arc::new(RwLock::new(engine)),
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any.
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/chat", post(chat_handler))
        .route("/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .route("/initiatives", get(initiatives_handler))
        .with_state(state)
        .layer(cors);
    Ok(app)
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.engine.write().get_response(&request.message);
    Json(ChatResponse { reply })
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let k = params.k.clamp(1, 50);
    let engine = state.engine.read();
    let results = engine
        .ranked(&params.q, k)
        .into_iter()
        .map(|(score, rec)| SearchHit {
            title: rec.title.clone(),
            status: rec.status.clone(),
            result: rec.result.clone(),
            score,
        })
        .collect();
    Json(SearchResponse {
        query: params.q,
        results,
    })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<Statistics> {
    Json(state.engine.read().statistics().clone())
}

pub async fn initiatives_handler(State(state): State<AppState>) -> Json<Vec<InitiativeRecord>> {
    Json(state.engine.read().corpus().to_vec())
}
