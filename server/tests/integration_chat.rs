use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use initiative_core::InitiativeRecord;
use serde_json::{json, Value};
use tower::ServiceExt;

fn tiny_corpus() -> Vec<InitiativeRecord> {
    vec![
        InitiativeRecord {
            title: "For responsible business".into(),
            status: Some("Voted".into()),
            result: Some("Rejected".into()),
            ..Default::default()
        },
        InitiativeRecord {
            title: "For a ban on financing war material".into(),
            status: Some("Voted".into()),
            result: Some("Rejected".into()),
            ..Default::default()
        },
    ]
}

fn app() -> Router {
    initiative_server::build_app(tiny_corpus()).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_chat(app: Router, message: &str) -> (StatusCode, Value) {
    let req = Request::post("/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": message }).to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn chat_answers_an_entity_question() {
    let (status, body) = post_chat(app(), "tell me about responsible business").await;
    assert_eq!(status, StatusCode::OK);
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("For responsible business"));
    assert!(reply.contains("Voted"));
    assert!(reply.contains("Rejected"));
}

#[tokio::test]
async fn chat_always_replies_even_to_an_empty_message() {
    let (status, body) = post_chat(app(), "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["reply"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn search_returns_scored_hits() {
    let (status, body) = get(app(), "/search?q=war%20material&k=5").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(
        results[0]["title"].as_str().unwrap(),
        "For a ban on financing war material"
    );
    assert!(results[0]["score"].as_f64().unwrap() > 0.1);
}

#[tokio::test]
async fn stats_reports_the_corpus_totals() {
    let (status, body) = get(app(), "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"].as_u64().unwrap(), 2);
    assert_eq!(body["by_status"]["Voted"].as_u64().unwrap(), 2);
}

#[tokio::test]
async fn initiatives_lists_every_record() {
    let (status, body) = get(app(), "/initiatives").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_is_ok() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
