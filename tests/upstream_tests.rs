//! reqwest adapters against throwaway local upstreams.

mod support;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use minireader::adapter::outbound::google_handwriting::GoogleHandwriting;
use minireader::adapter::outbound::http::build_client;
use minireader::adapter::outbound::jotoba::JotobaClient;
use minireader::adapter::outbound::kanjiapi::{KanjiDetail, KanjiWords, KanjiapiClient};
use minireader::domain::{InkPayload, Point, Query, Source};
use minireader::error::UpstreamCause;
use minireader::port::outbound::dictionary::DictionarySource;
use minireader::port::outbound::handwriting::HandwritingRecognizer;
use parking_lot::Mutex;
use serde_json::{json, Value};

type Captured = Arc<Mutex<Vec<Value>>>;

/// `(Origin, Referer, body)` of each recognizer request.
type SeenRequests = Arc<Mutex<Vec<(Option<String>, Option<String>, Value)>>>;

fn client() -> reqwest::Client {
    build_client(
        Duration::from_millis(500),
        Duration::from_millis(500),
        "minireader-tests",
    )
}

fn query(s: &str) -> Query {
    Query::parse(s).unwrap()
}

#[tokio::test]
async fn jotoba_posts_english_word_search() {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route(
            "/api/search/words",
            post(|State(seen): State<Captured>, Json(body): Json<Value>| async move {
                seen.lock().push(body);
                Json(json!({ "words": [] }))
            }),
        )
        .with_state(captured.clone());
    let addr = support::server::spawn(app).await;

    let jotoba = JotobaClient::new(client(), format!("http://{addr}/api/search/words"));
    let raw = jotoba.fetch(&query("猫")).await.unwrap();

    assert_eq!(raw, json!({ "words": [] }));
    assert_eq!(
        captured.lock().as_slice(),
        &[json!({ "query": "猫", "language": "English", "no_english": false })]
    );
}

#[tokio::test]
async fn error_status_is_classified() {
    let app = Router::new().route(
        "/api/search/words",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let addr = support::server::spawn(app).await;

    let jotoba = JotobaClient::new(client(), format!("http://{addr}/api/search/words"));
    let err = jotoba.fetch(&query("猫")).await.unwrap_err();

    assert_eq!(err.upstream, Source::Jotoba);
    assert_eq!(err.cause, UpstreamCause::Status(503));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let app = Router::new().route("/api/search/words", post(|| async { "<html>" }));
    let addr = support::server::spawn(app).await;

    let jotoba = JotobaClient::new(client(), format!("http://{addr}/api/search/words"));
    let err = jotoba.fetch(&query("猫")).await.unwrap_err();

    assert!(matches!(err.cause, UpstreamCause::Decode(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let app = Router::new().route(
        "/api/search/words",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "words": [] }))
        }),
    );
    let addr = support::server::spawn(app).await;

    let http = build_client(
        Duration::from_millis(100),
        Duration::from_millis(100),
        "minireader-tests",
    );
    let jotoba = JotobaClient::new(http, format!("http://{addr}/api/search/words"));
    let err = jotoba.fetch(&query("猫")).await.unwrap_err();

    assert_eq!(err.cause, UpstreamCause::Timeout);
}

#[tokio::test]
async fn refused_connection_is_a_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let jotoba = JotobaClient::new(client(), format!("http://{addr}/api/search/words"));
    let err = jotoba.fetch(&query("猫")).await.unwrap_err();

    assert!(matches!(err.cause, UpstreamCause::Network(_)));
}

#[tokio::test]
async fn kanjiapi_sources_look_up_leading_character() {
    let app = Router::new()
        .route(
            "/v1/words/:kanji",
            get(|Path(kanji): Path<String>| async move { Json(json!([{ "words_for": kanji }])) }),
        )
        .route(
            "/v1/kanji/:kanji",
            get(|Path(kanji): Path<String>| async move { Json(json!({ "kanji": kanji })) }),
        );
    let addr = support::server::spawn(app).await;

    let kanjiapi = Arc::new(KanjiapiClient::new(client(), &format!("http://{addr}/v1")).unwrap());
    let words = KanjiWords(kanjiapi.clone());
    let detail = KanjiDetail(kanjiapi);

    assert_eq!(
        words.fetch(&query("猫舌")).await.unwrap(),
        json!([{ "words_for": "猫" }])
    );
    assert_eq!(
        detail.fetch(&query("猫")).await.unwrap(),
        json!({ "kanji": "猫" })
    );
}

#[tokio::test]
async fn recognizer_sends_translate_headers_and_relays_reply() {
    let captured: SeenRequests = Arc::default();
    let app = Router::new()
        .route(
            "/inputtools/request",
            post(
                |State(seen): State<SeenRequests>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    seen.lock().push((header("origin"), header("referer"), body));
                    (StatusCode::IM_A_TEAPOT, r#"["FAILED","teapot"]"#)
                },
            ),
        )
        .with_state(captured.clone());
    let addr = support::server::spawn(app).await;

    let recognizer = GoogleHandwriting::new(client(), format!("http://{addr}/inputtools/request"));
    let payload = InkPayload::from_points(
        "tests",
        &[vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]],
        300,
        300,
    )
    .unwrap();
    let reply = recognizer.recognize(&payload).await.unwrap();

    assert_eq!(reply.status, 418);
    assert_eq!(reply.body, r#"["FAILED","teapot"]"#);

    let seen = captured.lock();
    let (origin, referer, body) = &seen[0];
    assert_eq!(origin.as_deref(), Some("https://translate.google.com"));
    assert_eq!(referer.as_deref(), Some("https://translate.google.com/"));
    assert_eq!(body["requests"][0]["language"], "ja");
    assert_eq!(
        body["requests"][0]["ink"],
        json!([[[1, 3], [2, 4], [0, 0]]])
    );
    assert_eq!(
        body["requests"][0]["writing_guide"],
        json!({ "writing_area_width": 300, "writing_area_height": 300 })
    );
}
