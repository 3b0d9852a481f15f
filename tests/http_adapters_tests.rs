//! Tests for the outbound HTTP adapters against a local stub server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};

use storefront::{
    ChatMessage, ChatRole, ChatSession, CompletionService, Conversation, GeminiClient,
    HttpChatTransport, FALLBACK_REPLY, WELCOME_MESSAGE,
};

#[derive(Debug, Clone)]
struct Captured {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn record(State(stub): State<Stub>, uri: Uri, headers: HeaderMap, body: String) -> Response {
    stub.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (stub.status, axum::Json(stub.reply.clone())).into_response()
}

/// Starts a server answering every request with `reply` and returns its
/// address plus the log of requests it received.
async fn spawn_stub(status: StatusCode, reply: Value) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        reply,
        captured: captured.clone(),
    };
    let app = Router::new().fallback(record).with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (addr, captured)
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_gemini_client_sends_prompt_and_reads_first_candidate() {
    let (addr, captured) = spawn_stub(StatusCode::OK, gemini_reply("Try the UltraBook Pro.")).await;
    let client = GeminiClient::new(
        Some("test-key".into()),
        "gemini-1.5-flash",
        format!("http://{addr}"),
    );

    let text = client.generate("Suggest a laptop").await.expect("generate failed");

    assert_eq!(text, "Try the UltraBook Pro.");
    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/v1beta/models/gemini-1.5-flash:generateContent"
    );
    assert_eq!(requests[0].api_key.as_deref(), Some("test-key"));
    assert_eq!(
        requests[0].body,
        json!({ "contents": [{ "parts": [{ "text": "Suggest a laptop" }] }] })
    );
}

#[tokio::test]
async fn test_gemini_client_maps_error_status_to_upstream() {
    let (addr, captured) = spawn_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "code": 429, "message": "quota exceeded" } }),
    )
    .await;
    let client = GeminiClient::new(Some("k".into()), "gemini-1.5-flash", format!("http://{addr}"));

    let err = client.generate("hi").await.unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_gemini_client_treats_blocked_response_as_upstream_error() {
    let (addr, _) = spawn_stub(
        StatusCode::OK,
        json!({ "candidates": [{ "finishReason": "SAFETY", "safetyRatings": [] }] }),
    )
    .await;
    let client = GeminiClient::new(Some("k".into()), "gemini-1.5-flash", format!("http://{addr}"));

    let err = client.generate("hi").await.unwrap_err();

    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_gemini_client_without_key_sends_nothing() {
    let (addr, captured) = spawn_stub(StatusCode::OK, gemini_reply("unused")).await;
    let client = GeminiClient::new(None, "gemini-1.5-flash", format!("http://{addr}"));

    let err = client.generate("hi").await.unwrap_err();

    assert!(err.is_configuration());
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_session_maps_reply_to_bot_message() {
    let (addr, captured) = spawn_stub(
        StatusCode::OK,
        json!({
            "content": "The UltraBook Pro is a great pick.",
            "relatedProducts": [{
                "id": "1",
                "name": "UltraBook Pro",
                "nicheId": "electronics",
                "niche": "Electronics",
                "price": 89999
            }]
        }),
    )
    .await;
    let session = ChatSession::new(Arc::new(HttpChatTransport::new(format!("http://{addr}"))));

    let message = session.process_message("Suggest a laptop").await;

    assert_eq!(message.role(), ChatRole::Bot);
    assert_eq!(message.content(), "The UltraBook Pro is a great pick.");
    assert_eq!(message.related_products().len(), 1);
    assert_eq!(message.related_products()[0].name, "UltraBook Pro");

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests[0].path, "/api/chat");
    assert_eq!(requests[0].body, json!({ "message": "Suggest a laptop" }));
}

#[tokio::test]
async fn test_chat_session_falls_back_on_server_error() {
    let (addr, _) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to process request" }),
    )
    .await;
    let session = ChatSession::new(Arc::new(HttpChatTransport::new(format!("http://{addr}"))));

    assert!(session.request_reply("hello").await.is_err());

    let message = session.process_message("hello").await;
    assert_eq!(message.content(), FALLBACK_REPLY);
    assert!(!message.has_related_products());
}

#[tokio::test]
async fn test_chat_session_falls_back_on_unparseable_reply() {
    let (addr, _) = spawn_stub(StatusCode::OK, json!({ "unexpected": true })).await;
    let session = ChatSession::new(Arc::new(HttpChatTransport::new(format!("http://{addr}"))));

    let message = session.process_message("hello").await;

    assert_eq!(message.content(), FALLBACK_REPLY);
}

#[tokio::test]
async fn test_conversation_keeps_history_in_order() {
    let (addr, _) = spawn_stub(
        StatusCode::OK,
        json!({ "content": "Here you go.", "relatedProducts": [] }),
    )
    .await;
    let session = ChatSession::new(Arc::new(HttpChatTransport::new(format!("http://{addr}"))));
    let mut conversation = Conversation::new(session);

    assert!(conversation.send("   ").await.is_none());
    conversation.send("  show me deals ").await;

    let history: Vec<(ChatRole, &str)> = conversation
        .messages()
        .iter()
        .map(|m: &ChatMessage| (m.role(), m.content()))
        .collect();
    assert_eq!(
        history,
        vec![
            (ChatRole::Bot, WELCOME_MESSAGE),
            (ChatRole::User, "show me deals"),
            (ChatRole::Bot, "Here you go."),
        ]
    );
}
