//! A scripted generateContent endpoint.
//!
//! Answers every POST with a canned body (wrapped in the remote API's
//! `candidates` envelope unless raw mode is requested) and records the
//! prompts it was asked.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct FakeGenerator {
    pub prompts: Arc<Mutex<Vec<String>>>,
    reply: Arc<Mutex<Reply>>,
}

#[derive(Clone)]
enum Reply {
    /// Wrap the text in a well-formed candidates envelope.
    Text(String),
    /// Send this JSON body verbatim.
    Raw(Value),
    /// Answer with an HTTP error status.
    Status(u16),
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        FakeGenerator {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Text(text.to_string()))),
        }
    }

    pub fn replying_raw(body: Value) -> Self {
        FakeGenerator {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Raw(body))),
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        FakeGenerator {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Status(status))),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    /// Bind to port 0 and return the base URL to hand to `with_base_url`.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/models/:call", axum::routing::post(generate))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn generate(
    State(fake): State<FakeGenerator>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if let Some(prompt) = body["contents"][0]["parts"][0]["text"].as_str() {
        fake.prompts.lock().unwrap().push(prompt.to_string());
    }

    let reply = fake.reply.lock().unwrap().clone();
    match reply {
        Reply::Text(text) => (
            StatusCode::OK,
            Json(json!({
                "candidates": [
                    { "content": { "parts": [ { "text": text } ] } }
                ]
            })),
        )
            .into_response(),
        Reply::Raw(value) => (StatusCode::OK, Json(value)).into_response(),
        Reply::Status(status) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({ "error": "scripted failure" })),
        )
            .into_response(),
    }
}
