#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use discord_lookup::config::Config;
use discord_lookup::discord::DiscordClient;
use discord_lookup::state::AppState;

pub const TEST_TOKEN: &str = "test-bot-token";
pub const TEST_CDN: &str = "https://cdn.discordapp.com";

/// A canned response served by [`FakeDiscord`].
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: value.to_string(),
            headers: vec![("content-type", "application/json".to_string())],
            delay: None,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
            delay: None,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap();
        let mut response = (status, self.body).into_response();
        for (name, value) in self.headers {
            response
                .headers_mut()
                .insert(name, HeaderValue::from_str(&value).unwrap());
        }
        response
    }
}

/// A request as seen by the fake API.
#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub user_id: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
}

struct Upstream {
    user: Reply,
    profile: Reply,
    user_hits: AtomicUsize,
    profile_hits: AtomicUsize,
    seen: Mutex<Vec<SeenRequest>>,
}

impl Upstream {
    fn record(&self, user_id: String, headers: &HeaderMap) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.seen.lock().unwrap().push(SeenRequest {
            user_id,
            authorization: header("authorization"),
            content_type: header("content-type"),
            cache_control: header("cache-control"),
        });
    }
}

async fn reply(reply: Reply) -> Response {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    reply.into_response()
}

async fn get_user(
    State(upstream): State<Arc<Upstream>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    upstream.user_hits.fetch_add(1, Ordering::SeqCst);
    upstream.record(user_id, &headers);
    reply(upstream.user.clone()).await
}

async fn get_profile(
    State(upstream): State<Arc<Upstream>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    upstream.profile_hits.fetch_add(1, Ordering::SeqCst);
    upstream.record(user_id, &headers);
    reply(upstream.profile.clone()).await
}

/// Fake Discord REST API bound to a random local port. Each instance is
/// isolated, so tests can run in parallel.
pub struct FakeDiscord {
    pub api_base: String,
    upstream: Arc<Upstream>,
}

impl FakeDiscord {
    pub async fn spawn(user: Reply, profile: Reply) -> Self {
        let upstream = Arc::new(Upstream {
            user,
            profile,
            user_hits: AtomicUsize::new(0),
            profile_hits: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v10/users/{user_id}", get(get_user))
            .route("/api/v10/users/{user_id}/profile", get(get_profile))
            .with_state(Arc::clone(&upstream));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_base: format!("http://127.0.0.1:{}/api/v10", addr.port()),
            upstream,
        }
    }

    pub fn user_hits(&self) -> usize {
        self.upstream.user_hits.load(Ordering::SeqCst)
    }

    pub fn profile_hits(&self) -> usize {
        self.upstream.profile_hits.load(Ordering::SeqCst)
    }

    pub fn total_hits(&self) -> usize {
        self.user_hits() + self.profile_hits()
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.upstream.seen.lock().unwrap().clone()
    }

    pub fn config(&self) -> Config {
        Config {
            api_base: self.api_base.clone(),
            cdn_base: TEST_CDN.to_string(),
            ..Config::default()
        }
        .with_bot_token(TEST_TOKEN)
    }

    pub fn client(&self) -> DiscordClient {
        DiscordClient::new(&self.config()).unwrap()
    }

    pub fn state(&self) -> AppState {
        AppState::from_config(&self.config()).unwrap()
    }
}

/// The primary record used by most tests.
pub fn ana() -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "username": "ana",
        "global_name": null,
        "discriminator": "0",
        "avatar": "abc123",
        "banner": null,
        "public_flags": 0
    })
}

pub fn profile_with_bio(bio: &str) -> serde_json::Value {
    serde_json::json!({
        "user": { "id": "1", "username": "ana" },
        "user_profile": { "bio": bio }
    })
}
