// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test harness: an in-process storefront backend.
//!
//! Serves the auth endpoint and the panel endpoint on an ephemeral port, so
//! integration tests exercise the real request, refresh and retry paths over
//! plain HTTP instead of stubbing the client.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use storefront_admin::models::{Session, User};
use storefront_admin::services::{ApiClient, AuthService, AUTH_TOKEN_HEADER};
use storefront_admin::session::SessionStore;

/// Credentials the mock auth endpoint accepts for `login`.
#[allow(dead_code)]
pub const ACCOUNT_EMAIL: &str = "owner@example.com";
#[allow(dead_code)]
pub const ACCOUNT_PASSWORD: &str = "hunter2";

/// Scriptable state behind both mock endpoints.
pub struct BackendState {
    /// Access tokens the panel currently accepts.
    valid_tokens: Mutex<HashSet<String>>,
    /// Token pair handed out by the next login, register or refresh.
    issue_pair: Mutex<(String, String)>,
    /// Whether refresh exchanges succeed.
    refresh_ok: AtomicBool,
    /// Whether issued access tokens are marked valid on the panel.
    accept_issued: AtomicBool,
    /// Artificial delay inside the refresh handler, to widen races.
    refresh_delay_ms: AtomicU64,
    /// Refresh exchanges answered, rejected ones included.
    refresh_calls: AtomicUsize,
    /// Refresh tokens presented to the auth endpoint, in arrival order.
    refresh_tokens_seen: Mutex<Vec<String>>,
    /// `X-Auth-Token` values presented to the panel, in arrival order.
    panel_tokens: Mutex<Vec<Option<String>>>,
    /// Bodies of panel POST requests, in arrival order.
    panel_posts: Mutex<Vec<Value>>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            valid_tokens: Mutex::new(HashSet::new()),
            issue_pair: Mutex::new(("access-1".to_string(), "refresh-1".to_string())),
            refresh_ok: AtomicBool::new(true),
            accept_issued: AtomicBool::new(true),
            refresh_delay_ms: AtomicU64::new(0),
            refresh_calls: AtomicUsize::new(0),
            refresh_tokens_seen: Mutex::new(Vec::new()),
            panel_tokens: Mutex::new(Vec::new()),
            panel_posts: Mutex::new(Vec::new()),
        }
    }
}

/// Mock storefront backend bound to an ephemeral local port.
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
}

#[allow(dead_code)]
impl MockBackend {
    /// Bind and start serving. The server task lives until the runtime drops.
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());
        let router = Router::new()
            .route("/auth", post(handle_auth))
            .route("/panel", any(handle_panel))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self { addr, state }
    }

    pub fn auth_url(&self) -> String {
        format!("http://{}/auth", self.addr)
    }

    pub fn panel_url(&self) -> String {
        format!("http://{}/panel", self.addr)
    }

    /// Auth service wired to this backend.
    pub fn auth_service(&self, store: SessionStore) -> AuthService {
        AuthService::new(reqwest::Client::new(), self.auth_url(), store)
    }

    /// Panel client wired to this backend through `store`'s session.
    pub fn api_client(&self, store: SessionStore) -> ApiClient {
        let http = reqwest::Client::new();
        let auth = AuthService::new(http.clone(), self.auth_url(), store);
        ApiClient::new(http, self.panel_url(), auth)
    }

    // ─── Scripting knobs ─────────────────────────────────────────────────────

    /// Mark `token` as accepted by the panel.
    pub fn accept_token(&self, token: &str) {
        lock(&self.state.valid_tokens).insert(token.to_string());
    }

    /// Stop accepting `token` on the panel.
    pub fn revoke_token(&self, token: &str) {
        lock(&self.state.valid_tokens).remove(token);
    }

    /// Set the token pair the next login/register/refresh hands out.
    pub fn set_issue_pair(&self, access: &str, refresh: &str) {
        *lock(&self.state.issue_pair) = (access.to_string(), refresh.to_string());
    }

    /// Make every refresh exchange fail with a rejection envelope.
    pub fn fail_refreshes(&self) {
        self.state.refresh_ok.store(false, Ordering::SeqCst);
    }

    /// Hand out refresh pairs without marking them valid on the panel, so
    /// the retried request is rejected again.
    pub fn reject_issued_tokens(&self) {
        self.state.accept_issued.store(false, Ordering::SeqCst);
    }

    /// Hold each refresh exchange open for `delay`, so concurrent callers
    /// pile up behind the client's refresh lock.
    pub fn set_refresh_delay(&self, delay: Duration) {
        self.state
            .refresh_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    // ─── Recorded traffic ────────────────────────────────────────────────────

    /// Refresh exchanges answered so far, rejected ones included.
    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    /// Refresh tokens the auth endpoint was handed, in arrival order.
    pub fn refresh_tokens_seen(&self) -> Vec<String> {
        lock(&self.state.refresh_tokens_seen).clone()
    }

    /// `X-Auth-Token` values the panel saw, in arrival order.
    pub fn panel_tokens(&self) -> Vec<Option<String>> {
        lock(&self.state.panel_tokens).clone()
    }

    /// Bodies of panel POST requests, in arrival order.
    pub fn panel_posts(&self) -> Vec<Value> {
        lock(&self.state.panel_posts).clone()
    }
}

/// In-memory store seeded with a signed-in session.
#[allow(dead_code)]
pub fn seeded_store(access: &str, refresh: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    store
        .save(&Session {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            user: sample_user(),
        })
        .expect("seed session");
    store
}

#[allow(dead_code)]
pub fn sample_user() -> User {
    User {
        id: 7,
        email: ACCOUNT_EMAIL.to_string(),
        phone: Some("+70000000000".to_string()),
        phone_verified: Some(true),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

// ─── Auth endpoint ───────────────────────────────────────────────────────────

async fn handle_auth(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> Response {
    match body["action"].as_str() {
        Some("login") => {
            if body["email"] == json!(ACCOUNT_EMAIL) && body["password"] == json!(ACCOUNT_PASSWORD)
            {
                session_envelope(&state, body["email"].as_str())
            } else {
                rejection(
                    StatusCode::UNAUTHORIZED,
                    "Invalid email or password",
                )
            }
        }
        Some("register") => session_envelope(&state, body["email"].as_str()),
        Some("refresh") => {
            let delay = state.refresh_delay_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            if let Some(token) = body["refresh_token"].as_str() {
                lock(&state.refresh_tokens_seen).push(token.to_string());
            }
            state.refresh_calls.fetch_add(1, Ordering::SeqCst);

            if state.refresh_ok.load(Ordering::SeqCst) {
                session_envelope(&state, None)
            } else {
                rejection(StatusCode::UNAUTHORIZED, "Invalid refresh token")
            }
        }
        _ => rejection(StatusCode::BAD_REQUEST, "Unknown action"),
    }
}

/// Hand out the scripted token pair in a full success envelope.
fn session_envelope(state: &BackendState, email: Option<&str>) -> Response {
    let (access, refresh) = lock(&state.issue_pair).clone();
    if state.accept_issued.load(Ordering::SeqCst) {
        lock(&state.valid_tokens).insert(access.clone());
    }

    let body = json!({
        "success": true,
        "message": "OK",
        "access_token": access,
        "refresh_token": refresh,
        "user": {
            "id": 7,
            "email": email.unwrap_or(ACCOUNT_EMAIL),
            "phone": "+70000000000",
            "phone_verified": true,
        },
    });
    (StatusCode::OK, Json(body)).into_response()
}

fn rejection(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message}))).into_response()
}

// ─── Panel endpoint ──────────────────────────────────────────────────────────

async fn handle_panel(
    State(state): State<Arc<BackendState>>,
    Query(params): Query<HashMap<String, String>>,
    method: axum::http::Method,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Response {
    let token = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    lock(&state.panel_tokens).push(token.clone());

    let authorized = token
        .as_deref()
        .map(|t| lock(&state.valid_tokens).contains(t))
        .unwrap_or(false);
    if !authorized {
        return rejection(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    match method {
        axum::http::Method::GET => panel_get(params),
        axum::http::Method::POST => {
            let Ok(body) = serde_json::from_slice::<Value>(&body) else {
                return rejection(StatusCode::BAD_REQUEST, "Missing body");
            };
            lock(&state.panel_posts).push(body.clone());
            panel_post(body)
        }
        axum::http::Method::DELETE => {
            if params.get("action").map(String::as_str) == Some("telegram") {
                ack("Telegram unlinked")
            } else {
                rejection(StatusCode::BAD_REQUEST, "Unknown action")
            }
        }
        _ => rejection(StatusCode::METHOD_NOT_ALLOWED, "Unsupported method"),
    }
}

fn panel_get(params: HashMap<String, String>) -> Response {
    match params.get("type").map(String::as_str) {
        // A bare GET is the settings read.
        None => (StatusCode::OK, Json(sample_settings())).into_response(),
        Some("administrators") => success(json!({
            "administrators": [
                {"id": 1, "login": "owner", "full_name": "Store Owner", "last_login": "2026-08-20 10:00"},
                {"id": 2, "login": "helper", "full_name": "", "last_login": ""},
            ],
        })),
        Some("email_senders") => success(json!({
            "senders": [
                {"id": 1, "name": "Shop", "email": "shop@example.com",
                 "smtp_host": "smtp.example.com", "smtp_port": 587, "is_default": true},
            ],
        })),
        Some("backups") => success(json!({
            "backups": [
                {"id": 3, "name": "backup_2026-08-21.zip", "size": "1.2 MB",
                 "created_at": "2026-08-21T02:00:00", "type": "auto"},
                {"id": 2, "name": "backup_2026-08-15.zip", "size": "1.1 MB",
                 "created_at": "2026-08-15T14:30:00", "type": "manual"},
            ],
        })),
        Some("backup_settings") => success(json!({
            "auto_backup_enabled": false,
            "backup_frequency": "weekly",
            "backup_retention": "10",
        })),
        Some("email_notifications") => success(json!({
            "email_enabled": true,
            "notify_new_orders": true,
            "notify_low_stock": true,
            "recipient_emails": "owner@example.com",
            "email_subject_prefix": "[store]",
        })),
        Some("sms_notifications") => success(json!({
            "sms_enabled": false,
            "notify_new_orders": true,
            "phone_number": "+70000000000",
            "balance": "150",
        })),
        Some("telegram_notifications") => success(json!({
            "telegram_connected": true,
            "telegram_username": "merchant",
            "bot_username": "store_notify_bot",
            "notify_new_orders": true,
            "notify_new_reviews": true,
        })),
        Some("download_backup") => {
            let archive = format!(
                "archive-{}",
                params.get("id").map(String::as_str).unwrap_or("?")
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/zip")],
                archive.into_bytes(),
            )
                .into_response()
        }
        Some(_) => rejection(StatusCode::BAD_REQUEST, "Unknown resource"),
    }
}

fn panel_post(body: Value) -> Response {
    match body["type"].as_str() {
        Some("create_backup") => ack("Backup started"),
        Some(_) => ack("Saved"),
        None => rejection(StatusCode::BAD_REQUEST, "Missing type"),
    }
}

/// Merge `fields` into a `success: true` envelope.
fn success(fields: Value) -> Response {
    let mut body = json!({"success": true});
    if let (Value::Object(target), Value::Object(extra)) = (&mut body, fields) {
        target.extend(extra);
    }
    (StatusCode::OK, Json(body)).into_response()
}

fn ack(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({"success": true, "message": message})),
    )
        .into_response()
}

fn sample_settings() -> Value {
    json!({
        "login": "owner",
        "email": ACCOUNT_EMAIL,
        "phone": "+70000000000",
        "phone_verified": true,
        "telegram_account": "merchant",
        "telegram_connected": true,
        "domain": "shop.example.com",
        "domain_connected": true,
        "sitemap_enabled": true,
        "image_quality": 85,
        "watermark_position": "4",
        "webp_enabled": true,
        "auth_method": "2",
        "timezone": "Europe/Moscow",
        "items_per_page": 20,
        "notify_orders": true,
        "notify_messages": false,
    })
}
