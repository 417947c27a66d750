// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account authentication against the auth endpoint.
//!
//! Handles:
//! - Sign-in and registration
//! - Local credential validation before any request is sent
//! - Single-flight access token refresh shared by all API calls
//! - Session persistence through [`SessionStore`]

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::{Session, User};
use crate::session::SessionStore;

/// Shortest password the backend accepts.
pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

// ─── Wire types ──────────────────────────────────────────────────────────────

/// Request body for the auth endpoint. Every operation goes to the same URL
/// and is dispatched on `action`.
#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

impl<'a> AuthRequest<'a> {
    fn login(email: &'a str, password: &'a str) -> Self {
        Self {
            action: "login",
            email: Some(email),
            password: Some(password),
            phone: None,
            refresh_token: None,
        }
    }

    fn register(email: &'a str, password: &'a str, phone: Option<&'a str>) -> Self {
        Self {
            action: "register",
            email: Some(email),
            password: Some(password),
            phone,
            refresh_token: None,
        }
    }

    fn refresh(refresh_token: &'a str) -> Self {
        Self {
            action: "refresh",
            email: None,
            password: None,
            phone: None,
            refresh_token: Some(refresh_token),
        }
    }
}

/// Response envelope from the auth endpoint.
///
/// Failures carry `success: false` and a human-readable message, usually
/// with a non-2xx status. The token fields are only present on success.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<User>,
}

impl AuthResponse {
    fn into_session(self) -> Result<Session> {
        match (self.access_token, self.refresh_token, self.user) {
            (Some(access_token), Some(refresh_token), Some(user)) => Ok(Session {
                access_token,
                refresh_token,
                user,
            }),
            _ => Err(AppError::Api(
                "auth endpoint reported success without a complete token set".to_string(),
            )),
        }
    }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Talks to the auth endpoint and owns the stored session.
///
/// Clones share the session store and the refresh lock, so any number of
/// handles can issue requests while refreshes stay single-flight.
#[derive(Clone)]
pub struct AuthService {
    http: reqwest::Client,
    auth_url: String,
    store: SessionStore,
    /// Serializes token refreshes. The lock queue is fair, so callers that
    /// piled up behind a refresh resume in arrival order.
    refresh_lock: Arc<Mutex<()>>,
}

impl AuthService {
    pub fn new(http: reqwest::Client, auth_url: impl Into<String>, store: SessionStore) -> Self {
        Self {
            http,
            auth_url: auth_url.into(),
            store,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The session store this service reads and writes.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    // ─── Sign-in and registration ────────────────────────────────────────────

    /// Sign in with email and password. On success the full session
    /// (token pair + profile) is persisted before returning.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        validate_email(email)?;
        validate_password(password)?;

        let session = self
            .request_session(&AuthRequest::login(email.trim(), password))
            .await?;
        self.store.save(&session)?;
        tracing::info!(user_id = session.user.id, "Signed in");
        Ok(session)
    }

    /// Register a new account and sign straight into it.
    ///
    /// An empty phone is treated as absent and left out of the request.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
        phone: Option<&str>,
    ) -> Result<Session> {
        validate_email(email)?;
        validate_password(password)?;
        if password != confirm_password {
            return Err(AppError::Validation("passwords do not match".to_string()));
        }

        let phone = phone.map(str::trim).filter(|p| !p.is_empty());
        let session = self
            .request_session(&AuthRequest::register(email.trim(), password, phone))
            .await?;
        self.store.save(&session)?;
        tracing::info!(user_id = session.user.id, "Registered and signed in");
        Ok(session)
    }

    /// Drop the stored session. Purely local; the backend keeps no
    /// server-side session to end.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    // ─── Token refresh ───────────────────────────────────────────────────────

    /// Obtain a usable access token after a request was rejected as
    /// unauthorized. `stale_token` is the token the rejected request carried.
    ///
    /// Any number of requests can fail at once; this method collapses them
    /// into a single refresh exchange:
    /// 1. Take the refresh lock (concurrent callers queue here)
    /// 2. Re-check the store: if the token changed while waiting, another
    ///    caller already refreshed and the new token is returned as-is
    /// 3. Otherwise exchange the stored refresh token for a new session
    /// 4. On any refresh failure, clear the whole session so every queued
    ///    caller fails fast instead of retrying a dead token
    pub async fn refresh_after_unauthorized(&self, stale_token: Option<&str>) -> Result<String> {
        // ─────────────────────────────────────────────────────────────
        // STEP 1: Acquire the refresh lock
        // ─────────────────────────────────────────────────────────────
        let _guard = self.refresh_lock.lock().await;

        // ─────────────────────────────────────────────────────────────
        // STEP 2: Re-check the store after acquiring the lock
        // ─────────────────────────────────────────────────────────────
        // Another caller may have completed the exchange while this one
        // waited. Its token is newer than the one we were rejected with.
        if let Some(current) = self.store.access_token()? {
            if stale_token != Some(current.as_str()) {
                return Ok(current);
            }
        }

        // ─────────────────────────────────────────────────────────────
        // STEP 3: Exchange the refresh token
        // ─────────────────────────────────────────────────────────────
        let Some(refresh_token) = self.store.refresh_token()? else {
            // Nothing to exchange. Drop whatever partial session is left
            // without bothering the endpoint.
            self.store.clear()?;
            return Err(AppError::SessionExpired);
        };

        match self.request_session(&AuthRequest::refresh(&refresh_token)).await {
            Ok(session) => {
                // ─────────────────────────────────────────────────────
                // STEP 4a: Persist the new session
                // ─────────────────────────────────────────────────────
                self.store.save(&session)?;
                tracing::info!(user_id = session.user.id, "Access token refreshed");
                Ok(session.access_token)
            }
            Err(e) => {
                // ─────────────────────────────────────────────────────
                // STEP 4b: Refresh failed, the session is unrecoverable
                // ─────────────────────────────────────────────────────
                // Clearing here also settles every caller still queued on
                // the lock: they find no tokens and fail with
                // SessionExpired instead of hammering the endpoint.
                self.store.clear()?;
                tracing::warn!(error = %e, "Token refresh failed, session cleared");
                Err(AppError::SessionExpired)
            }
        }
    }

    // ─── Request plumbing ────────────────────────────────────────────────────

    /// POST `request` to the auth endpoint and unwrap the session from the
    /// response envelope. The message from the envelope wins over the HTTP
    /// status when both indicate failure.
    async fn request_session(&self, request: &AuthRequest<'_>) -> Result<Session> {
        let response = self
            .http
            .post(&self.auth_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let envelope: AuthResponse = serde_json::from_str(&body)
            .map_err(|_| AppError::Api(format!("HTTP {}: {}", status, body)))?;

        if !status.is_success() || !envelope.success {
            let message = if envelope.message.is_empty() {
                format!("HTTP {}", status)
            } else {
                envelope.message
            };
            return Err(AppError::Api(message));
        }

        envelope.into_session()
    }
}

// ─── Local validation ────────────────────────────────────────────────────────

/// Reject obviously malformed email addresses before any request is sent.
pub(crate) fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Enforce the backend's minimum password length locally.
pub(crate) fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_CHARS
        )));
    }
    Ok(())
}
