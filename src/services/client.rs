// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated client for the panel endpoint.
//!
//! Handles:
//! - Attaching the access token to every request
//! - Transparent refresh-and-retry when a request comes back 401
//! - Decoding response envelopes and mapping error statuses

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::services::auth::AuthService;

/// Header the backend reads the access token from.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Minimal mutation response: a `success` flag plus a human-readable message.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl StatusResponse {
    /// The backend's message on success, an [`AppError::Api`] carrying that
    /// message otherwise.
    pub fn into_message(self) -> Result<String> {
        if self.success {
            Ok(self.message)
        } else if self.message.is_empty() {
            Err(AppError::Api("request was rejected".to_string()))
        } else {
            Err(AppError::Api(self.message))
        }
    }
}

/// HTTP client for the panel endpoint.
///
/// All panel resources live behind one URL and are addressed by query
/// parameters and body `type` fields. Every request carries the stored
/// access token; a 401 triggers the shared single-flight refresh and the
/// request is then retried exactly once with the fresh token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthService,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, auth: AuthService) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            auth,
        }
    }

    /// The auth service backing this client.
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    // ─── Typed requests ──────────────────────────────────────────────────────

    /// GET with query parameters, decoding a JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T> {
        let response = self.send_with_auth(Method::GET, query, None).await?;
        Self::decode(response).await
    }

    /// POST a JSON body, decoding a JSON response.
    pub async fn post_json<T: DeserializeOwned>(&self, body: &serde_json::Value) -> Result<T> {
        let response = self.send_with_auth(Method::POST, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// DELETE with query parameters, decoding a JSON response.
    pub async fn delete_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T> {
        let response = self.send_with_auth(Method::DELETE, query, None).await?;
        Self::decode(response).await
    }

    /// GET with query parameters, returning the raw response body.
    pub async fn get_bytes(&self, query: &[(&str, &str)]) -> Result<Vec<u8>> {
        let response = self.send_with_auth(Method::GET, query, None).await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ─── Authenticated send with refresh-and-retry ───────────────────────────

    /// Issue the request with the stored access token. On 401, run (or join)
    /// the single-flight refresh and retry exactly once with the token it
    /// produced. A second 401 is returned to the caller as-is.
    async fn send_with_auth(
        &self,
        method: Method,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let token = self.auth.store().access_token()?;
        let response = self
            .issue(method.clone(), query, body, token.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(%method, "Request rejected as unauthorized, refreshing token");
        let fresh = self.auth.refresh_after_unauthorized(token.as_deref()).await?;
        self.issue(method, query, body, Some(&fresh)).await
    }

    /// Build and send one request. Requests are rebuilt from parts rather
    /// than cloned so the retry path reuses the exact same inputs.
    async fn issue(
        &self,
        method: Method,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
        token: Option<&str>,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .http
            .request(method, &self.base_url)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    // ─── Response handling ───────────────────────────────────────────────────

    /// Map error statuses left after the retry. A 401 here means the refresh
    /// ran and the backend still rejected the fresh token.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(AppError::Api(format!("HTTP {}: {}", status, body)));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}
