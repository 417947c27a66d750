// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the client library and the CLI.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Local form validation failed; nothing was sent over the network.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The server answered with a `{success: false}` envelope or an error
    /// status carrying a message.
    #[error("API error: {0}")]
    Api(String),

    /// The request was rejected as unauthorized even after the single
    /// permitted refresh-and-retry cycle.
    #[error("Request unauthorized")]
    Unauthorized,

    /// The refresh exchange failed (or no refresh token was stored). The
    /// persisted session has been cleared; the user must log in again.
    #[error("Session expired, log in again")]
    SessionExpired,

    /// Transport-level failure talking to the storefront API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Session or catalog file could not be read/written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors that mean the stored credentials are no longer
    /// usable and the user has to authenticate from scratch.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized | AppError::SessionExpired)
    }

    /// True for failures that never reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Storage(_) | AppError::NotFound(_)
        )
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
