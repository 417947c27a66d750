// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Storefront-Admin: manage a hosted storefront from the command line
//!
//! This crate is an API client for the storefront builder's per-account
//! function endpoints: authentication with transparent token refresh, store
//! settings, notification channels, staff, backups, and a locally staged
//! product catalog.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

use std::time::Duration;

use config::Config;
use error::Result;
use services::{
    ApiClient, AuthService, BackupsService, NotificationsService, SettingsService, StaffService,
};
use session::SessionStore;

/// All service handles, wired to one HTTP client and one session store.
pub struct App {
    pub config: Config,
    pub auth: AuthService,
    pub settings: SettingsService,
    pub notifications: NotificationsService,
    pub staff: StaffService,
    pub backups: BackupsService,
}

impl App {
    /// Wire up every service from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let http = build_http_client(&config)?;
        let store = SessionStore::new(config.session_path.clone());
        let auth = AuthService::new(http.clone(), config.auth_url.clone(), store);
        let client = ApiClient::new(http, config.api_url.clone(), auth.clone());

        Ok(Self {
            auth,
            settings: SettingsService::new(client.clone()),
            notifications: NotificationsService::new(client.clone()),
            staff: StaffService::new(client.clone()),
            backups: BackupsService::new(client),
            config,
        })
    }
}

/// Shared HTTP client. The timeout covers the whole request, so a stalled
/// refresh exchange cannot hang queued API calls forever.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?)
}
