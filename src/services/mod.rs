// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and business logic.

pub mod auth;
pub mod backups;
pub mod client;
pub mod notifications;
pub mod settings;
pub mod staff;

pub use auth::AuthService;
pub use backups::{BackupsService, DataCopyRequest};
pub use client::{ApiClient, StatusResponse, AUTH_TOKEN_HEADER};
pub use notifications::NotificationsService;
pub use settings::SettingsService;
pub use staff::{SenderDraft, StaffService};
