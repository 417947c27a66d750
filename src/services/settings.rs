// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store settings operations.
//!
//! A bare GET on the panel endpoint returns the full flat settings object;
//! updates go back one section at a time as `{"type": ..., ...}` posts.

use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::StoreSettings;
use crate::services::auth::{validate_email, validate_password};
use crate::services::client::{ApiClient, StatusResponse};

/// Typed wrapper over the settings side of the panel endpoint.
#[derive(Clone)]
pub struct SettingsService {
    client: ApiClient,
}

impl SettingsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The current settings.
    pub async fn fetch(&self) -> Result<StoreSettings> {
        self.client.get_json(&[]).await
    }

    /// Change the account email address.
    pub async fn update_account_email(&self, email: &str) -> Result<String> {
        validate_email(email)?;
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "account",
                "email": email.trim(),
            }))
            .await?;
        ack.into_message()
    }

    /// Change the account password. The current password must be supplied
    /// and the new one confirmed, mirroring the backend's own checks.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<String> {
        if old_password.is_empty() {
            return Err(AppError::Validation(
                "enter the current password".to_string(),
            ));
        }
        validate_password(new_password)?;
        if new_password != confirm_password {
            return Err(AppError::Validation("passwords do not match".to_string()));
        }

        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "password",
                "old_password": old_password,
                "new_password": new_password,
            }))
            .await?;
        ack.into_message()
    }

    /// Switch the storefront sign-in method.
    pub async fn update_auth_method(&self, auth_method: &str) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "auth",
                "auth_method": auth_method,
            }))
            .await?;
        ack.into_message()
    }

    /// Enable or disable sitemap generation.
    pub async fn update_sitemap(&self, enabled: bool) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "sitemap",
                "sitemap_enabled": enabled,
            }))
            .await?;
        ack.into_message()
    }

    /// Set image compression quality and watermark position.
    pub async fn update_images(&self, quality: u32, watermark_position: &str) -> Result<String> {
        if !(1..=100).contains(&quality) {
            return Err(AppError::Validation(
                "image quality must be between 1 and 100".to_string(),
            ));
        }

        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "images",
                "quality": quality,
                "watermark_position": watermark_position,
            }))
            .await?;
        ack.into_message()
    }

    /// Update panel presentation settings.
    pub async fn update_panel(
        &self,
        items_per_page: u32,
        timezone: &str,
        notify_orders: bool,
        notify_messages: bool,
    ) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "panel",
                "items_per_page": items_per_page,
                "timezone": timezone,
                "notify_orders": notify_orders,
                "notify_messages": notify_messages,
            }))
            .await?;
        ack.into_message()
    }

    /// Unlink the connected Telegram account.
    pub async fn unlink_telegram(&self) -> Result<String> {
        let ack: StatusResponse = self.client.delete_json(&[("action", "telegram")]).await?;
        ack.into_message()
    }
}
