// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification channel operations.
//!
//! Each channel (email, SMS, Telegram) is loaded with a typed GET and saved
//! back as one `{"type": ..., ...}` post carrying the whole channel.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{EmailNotifications, SmsNotifications, TelegramNotifications};
use crate::services::client::{ApiClient, StatusResponse};

/// Load response: the `success` flag beside the flattened channel settings.
#[derive(Debug, Deserialize)]
struct ChannelResponse<T> {
    #[serde(default)]
    success: bool,
    #[serde(flatten)]
    settings: T,
}

/// Typed wrapper over the notification side of the panel endpoint.
#[derive(Clone)]
pub struct NotificationsService {
    client: ApiClient,
}

impl NotificationsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Email channel settings.
    pub async fn email(&self) -> Result<EmailNotifications> {
        self.load("email_notifications").await
    }

    /// Save the email channel.
    pub async fn save_email(&self, settings: &EmailNotifications) -> Result<String> {
        self.save("email_notifications", settings).await
    }

    /// SMS channel settings, including the gateway balance.
    pub async fn sms(&self) -> Result<SmsNotifications> {
        self.load("sms_notifications").await
    }

    /// Save the SMS channel. The balance field is read-only and not sent.
    pub async fn save_sms(&self, settings: &SmsNotifications) -> Result<String> {
        self.save("sms_notifications", settings).await
    }

    /// Telegram channel settings, including bot link state.
    pub async fn telegram(&self) -> Result<TelegramNotifications> {
        self.load("telegram_notifications").await
    }

    /// Save the Telegram channel flags. Link state is read-only and not sent.
    pub async fn save_telegram(&self, settings: &TelegramNotifications) -> Result<String> {
        self.save("telegram_notifications", settings).await
    }

    /// Unlink the Telegram chat from the notification bot.
    pub async fn disconnect_telegram(&self) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&serde_json::json!({
                "type": "telegram_disconnect_notifications",
            }))
            .await?;
        ack.into_message()
    }

    async fn load<T: DeserializeOwned>(&self, kind: &str) -> Result<T> {
        let response: ChannelResponse<T> = self.client.get_json(&[("type", kind)]).await?;
        if !response.success {
            return Err(AppError::Api(format!("could not load {}", kind)));
        }
        Ok(response.settings)
    }

    async fn save(&self, kind: &str, settings: &impl Serialize) -> Result<String> {
        let ack: StatusResponse = self.client.post_json(&tagged(kind, settings)?).await?;
        ack.into_message()
    }
}

/// Serialize `settings` and tag the object with the dispatch `type` field.
fn tagged(kind: &str, settings: &impl Serialize) -> Result<serde_json::Value> {
    let mut body = serde_json::to_value(settings)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot encode settings: {}", e)))?;
    if let serde_json::Value::Object(ref mut map) = body {
        map.insert("type".to_string(), kind.into());
    }
    Ok(body)
}
