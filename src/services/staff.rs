// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Panel staff operations: administrators and email senders.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::{Administrator, EmailSender};
use crate::services::client::{ApiClient, StatusResponse};

#[derive(Debug, Deserialize)]
struct AdministratorsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    administrators: Vec<Administrator>,
}

#[derive(Debug, Deserialize)]
struct SendersResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    senders: Vec<EmailSender>,
}

/// SMTP sender as submitted to the backend. Credentials are write-only;
/// listings never echo them back.
#[derive(Debug, Clone, Serialize)]
pub struct SenderDraft {
    /// Display name shown in the From header
    pub name: String,
    /// From address
    pub email: String,
    /// SMTP relay hostname
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP username, empty to keep the stored one
    pub smtp_user: String,
    /// SMTP password, empty to keep the stored one
    pub smtp_password: String,
    /// Transport encryption: "tls", "ssl" or "none"
    pub encryption: String,
}

/// Typed wrapper over the staff side of the panel endpoint.
#[derive(Clone)]
pub struct StaffService {
    client: ApiClient,
}

impl StaffService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ─── Administrators ──────────────────────────────────────────────────────

    /// All administrator accounts.
    pub async fn administrators(&self) -> Result<Vec<Administrator>> {
        let response: AdministratorsResponse =
            self.client.get_json(&[("type", "administrators")]).await?;
        if !response.success {
            return Err(AppError::Api("could not load administrators".to_string()));
        }
        Ok(response.administrators)
    }

    /// Create an administrator (`id` is None) or update an existing one.
    ///
    /// A password is required when creating; when editing, an empty password
    /// keeps the current one.
    pub async fn save_administrator(
        &self,
        id: Option<u64>,
        login: &str,
        full_name: &str,
        password: &str,
    ) -> Result<String> {
        if login.trim().is_empty() {
            return Err(AppError::Validation("login is required".to_string()));
        }
        if id.is_none() && password.is_empty() {
            return Err(AppError::Validation(
                "a new administrator needs a password".to_string(),
            ));
        }

        let mut body = json!({
            "type": if id.is_some() { "edit_administrator" } else { "add_administrator" },
            "login": login,
            "full_name": full_name,
            "password": password,
        });
        if let (Some(id), serde_json::Value::Object(map)) = (id, &mut body) {
            map.insert("id".to_string(), id.into());
        }

        let ack: StatusResponse = self.client.post_json(&body).await?;
        ack.into_message()
    }

    /// Delete an administrator account.
    pub async fn delete_administrator(&self, id: u64) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "delete_administrator",
                "id": id,
            }))
            .await?;
        ack.into_message()
    }

    // ─── Email senders ───────────────────────────────────────────────────────

    /// All configured SMTP senders.
    pub async fn senders(&self) -> Result<Vec<EmailSender>> {
        let response: SendersResponse =
            self.client.get_json(&[("type", "email_senders")]).await?;
        if !response.success {
            return Err(AppError::Api("could not load email senders".to_string()));
        }
        Ok(response.senders)
    }

    /// Create a sender (`id` is None) or update an existing one.
    pub async fn save_sender(&self, id: Option<u64>, draft: &SenderDraft) -> Result<String> {
        if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
            return Err(AppError::Validation(
                "sender name and email are required".to_string(),
            ));
        }
        if draft.smtp_host.trim().is_empty() {
            return Err(AppError::Validation("SMTP host is required".to_string()));
        }

        let mut body = serde_json::to_value(draft)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot encode sender: {}", e)))?;
        if let serde_json::Value::Object(ref mut map) = body {
            map.insert(
                "type".to_string(),
                if id.is_some() {
                    "edit_email_sender".into()
                } else {
                    "add_email_sender".into()
                },
            );
            if let Some(id) = id {
                map.insert("id".to_string(), id.into());
            }
        }

        let ack: StatusResponse = self.client.post_json(&body).await?;
        ack.into_message()
    }

    /// Delete a sender.
    pub async fn delete_sender(&self, id: u64) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "delete_email_sender",
                "id": id,
            }))
            .await?;
        ack.into_message()
    }

    /// Make a sender the default for outgoing store mail.
    pub async fn set_default_sender(&self, id: u64) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "set_default_sender",
                "id": id,
            }))
            .await?;
        ack.into_message()
    }
}
