// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backup operations and account-to-account data copying.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::{Backup, BackupSettings};
use crate::services::client::{ApiClient, StatusResponse};

#[derive(Debug, Deserialize)]
struct BackupsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    backups: Vec<Backup>,
}

#[derive(Debug, Deserialize)]
struct BackupSettingsResponse {
    #[serde(default)]
    success: bool,
    #[serde(flatten)]
    settings: BackupSettings,
}

/// What to copy into another account, and the credentials proving access
/// to it.
#[derive(Debug, Clone, Serialize)]
pub struct DataCopyRequest {
    /// Login of the account receiving the data
    pub target_login: String,
    /// Password of the target account
    pub target_password: String,
    /// Copy the product catalog
    pub copy_products: bool,
    /// Copy the category tree
    pub copy_categories: bool,
    /// Copy order history
    pub copy_orders: bool,
    /// Copy the customer list
    pub copy_customers: bool,
    /// Copy store settings
    pub copy_settings: bool,
}

impl DataCopyRequest {
    fn selects_anything(&self) -> bool {
        self.copy_products
            || self.copy_categories
            || self.copy_orders
            || self.copy_customers
            || self.copy_settings
    }
}

/// Typed wrapper over the backup side of the panel endpoint.
#[derive(Clone)]
pub struct BackupsService {
    client: ApiClient,
}

impl BackupsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All stored backups, newest first as the backend returns them.
    pub async fn list(&self) -> Result<Vec<Backup>> {
        let response: BackupsResponse = self.client.get_json(&[("type", "backups")]).await?;
        if !response.success {
            return Err(AppError::Api("could not load backups".to_string()));
        }
        Ok(response.backups)
    }

    /// The automatic backup schedule.
    pub async fn settings(&self) -> Result<BackupSettings> {
        let response: BackupSettingsResponse =
            self.client.get_json(&[("type", "backup_settings")]).await?;
        if !response.success {
            return Err(AppError::Api("could not load backup settings".to_string()));
        }
        Ok(response.settings)
    }

    /// Replace the automatic backup schedule.
    pub async fn save_settings(&self, settings: &BackupSettings) -> Result<String> {
        let mut body = serde_json::to_value(settings)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot encode settings: {}", e)))?;
        if let serde_json::Value::Object(ref mut map) = body {
            map.insert("type".to_string(), "backup_settings".into());
        }

        let ack: StatusResponse = self.client.post_json(&body).await?;
        ack.into_message()
    }

    /// Take a backup now.
    pub async fn create(&self) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({"type": "create_backup"}))
            .await?;
        ack.into_message()
    }

    /// Delete a stored backup.
    pub async fn delete(&self, id: u64) -> Result<String> {
        let ack: StatusResponse = self
            .client
            .post_json(&json!({
                "type": "delete_backup",
                "id": id,
            }))
            .await?;
        ack.into_message()
    }

    /// Download a backup archive to `dest`. Returns the number of bytes
    /// written.
    pub async fn download(&self, id: u64, dest: &Path) -> Result<u64> {
        let id_param = id.to_string();
        let bytes = self
            .client
            .get_bytes(&[("type", "download_backup"), ("id", &id_param)])
            .await?;

        tokio::fs::write(dest, &bytes).await.map_err(|e| {
            AppError::Storage(format!("cannot write backup to {}: {}", dest.display(), e))
        })?;
        tracing::info!(id, bytes = bytes.len(), dest = %dest.display(), "Backup downloaded");
        Ok(bytes.len() as u64)
    }

    /// Copy the selected data into another account.
    pub async fn copy_to_account(&self, request: &DataCopyRequest) -> Result<String> {
        if request.target_login.trim().is_empty() || request.target_password.trim().is_empty() {
            return Err(AppError::Validation(
                "target account login and password are required".to_string(),
            ));
        }
        if !request.selects_anything() {
            return Err(AppError::Validation(
                "select at least one kind of data to copy".to_string(),
            ));
        }

        let mut body = serde_json::to_value(request)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot encode request: {}", e)))?;
        if let serde_json::Value::Object(ref mut map) = body {
            map.insert("type".to_string(), "copy_data".into());
        }

        let ack: StatusResponse = self.client.post_json(&body).await?;
        ack.into_message()
    }
}
