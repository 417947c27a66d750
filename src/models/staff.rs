//! Panel staff: administrator accounts and outgoing email senders.

use serde::{Deserialize, Serialize};

/// Administrator account with panel access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administrator {
    /// Account ID
    pub id: u64,
    /// Sign-in login
    pub login: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Last sign-in timestamp (ISO 8601), empty if the account never signed in
    #[serde(default)]
    pub last_login: String,
}

/// Configured SMTP sender identity for outgoing store mail.
///
/// Listings omit the SMTP credentials; those are write-only and travel in
/// the save payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSender {
    /// Sender ID
    pub id: u64,
    /// Display name shown in the From header
    pub name: String,
    /// From address
    pub email: String,
    /// SMTP relay hostname
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// Whether this sender is used when no explicit sender is picked
    #[serde(default)]
    pub is_default: bool,
}
