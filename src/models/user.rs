//! User profile and persisted session.

use serde::{Deserialize, Serialize};

/// Account profile as returned by the auth endpoint.
///
/// Registration responses carry only `id` and `email`; the phone fields
/// appear once the account has been through login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account ID
    pub id: u64,
    /// Login email address
    pub email: String,
    /// Contact phone number, if one was provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the phone number has been confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
}

/// A signed-in session as persisted on disk.
///
/// The serialized form is exactly the session file layout: the two tokens
/// plus the profile snapshot taken at sign-in. All three are written and
/// removed together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived token sent on every authenticated request
    pub access_token: String,
    /// Long-lived token exchanged for a new pair when the access token expires
    pub refresh_token: String,
    /// Profile of the signed-in account
    pub user: User,
}
