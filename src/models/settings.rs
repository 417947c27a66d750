//! Store-wide settings as served by the panel endpoint.

use serde::{Deserialize, Serialize};

/// Flat settings object returned by a bare GET on the panel endpoint.
///
/// Updates go back piecemeal (one section per request), so this struct is
/// read-only; the write payloads live with the settings service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Panel login name
    pub login: String,
    /// Account email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Whether the phone number has been confirmed
    pub phone_verified: bool,
    /// Linked Telegram account name, empty when none is linked
    pub telegram_account: String,
    /// Whether a Telegram account is currently linked
    pub telegram_connected: bool,
    /// Custom storefront domain, empty when unset
    pub domain: String,
    /// Whether the custom domain has finished DNS verification
    pub domain_connected: bool,
    /// Whether a sitemap is generated for the storefront
    pub sitemap_enabled: bool,
    /// JPEG/WebP compression quality, 1 to 100
    pub image_quality: u32,
    /// Watermark anchor position, encoded as a digit string by the backend
    pub watermark_position: String,
    /// Whether uploaded images are recoded to WebP
    pub webp_enabled: bool,
    /// Sign-in method selector, encoded as a digit string by the backend
    pub auth_method: String,
    /// IANA timezone the panel renders dates in
    pub timezone: String,
    /// Rows per page in panel listings
    pub items_per_page: u32,
    /// Notify about new orders
    pub notify_orders: bool,
    /// Notify about new customer messages
    pub notify_messages: bool,
}
