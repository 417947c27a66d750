//! Notification channel settings.
//!
//! Each channel is loaded and saved as one unit. Fields the backend fills
//! in but never accepts back (connection state, balances) are marked
//! `skip_serializing` so a round-tripped struct serializes to exactly the
//! accepted save payload.

use serde::{Deserialize, Serialize};

/// Email notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailNotifications {
    /// Master switch for the channel
    pub email_enabled: bool,
    /// Notify about new orders
    pub notify_new_orders: bool,
    /// Notify when an order changes status
    pub notify_status_change: bool,
    /// Notify about new customer messages
    pub notify_new_messages: bool,
    /// Notify when product stock runs low
    pub notify_low_stock: bool,
    /// Notify about new product reviews
    pub notify_new_reviews: bool,
    /// Notify about received payments
    pub notify_payments: bool,
    /// Comma-separated recipient addresses
    pub recipient_emails: String,
    /// Prefix prepended to every notification subject
    pub email_subject_prefix: String,
}

/// SMS notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsNotifications {
    /// Master switch for the channel
    pub sms_enabled: bool,
    /// Notify about new orders
    pub notify_new_orders: bool,
    /// Notify when an order changes status
    pub notify_status_change: bool,
    /// Notify about new customer messages
    pub notify_new_messages: bool,
    /// Notify when product stock runs low
    pub notify_low_stock: bool,
    /// Recipient phone number
    pub phone_number: String,
    /// Remaining prepaid SMS balance, reported by the gateway
    #[serde(skip_serializing)]
    pub balance: String,
}

/// Telegram notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramNotifications {
    /// Whether a Telegram chat is linked to the bot
    #[serde(skip_serializing)]
    pub telegram_connected: bool,
    /// Linked Telegram username, empty when none
    #[serde(skip_serializing)]
    pub telegram_username: String,
    /// Bot the account should message to link up
    #[serde(skip_serializing)]
    pub bot_username: String,
    /// Notify about new orders
    pub notify_new_orders: bool,
    /// Notify when an order changes status
    pub notify_status_change: bool,
    /// Notify about new customer messages
    pub notify_new_messages: bool,
    /// Notify when product stock runs low
    pub notify_low_stock: bool,
    /// Notify about new product reviews
    pub notify_new_reviews: bool,
}
