// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store settings commands.

use clap::Subcommand;

use crate::error::Result;
use crate::App;

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show all store settings
    Show,
    /// Change the account email
    SetEmail {
        /// New email address
        #[arg(long)]
        email: String,
    },
    /// Change the account password
    SetPassword {
        /// Current password
        #[arg(long)]
        old: String,

        /// New password, at least 6 characters
        #[arg(long)]
        new: String,

        /// Repeat the new password
        #[arg(long)]
        confirm: String,
    },
    /// Switch the storefront sign-in method
    SetAuthMethod {
        /// Method selector as the backend encodes it
        #[arg(long)]
        method: String,
    },
    /// Toggle sitemap generation
    SetSitemap {
        #[arg(long, action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Image processing settings (unset flags keep current values)
    SetImages {
        /// Compression quality, 1 to 100
        #[arg(long)]
        quality: Option<u32>,

        /// Watermark anchor position as the backend encodes it
        #[arg(long)]
        watermark_position: Option<String>,
    },
    /// Panel presentation settings (unset flags keep current values)
    SetPanel {
        /// Rows per page in listings
        #[arg(long)]
        items_per_page: Option<u32>,

        /// IANA timezone for dates in the panel
        #[arg(long)]
        timezone: Option<String>,

        /// Notify about new orders
        #[arg(long)]
        notify_orders: Option<bool>,

        /// Notify about new customer messages
        #[arg(long)]
        notify_messages: Option<bool>,
    },
    /// Unlink the connected Telegram account
    UnlinkTelegram,
}

pub async fn run(app: App, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let s = app.settings.fetch().await?;
            println!("login:              {}", s.login);
            println!("email:              {}", s.email);
            println!(
                "phone:              {} ({})",
                s.phone,
                if s.phone_verified { "verified" } else { "unverified" }
            );
            println!(
                "telegram:           {}",
                if s.telegram_connected {
                    s.telegram_account.as_str()
                } else {
                    "not linked"
                }
            );
            println!(
                "domain:             {}{}",
                if s.domain.is_empty() { "-" } else { &s.domain },
                if s.domain_connected { " (connected)" } else { "" }
            );
            println!("sitemap:            {}", on_off(s.sitemap_enabled));
            println!("image quality:      {}", s.image_quality);
            println!("watermark position: {}", s.watermark_position);
            println!("webp:               {}", on_off(s.webp_enabled));
            println!("auth method:        {}", s.auth_method);
            println!("timezone:           {}", s.timezone);
            println!("items per page:     {}", s.items_per_page);
            println!("notify orders:      {}", on_off(s.notify_orders));
            println!("notify messages:    {}", on_off(s.notify_messages));
        }
        SettingsCommand::SetEmail { email } => {
            println!("{}", app.settings.update_account_email(&email).await?);
        }
        SettingsCommand::SetPassword { old, new, confirm } => {
            println!("{}", app.settings.change_password(&old, &new, &confirm).await?);
        }
        SettingsCommand::SetAuthMethod { method } => {
            println!("{}", app.settings.update_auth_method(&method).await?);
        }
        SettingsCommand::SetSitemap { enabled } => {
            println!("{}", app.settings.update_sitemap(enabled).await?);
        }
        SettingsCommand::SetImages {
            quality,
            watermark_position,
        } => {
            // Unset flags fall back to what the panel currently has.
            let current = app.settings.fetch().await?;
            let quality = quality.unwrap_or(current.image_quality);
            let position = watermark_position.unwrap_or(current.watermark_position);
            println!("{}", app.settings.update_images(quality, &position).await?);
        }
        SettingsCommand::SetPanel {
            items_per_page,
            timezone,
            notify_orders,
            notify_messages,
        } => {
            let current = app.settings.fetch().await?;
            let message = app
                .settings
                .update_panel(
                    items_per_page.unwrap_or(current.items_per_page),
                    &timezone.unwrap_or(current.timezone),
                    notify_orders.unwrap_or(current.notify_orders),
                    notify_messages.unwrap_or(current.notify_messages),
                )
                .await?;
            println!("{}", message);
        }
        SettingsCommand::UnlinkTelegram => {
            println!("{}", app.settings.unlink_telegram().await?);
        }
    }
    Ok(())
}

pub(crate) fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
