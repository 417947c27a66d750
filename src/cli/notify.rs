// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification channel commands.
//!
//! `set` subcommands fetch the channel first and only override the flags
//! given on the command line, so a single switch can be flipped without
//! restating the rest.

use clap::{Args, Subcommand};

use crate::cli::settings::on_off;
use crate::error::Result;
use crate::App;

#[derive(Debug, Subcommand)]
pub enum NotifyCommand {
    /// Email channel
    #[command(subcommand)]
    Email(EmailCommand),
    /// SMS channel
    #[command(subcommand)]
    Sms(SmsCommand),
    /// Telegram channel
    #[command(subcommand)]
    Telegram(TelegramCommand),
}

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Show the email channel settings
    Show,
    /// Update the email channel (unset flags keep current values)
    Set(EmailSetArgs),
}

#[derive(Debug, Args)]
pub struct EmailSetArgs {
    /// Master switch for the channel
    #[arg(long)]
    pub enabled: Option<bool>,

    /// Notify about new orders
    #[arg(long)]
    pub new_orders: Option<bool>,

    /// Notify when an order changes status
    #[arg(long)]
    pub status_change: Option<bool>,

    /// Notify about new customer messages
    #[arg(long)]
    pub new_messages: Option<bool>,

    /// Notify when product stock runs low
    #[arg(long)]
    pub low_stock: Option<bool>,

    /// Notify about new product reviews
    #[arg(long)]
    pub new_reviews: Option<bool>,

    /// Notify about received payments
    #[arg(long)]
    pub payments: Option<bool>,

    /// Comma-separated recipient addresses
    #[arg(long)]
    pub recipients: Option<String>,

    /// Prefix prepended to notification subjects
    #[arg(long)]
    pub subject_prefix: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SmsCommand {
    /// Show the SMS channel settings and gateway balance
    Show,
    /// Update the SMS channel (unset flags keep current values)
    Set(SmsSetArgs),
}

#[derive(Debug, Args)]
pub struct SmsSetArgs {
    /// Master switch for the channel
    #[arg(long)]
    pub enabled: Option<bool>,

    /// Notify about new orders
    #[arg(long)]
    pub new_orders: Option<bool>,

    /// Notify when an order changes status
    #[arg(long)]
    pub status_change: Option<bool>,

    /// Notify about new customer messages
    #[arg(long)]
    pub new_messages: Option<bool>,

    /// Notify when product stock runs low
    #[arg(long)]
    pub low_stock: Option<bool>,

    /// Recipient phone number
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum TelegramCommand {
    /// Show the Telegram channel settings and link state
    Show,
    /// Update the Telegram channel flags (unset flags keep current values)
    Set(TelegramSetArgs),
    /// Unlink the Telegram chat from the notification bot
    Disconnect,
}

#[derive(Debug, Args)]
pub struct TelegramSetArgs {
    /// Notify about new orders
    #[arg(long)]
    pub new_orders: Option<bool>,

    /// Notify when an order changes status
    #[arg(long)]
    pub status_change: Option<bool>,

    /// Notify about new customer messages
    #[arg(long)]
    pub new_messages: Option<bool>,

    /// Notify when product stock runs low
    #[arg(long)]
    pub low_stock: Option<bool>,

    /// Notify about new product reviews
    #[arg(long)]
    pub new_reviews: Option<bool>,
}

pub async fn run(app: App, command: NotifyCommand) -> Result<()> {
    match command {
        NotifyCommand::Email(EmailCommand::Show) => {
            let s = app.notifications.email().await?;
            println!("email notifications: {}", on_off(s.email_enabled));
            println!("  new orders:        {}", on_off(s.notify_new_orders));
            println!("  status changes:    {}", on_off(s.notify_status_change));
            println!("  new messages:      {}", on_off(s.notify_new_messages));
            println!("  low stock:         {}", on_off(s.notify_low_stock));
            println!("  new reviews:       {}", on_off(s.notify_new_reviews));
            println!("  payments:          {}", on_off(s.notify_payments));
            println!("  recipients:        {}", s.recipient_emails);
            println!("  subject prefix:    {}", s.email_subject_prefix);
        }
        NotifyCommand::Email(EmailCommand::Set(args)) => {
            let mut s = app.notifications.email().await?;
            if let Some(v) = args.enabled {
                s.email_enabled = v;
            }
            if let Some(v) = args.new_orders {
                s.notify_new_orders = v;
            }
            if let Some(v) = args.status_change {
                s.notify_status_change = v;
            }
            if let Some(v) = args.new_messages {
                s.notify_new_messages = v;
            }
            if let Some(v) = args.low_stock {
                s.notify_low_stock = v;
            }
            if let Some(v) = args.new_reviews {
                s.notify_new_reviews = v;
            }
            if let Some(v) = args.payments {
                s.notify_payments = v;
            }
            if let Some(v) = args.recipients {
                s.recipient_emails = v;
            }
            if let Some(v) = args.subject_prefix {
                s.email_subject_prefix = v;
            }
            println!("{}", app.notifications.save_email(&s).await?);
        }
        NotifyCommand::Sms(SmsCommand::Show) => {
            let s = app.notifications.sms().await?;
            println!("sms notifications: {}", on_off(s.sms_enabled));
            println!("  new orders:      {}", on_off(s.notify_new_orders));
            println!("  status changes:  {}", on_off(s.notify_status_change));
            println!("  new messages:    {}", on_off(s.notify_new_messages));
            println!("  low stock:       {}", on_off(s.notify_low_stock));
            println!("  phone:           {}", s.phone_number);
            println!("  balance:         {}", s.balance);
        }
        NotifyCommand::Sms(SmsCommand::Set(args)) => {
            let mut s = app.notifications.sms().await?;
            if let Some(v) = args.enabled {
                s.sms_enabled = v;
            }
            if let Some(v) = args.new_orders {
                s.notify_new_orders = v;
            }
            if let Some(v) = args.status_change {
                s.notify_status_change = v;
            }
            if let Some(v) = args.new_messages {
                s.notify_new_messages = v;
            }
            if let Some(v) = args.low_stock {
                s.notify_low_stock = v;
            }
            if let Some(v) = args.phone {
                s.phone_number = v;
            }
            println!("{}", app.notifications.save_sms(&s).await?);
        }
        NotifyCommand::Telegram(TelegramCommand::Show) => {
            let s = app.notifications.telegram().await?;
            if s.telegram_connected {
                println!("linked to: @{}", s.telegram_username);
            } else {
                println!("not linked (message @{} to link)", s.bot_username);
            }
            println!("  new orders:     {}", on_off(s.notify_new_orders));
            println!("  status changes: {}", on_off(s.notify_status_change));
            println!("  new messages:   {}", on_off(s.notify_new_messages));
            println!("  low stock:      {}", on_off(s.notify_low_stock));
            println!("  new reviews:    {}", on_off(s.notify_new_reviews));
        }
        NotifyCommand::Telegram(TelegramCommand::Set(args)) => {
            let mut s = app.notifications.telegram().await?;
            if let Some(v) = args.new_orders {
                s.notify_new_orders = v;
            }
            if let Some(v) = args.status_change {
                s.notify_status_change = v;
            }
            if let Some(v) = args.new_messages {
                s.notify_new_messages = v;
            }
            if let Some(v) = args.low_stock {
                s.notify_low_stock = v;
            }
            if let Some(v) = args.new_reviews {
                s.notify_new_reviews = v;
            }
            println!("{}", app.notifications.save_telegram(&s).await?);
        }
        NotifyCommand::Telegram(TelegramCommand::Disconnect) => {
            println!("{}", app.notifications.disconnect_telegram().await?);
        }
    }
    Ok(())
}
