// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod backup;
pub mod catalog;
pub mod notifications;
pub mod settings;
pub mod staff;
pub mod user;

pub use backup::{Backup, BackupSettings};
pub use catalog::{Category, Order, OrderStatus, Product, ProductStatus};
pub use notifications::{EmailNotifications, SmsNotifications, TelegramNotifications};
pub use settings::StoreSettings;
pub use staff::{Administrator, EmailSender};
pub use user::{Session, User};
