// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrator and email sender commands.

use clap::Subcommand;

use crate::error::{AppError, Result};
use crate::services::SenderDraft;
use crate::App;

#[derive(Debug, Subcommand)]
pub enum AdminsCommand {
    /// List administrator accounts
    List,
    /// Add an administrator
    Add {
        /// Sign-in login
        #[arg(long)]
        login: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Password for the new account
        #[arg(long)]
        password: String,
    },
    /// Edit an administrator (unset flags keep current values)
    Edit {
        #[arg(long)]
        id: u64,

        /// New sign-in login
        #[arg(long)]
        login: Option<String>,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New password; omit to keep the current one
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete an administrator
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SendersCommand {
    /// List configured SMTP senders
    List,
    /// Add a sender
    Add {
        /// Display name shown in the From header
        #[arg(long)]
        name: String,

        /// From address
        #[arg(long)]
        email: String,

        /// SMTP relay hostname
        #[arg(long)]
        smtp_host: String,

        /// SMTP relay port
        #[arg(long, default_value_t = 587)]
        smtp_port: u16,

        /// SMTP username
        #[arg(long, default_value = "")]
        smtp_user: String,

        /// SMTP password
        #[arg(long, default_value = "")]
        smtp_password: String,

        /// Transport encryption: tls, ssl or none
        #[arg(long, default_value = "tls")]
        encryption: String,
    },
    /// Edit a sender (unset flags keep current values)
    Edit {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        smtp_host: Option<String>,

        #[arg(long)]
        smtp_port: Option<u16>,

        /// New SMTP username; omit to keep the stored one
        #[arg(long)]
        smtp_user: Option<String>,

        /// New SMTP password; omit to keep the stored one
        #[arg(long)]
        smtp_password: Option<String>,

        /// Transport encryption: tls, ssl or none
        #[arg(long)]
        encryption: Option<String>,
    },
    /// Delete a sender
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Make a sender the default for outgoing mail
    SetDefault {
        #[arg(long)]
        id: u64,
    },
}

pub async fn run_admins(app: App, command: AdminsCommand) -> Result<()> {
    match command {
        AdminsCommand::List => {
            let admins = app.staff.administrators().await?;
            if admins.is_empty() {
                println!("No administrators");
                return Ok(());
            }
            println!("{:>4}  {:<20} {:<24} last login", "id", "login", "name");
            for admin in admins {
                let last_login = if admin.last_login.is_empty() {
                    "-"
                } else {
                    &admin.last_login
                };
                println!(
                    "{:>4}  {:<20} {:<24} {}",
                    admin.id, admin.login, admin.full_name, last_login
                );
            }
        }
        AdminsCommand::Add {
            login,
            name,
            password,
        } => {
            let message = app
                .staff
                .save_administrator(None, &login, &name, &password)
                .await?;
            println!("{}", message);
        }
        AdminsCommand::Edit {
            id,
            login,
            name,
            password,
        } => {
            // Fill unset fields from the current entry, like the edit form
            // in the panel does.
            let current = app
                .staff
                .administrators()
                .await?
                .into_iter()
                .find(|a| a.id == id)
                .ok_or_else(|| AppError::NotFound(format!("administrator {}", id)))?;
            let message = app
                .staff
                .save_administrator(
                    Some(id),
                    &login.unwrap_or(current.login),
                    &name.unwrap_or(current.full_name),
                    &password.unwrap_or_default(),
                )
                .await?;
            println!("{}", message);
        }
        AdminsCommand::Delete { id } => {
            println!("{}", app.staff.delete_administrator(id).await?);
        }
    }
    Ok(())
}

pub async fn run_senders(app: App, command: SendersCommand) -> Result<()> {
    match command {
        SendersCommand::List => {
            let senders = app.staff.senders().await?;
            if senders.is_empty() {
                println!("No senders configured");
                return Ok(());
            }
            println!(
                "{:>4}  {:<20} {:<28} {:<24} {:>5}  default",
                "id", "name", "email", "smtp host", "port"
            );
            for sender in senders {
                println!(
                    "{:>4}  {:<20} {:<28} {:<24} {:>5}  {}",
                    sender.id,
                    sender.name,
                    sender.email,
                    sender.smtp_host,
                    sender.smtp_port,
                    if sender.is_default { "yes" } else { "" }
                );
            }
        }
        SendersCommand::Add {
            name,
            email,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_password,
            encryption,
        } => {
            let draft = SenderDraft {
                name,
                email,
                smtp_host,
                smtp_port,
                smtp_user,
                smtp_password,
                encryption,
            };
            println!("{}", app.staff.save_sender(None, &draft).await?);
        }
        SendersCommand::Edit {
            id,
            name,
            email,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_password,
            encryption,
        } => {
            let current = app
                .staff
                .senders()
                .await?
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::NotFound(format!("sender {}", id)))?;
            let draft = SenderDraft {
                name: name.unwrap_or(current.name),
                email: email.unwrap_or(current.email),
                smtp_host: smtp_host.unwrap_or(current.smtp_host),
                smtp_port: smtp_port.unwrap_or(current.smtp_port),
                // Credentials are never echoed back by the backend; empty
                // means "keep what is stored".
                smtp_user: smtp_user.unwrap_or_default(),
                smtp_password: smtp_password.unwrap_or_default(),
                encryption: encryption.unwrap_or_else(|| "tls".to_string()),
            };
            println!("{}", app.staff.save_sender(Some(id), &draft).await?);
        }
        SendersCommand::Delete { id } => {
            println!("{}", app.staff.delete_sender(id).await?);
        }
        SendersCommand::SetDefault { id } => {
            println!("{}", app.staff.set_default_sender(id).await?);
        }
    }
    Ok(())
}
