// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backup and data-copy commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::settings::on_off;
use crate::error::Result;
use crate::services::DataCopyRequest;
use crate::App;

#[derive(Debug, Subcommand)]
pub enum BackupsCommand {
    /// List stored backups
    List,
    /// Take a backup now
    Create,
    /// Delete a stored backup
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Download a backup archive
    Download {
        #[arg(long)]
        id: u64,

        /// Output file; defaults to backup_<id>.zip
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Automatic backup schedule
    #[command(subcommand)]
    Schedule(ScheduleCommand),
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// Show the schedule
    Show,
    /// Update the schedule (unset flags keep current values)
    Set {
        /// Master switch for scheduled backups
        #[arg(long)]
        enabled: Option<bool>,

        /// daily, weekly or monthly
        #[arg(long)]
        frequency: Option<String>,

        /// Days to keep backups before rotation
        #[arg(long)]
        retention: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CopyDataArgs {
    /// Login of the account receiving the data
    #[arg(long)]
    pub target_login: String,

    /// Password of the target account
    #[arg(long)]
    pub target_password: String,

    /// Copy the product catalog
    #[arg(long)]
    pub products: bool,

    /// Copy the category tree
    #[arg(long)]
    pub categories: bool,

    /// Copy order history
    #[arg(long)]
    pub orders: bool,

    /// Copy the customer list
    #[arg(long)]
    pub customers: bool,

    /// Copy store settings
    #[arg(long)]
    pub settings: bool,
}

pub async fn run(app: App, command: BackupsCommand) -> Result<()> {
    match command {
        BackupsCommand::List => {
            let backups = app.backups.list().await?;
            if backups.is_empty() {
                println!("No backups stored");
                return Ok(());
            }
            println!("{:>4}  {:<32} {:>10}  {:<20} kind", "id", "name", "size", "created");
            for backup in backups {
                println!(
                    "{:>4}  {:<32} {:>10}  {:<20} {}",
                    backup.id, backup.name, backup.size, backup.created_at, backup.kind
                );
            }
        }
        BackupsCommand::Create => {
            println!("{}", app.backups.create().await?);
        }
        BackupsCommand::Delete { id } => {
            println!("{}", app.backups.delete(id).await?);
        }
        BackupsCommand::Download { id, output } => {
            let dest = output.unwrap_or_else(|| PathBuf::from(format!("backup_{}.zip", id)));
            let bytes = app.backups.download(id, &dest).await?;
            println!("Saved {} bytes to {}", bytes, dest.display());
        }
        BackupsCommand::Schedule(ScheduleCommand::Show) => {
            let schedule = app.backups.settings().await?;
            println!("automatic backups: {}", on_off(schedule.auto_backup_enabled));
            println!("  frequency:       {}", schedule.backup_frequency);
            println!("  retention:       {} days", schedule.backup_retention);
        }
        BackupsCommand::Schedule(ScheduleCommand::Set {
            enabled,
            frequency,
            retention,
        }) => {
            let mut schedule = app.backups.settings().await?;
            if let Some(v) = enabled {
                schedule.auto_backup_enabled = v;
            }
            if let Some(v) = frequency {
                schedule.backup_frequency = v;
            }
            if let Some(v) = retention {
                schedule.backup_retention = v;
            }
            println!("{}", app.backups.save_settings(&schedule).await?);
        }
    }
    Ok(())
}

pub async fn copy_data(app: App, args: CopyDataArgs) -> Result<()> {
    let request = DataCopyRequest {
        target_login: args.target_login,
        target_password: args.target_password,
        copy_products: args.products,
        copy_categories: args.categories,
        copy_orders: args.orders,
        copy_customers: args.customers,
        copy_settings: args.settings,
    };
    println!("{}", app.backups.copy_to_account(&request).await?);
    Ok(())
}
