// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line interface.
//!
//! One subcommand per panel area. Network commands build the full [`App`];
//! catalog commands stay local and only need the configuration.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::App;

pub mod auth;
pub mod backups;
pub mod catalog;
pub mod notify;
pub mod settings;
pub mod staff;

/// Administrative client for a hosted storefront.
#[derive(Debug, Parser)]
#[command(
    name = "storefront-admin",
    version,
    about = "Manage a hosted storefront from the command line",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login(auth::LoginArgs),
    /// Create an account and sign straight into it
    Register(auth::RegisterArgs),
    /// Drop the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Store settings
    #[command(subcommand)]
    Settings(settings::SettingsCommand),
    /// Notification channels
    #[command(subcommand)]
    Notify(notify::NotifyCommand),
    /// Administrator accounts
    #[command(subcommand)]
    Admins(staff::AdminsCommand),
    /// Outgoing email senders
    #[command(subcommand)]
    Senders(staff::SendersCommand),
    /// Backups and the backup schedule
    #[command(subcommand)]
    Backups(backups::BackupsCommand),
    /// Copy store data into another account
    CopyData(backups::CopyDataArgs),
    /// Locally staged catalog
    #[command(subcommand)]
    Catalog(catalog::CatalogCommand),
}

/// Load configuration and dispatch the chosen command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    match cli.command {
        Commands::Login(args) => auth::login(App::new(config)?, args).await,
        Commands::Register(args) => auth::register(App::new(config)?, args).await,
        Commands::Logout => auth::logout(App::new(config)?),
        Commands::Whoami => auth::whoami(&config),
        Commands::Settings(command) => settings::run(App::new(config)?, command).await,
        Commands::Notify(command) => notify::run(App::new(config)?, command).await,
        Commands::Admins(command) => staff::run_admins(App::new(config)?, command).await,
        Commands::Senders(command) => staff::run_senders(App::new(config)?, command).await,
        Commands::Backups(command) => backups::run(App::new(config)?, command).await,
        Commands::CopyData(args) => backups::copy_data(App::new(config)?, args).await,
        Commands::Catalog(command) => catalog::run(&config, command),
    }
}
