// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in, registration and session inspection commands.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;
use crate::App;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, env = "STOREFRONT_EMAIL")]
    pub email: String,

    /// Account password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Email for the new account
    #[arg(long)]
    pub email: String,

    /// Password, at least 6 characters
    #[arg(long)]
    pub password: String,

    /// Repeat the password
    #[arg(long)]
    pub confirm_password: String,

    /// Optional contact phone
    #[arg(long)]
    pub phone: Option<String>,
}

pub async fn login(app: App, args: LoginArgs) -> Result<()> {
    let session = app.auth.login(&args.email, &args.password).await?;
    println!(
        "Signed in as {} (id {})",
        session.user.email, session.user.id
    );
    Ok(())
}

pub async fn register(app: App, args: RegisterArgs) -> Result<()> {
    let session = app
        .auth
        .register(
            &args.email,
            &args.password,
            &args.confirm_password,
            args.phone.as_deref(),
        )
        .await?;
    println!(
        "Registered {} (id {}) and signed in",
        session.user.email, session.user.id
    );
    Ok(())
}

pub fn logout(app: App) -> Result<()> {
    app.auth.logout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(config: &Config) -> Result<()> {
    let store = SessionStore::new(config.session_path.clone());
    match store.user()? {
        Some(user) => {
            println!("{} (id {})", user.email, user.id);
            if let Some(phone) = user.phone.filter(|p| !p.is_empty()) {
                let state = if user.phone_verified == Some(true) {
                    "verified"
                } else {
                    "unverified"
                };
                println!("phone: {} ({})", phone, state);
            }
        }
        None => println!("Not signed in"),
    }
    Ok(())
}
