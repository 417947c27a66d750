// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storefront-Admin CLI
//!
//! Administers a hosted storefront through its per-account function
//! endpoints: authentication, settings, notifications, staff, backups and
//! a locally staged catalog.

use clap::Parser;
use storefront_admin::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    if let Err(e) = cli::run(cli).await {
        eprintln!("error: {}", e);
        if e.is_auth_error() {
            eprintln!("the stored session is gone; sign in again with `storefront-admin login`");
        }
        std::process::exit(1);
    }
}

/// Initialize logging on stderr so command output stays clean on stdout.
/// `--log-json` switches to structured JSON lines for log shippers.
fn init_logging(verbose: bool, json: bool) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(
            if verbose {
                "storefront_admin=debug"
            } else {
                "storefront_admin=info"
            }
            .parse()
            .unwrap(),
        )
        .add_directive("warn".parse().unwrap());

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(format).init();
    } else {
        let format = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(format).init();
    }
}
