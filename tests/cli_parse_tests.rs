// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for the command-line surface.

use clap::{CommandFactory, Parser};
use storefront_admin::cli::catalog::{CatalogCommand, ProductsCommand};
use storefront_admin::cli::settings::SettingsCommand;
use storefront_admin::cli::{Cli, Commands};
use storefront_admin::models::ProductStatus;

#[test]
fn test_command_tree_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn test_login_flags_parse() {
    let cli = Cli::try_parse_from([
        "storefront-admin",
        "login",
        "--email",
        "owner@example.com",
        "--password",
        "secret1",
    ])
    .unwrap();

    match cli.command {
        Commands::Login(args) => {
            assert_eq!(args.email, "owner@example.com");
            assert_eq!(args.password, "secret1");
        }
        other => panic!("expected login, parsed {:?}", other),
    }
}

#[test]
fn test_global_flags_work_on_either_side_of_the_subcommand() {
    let cli = Cli::try_parse_from(["storefront-admin", "--verbose", "logout"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Logout));

    let cli = Cli::try_parse_from(["storefront-admin", "whoami", "--log-json"]).unwrap();
    assert!(cli.log_json);
    assert!(matches!(cli.command, Commands::Whoami));
}

#[test]
fn test_sitemap_toggle_takes_an_explicit_value() {
    let cli = Cli::try_parse_from([
        "storefront-admin",
        "settings",
        "set-sitemap",
        "--enabled",
        "false",
    ])
    .unwrap();

    match cli.command {
        Commands::Settings(SettingsCommand::SetSitemap { enabled }) => assert!(!enabled),
        other => panic!("expected set-sitemap, parsed {:?}", other),
    }

    // The value is required, not implied.
    assert!(Cli::try_parse_from(["storefront-admin", "settings", "set-sitemap"]).is_err());
}

#[test]
fn test_product_add_fills_in_defaults() {
    let cli = Cli::try_parse_from([
        "storefront-admin",
        "catalog",
        "products",
        "add",
        "--name",
        "Mug",
        "--article",
        "MG-1",
        "--price",
        "9.90",
    ])
    .unwrap();

    match cli.command {
        Commands::Catalog(CatalogCommand::Products(ProductsCommand::Add {
            name,
            stock,
            category,
            status,
            old_price,
            ..
        })) => {
            assert_eq!(name, "Mug");
            assert_eq!(stock, 0);
            assert_eq!(category, "");
            assert_eq!(status, ProductStatus::Draft);
            assert!(old_price.is_none());
        }
        other => panic!("expected products add, parsed {:?}", other),
    }
}

#[test]
fn test_product_status_rejects_unknown_values() {
    let result = Cli::try_parse_from([
        "storefront-admin",
        "catalog",
        "products",
        "list",
        "--status",
        "archived",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_copy_data_flags_are_presence_booleans() {
    let cli = Cli::try_parse_from([
        "storefront-admin",
        "copy-data",
        "--target-login",
        "other-store",
        "--target-password",
        "secret1",
        "--products",
        "--categories",
    ])
    .unwrap();

    match cli.command {
        Commands::CopyData(args) => {
            assert_eq!(args.target_login, "other-store");
            assert!(args.products);
            assert!(args.categories);
            assert!(!args.orders);
            assert!(!args.settings);
        }
        other => panic!("expected copy-data, parsed {:?}", other),
    }
}
