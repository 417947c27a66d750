// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for the staff, backup and data-copy services over the wire.

use storefront_admin::error::AppError;
use storefront_admin::services::{BackupsService, DataCopyRequest, SenderDraft, StaffService};

mod common;
use common::{seeded_store, MockBackend};

fn wired(backend: &MockBackend) -> (StaffService, BackupsService) {
    backend.accept_token("good-access");
    let store = seeded_store("good-access", "refresh-0");
    let client = backend.api_client(store);
    (StaffService::new(client.clone()), BackupsService::new(client))
}

fn sample_draft() -> SenderDraft {
    SenderDraft {
        name: "Shop".to_string(),
        email: "shop@example.com".to_string(),
        smtp_host: "smtp.example.com".to_string(),
        smtp_port: 465,
        smtp_user: "mailer".to_string(),
        smtp_password: "relay-secret".to_string(),
        encryption: "ssl".to_string(),
    }
}

#[tokio::test]
async fn test_administrators_listing_decodes_optional_fields() {
    let backend = MockBackend::spawn().await;
    let (staff, _) = wired(&backend);

    let admins = staff.administrators().await.expect("listing should succeed");
    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].login, "owner");
    assert_eq!(admins[0].full_name, "Store Owner");
    // Accounts that never signed in come back with empty fields.
    assert_eq!(admins[1].full_name, "");
    assert_eq!(admins[1].last_login, "");
}

#[tokio::test]
async fn test_administrator_create_and_edit_use_distinct_types() {
    let backend = MockBackend::spawn().await;
    let (staff, _) = wired(&backend);

    staff
        .save_administrator(None, "newbie", "New Person", "secret1")
        .await
        .expect("create should succeed");
    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "add_administrator");
    assert!(body.get("id").is_none());

    staff
        .save_administrator(Some(2), "helper", "Helper", "")
        .await
        .expect("edit should succeed");
    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "edit_administrator");
    assert_eq!(body["id"], 2);
    // An empty password on edit keeps the stored one.
    assert_eq!(body["password"], "");
}

#[tokio::test]
async fn test_new_administrator_requires_a_password() {
    let backend = MockBackend::spawn().await;
    let (staff, _) = wired(&backend);

    let err = staff
        .save_administrator(None, "newbie", "New Person", "")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(
        backend.panel_tokens().is_empty(),
        "local validation must reject before any request goes out"
    );
}

#[tokio::test]
async fn test_sender_listing_and_save() {
    let backend = MockBackend::spawn().await;
    let (staff, _) = wired(&backend);

    let senders = staff.senders().await.expect("listing should succeed");
    assert_eq!(senders.len(), 1);
    assert!(senders[0].is_default);
    assert_eq!(senders[0].smtp_port, 587);

    staff
        .save_sender(Some(1), &sample_draft())
        .await
        .expect("edit should succeed");
    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "edit_email_sender");
    assert_eq!(body["id"], 1);
    assert_eq!(body["smtp_host"], "smtp.example.com");
    assert_eq!(body["smtp_port"], 465);
    assert_eq!(body["encryption"], "ssl");

    staff
        .save_sender(None, &sample_draft())
        .await
        .expect("create should succeed");
    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "add_email_sender");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_set_default_sender_posts_the_id() {
    let backend = MockBackend::spawn().await;
    let (staff, _) = wired(&backend);

    staff
        .set_default_sender(1)
        .await
        .expect("set-default should succeed");
    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "set_default_sender");
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_backup_listing_distinguishes_automatic_backups() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let listed = backups.list().await.expect("listing should succeed");
    assert_eq!(listed.len(), 2);
    assert!(listed[0].is_automatic());
    assert!(!listed[1].is_automatic());
    assert_eq!(listed[1].name, "backup_2026-08-15.zip");
}

#[tokio::test]
async fn test_backup_schedule_roundtrip() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let mut schedule = backups.settings().await.expect("load should succeed");
    assert!(!schedule.auto_backup_enabled);
    assert_eq!(schedule.backup_frequency, "weekly");
    assert_eq!(schedule.backup_retention, "10");

    schedule.auto_backup_enabled = true;
    schedule.backup_frequency = "daily".to_string();
    backups
        .save_settings(&schedule)
        .await
        .expect("save should succeed");

    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "backup_settings");
    assert_eq!(body["auto_backup_enabled"], true);
    assert_eq!(body["backup_frequency"], "daily");
    assert_eq!(body["backup_retention"], "10");
}

#[tokio::test]
async fn test_backup_download_writes_the_archive() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("backup_3.zip");

    let bytes = backups
        .download(3, &dest)
        .await
        .expect("download should succeed");
    assert_eq!(bytes, "archive-3".len() as u64);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "archive-3");
}

#[tokio::test]
async fn test_create_backup_reports_the_backend_message() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let message = backups.create().await.expect("create should succeed");
    assert_eq!(message, "Backup started");
}

#[tokio::test]
async fn test_data_copy_posts_selection_and_credentials() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let request = DataCopyRequest {
        target_login: "other-store".to_string(),
        target_password: "secret1".to_string(),
        copy_products: true,
        copy_categories: true,
        copy_orders: false,
        copy_customers: false,
        copy_settings: false,
    };
    backups
        .copy_to_account(&request)
        .await
        .expect("copy should succeed");

    let body = backend.panel_posts().pop().unwrap();
    assert_eq!(body["type"], "copy_data");
    assert_eq!(body["target_login"], "other-store");
    assert_eq!(body["copy_products"], true);
    assert_eq!(body["copy_orders"], false);
}

#[tokio::test]
async fn test_data_copy_is_validated_locally() {
    let backend = MockBackend::spawn().await;
    let (_, backups) = wired(&backend);

    let nothing_selected = DataCopyRequest {
        target_login: "other-store".to_string(),
        target_password: "secret1".to_string(),
        copy_products: false,
        copy_categories: false,
        copy_orders: false,
        copy_customers: false,
        copy_settings: false,
    };
    let err = backups.copy_to_account(&nothing_selected).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let no_credentials = DataCopyRequest {
        target_login: "  ".to_string(),
        target_password: String::new(),
        copy_products: true,
        copy_categories: false,
        copy_orders: false,
        copy_customers: false,
        copy_settings: false,
    };
    let err = backups.copy_to_account(&no_credentials).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(
        backend.panel_tokens().is_empty(),
        "rejected copies must never reach the backend"
    );
}
