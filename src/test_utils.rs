//! Shared test utilities for `Kasbot`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{account, cashflow, cashflow::FlowKind, product, selector},
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, Set, prelude::ActiveModelTrait};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test cash-flow entry with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `flow` - Entry direction
/// * `amount` - Amount in whole rupiah
///
/// # Defaults
/// * `product`: `"Test produk"`
/// * `description`: `"Test keterangan"`
/// * `wa_number`: `"628000@s.whatsapp.net"`
pub async fn create_test_entry(
    db: &DatabaseConnection,
    flow: FlowKind,
    amount: i64,
) -> Result<entities::cashflow::Model> {
    cashflow::create_entry(
        db,
        flow,
        "Test produk".to_string(),
        "Test keterangan".to_string(),
        amount,
        "628000@s.whatsapp.net".to_string(),
    )
    .await
}

/// Inserts an entry with an explicit `created_at`, bypassing the core layer.
/// Use this to place entries inside or outside recap windows.
pub async fn create_entry_at(
    db: &DatabaseConnection,
    flow: FlowKind,
    amount: i64,
    created_at: DateTime<Utc>,
) -> Result<entities::cashflow::Model> {
    let entry = entities::cashflow::ActiveModel {
        selector_id: Set(selector::generate()),
        flow: Set(flow.as_db().to_string()),
        product: Set("Test produk".to_string()),
        description: Set("Test keterangan".to_string()),
        amount: Set(amount),
        wa_number: Set("628000@s.whatsapp.net".to_string()),
        created_at: Set(created_at),
        ..Default::default()
    };
    entry.insert(db).await.map_err(Into::into)
}

/// Creates a test product with no description.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), None).await
}

/// Creates a test account with sensible defaults.
///
/// # Defaults
/// * `password`: `"secret"`
/// * `note`: None
pub async fn create_test_account(
    db: &DatabaseConnection,
    product_id: i64,
    username: &str,
) -> Result<entities::account::Model> {
    account::create_account(
        db,
        product_id,
        username.to_string(),
        "secret".to_string(),
        None,
    )
    .await
}

/// Sets up a complete test environment with a product.
/// Returns (db, product) for account-related tests.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Produk").await?;
    Ok((db, product))
}
