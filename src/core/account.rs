//! Account business logic - Handles all credential-record operations.
//!
//! Accounts hang off a parent product and are listed unpaginated, filtered
//! by the product's internal key. The `is_used` flag is toggled on its own
//! (`/akun gunakan`, `/akun reset`) independently of edits. Read-then-update
//! pairs run as separate statements with no transaction, matching the rest
//! of the store layer.

use crate::{
    core::selector,
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all accounts belonging to a product, oldest first.
pub async fn list_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<account::Model>> {
    Account::find()
        .filter(account::Column::ProductId.eq(product_id))
        .order_by_asc(account::Column::CreatedAt)
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an account by its user-facing selector code.
pub async fn get_account_by_selector(
    db: &DatabaseConnection,
    selector_id: &str,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::SelectorId.eq(selector_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new account under a product with a fresh selector code.
///
/// Username and password are required; the note is optional. New accounts
/// start unused.
///
/// # Errors
/// Returns an error if username or password is empty, or the insert fails.
pub async fn create_account(
    db: &DatabaseConnection,
    product_id: i64,
    username: String,
    password: String,
    note: Option<String>,
) -> Result<account::Model> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(Error::Config {
            message: "Account username and password cannot be empty".to_string(),
        });
    }

    let account = account::ActiveModel {
        selector_id: Set(selector::generate()),
        product_id: Set(product_id),
        username: Set(username.trim().to_string()),
        password: Set(password.trim().to_string()),
        note: Set(note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())),
        is_used: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    account.insert(db).await.map_err(Into::into)
}

/// Updates an account's username, password and note. `is_used` is untouched.
///
/// # Errors
/// Returns an error if username or password is empty, the selector does not
/// resolve, or the update fails.
pub async fn update_account(
    db: &DatabaseConnection,
    selector_id: &str,
    username: String,
    password: String,
    note: Option<String>,
) -> Result<account::Model> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(Error::Config {
            message: "Account username and password cannot be empty".to_string(),
        });
    }

    let mut account: account::ActiveModel = get_account_by_selector(db, selector_id)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            selector: selector_id.to_string(),
        })?
        .into();

    account.username = Set(username.trim().to_string());
    account.password = Set(password.trim().to_string());
    account.note = Set(note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()));

    account.update(db).await.map_err(Into::into)
}

/// Sets the `is_used` flag on one account (`/akun gunakan` and `/akun reset`).
///
/// # Errors
/// Returns an error if the selector does not resolve or the update fails.
pub async fn set_account_used(
    db: &DatabaseConnection,
    selector_id: &str,
    is_used: bool,
) -> Result<account::Model> {
    let mut account: account::ActiveModel = get_account_by_selector(db, selector_id)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            selector: selector_id.to_string(),
        })?
        .into();

    account.is_used = Set(is_used);
    account.update(db).await.map_err(Into::into)
}

/// Deletes an account by selector code, returning the deleted row.
///
/// # Errors
/// Returns an error if the selector does not resolve or the delete fails.
pub async fn delete_account(db: &DatabaseConnection, selector_id: &str) -> Result<account::Model> {
    let account = get_account_by_selector(db, selector_id)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            selector: selector_id.to_string(),
        })?;

    Account::delete_by_id(account.id).exec(db).await?;
    Ok(account)
}
