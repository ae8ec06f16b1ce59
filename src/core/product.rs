//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, retrieving, updating, and
//! deleting products. All user-facing lookups go through the selector code;
//! the internal primary key never leaves the database layer. All functions
//! are async and return Result types for proper error handling throughout
//! the system.

use crate::{
    core::selector,
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Number of products shown per `/produk list` page.
pub const PAGE_SIZE: u64 = 10;

/// Retrieves one page of products, newest first.
///
/// Pages are 1-indexed; an out-of-range page yields an empty vector.
pub async fn list_page(db: &DatabaseConnection, page: u64) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_desc(product::Column::CreatedAt)
        .order_by_desc(product::Column::Id)
        .offset((page.saturating_sub(1)) * PAGE_SIZE)
        .limit(PAGE_SIZE)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by its user-facing selector code.
pub async fn get_product_by_selector(
    db: &DatabaseConnection,
    selector_id: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::SelectorId.eq(selector_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with a fresh selector code.
///
/// The name is required and trimmed; the description is optional.
///
/// # Errors
/// Returns an error if the name is empty or whitespace-only, or if the
/// database insert fails.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    let product = product::ActiveModel {
        selector_id: Set(selector::generate()),
        name: Set(name.trim().to_string()),
        description: Set(description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product's name and description.
///
/// # Errors
/// Returns an error if the name is empty, the selector does not resolve, or
/// the database update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    selector_id: &str,
    new_name: String,
    new_description: Option<String>,
) -> Result<product::Model> {
    if new_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    let mut product: product::ActiveModel = get_product_by_selector(db, selector_id)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            selector: selector_id.to_string(),
        })?
        .into();

    product.name = Set(new_name.trim().to_string());
    product.description = Set(new_description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty()));

    product.update(db).await.map_err(Into::into)
}

/// Deletes a product by selector code, returning the deleted row.
///
/// This is a hard delete - the row is gone. Accounts referencing the product
/// keep their `product_id` and become unreachable through `/akun list`.
///
/// # Errors
/// Returns an error if the selector does not resolve or the delete fails.
pub async fn delete_product(db: &DatabaseConnection, selector_id: &str) -> Result<product::Model> {
    let product = get_product_by_selector(db, selector_id)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            selector: selector_id.to_string(),
        })?;

    Product::delete_by_id(product.id).exec(db).await?;
    Ok(product)
}
