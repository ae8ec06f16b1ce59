//! Cash-flow business logic - Handles all entry-related operations.
//!
//! This module provides functions for creating, retrieving, listing, and
//! deleting cash-flow entries. Entries are append-only: the only mutation is
//! deletion, either of the most-recent entry (the `/hapus` flow) or by
//! selector code (`/delete`). Reads that feed a subsequent delete are issued
//! as separate statements with no transaction between them; two concurrent
//! requests can interleave.

use crate::{
    core::selector,
    entities::{Cashflow, cashflow},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Number of entries shown per `/list` page.
pub const PAGE_SIZE: u64 = 10;

/// Direction of a cash-flow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Money coming in (`/masuk`)
    In,
    /// Money going out (`/keluar`)
    Out,
}

impl FlowKind {
    /// The value stored in the `flow` column.
    #[must_use]
    pub const fn as_db(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }

    /// Long label used in confirmation replies ("Uang Masuk" / "Uang Keluar").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::In => "Uang Masuk",
            Self::Out => "Uang Keluar",
        }
    }

    /// Short label used in list rows and delete receipts.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::In => "Masuk",
            Self::Out => "Keluar",
        }
    }

    /// Parses the stored column value back into a `FlowKind`.
    #[must_use]
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }
}

/// Creates a new cash-flow entry with a fresh selector code.
///
/// The amount must already be parsed to a whole-rupiah integer; anything
/// non-positive is rejected. No collision check is performed on the selector
/// code.
///
/// # Arguments
/// * `flow` - Direction of the entry (in or out)
/// * `product` - Free-text name of what the money was for
/// * `description` - Free-text description
/// * `amount` - Amount in whole rupiah, must be positive
/// * `wa_number` - WhatsApp JID of the sender recording the entry
pub async fn create_entry(
    db: &DatabaseConnection,
    flow: FlowKind,
    product: String,
    description: String,
    amount: i64,
    wa_number: String,
) -> Result<cashflow::Model> {
    if amount <= 0 {
        return Err(Error::InvalidAmount {
            input: amount.to_string(),
        });
    }

    let entry = cashflow::ActiveModel {
        selector_id: Set(selector::generate()),
        flow: Set(flow.as_db().to_string()),
        product: Set(product),
        description: Set(description),
        amount: Set(amount),
        wa_number: Set(wa_number),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    entry.insert(db).await.map_err(Into::into)
}

/// Retrieves the single most-recent entry across ALL senders.
///
/// `/hapus` and `/hapus iya` both call this independently; the second call
/// re-queries rather than remembering what the first one showed. The query
/// deliberately carries no sender filter.
pub async fn latest_entry(db: &DatabaseConnection) -> Result<Option<cashflow::Model>> {
    Cashflow::find()
        .order_by_desc(cashflow::Column::CreatedAt)
        .order_by_desc(cashflow::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an entry by its user-facing selector code.
pub async fn get_entry_by_selector(
    db: &DatabaseConnection,
    selector_id: &str,
) -> Result<Option<cashflow::Model>> {
    Cashflow::find()
        .filter(cashflow::Column::SelectorId.eq(selector_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes an entry by primary key.
pub async fn delete_entry(db: &DatabaseConnection, id: i64) -> Result<()> {
    Cashflow::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Retrieves one page of entries, newest first.
///
/// Pages are 1-indexed with [`PAGE_SIZE`] rows per page; an out-of-range page
/// simply yields an empty vector.
pub async fn list_page(db: &DatabaseConnection, page: u64) -> Result<Vec<cashflow::Model>> {
    Cashflow::find()
        .order_by_desc(cashflow::Column::CreatedAt)
        .order_by_desc(cashflow::Column::Id)
        .offset((page.saturating_sub(1)) * PAGE_SIZE)
        .limit(PAGE_SIZE)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all entries whose `created_at` falls inside the given bounds.
///
/// `None` on either side leaves that side unbounded; `(None, None)` fetches
/// the whole table (the `/rekap all` case - unbounded by design).
pub async fn entries_between(
    db: &DatabaseConnection,
    start: Option<DateTimeUtc>,
    end: Option<DateTimeUtc>,
) -> Result<Vec<cashflow::Model>> {
    let mut query = Cashflow::find();
    if let Some(start) = start {
        query = query.filter(cashflow::Column::CreatedAt.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(cashflow::Column::CreatedAt.lte(end));
    }
    query.all(db).await.map_err(Into::into)
}
