//! Cashflow entity - Represents a single recorded inflow or outflow.
//!
//! Each entry carries a short human-facing `selector_id` (the code users type
//! in `/delete`), the flow direction as `"IN"` or `"OUT"`, a free-text product
//! name and description, the amount in whole rupiah, and the WhatsApp number
//! that recorded it. Entries are never updated - only created and deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cash-flow entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cashflows")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short human-facing code used in `/delete <kode>` lookups
    pub selector_id: String,
    /// Flow direction: `"IN"` (uang masuk) or `"OUT"` (uang keluar)
    pub flow: String,
    /// Free-text name of what the money was for
    pub product: String,
    /// Free-text description
    pub description: String,
    /// Amount in whole rupiah, always positive
    pub amount: i64,
    /// WhatsApp JID of the sender who recorded the entry
    pub wa_number: String,
    /// When the entry was recorded
    pub created_at: DateTimeUtc,
}

/// Cash-flow entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
