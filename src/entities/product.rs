//! Product entity - Represents a sellable product managed via `/produk`.
//!
//! Products group credential accounts (see [`super::account`]) and are always
//! referenced by their `selector_id` in user-facing commands, never by the
//! internal primary key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short human-facing code used in `/produk` and `/akun` lookups
    pub selector_id: String,
    /// Name of the product (e.g., "Netflix Premium")
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// When the product was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product owns any number of credential accounts
    #[sea_orm(has_many = "super::account::Entity")]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
