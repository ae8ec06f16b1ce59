//! Account entity - A credential record (username/password) tied to a product.
//!
//! Accounts are handed out to buyers; the `is_used` flag tracks whether a
//! credential has already been given away (`/akun gunakan`) and can be put
//! back in rotation with `/akun reset`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short human-facing code used in `/akun` lookups
    pub selector_id: String,
    /// ID of the product this account belongs to
    pub product_id: i64,
    /// Login username or email
    pub username: String,
    /// Login password
    pub password: String,
    /// Optional free-text note (profile name, PIN, ...)
    pub note: Option<String>,
    /// Whether this credential has already been handed out
    pub is_used: bool,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each account belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
