//! Database configuration module for `Kasbot`.
//!
//! This module handles database connection and table creation using `SeaORM`.
//! Production deployments point `DATABASE_URL` at a hosted Postgres; local
//! runs and tests fall back to a `SQLite` file / in-memory database. Table
//! creation uses `SeaORM`'s `Schema::create_table_from_entity` method to
//! generate SQL from the entity models, so the database schema always matches
//! the Rust struct definitions without manual SQL.

use crate::entities::{Account, Cashflow, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/kasbot.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. It creates tables for cash-flow entries, products, and accounts. Existing
/// tables are left untouched so the service can restart against a populated store.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut cashflow_table = schema.create_table_from_entity(Cashflow);
    let mut product_table = schema.create_table_from_entity(Product);
    let mut account_table = schema.create_table_from_entity(Account);

    db.execute(builder.build(cashflow_table.if_not_exists()))
        .await?;
    db.execute(builder.build(product_table.if_not_exists()))
        .await?;
    db.execute(builder.build(account_table.if_not_exists()))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        account::Model as AccountModel, cashflow::Model as CashflowModel,
        product::Model as ProductModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<CashflowModel> = Cashflow::find().limit(1).all(&db).await?;
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<AccountModel> = Account::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        // A second run against the same connection must not fail
        create_tables(&db).await?;
        Ok(())
    }
}
