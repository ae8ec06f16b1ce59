//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod cashflow;
pub mod product;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use cashflow::{Column as CashflowColumn, Entity as Cashflow, Model as CashflowModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
