//! Core business logic, independent of the webhook and gateway layers.
//!
//! Everything here takes a [`sea_orm::DatabaseConnection`] and returns plain
//! data; formatting replies and talking to WhatsApp is the webhook layer's
//! job.

/// Account (credential) operations
pub mod account;
/// Cash-flow entry operations
pub mod cashflow;
/// Product operations
pub mod product;
/// Recap aggregation, time windows, and locale formatting
pub mod recap;
/// Selector code generation
pub mod selector;
