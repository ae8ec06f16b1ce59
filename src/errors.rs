//! Unified error type for the whole crate.
//!
//! Handlers report user-facing problems (bad input, unknown selector codes)
//! as formatted reply strings, so the variants here cover the failures that
//! are NOT part of the conversation: configuration, database and gateway
//! errors, plus the typed not-found/validation cases the core layer raises.

use thiserror::Error;

/// All errors the application can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration values
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// Any error surfaced by the SeaORM database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// An amount string that does not strip down to a positive integer
    #[error("Invalid amount: {input}")]
    InvalidAmount {
        /// The raw amount text as the user typed it
        input: String,
    },

    /// No cash-flow entry exists for the given selector code
    #[error("Cash-flow entry '{selector}' not found")]
    EntryNotFound {
        /// The selector code that failed to resolve
        selector: String,
    },

    /// No product exists for the given selector code
    #[error("Product '{selector}' not found")]
    ProductNotFound {
        /// The selector code that failed to resolve
        selector: String,
    },

    /// No account exists for the given selector code
    #[error("Account '{selector}' not found")]
    AccountNotFound {
        /// The selector code that failed to resolve
        selector: String,
    },

    /// The outbound messaging gateway could not be reached
    #[error("Gateway error: {0}")]
    Gateway(#[from] reqwest::Error),

    /// Environment variable lookup failure
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// I/O error (binding the listen socket, serving connections)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
