/// Database configuration and connection management
pub mod database;

/// Messaging-gateway settings from environment variables
pub mod gateway;
