use kasbot::config::{self, gateway::GatewaySettings};
use kasbot::errors::Result;
use kasbot::gateway::GatewayClient;
use kasbot::webhook::{self, AppState};

use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load gateway settings
    let gateway_settings = GatewaySettings::from_env()
        .inspect_err(|e| error!("Failed to load gateway settings: {}", e))?;
    info!("Gateway settings loaded for instance {}.", gateway_settings.instance);

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Run the webhook server
    let state = AppState::new(db, GatewayClient::new(gateway_settings));
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", addr, e))?;
    info!("Listening on {}", addr);

    axum::serve(listener, webhook::router(state)).await?;

    Ok(())
}
