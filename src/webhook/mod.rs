//! Webhook layer - HTTP endpoint, shared state, and command dispatch.
//!
//! One route does all the work: the gateway posts every message event to
//! `POST /webhook`, the inbound filter drops what should not get a reply,
//! the parser classifies the text, and the matching handler builds the
//! reply that goes back out through the gateway client. The endpoint
//! acknowledges with `200 {"ok":true}` for everything except an error that
//! escapes the dispatcher - a failed outbound send - which turns into
//! `500 {"ok":false}`.

/// Command handlers (one module per command family)
pub mod handlers;
/// Inbound payload extraction
pub mod payload;

use crate::{commands::Command, errors::Result, gateway::GatewayClient};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

/// Shared data available to the webhook endpoint.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
    /// Outbound messaging-gateway client
    pub gateway: GatewayClient,
}

impl AppState {
    /// Creates the shared state handed to every request.
    #[must_use]
    pub const fn new(database: DatabaseConnection, gateway: GatewayClient) -> Self {
        Self { database, gateway }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(receive_webhook))
        .with_state(state)
}

/// The single webhook endpoint.
///
/// The body is taken as raw bytes and parsed leniently: an unparseable or
/// incomplete payload is treated as "no text" and acknowledged, never
/// rejected.
async fn receive_webhook(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match handle_event(&state, &body).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ok": true }))),
        Err(err) => {
            error!("webhook error: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "ok": false })),
            )
        }
    }
}

/// Filters, parses, executes, and replies to one inbound event.
async fn handle_event(state: &AppState, body: &[u8]) -> Result<()> {
    let Some(inbound) = payload::extract(body) else {
        return Ok(());
    };

    info!(from = %inbound.from, text = %inbound.text, "pesan masuk");

    let Some(command) = Command::parse(&inbound.text) else {
        // Unrecognized text gets no reply at all
        return Ok(());
    };

    let reply = match dispatch(&state.database, &inbound.from, &command).await {
        Ok(text) => text,
        Err(err) => {
            // Store failures still answer the user; only the send may escalate
            warn!(?command, "command failed: {err}");
            "❌ Terjadi kesalahan, coba lagi".to_string()
        }
    };

    state.gateway.send_text(&inbound.from, &reply).await
}

/// Routes one parsed command to its handler and returns the reply text.
///
/// Exposed separately from the HTTP plumbing so the full
/// parse-execute-reply path is testable against an in-memory database.
pub async fn dispatch(
    db: &DatabaseConnection,
    from: &str,
    command: &Command,
) -> Result<String> {
    match command {
        Command::Hapus => handlers::cashflow::hapus_prompt(db).await,
        Command::HapusIya => handlers::cashflow::hapus_confirm(db).await,
        Command::HapusBatal => Ok(handlers::cashflow::hapus_cancel()),
        Command::Rekap(period) => handlers::recap::rekap(db, period).await,
        Command::Catat { flow, body } => handlers::cashflow::catat(db, from, *flow, body).await,
        Command::Help => Ok(handlers::general::help()),
        Command::Delete { selector } => handlers::cashflow::delete_by_selector(db, selector).await,
        Command::List { page } => handlers::cashflow::list(db, page.as_deref()).await,
        Command::Produk(action) => handlers::product::dispatch(db, action).await,
        Command::Akun(action) => handlers::account::dispatch(db, action).await,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    async fn run(db: &DatabaseConnection, text: &str) -> String {
        let command = Command::parse(text).expect("command should parse");
        dispatch(db, "628123@s.whatsapp.net", &command)
            .await
            .expect("dispatch should succeed")
    }

    #[tokio::test]
    async fn test_full_record_then_delete_flow() -> Result<()> {
        let db = setup_test_db().await?;

        let reply = run(&db, "/masuk jualan | pulsa | 50.000").await;
        assert!(reply.starts_with("✅ Uang Masuk Tercatat"));

        let reply = run(&db, "/rekap all").await;
        assert!(reply.contains("Uang Masuk : 50.000"));

        let reply = run(&db, "/hapus").await;
        assert!(reply.starts_with("⚠️ Konfirmasi Hapus Data Terakhir"));

        let reply = run(&db, "/hapus iya").await;
        assert!(reply.starts_with("🗑️ Data berhasil dihapus"));

        let reply = run(&db, "/list").await;
        assert_eq!(reply, "❌ Tidak ada data di halaman ini");

        Ok(())
    }

    #[tokio::test]
    async fn test_hapus_batal_is_stateless() -> Result<()> {
        let db = setup_test_db().await?;

        // Cancelling without a preceding /hapus still acknowledges
        let reply = run(&db, "/hapus batal").await;
        assert_eq!(reply, "✅ Penghapusan dibatalkan");

        Ok(())
    }

    #[tokio::test]
    async fn test_product_account_flow() -> Result<()> {
        let db = setup_test_db().await?;

        let reply = run(&db, "/produk tambah Netflix | Akun streaming").await;
        let selector = reply
            .lines()
            .find_map(|line| line.strip_prefix("Kode       : "))
            .unwrap()
            .to_string();

        let reply = run(&db, &format!("/akun tambah {selector} | user@mail.com | rahasia")).await;
        assert!(reply.starts_with("✅ Akun Ditambahkan"));

        let reply = run(&db, &format!("/akun list {selector}")).await;
        assert!(reply.contains("user@mail.com | rahasia"));

        Ok(())
    }
}
