//! Recap command handlers.

use crate::{
    core::recap::{self, RecapPeriod, format_amount},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Runs one `/rekap` window and formats the totals.
///
/// The derived balance is part of [`recap::RecapSummary`] but is not
/// rendered; the reply only reports the two totals.
pub async fn rekap(db: &DatabaseConnection, period: &RecapPeriod) -> Result<String> {
    let Some(summary) = recap::generate_recap(db, period).await? else {
        return Ok("❌ Bulan tidak valid".to_string());
    };

    Ok(format!(
        "📊 {}\n\nUang Masuk : {}\nUang Keluar: {}\n",
        period.title(),
        format_amount(summary.masuk),
        format_amount(summary.keluar),
    ))
}
