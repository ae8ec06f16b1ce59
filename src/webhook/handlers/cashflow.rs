//! Cash-flow command handlers.
//!
//! Covers recording (`/masuk`, `/keluar`), the stateless two-step delete
//! (`/hapus`, `/hapus iya`, `/hapus batal`), delete-by-code (`/delete`) and
//! the paginated listing (`/list`). All replies are Indonesian.

use super::{parse_page, split_fields};
use crate::{
    core::cashflow::{self, FlowKind, PAGE_SIZE},
    core::recap::{format_amount, format_date},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Records a new entry from a `/masuk` or `/keluar` body.
///
/// The body must be exactly `nama | keterangan | nominal`. The amount is
/// parsed by stripping every non-digit character, so `50.000`, `Rp50.000`
/// and `50000` all record the same value.
pub async fn catat(
    db: &DatabaseConnection,
    from: &str,
    flow: FlowKind,
    body: &str,
) -> Result<String> {
    let cmd = match flow {
        FlowKind::In => "/masuk",
        FlowKind::Out => "/keluar",
    };

    let fields = split_fields(body);
    let [product, description, amount_raw] = fields.as_slice() else {
        return Ok(format!(
            "❌ Format salah\nGunakan:\n{cmd} nama | keterangan | nominal"
        ));
    };
    if product.is_empty() || description.is_empty() || amount_raw.is_empty() {
        return Ok(format!(
            "❌ Format salah\nGunakan:\n{cmd} nama | keterangan | nominal"
        ));
    }

    let Some(amount) = parse_amount(amount_raw) else {
        return Ok("❌ Nominal tidak valid".to_string());
    };

    let entry = cashflow::create_entry(
        db,
        flow,
        (*product).to_string(),
        (*description).to_string(),
        amount,
        from.to_string(),
    )
    .await?;

    Ok(format!(
        "✅ {} Tercatat\n\
         Nama       : {}\n\
         Keterangan : {}\n\
         Nominal    : {}\n\
         Kode       : {}\n\n\
         🗑️ Salah input?\n\
         Ketik: /hapus",
        flow.label(),
        entry.product,
        entry.description,
        format_amount(entry.amount),
        entry.selector_id,
    ))
}

/// Strips non-digit characters and parses the remainder as a positive amount.
fn parse_amount(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().filter(|amount| *amount > 0)
}

/// `/hapus` - shows the most-recent entry and asks for confirmation.
///
/// Nothing is deleted here and nothing is remembered for the follow-up;
/// `/hapus iya` re-queries on its own.
pub async fn hapus_prompt(db: &DatabaseConnection) -> Result<String> {
    let Some(last) = cashflow::latest_entry(db).await? else {
        return Ok("❌ Tidak ada data yang bisa dihapus".to_string());
    };

    let label = FlowKind::from_db(&last.flow).map(FlowKind::label).unwrap_or(last.flow.as_str());

    Ok(format!(
        "⚠️ Konfirmasi Hapus Data Terakhir\n\n\
         Tipe       : {}\n\
         Nama       : {}\n\
         Keterangan : {}\n\
         Nominal    : {}\n\n\
         Ketik:\n\
         👉 /hapus iya   → hapus\n\
         👉 /hapus batal → batal",
        label,
        last.product,
        last.description,
        format_amount(last.amount),
    ))
}

/// `/hapus iya` - deletes whatever entry is most-recent RIGHT NOW.
///
/// This may not be the entry `/hapus` displayed: an entry recorded between
/// the two commands is the one that gets deleted. Callers rely on the
/// listing to audit what happened.
pub async fn hapus_confirm(db: &DatabaseConnection) -> Result<String> {
    let Some(last) = cashflow::latest_entry(db).await? else {
        return Ok("❌ Data tidak ditemukan".to_string());
    };

    cashflow::delete_entry(db, last.id).await?;

    let label = FlowKind::from_db(&last.flow).map(FlowKind::short_label).unwrap_or(last.flow.as_str());

    Ok(format!(
        "🗑️ Data berhasil dihapus\n{}: {}\nNominal: {}",
        label,
        last.product,
        format_amount(last.amount),
    ))
}

/// `/hapus batal` - static acknowledgement; there is no pending state.
#[must_use]
pub fn hapus_cancel() -> String {
    "✅ Penghapusan dibatalkan".to_string()
}

/// `/delete <kode>` - deletes one entry by selector code.
pub async fn delete_by_selector(db: &DatabaseConnection, selector: &str) -> Result<String> {
    if selector.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/delete <kode>".to_string());
    }

    let Some(entry) = cashflow::get_entry_by_selector(db, selector).await? else {
        return Ok(format!("❌ Data dengan kode {selector} tidak ditemukan"));
    };

    cashflow::delete_entry(db, entry.id).await?;

    let label = FlowKind::from_db(&entry.flow).map(FlowKind::short_label).unwrap_or(entry.flow.as_str());

    Ok(format!(
        "🗑️ Data berhasil dihapus\n{}: {}\nNominal: {}\nKode: {}",
        label,
        entry.product,
        format_amount(entry.amount),
        entry.selector_id,
    ))
}

/// `/list [<halaman>]` - one 10-row page of entries, newest first.
pub async fn list(db: &DatabaseConnection, page_arg: Option<&str>) -> Result<String> {
    let Some(page) = parse_page(page_arg) else {
        return Ok("❌ Halaman tidak valid".to_string());
    };

    let entries = cashflow::list_page(db, page).await?;
    if entries.is_empty() {
        return Ok("❌ Tidak ada data di halaman ini".to_string());
    }

    let mut reply = format!("📒 Daftar Transaksi (Halaman {page})\n");
    for (index, entry) in entries.iter().enumerate() {
        let position = (page - 1) * PAGE_SIZE + index as u64 + 1;
        let (icon, label) = match FlowKind::from_db(&entry.flow) {
            Some(FlowKind::In) => ("🟢", "Masuk"),
            Some(FlowKind::Out) => ("🔴", "Keluar"),
            None => ("•", entry.flow.as_str()),
        };
        reply.push_str(&format!(
            "\n{position}. {icon} {label} • {}\n   {}\n   Kode: {} • {}",
            format_amount(entry.amount),
            entry.description,
            entry.selector_id,
            format_date(&entry.created_at),
        ));
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::cashflow::latest_entry;
    use crate::entities::Cashflow;
    use crate::test_utils::{create_test_entry, setup_test_db};
    use sea_orm::EntityTrait;

    const SENDER: &str = "628123@s.whatsapp.net";

    #[tokio::test]
    async fn test_catat_records_entry_with_stripped_amount() -> Result<()> {
        let db = setup_test_db().await?;

        let reply = catat(&db, SENDER, FlowKind::In, "jualan | pulsa 50rb | Rp50.000").await?;
        assert!(reply.starts_with("✅ Uang Masuk Tercatat"));
        assert!(reply.contains("Nominal    : 50.000"));

        let entry = latest_entry(&db).await?.unwrap();
        assert_eq!(entry.flow, "IN");
        assert_eq!(entry.amount, 50_000);
        assert_eq!(entry.wa_number, SENDER);

        let reply = catat(&db, SENDER, FlowKind::Out, "listrik | token | 200000").await?;
        assert!(reply.starts_with("✅ Uang Keluar Tercatat"));
        let entry = latest_entry(&db).await?.unwrap();
        assert_eq!(entry.flow, "OUT");
        assert_eq!(entry.amount, 200_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_catat_rejects_wrong_field_count() -> Result<()> {
        let db = setup_test_db().await?;

        for body in ["", "jualan", "jualan | pulsa", "a | b | c | d"] {
            let reply = catat(&db, SENDER, FlowKind::In, body).await?;
            assert!(reply.starts_with("❌ Format salah"), "body: {body:?}");
            assert!(reply.contains("/masuk nama | keterangan | nominal"));
        }

        // The /keluar usage message names /keluar
        let reply = catat(&db, SENDER, FlowKind::Out, "x | y").await?;
        assert!(reply.contains("/keluar nama | keterangan | nominal"));

        assert!(latest_entry(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_catat_rejects_invalid_amounts() -> Result<()> {
        let db = setup_test_db().await?;

        for body in [
            "jualan | pulsa | nol",
            "jualan | pulsa | 0",
            "jualan | pulsa | Rp0",
            "jualan | pulsa | ---",
        ] {
            let reply = catat(&db, SENDER, FlowKind::In, body).await?;
            assert_eq!(reply, "❌ Nominal tidak valid", "body: {body:?}");
        }

        assert!(latest_entry(&db).await?.is_none());
        Ok(())
    }

    #[test]
    fn test_parse_amount_strips_non_digits() {
        assert_eq!(parse_amount("50.000"), Some(50_000));
        assert_eq!(parse_amount("Rp 1.250,-"), Some(1250));
        assert_eq!(parse_amount("50000"), Some(50_000));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("nol"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[tokio::test]
    async fn test_hapus_prompt_shows_latest() -> Result<()> {
        let db = setup_test_db().await?;

        let reply = hapus_prompt(&db).await?;
        assert_eq!(reply, "❌ Tidak ada data yang bisa dihapus");

        create_test_entry(&db, FlowKind::In, 1000).await?;
        let reply = hapus_prompt(&db).await?;
        assert!(reply.starts_with("⚠️ Konfirmasi Hapus Data Terakhir"));
        assert!(reply.contains("Tipe       : Uang Masuk"));
        assert!(reply.contains("/hapus iya"));

        // Nothing was deleted by the prompt
        assert!(latest_entry(&db).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_hapus_confirm_deletes_current_latest_not_shown_one() -> Result<()> {
        let db = setup_test_db().await?;

        // Create A, show it, then create B before confirming
        let entry_a = create_test_entry(&db, FlowKind::In, 1000).await?;
        let _ = hapus_prompt(&db).await?;
        let entry_b = create_test_entry(&db, FlowKind::Out, 400).await?;

        let reply = hapus_confirm(&db).await?;
        assert!(reply.starts_with("🗑️ Data berhasil dihapus"));

        // B (latest at confirm time) is gone, A survives
        assert!(Cashflow::find_by_id(entry_b.id).one(&db).await?.is_none());
        assert!(Cashflow::find_by_id(entry_a.id).one(&db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_hapus_confirm_empty_store() -> Result<()> {
        let db = setup_test_db().await?;
        let reply = hapus_confirm(&db).await?;
        assert_eq!(reply, "❌ Data tidak ditemukan");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_by_selector() -> Result<()> {
        let db = setup_test_db().await?;

        let keep = create_test_entry(&db, FlowKind::In, 1000).await?;
        let doomed = create_test_entry(&db, FlowKind::Out, 400).await?;

        let reply = delete_by_selector(&db, &doomed.selector_id).await?;
        assert!(reply.starts_with("🗑️ Data berhasil dihapus"));
        assert!(reply.contains(&format!("Kode: {}", doomed.selector_id)));

        assert!(Cashflow::find_by_id(doomed.id).one(&db).await?.is_none());
        assert!(Cashflow::find_by_id(keep.id).one(&db).await?.is_some());

        // Unknown code leaves the store unchanged
        let reply = delete_by_selector(&db, "ZZZZ").await?;
        assert_eq!(reply, "❌ Data dengan kode ZZZZ tidak ditemukan");
        assert!(Cashflow::find_by_id(keep.id).one(&db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_code_shows_usage() -> Result<()> {
        let db = setup_test_db().await?;
        let reply = delete_by_selector(&db, "").await?;
        assert!(reply.contains("/delete <kode>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_pagination() -> Result<()> {
        let db = setup_test_db().await?;

        for i in 1..=15 {
            create_test_entry(&db, FlowKind::In, i * 100).await?;
        }

        let reply = list(&db, None).await?;
        assert!(reply.starts_with("📒 Daftar Transaksi (Halaman 1)"));
        assert!(reply.contains("1. 🟢 Masuk • 1.500"));

        let reply = list(&db, Some("2")).await?;
        assert!(reply.contains("Halaman 2"));
        // Global positions continue across pages: 11..=15
        assert!(reply.contains("11. 🟢 Masuk • 500"));
        assert!(reply.contains("15. 🟢 Masuk • 100"));
        assert!(!reply.contains("\n10."));

        let reply = list(&db, Some("3")).await?;
        assert_eq!(reply, "❌ Tidak ada data di halaman ini");

        let reply = list(&db, Some("dua")).await?;
        assert_eq!(reply, "❌ Halaman tidak valid");

        Ok(())
    }
}
