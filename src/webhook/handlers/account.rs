//! Account command handlers - the `/akun` subcommand family.
//!
//! Accounts always hang off a product, so `list` and `tambah` take the
//! parent product's selector code; everything else addresses the account's
//! own code.

use super::split_fields;
use crate::{
    commands::AkunAction,
    core::{account, product},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

const USAGE: &str = "🔑 Perintah /akun:\n\
     /akun list kode-produk\n\
     /akun tambah kode-produk | username | password | catatan\n\
     /akun edit kode | username | password | catatan\n\
     /akun hapus kode\n\
     /akun gunakan kode\n\
     /akun reset kode";

/// Executes one `/akun` subcommand.
pub async fn dispatch(db: &DatabaseConnection, action: &AkunAction) -> Result<String> {
    match action {
        AkunAction::List { product_selector } => list(db, product_selector).await,
        AkunAction::Tambah { body } => tambah(db, body).await,
        AkunAction::Edit { body } => edit(db, body).await,
        AkunAction::Hapus { selector } => hapus(db, selector).await,
        AkunAction::Gunakan { selector } => set_used(db, selector, true).await,
        AkunAction::Reset { selector } => set_used(db, selector, false).await,
        AkunAction::Usage => Ok(USAGE.to_string()),
    }
}

async fn list(db: &DatabaseConnection, product_selector: &str) -> Result<String> {
    if product_selector.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/akun list kode-produk".to_string());
    }

    let Some(parent) = product::get_product_by_selector(db, product_selector).await? else {
        return Ok(format!(
            "❌ Produk dengan kode {product_selector} tidak ditemukan"
        ));
    };

    let accounts = account::list_for_product(db, parent.id).await?;
    if accounts.is_empty() {
        return Ok(format!("❌ Belum ada akun untuk produk {}", parent.name));
    }

    let mut reply = format!("🔑 Daftar Akun {}\n", parent.name);
    for (index, item) in accounts.iter().enumerate() {
        let marker = if item.is_used { "✅" } else { "⬜" };
        reply.push_str(&format!(
            "\n{}. {marker} {} | {}",
            index + 1,
            item.username,
            item.password,
        ));
        if let Some(note) = &item.note {
            reply.push_str(&format!("\n   {note}"));
        }
        reply.push_str(&format!("\n   Kode: {}", item.selector_id));
    }

    Ok(reply)
}

async fn tambah(db: &DatabaseConnection, body: &str) -> Result<String> {
    let fields = split_fields(body);
    let (product_selector, username, password, note) = match fields.as_slice() {
        [product_selector, username, password] => (*product_selector, *username, *password, None),
        [product_selector, username, password, note] => {
            (*product_selector, *username, *password, Some(*note))
        }
        _ => {
            return Ok(
                "❌ Format salah\nGunakan:\n/akun tambah kode-produk | username | password | catatan"
                    .to_string(),
            );
        }
    };
    if product_selector.is_empty() || username.is_empty() || password.is_empty() {
        return Ok(
            "❌ Format salah\nGunakan:\n/akun tambah kode-produk | username | password | catatan"
                .to_string(),
        );
    }

    let Some(parent) = product::get_product_by_selector(db, product_selector).await? else {
        return Ok(format!(
            "❌ Produk dengan kode {product_selector} tidak ditemukan"
        ));
    };

    let created = account::create_account(
        db,
        parent.id,
        username.to_string(),
        password.to_string(),
        note.map(ToString::to_string),
    )
    .await?;

    Ok(format!(
        "✅ Akun Ditambahkan\n\
         Produk   : {}\n\
         Username : {}\n\
         Kode     : {}",
        parent.name, created.username, created.selector_id,
    ))
}

async fn edit(db: &DatabaseConnection, body: &str) -> Result<String> {
    let fields = split_fields(body);
    let (selector, username, password, note) = match fields.as_slice() {
        [selector, username, password] => (*selector, *username, *password, None),
        [selector, username, password, note] => (*selector, *username, *password, Some(*note)),
        _ => {
            return Ok(
                "❌ Format salah\nGunakan:\n/akun edit kode | username | password | catatan"
                    .to_string(),
            );
        }
    };
    if selector.is_empty() || username.is_empty() || password.is_empty() {
        return Ok(
            "❌ Format salah\nGunakan:\n/akun edit kode | username | password | catatan"
                .to_string(),
        );
    }

    match account::update_account(
        db,
        selector,
        username.to_string(),
        password.to_string(),
        note.map(ToString::to_string),
    )
    .await
    {
        Ok(updated) => Ok(format!(
            "✅ Akun Diperbarui\nUsername : {}\nKode     : {}",
            updated.username, updated.selector_id,
        )),
        Err(Error::AccountNotFound { selector }) => {
            Ok(format!("❌ Akun dengan kode {selector} tidak ditemukan"))
        }
        Err(err) => Err(err),
    }
}

async fn hapus(db: &DatabaseConnection, selector: &str) -> Result<String> {
    if selector.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/akun hapus kode".to_string());
    }

    match account::delete_account(db, selector).await {
        Ok(deleted) => Ok(format!(
            "🗑️ Akun berhasil dihapus\nUsername: {}\nKode: {}",
            deleted.username, deleted.selector_id,
        )),
        Err(Error::AccountNotFound { selector }) => {
            Ok(format!("❌ Akun dengan kode {selector} tidak ditemukan"))
        }
        Err(err) => Err(err),
    }
}

async fn set_used(db: &DatabaseConnection, selector: &str, is_used: bool) -> Result<String> {
    if selector.is_empty() {
        let hint = if is_used { "gunakan" } else { "reset" };
        return Ok(format!("❌ Format salah\nGunakan:\n/akun {hint} kode"));
    }

    match account::set_account_used(db, selector, is_used).await {
        Ok(updated) if is_used => Ok(format!(
            "✅ Akun {} ditandai terpakai\nKode: {}",
            updated.username, updated.selector_id,
        )),
        Ok(updated) => Ok(format!(
            "✅ Akun {} tersedia kembali\nKode: {}",
            updated.username, updated.selector_id,
        )),
        Err(Error::AccountNotFound { selector }) => {
            Ok(format!("❌ Akun dengan kode {selector} tidak ditemukan"))
        }
        Err(err) => Err(err),
    }
}
