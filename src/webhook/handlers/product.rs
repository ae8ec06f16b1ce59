//! Product command handlers - the `/produk` subcommand family.

use super::{parse_page, split_fields};
use crate::{
    commands::ProdukAction,
    core::product::{self, PAGE_SIZE},
    core::recap::format_date,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

const USAGE: &str = "📦 Perintah /produk:\n\
     /produk list [halaman]\n\
     /produk tambah nama | keterangan\n\
     /produk edit kode | nama | keterangan\n\
     /produk hapus kode";

/// Executes one `/produk` subcommand.
pub async fn dispatch(db: &DatabaseConnection, action: &ProdukAction) -> Result<String> {
    match action {
        ProdukAction::List { page } => list(db, page.as_deref()).await,
        ProdukAction::Tambah { body } => tambah(db, body).await,
        ProdukAction::Edit { body } => edit(db, body).await,
        ProdukAction::Hapus { selector } => hapus(db, selector).await,
        ProdukAction::Usage => Ok(USAGE.to_string()),
    }
}

async fn list(db: &DatabaseConnection, page_arg: Option<&str>) -> Result<String> {
    let Some(page) = parse_page(page_arg) else {
        return Ok("❌ Halaman tidak valid".to_string());
    };

    let products = product::list_page(db, page).await?;
    if products.is_empty() {
        return Ok("❌ Tidak ada produk di halaman ini".to_string());
    }

    let mut reply = format!("📦 Daftar Produk (Halaman {page})\n");
    for (index, item) in products.iter().enumerate() {
        let position = (page - 1) * PAGE_SIZE + index as u64 + 1;
        reply.push_str(&format!("\n{position}. {}", item.name));
        if let Some(description) = &item.description {
            reply.push_str(&format!("\n   {description}"));
        }
        reply.push_str(&format!(
            "\n   Kode: {} • {}",
            item.selector_id,
            format_date(&item.created_at),
        ));
    }

    Ok(reply)
}

async fn tambah(db: &DatabaseConnection, body: &str) -> Result<String> {
    let fields = split_fields(body);
    let (name, description) = match fields.as_slice() {
        [name] => (*name, None),
        [name, description] => (*name, Some(*description)),
        _ => {
            return Ok(
                "❌ Format salah\nGunakan:\n/produk tambah nama | keterangan".to_string(),
            );
        }
    };
    if name.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/produk tambah nama | keterangan".to_string());
    }

    let created = product::create_product(
        db,
        name.to_string(),
        description.map(ToString::to_string),
    )
    .await?;

    Ok(format!(
        "✅ Produk Ditambahkan\n\
         Nama       : {}\n\
         Keterangan : {}\n\
         Kode       : {}",
        created.name,
        created.description.as_deref().unwrap_or("-"),
        created.selector_id,
    ))
}

async fn edit(db: &DatabaseConnection, body: &str) -> Result<String> {
    let fields = split_fields(body);
    let (selector, name, description) = match fields.as_slice() {
        [selector, name] => (*selector, *name, None),
        [selector, name, description] => (*selector, *name, Some(*description)),
        _ => {
            return Ok(
                "❌ Format salah\nGunakan:\n/produk edit kode | nama | keterangan".to_string(),
            );
        }
    };
    if selector.is_empty() || name.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/produk edit kode | nama | keterangan".to_string());
    }

    match product::update_product(
        db,
        selector,
        name.to_string(),
        description.map(ToString::to_string),
    )
    .await
    {
        Ok(updated) => Ok(format!(
            "✅ Produk Diperbarui\n\
             Nama       : {}\n\
             Keterangan : {}\n\
             Kode       : {}",
            updated.name,
            updated.description.as_deref().unwrap_or("-"),
            updated.selector_id,
        )),
        Err(Error::ProductNotFound { selector }) => {
            Ok(format!("❌ Produk dengan kode {selector} tidak ditemukan"))
        }
        Err(err) => Err(err),
    }
}

async fn hapus(db: &DatabaseConnection, selector: &str) -> Result<String> {
    if selector.is_empty() {
        return Ok("❌ Format salah\nGunakan:\n/produk hapus kode".to_string());
    }

    match product::delete_product(db, selector).await {
        Ok(deleted) => Ok(format!(
            "🗑️ Produk berhasil dihapus\nNama: {}\nKode: {}",
            deleted.name, deleted.selector_id,
        )),
        Err(Error::ProductNotFound { selector }) => {
            Ok(format!("❌ Produk dengan kode {selector} tidak ditemukan"))
        }
        Err(err) => Err(err),
    }
}
