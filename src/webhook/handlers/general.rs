//! General command handlers - `/help`.

/// Static help text listing the whole command surface.
#[must_use]
pub fn help() -> String {
    "📒 Bantuan Kasbot\n\
     Catat arus kas dan kelola produk langsung dari chat.\n\n\
     Catat Transaksi\n\
     • /masuk nama | keterangan | nominal - catat uang masuk\n\
     • /keluar nama | keterangan | nominal - catat uang keluar\n\
     • /hapus - hapus data terakhir (dengan konfirmasi)\n\
     • /delete <kode> - hapus data berdasarkan kode\n\
     • /list [halaman] - daftar transaksi, 10 per halaman\n\n\
     Rekap\n\
     • /rekap hari ini\n\
     • /rekap bulan ini\n\
     • /rekap kemarin\n\
     • /rekap all\n\
     • /rekap 2024-03 - rekap bulan tertentu (format YYYY-MM)\n\n\
     Produk & Akun\n\
     • /produk list|tambah|edit|hapus\n\
     • /akun list|tambah|edit|hapus|gunakan|reset\n\n\
     • /help - tampilkan pesan ini"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_every_command() {
        let text = help();
        for command in [
            "/masuk", "/keluar", "/hapus", "/delete", "/list", "/rekap", "/produk", "/akun",
            "/help",
        ] {
            assert!(text.contains(command), "missing {command}");
        }
    }
}
