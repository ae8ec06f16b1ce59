//! Command parsing - classifies inbound message text into typed commands.
//!
//! Parsing is separated from execution: [`Command::parse`] is a pure function
//! over the trimmed message text, and the webhook handlers execute whatever
//! variant comes out. Dispatch is ordered, first-match-wins, case-sensitive.
//! Text that matches nothing returns `None` and the webhook layer silently
//! acknowledges it - no reply is ever sent for unrecognized messages.
//!
//! Argument-level validation is split in two: anything that decides WHETHER a
//! command matches (the strict `YYYY-MM` pattern for `/rekap`) lives here;
//! anything that produces a user-visible error reply (field counts, amounts,
//! page numbers) lives in the handlers, so a malformed `/masuk` still matches
//! and can answer with a usage message.

use crate::core::{cashflow::FlowKind, recap::RecapPeriod};

/// A fully classified inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/hapus` - show the most-recent entry and ask for confirmation
    Hapus,
    /// `/hapus iya` - delete whatever is most-recent right now
    HapusIya,
    /// `/hapus batal` - acknowledge cancellation (no state to clear)
    HapusBatal,
    /// Any `/rekap` variant with its resolved reporting window
    Rekap(RecapPeriod),
    /// `/masuk ...` or `/keluar ...` with the raw pipe-delimited body
    Catat {
        /// Entry direction, decided by which command prefix matched
        flow: FlowKind,
        /// Everything after the command word, still unparsed
        body: String,
    },
    /// `/help`
    Help,
    /// `/delete <kode>`
    Delete {
        /// Selector code as typed (may be empty; handler replies with usage)
        selector: String,
    },
    /// `/list [<halaman>]`
    List {
        /// Raw page argument if present (validated by the handler)
        page: Option<String>,
    },
    /// `/produk <sub> ...`
    Produk(ProdukAction),
    /// `/akun <sub> ...`
    Akun(AkunAction),
}

/// Subcommands of `/produk`, dispatched on the second token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProdukAction {
    /// `/produk list [<halaman>]`
    List {
        /// Raw page argument if present
        page: Option<String>,
    },
    /// `/produk tambah <nama> | <deskripsi?>`
    Tambah {
        /// Raw pipe-delimited body
        body: String,
    },
    /// `/produk edit <kode> | <nama> | <deskripsi?>`
    Edit {
        /// Raw pipe-delimited body
        body: String,
    },
    /// `/produk hapus <kode>`
    Hapus {
        /// Selector code as typed
        selector: String,
    },
    /// Missing or unknown subcommand - handler replies with usage text
    Usage,
}

/// Subcommands of `/akun`, dispatched on the second token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AkunAction {
    /// `/akun list <kode-produk>`
    List {
        /// Parent product's selector code as typed
        product_selector: String,
    },
    /// `/akun tambah <kode-produk> | <username> | <password> | <catatan?>`
    Tambah {
        /// Raw pipe-delimited body
        body: String,
    },
    /// `/akun edit <kode> | <username> | <password> | <catatan?>`
    Edit {
        /// Raw pipe-delimited body
        body: String,
    },
    /// `/akun hapus <kode>`
    Hapus {
        /// Selector code as typed
        selector: String,
    },
    /// `/akun gunakan <kode>` - mark the credential as handed out
    Gunakan {
        /// Selector code as typed
        selector: String,
    },
    /// `/akun reset <kode>` - put the credential back in rotation
    Reset {
        /// Selector code as typed
        selector: String,
    },
    /// Missing or unknown subcommand - handler replies with usage text
    Usage,
}

impl Command {
    /// Classifies one inbound message. Returns `None` for anything that is
    /// not a recognized command, including a `/rekap` argument that fails
    /// the strict `YYYY-MM` digit pattern.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        match text {
            "/hapus" => return Some(Self::Hapus),
            "/hapus iya" => return Some(Self::HapusIya),
            "/hapus batal" => return Some(Self::HapusBatal),
            "/rekap hari ini" => return Some(Self::Rekap(RecapPeriod::Today)),
            "/rekap bulan ini" => return Some(Self::Rekap(RecapPeriod::ThisMonth)),
            "/rekap kemarin" => return Some(Self::Rekap(RecapPeriod::Yesterday)),
            "/rekap all" => return Some(Self::Rekap(RecapPeriod::All)),
            "/help" => return Some(Self::Help),
            _ => {}
        }

        if let Some(body) = text.strip_prefix("/masuk") {
            return Some(Self::Catat {
                flow: FlowKind::In,
                body: body.trim().to_string(),
            });
        }
        if let Some(body) = text.strip_prefix("/keluar") {
            return Some(Self::Catat {
                flow: FlowKind::Out,
                body: body.trim().to_string(),
            });
        }

        if let Some(arg) = text.strip_prefix("/rekap ") {
            // Only a strict YYYY-MM argument matches; anything else falls
            // through unmatched like every other unrecognized message
            return parse_month_arg(arg.trim())
                .map(|(year, month)| Self::Rekap(RecapPeriod::Month { year, month }));
        }

        if let Some(arg) = text.strip_prefix("/delete") {
            return Some(Self::Delete {
                selector: arg.trim().to_string(),
            });
        }

        if let Some(arg) = text.strip_prefix("/list") {
            let arg = arg.trim();
            return Some(Self::List {
                page: (!arg.is_empty()).then(|| arg.to_string()),
            });
        }

        if let Some(rest) = text.strip_prefix("/produk") {
            return Some(Self::Produk(parse_produk(rest.trim())));
        }

        if let Some(rest) = text.strip_prefix("/akun") {
            return Some(Self::Akun(parse_akun(rest.trim())));
        }

        None
    }
}

/// Splits `rest` into its first whitespace-delimited token and the remainder.
fn split_subcommand(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((sub, body)) => (sub, body.trim()),
        None => (rest, ""),
    }
}

fn parse_produk(rest: &str) -> ProdukAction {
    let (sub, body) = split_subcommand(rest);
    match sub {
        "list" => ProdukAction::List {
            page: (!body.is_empty()).then(|| body.to_string()),
        },
        "tambah" => ProdukAction::Tambah {
            body: body.to_string(),
        },
        "edit" => ProdukAction::Edit {
            body: body.to_string(),
        },
        "hapus" => ProdukAction::Hapus {
            selector: body.to_string(),
        },
        _ => ProdukAction::Usage,
    }
}

fn parse_akun(rest: &str) -> AkunAction {
    let (sub, body) = split_subcommand(rest);
    match sub {
        "list" => AkunAction::List {
            product_selector: body.to_string(),
        },
        "tambah" => AkunAction::Tambah {
            body: body.to_string(),
        },
        "edit" => AkunAction::Edit {
            body: body.to_string(),
        },
        "hapus" => AkunAction::Hapus {
            selector: body.to_string(),
        },
        "gunakan" => AkunAction::Gunakan {
            selector: body.to_string(),
        },
        "reset" => AkunAction::Reset {
            selector: body.to_string(),
        },
        _ => AkunAction::Usage,
    }
}

/// Strict `YYYY-MM` check: four ASCII digits, a dash, two ASCII digits.
///
/// Only the shape is validated here; a pattern-valid but impossible month
/// (`2024-99`) still parses and is rejected later with a reply, when the
/// window bounds come out empty.
fn parse_month_arg(arg: &str) -> Option<(i32, u32)> {
    let (year, month) = arg.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?))
}
