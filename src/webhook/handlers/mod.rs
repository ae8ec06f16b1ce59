//! Command handlers organized by family.
//!
//! Every handler takes the database connection plus the parsed command
//! arguments and returns the reply text. Validation problems and missing
//! selector codes come back as `Ok` with a user-facing ❌ message; only
//! real store failures propagate as errors.

/// Account (`/akun`) handlers
pub mod account;
/// Cash-flow (`/masuk`, `/keluar`, `/hapus`, `/delete`, `/list`) handlers
pub mod cashflow;
/// General (`/help`) handlers
pub mod general;
/// Product (`/produk`) handlers
pub mod product;
/// Recap (`/rekap`) handlers
pub mod recap;

/// Splits a pipe-delimited command body into trimmed fields.
pub(crate) fn split_fields(body: &str) -> Vec<&str> {
    body.split('|').map(str::trim).collect()
}

/// Parses an optional 1-indexed page argument. `None` input means page 1;
/// anything that is not a positive integer is rejected.
pub(crate) fn parse_page(arg: Option<&str>) -> Option<u64> {
    match arg {
        None => Some(1),
        Some(raw) => raw.parse::<u64>().ok().filter(|page| *page >= 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_trims_around_pipes() {
        assert_eq!(
            split_fields("jualan | pulsa 50rb | 50.000"),
            vec!["jualan", "pulsa 50rb", "50.000"]
        );
        assert_eq!(split_fields("satu"), vec!["satu"]);
        assert_eq!(split_fields("a||b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), Some(1));
        assert_eq!(parse_page(Some("2")), Some(2));
        assert_eq!(parse_page(Some("0")), None);
        assert_eq!(parse_page(Some("-1")), None);
        assert_eq!(parse_page(Some("dua")), None);
    }
}
