//! Recap (report) business logic.
//!
//! This module provides the time-window arithmetic behind the `/rekap`
//! commands, the inflow/outflow aggregation, and the locale formatting
//! helpers used across replies. Window math and formatting are pure
//! functions so they can be tested on fixed dates.

use crate::{
    core::cashflow,
    entities::cashflow as cashflow_entity,
    errors::Result,
};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

/// A reporting window selected by one of the `/rekap` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecapPeriod {
    /// `/rekap hari ini` - local midnight up to now
    Today,
    /// `/rekap bulan ini` - 1st of the current month up to now
    ThisMonth,
    /// `/rekap kemarin` - the full previous local calendar day
    Yesterday,
    /// `/rekap all` - every entry ever recorded
    All,
    /// `/rekap YYYY-MM` - one full calendar month
    Month {
        /// Four-digit year
        year: i32,
        /// Month number as typed (pattern-checked only; may still be invalid)
        month: u32,
    },
}

/// Totals for one recap window.
///
/// `saldo` is carried for completeness but deliberately left out of the
/// rendered reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecapSummary {
    /// Sum of all inflow amounts in the window
    pub masuk: i64,
    /// Sum of all outflow amounts in the window
    pub keluar: i64,
    /// Derived balance (`masuk - keluar`), not rendered
    pub saldo: i64,
}

impl RecapPeriod {
    /// Reply heading for this window.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Today => "Rekap Hari Ini (Semua Data)".to_string(),
            Self::ThisMonth => "Rekap Bulan Ini (Semua Data)".to_string(),
            Self::Yesterday => "Rekap Kemarin (Semua Data)".to_string(),
            Self::All => "Rekap Semua Data".to_string(),
            Self::Month { year, month } => format!("Rekap {year}-{month:02} (Semua Data)"),
        }
    }

    /// Computes the UTC query bounds for this window from a local "now".
    ///
    /// Returns `None` when the window itself is impossible - a `/rekap
    /// YYYY-MM` argument that passes the digit pattern but names a month
    /// outside 1-12 (e.g. `2024-99`).
    #[must_use]
    pub fn bounds(
        &self,
        now: DateTime<Local>,
    ) -> Option<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
        match self {
            Self::All => Some((None, None)),
            Self::Today => {
                let start = local_midnight(now.date_naive())?;
                Some((Some(start), None))
            }
            Self::ThisMonth => {
                let first = now.date_naive().with_day(1)?;
                let start = local_midnight(first)?;
                Some((Some(start), None))
            }
            Self::Yesterday => {
                let yesterday = now.date_naive().pred_opt()?;
                let start = local_midnight(yesterday)?;
                let end = local_day_end(yesterday)?;
                Some((Some(start), Some(end)))
            }
            Self::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(*year, *month, 1)?;
                let next_month = if *month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(*year, month + 1, 1)?
                };
                let last = next_month.pred_opt()?;
                let start = local_midnight(first)?;
                let end = local_day_end(last)?;
                Some((Some(start), Some(end)))
            }
        }
    }
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn local_day_end(date: NaiveDate) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_milli_opt(23, 59, 59, 999)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Sums entry amounts by flow direction.
#[must_use]
pub fn summarize(entries: &[cashflow_entity::Model]) -> RecapSummary {
    let mut masuk = 0;
    let mut keluar = 0;

    for entry in entries {
        match entry.flow.as_str() {
            "IN" => masuk += entry.amount,
            "OUT" => keluar += entry.amount,
            _ => {}
        }
    }

    RecapSummary {
        masuk,
        keluar,
        saldo: masuk - keluar,
    }
}

/// Fetches and aggregates all entries inside the period's window.
///
/// Returns `Ok(None)` when the period itself is impossible (see
/// [`RecapPeriod::bounds`]).
pub async fn generate_recap(
    db: &DatabaseConnection,
    period: &RecapPeriod,
) -> Result<Option<RecapSummary>> {
    let Some((start, end)) = period.bounds(Local::now()) else {
        return Ok(None);
    };

    let entries = cashflow::entries_between(db, start, end).await?;
    Ok(Some(summarize(&entries)))
}

/// Formats a rupiah amount with id-ID thousands separators: `1250` → `"1.250"`.
#[must_use]
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let first_group = digits.len() % 3;
    if first_group > 0 {
        grouped.push_str(&digits[..first_group]);
    }
    for (i, chunk) in digits.as_bytes()[first_group..].chunks(3).enumerate() {
        if first_group > 0 || i > 0 {
            grouped.push('.');
        }
        // Chunks of ASCII digits are valid UTF-8
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an entry timestamp as a local `dd/mm/YYYY` date.
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d/%m/%Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::cashflow::FlowKind;
    use crate::test_utils::{create_entry_at, create_test_entry, setup_test_db};
    use chrono::{Duration, NaiveDateTime};

    fn local(datetime: &str) -> DateTime<Local> {
        let naive = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    #[test]
    fn test_bounds_today_starts_at_local_midnight() {
        let now = local("2026-08-06 14:30:00");
        let (start, end) = RecapPeriod::Today.bounds(now).unwrap();
        assert_eq!(
            start.unwrap().with_timezone(&Local).naive_local(),
            local("2026-08-06 00:00:00").naive_local()
        );
        assert!(end.is_none());
    }

    #[test]
    fn test_bounds_this_month_starts_on_the_first() {
        let now = local("2026-08-06 14:30:00");
        let (start, _) = RecapPeriod::ThisMonth.bounds(now).unwrap();
        assert_eq!(
            start.unwrap().with_timezone(&Local).naive_local(),
            local("2026-08-01 00:00:00").naive_local()
        );
    }

    #[test]
    fn test_bounds_yesterday_covers_the_full_previous_day() {
        let now = local("2026-08-06 14:30:00");
        let (start, end) = RecapPeriod::Yesterday.bounds(now).unwrap();
        assert_eq!(
            start.unwrap().with_timezone(&Local).naive_local(),
            local("2026-08-05 00:00:00").naive_local()
        );
        let end = end.unwrap().with_timezone(&Local).naive_local();
        assert_eq!(end.date(), local("2026-08-05 00:00:00").date_naive());
        assert_eq!(end.time().to_string(), "23:59:59.999");
    }

    #[test]
    fn test_bounds_month_spans_the_calendar_month() {
        let now = local("2026-08-06 14:30:00");
        let (start, end) = RecapPeriod::Month {
            year: 2026,
            month: 2,
        }
        .bounds(now)
        .unwrap();
        assert_eq!(
            start.unwrap().with_timezone(&Local).date_naive(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(
            end.unwrap().with_timezone(&Local).date_naive(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_bounds_december_rolls_into_next_year() {
        let now = local("2026-08-06 14:30:00");
        let (_, end) = RecapPeriod::Month {
            year: 2025,
            month: 12,
        }
        .bounds(now)
        .unwrap();
        assert_eq!(
            end.unwrap().with_timezone(&Local).date_naive(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_bounds_impossible_month_is_none() {
        let now = local("2026-08-06 14:30:00");
        assert!(RecapPeriod::Month {
            year: 2024,
            month: 99,
        }
        .bounds(now)
        .is_none());
        assert!(RecapPeriod::Month {
            year: 2024,
            month: 0,
        }
        .bounds(now)
        .is_none());
    }

    #[test]
    fn test_summarize_splits_by_flow() {
        let entries = vec![
            entry_with("IN", 1000),
            entry_with("OUT", 400),
            entry_with("IN", 250),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.masuk, 1250);
        assert_eq!(summary.keluar, 400);
        assert_eq!(summary.saldo, 850);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.masuk, 0);
        assert_eq!(summary.keluar, 0);
        assert_eq!(summary.saldo, 0);
    }

    fn entry_with(flow: &str, amount: i64) -> cashflow_entity::Model {
        cashflow_entity::Model {
            id: 0,
            selector_id: "0000".to_string(),
            flow: flow.to_string(),
            product: String::new(),
            description: String::new(),
            amount,
            wa_number: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_amount_id_locale() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1250), "1.250");
        assert_eq!(format_amount(50_000), "50.000");
        assert_eq!(format_amount(1_234_567), "1.234.567");
        assert_eq!(format_amount(-1250), "-1.250");
    }

    #[tokio::test]
    async fn test_generate_recap_all_integration() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_entry(&db, FlowKind::In, 1000).await?;
        create_test_entry(&db, FlowKind::Out, 400).await?;
        create_test_entry(&db, FlowKind::In, 250).await?;

        let summary = generate_recap(&db, &RecapPeriod::All).await?.unwrap();
        assert_eq!(summary.masuk, 1250);
        assert_eq!(summary.keluar, 400);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_recap_today_excludes_older_entries() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_entry(&db, FlowKind::In, 1000).await?;
        create_entry_at(&db, FlowKind::In, 777, Utc::now() - Duration::days(10)).await?;

        let summary = generate_recap(&db, &RecapPeriod::Today).await?.unwrap();
        assert_eq!(summary.masuk, 1000);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_recap_impossible_month_is_none() -> Result<()> {
        let db = setup_test_db().await?;
        let result = generate_recap(
            &db,
            &RecapPeriod::Month {
                year: 2024,
                month: 99,
            },
        )
        .await?;
        assert!(result.is_none());
        Ok(())
    }
}
