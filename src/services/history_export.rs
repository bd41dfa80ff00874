//! History Export Service.
//! This service walks the months of a year and downloads the history report of each one.

use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::integration::goodwe::{DownloadOutcome, Result, Session};

/// Outcome of a history export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, in request order.
    pub downloaded: Vec<PathBuf>,
    /// Dates the portal failed to export.
    pub skipped: Vec<String>,
}

pub struct HistoryExportService<'a> {
    session: &'a Session,
    folder: PathBuf,
}

impl<'a> HistoryExportService<'a> {
    /// Creates a new instance of `HistoryExportService` writing into `folder`.
    pub fn new(session: &'a Session, folder: impl Into<PathBuf>) -> Self {
        HistoryExportService {
            session,
            folder: folder.into(),
        }
    }

    /// Export and download the reports starting on the first day of each month in `months` of `year`.
    pub async fn export_year(
        &self,
        year: i32,
        months: RangeInclusive<u32>,
    ) -> Result<ExportSummary> {
        let dates = month_start_dates(year, months);
        self.export_dates(&dates).await
    }

    /// Export and download the reports for `dates`, one after the other.
    /// A failed export is recorded and skipped; any other error stops the run.
    pub async fn export_dates(&self, dates: &[String]) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        for date in dates {
            let descriptor = self.session.request_export(date).await?;
            match self
                .session
                .download_export(&descriptor, &self.folder)
                .await?
            {
                DownloadOutcome::Downloaded(path) => summary.downloaded.push(path),
                DownloadOutcome::Skipped => summary.skipped.push(date.clone()),
            }
        }
        log::info!(
            "History export finished: {} downloaded, {} skipped",
            summary.downloaded.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }
}

/// Returns the `YYYY-MM-01` dates of `months` in `year`. Months outside 1..=12 are ignored.
pub fn month_start_dates(year: i32, months: RangeInclusive<u32>) -> Vec<String> {
    months
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start_dates_full_year() {
        let dates = month_start_dates(2016, 1..=12);
        assert_eq!(dates.len(), 12);
        assert_eq!(dates.first().map(String::as_str), Some("2016-01-01"));
        assert_eq!(dates.last().map(String::as_str), Some("2016-12-01"));
    }

    #[test]
    fn test_month_start_dates_range() {
        assert_eq!(
            month_start_dates(2016, 6..=8),
            vec!["2016-06-01", "2016-07-01", "2016-08-01"]
        );
    }

    #[test]
    fn test_month_start_dates_ignores_invalid_months() {
        assert_eq!(month_start_dates(2016, 0..=1), vec!["2016-01-01"]);
        assert!(month_start_dates(2016, 13..=14).is_empty());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_month_start_dates_reversed_range() {
        assert!(month_start_dates(2016, 8..=6).is_empty());
    }
}
