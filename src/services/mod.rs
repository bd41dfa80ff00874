//! Services orchestrating the portal integration.
mod history_export;

pub use history_export::{ExportSummary, HistoryExportService, month_start_dates};
