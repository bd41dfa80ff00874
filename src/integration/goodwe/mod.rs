//! GoodWe Portal Integration Module
//! The integration is done via the portal's HTTP backend, using a cookie session.
mod client;
mod dashboard;
mod error;
mod http_client;
mod schemas;

pub use client::{DownloadOutcome, Session};
pub use dashboard::parse_realtime;
pub use error::{Error, Result};
pub use schemas::{
    ExportDescriptor, ExportStatus, Language, RealtimeData, RealtimeMetric, StationConfig,
};
