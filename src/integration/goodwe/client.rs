//! GoodWe portal session.
//! This is the higher level client: an authenticated session bound to one power station.
use reqwest::Url;
use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::dashboard::parse_realtime;
use super::http_client::HttpClient;
use super::schemas::{ExportDescriptor, ExportQuery, RealtimeData, StationConfig};
use super::{Error, Result};

/// What happened to an export on download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The report was written to this path.
    Downloaded(PathBuf),
    /// The portal reported the export as failed; nothing was written.
    Skipped,
}

pub struct Session {
    http: HttpClient,
    station: StationConfig,
}

impl Session {
    /// Opens an authenticated session.
    ///
    /// Visits the home page, logs in, then sets the language if one is configured.
    /// Responses are not checked: a rejected login only shows up on later calls.
    pub async fn connect(base_url: Url, station: StationConfig, timeout: Duration) -> Result<Self> {
        let http = HttpClient::new(base_url, timeout)?;
        let session = Session { http, station };

        log::info!("Opening portal home page");
        session.http.get_index().await?;

        log::info!("Logging in as '{}'", session.station.username);
        session
            .http
            .post_login(&session.station.username, &session.station.password)
            .await?;

        if let Some(language) = session.station.language {
            log::info!("Setting portal language to {language}");
            session
                .http
                .post_change_language(&language.to_string())
                .await?;
        }
        Ok(session)
    }

    /// Returns the cookies the portal has set on this session, as a `Cookie` header value.
    pub fn cookies(&self) -> Option<String> {
        self.http.cookie_header()
    }

    /// Ask the portal to generate the history report starting at `date` (`YYYY-MM-DD`).
    /// The date is sent as given.
    pub async fn request_export(&self, date: &str) -> Result<ExportDescriptor> {
        log::info!("Requesting export for {date}");
        let query = ExportQuery {
            query_type: 0,
            date_from: date,
            id: &self.station.station_id,
            inventer_sn: &self.station.inverter_sn,
        };
        let text = self.http.post_export_history(&query).await?;
        let descriptor = serde_json::from_str(&text)?;
        Ok(descriptor)
    }

    /// Download the report described by `descriptor` into `folder`, replacing any existing file.
    ///
    /// A failed export is logged and reported as [`DownloadOutcome::Skipped`] without touching
    /// the file system. The folder is created if missing.
    pub async fn download_export(
        &self,
        descriptor: &ExportDescriptor,
        folder: impl AsRef<Path>,
    ) -> Result<DownloadOutcome> {
        if !descriptor.is_ready() {
            log::error!("Cannot download failed export");
            return Ok(DownloadOutcome::Skipped);
        }
        let (Some(download_file_path), Some(file_name)) =
            (&descriptor.download_file_path, &descriptor.file_name)
        else {
            return Err(Error::InvalidDescriptor(
                "successful export without file location".to_string(),
            ));
        };

        let folder = folder.as_ref();
        fs::create_dir_all(folder).await?;
        let mut target = normalize_folder(folder);
        target.push(file_name);
        let target = PathBuf::from(target);

        log::info!("Downloading export {file_name}");
        let mut response = self
            .http
            .get_download_file(&self.station.station_id, download_file_path, file_name)
            .await?;

        let mut file = fs::File::create(&target).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        log::info!("Export written to {}", target.display());
        Ok(DownloadOutcome::Downloaded(target))
    }

    /// Scrape the realtime metrics of the station from the power compare dashboard.
    pub async fn realtime(&self) -> Result<RealtimeData> {
        log::info!(
            "Fetching realtime data for station {}",
            self.station.station_id
        );
        let html = self.http.get_power_compare(&self.station.station_id).await?;
        parse_realtime(&html)
    }
}

/// Render `folder` with a trailing separator, so a file name can be appended.
/// An empty folder stands for the working directory. Non-UTF-8 folders are kept as they are.
fn normalize_folder(folder: &Path) -> OsString {
    let mut folder = folder.as_os_str().to_os_string();
    if folder.is_empty() {
        folder.push(".");
    }
    let ends_with_separator = folder
        .as_encoded_bytes()
        .last()
        .is_some_and(|&byte| byte == b'/' || byte == MAIN_SEPARATOR as u8);
    if !ends_with_separator {
        folder.push(MAIN_SEPARATOR_STR);
    }
    folder
}
