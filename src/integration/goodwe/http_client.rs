//! GoodWe portal HTTP client.
//! This is the lower level client for the portal: one method per endpoint, sharing a cookie jar.
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response, Url};
use std::sync::Arc;
use std::time::Duration;

use super::schemas::ExportQuery;
use super::{Error, Result};

// Relative to the base URL, so a path prefix in the base URL is kept.
const INDEX_PATH: &str = "User/Index";
const LOGIN_PATH: &str = "User/Login";
const CHANGE_LANGUAGE_PATH: &str = "User/ChangeLanguage";
const EXPORT_HISTORY_PATH: &str = "PowerStationPlatform/PowerStationReport/ExportHistoryData";
const DOWNLOAD_FILE_PATH: &str = "PowerStationPlatform/PowerStationReport/DownloadFile";
const POWER_COMPARE_PATH: &str = "PowerStationPlatform/PowerStationReport/PowerCompare";

pub struct HttpClient {
    client: Client,
    cookies: Arc<Jar>,
    base_url: Url,
}

impl HttpClient {
    /// Creates a new instance of `HttpClient` with an empty cookie jar.
    /// The base URL must be hierarchical, like `http://host/` or `http://host/portal`.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{base_url} cannot be a base URL")));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .timeout(timeout)
            .build()?;
        Ok(HttpClient {
            client,
            cookies,
            base_url,
        })
    }

    /// Returns the `Cookie` header the jar currently holds for the portal.
    pub fn cookie_header(&self) -> Option<String> {
        self.cookies
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Visit the home page. The response only matters for the cookies it sets.
    pub async fn get_index(&self) -> Result<()> {
        log::debug!("Sending index request");
        let url = self.url(INDEX_PATH)?;
        self.client.get(url).send().await?;
        Ok(())
    }

    /// Post the login form. The portal answers with session cookies; nothing else is checked.
    pub async fn post_login(&self, username: &str, password: &str) -> Result<()> {
        log::debug!("Sending login request for user '{username}'");
        let url = self.url(LOGIN_PATH)?;
        let params = [("username", username), ("password", password)];
        self.client.post(url).form(&params).send().await?;
        Ok(())
    }

    /// Post the user interface language.
    pub async fn post_change_language(&self, language: &str) -> Result<()> {
        log::debug!("Sending change language request: {language}");
        let url = self.url(CHANGE_LANGUAGE_PATH)?;
        let params = [("language", language)];
        self.client.post(url).form(&params).send().await?;
        Ok(())
    }

    /// Post a history export query and return the raw JSON answer.
    pub async fn post_export_history(&self, query: &ExportQuery<'_>) -> Result<String> {
        let body = serde_json::to_string(query)?;
        log::debug!("Sending export history request: {body}");
        let url = self.url(EXPORT_HISTORY_PATH)?;
        let text = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        log::debug!("Export history result: {text}");
        Ok(text)
    }

    /// Request a generated report file. The body is left unread for the caller to stream.
    pub async fn get_download_file(
        &self,
        station_id: &str,
        download_file_path: &str,
        file_name: &str,
    ) -> Result<Response> {
        let mut url = self.url(DOWNLOAD_FILE_PATH)?;
        // Values are interpolated as they come from the portal, without encoding.
        url.set_query(Some(&format!(
            "ID={station_id}&downloadFilePath={download_file_path}&fileName={file_name}"
        )));
        log::debug!("Sending download request: {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response)
    }

    /// Fetch the power compare dashboard fragment as HTML.
    pub async fn get_power_compare(&self, station_id: &str) -> Result<String> {
        let mut url = self.url(POWER_COMPARE_PATH)?;
        url.set_query(Some(&format!("ID={station_id}")));
        log::debug!("Sending power compare request: {url}");
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("cannot join {path} to {}: {e}", self.base_url)))
    }
}
