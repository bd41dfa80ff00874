//! Application configuration loaded from environment variables.
use std::path::PathBuf;

use envconfig::Envconfig;
use humantime::Duration;
use reqwest::Url;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Envconfig)]
pub struct Config {
    #[allow(dead_code)]
    #[envconfig(from = "APP_LOG", default = "info")]
    pub app_log: String,
    #[allow(dead_code)]
    #[envconfig(from = "APP_LOG_STYLE", default = "always")]
    pub app_log_style: String,
    #[envconfig(from = "GOODWE_URL", default = "http://www.goodwe-power.com")]
    pub goodwe_url: Url,
    #[envconfig(from = "GOODWE_STATION_FILE", default = "goodwe.cfg")]
    pub station_file: PathBuf,
    #[envconfig(from = "GOODWE_TIMEOUT", default = "30s")]
    pub request_timeout: Duration,
    #[envconfig(from = "DOWNLOAD_FOLDER", default = "downloads/")]
    pub download_folder: PathBuf,
}

pub fn configure_logger() {
    let env = env_logger::Env::default()
        .filter_or("APP_LOG", "info")
        .write_style_or("APP_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}
