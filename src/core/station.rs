//! Station file loading.
//! The station file is an INI file whose `station` section holds the portal credentials:
//!
//! ```ini
//! [station]
//! stationId = 1234-abcd
//! inverterSN = 16000SSU000W0001
//! username = me@example.com
//! password = secret
//! language = en-US
//! ```
use std::path::Path;
use std::str::FromStr;

use config::{Config, File, FileStoredFormat, Format, Map, Value, ValueKind};
use ini::{Ini, ParseOption};
use serde::Deserialize;

use crate::integration::goodwe::{Language, StationConfig};

const STATION_SECTION: &str = "station";

#[derive(Debug, thiserror::Error)]
pub enum StationFileError {
    #[error("Cannot read station file: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("Cannot load station file: {0}")]
    LoadFailed(#[from] config::ConfigError),
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

// Keys may reach us lowercased depending on the loader, hence the aliases.
#[derive(Debug, Deserialize)]
struct StationSection {
    #[serde(rename = "stationId", alias = "stationid")]
    station_id: String,
    #[serde(rename = "inverterSN", alias = "invertersn")]
    inverter_sn: String,
    username: String,
    password: String,
    language: Option<String>,
}

/// INI format keeping values as written: quotes and backslashes are not interpreted.
#[derive(Debug, Clone, Copy)]
struct LiteralIni;

impl Format for LiteralIni {
    fn parse(
        &self,
        uri: Option<&String>,
        text: &str,
    ) -> Result<Map<String, Value>, Box<dyn std::error::Error + Send + Sync>> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options)?;
        let mut root = Map::new();
        for (section, properties) in ini.iter() {
            let table: Map<String, Value> = properties
                .iter()
                .map(|(key, value)| {
                    let value = Value::new(uri, ValueKind::String(value.to_string()));
                    (key.to_string(), value)
                })
                .collect();
            match section {
                Some(section) => {
                    root.insert(section.to_string(), Value::new(uri, ValueKind::Table(table)));
                }
                None => root.extend(table),
            }
        }
        Ok(root)
    }
}

impl FileStoredFormat for LiteralIni {
    fn file_extensions(&self) -> &'static [&'static str] {
        &["ini", "cfg"]
    }
}

/// Load the station configuration from the INI file at `path`.
/// A missing file or a missing required key is an error.
pub fn load_station_file(path: &Path) -> Result<StationConfig, StationFileError> {
    log::debug!("Loading station file {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let section: StationSection = Config::builder()
        .add_source(File::from_str(&text, LiteralIni))
        .build()?
        .get(STATION_SECTION)?;

    let language = section
        .language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(|language| {
            Language::from_str(language)
                .map_err(|_| StationFileError::UnsupportedLanguage(language.to_string()))
        })
        .transpose()?;

    Ok(StationConfig {
        station_id: section.station_id,
        inverter_sn: section.inverter_sn,
        username: section.username,
        password: section.password,
        language,
    })
}
