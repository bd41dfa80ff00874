//! GoodWe Portal Schemas
//! The schemas module defines the data structures exchanged with the portal backend.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};

/// Portal user interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Language {
    #[strum(serialize = "en-US")]
    EnUs,
    #[strum(serialize = "zh-CN")]
    ZhCn,
    #[strum(serialize = "ko-KR")]
    KoKr,
    #[strum(serialize = "it-IT")]
    ItIt,
    #[strum(serialize = "cs-CZ")]
    CsCz,
}

/// Identifiers and credentials of the power station a session is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct StationConfig {
    pub station_id: String,
    pub inverter_sn: String,
    pub username: String,
    pub password: String,
    pub language: Option<Language>,
}

/// Body of the history export request.
#[derive(Debug, Serialize, PartialEq)]
pub struct ExportQuery<'a> {
    #[serde(rename = "QueryType")]
    pub query_type: u8,
    #[serde(rename = "DateFrom")]
    pub date_from: &'a str,
    #[serde(rename = "ID")]
    pub id: &'a str,
    // The portal spells it this way.
    #[serde(rename = "InventerSN")]
    pub inventer_sn: &'a str,
}

/// Export result flag.
/// The portal sends it as the JSON strings `"true"` or `"false"`, never as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ExportStatus {
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
}

/// Where a generated history report can be downloaded from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportDescriptor {
    pub result: ExportStatus,
    #[serde(rename = "downloadFilePath")]
    pub download_file_path: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

impl ExportDescriptor {
    /// Returns `true` if the portal reports the export as generated.
    pub fn is_ready(&self) -> bool {
        self.result == ExportStatus::True
    }
}

/// One realtime dashboard metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealtimeMetric {
    pub value: String,
    pub unit: String,
}

/// Realtime metrics keyed by metric name.
pub type RealtimeData = HashMap<String, RealtimeMetric>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_export_query_serialization() {
        let query = ExportQuery {
            query_type: 0,
            date_from: "2016-06-01",
            id: "123",
            inventer_sn: "SN1",
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({"QueryType": 0, "DateFrom": "2016-06-01", "ID": "123", "InventerSN": "SN1"})
        );
    }

    #[test]
    fn test_descriptor_ready() {
        let descriptor: ExportDescriptor = serde_json::from_str(
            r#"{"result":"true","downloadFilePath":"/tmp/x","fileName":"june.xlsx","extra":1}"#,
        )
        .unwrap();
        assert!(descriptor.is_ready());
        assert_eq!(descriptor.download_file_path.as_deref(), Some("/tmp/x"));
        assert_eq!(descriptor.file_name.as_deref(), Some("june.xlsx"));
    }

    #[test]
    fn test_descriptor_failed_without_location() {
        let descriptor: ExportDescriptor = serde_json::from_str(r#"{"result":"false"}"#).unwrap();
        assert!(!descriptor.is_ready());
        assert_eq!(descriptor.result, ExportStatus::False);
        assert_eq!(descriptor.file_name, None);
    }

    #[test]
    fn test_descriptor_rejects_boolean_result() {
        let result = serde_json::from_str::<ExportDescriptor>(r#"{"result":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor_rejects_unknown_result() {
        for body in [r#"{"result":"True"}"#, r#"{"result":"yes"}"#, r#"{}"#] {
            assert!(
                serde_json::from_str::<ExportDescriptor>(body).is_err(),
                "{body} should not decode"
            );
        }
    }

    #[test]
    fn test_language_from_str_and_display() {
        let pairs = [
            ("en-US", Language::EnUs),
            ("zh-CN", Language::ZhCn),
            ("ko-KR", Language::KoKr),
            ("it-IT", Language::ItIt),
            ("cs-CZ", Language::CsCz),
        ];
        for (s, expected) in pairs.iter() {
            let parsed = Language::from_str(s).unwrap();
            assert_eq!(&parsed, expected);
            assert_eq!(parsed.to_string(), *s);
        }
    }

    #[test]
    fn test_language_from_str_invalid() {
        assert!(Language::from_str("de-DE").is_err());
        assert!(Language::from_str("en").is_err());
    }

    #[test]
    fn test_realtime_metric_serialization() {
        let metric = RealtimeMetric {
            value: "3.21".into(),
            unit: "kW".into(),
        };
        assert_eq!(
            serde_json::to_value(&metric).unwrap(),
            json!({"value": "3.21", "unit": "kW"})
        );
    }
}
