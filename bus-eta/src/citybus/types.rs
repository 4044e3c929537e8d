//! Citybus API response DTOs.
//!
//! The API omits fields freely, so every record field is optional and
//! read through an accessor that falls back to [`PLACEHOLDER`].

use serde::{Deserialize, Deserializer};

/// Shown in place of any field the API left out.
pub const PLACEHOLDER: &str = "N/A";

/// Envelope returned by both ETA endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtaResponse {
    /// ETA records. Absent when the API has nothing to report.
    pub data: Option<Vec<EtaRecord>>,
}

impl EtaResponse {
    /// Records in the response, empty when `data` is missing.
    pub fn records(&self) -> &[EtaRecord] {
        self.data.as_deref().unwrap_or_default()
    }
}

/// A single bus arrival estimate.
///
/// Scalar values of any JSON type are accepted and kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EtaRecord {
    #[serde(deserialize_with = "scalar_text")]
    pub route: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub stop: Option<String>,
    /// Direction code, "I" (inbound) or "O" (outbound).
    #[serde(deserialize_with = "scalar_text")]
    pub dir: Option<String>,
    /// ISO 8601 timestamp, possibly empty when no bus is scheduled.
    #[serde(deserialize_with = "scalar_text")]
    pub eta: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub dest_en: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub dest_tc: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub rmk_en: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub rmk_tc: Option<String>,
}

impl EtaRecord {
    pub fn route(&self) -> &str {
        self.route.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn stop(&self) -> &str {
        self.stop.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn eta(&self) -> &str {
        self.eta.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// English destination name, if given and non-empty.
    pub fn destination(&self) -> Option<&str> {
        non_empty(&self.dest_en)
    }

    /// Traditional Chinese destination name, if given and non-empty.
    pub fn destination_tc(&self) -> Option<&str> {
        non_empty(&self.dest_tc)
    }

    /// English remark, if given and non-empty.
    pub fn remark(&self) -> Option<&str> {
        non_empty(&self.rmk_en)
    }

    /// Traditional Chinese remark, if given and non-empty.
    pub fn remark_tc(&self) -> Option<&str> {
        non_empty(&self.rmk_tc)
    }
}

/// Envelope of the route endpoint; `data` is `{}` for unknown routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteResponse {
    pub data: Option<RouteInfo>,
}

/// Summary of one route as returned by `/route/{co}/{route}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteInfo {
    #[serde(deserialize_with = "scalar_text")]
    pub co: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub route: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub orig_en: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub orig_tc: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub dest_en: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub dest_tc: Option<String>,
}

impl RouteInfo {
    /// Whether the API actually described a route.
    pub fn exists(&self) -> bool {
        non_empty(&self.route).is_some()
    }
}

/// Envelope of the route-stop endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteStopResponse {
    pub data: Option<Vec<RouteStop>>,
}

/// One stop on a route, in calling order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteStop {
    #[serde(deserialize_with = "scalar_text")]
    pub route: Option<String>,
    /// Direction code, "I" (inbound) or "O" (outbound).
    #[serde(deserialize_with = "scalar_text")]
    pub dir: Option<String>,
    /// Position along the route; the API sends a number or a string.
    #[serde(deserialize_with = "scalar_text")]
    pub seq: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub stop: Option<String>,
}

/// Envelope of the stop directory endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopResponse {
    pub data: Option<Vec<StopInfo>>,
}

/// Name of a physical stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StopInfo {
    #[serde(deserialize_with = "scalar_text")]
    pub stop: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub name_en: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub name_tc: Option<String>,
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let json = r#"{
            "co": "CTB",
            "route": "10",
            "dir": "O",
            "seq": 3,
            "stop": "001032",
            "dest_en": "North Point Ferry Pier",
            "eta": "2024-01-01T10:05:00+08:00",
            "rmk_en": "Scheduled Bus",
            "data_timestamp": "2024-01-01T10:00:00+08:00"
        }"#;

        let record: EtaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.route(), "10");
        assert_eq!(record.stop(), "001032");
        assert_eq!(record.dir(), "O");
        assert_eq!(record.eta(), "2024-01-01T10:05:00+08:00");
        assert_eq!(record.destination(), Some("North Point Ferry Pier"));
        assert_eq!(record.remark(), Some("Scheduled Bus"));
    }

    #[test]
    fn missing_fields_use_placeholder() {
        let record: EtaRecord = serde_json::from_str(r#"{"route": "10"}"#).unwrap();
        assert_eq!(record.route(), "10");
        assert_eq!(record.stop(), PLACEHOLDER);
        assert_eq!(record.dir(), PLACEHOLDER);
        assert_eq!(record.eta(), PLACEHOLDER);
        assert_eq!(record.destination(), None);
        assert_eq!(record.remark(), None);
    }

    #[test]
    fn null_is_missing() {
        let record: EtaRecord = serde_json::from_str(r#"{"eta": null}"#).unwrap();
        assert_eq!(record.eta(), PLACEHOLDER);
    }

    #[test]
    fn non_string_scalars_kept_as_text() {
        let record: EtaRecord = serde_json::from_str(r#"{"route": 10, "stop": true}"#).unwrap();
        assert_eq!(record.route(), "10");
        assert_eq!(record.stop(), "true");
    }

    #[test]
    fn empty_remark_is_hidden() {
        let record: EtaRecord = serde_json::from_str(r#"{"rmk_en": ""}"#).unwrap();
        assert_eq!(record.remark(), None);
    }

    #[test]
    fn chinese_destination_and_remark() {
        let record: EtaRecord =
            serde_json::from_str(r#"{"dest_tc": "堅尼地城", "rmk_tc": "尾班車", "rmk_en": ""}"#)
                .unwrap();
        assert_eq!(record.destination(), None);
        assert_eq!(record.destination_tc(), Some("堅尼地城"));
        assert_eq!(record.remark(), None);
        assert_eq!(record.remark_tc(), Some("尾班車"));
    }

    #[test]
    fn unknown_route_is_empty_object() {
        let response: RouteResponse = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(!response.data.unwrap().exists());

        let response: RouteResponse = serde_json::from_str(
            r#"{"data": {"co": "CTB", "route": "10", "orig_en": "North Point", "dest_en": "Kennedy Town"}}"#,
        )
        .unwrap();
        let info = response.data.unwrap();
        assert!(info.exists());
        assert_eq!(info.dest_en.as_deref(), Some("Kennedy Town"));
    }

    #[test]
    fn route_stop_seq_accepts_numbers() {
        let response: RouteStopResponse = serde_json::from_str(
            r#"{"data": [{"co": "CTB", "route": "10", "dir": "O", "seq": 1, "stop": "001032"}]}"#,
        )
        .unwrap();
        let stops = response.data.unwrap();
        assert_eq!(stops[0].seq.as_deref(), Some("1"));
        assert_eq!(stops[0].stop.as_deref(), Some("001032"));
    }

    #[test]
    fn envelope_without_data() {
        let response: EtaResponse =
            serde_json::from_str(r#"{"type": "ETA", "version": "2.0"}"#).unwrap();
        assert!(response.data.is_none());
        assert!(response.records().is_empty());
    }

    #[test]
    fn envelope_with_records() {
        let response: EtaResponse =
            serde_json::from_str(r#"{"data": [{"route": "10"}, {"route": "11"}]}"#).unwrap();
        assert_eq!(response.records().len(), 2);
        assert_eq!(response.records()[1].route(), "11");
    }
}
