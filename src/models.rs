//! Data Model
//!
//! Wire types shared with the Trackboard REST API. Field names follow the
//! backend's camelCase JSON contract.

use serde::{Deserialize, Serialize};

/// A tracked dataset: a named metric with optional target and date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Assigned by the API; absent in create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub symbol: String,
    /// Serialized as an explicit `null` when unset, matching the API.
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// One recorded value in a dataset's series.
///
/// Rows returned by the projection endpoints carry `projected = true` for
/// the synthetic forecast points; persisted rows omit the flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub dataset_id: i64,
    pub value: f64,
    pub label: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub projected: bool,
}

/// Payload for creating an entry. The dataset id travels in the URL path
/// and the API assigns the entry id.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub value: f64,
    pub label: String,
    pub date: Option<String>,
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_create_payload_omits_id() {
        let dataset = Dataset {
            id: None,
            name: "Weight".to_string(),
            description: String::new(),
            symbol: "kg".to_string(),
            target_value: None,
            start_date: None,
            end_date: None,
        };

        let json = serde_json::to_value(&dataset).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Weight");
        assert_eq!(json["targetValue"], serde_json::Value::Null);
        assert_eq!(json["startDate"], serde_json::Value::Null);
    }

    #[test]
    fn test_dataset_accepts_omitted_dates() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"id":7,"name":"Weight","description":"","symbol":"kg","targetValue":80.5}"#,
        )
        .unwrap();

        assert_eq!(dataset.id, Some(7));
        assert_eq!(dataset.target_value, Some(80.5));
        assert_eq!(dataset.start_date, None);
    }

    #[test]
    fn test_entry_wire_names() {
        let entry: Entry = serde_json::from_str(
            r#"{"id":1,"datasetId":7,"value":81.2,"label":"morning","date":"2025-06-15T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(entry.dataset_id, 7);
        assert!(!entry.projected);

        // Updates send the flag only when set, like the API's omitempty.
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("projected").is_none());
    }
}
