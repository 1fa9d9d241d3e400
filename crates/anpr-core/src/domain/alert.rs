//! Alert payload extraction.
//!
//! Alerts arrive as loosely-shaped JSON. Every field is pulled out on its
//! own, so a missing path only empties that one field.

use serde_json::Value;

use super::derived::normalize_make_model;
use crate::error::RelayError;

/// GPS value the ANPR agent sends when it has no fix.
const NO_GPS: &str = "-1";

/// The fields of an ANPR alert the relay cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertPayload {
    pub plate: Option<String>,
    pub epoch_start_ms: Option<i64>,
    pub camera_id: Option<String>,
    pub camera_name: Option<String>,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
    pub confidence: Option<String>,
    pub uuid: Option<String>,
    pub region: Option<String>,
    pub vehicle_crop_jpeg: Option<String>,
    /// Normalized, e.g. `HONDA JAZZ`.
    pub make_model: Option<String>,
    pub make_model_confidence: Option<String>,
    pub alert_list: Option<String>,
    pub alert_list_id: Option<String>,
    pub description: Option<String>,
}

impl AlertPayload {
    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        let doc: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::MalformedInput(e.to_string()))?;
        Ok(Self::from_value(&doc))
    }

    /// Project the known fields out of an already parsed document.
    pub fn from_value(doc: &Value) -> Self {
        Self {
            plate: text_at(doc, "/group/best_plate_number"),
            epoch_start_ms: millis_at(doc, "/group/epoch_start"),
            camera_id: text_at(doc, "/group/camera_id"),
            camera_name: text_at(doc, "/camera_name"),
            gps_latitude: text_at(doc, "/group/gps_latitude"),
            gps_longitude: text_at(doc, "/group/gps_longitude"),
            confidence: text_at(doc, "/group/best_confidence"),
            uuid: text_at(doc, "/group/best_uuid"),
            region: text_at(doc, "/group/best_region"),
            vehicle_crop_jpeg: text_at(doc, "/group/vehicle_crop_jpeg"),
            make_model: text_at(doc, "/group/vehicle/make_model/0/name")
                .map(|name| normalize_make_model(&name)),
            make_model_confidence: text_at(doc, "/group/vehicle/make_model/0/confidence"),
            alert_list: text_at(doc, "/alert_list"),
            alert_list_id: text_at(doc, "/alert_list_id"),
            description: text_at(doc, "/description"),
        }
    }

    /// Plate number, treating an empty string as absent.
    pub fn plate(&self) -> Option<&str> {
        self.plate.as_deref().filter(|p| !p.is_empty())
    }

    /// Latitude and longitude, unless the agent reported no fix.
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let lat = self.gps_latitude.as_deref()?;
        let lon = self.gps_longitude.as_deref()?;
        if lat == NO_GPS || lon == NO_GPS {
            return None;
        }
        Some((lat, lon))
    }
}

/// Scalar at `pointer` as text. Numbers and bools are stringified; null,
/// arrays and objects count as absent.
fn text_at(doc: &Value, pointer: &str) -> Option<String> {
    match doc.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn millis_at(doc: &Value, pointer: &str) -> Option<i64> {
    match doc.pointer(pointer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "camera_name": "Front Gate",
            "alert_list": "Stolen Vehicles",
            "alert_list_id": 4821,
            "description": "Reported stolen 12/03",
            "group": {
                "best_plate_number": "ABC123",
                "epoch_start": 1609459200000_i64,
                "camera_id": 1102,
                "gps_latitude": "-27.4698",
                "gps_longitude": "153.0251",
                "best_confidence": 91.35,
                "best_uuid": "abc-uuid",
                "best_region": "au-qld",
                "vehicle_crop_jpeg": "aGVsbG8=",
                "vehicle": {
                    "make_model": [
                        {"name": "honda_jazz", "confidence": 87.2},
                        {"name": "toyota_yaris", "confidence": 4.1}
                    ]
                }
            }
        })
    }

    #[test]
    fn test_extracts_all_fields() {
        let alert = AlertPayload::from_value(&sample());

        assert_eq!(alert.plate(), Some("ABC123"));
        assert_eq!(alert.epoch_start_ms, Some(1609459200000));
        assert_eq!(alert.camera_id.as_deref(), Some("1102"));
        assert_eq!(alert.camera_name.as_deref(), Some("Front Gate"));
        assert_eq!(alert.confidence.as_deref(), Some("91.35"));
        assert_eq!(alert.region.as_deref(), Some("au-qld"));
        assert_eq!(alert.make_model.as_deref(), Some("HONDA JAZZ"));
        assert_eq!(alert.make_model_confidence.as_deref(), Some("87.2"));
        assert_eq!(alert.alert_list_id.as_deref(), Some("4821"));
        assert_eq!(alert.coordinates(), Some(("-27.4698", "153.0251")));
    }

    #[test]
    fn test_missing_paths_only_empty_their_field() {
        let alert = AlertPayload::from_value(&json!({
            "camera_name": "Side Lane",
            "group": {"best_plate_number": "XYZ789"}
        }));

        assert_eq!(alert.plate(), Some("XYZ789"));
        assert_eq!(alert.camera_name.as_deref(), Some("Side Lane"));
        assert_eq!(alert.epoch_start_ms, None);
        assert_eq!(alert.make_model, None);
        assert_eq!(alert.make_model_confidence, None);
        assert_eq!(alert.vehicle_crop_jpeg, None);
    }

    #[test]
    fn test_non_object_document_is_all_absent() {
        assert_eq!(AlertPayload::from_value(&json!([1, 2, 3])), AlertPayload::default());
        assert_eq!(AlertPayload::from_value(&Value::Null), AlertPayload::default());
    }

    #[test]
    fn test_empty_plate_is_absent() {
        let alert = AlertPayload::from_value(&json!({"group": {"best_plate_number": ""}}));
        assert_eq!(alert.plate, Some(String::new()));
        assert_eq!(alert.plate(), None);
    }

    #[test]
    fn test_epoch_accepts_numeric_string() {
        let alert = AlertPayload::from_value(&json!({"group": {"epoch_start": "1609459200000"}}));
        assert_eq!(alert.epoch_start_ms, Some(1609459200000));

        let alert = AlertPayload::from_value(&json!({"group": {"epoch_start": "soon"}}));
        assert_eq!(alert.epoch_start_ms, None);
    }

    #[test]
    fn test_gps_sentinel_means_no_fix() {
        let alert = AlertPayload::from_value(&json!({
            "group": {"gps_latitude": "-1", "gps_longitude": "-1"}
        }));
        assert_eq!(alert.gps_latitude.as_deref(), Some("-1"));
        assert_eq!(alert.coordinates(), None);
    }

    #[test]
    fn test_malformed_body() {
        let err = AlertPayload::from_slice(b"{\"group\": ").unwrap_err();
        assert!(matches!(err, RelayError::MalformedInput(_)));
    }
}
