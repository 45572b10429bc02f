//! Relevance value objects: locations, beacons, date intervals, NFC.

use serde::{Deserialize, Serialize};

/// A geographic location where the pass is relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude, in degrees.
    pub latitude: f64,
    /// Longitude, in degrees.
    pub longitude: f64,
    /// Altitude, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Maximum distance, in meters, from the location at which the pass
    /// is still relevant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Text displayed on the lock screen when the pass is relevant.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relevant_text: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            distance: None,
            relevant_text: String::new(),
        }
    }
}

/// A Bluetooth Low Energy beacon near which the pass is relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    /// Unique identifier of the beacon.
    #[serde(rename = "proximityUUID")]
    pub proximity_uuid: String,
    pub major: u16,
    pub minor: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relevant_text: String,
}

/// A date interval during which the pass is relevant.
///
/// Either a single `date` or a `startDate`/`endDate` pair is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevantDate {
    /// ISO 8601 date-time at which the pass becomes relevant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Value Added Services (NFC) descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nfc {
    /// Payload transmitted to the NFC terminal.
    pub message: String,
    /// Public encryption key used by the Value Added Services protocol.
    pub encryption_public_key: String,
    #[serde(default)]
    pub requires_authentication: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_omits_unset_optionals() {
        let json = serde_json::to_value(Location::new(48.1371, 11.5753)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("latitude"));
        assert!(obj.contains_key("longitude"));
    }

    #[test]
    fn beacon_uuid_wire_name() {
        let beacon = Beacon {
            proximity_uuid: "3171B7EA-C0BE-45AA-8DF7-254BC782B2C7".into(),
            major: 1,
            minor: 2,
            relevant_text: String::new(),
        };
        let json = serde_json::to_value(&beacon).unwrap();
        assert!(json.as_object().unwrap().contains_key("proximityUUID"));
        let back: Beacon = serde_json::from_value(json).unwrap();
        assert_eq!(back, beacon);
    }

    #[test]
    fn relevant_date_interval_roundtrip() {
        let interval = RelevantDate {
            start_date: Some("2026-05-27T19:30+02:00".into()),
            end_date: Some("2026-05-27T23:00+02:00".into()),
            ..RelevantDate::default()
        };
        let json = serde_json::to_string(&interval).unwrap();
        assert!(!json.contains("\"date\""));
        let back: RelevantDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
