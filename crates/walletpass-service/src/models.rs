//! Wire models exchanged with the pass web service endpoints.

use serde::{Deserialize, Serialize};

/// Push notification token for a registered pass on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PushToken {
    pub push_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_library_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_type_identifier: Option<String>,
}

impl PushToken {
    pub fn new(push_token: impl Into<String>) -> Self {
        Self {
            push_token: push_token.into(),
            device_library_identifier: None,
            pass_type_identifier: None,
        }
    }
}

/// Serial numbers of the updatable passes on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialNumbers {
    pub serial_numbers: Vec<String>,
    /// Developer-defined tag indicating the modification time of the
    /// returned passes; echoed back on the next poll.
    pub last_updated: String,
}

/// A batch of log messages posted by a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntries {
    #[serde(default)]
    pub logs: Vec<String>,
}

/// User-entered information for a personalized pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredPersonalizationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "ISOCountryCode"
    )]
    pub iso_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Personalization request for a signup-enabled pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalizationDictionary {
    /// Token the server must sign and return.
    pub personalization_token: String,
    pub required_personalization_info: RequiredPersonalizationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_token_rejects_unknown_keys() {
        let err = serde_json::from_str::<PushToken>(
            r#"{"pushToken": "abc", "unexpected": true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn push_token_minimal_form() {
        let token: PushToken = serde_json::from_str(r#"{"pushToken": "abc"}"#).unwrap();
        assert_eq!(token, PushToken::new("abc"));
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn serial_numbers_wire_names() {
        let serials = SerialNumbers {
            serial_numbers: vec!["0000001".into()],
            last_updated: "2026-08-06T12:00:00Z".into(),
        };
        let json = serde_json::to_value(&serials).unwrap();
        assert!(json.as_object().unwrap().contains_key("serialNumbers"));
        assert!(json.as_object().unwrap().contains_key("lastUpdated"));
    }

    #[test]
    fn log_entries_default_to_empty() {
        let entries: LogEntries = serde_json::from_str("{}").unwrap();
        assert!(entries.logs.is_empty());
    }

    #[test]
    fn personalization_iso_country_code_wire_name() {
        let info: RequiredPersonalizationInfo =
            serde_json::from_str(r#"{"ISOCountryCode": "DE", "givenName": "Jane"}"#).unwrap();
        assert_eq!(info.iso_country_code.as_deref(), Some("DE"));
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("ISOCountryCode"));
    }
}
