//! Field entries for the five display collections of a pass style.

use serde::{Deserialize, Serialize};

/// Text alignment for a field's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "PKTextAlignmentLeft")]
    Left,
    #[serde(rename = "PKTextAlignmentCenter")]
    Center,
    #[serde(rename = "PKTextAlignmentRight")]
    Right,
    #[serde(rename = "PKTextAlignmentJustified")]
    Justified,
    #[serde(rename = "PKTextAlignmentNatural")]
    Natural,
}

/// Display style for date and time components of a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStyle {
    #[serde(rename = "PKDateStyleNone")]
    None,
    #[serde(rename = "PKDateStyleShort")]
    Short,
    #[serde(rename = "PKDateStyleMedium")]
    Medium,
    #[serde(rename = "PKDateStyleLong")]
    Long,
    #[serde(rename = "PKDateStyleFull")]
    Full,
}

/// Display style for a number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberStyle {
    #[serde(rename = "PKNumberStyleDecimal")]
    Decimal,
    #[serde(rename = "PKNumberStylePercent")]
    Percent,
    #[serde(rename = "PKNumberStyleScientific")]
    Scientific,
    #[serde(rename = "PKNumberStyleSpellOut")]
    SpellOut,
}

/// Field value: string, integer, or float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Geographic coordinate carried inside a semantic tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Machine-readable metadata attached to a field.
///
/// Subset of the vendor semantic-tag vocabulary covering event passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_location: Option<SemanticLocation>,
}

/// A single entry in one of a pass style's field collections.
///
/// The key must be unique within its collection. Date, number and currency
/// specializations are expressed through the optional style members; a plain
/// text field leaves them unset and they are omitted from the wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Format string for the alert shown when the pass is updated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub change_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<Alignment>,

    // date field extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_style: Option<DateStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_relative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignores_time_zone: Option<bool>,

    // number field extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_style: Option<NumberStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<SemanticTags>,
}

impl Field {
    /// Create a plain text field.
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: String::new(),
            change_message: String::new(),
            text_alignment: None,
            date_style: None,
            time_style: None,
            is_relative: None,
            ignores_time_zone: None,
            number_style: None,
            currency_code: None,
            semantics: None,
        }
    }

    /// Create a date field with short date and time styles.
    pub fn date(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            date_style: Some(DateStyle::Short),
            time_style: Some(DateStyle::Short),
            ..Self::new(key, value)
        }
    }

    /// Create a decimal number field.
    pub fn number(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            number_style: Some(NumberStyle::Decimal),
            ..Self::new(key, value)
        }
    }

    /// Create a currency field.
    pub fn currency(
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            currency_code: Some(currency_code.into()),
            ..Self::new(key, value)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_change_message(mut self, change_message: impl Into<String>) -> Self {
        self.change_message = change_message.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    pub fn with_semantics(mut self, semantics: SemanticTags) -> Self {
        self.semantics = Some(semantics);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_field_omits_unset_members() {
        let field = Field::new("balance", "25 EUR").with_label("Balance");
        let json = serde_json::to_value(&field).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["key"], "balance");
        assert_eq!(obj["value"], "25 EUR");
        assert_eq!(obj["label"], "Balance");
    }

    #[test]
    fn field_value_variants_roundtrip() {
        for (value, expected) in [
            (FieldValue::from("text"), serde_json::json!("text")),
            (FieldValue::from(42i64), serde_json::json!(42)),
            (FieldValue::from(1.5f64), serde_json::json!(1.5)),
        ] {
            let json = serde_json::to_value(&value).unwrap();
            assert_eq!(json, expected);
            let back: FieldValue = serde_json::from_value(json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn date_field_carries_styles() {
        let field = Field::date("eventdate", "2026-05-27T19:30+02:00");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["dateStyle"], "PKDateStyleShort");
        assert_eq!(json["timeStyle"], "PKDateStyleShort");
    }

    #[test]
    fn semantic_tags_roundtrip() {
        let field = Field::new("title", "Gala Dinner").with_semantics(SemanticTags {
            event_start_date: Some("2026-05-27T19:30+02:00".into()),
            venue_name: Some("Hofbräuhaus München".into()),
            venue_location: Some(SemanticLocation {
                latitude: 48.1371,
                longitude: 11.5753,
            }),
            ..SemanticTags::default()
        });
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
        assert!(json.contains("venueLocation"));
        assert!(!json.contains("venueAddress"));
    }
}
