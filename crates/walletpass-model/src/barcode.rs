//! Barcode descriptors and symbology handling.

use serde::{Deserialize, Serialize};

/// Barcode symbology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[default]
    #[serde(rename = "PKBarcodeFormatPDF417")]
    Pdf417,
    #[serde(rename = "PKBarcodeFormatQR")]
    Qr,
    #[serde(rename = "PKBarcodeFormatAztec")]
    Aztec,
    #[serde(rename = "PKBarcodeFormatCode128")]
    Code128,
}

impl BarcodeFormat {
    /// Whether clients that only understand the single legacy `barcode` key
    /// can render this symbology.
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Pdf417 | Self::Qr | Self::Aztec)
    }
}

fn default_message_encoding() -> String {
    "iso-8859-1".to_string()
}

/// A barcode displayed on the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    #[serde(default)]
    pub format: BarcodeFormat,
    /// Message or payload encoded in the barcode.
    pub message: String,
    /// Text encoding used to convert the message.
    #[serde(default = "default_message_encoding")]
    pub message_encoding: String,
    /// Text displayed near the barcode.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt_text: String,
}

impl Barcode {
    pub fn new(format: BarcodeFormat, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            message_encoding: default_message_encoding(),
            alt_text: String::new(),
        }
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_constants_match_wire_names() {
        let json = serde_json::to_value(BarcodeFormat::Code128).unwrap();
        assert_eq!(json, "PKBarcodeFormatCode128");
        let back: BarcodeFormat = serde_json::from_value(json).unwrap();
        assert_eq!(back, BarcodeFormat::Code128);
    }

    #[test]
    fn legacy_set_excludes_code128() {
        assert!(BarcodeFormat::Pdf417.is_legacy());
        assert!(BarcodeFormat::Qr.is_legacy());
        assert!(BarcodeFormat::Aztec.is_legacy());
        assert!(!BarcodeFormat::Code128.is_legacy());
    }

    #[test]
    fn defaults_fill_in_on_parse() {
        let barcode: Barcode = serde_json::from_str(r#"{"message": "test"}"#).unwrap();
        assert_eq!(barcode.format, BarcodeFormat::Pdf417);
        assert_eq!(barcode.message_encoding, "iso-8859-1");
        assert!(barcode.alt_text.is_empty());
    }
}
