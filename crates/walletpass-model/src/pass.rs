//! The pass descriptor: the typed document that becomes `pass.json`.
//!
//! Wire contract: camelCase keys, unset optional fields omitted entirely
//! (never serialized as null), exactly one style key present. Parsing
//! accepts the trailing-comma dialect found in vendor-authored pass files
//! by retrying with a YAML parser when strict JSON parsing fails.

use crate::barcode::{Barcode, BarcodeFormat};
use crate::datatypes::{Beacon, Location, Nfc, RelevantDate};
use crate::error::ModelError;
use crate::style::{BoardingPass, FieldSet, PassStyle};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Version of the bundle file format. The value must be 1.
pub const FORMAT_VERSION: u32 = 1;

/// Minimum length of the web-service authentication token.
pub const MIN_AUTHENTICATION_TOKEN_LEN: usize = 16;

/// A wallet pass descriptor.
///
/// Identity fields (team/pass-type/organization/serial/description) are
/// expected to stay fixed after creation; the serial number in particular
/// identifies the pass to the web service. The remaining fields may be
/// mutated freely between signings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PassData", into = "PassData")]
pub struct Pass {
    pub team_identifier: String,
    pub pass_type_identifier: String,
    pub organization_name: String,
    pub serial_number: String,
    /// Brief description used by accessibility technologies.
    pub description: String,
    pub format_version: u32,

    // visual appearance
    /// Background color as a CSS-style RGB triple, e.g. `rgb(23, 187, 82)`.
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub label_color: Option<String>,
    pub logo_text: Option<String>,
    pub suppress_strip_shine: bool,

    /// Ordered barcode list; clients render the first one they support.
    pub barcodes: Option<Vec<Barcode>>,

    // web service
    pub web_service_url: Option<String>,
    /// Authentication token for the web service, minimum 16 characters.
    pub authentication_token: Option<String>,

    // relevance
    pub locations: Option<Vec<Location>>,
    pub ibeacons: Option<Vec<Beacon>>,
    /// ISO 8601 date-time at which the pass becomes relevant.
    pub relevant_date: Option<String>,
    pub relevant_dates: Option<Vec<RelevantDate>>,
    pub associated_store_identifiers: Option<Vec<String>>,
    pub app_launch_url: Option<String>,
    pub user_info: Option<serde_json::Value>,
    pub expiration_date: Option<String>,
    pub voided: bool,
    pub nfc: Option<Nfc>,

    style: PassStyle,
}

impl Pass {
    /// Create a descriptor with the required identity fields.
    pub fn new(
        style: PassStyle,
        organization_name: impl Into<String>,
        pass_type_identifier: impl Into<String>,
        team_identifier: impl Into<String>,
        serial_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            team_identifier: team_identifier.into(),
            pass_type_identifier: pass_type_identifier.into(),
            organization_name: organization_name.into(),
            serial_number: serial_number.into(),
            description: description.into(),
            format_version: FORMAT_VERSION,
            background_color: None,
            foreground_color: None,
            label_color: None,
            logo_text: None,
            suppress_strip_shine: false,
            barcodes: None,
            web_service_url: None,
            authentication_token: None,
            locations: None,
            ibeacons: None,
            relevant_date: None,
            relevant_dates: None,
            associated_store_identifiers: None,
            app_launch_url: None,
            user_info: None,
            expiration_date: None,
            voided: false,
            nfc: None,
            style,
        }
    }

    /// Attach web-service callback coordinates, validating the token length.
    pub fn with_web_service(
        mut self,
        url: impl Into<String>,
        authentication_token: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let token = authentication_token.into();
        if token.len() < MIN_AUTHENTICATION_TOKEN_LEN {
            return Err(ModelError::AuthenticationTokenTooShort {
                length: token.len(),
            });
        }
        self.web_service_url = Some(url.into());
        self.authentication_token = Some(token);
        Ok(self)
    }

    /// The active category payload.
    pub fn style(&self) -> &PassStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut PassStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: PassStyle) {
        self.style = style;
    }

    /// Parse a descriptor from JSON bytes.
    ///
    /// Strict JSON is tried first; on failure the document is re-parsed
    /// leniently (YAML swallows the trailing commas that vendor pass files
    /// are allowed to carry). Validation errors (style exclusivity, token
    /// length) are reported as such, never as parse errors.
    pub fn from_json(input: &[u8]) -> Result<Self, ModelError> {
        let data: PassData = match serde_json::from_slice(input) {
            Ok(data) => data,
            Err(strict_err) => {
                debug!(error = %strict_err, "strict JSON parse failed, retrying leniently");
                serde_yaml::from_slice(input).map_err(|lenient_err| ModelError::Parse {
                    message: format!("{strict_err} (lenient retry: {lenient_err})"),
                })?
            }
        };
        Self::try_from(data)
    }

    /// Serialize to the canonical JSON wire form.
    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(|err| ModelError::Serialize {
            message: err.to_string(),
        })
    }

    /// Derived single-barcode view for clients predating the barcode list.
    ///
    /// Mirrors the first entry of `barcodes`; when that entry's symbology is
    /// not renderable by legacy clients the view is rewritten to PDF417,
    /// keeping message and alt text. Recomputed on every call, never stored.
    pub fn legacy_barcode(&self) -> Option<Barcode> {
        let first = self.barcodes.as_ref()?.first()?;
        if first.format.is_legacy() {
            Some(first.clone())
        } else {
            Some(
                Barcode::new(BarcodeFormat::Pdf417, first.message.clone())
                    .with_alt_text(first.alt_text.clone()),
            )
        }
    }

    /// Replace the entire barcode list with the given single barcode
    /// (or clear it). Counterpart of [`Pass::legacy_barcode`].
    pub fn set_legacy_barcode(&mut self, barcode: Option<Barcode>) {
        self.barcodes = barcode.map(|b| vec![b]);
    }
}

/// Wire form of [`Pass`]: all style variants as optional keys plus the
/// derived legacy `barcode` member. Field order here is the serialization
/// order of `pass.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PassData {
    team_identifier: String,
    pass_type_identifier: String,
    organization_name: String,
    serial_number: String,
    description: String,
    #[serde(default = "default_format_version")]
    format_version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logo_text: Option<String>,

    /// Derived legacy view of the first list entry; accepted on input only
    /// when the list itself is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    barcode: Option<Barcode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    barcodes: Option<Vec<Barcode>>,
    #[serde(default)]
    suppress_strip_shine: bool,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "webServiceURL")]
    web_service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authentication_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ibeacons: Option<Vec<Beacon>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relevant_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relevant_dates: Option<Vec<RelevantDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    associated_store_identifiers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "appLaunchURL")]
    app_launch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_info: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiration_date: Option<String>,
    #[serde(default)]
    voided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nfc: Option<Nfc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    boarding_pass: Option<BoardingPass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coupon: Option<FieldSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_ticket: Option<FieldSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generic: Option<FieldSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    store_card: Option<FieldSet>,
}

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

impl TryFrom<PassData> for Pass {
    type Error = ModelError;

    fn try_from(data: PassData) -> Result<Self, Self::Error> {
        let mut style: Option<PassStyle> = None;
        let mut set_style = |candidate: PassStyle| -> Result<(), ModelError> {
            match &style {
                None => {
                    style = Some(candidate);
                    Ok(())
                }
                Some(existing) => Err(ModelError::MultipleStyles {
                    first: existing.key(),
                    second: candidate.key(),
                }),
            }
        };
        if let Some(boarding) = data.boarding_pass {
            set_style(PassStyle::BoardingPass(boarding))?;
        }
        if let Some(fields) = data.coupon {
            set_style(PassStyle::Coupon(fields))?;
        }
        if let Some(fields) = data.event_ticket {
            set_style(PassStyle::EventTicket(fields))?;
        }
        if let Some(fields) = data.generic {
            set_style(PassStyle::Generic(fields))?;
        }
        if let Some(fields) = data.store_card {
            set_style(PassStyle::StoreCard(fields))?;
        }
        let style = style.ok_or(ModelError::NoStyle)?;

        if let Some(token) = &data.authentication_token {
            if token.len() < MIN_AUTHENTICATION_TOKEN_LEN {
                return Err(ModelError::AuthenticationTokenTooShort {
                    length: token.len(),
                });
            }
        }

        // Legacy single-barcode documents predate the list form; adopt the
        // lone barcode as the list when no list is given.
        let barcodes = data.barcodes.or_else(|| data.barcode.map(|b| vec![b]));

        Ok(Self {
            team_identifier: data.team_identifier,
            pass_type_identifier: data.pass_type_identifier,
            organization_name: data.organization_name,
            serial_number: data.serial_number,
            description: data.description,
            format_version: data.format_version,
            background_color: data.background_color,
            foreground_color: data.foreground_color,
            label_color: data.label_color,
            logo_text: data.logo_text,
            suppress_strip_shine: data.suppress_strip_shine,
            barcodes,
            web_service_url: data.web_service_url,
            authentication_token: data.authentication_token,
            locations: data.locations,
            ibeacons: data.ibeacons,
            relevant_date: data.relevant_date,
            relevant_dates: data.relevant_dates,
            associated_store_identifiers: data.associated_store_identifiers,
            app_launch_url: data.app_launch_url,
            user_info: data.user_info,
            expiration_date: data.expiration_date,
            voided: data.voided,
            nfc: data.nfc,
            style,
        })
    }
}

impl From<Pass> for PassData {
    fn from(pass: Pass) -> Self {
        let barcode = pass.legacy_barcode();
        let (boarding_pass, coupon, event_ticket, generic, store_card) = match pass.style {
            PassStyle::BoardingPass(payload) => (Some(payload), None, None, None, None),
            PassStyle::Coupon(fields) => (None, Some(fields), None, None, None),
            PassStyle::EventTicket(fields) => (None, None, Some(fields), None, None),
            PassStyle::Generic(fields) => (None, None, None, Some(fields), None),
            PassStyle::StoreCard(fields) => (None, None, None, None, Some(fields)),
        };
        Self {
            team_identifier: pass.team_identifier,
            pass_type_identifier: pass.pass_type_identifier,
            organization_name: pass.organization_name,
            serial_number: pass.serial_number,
            description: pass.description,
            format_version: pass.format_version,
            background_color: pass.background_color,
            foreground_color: pass.foreground_color,
            label_color: pass.label_color,
            logo_text: pass.logo_text,
            barcode,
            barcodes: pass.barcodes,
            suppress_strip_shine: pass.suppress_strip_shine,
            web_service_url: pass.web_service_url,
            authentication_token: pass.authentication_token,
            locations: pass.locations,
            ibeacons: pass.ibeacons,
            relevant_date: pass.relevant_date,
            relevant_dates: pass.relevant_dates,
            associated_store_identifiers: pass.associated_store_identifiers,
            app_launch_url: pass.app_launch_url,
            user_info: pass.user_info,
            expiration_date: pass.expiration_date,
            voided: pass.voided,
            nfc: pass.nfc,
            boarding_pass,
            coupon,
            event_ticket,
            generic,
            store_card,
        }
    }
}
