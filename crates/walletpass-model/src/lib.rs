//! Typed model for wallet pass descriptors.
//!
//! The descriptor is the JSON document that becomes `pass.json` inside a
//! pass bundle. Parsing tolerates the trailing-comma dialect found in
//! vendor-authored pass files; serialization omits unset optional fields
//! entirely to satisfy strict bundle consumers.

pub mod barcode;
pub mod datatypes;
pub mod error;
pub mod fields;
pub mod pass;
pub mod style;

// Convenience re-exports
pub use barcode::{Barcode, BarcodeFormat};
pub use datatypes::{Beacon, Location, Nfc, RelevantDate};
pub use error::ModelError;
pub use fields::{
    Alignment, DateStyle, Field, FieldValue, NumberStyle, SemanticLocation, SemanticTags,
};
pub use pass::{Pass, FORMAT_VERSION, MIN_AUTHENTICATION_TOKEN_LEN};
pub use style::{BoardingPass, FieldSet, PassStyle, TransitType};
