//! Error types for descriptor parsing and validation.

use crate::pass::MIN_AUTHENTICATION_TOKEN_LEN;

/// Descriptor model errors.
///
/// All variants are structural: they signal an invalid document, never a
/// transient condition, so none of them is retryable.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Document is not valid JSON, even after the lenient retry.
    #[error("invalid pass JSON: {message}")]
    Parse { message: String },

    /// Descriptor serialization failed.
    #[error("pass serialization failed: {message}")]
    Serialize { message: String },

    /// No pass style key present in the document.
    #[error(
        "no pass style set: exactly one of boardingPass, coupon, eventTicket, \
         generic, storeCard is required"
    )]
    NoStyle,

    /// More than one pass style key present in the document.
    #[error("multiple pass styles set: {first} and {second} are mutually exclusive")]
    MultipleStyles {
        first: &'static str,
        second: &'static str,
    },

    /// Web-service authentication token below the minimum length.
    #[error(
        "authenticationToken must be at least {MIN_AUTHENTICATION_TOKEN_LEN} characters, \
         got {length}"
    )]
    AuthenticationTokenTooShort { length: usize },
}
