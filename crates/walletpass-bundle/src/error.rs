//! Error types for bundle assembly and verification.

use crate::crypto::CryptoError;

/// Bundle errors.
///
/// Four classes flow through this type: structural (malformed container or
/// descriptor), credential and verification (via [`CryptoError`]), and usage
/// (precondition violations such as verifying an unsigned bundle). None of
/// them is retryable.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Container lacks the required `pass.json` member.
    #[error("bundle is missing the required 'pass.json' member")]
    MissingPassJson,

    /// Operation requires a descriptor but none is set.
    #[error("bundle has no descriptor set")]
    NoDescriptor,

    /// Verify called on a bundle without a `signature` member.
    #[error("cannot verify an unsigned bundle")]
    NotSigned,

    /// Stored-manifest verify requested but no `manifest.json` member exists.
    #[error("bundle has no manifest member to verify against")]
    MissingManifest,

    /// Both an inline document and a file source were given.
    #[error("only one of 'data' and 'file' may be provided")]
    AmbiguousSource,

    /// Descriptor parse or validation failure.
    #[error(transparent)]
    Model(#[from] walletpass_model::ModelError),

    /// Credential or signature failure.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Zip container failure.
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Manifest (de)serialization failure.
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
