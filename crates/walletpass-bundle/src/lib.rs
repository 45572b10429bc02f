//! Pass bundle construction, signing, and verification.
//!
//! A bundle is a zip container holding the descriptor (`pass.json`),
//! arbitrary binary assets, a manifest of SHA-1 content digests
//! (`manifest.json`), and a detached PKCS#7 signature over the manifest
//! bytes (`signature`). The manifest is the object actually signed;
//! verifying a bundle means verifying the manifest bytes against the
//! stored signature block.

pub mod api;
pub mod bundle;
pub mod crypto;
pub mod error;
pub mod manifest;
pub mod settings;

// Convenience re-exports
pub use bundle::{PassBundle, MANIFEST_JSON, PASS_JSON, SIGNATURE};
pub use crypto::{sign_manifest, verify_manifest, CryptoError, SigningCredentials};
pub use error::BundleError;
pub use settings::{Settings, SettingsError};
