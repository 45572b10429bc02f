//! Top-level pass lifecycle operations.
//!
//! Thin orchestration over [`PassBundle`]: create from a document or an
//! existing `.pkpass` stream, sign with configured credentials, verify, and
//! package back to zip bytes.

use crate::bundle::PassBundle;
use crate::crypto::SigningCredentials;
use crate::error::BundleError;
use crate::settings::Settings;
use std::io::{Read, Seek};
use walletpass_model::Pass;

/// Create a pass bundle.
///
/// Exactly one of `data` (a descriptor document) or `file` (an existing
/// bundle zip) may be given; giving both is a usage error, giving neither
/// yields an empty draft bundle.
pub fn new<R: Read + Seek>(
    data: Option<serde_json::Value>,
    file: Option<R>,
) -> Result<PassBundle, BundleError> {
    match (data, file) {
        (Some(_), Some(_)) => Err(BundleError::AmbiguousSource),
        (Some(document), None) => {
            let pass = Pass::from_json(&serde_json::to_vec(&document)?)?;
            Ok(PassBundle::new(pass))
        }
        (None, Some(file)) => PassBundle::read_from(file),
        (None, None) => Ok(PassBundle::empty()),
    }
}

/// Sign the bundle in place with the credentials named in `settings`.
pub fn sign(bundle: &mut PassBundle, settings: &Settings) -> Result<(), BundleError> {
    let credentials = SigningCredentials::load(
        &settings.private_key,
        &settings.certificate,
        &settings.wwdr_certificate,
        settings.password.as_deref().map(str::as_bytes),
    )?;
    bundle.sign(&credentials)
}

/// Verify the bundle's signature.
pub fn verify(bundle: &mut PassBundle, recompute_manifest: bool) -> Result<(), BundleError> {
    bundle.verify(recompute_manifest)
}

/// Package the bundle as `.pkpass` zip bytes.
pub fn to_pkpass(bundle: &mut PassBundle) -> Result<Vec<u8>, BundleError> {
    bundle.to_bytes()
}
