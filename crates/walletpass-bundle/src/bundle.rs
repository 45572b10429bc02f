//! The pass bundle: a zip container of descriptor, assets, manifest, and
//! signature.
//!
//! Lifecycle: construct fresh (or unpack a zip), add assets, sign, package.
//! `pass.json` is a derived member — the descriptor is serialized into the
//! member map at manifest/package time, so descriptor mutations are picked
//! up by the next sign or recomputing verify. A bundle is signed exactly
//! when a `signature` member is present; signing is idempotent and always
//! recomputes manifest and signature from current member state.

use crate::crypto::{self, SigningCredentials};
use crate::error::BundleError;
use crate::manifest;
use std::collections::BTreeMap;
use std::io::{Read, Seek, Write};
use tracing::debug;
use walletpass_model::Pass;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Member name of the serialized descriptor.
pub const PASS_JSON: &str = "pass.json";

/// Member name of the digest manifest.
pub const MANIFEST_JSON: &str = "manifest.json";

/// Member name of the detached signature block.
pub const SIGNATURE: &str = "signature";

/// A pass bundle: one descriptor plus named byte members.
///
/// The bundle exclusively owns its member buffers and its descriptor;
/// instances are independent, so separate bundles may be built, signed, and
/// verified concurrently without coordination.
#[derive(Debug, Default)]
pub struct PassBundle {
    pass: Option<Pass>,
    files: BTreeMap<String, Vec<u8>>,
}

impl PassBundle {
    /// Bundle owning the given descriptor, no members yet.
    pub fn new(pass: Pass) -> Self {
        Self {
            pass: Some(pass),
            files: BTreeMap::new(),
        }
    }

    /// Bundle with neither descriptor nor members (draft workflows).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The descriptor, or a usage error when none is set.
    pub fn descriptor(&self) -> Result<&Pass, BundleError> {
        self.pass.as_ref().ok_or(BundleError::NoDescriptor)
    }

    pub fn descriptor_mut(&mut self) -> Result<&mut Pass, BundleError> {
        self.pass.as_mut().ok_or(BundleError::NoDescriptor)
    }

    pub fn set_descriptor(&mut self, pass: Pass) {
        self.pass = Some(pass);
    }

    /// Add (or replace) a named binary member.
    pub fn add_file(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), data.into());
    }

    /// A member's bytes, if present.
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// All members, ordered by name.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(n, d)| (n.as_str(), d.as_slice()))
    }

    /// A bundle is signed exactly when a `signature` member is present.
    pub fn is_signed(&self) -> bool {
        self.files.contains_key(SIGNATURE)
    }

    /// Serialize the descriptor into the `pass.json` member and compute the
    /// manifest over all current members.
    ///
    /// The computed manifest is returned but not stored; [`PassBundle::sign`]
    /// stores it. An existing `manifest.json` member steers key order (see
    /// [`manifest::build`]).
    pub fn create_manifest(&mut self) -> Result<Vec<u8>, BundleError> {
        let pass_json = self.descriptor()?.to_json()?.into_bytes();
        self.files.insert(PASS_JSON.to_string(), pass_json);
        let previous = self.files.get(MANIFEST_JSON).cloned();
        manifest::build(
            self.files.iter().map(|(n, d)| (n.as_str(), d.as_slice())),
            previous.as_deref(),
        )
    }

    /// Recompute the manifest and attach a fresh detached signature.
    ///
    /// Repeatable: every call re-serializes the descriptor, recomputes the
    /// manifest, and replaces both members.
    pub fn sign(&mut self, credentials: &SigningCredentials) -> Result<(), BundleError> {
        let manifest = self.create_manifest()?;
        let signature = crypto::sign_manifest(&manifest, credentials)?;
        self.files.insert(MANIFEST_JSON.to_string(), manifest);
        self.files.insert(SIGNATURE.to_string(), signature);
        debug!(members = self.files.len(), "bundle signed");
        Ok(())
    }

    /// Verify the stored signature.
    ///
    /// With `recompute_manifest` the manifest is rebuilt from current member
    /// state first, so descriptor or asset mutations since signing surface
    /// as a verification failure; otherwise the stored `manifest.json` bytes
    /// are verified verbatim. Verifying an unsigned bundle is a usage error,
    /// not a crypto failure.
    pub fn verify(&mut self, recompute_manifest: bool) -> Result<(), BundleError> {
        if !self.is_signed() {
            return Err(BundleError::NotSigned);
        }
        let manifest = if recompute_manifest {
            self.create_manifest()?
        } else {
            self.files
                .get(MANIFEST_JSON)
                .cloned()
                .ok_or(BundleError::MissingManifest)?
        };
        let signature = self.files.get(SIGNATURE).ok_or(BundleError::NotSigned)?;
        crypto::verify_manifest(&manifest, signature)?;
        Ok(())
    }

    /// Write the bundle as a zip stream.
    ///
    /// `pass.json` is materialized from the descriptor when absent; members
    /// are written in map iteration order (consumers read by name).
    pub fn write_to<W: Write + Seek>(&mut self, writer: W) -> Result<(), BundleError> {
        if !self.files.contains_key(PASS_JSON) {
            let pass_json = self.descriptor()?.to_json()?.into_bytes();
            self.files.insert(PASS_JSON.to_string(), pass_json);
        }
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, data) in &self.files {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(data)?;
        }
        zip.finish()?;
        Ok(())
    }

    /// The bundle as zip bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, BundleError> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        self.write_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Unpack a bundle from a zip stream.
    ///
    /// Requires a `pass.json` member; every other member — including a
    /// pre-existing manifest and signature — is loaded verbatim, modelling
    /// "load an already-signed vendor pass, inspect or re-sign it".
    pub fn read_from<R: Read + Seek>(reader: R) -> Result<Self, BundleError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = BTreeMap::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            files.insert(name, data);
        }

        let pass_json = files.get(PASS_JSON).ok_or(BundleError::MissingPassJson)?;
        let pass = Pass::from_json(pass_json)?;
        debug!(members = files.len(), "bundle unpacked");
        Ok(Self {
            pass: Some(pass),
            files,
        })
    }
}
