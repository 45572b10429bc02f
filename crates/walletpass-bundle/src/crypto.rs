//! Detached PKCS#7 signing and verification of manifest bytes.
//!
//! Signing wraps the manifest in a DER-encoded PKCS#7 `SignedData` envelope:
//! detached (the payload itself is omitted), SHA-256 message digest, with
//! the leaf signing certificate and the supplied WWDR intermediate embedded.
//! Signed attributes are omitted so that the output is byte-for-byte
//! reproducible for fixed inputs.
//!
//! Verification checks that the exact byte buffer was signed by the key of
//! the certificate embedded in the envelope. It deliberately does NOT
//! validate the certificate chain or any trust anchor — the pass-consuming
//! client performs its own chain validation, so the guarantee here is
//! narrower than full PKI validation.

use openssl::pkcs7::{Pkcs7, Pkcs7Flags};
use openssl::pkey::{PKey, Private};
use openssl::stack::Stack;
use openssl::x509::store::X509StoreBuilder;
use openssl::x509::X509;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Credential and signature errors.
///
/// Missing-file variants are raised before any cryptographic call, one per
/// artifact class. [`CryptoError::Verification`] is the dedicated
/// tamper/mismatch signal and is never used for parse failures.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Private key file absent at the configured path.
    #[error("private key file not found: {path}")]
    MissingPrivateKey { path: PathBuf },

    /// Leaf signing certificate file absent at the configured path.
    #[error("signing certificate file not found: {path}")]
    MissingCertificate { path: PathBuf },

    /// WWDR intermediate certificate file absent at the configured path.
    #[error("WWDR intermediate certificate file not found: {path}")]
    MissingWwdrCertificate { path: PathBuf },

    /// Credential file exists but could not be read.
    #[error("failed to read credential file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Private key material did not parse as PEM.
    #[error("invalid private key material: {message}")]
    InvalidKeyMaterial { message: String },

    /// Certificate material did not parse as PEM.
    #[error("invalid certificate material: {message}")]
    InvalidCertificate { message: String },

    /// Signature block did not decode as DER PKCS#7.
    #[error("malformed PKCS#7 signature: {message}")]
    MalformedSignature { message: String },

    /// Signature decodes but does not match the buffer.
    #[error("signature does not match the signed content")]
    Verification,

    /// Envelope construction failed.
    #[error("signing failed: {message}")]
    Signing { message: String },
}

/// Key material for signing: private key, leaf certificate, and the WWDR
/// intermediate certificate embedded alongside it.
#[derive(Debug)]
pub struct SigningCredentials {
    private_key: PKey<Private>,
    certificate: X509,
    wwdr_certificate: X509,
}

impl SigningCredentials {
    /// Parse credentials from PEM byte buffers.
    pub fn from_pem(
        private_key_pem: &[u8],
        certificate_pem: &[u8],
        wwdr_certificate_pem: &[u8],
        password: Option<&[u8]>,
    ) -> Result<Self, CryptoError> {
        let private_key = match password {
            Some(password) => PKey::private_key_from_pem_passphrase(private_key_pem, password),
            None => PKey::private_key_from_pem(private_key_pem),
        }
        .map_err(|err| CryptoError::InvalidKeyMaterial {
            message: err.to_string(),
        })?;
        let certificate =
            X509::from_pem(certificate_pem).map_err(|err| CryptoError::InvalidCertificate {
                message: err.to_string(),
            })?;
        let wwdr_certificate =
            X509::from_pem(wwdr_certificate_pem).map_err(|err| CryptoError::InvalidCertificate {
                message: err.to_string(),
            })?;
        Ok(Self {
            private_key,
            certificate,
            wwdr_certificate,
        })
    }

    /// Load credentials from PEM files.
    ///
    /// Existence of all three files is checked up front so a missing
    /// artifact fails fast, before any cryptographic operation, with an
    /// error naming the artifact class.
    pub fn load(
        private_key_path: &Path,
        certificate_path: &Path,
        wwdr_certificate_path: &Path,
        password: Option<&[u8]>,
    ) -> Result<Self, CryptoError> {
        if !private_key_path.exists() {
            return Err(CryptoError::MissingPrivateKey {
                path: private_key_path.to_path_buf(),
            });
        }
        if !certificate_path.exists() {
            return Err(CryptoError::MissingCertificate {
                path: certificate_path.to_path_buf(),
            });
        }
        if !wwdr_certificate_path.exists() {
            return Err(CryptoError::MissingWwdrCertificate {
                path: wwdr_certificate_path.to_path_buf(),
            });
        }

        let read = |path: &Path| {
            std::fs::read(path).map_err(|source| CryptoError::Read {
                path: path.to_path_buf(),
                source,
            })
        };
        let key_pem = read(private_key_path)?;
        let cert_pem = read(certificate_path)?;
        let wwdr_pem = read(wwdr_certificate_path)?;
        Self::from_pem(&key_pem, &cert_pem, &wwdr_pem, password)
    }
}

/// Sign manifest bytes, producing the DER-encoded detached envelope.
pub fn sign_manifest(
    manifest: &[u8],
    credentials: &SigningCredentials,
) -> Result<Vec<u8>, CryptoError> {
    let signing = |err: openssl::error::ErrorStack| CryptoError::Signing {
        message: err.to_string(),
    };

    let mut chain = Stack::new().map_err(signing)?;
    chain
        .push(credentials.wwdr_certificate.clone())
        .map_err(signing)?;

    // NOATTR keeps the envelope free of a signing-time attribute, making the
    // output reproducible for fixed inputs.
    let flags = Pkcs7Flags::DETACHED | Pkcs7Flags::BINARY | Pkcs7Flags::NOATTR;
    let envelope = Pkcs7::sign(
        &credentials.certificate,
        &credentials.private_key,
        &chain,
        manifest,
        flags,
    )
    .map_err(signing)?;

    let der = envelope.to_der().map_err(signing)?;
    debug!(manifest_len = manifest.len(), signature_len = der.len(), "signed manifest");
    Ok(der)
}

/// Verify manifest bytes against a detached signature block.
///
/// Checks structural decode plus cryptographic integrity only: the embedded
/// signer certificate is used as-is and no chain/trust validation happens.
pub fn verify_manifest(manifest: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
    let envelope = Pkcs7::from_der(signature).map_err(|err| CryptoError::MalformedSignature {
        message: err.to_string(),
    })?;

    let certificates = Stack::new().map_err(|err| CryptoError::MalformedSignature {
        message: err.to_string(),
    })?;
    let empty_store = X509StoreBuilder::new()
        .map_err(|err| CryptoError::MalformedSignature {
            message: err.to_string(),
        })?
        .build();

    // NOVERIFY skips signer-certificate chain validation against the store;
    // the signature itself is still checked against the buffer.
    envelope
        .verify(
            &certificates,
            &empty_store,
            Some(manifest),
            None,
            Pkcs7Flags::NOVERIFY | Pkcs7Flags::BINARY,
        )
        .map_err(|_| CryptoError::Verification)?;

    debug!(manifest_len = manifest.len(), "verified manifest signature");
    Ok(())
}
