//! Static configuration: credential locations and web-service coordinates.
//!
//! Values come from defaults relative to a root directory, overridable one
//! by one through `WALLETPASS_`-prefixed environment variables. Path
//! defaults cascade: overriding `cert_dir` moves every credential default
//! along with it.

use std::path::PathBuf;
use tracing::debug;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "WALLETPASS_";

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Environment variable carries an unparsable value.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Static settings for signing and the surrounding web service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root_dir: PathBuf,
    /// Directory holding certificates and keys.
    pub cert_dir: PathBuf,
    /// Private key in PEM format.
    pub private_key: PathBuf,
    /// Pass signing certificate in PEM format.
    pub certificate: PathBuf,
    /// WWDR intermediate certificate in PEM format.
    pub wwdr_certificate: PathBuf,
    pub https_port: u16,
    pub domain: String,
    /// Passphrase of the private key, when encrypted.
    pub password: Option<String>,
    pub pass_type_identifier: Option<String>,
    pub team_identifier: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let root_dir = PathBuf::from(".");
        let cert_dir = root_dir.join("certs");
        Self {
            private_key: cert_dir.join("private.key"),
            certificate: cert_dir.join("certificate.pem"),
            wwdr_certificate: cert_dir.join("wwdr_certificate.pem"),
            root_dir,
            cert_dir,
            https_port: 443,
            domain: "localhost".to_string(),
            password: None,
            pass_type_identifier: None,
            team_identifier: None,
        }
    }
}

fn env(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{name}")).ok()
}

impl Settings {
    /// Build settings from the environment over the cascading defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        let root_dir = env("ROOT_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
        let cert_dir = env("CERT_DIR").map_or_else(|| root_dir.join("certs"), PathBuf::from);

        let https_port = match env("HTTPS_PORT") {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                var: format!("{ENV_PREFIX}HTTPS_PORT"),
                message: format!("not a port number: {raw}"),
            })?,
            None => 443,
        };

        let settings = Self {
            private_key: env("PRIVATE_KEY")
                .map_or_else(|| cert_dir.join("private.key"), PathBuf::from),
            certificate: env("CERTIFICATE")
                .map_or_else(|| cert_dir.join("certificate.pem"), PathBuf::from),
            wwdr_certificate: env("WWDR_CERTIFICATE")
                .map_or_else(|| cert_dir.join("wwdr_certificate.pem"), PathBuf::from),
            root_dir,
            cert_dir,
            https_port,
            domain: env("DOMAIN").unwrap_or_else(|| "localhost".to_string()),
            password: env("PASSWORD"),
            pass_type_identifier: env("PASS_TYPE_IDENTIFIER"),
            team_identifier: env("TEAM_IDENTIFIER"),
        };
        debug!(cert_dir = %settings.cert_dir.display(), "settings loaded from environment");
        Ok(settings)
    }

    /// Path of the signing certificate for a specific pass type.
    pub fn certificate_path_for(&self, pass_type_identifier: &str) -> PathBuf {
        self.cert_dir
            .join(format!("certificate-{pass_type_identifier}.pem"))
    }

    /// Pass type identifiers with a per-type certificate in `cert_dir`.
    pub fn available_pass_type_ids(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.cert_dir) else {
            return Vec::new();
        };
        let mut ids: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                let id = name
                    .strip_prefix("certificate-")?
                    .strip_suffix(".pem")?
                    .to_string();
                (!id.is_empty()).then_some(id)
            })
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    // from_env reads process-global state; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_cascade_from_root() {
        let settings = Settings::default();
        assert_eq!(settings.cert_dir, Path::new("./certs"));
        assert_eq!(settings.private_key, Path::new("./certs/private.key"));
        assert_eq!(
            settings.wwdr_certificate,
            Path::new("./certs/wwdr_certificate.pem")
        );
        assert_eq!(settings.https_port, 443);
        assert_eq!(settings.domain, "localhost");
    }

    #[test]
    fn env_overrides_cascade() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("WALLETPASS_CERT_DIR", "/etc/walletpass");
        std::env::set_var("WALLETPASS_DOMAIN", "wallet.example.com");
        let settings = Settings::from_env().unwrap();
        std::env::remove_var("WALLETPASS_CERT_DIR");
        std::env::remove_var("WALLETPASS_DOMAIN");

        assert_eq!(settings.cert_dir, Path::new("/etc/walletpass"));
        assert_eq!(
            settings.private_key,
            Path::new("/etc/walletpass/private.key")
        );
        assert_eq!(settings.domain, "wallet.example.com");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("WALLETPASS_HTTPS_PORT", "not-a-port");
        let err = Settings::from_env().unwrap_err();
        std::env::remove_var("WALLETPASS_HTTPS_PORT");
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn per_pass_type_certificate_paths() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            cert_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        std::fs::write(
            settings.certificate_path_for("pass.com.example.a"),
            b"cert",
        )
        .unwrap();
        std::fs::write(
            settings.certificate_path_for("pass.com.example.b"),
            b"cert",
        )
        .unwrap();
        std::fs::write(dir.path().join("unrelated.pem"), b"x").unwrap();

        assert_eq!(
            settings.available_pass_type_ids(),
            vec!["pass.com.example.a", "pass.com.example.b"]
        );
    }

    #[test]
    fn missing_cert_dir_yields_no_ids() {
        let settings = Settings {
            cert_dir: PathBuf::from("/nonexistent/walletpass-test"),
            ..Settings::default()
        };
        assert!(settings.available_pass_type_ids().is_empty());
    }
}
