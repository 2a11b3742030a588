use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::{HashAlgorithm, MacAlgorithm, ScryptParams};
use crate::errors::{CryptkitError, Result};

/// Project-level configuration, loaded from `.cryptkit.toml`.
///
/// Every field has a default so cryptkit works without any config file.
/// The scrypt costs must match whatever produced the envelopes you want
/// to decrypt; the defaults are the wire-compatible ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HMAC algorithm used when `--algorithm` is omitted.
    #[serde(default = "default_mac_algorithm")]
    pub default_mac_algorithm: String,

    /// Digest algorithm used when `--algorithm` is omitted.
    #[serde(default = "default_hash_algorithm")]
    pub default_hash_algorithm: String,

    /// scrypt log2(N) (default: 14).
    #[serde(default = "default_scrypt_log_n")]
    pub scrypt_log_n: u8,

    /// scrypt block size (default: 8).
    #[serde(default = "default_scrypt_r")]
    pub scrypt_r: u32,

    /// scrypt parallelism (default: 1).
    #[serde(default = "default_scrypt_p")]
    pub scrypt_p: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_mac_algorithm() -> String {
    "sha256".to_string()
}

fn default_hash_algorithm() -> String {
    "sha256".to_string()
}

fn default_scrypt_log_n() -> u8 {
    14
}

fn default_scrypt_r() -> u32 {
    8
}

fn default_scrypt_p() -> u32 {
    1
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_mac_algorithm: default_mac_algorithm(),
            default_hash_algorithm: default_hash_algorithm(),
            scrypt_log_n: default_scrypt_log_n(),
            scrypt_r: default_scrypt_r(),
            scrypt_p: default_scrypt_p(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".cryptkit.toml";

    /// Load settings from `<project_dir>/.cryptkit.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CryptkitError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Convert the scrypt settings into crypto-layer params.
    pub fn scrypt_params(&self) -> ScryptParams {
        ScryptParams {
            log_n: self.scrypt_log_n,
            r: self.scrypt_r,
            p: self.scrypt_p,
        }
    }

    /// Resolve the HMAC algorithm: an explicit name wins over the configured default.
    pub fn mac_algorithm(&self, explicit: Option<&str>) -> Result<MacAlgorithm> {
        explicit.unwrap_or(self.default_mac_algorithm.as_str()).parse()
    }

    /// Resolve the digest algorithm: an explicit name wins over the configured default.
    pub fn hash_algorithm(&self, explicit: Option<&str>) -> Result<HashAlgorithm> {
        explicit.unwrap_or(self.default_hash_algorithm.as_str()).parse()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
