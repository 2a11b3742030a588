//! HMAC-SHA256 / HMAC-SHA512 generation and verification.
//!
//! Tags are lowercase hex.  `verify_hmac` treats a malformed tag as an
//! error and a well-formed but wrong tag as `Ok(false)`.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use super::compare::constant_time_eq;
use super::digest::decode_hex_digest;
use crate::errors::{CryptkitError, Result};

/// Hash functions offered for HMAC.  MD5 is deliberately absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl MacAlgorithm {
    /// Tag size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            MacAlgorithm::Sha256 => 32,
            MacAlgorithm::Sha512 => 64,
        }
    }

    /// Length of the lowercase hex rendering.
    pub fn hex_len(self) -> usize {
        self.output_len() * 2
    }

    pub fn name(self) -> &'static str {
        match self {
            MacAlgorithm::Sha256 => "sha256",
            MacAlgorithm::Sha512 => "sha512",
        }
    }
}

impl FromStr for MacAlgorithm {
    type Err = CryptkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(MacAlgorithm::Sha256),
            "sha512" => Ok(MacAlgorithm::Sha512),
            _ => Err(CryptkitError::UnsupportedAlgorithm(format!(
                "{s} (supported for HMAC: sha256, sha512)"
            ))),
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the raw HMAC bytes of `data` under `secret`.
fn compute_hmac(data: &[u8], secret: &[u8], algorithm: MacAlgorithm) -> Result<Vec<u8>> {
    let tag = match algorithm {
        MacAlgorithm::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret)
                .map_err(|e| CryptkitError::HmacError(format!("HMAC init failed: {e}")))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        MacAlgorithm::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret)
                .map_err(|e| CryptkitError::HmacError(format!("HMAC init failed: {e}")))?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    };

    Ok(tag)
}

/// Generate a lowercase hex HMAC tag for `data`.
///
/// `data` may be empty; `secret` may not.
pub fn generate_hmac(
    data: impl AsRef<[u8]>,
    secret: &str,
    algorithm: MacAlgorithm,
) -> Result<String> {
    if secret.is_empty() {
        return Err(CryptkitError::EmptyInput("secret"));
    }

    let tag = compute_hmac(data.as_ref(), secret.as_bytes(), algorithm)?;
    Ok(hex::encode(tag))
}

/// Verify a hex HMAC tag for `data`.
///
/// The tag is validated (non-empty, exact hex length, hex-only) before
/// anything is computed.  Returns `Ok(false)` on mismatch.
pub fn verify_hmac(
    data: impl AsRef<[u8]>,
    secret: &str,
    tag: &str,
    algorithm: MacAlgorithm,
) -> Result<bool> {
    if secret.is_empty() {
        return Err(CryptkitError::EmptyInput("secret"));
    }
    let expected = decode_hex_digest(tag, algorithm.hex_len(), "tag")?;

    let actual = compute_hmac(data.as_ref(), secret.as_bytes(), algorithm)?;

    Ok(constant_time_eq(&actual, &expected).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2.
    const RFC_KEY: &str = "Jefe";
    const RFC_DATA: &str = "what do ya want for nothing?";

    #[test]
    fn rfc4231_sha256() {
        assert_eq!(
            generate_hmac(RFC_DATA, RFC_KEY, MacAlgorithm::Sha256).unwrap(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn rfc4231_sha512() {
        assert_eq!(
            generate_hmac(RFC_DATA, RFC_KEY, MacAlgorithm::Sha512).unwrap(),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn default_algorithm_is_sha256() {
        assert_eq!(MacAlgorithm::default(), MacAlgorithm::Sha256);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = generate_hmac("data", "", MacAlgorithm::Sha256).unwrap_err();
        assert!(matches!(err, CryptkitError::EmptyInput("secret")));

        let err = verify_hmac("data", "", &"0".repeat(64), MacAlgorithm::Sha256).unwrap_err();
        assert!(matches!(err, CryptkitError::EmptyInput("secret")));
    }

    #[test]
    fn empty_data_is_allowed() {
        let tag = generate_hmac("", "k", MacAlgorithm::Sha256).unwrap();
        assert!(verify_hmac("", "k", &tag, MacAlgorithm::Sha256).unwrap());
    }

    #[test]
    fn md5_is_not_a_mac_algorithm() {
        let err = "md5".parse::<MacAlgorithm>().unwrap_err();
        assert!(matches!(err, CryptkitError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn verify_rejects_empty_tag() {
        let err = verify_hmac("data", "k", "", MacAlgorithm::Sha256).unwrap_err();
        assert!(matches!(err, CryptkitError::EmptyInput("tag")));
    }

    #[test]
    fn verify_rejects_sha256_tag_for_sha512() {
        let tag = generate_hmac("data", "k", MacAlgorithm::Sha256).unwrap();
        let err = verify_hmac("data", "k", &tag, MacAlgorithm::Sha512).unwrap_err();
        assert!(matches!(err, CryptkitError::InvalidDigest(_)));
    }

    #[test]
    fn verify_with_wrong_secret_is_false() {
        let tag = generate_hmac("data", "secret-a", MacAlgorithm::Sha512).unwrap();
        assert!(!verify_hmac("data", "secret-b", &tag, MacAlgorithm::Sha512).unwrap());
    }
}
