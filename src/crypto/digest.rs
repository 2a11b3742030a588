//! Plain digests (SHA-256, SHA-512, MD5) and digest comparison.
//!
//! Digests are rendered as lowercase hex.  `compare_hash` validates the
//! claimed digest's shape before doing any hashing, then compares the
//! raw bytes in constant time.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha2::{Digest, Sha256, Sha512};

use super::compare::constant_time_eq;
use crate::errors::{CryptkitError, Result};

/// Hash algorithms offered for plain digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
    Md5,
}

impl HashAlgorithm {
    /// Digest size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
            HashAlgorithm::Md5 => 16,
        }
    }

    /// Length of the lowercase hex rendering.
    pub fn hex_len(self) -> usize {
        self.output_len() * 2
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Md5 => "md5",
        }
    }

    fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "md5" => Ok(HashAlgorithm::Md5),
            _ => Err(CryptkitError::UnsupportedAlgorithm(format!(
                "{s} (supported: sha256, sha512, md5)"
            ))),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the lowercase hex digest of `data`.
pub fn hash_digest(data: impl AsRef<[u8]>, algorithm: HashAlgorithm) -> String {
    hex::encode(algorithm.digest(data.as_ref()))
}

/// Check whether `hash` is the digest of `data` under `algorithm`.
///
/// `hash` must be exactly `algorithm.hex_len()` hex characters (either
/// case); anything else is an `InvalidDigest` error, not `false`.
pub fn compare_hash(data: impl AsRef<[u8]>, hash: &str, algorithm: HashAlgorithm) -> Result<bool> {
    let expected = decode_hex_digest(hash, algorithm.hex_len(), "hash")?;
    let actual = algorithm.digest(data.as_ref());

    // Lengths already agree after validation; a mismatch here is just "no match".
    Ok(constant_time_eq(&actual, &expected).unwrap_or(false))
}

/// Validate a hex-encoded digest or tag and decode it.
///
/// Shared by `compare_hash` and `verify_hmac` so both reject malformed
/// input the same way.
pub(crate) fn decode_hex_digest(value: &str, hex_len: usize, param: &'static str) -> Result<Vec<u8>> {
    if value.is_empty() {
        return Err(CryptkitError::EmptyInput(param));
    }

    if value.len() != hex_len {
        return Err(CryptkitError::InvalidDigest(format!(
            "{param} must be {hex_len} hex characters (got {})",
            value.len()
        )));
    }

    if !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptkitError::InvalidDigest(format!(
            "{param} contains non-hex characters"
        )));
    }

    hex::decode(value).map_err(|e| CryptkitError::InvalidDigest(format!("{param}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_answers() {
        assert_eq!(
            hash_digest("", HashAlgorithm::Sha256),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_digest("abc", HashAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha512_known_answer() {
        assert_eq!(
            hash_digest("abc", HashAlgorithm::Sha512),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn md5_known_answers() {
        assert_eq!(
            hash_digest("", HashAlgorithm::Md5),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hash_digest("abc", HashAlgorithm::Md5),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn digest_lengths_match_algorithm() {
        for alg in [HashAlgorithm::Sha256, HashAlgorithm::Sha512, HashAlgorithm::Md5] {
            let d = hash_digest(b"payload", alg);
            assert_eq!(d.len(), alg.hex_len());
            assert!(d.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("SHA512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert!("sha1".parse::<HashAlgorithm>().is_err());
        assert!("".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn compare_accepts_uppercase_hex() {
        let upper = hash_digest("abc", HashAlgorithm::Md5).to_uppercase();
        assert!(compare_hash("abc", &upper, HashAlgorithm::Md5).unwrap());
    }

    #[test]
    fn compare_rejects_wrong_length() {
        let short = &hash_digest("abc", HashAlgorithm::Sha256)[..63];
        let err = compare_hash("abc", short, HashAlgorithm::Sha256).unwrap_err();
        assert!(matches!(err, CryptkitError::InvalidDigest(_)));
    }

    #[test]
    fn compare_rejects_non_hex() {
        let bad = "z".repeat(32);
        let err = compare_hash("abc", &bad, HashAlgorithm::Md5).unwrap_err();
        assert!(matches!(err, CryptkitError::InvalidDigest(_)));
    }

    #[test]
    fn compare_rejects_empty_hash() {
        let err = compare_hash("abc", "", HashAlgorithm::Sha256).unwrap_err();
        assert!(matches!(err, CryptkitError::EmptyInput("hash")));
    }

    #[test]
    fn digest_from_other_algorithm_is_a_format_error() {
        // An MD5 digest has the wrong length for SHA-256.
        let md5 = hash_digest("abc", HashAlgorithm::Md5);
        assert!(compare_hash("abc", &md5, HashAlgorithm::Sha256).is_err());
    }
}
