//! Passphrase-based key derivation using scrypt.
//!
//! scrypt is memory-hard, which makes offline passphrase guessing far
//! more expensive than a single hash pass.  The salt is a fixed constant:
//! envelopes carry no salt field, so the same passphrase must always map
//! to the same key for `decrypt` to work.

use scrypt::Params;

use super::keys::{SymmetricKey, KEY_LEN};
use crate::errors::{CryptkitError, Result};

/// Salt shared by every derivation.  Changing it breaks every existing
/// envelope.
pub const FIXED_SALT: &[u8] = b"salt";

/// Minimum accepted `log_n` (N = 1024).
const MIN_LOG_N: u8 = 10;

/// Maximum accepted `log_n` (N = 2^20, 1 GiB of memory at r = 8).
const MAX_LOG_N: u8 = 20;

/// Maximum accepted block size.
const MAX_R: u32 = 32;

/// Maximum accepted parallelism.
const MAX_P: u32 = 16;

/// scrypt cost parameters.
///
/// The defaults (N = 2^14, r = 8, p = 1) are the ones existing envelopes
/// were produced with.  Any other values derive different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptParams {
    /// log2 of the CPU/memory cost N (default: 14).
    pub log_n: u8,
    /// Block size (default: 8).
    pub r: u32,
    /// Parallelism (default: 1).
    pub p: u32,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
        }
    }
}

impl ScryptParams {
    /// Reject dangerously weak parameters, and ones so large that scrypt
    /// would try to allocate more memory than any host has.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LOG_N..=MAX_LOG_N).contains(&self.log_n) {
            return Err(CryptkitError::KeyDerivationFailed(format!(
                "scrypt log_n must be between {MIN_LOG_N} and {MAX_LOG_N} (got {})",
                self.log_n
            )));
        }
        if !(1..=MAX_R).contains(&self.r) {
            return Err(CryptkitError::KeyDerivationFailed(format!(
                "scrypt r must be between 1 and {MAX_R} (got {})",
                self.r
            )));
        }
        if !(1..=MAX_P).contains(&self.p) {
            return Err(CryptkitError::KeyDerivationFailed(format!(
                "scrypt p must be between 1 and {MAX_P} (got {})",
                self.p
            )));
        }
        Ok(())
    }
}

/// Something that turns a passphrase into a symmetric key.
///
/// Implementations must be deterministic.
pub trait KeyDeriver {
    fn derive_key(&self, passphrase: &[u8]) -> Result<SymmetricKey>;
}

/// The scrypt [`KeyDeriver`] with the fixed salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scrypt {
    params: ScryptParams,
}

impl Scrypt {
    pub fn new(params: ScryptParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScryptParams {
        &self.params
    }
}

impl KeyDeriver for Scrypt {
    fn derive_key(&self, passphrase: &[u8]) -> Result<SymmetricKey> {
        derive_key(passphrase, &self.params)
    }
}

/// Derive a 32-byte key from `passphrase` and the fixed salt.
///
/// The same passphrase + params will always produce the same key.
pub fn derive_key(passphrase: &[u8], params: &ScryptParams) -> Result<SymmetricKey> {
    params.validate()?;

    let scrypt_params = Params::new(params.log_n, params.r, params.p, KEY_LEN)
        .map_err(|e| CryptkitError::KeyDerivationFailed(format!("invalid scrypt params: {e}")))?;

    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(passphrase, FIXED_SALT, &scrypt_params, &mut key)
        .map_err(|e| CryptkitError::KeyDerivationFailed(format!("scrypt failed: {e}")))?;

    Ok(SymmetricKey::new(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> ScryptParams {
        ScryptParams {
            log_n: MIN_LOG_N,
            r: 8,
            p: 1,
        }
    }

    #[test]
    fn same_passphrase_same_key() {
        let k1 = derive_key(b"passphrase", &fast()).unwrap();
        let k2 = derive_key(b"passphrase", &fast()).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_passphrases_different_keys() {
        let k1 = derive_key(b"passphrase-one", &fast()).unwrap();
        let k2 = derive_key(b"passphrase-two", &fast()).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_costs_different_keys() {
        let cheap = derive_key(b"passphrase", &fast()).unwrap();
        let other = derive_key(
            b"passphrase",
            &ScryptParams {
                log_n: MIN_LOG_N + 1,
                ..fast()
            },
        )
        .unwrap();
        assert_ne!(cheap.as_bytes(), other.as_bytes());
    }

    #[test]
    fn weak_params_rejected() {
        let weak = ScryptParams { log_n: 4, r: 8, p: 1 };
        assert!(derive_key(b"pw", &weak).is_err());

        let zero_r = ScryptParams { r: 0, ..fast() };
        assert!(zero_r.validate().is_err());

        let zero_p = ScryptParams { p: 0, ..fast() };
        assert!(zero_p.validate().is_err());
    }

    #[test]
    fn oversized_params_rejected_without_allocating() {
        let huge = ScryptParams {
            log_n: 40,
            ..fast()
        };
        let err = derive_key(b"pw", &huge).unwrap_err();
        assert!(matches!(err, CryptkitError::KeyDerivationFailed(_)));

        assert!(ScryptParams { log_n: MAX_LOG_N, ..fast() }.validate().is_ok());
        assert!(ScryptParams { log_n: MAX_LOG_N + 1, ..fast() }.validate().is_err());
        assert!(ScryptParams { r: MAX_R + 1, ..fast() }.validate().is_err());
        assert!(ScryptParams { p: MAX_P + 1, ..fast() }.validate().is_err());
    }

    #[test]
    fn trait_matches_free_function() {
        let kdf = Scrypt::new(fast());
        let via_trait = kdf.derive_key(b"pw").unwrap();
        let via_fn = derive_key(b"pw", &fast()).unwrap();
        assert_eq!(via_trait.as_bytes(), via_fn.as_bytes());
    }

    #[test]
    fn defaults_match_wire_compatible_costs() {
        assert_eq!(
            ScryptParams::default(),
            ScryptParams {
                log_n: 14,
                r: 8,
                p: 1
            }
        );
        assert!(ScryptParams::default().validate().is_ok());
    }
}
