//! AES-256-GCM passphrase encryption.
//!
//! Every call derives the key afresh from the passphrase, draws a new
//! 16-byte IV and produces a self-contained [`Envelope`] string.  Nothing
//! is cached between calls.
//!
//! `encrypt_with` / `decrypt_with` take the KDF and RNG as parameters so
//! tests can substitute cheap or deterministic implementations; `encrypt`
//! and `decrypt` use scrypt with default costs and the thread-local CSPRNG.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;
use rand::{CryptoRng, RngCore};

use super::envelope::{Envelope, IV_LEN, TAG_LEN};
use super::kdf::{KeyDeriver, Scrypt};
use super::keys::SymmetricKey;
use crate::errors::{CryptkitError, Result};

/// AES-256-GCM with a 128-bit nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypt `plaintext` under `passphrase` and return the envelope string.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    encrypt_with(&Scrypt::default(), &mut rand::rng(), plaintext, passphrase)
}

/// Decrypt an envelope produced by [`encrypt`].
pub fn decrypt(envelope: &str, passphrase: &str) -> Result<String> {
    decrypt_with(&Scrypt::default(), envelope, passphrase)
}

/// Encrypt with an explicit key deriver and random source.
pub fn encrypt_with<K, R>(kdf: &K, rng: &mut R, plaintext: &str, passphrase: &str) -> Result<String>
where
    K: KeyDeriver + ?Sized,
    R: RngCore + CryptoRng + ?Sized,
{
    if plaintext.is_empty() {
        return Err(CryptkitError::EmptyInput("plaintext"));
    }
    if passphrase.is_empty() {
        return Err(CryptkitError::EmptyInput("passphrase"));
    }

    let key = kdf.derive_key(passphrase.as_bytes())?;

    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    let envelope = seal(&key, iv, plaintext.as_bytes())?;
    Ok(envelope.to_string())
}

/// Decrypt with an explicit key deriver, returning UTF-8 text.
pub fn decrypt_with<K>(kdf: &K, envelope: &str, passphrase: &str) -> Result<String>
where
    K: KeyDeriver + ?Sized,
{
    let plaintext = decrypt_bytes_with(kdf, envelope, passphrase)?;

    String::from_utf8(plaintext).map_err(|_| CryptkitError::InvalidType {
        param: "plaintext",
        expected: "UTF-8 string",
        received: "non-UTF-8 bytes",
    })
}

/// Decrypt with an explicit key deriver, returning raw bytes.
///
/// All format checks happen before the key is derived, so malformed
/// input never pays the KDF cost.
pub fn decrypt_bytes_with<K>(kdf: &K, envelope: &str, passphrase: &str) -> Result<Vec<u8>>
where
    K: KeyDeriver + ?Sized,
{
    if envelope.is_empty() {
        return Err(CryptkitError::EmptyInput("envelope"));
    }
    if passphrase.is_empty() {
        return Err(CryptkitError::EmptyInput("passphrase"));
    }

    let envelope: Envelope = envelope.parse()?;
    let key = kdf.derive_key(passphrase.as_bytes())?;

    open(&key, &envelope)
}

/// Run AES-256-GCM over `plaintext` with a detached tag.
fn seal(key: &SymmetricKey, iv: [u8; IV_LEN], plaintext: &[u8]) -> Result<Envelope> {
    let cipher = Aes256Gcm16::new_from_slice(key.as_bytes())
        .map_err(|e| CryptkitError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&iv), b"", &mut buffer)
        .map_err(|e| CryptkitError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok(Envelope::new(iv, tag_bytes, buffer))
}

/// Verify the tag and decrypt.  Every failure collapses to
/// `DecryptionFailed` with the same message.
fn open(key: &SymmetricKey, envelope: &Envelope) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm16::new_from_slice(key.as_bytes()).map_err(|_| CryptkitError::DecryptionFailed)?;

    let mut buffer = envelope.ciphertext.clone();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&envelope.iv),
            b"",
            &mut buffer,
            GenericArray::from_slice(&envelope.tag),
        )
        .map_err(|_| CryptkitError::DecryptionFailed)?;

    Ok(buffer)
}
