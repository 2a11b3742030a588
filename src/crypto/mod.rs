//! Cryptographic primitives for cryptkit.
//!
//! This module provides:
//! - AES-256-GCM passphrase encryption and decryption (`cipher`, `envelope`)
//! - scrypt passphrase-based key derivation (`kdf`, `keys`)
//! - HMAC-SHA256 / HMAC-SHA512 tags (`mac`)
//! - SHA-256 / SHA-512 / MD5 digests (`digest`)
//! - Constant-time comparison (`compare`)

pub mod cipher;
pub mod compare;
pub mod digest;
pub mod envelope;
pub mod kdf;
pub mod keys;
pub mod mac;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_hmac, ...};
pub use cipher::{decrypt, decrypt_bytes_with, decrypt_with, encrypt, encrypt_with};
pub use compare::constant_time_eq;
pub use digest::{compare_hash, hash_digest, HashAlgorithm};
pub use envelope::Envelope;
pub use kdf::{derive_key, KeyDeriver, Scrypt, ScryptParams};
pub use keys::SymmetricKey;
pub use mac::{generate_hmac, verify_hmac, MacAlgorithm};
