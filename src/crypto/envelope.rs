//! The ciphertext envelope string.
//!
//! Wire format (three standard-base64 segments joined by `:`):
//!
//! ```text
//! base64(iv):base64(auth_tag):base64(ciphertext)
//! ```
//!
//! - **iv**: 16 random bytes, fresh per encryption.
//! - **auth_tag**: 16-byte GCM tag.
//! - **ciphertext**: raw AES-256-GCM output, same length as the plaintext.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{CryptkitError, Result};

/// Size of the GCM initialization vector in bytes.
pub const IV_LEN: usize = 16;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Separator between envelope segments.
const SEPARATOR: char = ':';

/// A parsed envelope.  Parsing performs all format validation, so an
/// `Envelope` value always has correctly sized IV and tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(iv: [u8; IV_LEN], tag: [u8; TAG_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            iv,
            tag,
            ciphertext,
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            BASE64.encode(self.iv),
            BASE64.encode(self.tag),
            BASE64.encode(&self.ciphertext)
        )
    }
}

impl FromStr for Envelope {
    type Err = CryptkitError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let [iv_b64, tag_b64, ct_b64] = parts.as_slice() else {
            return Err(CryptkitError::InvalidEnvelope(format!(
                "expected 3 ':'-separated segments, got {}",
                parts.len()
            )));
        };

        let iv = decode_segment(iv_b64, "iv")?;
        let tag = decode_segment(tag_b64, "auth tag")?;
        let ciphertext = decode_segment(ct_b64, "ciphertext")?;

        let iv: [u8; IV_LEN] = iv.try_into().map_err(|v: Vec<u8>| {
            CryptkitError::InvalidEnvelope(format!("iv must be {IV_LEN} bytes, got {}", v.len()))
        })?;
        let tag: [u8; TAG_LEN] = tag.try_into().map_err(|v: Vec<u8>| {
            CryptkitError::InvalidEnvelope(format!(
                "auth tag must be {TAG_LEN} bytes, got {}",
                v.len()
            ))
        })?;

        Ok(Envelope::new(iv, tag, ciphertext))
    }
}

fn decode_segment(segment: &str, name: &str) -> Result<Vec<u8>> {
    if segment.is_empty() {
        return Err(CryptkitError::InvalidEnvelope(format!("{name} segment is empty")));
    }

    BASE64
        .decode(segment)
        .map_err(|e| CryptkitError::InvalidEnvelope(format!("{name} is not valid base64: {e}")))
}
