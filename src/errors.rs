use thiserror::Error;

/// All errors that can occur in cryptkit.
#[derive(Debug, Error)]
pub enum CryptkitError {
    // --- Input validation ---
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("{param} has the wrong type — expected {expected}, received {received}")]
    InvalidType {
        param: &'static str,
        expected: &'static str,
        received: &'static str,
    },

    #[error("Unsupported algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("Invalid envelope format: {0}")]
    InvalidEnvelope(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch { left: usize, right: usize },

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong passphrase or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("HMAC error: {0}")]
    HmacError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Broad category of a [`CryptkitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument had the wrong type.
    Type,
    /// Empty input, malformed envelope/digest, or unknown algorithm.
    Value,
    /// Authentication or decryption failure.
    Crypto,
    /// Unexpected failure inside a primitive, or a config/CLI problem.
    Internal,
    Io,
}

impl CryptkitError {
    /// Classify this error so callers can branch on the category
    /// instead of matching every variant.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptkitError::InvalidType { .. } => ErrorKind::Type,
            CryptkitError::EmptyInput(_)
            | CryptkitError::UnsupportedAlgorithm(_)
            | CryptkitError::InvalidEnvelope(_)
            | CryptkitError::InvalidDigest(_)
            | CryptkitError::LengthMismatch { .. } => ErrorKind::Value,
            CryptkitError::DecryptionFailed => ErrorKind::Crypto,
            CryptkitError::EncryptionFailed(_)
            | CryptkitError::KeyDerivationFailed(_)
            | CryptkitError::HmacError(_)
            | CryptkitError::ConfigError(_)
            | CryptkitError::CommandFailed(_) => ErrorKind::Internal,
            CryptkitError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for cryptkit results.
pub type Result<T> = std::result::Result<T, CryptkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(CryptkitError::EmptyInput("passphrase").kind(), ErrorKind::Value);
        assert_eq!(
            CryptkitError::InvalidEnvelope("x".into()).kind(),
            ErrorKind::Value
        );
        assert_eq!(
            CryptkitError::InvalidType {
                param: "plaintext",
                expected: "UTF-8 string",
                received: "non-UTF-8 bytes"
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(CryptkitError::DecryptionFailed.kind(), ErrorKind::Crypto);
    }

    #[test]
    fn empty_input_names_parameter() {
        let e = CryptkitError::EmptyInput("secret");
        assert_eq!(e.to_string(), "secret must not be empty");
    }

    #[test]
    fn invalid_type_names_parameter_and_received_type() {
        let e = CryptkitError::InvalidType {
            param: "plaintext",
            expected: "UTF-8 string",
            received: "non-UTF-8 bytes",
        };
        let msg = e.to_string();
        assert!(msg.contains("plaintext"));
        assert!(msg.contains("received non-UTF-8 bytes"));
    }

    #[test]
    fn decryption_failed_message_is_fixed() {
        assert_eq!(
            CryptkitError::DecryptionFailed.to_string(),
            "Decryption failed — wrong passphrase or corrupted data"
        );
    }
}
