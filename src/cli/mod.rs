//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CryptkitError, Result};

/// Environment variable consulted for the passphrase before prompting.
pub const PASSPHRASE_ENV: &str = "CRYPTKIT_PASSPHRASE";

/// Environment variable consulted for the HMAC secret.
pub const SECRET_ENV: &str = "CRYPTKIT_SECRET";

/// cryptkit CLI: passphrase encryption, HMAC and digest toolkit.
#[derive(Parser)]
#[command(
    name = "cryptkit",
    about = "Passphrase encryption, HMAC and digest toolkit",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing .cryptkit.toml (default: current directory)
    #[arg(long, default_value = ".", global = true)]
    pub config_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt text into an iv:tag:ciphertext envelope
    Encrypt {
        /// Text to encrypt (reads stdin if omitted)
        text: Option<String>,

        /// Passphrase (falls back to CRYPTKIT_PASSPHRASE, then a prompt)
        #[arg(short, long)]
        passphrase: Option<String>,
    },

    /// Decrypt an envelope produced by `encrypt`
    Decrypt {
        /// Envelope string (reads stdin if omitted)
        envelope: Option<String>,

        /// Passphrase (falls back to CRYPTKIT_PASSPHRASE, then a prompt)
        #[arg(short, long)]
        passphrase: Option<String>,
    },

    /// Generate an HMAC tag
    Hmac {
        /// Data to authenticate (reads stdin if omitted)
        data: Option<String>,

        /// Shared secret (falls back to CRYPTKIT_SECRET)
        #[arg(short, long)]
        secret: Option<String>,

        /// sha256 or sha512 (default from config: sha256)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Verify an HMAC tag (exit code 1 on mismatch)
    VerifyHmac {
        /// Data that was authenticated (reads stdin if omitted)
        data: Option<String>,

        /// Shared secret (falls back to CRYPTKIT_SECRET)
        #[arg(short, long)]
        secret: Option<String>,

        /// Hex tag to check
        #[arg(short, long)]
        tag: String,

        /// sha256 or sha512 (default from config: sha256)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Print the digest of some data
    Digest {
        /// Data to hash (reads stdin if omitted)
        data: Option<String>,

        /// sha256, sha512 or md5 (default from config: sha256)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Hash the contents of this file instead
        #[arg(short, long, conflicts_with = "data")]
        file: Option<String>,
    },

    /// Check data against a hex digest (exit code 1 on mismatch)
    CompareHash {
        /// Data to hash (reads stdin if omitted)
        data: Option<String>,

        /// Expected hex digest
        #[arg(long)]
        hash: String,

        /// sha256, sha512 or md5 (default from config: sha256)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Hash the contents of this file instead
        #[arg(short, long, conflicts_with = "data")]
        file: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.cryptkit.toml` from the directory given by `--config-dir`.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(Path::new(&cli.config_dir))
}

/// Get the passphrase, trying in order:
/// 1. `--passphrase` on the command line (with a warning)
/// 2. `CRYPTKIT_PASSPHRASE` env var (CI/CD)
/// 3. Interactive prompt, with confirmation when `confirm` is set
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn resolve_passphrase(explicit: Option<&str>, confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(pw) = explicit {
        output::warning("Passphrase provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(pw.to_string()));
    }

    if let Ok(pw) = std::env::var(PASSPHRASE_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Enter passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match, try again");
    }
    let pw = prompt
        .interact()
        .map_err(|e| CryptkitError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get the HMAC secret, trying in order:
/// 1. `--secret` on the command line (with a warning)
/// 2. `CRYPTKIT_SECRET` env var
///
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn resolve_secret(explicit: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(secret) = explicit {
        output::warning("Secret provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(secret.to_string()));
    }

    match std::env::var(SECRET_ENV) {
        Ok(secret) if !secret.is_empty() => Ok(Zeroizing::new(secret)),
        _ => Err(CryptkitError::CommandFailed(format!(
            "no secret given — pass --secret or set {SECRET_ENV}"
        ))),
    }
}

/// Resolve a text argument: the inline value if given, otherwise piped
/// stdin with the trailing newline removed.
pub fn read_text(value: Option<&str>, what: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.to_string());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CryptkitError::CommandFailed(format!(
            "no {what} given — pass it as an argument or pipe it on stdin"
        )));
    }

    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolve raw data bytes: a file, the inline value, or piped stdin
/// (taken verbatim, no newline trimming).
pub fn read_data(value: Option<&str>, file: Option<&str>) -> Result<Vec<u8>> {
    if let Some(path) = file {
        return Ok(std::fs::read(path)?);
    }
    if let Some(v) = value {
        return Ok(v.as_bytes().to_vec());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CryptkitError::CommandFailed(
            "no data given — pass it as an argument, use --file, or pipe it on stdin".into(),
        ));
    }

    let mut buf = Vec::new();
    stdin.lock().read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_encrypt_with_passphrase() {
        let cli = Cli::try_parse_from(["cryptkit", "encrypt", "hello", "-p", "pw"]).unwrap();
        match cli.command {
            Commands::Encrypt { text, passphrase } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(passphrase.as_deref(), Some("pw"));
            }
            _ => panic!("expected encrypt"),
        }
        assert_eq!(cli.config_dir, ".");
    }

    #[test]
    fn digest_rejects_data_and_file_together() {
        let result = Cli::try_parse_from(["cryptkit", "digest", "abc", "--file", "x.bin"]);
        assert!(result.is_err());
    }

    #[test]
    fn inline_text_wins() {
        assert_eq!(read_text(Some("abc"), "text").unwrap(), "abc");
    }

    #[test]
    fn read_data_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        std::fs::write(&path, [0u8, 1, 2]).unwrap();

        let data = read_data(None, path.to_str()).unwrap();
        assert_eq!(data, vec![0u8, 1, 2]);
    }

    #[test]
    fn explicit_secret_is_used() {
        let secret = resolve_secret(Some("s3cret")).unwrap();
        assert_eq!(secret.as_str(), "s3cret");
    }

    #[test]
    fn hmac_secret_is_optional_on_the_command_line() {
        let cli = Cli::try_parse_from(["cryptkit", "hmac", "data"]).unwrap();
        match cli.command {
            Commands::Hmac { secret, .. } => assert!(secret.is_none()),
            _ => panic!("expected hmac"),
        }
    }

    #[test]
    fn explicit_passphrase_is_used() {
        let pw = resolve_passphrase(Some("hunter2"), false).unwrap();
        assert_eq!(pw.as_str(), "hunter2");
    }
}
