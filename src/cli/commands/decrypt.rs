//! `cryptkit decrypt` — open an envelope and print the plaintext.

use crate::cli::{load_settings, read_text, resolve_passphrase, Cli};
use crate::crypto::{decrypt_with, Scrypt};
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, envelope: Option<&str>, passphrase: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;

    let envelope = read_text(envelope, "envelope")?;
    let passphrase = resolve_passphrase(passphrase, false)?;

    let kdf = Scrypt::new(settings.scrypt_params());
    let plaintext = decrypt_with(&kdf, envelope.trim(), &passphrase)?;
    println!("{plaintext}");

    Ok(())
}
