//! `cryptkit encrypt` — encrypt text into an envelope.

use crate::cli::output;
use crate::cli::{load_settings, read_text, resolve_passphrase, Cli};
use crate::crypto::{encrypt_with, Scrypt};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, text: Option<&str>, passphrase: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;

    if text.is_some() {
        output::warning("Plaintext provided on command line — it may appear in shell history.");
    }
    let plaintext = read_text(text, "plaintext")?;
    let passphrase = resolve_passphrase(passphrase, true)?;

    let kdf = Scrypt::new(settings.scrypt_params());
    let envelope = encrypt_with(&kdf, &mut rand::rng(), &plaintext, &passphrase)?;

    // Bare output so it can be piped straight into `decrypt`.
    println!("{envelope}");

    output::tip("Decrypt with: cryptkit decrypt '<envelope>'");

    Ok(())
}
