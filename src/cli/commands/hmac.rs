//! `cryptkit hmac` and `cryptkit verify-hmac`.

use crate::cli::output;
use crate::cli::{load_settings, read_data, resolve_secret, Cli};
use crate::crypto::{generate_hmac, verify_hmac};
use crate::errors::Result;

/// Execute the `hmac` command: print the hex tag.
pub fn execute_generate(
    cli: &Cli,
    data: Option<&str>,
    secret: Option<&str>,
    algorithm: Option<&str>,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let algorithm = settings.mac_algorithm(algorithm)?;

    let secret = resolve_secret(secret)?;
    let data = read_data(data, None)?;
    let tag = generate_hmac(&data, &secret, algorithm)?;
    println!("{tag}");

    Ok(())
}

/// Execute the `verify-hmac` command.
///
/// Returns `Ok(false)` when the tag is well-formed but does not match.
pub fn execute_verify(
    cli: &Cli,
    data: Option<&str>,
    secret: Option<&str>,
    tag: &str,
    algorithm: Option<&str>,
) -> Result<bool> {
    let settings = load_settings(cli)?;
    let algorithm = settings.mac_algorithm(algorithm)?;

    let secret = resolve_secret(secret)?;
    let data = read_data(data, None)?;
    let valid = verify_hmac(&data, &secret, tag.trim(), algorithm)?;

    if valid {
        output::success(&format!("HMAC-{} is valid", algorithm.name().to_uppercase()));
    } else {
        output::error(&format!("HMAC-{} is invalid", algorithm.name().to_uppercase()));
    }

    Ok(valid)
}
