//! `cryptkit digest` and `cryptkit compare-hash`.

use crate::cli::output;
use crate::cli::{load_settings, read_data, Cli};
use crate::crypto::{compare_hash, hash_digest};
use crate::errors::Result;

/// Execute the `digest` command: print the hex digest.
pub fn execute_digest(
    cli: &Cli,
    data: Option<&str>,
    algorithm: Option<&str>,
    file: Option<&str>,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let algorithm = settings.hash_algorithm(algorithm)?;

    let data = read_data(data, file)?;
    println!("{}", hash_digest(&data, algorithm));

    Ok(())
}

/// Execute the `compare-hash` command.
///
/// Returns `Ok(false)` when the digest is well-formed but does not match.
pub fn execute_compare(
    cli: &Cli,
    data: Option<&str>,
    hash: &str,
    algorithm: Option<&str>,
    file: Option<&str>,
) -> Result<bool> {
    let settings = load_settings(cli)?;
    let algorithm = settings.hash_algorithm(algorithm)?;

    let data = read_data(data, file)?;
    let matched = compare_hash(&data, hash.trim(), algorithm)?;

    if matched {
        output::success(&format!("{algorithm} digest matches"));
    } else {
        output::error(&format!("{algorithm} digest does not match"));
    }

    Ok(matched)
}
