use clap::Parser;
use cryptkit::cli::commands::{completions, decrypt, digest, encrypt, hmac};
use cryptkit::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Ok(false) means a verify/compare ran cleanly but did not match.
    let result = match cli.command {
        Commands::Encrypt {
            ref text,
            ref passphrase,
        } => encrypt::execute(&cli, text.as_deref(), passphrase.as_deref()).map(|()| true),
        Commands::Decrypt {
            ref envelope,
            ref passphrase,
        } => decrypt::execute(&cli, envelope.as_deref(), passphrase.as_deref()).map(|()| true),
        Commands::Hmac {
            ref data,
            ref secret,
            ref algorithm,
        } => hmac::execute_generate(&cli, data.as_deref(), secret.as_deref(), algorithm.as_deref())
            .map(|()| true),
        Commands::VerifyHmac {
            ref data,
            ref secret,
            ref tag,
            ref algorithm,
        } => hmac::execute_verify(
            &cli,
            data.as_deref(),
            secret.as_deref(),
            tag,
            algorithm.as_deref(),
        ),
        Commands::Digest {
            ref data,
            ref algorithm,
            ref file,
        } => digest::execute_digest(&cli, data.as_deref(), algorithm.as_deref(), file.as_deref())
            .map(|()| true),
        Commands::CompareHash {
            ref data,
            ref hash,
            ref algorithm,
            ref file,
        } => digest::execute_compare(
            &cli,
            data.as_deref(),
            hash,
            algorithm.as_deref(),
            file.as_deref(),
        ),
        Commands::Completions { ref shell } => completions::execute(shell).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            cryptkit::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
