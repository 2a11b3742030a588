//! One module per subcommand; each exposes an `execute` entry point.

pub mod completions;
pub mod decrypt;
pub mod digest;
pub mod encrypt;
pub mod hmac;
