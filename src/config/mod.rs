//! Project-level configuration (`.cryptkit.toml`).

pub mod settings;

pub use settings::Settings;
