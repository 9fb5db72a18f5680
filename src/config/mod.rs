//! Configuration loading.
//!
//! Settings come from an optional TOML file; command-line flags are layered
//! on top by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
