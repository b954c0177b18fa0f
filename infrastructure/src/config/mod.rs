//! Configuration file loading for truss
//!
//! This module handles config file discovery and merging of configuration
//! from multiple sources. The priority order (highest to lowest):
//!
//! 1. Command-line flags
//! 2. Environment variables named after a config key
//! 3. `--config <path>`, or else `~/.truss.{json,toml,yaml,yml}`
//! 4. Default values
//!
//! Exactly one config file location is consulted per run.

mod error;
mod file_config;
mod loader;
mod source;

pub use error::ConfigError;
pub use file_config::FileConfig;
pub use loader::{ConfigLoader, LoadedConfig};
pub use source::{CONFIG_BASE_NAME, ConfigFormat, ConfigSource};
