//! Infrastructure layer for truss
//!
//! This crate contains the adapters that read configuration from the
//! filesystem and the process environment.

pub mod config;

// Re-export commonly used types
pub use config::{
    CONFIG_BASE_NAME, ConfigError, ConfigFormat, ConfigLoader, ConfigSource, FileConfig,
    LoadedConfig,
};
