//! Application-level configuration.
//!
//! - [`EffectiveConfig`] — the merged, read-only configuration for one run
//! - [`ConfigOverrides`] — the command-line layer fed into the merge

pub mod effective_config;
pub mod overrides;

pub use effective_config::EffectiveConfig;
pub use overrides::ConfigOverrides;
