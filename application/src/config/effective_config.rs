//! Effective configuration.
//!
//! [`EffectiveConfig`] is the single merged view of flags, environment and
//! config file. It is built once at startup by the configuration loader and
//! handed to downstream logic by reference; nothing mutates it afterwards.

use serde::Serialize;
use std::path::{Path, PathBuf};
use truss_domain::{ComputeTarget, DomainError, MessagingPlatform};

/// Merged runtime configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    /// Path passed with `--config`, if any.
    config_file_path: Option<PathBuf>,
    /// Config file that was actually loaded, if any.
    config_file_used: Option<PathBuf>,
    compute: Option<ComputeTarget>,
    messaging: Option<MessagingPlatform>,
    name: String,
    input_source_name: String,
    output_sink_name: String,
    devops: bool,
}

impl EffectiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    pub fn config_file_used(&self) -> Option<&Path> {
        self.config_file_used.as_deref()
    }

    pub fn compute(&self) -> Option<ComputeTarget> {
        self.compute
    }

    pub fn messaging(&self) -> Option<MessagingPlatform> {
        self.messaging
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_source_name(&self) -> &str {
        &self.input_source_name
    }

    pub fn output_sink_name(&self) -> &str {
        &self.output_sink_name
    }

    pub fn devops_enabled(&self) -> bool {
        self.devops
    }

    /// Render a config key's value as a string, by its file key name.
    ///
    /// Unset optional values render as an empty string.
    pub fn value_of(&self, key: &str) -> Result<String, DomainError> {
        let value = match key {
            "compute" => self.compute.map(|c| c.to_string()).unwrap_or_default(),
            "messaging" => self.messaging.map(|m| m.to_string()).unwrap_or_default(),
            "name" => self.name.clone(),
            "input_source_name" => self.input_source_name.clone(),
            "output_sink_name" => self.output_sink_name.clone(),
            "devops" => self.devops.to_string(),
            other => return Err(DomainError::UnknownConfigKey(other.to_string())),
        };
        Ok(value)
    }

    // ==================== Builder Methods (init-time) ====================

    pub fn with_config_file_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_file_path = path;
        self
    }

    pub fn with_config_file_used(mut self, path: Option<PathBuf>) -> Self {
        self.config_file_used = path;
        self
    }

    pub fn with_compute(mut self, compute: Option<ComputeTarget>) -> Self {
        self.compute = compute;
        self
    }

    pub fn with_messaging(mut self, messaging: Option<MessagingPlatform>) -> Self {
        self.messaging = messaging;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_input_source_name(mut self, name: impl Into<String>) -> Self {
        self.input_source_name = name.into();
        self
    }

    pub fn with_output_sink_name(mut self, name: impl Into<String>) -> Self {
        self.output_sink_name = name.into();
        self
    }

    pub fn with_devops(mut self, enabled: bool) -> Self {
        self.devops = enabled;
        self
    }
}
