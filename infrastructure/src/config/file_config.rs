//! Raw configuration data types
//!
//! [`FileConfig`] is the shape every layer (defaults, config file,
//! environment, flags) is merged into. Values stay as loosely typed strings
//! here; enumerated settings are parsed into domain types afterwards so a bad
//! value becomes a [`ConfigIssue`] rather than a load failure.
//!
//! # Example
//!
//! ```toml
//! compute = "container"            # "func" or "container"
//! messaging = "grpc"               # "grpc", "servicebus" or "json"
//! name = "orders"
//! input_source_name = "orders-in"
//! output_sink_name = "orders-out"
//! devops = true
//! ```

use serde::{Deserialize, Serialize};
use truss_application::EffectiveConfig;
use truss_domain::{ComputeTarget, ConfigIssue, MessagingPlatform};

/// Merged raw configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Compute target: "func" or "container"
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub compute: Option<String>,
    /// Messaging platform: "grpc", "servicebus" or "json"
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub messaging: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub input_source_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub output_sink_name: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub devops: bool,
}

impl FileConfig {
    /// Parse `compute`, returning a warning and no value when it is not a
    /// known compute target.
    pub fn parse_compute(&self) -> (Option<ComputeTarget>, Vec<ConfigIssue>) {
        match non_empty(&self.compute) {
            None => (None, vec![]),
            Some(raw) => match raw.parse::<ComputeTarget>() {
                Ok(target) => (Some(target), vec![]),
                Err(_) => (
                    None,
                    vec![ConfigIssue::invalid_enum(
                        "compute",
                        raw,
                        &ComputeTarget::NAMES,
                    )],
                ),
            },
        }
    }

    /// Parse `messaging`, returning a warning and no value when it is not a
    /// known messaging platform.
    pub fn parse_messaging(&self) -> (Option<MessagingPlatform>, Vec<ConfigIssue>) {
        match non_empty(&self.messaging) {
            None => (None, vec![]),
            Some(raw) => match raw.parse::<MessagingPlatform>() {
                Ok(platform) => (Some(platform), vec![]),
                Err(_) => (
                    None,
                    vec![ConfigIssue::invalid_enum(
                        "messaging",
                        raw,
                        &MessagingPlatform::NAMES,
                    )],
                ),
            },
        }
    }

    /// Convert into the application's [`EffectiveConfig`], collecting every
    /// validation issue.
    pub fn into_effective(self) -> (EffectiveConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (compute, compute_issues) = self.parse_compute();
        issues.extend(compute_issues);
        let (messaging, messaging_issues) = self.parse_messaging();
        issues.extend(messaging_issues);

        let config = EffectiveConfig::new()
            .with_compute(compute)
            .with_messaging(messaging)
            .with_name(non_empty(&self.name).unwrap_or_default())
            .with_input_source_name(non_empty(&self.input_source_name).unwrap_or_default())
            .with_output_sink_name(non_empty(&self.output_sink_name).unwrap_or_default())
            .with_devops(self.devops);

        (config, issues)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Deserializers that accept the loosely typed scalars environment
/// variables and hand-written files produce (`NAME=2024`, `DEVOPS=1`).
mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Int(i64),
        Float(f64),
        Str(String),
    }

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value.map(|scalar| match scalar {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Str(s) => s,
        }))
    }

    pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Scalar::deserialize(deserializer)? {
            Scalar::Bool(b) => Ok(b),
            Scalar::Int(0) => Ok(false),
            Scalar::Int(1) => Ok(true),
            Scalar::Str(s) => match s.trim().to_lowercase().as_str() {
                "" | "false" | "0" | "no" | "off" => Ok(false),
                "true" | "1" | "yes" | "on" => Ok(true),
                other => Err(D::Error::custom(format!(
                    "invalid boolean '{}' for devops",
                    other
                ))),
            },
            _ => Err(D::Error::custom("invalid boolean for devops")),
        }
    }
}
