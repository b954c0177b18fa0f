//! Flag-provided configuration layer.

use serde::Serialize;
use truss_domain::{ComputeTarget, MessagingPlatform};

/// Values supplied explicitly on the command line.
///
/// Only fields that are `Some` take part in merging, so an omitted flag never
/// masks a value from the environment or a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<ComputeTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging: Option<MessagingPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_sink_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devops: Option<bool>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let overrides = ConfigOverrides {
            compute: Some(ComputeTarget::Func),
            ..Default::default()
        };
        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(json, serde_json::json!({ "compute": "func" }));
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigOverrides::default().is_empty());
        let overrides = ConfigOverrides {
            devops: Some(true),
            ..Default::default()
        };
        assert!(!overrides.is_empty());
    }
}
