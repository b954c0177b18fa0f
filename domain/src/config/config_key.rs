//! Config key registry.
//!
//! Defines metadata for the configuration keys the resolver understands:
//! the key name used in config files, the flag that sets it, the environment
//! variable that overrides it, and its valid values. The environment layer
//! and `--show-config` are both driven from this table.

use super::{ComputeTarget, MessagingPlatform};

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Key as written in config files (e.g., `"input_source_name"`).
    pub key: &'static str,
    /// Long command-line flag that sets this key.
    pub flag: &'static str,
    /// Environment variable that overrides this key.
    pub env: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its file name.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

/// Environment variable names that map onto config keys.
pub fn env_keys() -> Vec<&'static str> {
    KNOWN_KEYS.iter().map(|k| k.env).collect()
}

static KNOWN_KEYS: [ConfigKeyInfo; 6] = [
    ConfigKeyInfo {
        key: "compute",
        flag: "--compute",
        env: "COMPUTE",
        description: "Compute target",
        valid_values: &ComputeTarget::NAMES,
    },
    ConfigKeyInfo {
        key: "messaging",
        flag: "--messaging",
        env: "MESSAGING",
        description: "Messaging platform",
        valid_values: &MessagingPlatform::NAMES,
    },
    ConfigKeyInfo {
        key: "name",
        flag: "--name",
        env: "NAME",
        description: "Name of the application",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "input_source_name",
        flag: "--input-source-name",
        env: "INPUT_SOURCE_NAME",
        description: "Name of the input source",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "output_sink_name",
        flag: "--output-sink-name",
        env: "OUTPUT_SINK_NAME",
        description: "Name of the output sink",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "devops",
        flag: "--devops",
        env: "DEVOPS",
        description: "Create registry and associated build tasks",
        valid_values: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_existing_key() {
        let info = lookup_key("compute").unwrap();
        assert_eq!(info.flag, "--compute");
        assert!(info.valid_values.contains(&"func"));
        assert!(info.valid_values.contains(&"container"));
    }

    #[test]
    fn test_lookup_nonexistent_key() {
        assert!(lookup_key("region").is_none());
    }

    #[test]
    fn test_env_names_are_uppercased_keys() {
        for info in known_keys() {
            assert_eq!(info.env, info.key.to_uppercase());
        }
    }

    #[test]
    fn test_flags_are_kebab_cased_keys() {
        for info in known_keys() {
            assert_eq!(info.flag, format!("--{}", info.key.replace('_', "-")));
        }
    }

    #[test]
    fn test_env_keys() {
        let keys = env_keys();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&"INPUT_SOURCE_NAME"));
    }
}
