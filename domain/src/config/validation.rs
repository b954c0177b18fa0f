//! Configuration value validation.
//!
//! Values read from config files and the environment are free-form strings.
//! When one falls outside its enumeration, or a config file cannot be used,
//! the resolver records a structured issue instead of failing. Every issue is a
//! warning: the run continues with the offending value or file left out.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A value is not one of the accepted enumeration members.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A config file exists but could not be read or parsed.
    ConfigFileSkipped { path: String },
}

/// A detected issue in the resolved configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Warning for a value outside `valid_values`; the key is treated as unset.
    pub fn invalid_enum(field: &str, value: &str, valid_values: &[&str]) -> Self {
        Self {
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid_values.iter().map(|v| v.to_string()).collect(),
            },
            message: format!(
                "{}: unknown value '{}', expected one of: {}; leaving it unset",
                field,
                value,
                valid_values.join(", ")
            ),
        }
    }

    /// Warning for a config file that was found but not loaded.
    pub fn file_skipped(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let path = path.into();
        Self {
            message: format!("ignoring config file {}: {}", path, reason),
            code: ConfigIssueCode::ConfigFileSkipped { path },
        }
    }
}
