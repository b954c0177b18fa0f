//! Console output formatter for the effective configuration

use colored::Colorize;
use truss_application::EffectiveConfig;
use truss_domain::{ConfigIssue, known_keys};

/// Formats configuration for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Message announcing the config file that was read, if any.
    ///
    /// Suppressed when stdout carries JSON so it stays parseable.
    pub fn config_file_message(config: &EffectiveConfig, json: bool) -> Option<String> {
        if json {
            return None;
        }
        config
            .config_file_used()
            .map(|path| format!("Using config file: {}", path.display()))
    }

    /// Format the effective configuration, one key per line
    pub fn format_config(config: &EffectiveConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Effective configuration:".cyan().bold()));

        let file = config
            .config_file_used()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        output.push_str(&format!("  {:<18} {}\n", "config file", file));

        for info in known_keys() {
            let value = config.value_of(info.key).unwrap_or_default();
            let shown = if value.is_empty() {
                "(unset)".dimmed().to_string()
            } else {
                value.bold().to_string()
            };
            output.push_str(&format!("  {:<18} {}", info.key, shown));
            if !info.valid_values.is_empty() {
                let options = format!("[{}]", info.valid_values.join(", "));
                output.push_str(&format!(" {}", options.dimmed()));
            }
            output.push_str(&format!("  {}\n", format!("# {}", info.description).dimmed()));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(config: &EffectiveConfig) -> String {
        serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format validation issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| format!("{} {}", "warning:".yellow().bold(), issue.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use truss_domain::{ComputeTarget, MessagingPlatform};

    fn sample() -> EffectiveConfig {
        EffectiveConfig::new()
            .with_config_file_used(Some(PathBuf::from("/home/gopher/.truss.toml")))
            .with_compute(Some(ComputeTarget::Func))
            .with_messaging(Some(MessagingPlatform::Grpc))
            .with_name("orders")
    }

    #[test]
    fn test_format_config_lists_every_key() {
        let output = ConsoleFormatter::format_config(&sample());
        for info in known_keys() {
            assert!(output.contains(info.key), "missing {}", info.key);
        }
        assert!(output.contains("/home/gopher/.truss.toml"));
        assert!(output.contains("orders"));
        assert!(output.contains("func, container"));
        assert!(output.contains("(unset)"));
    }

    #[test]
    fn test_format_config_describes_keys() {
        let output = ConsoleFormatter::format_config(&sample());
        for info in known_keys() {
            assert!(output.contains(info.description), "missing {}", info.description);
        }
    }

    #[test]
    fn test_config_file_message() {
        assert_eq!(
            ConsoleFormatter::config_file_message(&sample(), false).as_deref(),
            Some("Using config file: /home/gopher/.truss.toml")
        );
    }

    #[test]
    fn test_config_file_message_without_file() {
        assert_eq!(
            ConsoleFormatter::config_file_message(&EffectiveConfig::new(), false),
            None
        );
    }

    #[test]
    fn test_config_file_message_suppressed_for_json() {
        assert_eq!(ConsoleFormatter::config_file_message(&sample(), true), None);
    }

    #[test]
    fn test_format_config_without_file() {
        let output = ConsoleFormatter::format_config(&EffectiveConfig::new());
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&sample());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["compute"], "func");
        assert_eq!(value["messaging"], "grpc");
        assert_eq!(value["config_file_used"], "/home/gopher/.truss.toml");
    }

    #[test]
    fn test_format_issues() {
        let issues = vec![ConfigIssue::invalid_enum(
            "compute",
            "lambda",
            &ComputeTarget::NAMES,
        )];
        let output = ConsoleFormatter::format_issues(&issues);
        assert!(output.contains("warning:"));
        assert!(output.contains("compute: unknown value 'lambda'"));
        assert_eq!(ConsoleFormatter::format_issues(&[]), "");
    }
}
