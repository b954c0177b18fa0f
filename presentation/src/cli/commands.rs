//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use truss_application::ConfigOverrides;
use truss_domain::{ComputeTarget, MessagingPlatform};

/// Output format for `--show-config`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for truss
#[derive(Parser, Debug)]
#[command(name = "truss")]
#[command(author, version, about = "Generate scaffolded services.")]
#[command(long_about = r#"
Generate scaffolded services.

Settings are resolved from (in priority order):
1. Command-line flags
2. Environment variables named after a setting (COMPUTE, MESSAGING, NAME,
   INPUT_SOURCE_NAME, OUTPUT_SINK_NAME, DEVOPS)
3. --config <path>, or else $HOME/.truss.{json,toml,yaml,yml}

Example:
  truss --compute container --messaging grpc --name orders
  truss --config ./truss.yaml --show-config
"#)]
pub struct Cli {
    /// Config file (default is $HOME/.truss.{json,toml,yaml,yml})
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "TARGET",
        value_parser = ComputeTarget::from_str,
        help = format!("Compute target - Options: {}", ComputeTarget::options())
    )]
    pub compute: Option<ComputeTarget>,

    #[arg(
        long,
        value_name = "PLATFORM",
        value_parser = MessagingPlatform::from_str,
        help = format!("Messaging platform - Options: {}", MessagingPlatform::options())
    )]
    pub messaging: Option<MessagingPlatform>,

    /// Name of the application
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Name of the input source
    #[arg(long, value_name = "NAME")]
    pub input_source_name: Option<String>,

    /// Name of the output sink
    #[arg(long, value_name = "NAME")]
    pub output_sink_name: Option<String>,

    /// Create registry and associated build tasks
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub devops: Option<bool>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

impl Cli {
    /// Settings supplied explicitly on the command line.
    ///
    /// Empty strings and an absent `--devops` are not overrides;
    /// `--devops=false` is.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            compute: self.compute,
            messaging: self.messaging,
            name: non_empty(&self.name),
            input_source_name: non_empty(&self.input_source_name),
            output_sink_name: non_empty(&self.output_sink_name),
            devops: self.devops,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["truss"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.compute.is_none());
        assert!(cli.devops.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(cli.overrides().is_empty());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "truss",
            "--config",
            "dev.toml",
            "--compute",
            "func",
            "--messaging",
            "servicebus",
            "--name",
            "orders",
            "--input-source-name",
            "orders-in",
            "--output-sink-name",
            "orders-out",
            "--devops",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("dev.toml")));
        let overrides = cli.overrides();
        assert_eq!(overrides.compute, Some(ComputeTarget::Func));
        assert_eq!(overrides.messaging, Some(MessagingPlatform::ServiceBus));
        assert_eq!(overrides.name.as_deref(), Some("orders"));
        assert_eq!(overrides.input_source_name.as_deref(), Some("orders-in"));
        assert_eq!(overrides.output_sink_name.as_deref(), Some("orders-out"));
        assert_eq!(overrides.devops, Some(true));
    }

    #[test]
    fn test_devops_accepts_explicit_value() {
        let cli = Cli::try_parse_from(["truss", "--devops=false"]).unwrap();
        assert_eq!(cli.overrides().devops, Some(false));

        let cli = Cli::try_parse_from(["truss", "--devops=true"]).unwrap();
        assert_eq!(cli.overrides().devops, Some(true));
    }

    #[test]
    fn test_devops_rejects_non_boolean() {
        assert!(Cli::try_parse_from(["truss", "--devops=maybe"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_compute() {
        let err = Cli::try_parse_from(["truss", "--compute", "lambda"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_rejects_unknown_messaging() {
        assert!(Cli::try_parse_from(["truss", "--messaging", "kafka"]).is_err());
    }

    #[test]
    fn test_empty_name_is_not_an_override() {
        let cli = Cli::try_parse_from(["truss", "--name", ""]).unwrap();
        assert!(cli.overrides().name.is_none());
    }

    #[test]
    fn test_no_config_conflicts_with_config() {
        assert!(Cli::try_parse_from(["truss", "--no-config", "--config", "a.toml"]).is_err());
    }

    #[test]
    fn test_help_lists_options() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Options: func, container"));
        assert!(help.contains("Options: grpc, servicebus, json"));
        assert!(help.contains("$HOME/.truss.{json,toml,yaml,yml}"));
    }
}
