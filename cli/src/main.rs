//! CLI entrypoint for truss
//!
//! Parses flags, resolves the effective configuration once, and runs the
//! root command.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use truss_infrastructure::{ConfigLoader, ConfigSource, LoadedConfig};
use truss_presentation::{Cli, ConsoleFormatter, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (source, loaded) = init_config(cli)?;
    let config = &loaded.config;

    if cli.show_config {
        show_config(cli, source.as_ref(), &loaded);
        return Ok(());
    }

    info!(
        compute = ?config.compute(),
        messaging = ?config.messaging(),
        name = config.name(),
        devops = config.devops_enabled(),
        "Resolved configuration"
    );

    // The root command has no generation action of its own.
    Cli::command().print_help()?;
    Ok(())
}

/// Resolve the config source and merge every layer into the effective
/// configuration. Runs once, before the root command.
fn init_config(cli: &Cli) -> Result<(Option<ConfigSource>, LoadedConfig)> {
    let source = if cli.no_config {
        debug!("Config files disabled");
        None
    } else {
        Some(ConfigLoader::resolve_source(cli.config.as_deref())?)
    };

    let loaded = ConfigLoader::load(source.as_ref(), &cli.overrides())?;

    let json_output = cli.show_config && cli.output == OutputFormat::Json;
    if let Some(message) = ConsoleFormatter::config_file_message(&loaded.config, json_output) {
        println!("{}", message);
    }

    Ok((source, loaded))
}

fn show_config(cli: &Cli, source: Option<&ConfigSource>, loaded: &LoadedConfig) {
    match cli.output {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&loaded.config)),
        OutputFormat::Text => {
            ConfigLoader::print_config_sources(source);
            println!();
            print!("{}", ConsoleFormatter::format_config(&loaded.config));
            if !loaded.issues.is_empty() {
                println!();
                println!("{}", ConsoleFormatter::format_issues(&loaded.issues));
            }
        }
    }
}
