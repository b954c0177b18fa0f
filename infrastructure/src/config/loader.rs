//! Configuration loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use super::source::{ConfigFormat, ConfigSource};
use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use truss_application::{ConfigOverrides, EffectiveConfig};
use truss_domain::{ConfigIssue, env_keys, known_keys};

/// Result of a load: the effective configuration and any non-fatal issues
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: EffectiveConfig,
    pub issues: Vec<ConfigIssue>,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Decide which config file location this run consults.
    ///
    /// An explicit path is used verbatim. Otherwise the lookup is
    /// `~/.truss.<ext>`, and failing to find the home directory is fatal.
    pub fn resolve_source(explicit: Option<&Path>) -> Result<ConfigSource, ConfigError> {
        Self::resolve_source_with(explicit, dirs::home_dir)
    }

    /// [`resolve_source`](Self::resolve_source) with a custom home directory lookup
    pub fn resolve_source_with<F>(
        explicit: Option<&Path>,
        home_dir: F,
    ) -> Result<ConfigSource, ConfigError>
    where
        F: FnOnce() -> Option<PathBuf>,
    {
        if let Some(path) = explicit {
            return Ok(ConfigSource::Explicit(path.to_path_buf()));
        }

        let home = home_dir().ok_or(ConfigError::HomeDirectory)?;
        Ok(ConfigSource::home(home))
    }

    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Command-line flags (`overrides`)
    /// 2. Non-empty environment variables named after a config key (`COMPUTE`, `NAME`, ...)
    /// 3. The config file located by `source` (skipped when `None`)
    /// 4. Default values
    pub fn load(
        source: Option<&ConfigSource>,
        overrides: &ConfigOverrides,
    ) -> Result<LoadedConfig, ConfigError> {
        let mut issues = Vec::new();
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        let mut used = None;

        if let Some(source) = source {
            match source.locate() {
                Some(path) => match Self::file_layer(&path) {
                    Ok(layer) => {
                        info!("Loaded config file {}", path.display());
                        figment = figment.merge(layer);
                        used = Some(path);
                    }
                    Err(issue) => {
                        warn!("{}", issue.message);
                        issues.push(issue);
                    }
                },
                None => debug!("No config file at {}", source.base_path().display()),
            }
        }

        figment = figment
            .merge(Serialized::defaults(Self::environment_values()))
            .merge(Serialized::defaults(overrides));

        let raw: FileConfig = figment.extract().map_err(Box::new)?;
        let (config, value_issues) = raw.into_effective();
        for issue in &value_issues {
            warn!("{}", issue.message);
        }
        issues.extend(value_issues);

        let explicit = match source {
            Some(ConfigSource::Explicit(path)) => Some(path.clone()),
            _ => None,
        };
        let config = config
            .with_config_file_path(explicit)
            .with_config_file_used(used);

        Ok(LoadedConfig { config, issues })
    }

    /// Values of the config-key environment variables, exactly as set.
    ///
    /// Unset and empty variables are left out so they never mask a lower layer.
    fn environment_values() -> BTreeMap<&'static str, String> {
        known_keys()
            .iter()
            .filter_map(|info| {
                let value = std::env::var(info.env).ok()?;
                (!value.trim().is_empty()).then_some((info.key, value))
            })
            .collect()
    }

    /// Build a figment for a single config file, checking it parses.
    fn file_layer(path: &Path) -> Result<Figment, ConfigIssue> {
        let display = path.display().to_string();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigIssue::file_skipped(&display, "unsupported config file type"))?;

        // Relative paths would otherwise be searched for in parent directories.
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let layer = match format {
            ConfigFormat::Json => Figment::from(Json::file(&absolute)),
            ConfigFormat::Toml => Figment::from(Toml::file(&absolute)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(&absolute)),
        };

        layer
            .extract::<FileConfig>()
            .map_err(|e| ConfigIssue::file_skipped(&display, e))?;
        Ok(layer)
    }

    /// Describe the config sources for this run, highest priority first
    pub fn config_source_lines(source: Option<&ConfigSource>) -> Vec<String> {
        let mut lines = vec!["  [FLAGS] command-line flags".to_string()];

        let set_env: Vec<_> = env_keys()
            .into_iter()
            .filter(|key| std::env::var(key).is_ok_and(|v| !v.trim().is_empty()))
            .collect();
        if set_env.is_empty() {
            lines.push(format!("  [     ] Env:     {}", env_keys().join(", ")));
        } else {
            lines.push(format!("  [FOUND] Env:     {}", set_env.join(", ")));
        }

        match source {
            None => lines.push("  [     ] File:    disabled (--no-config)".to_string()),
            Some(source) => {
                let found = source.locate();
                for candidate in source.candidates() {
                    let mark = if found.as_ref() == Some(&candidate) {
                        "FOUND"
                    } else {
                        "     "
                    };
                    lines.push(format!("  [{}] File:    {}", mark, candidate.display()));
                }
            }
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }

    /// Print the config sources being used (for debugging)
    pub fn print_config_sources(source: Option<&ConfigSource>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_source_lines(source) {
            println!("{}", line);
        }
    }
}
