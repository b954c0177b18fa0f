//! Config file discovery
//!
//! A run consults exactly one config file location: either the path given
//! with `--config`, or `.truss.<ext>` in the user's home directory.

use std::path::{Path, PathBuf};

/// Base file name searched for in the home directory.
pub const CONFIG_BASE_NAME: &str = ".truss";

/// Supported config file formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Extensions tried, in order, when searching for the default file.
    pub const SEARCH_EXTENSIONS: [&'static str; 4] = ["json", "toml", "yaml", "yml"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where the config file for this run is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path supplied with `--config`, used verbatim.
    Explicit(PathBuf),
    /// `<dir>/<base_name>.<ext>` for each supported extension.
    Search {
        dir: PathBuf,
        base_name: &'static str,
    },
}

impl ConfigSource {
    /// Default search in the given home directory.
    pub fn home(dir: PathBuf) -> Self {
        ConfigSource::Search {
            dir,
            base_name: CONFIG_BASE_NAME,
        }
    }

    /// The explicit path, or the extensionless base lookup name.
    pub fn base_path(&self) -> PathBuf {
        match self {
            ConfigSource::Explicit(path) => path.clone(),
            ConfigSource::Search { dir, base_name } => dir.join(base_name),
        }
    }

    /// Every path this source may load from, in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            ConfigSource::Explicit(path) => vec![path.clone()],
            ConfigSource::Search { dir, base_name } => ConfigFormat::SEARCH_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", base_name, ext)))
                .collect(),
        }
    }

    /// First candidate that exists as a regular file.
    pub fn locate(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|path| path.is_file())
    }
}
