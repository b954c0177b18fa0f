//! Configuration loading errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The invoking user's home directory could not be determined.
    #[error("Could not resolve home directory; pass --config <PATH> to choose a config file")]
    HomeDirectory,

    #[error("Invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_directory_display() {
        assert!(ConfigError::HomeDirectory.to_string().contains("home directory"));
    }
}
