//! Project generator port
//!
//! Defines the interface for emitting a scaffolded service. Generation is an
//! external collaborator: adapters live outside this workspace.

use crate::config::EffectiveConfig;
use thiserror::Error;
use truss_domain::GeneratedProject;

/// Errors that can occur while generating a project
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Template error: {0}")]
    Template(String),
}

/// Emits a project from an effective configuration
pub trait ProjectGenerator: Send + Sync {
    fn generate(&self, config: &EffectiveConfig) -> Result<GeneratedProject, GenerationError>;
}
