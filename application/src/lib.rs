//! Application layer for truss
//!
//! This crate contains the effective configuration, port definitions and
//! use cases. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigOverrides, EffectiveConfig};
pub use ports::project_generator::{GenerationError, ProjectGenerator};
pub use use_cases::scaffold_service::{ScaffoldError, ScaffoldServiceUseCase};
