//! Domain layer for truss
//!
//! This crate contains the value objects that describe a scaffolded service.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Compute target**: serverless function or containerized service
//! - **Messaging platform**: gRPC, Service Bus, or JSON
//! - **Config keys**: the settings the configuration resolver understands,
//!   with their flag and environment variable names

pub mod config;
pub mod core;
pub mod scaffold;

// Re-export commonly used types
pub use config::{
    ComputeTarget, MessagingPlatform,
    config_key::{ConfigKeyInfo, env_keys, known_keys, lookup_key},
    validation::{ConfigIssue, ConfigIssueCode},
};
pub use core::error::DomainError;
pub use scaffold::GeneratedProject;
