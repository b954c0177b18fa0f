//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that adapters must implement.

pub mod project_generator;
